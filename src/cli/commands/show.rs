use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::DayView;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::header;
use crate::utils::colors::{RED, RESET, color_for_hours, colorize_optional};
use crate::utils::date::{format_display_date, to_key};
use crate::utils::formatting::{bold, format_hours, mins2readable};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, store: &Store) -> AppResult<()> {
    if matches!(cmd, Commands::Show) {
        render(store, cfg)?;
    }
    Ok(())
}

/// Print everything recorded for today.
pub fn render(store: &Store, cfg: &Config) -> AppResult<()> {
    let view = DayView::load(store, &cfg.planned_marker)?;

    println!();
    header(format!(
        "📅 DailyLog {}",
        format_display_date(&to_key(view.today))
    ));

    //
    // Work log, sorted by start time
    //
    let total = match view.total_hours {
        Some(h) => format!("{}{} h{}", color_for_hours(h), format_hours(h), RESET),
        None => format!("{RED}? h (invalid time in a log entry){RESET}"),
    };
    println!("✔️  Today's work log: {}", bold(&total));

    if view.rows.is_empty() {
        println!("   {}", colorize_optional("(none)"));
    } else {
        let mut table = Table::new(vec![
            Column::new("#", 2),
            Column::new("START", 5),
            Column::new("END", 5),
            Column::new("TIME", 5),
            Column::new("DESCRIPTION", 11),
        ])
        .with_separator(&cfg.separator_char);

        for row in &view.rows {
            table.add_row(vec![
                row.position.to_string(),
                row.entry.start.clone(),
                row.entry.end.clone(),
                row.minutes
                    .map(|m| mins2readable(m, true))
                    .unwrap_or_else(|| "--:--".to_string()),
                row.entry.desc.clone(),
            ]);
        }
        print!("{}", table.render());
    }

    //
    // References
    //
    println!();
    print_refs("📌 Today's Jira:", &view.jira);
    print_refs("📍 Next Jira:", &view.next_jira);
    println!("📆 Next date: {}", view.next_date);

    //
    // Status post
    //
    if let Some(post) = &view.post {
        println!();
        println!("📍 Status post:");
        println!("{post}");
    }

    Ok(())
}

fn print_refs(title: &str, refs: &[String]) {
    println!("{title}");
    if refs.is_empty() {
        println!("   {}", colorize_optional("(none)"));
    }
    for (i, link) in refs.iter().enumerate() {
        println!("   {}. {}", i + 1, link);
    }
}
