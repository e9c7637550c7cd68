use crate::errors::AppResult;
use crate::store::Store;
use crate::store::oplog::{self, OpLogEntry};
use ansi_term::Colour;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "add_jira" | "add_next_jira" => Colour::Green,
        "del" | "del_jira" | "del_next_jira" | "prune" => Colour::Red,
        "edit" | "next_date" => Colour::Yellow,
        "carry" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// One printable line: `id: date | op (target) => message`.
pub fn format_entry(id: usize, entry: &OpLogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
    let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| entry.date.clone());

    let color = color_for_operation(&entry.operation);
    let mut op_target = color.paint(entry.operation.as_str()).to_string();
    if !entry.target.is_empty() {
        op_target.push_str(&format!(" ({})", entry.target));
    }

    // Truncate on visible characters, then recolour the operation only
    let visible = strip_ansi(&op_target);
    let shown = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        visible
    };
    let recolored = match shown.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(shown.as_str()).to_string(),
    };

    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).chars().count()));

    format!(
        "{:>id_w$}: {:<date_w$} | {}{} => {}",
        id,
        date,
        recolored,
        padding,
        entry.message,
        id_w = id_w,
        date_w = date_w
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &Store) -> AppResult<()> {
        let entries = oplog::read_all(store.oplog_path())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| {
                let target = if e.target.is_empty() { 0 } else { e.target.chars().count() + 3 };
                e.operation.chars().count() + target
            })
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();
        // %FT%T%:z → 2026-10-18T09:15:00+02:00
        let date_w = 25;

        println!("📜 Internal log:\n");

        for (i, entry) in entries.iter().enumerate() {
            println!("{}", format_entry(i + 1, entry, id_w, date_w, op_w));
        }

        Ok(())
    }
}
