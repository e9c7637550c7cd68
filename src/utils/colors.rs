/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Empty values ("" or "--:--") are printed grey, everything else as-is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" || value.trim() == "(none)" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Total hours colour: nothing logged → grey, otherwise green.
pub fn color_for_hours(hours: f64) -> &'static str {
    if hours > 0.0 { GREEN } else { GREY }
}
