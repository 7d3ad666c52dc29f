//! Terminal output utilities.
//!
//! Box drawing, slider bar, ANSI helpers. Box helpers return lines so the
//! raw-mode screen can join them with `\r\n` itself.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[90m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ACCENT: &str = "\x1b[38;5;105m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

pub fn show_cursor() {
    print!("\x1b[?25h");
    flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Write a full screen of lines from the top-left, raw-mode safe.
pub fn draw_screen(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = out.write_all(b"\x1b[H\x1b[2J");
    for line in lines {
        let _ = out.write_all(line.as_bytes());
        let _ = out.write_all(b"\r\n");
    }
    let _ = out.flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const BOX_INNER: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn fmt_box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn fmt_box_line(content: &str) -> String {
    let display_len = console_width(content);
    let padding = BOX_INNER.saturating_sub(display_len);
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn fmt_box_line_center(content: &str) -> String {
    let total_padding = BOX_INNER.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

pub fn fmt_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

pub fn fmt_box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Help option rows: flag column plus word-wrapped description.
pub fn fmt_box_opt(flag: &str, desc: &str) -> Vec<String> {
    let flag_col = 27;
    let desc_col = BOX_INNER - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    let mut rows = Vec::with_capacity(lines.len().max(1));
    match lines.split_first() {
        Some((first, rest)) => {
            rows.push(fmt_box_line(&format!("{flag_padded}{first}")));
            for line in rest {
                rows.push(fmt_box_line(&format!("{indent}{line}")));
            }
        }
        None => rows.push(fmt_box_line(&flag_padded)),
    }
    rows
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Slider
// ============================================================================

/// Percentage of the track covered at `value` within `min..=max`.
pub fn slider_percent(value: usize, min: usize, max: usize) -> f64 {
    if max <= min {
        return 100.0;
    }
    let value = value.clamp(min, max);
    100.0 * (value - min) as f64 / (max - min) as f64
}

/// Filled track for a range slider: accent fill up to the value, dim rest.
pub fn slider_bar(value: usize, min: usize, max: usize, width: usize) -> String {
    let filled = ((slider_percent(value, min, max) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "{ACCENT}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}
