//! Screen layout and help text.

use crate::entropy;
use crate::pass::CharClass;
use crate::terminal::{
    ACCENT, BOLD, BOX_INNER, DIM, GREEN, RED, RESET, console_width, fmt_box_bottom, fmt_box_line,
    fmt_box_line_center, fmt_box_opt, fmt_box_top, fmt_rule, slider_bar,
};

use super::state::{CopyFeedback, Focus, PLACEHOLDER, UiState};

const SLIDER_WIDTH: usize = 50;

/// Render the whole interactive screen as lines.
pub fn render(state: &UiState) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(fmt_box_top("pwforge"));
    match state.password() {
        Some(password) => {
            for chunk in password.as_bytes().chunks(BOX_INNER - 2) {
                // Safety: passwords are ASCII
                let chunk = unsafe { std::str::from_utf8_unchecked(chunk) };
                lines.push(fmt_box_line(&format!("  {BOLD}{chunk}{RESET}")));
            }
        }
        None => lines.push(fmt_box_line_center(&format!("{DIM}{PLACEHOLDER}{RESET}"))),
    }
    lines.push(fmt_box_line(&copy_hint(state)));
    lines.push(fmt_rule());

    let marker = |focus: Focus| if state.focus == focus { ">" } else { " " };
    lines.push(fmt_box_line(&format!(
        "{} Length: {BOLD}{}{RESET}",
        marker(Focus::Length),
        state.length
    )));
    lines.push(fmt_box_line(&format!(
        "  {:>3} {} {}",
        state.min_length,
        slider_bar(state.length, state.min_length, state.max_length, SLIDER_WIDTH),
        state.max_length
    )));
    lines.push(fmt_rule());

    for (i, class) in CharClass::ALL.into_iter().enumerate() {
        let checked = state.classes.contains(class);
        let box_mark = match (checked, state.is_locked(class)) {
            (true, true) => format!("{DIM}[x]{RESET}"),
            (true, false) => format!("{ACCENT}[x]{RESET}"),
            (false, _) => "[ ]".to_string(),
        };
        lines.push(fmt_box_line(&format!(
            "{} {} {}) {}",
            marker(Focus::Class(class)),
            box_mark,
            i + 1,
            class.label()
        )));
    }
    lines.push(fmt_rule());
    lines.push(fmt_box_line(&format!(
        "{DIM}Charset: {} chars • Source: {}{RESET}",
        state.classes.charset_size(),
        entropy::source_name()
    )));
    if let Some(status) = &state.status {
        lines.push(fmt_box_line(status));
    }
    lines.push(fmt_box_bottom());
    lines.push(format!(
        "{DIM} [Enter] Generate  [←/→] Length  [1-4] Toggle  [c] Copy  [s] Save  [h] Help  [q] Quit{RESET}"
    ));

    if state.show_help {
        lines.push(String::new());
        lines.extend(help_lines());
    }

    lines
}

fn copy_hint(state: &UiState) -> String {
    if !state.is_generated() {
        return String::new();
    }
    let text = match &state.copy_feedback {
        CopyFeedback::Idle => format!("{DIM}Press c to copy{RESET}"),
        CopyFeedback::Copied { .. } => format!("{GREEN}Copied{RESET}"),
        CopyFeedback::Failed { reason, .. } => format!("{RED}Copy failed: {reason}{RESET}"),
    };
    let padding = BOX_INNER.saturating_sub(console_width(&text));
    format!("{}{}", " ".repeat(padding), text)
}

/// Help box as lines, shared by the CLI and the interactive screen.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        fmt_box_top("pwforge"),
        fmt_box_line_center("Password generator"),
        fmt_box_line(""),
        fmt_box_line("USAGE:"),
        fmt_box_line("  pwforge                 Interactive screen"),
        fmt_box_line("  pwforge [OPTIONS]       Generate without the screen"),
        fmt_box_line(""),
        fmt_box_line("OPTIONS:"),
    ];
    for (flag, desc) in OPTIONS {
        lines.extend(fmt_box_opt(flag, desc));
    }
    lines.push(fmt_box_line(""));
    lines.push(fmt_box_line("KEYS (interactive):"));
    for (flag, desc) in KEYS {
        lines.extend(fmt_box_opt(flag, desc));
    }
    lines.push(fmt_box_bottom());
    lines
}

const OPTIONS: &[(&str, &str)] = &[
    ("  -l, --length <N>", "Characters per password (default: 16)"),
    ("  -n, --number <N>", "How many passwords to generate (default: 1)"),
    ("      --lower", "Include a-z"),
    ("      --upper", "Include A-Z"),
    ("      --digits", "Include 0-9"),
    ("      --symbols", "Include ~!@#$%^&*()_+{}\":?><;.,"),
    ("", "Without class flags all four classes are used, or the saved ones with -s."),
    ("  -s, --saved", "Start from the settings saved in the interactive screen"),
    ("  -b, --board", "Copy to the clipboard instead of printing"),
    ("  -o, --output [PATH]", "Append to a file (default: pwforge.txt)"),
    ("  -i, --interactive", "Open the interactive screen with these options"),
    ("  -q, --quiet", "Suppress warnings and confirmations"),
    ("  -h, --help", "Show this help"),
    ("  -v, --version", "Show version"),
];

const KEYS: &[(&str, &str)] = &[
    ("  Enter / g", "Generate"),
    ("  Left / Right", "Length -1 / +1"),
    ("  PgDn / PgUp", "Length -4 / +4"),
    ("  1 2 3 4", "Toggle lowercase, uppercase, numbers, symbols"),
    ("  Up / Down, Space", "Move focus, toggle the focused class"),
    ("  c", "Copy the shown password"),
    ("  s", "Save length and classes as defaults"),
    ("  q / Esc", "Quit"),
];

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}
