use colored::Colorize;
use passgen::api::{ClipboardStatus, GenOutcome};

const PROGRAM_NAME: &str = "Password Generator";
const BANNER_RULE: usize = 7;

fn opening_banner() -> String {
    let rule = "-".repeat(BANNER_RULE);
    format!("{} {} {}", rule, PROGRAM_NAME, rule)
}

fn closing_banner() -> String {
    "-".repeat(opening_banner().len())
}

fn info_line(status: &ClipboardStatus) -> &'static str {
    match status {
        ClipboardStatus::Copied => "Info: Copied to clipboard",
        ClipboardStatus::Disabled => "Info: Copy to clipboard disabled",
        ClipboardStatus::Failed(_) => "Info: Copy to clipboard failed",
    }
}

/// The four output lines: banner, clipboard info, password, closing rule.
pub(super) fn render_outcome(outcome: &GenOutcome) -> String {
    let info = info_line(&outcome.clipboard);
    let info = match outcome.clipboard {
        ClipboardStatus::Copied => info.green(),
        ClipboardStatus::Disabled => info.dimmed(),
        ClipboardStatus::Failed(_) => info.yellow(),
    };

    format!(
        "{}\n{}\n{}\n{}\n",
        opening_banner().bold(),
        info,
        outcome.password,
        closing_banner().bold()
    )
}

pub(super) fn print_outcome(outcome: &GenOutcome) {
    if let ClipboardStatus::Failed(reason) = &outcome.clipboard {
        eprintln!(
            "{}",
            format!("Warning: Failed to copy to clipboard: {}", reason).yellow()
        );
    }
    print!("{}", render_outcome(outcome));
}
