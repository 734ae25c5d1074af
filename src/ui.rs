use std::io::IsTerminal;

// SGR codes: cyan accent for marks and headings, bold for labels.
const ACCENT: &str = "36";
const LABEL: &str = "1";
const HEADING: &str = "1;36";

/// Color only on a terminal, and never when `NO_COLOR` is set.
fn color_enabled() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn styled(text: &str, sgr: &str) -> String {
    if !color_enabled() {
        return text.to_string();
    }
    format!("\x1b[{}m{}\x1b[0m", sgr, text)
}

pub fn heading(text: &str) -> String {
    styled(text, HEADING)
}

/// `• label value`
pub fn stat_line(label: &str, value: &str) -> String {
    format!("{} {} {}", styled("•", ACCENT), styled(label, LABEL), value)
}
