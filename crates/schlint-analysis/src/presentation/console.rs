//! ANSI console styling of presentation channels.

use crate::diagnostics::Severity;

/// Width at which rule descriptions are wrapped.
pub const DESCRIPTION_WIDTH: usize = 100;

/// Visual channel a line is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Library headers.
    Heading,
    /// Component headers.
    Progress,
    Neutral,
    Cautionary,
    Alarming,
    Affirming,
}

impl Channel {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Info => Self::Neutral,
            Severity::Warning => Self::Cautionary,
            Severity::Error => Self::Alarming,
            Severity::Success => Self::Affirming,
        }
    }

    fn color_start(&self) -> &'static str {
        match self {
            Self::Heading => "\x1b[35m",    // purple
            Self::Progress => "\x1b[32m",   // green
            Self::Neutral => "\x1b[36m",    // cyan
            Self::Cautionary => "\x1b[33m", // yellow
            Self::Alarming => "\x1b[31m",   // red
            Self::Affirming => "\x1b[92m",  // light green
        }
    }
}

const COLOR_END: &str = "\x1b[0m";

/// Render one line: indentation, then the text wrapped in the channel color.
pub fn styled(channel: Channel, indent: usize, text: &str, use_color: bool) -> String {
    let pad = " ".repeat(indent);
    if use_color {
        format!("{pad}{}{text}{COLOR_END}", channel.color_start())
    } else {
        format!("{pad}{text}")
    }
}

/// Greedy word wrap. A single word longer than `width` gets its own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_channel() {
        assert_eq!(Channel::for_severity(Severity::Info), Channel::Neutral);
        assert_eq!(Channel::for_severity(Severity::Warning), Channel::Cautionary);
        assert_eq!(Channel::for_severity(Severity::Error), Channel::Alarming);
        assert_eq!(Channel::for_severity(Severity::Success), Channel::Affirming);
    }

    #[test]
    fn styled_without_color_is_plain() {
        assert_eq!(styled(Channel::Alarming, 2, "boom", false), "  boom");
        assert_eq!(
            styled(Channel::Alarming, 0, "boom", true),
            "\x1b[31mboom\x1b[0m"
        );
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("aaa bbb ccc dddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc", "dddd"]);
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("superlongword x", 4), vec!["superlongword", "x"]);
    }
}
