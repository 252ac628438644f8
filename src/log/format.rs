//! Log line layout and color palettes.
//!
//! A line looks like
//!
//! ```text
//! 2026-10-18T09:30:00.000Z Water(v1.0.0) [db]:
//!   first message line
//!   second message line
//! ```

use super::app::AppInfo;
use anstyle::{AnsiColor, Color, Style};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Log severities, each with its own palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn palette(self) -> Palette {
        match self {
            Self::Info => INFO,
            Self::Warn => WARN,
            Self::Error => ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// Styles for the three parts of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub header: Style,
    pub message: Style,
    pub tag: Style,
}

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

const INFO: Palette = Palette {
    header: fg(AnsiColor::Green),
    message: fg(AnsiColor::White),
    tag: fg(AnsiColor::Cyan).bold(),
};

const WARN: Palette = Palette {
    header: fg(AnsiColor::Yellow),
    message: fg(AnsiColor::BrightYellow),
    tag: fg(AnsiColor::Magenta).bold(),
};

const ERROR: Palette = Palette {
    header: fg(AnsiColor::Red),
    message: fg(AnsiColor::BrightRed),
    tag: fg(AnsiColor::Magenta).bold(),
};

fn paint(style: Style, text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style.render(), text, style.render_reset())
    } else {
        text.to_string()
    }
}

/// ISO-8601 UTC timestamp with millisecond precision.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render one log entry. An absent tag still renders `[]`, and every
/// message line is indented by two spaces (and colored on its own).
pub fn format_line(
    app: &AppInfo,
    severity: Severity,
    tag: Option<&str>,
    message: &str,
    color: bool,
    at: DateTime<Utc>,
) -> String {
    let palette = severity.palette();
    let header = format!("{} {}", timestamp(at), app.signature());
    let tag = format!("[{}]", tag.unwrap_or_default());

    let body: Vec<String> = message
        .split('\n')
        .map(|line| format!("  {}", paint(palette.message, line, color)))
        .collect();

    format!(
        "{} {}: \n{}",
        paint(palette.header, &header, color),
        paint(palette.tag, &tag, color),
        body.join("\n")
    )
}

/// Message body announcing a committed transition.
pub fn transition_message(event: &str, label: Option<&str>, from: &str, to: &str) -> String {
    match label {
        Some(label) => format!("Transition ({event} in {label}) : [{from}] -> [{to}]"),
        None => format!("Transition ({event}) : [{from}] -> [{to}]"),
    }
}
