//! Turns an `AppState` into styled lines, and prints them with crossterm.
//!
//! `screen_lines` is pure so the view can be checked without a terminal.

use crate::domain::{DomainError, Screen};
use crate::usecases::AppState;
use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{Write, stdout};

/// Display settings taken from `AppConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub show_demo_hint: bool,
    pub average_decimals: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_demo_hint: true,
            average_decimals: 2,
        }
    }
}

pub type Rgb = (u8, u8, u8);

/// Deep purple (#6200ee). Titles and the top of the banner.
pub const PRIMARY: Rgb = (0x62, 0x00, 0xee);
/// Green (#4caf50). Passed results and the bottom of the banner.
pub const SUCCESS: Rgb = (0x4c, 0xaf, 0x50);
/// Red (#f44336).
pub const ERROR: Rgb = (0xf4, 0x43, 0x36);

pub fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Body,
    Hint,
    Error,
    Success,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Title => rgb(PRIMARY),
            Tone::Body => Color::Reset,
            Tone::Hint => Color::DarkGrey,
            Tone::Error => rgb(ERROR),
            Tone::Success => rgb(SUCCESS),
        }
    }
}

pub type Line = (Tone, String);

pub fn format_average(average: f64, decimals: usize) -> String {
    format!("{average:.decimals$}")
}

pub fn screen_lines(state: &AppState, view: &ViewOptions) -> Vec<Line> {
    let mut lines: Vec<Line> = vec![(Tone::Title, format!("== {} ==", state.screen.title()))];

    match state.screen {
        Screen::Login => {
            lines.push((Tone::Body, "Enter your credentials".into()));
            if view.show_demo_hint {
                lines.push((
                    Tone::Hint,
                    "Demo: use any valid email and a password of at least 6 characters".into(),
                ));
            }
        }
        Screen::Welcome => {
            let name = state
                .user
                .as_ref()
                .map(|u| u.display_name.as_str())
                .unwrap_or_default();
            lines.push((Tone::Title, name.to_string()));
            lines.push((Tone::Body, "Grade Management System".into()));
            lines.push((
                Tone::Hint,
                "Enter your grades and get your average computed automatically".into(),
            ));
        }
        Screen::Grades => {
            lines.push((Tone::Body, "Enter your grades".into()));
            lines.push((Tone::Hint, "Scale from 0 to 10".into()));
        }
        Screen::Result => {
            if let Some(result) = state.result {
                let tone = if result.is_passed {
                    Tone::Success
                } else {
                    Tone::Error
                };
                lines.push((tone, format_average(result.average, view.average_decimals)));
                lines.push((tone, result.verdict().to_string()));
                lines.push((Tone::Body, result.remark().to_string()));
            }
        }
    }

    if let Some(error) = &state.error {
        lines.push((Tone::Error, format!("! {error}")));
    }
    lines
}

fn term(e: std::io::Error) -> DomainError {
    DomainError::Terminal(e.to_string())
}

/// Print each `(color, text)` pair on its own row, then flush.
pub fn paint<'a>(rows: impl IntoIterator<Item = (Color, &'a str)>) -> Result<(), DomainError> {
    let mut out = stdout();
    for (color, text) in rows {
        out.execute(SetForegroundColor(color)).map_err(term)?;
        out.execute(Print(text)).map_err(term)?;
        out.execute(Print("\r\n")).map_err(term)?;
        out.execute(ResetColor).map_err(term)?;
    }
    out.flush().map_err(term)
}

/// Print lines to stdout after a blank row, each in its tone's color.
pub fn draw(lines: &[Line]) -> Result<(), DomainError> {
    let blank = std::iter::once((Color::Reset, ""));
    paint(blank.chain(lines.iter().map(|(tone, text)| (tone.color(), text.as_str()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AverageResult, Identity};

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|(_, t)| t.as_str()).collect()
    }

    #[test]
    fn test_format_average() {
        assert_eq!(format_average(6.0, 2), "6.00");
        assert_eq!(format_average(7.3333333, 2), "7.33");
        assert_eq!(format_average(5.6, 0), "6");
    }

    #[test]
    fn test_login_hint_toggle() {
        let state = AppState::default();
        let with_hint = screen_lines(&state, &ViewOptions::default());
        assert!(texts(&with_hint).iter().any(|t| t.starts_with("Demo:")));

        let view = ViewOptions {
            show_demo_hint: false,
            ..ViewOptions::default()
        };
        let without = screen_lines(&state, &view);
        assert!(!texts(&without).iter().any(|t| t.starts_with("Demo:")));
    }

    #[test]
    fn test_error_line_last() {
        let state = AppState {
            error: Some("invalid email format".into()),
            ..AppState::default()
        };
        let lines = screen_lines(&state, &ViewOptions::default());
        let last = lines.last().unwrap();
        assert_eq!(last.0, Tone::Error);
        assert_eq!(last.1, "! invalid email format");
    }

    #[test]
    fn test_welcome_greets_user() {
        let state = AppState {
            screen: Screen::Welcome,
            user: Some(Identity {
                email: "ana@x.io".into(),
                display_name: "Ana".into(),
            }),
            ..AppState::default()
        };
        let lines = screen_lines(&state, &ViewOptions::default());
        assert!(texts(&lines).contains(&"Ana"));
    }

    #[test]
    fn test_result_lines() {
        let state = AppState {
            screen: Screen::Result,
            result: Some(AverageResult {
                average: 5.25,
                is_passed: false,
            }),
            ..AppState::default()
        };
        let lines = screen_lines(&state, &ViewOptions::default());
        let t = texts(&lines);
        assert!(t.contains(&"5.25"));
        assert!(t.contains(&"FAILED"));
        assert!(lines.iter().any(|(tone, text)| *tone == Tone::Error && text == "FAILED"));
    }

    #[test]
    fn test_tone_colors_follow_palette() {
        assert_eq!(Tone::Title.color(), rgb(PRIMARY));
        assert_eq!(Tone::Success.color(), rgb(SUCCESS));
        assert_eq!(Tone::Error.color(), rgb(ERROR));
    }
}
