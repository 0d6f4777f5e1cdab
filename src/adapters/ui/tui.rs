//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Each loop iteration draws the current `AppState`, collects input for its screen,
//! and replaces the state with the reduced one.

use crate::adapters::ui::render::{self, ViewOptions};
use crate::domain::grades::is_acceptable_input;
use crate::domain::{DomainError, GradeSlot, Screen};
use crate::ports::InputPort;
use crate::usecases::{AppEvent, AppState, AuthService, LoginOutcome};
use async_trait::async_trait;
use inquire::validator::Validation;
use inquire::{CustomUserError, InquireError, Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Continue,
    Calculate,
    NewGrades,
    Logout,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Continue => "Continue to grade entry",
            MenuItem::Calculate => "Calculate average",
            MenuItem::NewGrades => "Enter new grades",
            MenuItem::Logout => "Log out",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn menu_for(screen: Screen) -> Vec<MenuItem> {
    match screen {
        Screen::Login => vec![],
        Screen::Welcome => vec![MenuItem::Continue, MenuItem::Quit],
        Screen::Grades => vec![MenuItem::Calculate, MenuItem::Logout, MenuItem::Quit],
        Screen::Result => vec![MenuItem::NewGrades, MenuItem::Logout, MenuItem::Quit],
    }
}

/// `None` means the session should end.
fn event_for(item: MenuItem) -> Option<AppEvent> {
    match item {
        MenuItem::Continue => Some(AppEvent::Continue),
        MenuItem::Calculate => Some(AppEvent::Calculate),
        MenuItem::NewGrades => Some(AppEvent::NewGrades),
        MenuItem::Logout => Some(AppEvent::Logout),
        MenuItem::Quit => None,
    }
}

fn grade_input_validator(input: &str) -> Result<Validation, CustomUserError> {
    if is_acceptable_input(input) {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid(
            "enter a number such as 7 or 8.5 (or leave it empty)".into(),
        ))
    }
}

/// Esc and Ctrl-C end the session instead of failing it.
fn answered<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Prompt(e.to_string())),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    auth: Arc<AuthService>,
    view: ViewOptions,
}

impl TuiInputPort {
    pub fn new(auth: Arc<AuthService>, view: ViewOptions) -> Self {
        Self { auth, view }
    }

    async fn login_step(&self, state: AppState) -> Result<Option<AppState>, DomainError> {
        let Some(email) = answered(
            Text::new("Email:")
                .with_initial_value(&state.email)
                .prompt(),
        )?
        else {
            return Ok(None);
        };
        let state = state.reduce(AppEvent::EmailEdited(email));

        let Some(password) = answered(
            Password::new("Password:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .with_display_toggle_enabled()
                .with_help_message("Ctrl+R shows or hides the password")
                .prompt(),
        )?
        else {
            return Ok(None);
        };
        let state = state.reduce(AppEvent::PasswordEdited(password));

        let event = match self.auth.login(&state.credential()).await? {
            LoginOutcome::Accepted(identity) => AppEvent::LoginAccepted(identity),
            LoginOutcome::Rejected(check) => AppEvent::LoginRejected(check.message),
        };
        Ok(Some(state.reduce(event)))
    }

    fn grades_step(&self, mut state: AppState) -> Result<Option<AppState>, DomainError> {
        for slot in GradeSlot::ALL {
            let label = format!("{}:", slot.label());
            let Some(value) = answered(
                Text::new(&label)
                    .with_initial_value(state.grades.get(slot))
                    .with_validator(grade_input_validator)
                    .prompt(),
            )?
            else {
                return Ok(None);
            };
            state = state.reduce(AppEvent::GradeEdited { slot, value });
        }
        self.menu_step(state)
    }

    fn menu_step(&self, state: AppState) -> Result<Option<AppState>, DomainError> {
        let Some(item) = answered(Select::new("Next:", menu_for(state.screen)).prompt())? else {
            return Ok(None);
        };
        Ok(event_for(item).map(|event| state.reduce(event)))
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut state = AppState::default();
        loop {
            render::draw(&render::screen_lines(&state, &self.view))?;

            let from = state.screen;
            let next = match from {
                Screen::Login => self.login_step(state).await?,
                Screen::Grades => self.grades_step(state)?,
                Screen::Welcome | Screen::Result => self.menu_step(state)?,
            };

            match next {
                Some(s) => {
                    if s.screen != from {
                        debug!(from = ?from, to = ?s.screen, "screen changed");
                    }
                    state = s;
                }
                None => {
                    info!("session ended by user");
                    return Ok(());
                }
            }
        }
    }
}
