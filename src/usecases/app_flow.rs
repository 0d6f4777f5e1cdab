//! Session view state and its reducer.
//!
//! The UI renders an `AppState`, turns user input into an `AppEvent`, and replaces
//! its state with `state.reduce(event)`. Reducing never performs I/O; the login
//! decision arrives as an event produced by `AuthService`.

use crate::domain::grades::is_acceptable_input;
use crate::domain::{AverageResult, Credential, GradeSet, GradeSlot, Identity, Nav, Screen};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub screen: Screen,
    pub email: String,
    pub password: String,
    pub user: Option<Identity>,
    pub grades: GradeSet,
    /// Message from the last failed submit; cleared by any edit.
    pub error: Option<String>,
    pub result: Option<AverageResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    EmailEdited(String),
    PasswordEdited(String),
    LoginAccepted(Identity),
    LoginRejected(String),
    Continue,
    GradeEdited { slot: GradeSlot, value: String },
    Calculate,
    NewGrades,
    Logout,
}

impl AppState {
    pub fn credential(&self) -> Credential {
        Credential::new(self.email.clone(), self.password.clone())
    }

    /// Apply one event. Events that make no sense on the current screen are ignored.
    pub fn reduce(self, event: AppEvent) -> AppState {
        match (self.screen, event) {
            (Screen::Login, AppEvent::EmailEdited(email)) => AppState {
                email,
                error: None,
                ..self
            },
            (Screen::Login, AppEvent::PasswordEdited(password)) => AppState {
                password,
                error: None,
                ..self
            },
            (Screen::Login, AppEvent::LoginRejected(message)) => AppState {
                error: Some(message),
                ..self
            },
            (Screen::Login, AppEvent::LoginAccepted(identity)) => {
                self.navigate(Nav::LoginAccepted, |s| AppState {
                    password: String::new(),
                    user: Some(identity),
                    error: None,
                    ..s
                })
            }
            (Screen::Welcome, AppEvent::Continue) => self.navigate(Nav::Continue, |s| s),
            (Screen::Grades, AppEvent::GradeEdited { slot, value }) => {
                if !is_acceptable_input(&value) {
                    return self;
                }
                let mut grades = self.grades;
                grades.set(slot, value);
                AppState {
                    grades,
                    error: None,
                    ..self
                }
            }
            (Screen::Grades, AppEvent::Calculate) => match self.grades.evaluate() {
                Ok(result) => self.navigate(Nav::Calculated, |s| AppState {
                    result: Some(result),
                    error: None,
                    ..s
                }),
                Err(check) => AppState {
                    error: Some(check.message),
                    ..self
                },
            },
            (Screen::Result, AppEvent::NewGrades) => self.navigate(Nav::NewGrades, |s| AppState {
                grades: GradeSet::default(),
                error: None,
                result: None,
                ..s
            }),
            (screen, AppEvent::Logout) if screen.next(Nav::Logout).is_some() => AppState::default(),
            (_, _) => self,
        }
    }

    fn navigate(self, nav: Nav, update: impl FnOnce(AppState) -> AppState) -> AppState {
        match self.screen.next(nav) {
            Some(screen) => AppState {
                screen,
                ..update(self)
            },
            None => self,
        }
    }
}
