//! Screen flow. Login -> Welcome -> Grades <-> Result, logout back to Login.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Login,
    Welcome,
    Grades,
    Result,
}

/// Navigation triggers. Field edits do not navigate and are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nav {
    LoginAccepted,
    Continue,
    Calculated,
    NewGrades,
    Logout,
}

/// Every allowed move. Anything not listed keeps the current screen.
pub const TRANSITIONS: &[(Screen, Nav, Screen)] = &[
    (Screen::Login, Nav::LoginAccepted, Screen::Welcome),
    (Screen::Welcome, Nav::Continue, Screen::Grades),
    (Screen::Grades, Nav::Calculated, Screen::Result),
    (Screen::Result, Nav::NewGrades, Screen::Grades),
    (Screen::Grades, Nav::Logout, Screen::Login),
    (Screen::Result, Nav::Logout, Screen::Login),
];

impl Screen {
    pub fn next(self, nav: Nav) -> Option<Screen> {
        TRANSITIONS
            .iter()
            .find(|(from, on, _)| *from == self && *on == nav)
            .map(|(_, _, to)| *to)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Login => "Grades System",
            Screen::Welcome => "Welcome!",
            Screen::Grades => "Grade Entry",
            Screen::Result => "Final Average",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let s = Screen::default();
        assert_eq!(s, Screen::Login);
        let s = s.next(Nav::LoginAccepted).unwrap();
        assert_eq!(s, Screen::Welcome);
        let s = s.next(Nav::Continue).unwrap();
        assert_eq!(s, Screen::Grades);
        let s = s.next(Nav::Calculated).unwrap();
        assert_eq!(s, Screen::Result);
        assert_eq!(s.next(Nav::NewGrades), Some(Screen::Grades));
        assert_eq!(s.next(Nav::Logout), Some(Screen::Login));
    }

    #[test]
    fn test_disallowed_moves() {
        assert_eq!(Screen::Login.next(Nav::Continue), None);
        assert_eq!(Screen::Login.next(Nav::Logout), None);
        assert_eq!(Screen::Welcome.next(Nav::Logout), None);
        assert_eq!(Screen::Welcome.next(Nav::Calculated), None);
        assert_eq!(Screen::Grades.next(Nav::NewGrades), None);
    }

    #[test]
    fn test_table_is_deterministic() {
        for (i, (from, nav, _)) in TRANSITIONS.iter().enumerate() {
            let dupes = TRANSITIONS[i + 1..]
                .iter()
                .filter(|(f, n, _)| f == from && n == nav)
                .count();
            assert_eq!(dupes, 0, "duplicate transition {from:?} on {nav:?}");
        }
    }
}
