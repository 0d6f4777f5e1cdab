//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here; adapters render these.

use serde::{Deserialize, Serialize};

/// Outcome of a validation pass. `message` is empty when valid, otherwise it holds
/// the first failing rule's user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Email/password pair as typed by the user. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Who is logged in, as reported by the identity port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub display_name: String,
}

/// Raw grade inputs. The first three are required, the fourth may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSet {
    pub grade1: String,
    pub grade2: String,
    pub grade3: String,
    pub grade4: String,
}

/// Addresses one of the four grade inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeSlot {
    First,
    Second,
    Third,
    Fourth,
}

impl GradeSlot {
    pub const ALL: [GradeSlot; 4] = [
        GradeSlot::First,
        GradeSlot::Second,
        GradeSlot::Third,
        GradeSlot::Fourth,
    ];

    pub fn number(self) -> u8 {
        match self {
            GradeSlot::First => 1,
            GradeSlot::Second => 2,
            GradeSlot::Third => 3,
            GradeSlot::Fourth => 4,
        }
    }

    pub fn is_optional(self) -> bool {
        self == GradeSlot::Fourth
    }

    pub fn label(self) -> String {
        if self.is_optional() {
            format!("Grade {} (optional)", self.number())
        } else {
            format!("Grade {}", self.number())
        }
    }
}

impl GradeSet {
    pub fn new(
        grade1: impl Into<String>,
        grade2: impl Into<String>,
        grade3: impl Into<String>,
        grade4: impl Into<String>,
    ) -> Self {
        Self {
            grade1: grade1.into(),
            grade2: grade2.into(),
            grade3: grade3.into(),
            grade4: grade4.into(),
        }
    }

    pub fn get(&self, slot: GradeSlot) -> &str {
        match slot {
            GradeSlot::First => &self.grade1,
            GradeSlot::Second => &self.grade2,
            GradeSlot::Third => &self.grade3,
            GradeSlot::Fourth => &self.grade4,
        }
    }

    pub fn set(&mut self, slot: GradeSlot, value: String) {
        match slot {
            GradeSlot::First => self.grade1 = value,
            GradeSlot::Second => self.grade2 = value,
            GradeSlot::Third => self.grade3 = value,
            GradeSlot::Fourth => self.grade4 = value,
        }
    }
}

/// Mean of the entered grades and its verdict against the pass threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageResult {
    pub average: f64,
    pub is_passed: bool,
}

impl AverageResult {
    pub fn verdict(&self) -> &'static str {
        if self.is_passed { "PASSED!" } else { "FAILED" }
    }

    pub fn remark(&self) -> &'static str {
        if self.is_passed {
            "Congratulations! You reached the minimum passing average."
        } else {
            "You need a minimum average of 6.0 to pass."
        }
    }
}
