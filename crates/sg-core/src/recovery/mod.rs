//! Recovery contact.
//!
//! The forgot-password path does not touch the session. It only asks the
//! device to call a configured manager.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phone number as written in configuration, e.g. `+1 (555) 010-0100`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits plus a leading `+`, without formatting characters.
    pub fn dialable(&self) -> String {
        let trimmed = self.0.trim();
        let mut out = String::with_capacity(trimmed.len());
        for (i, c) in trimmed.chars().enumerate() {
            if c.is_ascii_digit() || (i == 0 && c == '+') {
                out.push(c);
            }
        }
        out
    }

    /// `tel:` URI handed to the platform telephony handler.
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.dialable())
    }

    pub fn is_dialable(&self) -> bool {
        self.dialable().chars().any(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Person to call when an employee cannot sign in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryContact {
    pub name: String,
    pub phone_number: PhoneNumber,
}
