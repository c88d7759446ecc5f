//! User records and the form draft used to create or update them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for a user without a phone number
pub const PHONE_PLACEHOLDER: &str = "-";

/// Server-assigned user identifier
///
/// The API may hand out numeric or textual ids; both are kept verbatim and
/// only ever compared or echoed back into request paths. Any JSON number is
/// accepted, not just those that fit an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
}

impl UserId {
    /// Id typed by a person, taken as-is without numeric reinterpretation
    pub fn from_raw(raw: &str) -> Self {
        UserId::Text(raw.trim().to_string())
    }

    /// Check whether this id matches an id typed on the command line
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw.trim()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A user record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Phone number for display, or the placeholder dash when there is none
    pub fn phone_display(&self) -> &str {
        match self.phone.as_deref() {
            Some(phone) if !phone.is_empty() => phone,
            _ => PHONE_PLACEHOLDER,
        }
    }
}

/// One editable field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[FormField::Name, FormField::Email, FormField::Phone]
    }

    /// Label shown next to the input, with a marker on required fields
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name *",
            FormField::Email => "Email *",
            FormField::Phone => "Phone",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Enter name",
            FormField::Email => "Enter email",
            FormField::Phone => "Enter phone number",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Phone)
    }

    /// Input-level check: required fields must be filled, email must look like one
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        if self.is_required() && value.is_empty() {
            return Err("this field is required");
        }
        if *self == FormField::Email && !looks_like_email(value) {
            return Err("please enter a valid email address");
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }
}

/// Shape check in the spirit of an `type=email` input: `local@domain`, no spaces
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Draft of a user being created or edited. Carries no identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
        }
    }
}

impl From<&User> for FormData {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }
}
