//! View state of the user directory and its pure transitions
//!
//! Nothing in here performs I/O. [`UserDirectory`](crate::core::UserDirectory)
//! sequences these transitions around calls to the users API.

use crate::models::{FormData, FormField, User, UserId};

/// Banner text for a failed list fetch
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Make sure backend is running.";
/// Banner text for a failed create or update when the server gave no reason
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save user";
/// Banner text for a failed delete
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user";

/// What the screen currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// List view with a fetch in flight
    Loading,
    /// List view, nothing to show
    Empty,
    /// List view with at least one user
    Table,
    /// Create or edit form
    Form,
}

/// Where a submitted draft goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// POST to the collection endpoint
    Create,
    /// PUT to the per-id endpoint
    Update(UserId),
}

/// A request derived from the current draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub target: SubmitTarget,
    pub body: FormData,
}

/// Process-local state of the directory view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Replaced wholesale by every successful fetch
    pub users: Vec<User>,
    /// True only while a list fetch is in flight
    pub loading: bool,
    /// Form view when true, list view otherwise
    pub show_form: bool,
    /// Set if and only if the form updates an existing user
    pub editing_user: Option<User>,
    pub form_data: FormData,
    pub error: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the active screen
    pub fn screen(&self) -> Screen {
        if self.show_form {
            Screen::Form
        } else if self.loading {
            Screen::Loading
        } else if self.users.is_empty() {
            Screen::Empty
        } else {
            Screen::Table
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_user.is_some()
    }

    /// Find a loaded user by the id as typed by a person
    pub fn find_user(&self, raw_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id.matches(raw_id))
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of a list fetch. A failure keeps the previous users.
    pub fn finish_fetch<E>(&mut self, outcome: Result<Vec<User>, E>) {
        match outcome {
            Ok(users) => {
                self.users = users;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    pub fn open_create_form(&mut self) {
        self.editing_user = None;
        self.form_data = FormData::default();
        self.show_form = true;
    }

    pub fn open_edit_form(&mut self, user: User) {
        self.form_data = FormData::from(&user);
        self.editing_user = Some(user);
        self.show_form = true;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form_data.set(field, value);
    }

    /// The request the current draft would produce
    pub fn submission(&self) -> Submission {
        let target = match &self.editing_user {
            Some(user) => SubmitTarget::Update(user.id.clone()),
            None => SubmitTarget::Create,
        };
        Submission {
            target,
            body: self.form_data.clone(),
        }
    }

    /// Close the form after the server accepted the draft
    pub fn submit_succeeded(&mut self) {
        self.form_data = FormData::default();
        self.show_form = false;
        self.editing_user = None;
    }

    /// Keep the form open with the draft intact and show `message`
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn delete_failed(&mut self) {
        self.error = Some(DELETE_FAILED_MESSAGE.to_string());
    }

    pub fn cancel_form(&mut self) {
        self.show_form = false;
        self.editing_user = None;
        self.form_data = FormData::default();
        self.error = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
