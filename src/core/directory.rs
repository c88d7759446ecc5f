use tracing::{debug, info, warn};

use crate::core::api::UsersApi;
use crate::core::confirm::Confirmation;
use crate::core::state::{SubmitTarget, ViewState, SAVE_FAILED_MESSAGE};
use crate::models::{FormField, User, UserId};

/// Prompt shown before a user is deleted
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// The user directory view: owns the view state and drives the users API
///
/// Every action reports failure through `state().error`; none of them return
/// errors. Mutations never touch `users` directly, they re-fetch the list.
pub struct UserDirectory<A: UsersApi> {
    api: A,
    state: ViewState,
}

impl<A: UsersApi> UserDirectory<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Initial display: fetch the list once
    pub async fn mount(&mut self) {
        debug!("Mounting user directory");
        self.list().await;
    }

    /// Fetch the list, replacing `users` on success
    pub async fn list(&mut self) {
        self.state.begin_fetch();
        let outcome = self.api.list_users().await;
        if let Err(ref e) = outcome {
            warn!("Failed to fetch users: {}", e);
        }
        self.state.finish_fetch(outcome);
    }

    pub fn show_create_form(&mut self) {
        self.state.open_create_form();
    }

    pub fn show_edit_form(&mut self, user: User) {
        debug!("Editing user {}", user.id);
        self.state.open_edit_form(user);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    /// Send the draft: create when no user is being edited, update otherwise
    pub async fn submit(&mut self) {
        let submission = self.state.submission();
        let result = match &submission.target {
            SubmitTarget::Create => self.api.create_user(&submission.body).await,
            SubmitTarget::Update(id) => self.api.update_user(id, &submission.body).await,
        };

        match result {
            Ok(()) => {
                match &submission.target {
                    SubmitTarget::Create => info!("Created user {}", submission.body.name),
                    SubmitTarget::Update(id) => info!("Updated user {}", id),
                }
                self.state.submit_succeeded();
                self.list().await;
            }
            Err(e) => {
                warn!("Failed to save user: {}", e);
                self.state.submit_failed(e.banner_message(SAVE_FAILED_MESSAGE));
            }
        }
    }

    /// Delete a user once `confirmation` agrees
    ///
    /// Returns false when the deletion was declined; no request is made then.
    pub async fn delete(&mut self, id: &UserId, confirmation: &dyn Confirmation) -> bool {
        if !confirmation.confirm(DELETE_PROMPT) {
            debug!("Deletion of user {} declined", id);
            return false;
        }

        match self.api.delete_user(id).await {
            Ok(()) => {
                info!("Deleted user {}", id);
                self.list().await;
            }
            Err(e) => {
                warn!("Failed to delete user {}: {}", id, e);
                self.state.delete_failed();
            }
        }
        true
    }

    pub fn cancel(&mut self) {
        self.state.cancel_form();
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }
}
