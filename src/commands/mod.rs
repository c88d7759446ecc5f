pub mod add;
pub mod browse;
pub mod delete;
pub mod edit;
pub mod list;

pub use add::*;
pub use browse::*;
pub use delete::*;
pub use edit::*;
pub use list::*;

use crate::core::{render_view, HttpUsersApi, UserDirectory, UsersApi};
use crate::error::UserDirError;
use crate::models::{Config, FormField};

/// Build a directory view backed by the HTTP API from config
pub fn open_directory(config: &Config) -> Result<UserDirectory<HttpUsersApi>, UserDirError> {
    let api = HttpUsersApi::new(config.api.clone())?;
    Ok(UserDirectory::new(api))
}

/// Print the current view and turn a leftover banner message into an error
pub fn finish<A: UsersApi>(
    directory: &UserDirectory<A>,
    config: &Config,
) -> Result<(), UserDirError> {
    println!("{}", render_view(directory.state(), &config.display));
    match &directory.state().error {
        Some(message) => Err(UserDirError::ActionFailed(message.clone())),
        None => Ok(()),
    }
}

/// Apply the input-level checks to a value given on the command line
pub fn check_input(field: FormField, value: &str) -> Result<(), UserDirError> {
    field
        .check(value)
        .map_err(|reason| UserDirError::InvalidInput {
            field: field.name().to_string(),
            reason: reason.to_string(),
        })
}
