use tracing::debug;

use crate::commands::{finish, open_directory};
use crate::core::{AssumeYes, Confirmation, TerminalConfirmation, UserDirectory, UsersApi};
use crate::error::UserDirError;
use crate::models::{Config, UserId};

/// Delete one user by id, asking first unless `assume_yes`
pub async fn delete_user(config: &Config, id: &str, assume_yes: bool) -> Result<(), UserDirError> {
    let confirmation: &dyn Confirmation = if assume_yes {
        &AssumeYes
    } else {
        &TerminalConfirmation
    };
    run_delete(open_directory(config)?, config, id, confirmation).await
}

/// Delete the user whose id reads as `id`.
///
/// The id is taken from the fetched record so the path carries the server's
/// own spelling; an id missing from the list is sent as typed.
pub async fn run_delete<A: UsersApi>(
    mut directory: UserDirectory<A>,
    config: &Config,
    id: &str,
    confirmation: &dyn Confirmation,
) -> Result<(), UserDirError> {
    directory.mount().await;
    let id = match directory.state().find_user(id) {
        Some(user) => user.id.clone(),
        None => {
            debug!("User {} is not in the fetched list", id.trim());
            UserId::from_raw(id)
        }
    };

    if !directory.delete(&id, confirmation).await {
        println!("Deletion cancelled.");
        return Ok(());
    }
    finish(&directory, config)
}
