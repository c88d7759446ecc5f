use tracing::info;

use crate::commands::{check_input, finish, open_directory};
use crate::core::{UserDirectory, UsersApi};
use crate::error::UserDirError;
use crate::models::{Config, FormData, FormField};

/// Create a user from command-line values, then print the refreshed list
pub async fn add_user(config: &Config, draft: FormData) -> Result<(), UserDirError> {
    for field in FormField::all() {
        check_input(*field, draft.get(*field))?;
    }
    run_add(open_directory(config)?, config, draft).await
}

/// Submit `draft` as a new user through `directory`
pub async fn run_add<A: UsersApi>(
    mut directory: UserDirectory<A>,
    config: &Config,
    draft: FormData,
) -> Result<(), UserDirError> {
    directory.show_create_form();
    for field in FormField::all() {
        directory.set_field(*field, draft.get(*field));
    }

    info!("Adding user {} <{}>", draft.name, draft.email);
    directory.submit().await;
    finish(&directory, config)
}
