use crate::commands::{finish, open_directory};
use crate::core::{UserDirectory, UsersApi};
use crate::error::UserDirError;
use crate::models::Config;

/// Fetch the directory once and print the table
pub async fn list_users(config: &Config) -> Result<(), UserDirError> {
    run_list(open_directory(config)?, config).await
}

pub async fn run_list<A: UsersApi>(
    mut directory: UserDirectory<A>,
    config: &Config,
) -> Result<(), UserDirError> {
    directory.mount().await;
    finish(&directory, config)
}
