use crate::commands::{check_input, finish, open_directory};
use crate::core::{UserDirectory, UsersApi};
use crate::error::UserDirError;
use crate::models::{Config, FormField};

/// Field changes given on the command line; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EditOptions {
    fn changes(&self) -> impl Iterator<Item = (FormField, &str)> {
        [
            (FormField::Name, self.name.as_deref()),
            (FormField::Email, self.email.as_deref()),
            (FormField::Phone, self.phone.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

/// Update one user, looked up by id in a fresh fetch of the list
pub async fn edit_user(config: &Config, id: &str, options: EditOptions) -> Result<(), UserDirError> {
    for (field, value) in options.changes() {
        check_input(field, value)?;
    }
    run_edit(open_directory(config)?, config, id, options).await
}

pub async fn run_edit<A: UsersApi>(
    mut directory: UserDirectory<A>,
    config: &Config,
    id: &str,
    options: EditOptions,
) -> Result<(), UserDirError> {
    directory.mount().await;
    if let Some(message) = &directory.state().error {
        return Err(UserDirError::ActionFailed(message.clone()));
    }

    let user = directory
        .state()
        .find_user(id)
        .cloned()
        .ok_or_else(|| UserDirError::UserNotFound(id.to_string()))?;

    directory.show_edit_form(user);
    for (field, value) in options.changes() {
        directory.set_field(field, value);
    }

    directory.submit().await;
    finish(&directory, config)
}
