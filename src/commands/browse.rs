use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use crate::commands::open_directory;
use crate::core::{render_view, TerminalConfirmation, UserDirectory, UsersApi, ViewState};
use crate::error::UserDirError;
use crate::models::{Config, FormField, User};

/// Actions offered under the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Add,
    Refresh,
    Edit,
    Delete,
    DismissError,
    Quit,
}

impl ListAction {
    pub fn label(&self) -> &'static str {
        match self {
            ListAction::Add => "+ Add New User",
            ListAction::Refresh => "Refresh",
            ListAction::Edit => "Edit a user",
            ListAction::Delete => "Delete a user",
            ListAction::DismissError => "Dismiss error",
            ListAction::Quit => "Quit",
        }
    }
}

/// Actions offered under the form view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    EditAgain,
    DismissError,
    Cancel,
}

impl FormAction {
    pub fn label(&self, editing: bool) -> &'static str {
        match self {
            FormAction::Submit if editing => "Update User",
            FormAction::Submit => "Add User",
            FormAction::EditAgain => "Change fields",
            FormAction::DismissError => "Dismiss error",
            FormAction::Cancel => "Cancel",
        }
    }
}

/// List actions that make sense for the current state
pub fn list_actions(state: &ViewState) -> Vec<ListAction> {
    let mut actions = vec![ListAction::Add, ListAction::Refresh];
    if !state.loading && !state.users.is_empty() {
        actions.push(ListAction::Edit);
        actions.push(ListAction::Delete);
    }
    if state.error.is_some() {
        actions.push(ListAction::DismissError);
    }
    actions.push(ListAction::Quit);
    actions
}

/// Form actions that make sense for the current state
pub fn form_actions(state: &ViewState) -> Vec<FormAction> {
    let mut actions = vec![FormAction::Submit, FormAction::EditAgain];
    if state.error.is_some() {
        actions.push(FormAction::DismissError);
    }
    actions.push(FormAction::Cancel);
    actions
}

/// Interactive directory: render, ask for an action, apply it, repeat
pub async fn browse(config: &Config) -> Result<(), UserDirError> {
    let theme = ColorfulTheme::default();
    let mut directory = open_directory(config)?;
    directory.mount().await;

    loop {
        println!("{}", render_view(directory.state(), &config.display));

        if directory.state().show_form {
            run_form_step(&mut directory, &theme).await?;
            continue;
        }

        let actions = list_actions(directory.state());
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            ListAction::Add => {
                directory.show_create_form();
                fill_form(&mut directory, &theme)?;
            }
            ListAction::Refresh => directory.list().await,
            ListAction::Edit => {
                if let Some(user) = pick_user(&theme, &directory.state().users, "Edit which user?")? {
                    directory.show_edit_form(user);
                    fill_form(&mut directory, &theme)?;
                }
            }
            ListAction::Delete => {
                if let Some(user) = pick_user(&theme, &directory.state().users, "Delete which user?")? {
                    directory.delete(&user.id, &TerminalConfirmation).await;
                }
            }
            ListAction::DismissError => directory.dismiss_error(),
            ListAction::Quit => break,
        }
    }

    debug!("Leaving interactive directory");
    Ok(())
}

async fn run_form_step<A: UsersApi>(
    directory: &mut UserDirectory<A>,
    theme: &ColorfulTheme,
) -> Result<(), UserDirError> {
    let editing = directory.state().is_editing();
    let actions = form_actions(directory.state());
    let labels: Vec<&str> = actions.iter().map(|a| a.label(editing)).collect();
    let choice = Select::with_theme(theme)
        .items(&labels)
        .default(0)
        .interact()?;

    match actions[choice] {
        FormAction::Submit => directory.submit().await,
        FormAction::EditAgain => fill_form(directory, theme)?,
        FormAction::DismissError => directory.dismiss_error(),
        FormAction::Cancel => directory.cancel(),
    }
    Ok(())
}

/// Prompt for every field, pre-filled with the current draft
fn fill_form<A: UsersApi>(
    directory: &mut UserDirectory<A>,
    theme: &ColorfulTheme,
) -> Result<(), UserDirError> {
    for field in FormField::all() {
        let field = *field;
        let current = directory.state().form_data.get(field).to_string();
        let value: String = Input::with_theme(theme)
            .with_prompt(field.label())
            .with_initial_text(current)
            .allow_empty(!field.is_required())
            .validate_with(move |input: &String| field.check(input))
            .interact_text()?;
        directory.set_field(field, value.trim());
    }
    Ok(())
}

fn pick_user(
    theme: &ColorfulTheme,
    users: &[User],
    prompt: &str,
) -> Result<Option<User>, UserDirError> {
    let mut labels: Vec<String> = users
        .iter()
        .map(|u| format!("{}  {} <{}>", u.id, u.name, u.email))
        .collect();
    labels.push("Back".to_string());

    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(users.get(choice).cloned())
}
