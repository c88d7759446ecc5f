//! Text rendering of the directory view

use crate::core::state::{Screen, ViewState};
use crate::models::{DisplayConfig, FormField, User};

pub const TITLE: &str = "User Management";
pub const SUBTITLE: &str = "Simple CRUD Application";
pub const LOADING_MESSAGE: &str = "Loading users...";
pub const EMPTY_MESSAGE: &str = "No users found. Add one to get started!";

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Phone"];

/// Render the whole screen: header, error banner, then list or form
pub fn render_view(state: &ViewState, display: &DisplayConfig) -> String {
    let mut output = format!("=== {} ===\n{}\n\n", TITLE, SUBTITLE);

    if let Some(banner) = render_error_banner(state) {
        output.push_str(&banner);
        output.push('\n');
    }

    match state.screen() {
        Screen::Form => output.push_str(&render_form(state)),
        screen => {
            output.push_str("[+ Add New User]  [Refresh]\n\n");
            match screen {
                Screen::Loading => output.push_str(LOADING_MESSAGE),
                Screen::Empty => output.push_str(EMPTY_MESSAGE),
                _ => output.push_str(&render_table(&state.users, display.max_column_width)),
            }
            output.push('\n');
        }
    }

    output
}

/// Single-line error banner, if there is an error to show
pub fn render_error_banner(state: &ViewState) -> Option<String> {
    state
        .error
        .as_ref()
        .map(|error| format!("! {}  [x dismiss]\n", error))
}

/// Table of users, one row each, with edit/delete controls
pub fn render_table(users: &[User], max_width: usize) -> String {
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| {
            [
                truncate(&u.id.to_string(), max_width),
                truncate(&u.name, max_width),
                truncate(&u.email, max_width),
                truncate(u.phone_display(), max_width),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&HEADERS.map(str::to_string), &widths));
    output.push_str("Actions\n");
    for row in &rows {
        output.push_str(&format_row(row, &widths));
        output.push_str("[edit] [delete]\n");
    }
    // no trailing newline; callers add their own
    output.pop();
    output
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}  ", cell, width = *width))
        .collect()
}

fn render_form(state: &ViewState) -> String {
    let (title, submit_label) = if state.is_editing() {
        ("Edit User", "Update User")
    } else {
        ("Add New User", "Add User")
    };

    let mut output = format!("{}\n\n", title);
    for field in FormField::all() {
        let value = state.form_data.get(*field);
        let shown = if value.is_empty() {
            format!("<{}>", field.placeholder())
        } else {
            value.to_string()
        };
        output.push_str(&format!("  {:<8} {}\n", field.label(), shown));
    }
    output.push_str(&format!("\n[{}]  [Cancel]\n", submit_label));
    output
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if max == 0 || text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
