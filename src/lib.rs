//! userdir - terminal front-end for a user directory REST API
//!
//! userdir lists, creates, edits and deletes user records held by a remote
//! HTTP service. All state is local view state: every mutation is followed by
//! a fresh fetch of the whole list.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (browse, list, add, edit, delete)
//! - **core**: View state, directory controller, API client, rendering, config loading
//! - **models**: Data structures (user, form draft, config)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{ApiError, Result, UserDirError};
