pub mod api;
pub mod config;
pub mod confirm;
pub mod directory;
pub mod render;
pub mod state;

pub use api::*;
pub use config::*;
pub use confirm::*;
pub use directory::*;
pub use render::*;
pub use state::*;
