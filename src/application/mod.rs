//! Application layer - Use cases and orchestration

pub mod init;
pub mod journal;
pub mod manage_config;
pub mod state;
pub mod theme;

pub use journal::EntryRepository;
pub use manage_config::ConfigService;
pub use state::{AppState, Visible};
pub use theme::ThemeService;
