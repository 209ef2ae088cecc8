pub mod cli;
pub mod config;
pub mod tui;

pub use daypulse_core as core;
pub use daypulse_core::model;
pub use daypulse_core::prefs;

pub use daypulse_core::AppConfig;
