pub use daypulse_tui::cli;
pub use daypulse_tui::config;
pub use daypulse_tui::tui;

pub use daypulse_core as core;
pub use daypulse_core::model;
pub use daypulse_core::prefs;

pub use daypulse_core::AppConfig;
