pub mod config;
pub mod edit;
pub mod model;
pub mod prefs;
pub mod state;
pub mod view;

pub use config::AppConfig;
pub use edit::{CommitOutcome, InlineEdit};
pub use model::*;
pub use prefs::PrefStore;
pub use state::{Dashboard, GoalUpdate};
