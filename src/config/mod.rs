pub mod settings;

pub use settings::{AppConfig, PatternSettings, ScraperSettings};
