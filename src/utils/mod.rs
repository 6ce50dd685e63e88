pub mod badge;
pub mod browser;
pub mod format;

pub use badge::{connection_badge_class, role_badge_class, status_badge_class};
pub use browser::open_browser;
pub use format::{format_gb, format_number, parse_size_gb};
