pub mod config;
pub mod logging;

pub mod deep_dive;
pub mod insights_url;
pub mod rewrite;
pub mod scan;
pub mod time_window;
