pub mod date;
pub mod time;

// Re-export the formatters used across cli and ui.
pub use time::format_hms;
pub use time::mins2readable;
