//! Core library modules for the occurrence application.
//!
//! ## Features
//!
//! - **Input Normalization**: Keystroke-level reshaping of time and date fields
//! - **Validation**: Canonical format checks and required-field rules
//! - **Duration Calculation**: Elapsed time between two readings, across midnight
//! - **Reports**: Fixed garage and trip templates, clipboard delivery
//! - **Infrastructure**: Configuration, data storage, messaging, logging
//!
//! ## Usage
//!
//! ```rust
//! use occurrence::libs::formatter::compute_duration;
//! use occurrence::libs::time_input::normalize_time;
//!
//! let start = normalize_time("0800");
//! let end = normalize_time("1030");
//! assert_eq!(compute_duration(&start, &end), "2h 30m");
//! ```

pub mod clipboard;
pub mod config;
pub mod data_storage;
pub mod date_input;
pub mod field;
pub mod formatter;
pub mod incident;
pub mod logger;
pub mod messages;
pub mod report;
pub mod time_input;
pub mod validation;
pub mod view;
