//! # Occurrence - CCO incident report assistant
//!
//! A command-line utility that walks an operator through a garage or trip
//! incident form, normalizes the time and date fields as they are typed, and
//! produces the fixed report text ready to be pasted into the team channel.
//!
//! ## Features
//!
//! - **Time Fields**: `HH:MM` normalization while typing, completion on blur
//! - **Date Fields**: `DD/MM/YYYY` grouping and format validation
//! - **Total Time**: Elapsed duration between the incident's two readings
//! - **Reports**: Garage and trip templates copied to the clipboard
//!
//! ## Usage
//!
//! ```rust,no_run
//! use occurrence::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
