//! Single-field normalization commands (`time`, `date`).
//!
//! These expose the field engine directly: the raw value is treated as the
//! content of an input box after a keystroke, and `--blur` applies the
//! completion signal on top.
//!
//! ```text
//! $ occurrence time 1430
//! 14:30
//! $ occurrence time 14:3 --previous 14:30
//! 14:3
//! $ occurrence time 7 --blur
//! 07:00
//! $ occurrence date 25122023 --blur
//! 25/12/2023
//! ```

use crate::{
    libs::{field::FieldState, messages::Message, validation::FieldKind},
    msg_bail_anyhow,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct FieldArgs {
    /// Raw text of the field after the keystroke
    #[arg(allow_hyphen_values = true)]
    raw: String,

    /// Value of the field before the keystroke (detects deletions)
    #[arg(long, short)]
    previous: Option<String>,

    /// Finalize and validate the value as when the field loses focus
    #[arg(long, short)]
    blur: bool,

    /// Treat the field as mandatory during validation
    #[arg(long, short)]
    required: bool,
}

pub fn cmd(kind: FieldKind, args: FieldArgs) -> Result<()> {
    let mut field = FieldState::new(kind, args.required);
    if let Some(previous) = args.previous {
        field.set(previous);
    }

    field.focus();
    field.input(&args.raw);
    tracing::debug!(?kind, raw = %args.raw, value = %field.value(), "field normalized");

    if args.blur {
        if let Err(err) = field.blur() {
            msg_bail_anyhow!(Message::InvalidValue(field.value().to_string(), err.to_string()));
        }
    }

    println!("{}", field.value());
    Ok(())
}
