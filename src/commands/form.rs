//! Interactive incident form (`garage`, `trip`).
//!
//! Walks the operator through every field of the chosen incident type. Each
//! answer is treated like the content of an input box: it is normalized as
//! typed, then finalized and validated as if the box lost focus. Invalid
//! answers show the inline message and are asked again.
//!
//! Once the form is complete a review table and the report text are shown
//! and the text is copied to the clipboard. The operator can then start a
//! new occurrence, which clears every field.
//!
//! With `--input` the answers come from a JSON object keyed by field
//! (`carNumber`, `callTime`, ...) instead of prompts.

use crate::{
    libs::{
        clipboard::copy_to_clipboard,
        config::Config,
        field::FieldState,
        incident::{FieldId, IncidentType, OccurrenceForm},
        messages::Message,
        report,
        validation::{FieldKind, CHOICE_NO, CHOICE_YES},
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::{Context, Result};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Args)]
pub struct FormArgs {
    /// Fill the form from a JSON file of field values instead of prompting
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Print only the report text instead of reviewing and copying it
    #[arg(long)]
    print: bool,

    /// Show the report without copying it to the clipboard
    #[arg(long)]
    no_copy: bool,
}

pub async fn cmd(incident: IncidentType, args: FormArgs) -> Result<()> {
    let config = Config::read()?;

    if let Some(path) = &args.input {
        let form = load_form(incident, path)?;
        return deliver(&form, &config, &args).await;
    }

    let mut form = OccurrenceForm::new(incident);
    loop {
        prefill(&mut form, &config);

        msg_print!(Message::FormHeader(incident.title().to_string()), true);
        msg_print!(Message::FormSubtitle);
        prompt_form(&mut form)?;
        deliver(&form, &config, &args).await?;

        let again = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNewOccurrence.to_string())
            .default(false)
            .interact()?;
        if !again {
            break;
        }

        form.clear();
        msg_info!(Message::FieldsCleared);
    }

    Ok(())
}

/// Incident type selection shown when no command is given.
pub fn select_incident() -> Result<IncidentType> {
    let options = IncidentType::ALL;
    let titles: Vec<&str> = options.iter().map(IncidentType::title).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptIncidentType.to_string())
        .items(&titles)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Validates the form, shows the report and hands it to the clipboard.
async fn deliver(form: &OccurrenceForm, config: &Config, args: &FormArgs) -> Result<()> {
    if let Err(err) = form.validate() {
        msg_debug!(format!("{:?}", err));
        msg_bail_anyhow!(Message::RequiredFieldsMissing);
    }

    let text = report::render(form, &config.garage_name);

    if args.print {
        println!("{}", text);
        return Ok(());
    }

    msg_print!(Message::ReviewHeader, true);
    View::form(form)?;
    msg_print!(Message::ReportHeader, true);
    println!("{}", text);

    if args.no_copy {
        return Ok(());
    }

    match copy_to_clipboard(&text, config).await {
        Ok(()) => msg_success!(Message::ReportCopied, true),
        Err(err) => {
            msg_debug!(err);
            msg_error!(Message::ReportCopyFailed, true);
        }
    }

    Ok(())
}

fn prefill(form: &mut OccurrenceForm, config: &Config) {
    if let Some(cco_duty) = &config.cco_duty {
        if form.value(FieldId::CcoDuty).is_empty() {
            form.set_value(FieldId::CcoDuty, cco_duty.clone());
        }
    }
}

fn prompt_form(form: &mut OccurrenceForm) -> Result<()> {
    let (_, interval_end) = form.incident.duration_interval();
    let ids: Vec<FieldId> = form.field_ids().collect();

    for id in ids {
        if let Some(state) = form.field_mut(id) {
            prompt_field(id, state)?;
        }

        if id == interval_end {
            let total = form.total_time();
            if !total.is_empty() {
                msg_info!(Message::TotalTime(total));
            }
        }
    }

    Ok(())
}

fn prompt_field(id: FieldId, state: &mut FieldState) -> Result<()> {
    let theme = ColorfulTheme::default();
    let label = if state.required {
        format!("{} *", id.label())
    } else {
        id.label().to_string()
    };

    if state.kind == FieldKind::Choice {
        let options = [CHOICE_NO, CHOICE_YES];
        let current = options.iter().position(|o| *o == state.value()).unwrap_or(0);
        let selection = Select::with_theme(&theme)
            .with_prompt(label)
            .items(&options[..])
            .default(current)
            .interact()?;
        state.set(options[selection]);
        return Ok(());
    }

    loop {
        let mut input = Input::<String>::with_theme(&theme).with_prompt(label.clone()).allow_empty(true);
        if !state.value().is_empty() {
            input = input.with_initial_text(state.value());
        }
        let raw = input.interact_text()?;

        state.focus();
        state.input(&raw);
        match state.blur() {
            Ok(()) => return Ok(()),
            Err(err) => msg_error!(Message::FieldInvalid(id.label().to_string(), err.to_string())),
        }
    }
}

/// Reads a JSON object of field values. Numbers are accepted as text; other
/// value types are ignored.
fn load_form(incident: IncidentType, path: &Path) -> Result<OccurrenceForm> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let raw: HashMap<String, Value> =
        serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;

    let values: HashMap<String, String> = raw
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            Value::Number(n) => Some((key, n.to_string())),
            _ => None,
        })
        .collect();

    let (form, errors) = OccurrenceForm::from_values(incident, &values);
    msg_debug!(Message::InputFileLoaded(path.display().to_string()));

    for (id, error) in errors {
        msg_warning!(Message::FieldInvalid(id.label().to_string(), error));
    }

    Ok(form)
}
