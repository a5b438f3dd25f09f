pub mod duration;
pub mod field;
pub mod form;
pub mod init;

use crate::libs::incident::IncidentType;
use crate::libs::validation::FieldKind;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Fill a garage occurrence and copy its report")]
    Garage(form::FormArgs),
    #[command(about = "Fill a trip (rescue) occurrence and copy its report")]
    Trip(form::FormArgs),
    #[command(about = "Normalize a time field value (HH:MM)")]
    Time(field::FieldArgs),
    #[command(about = "Normalize a date field value (DD/MM/YYYY)")]
    Date(field::FieldArgs),
    #[command(about = "Elapsed time between two HH:MM readings")]
    Duration(duration::DurationArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // none: the incident type is picked interactively
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let Some(command) = cli.command else {
            let incident = form::select_incident()?;
            return form::cmd(incident, form::FormArgs::default()).await;
        };

        match command {
            Commands::Init(args) => init::cmd(args),
            Commands::Garage(args) => form::cmd(IncidentType::Garage, args).await,
            Commands::Trip(args) => form::cmd(IncidentType::Trip, args).await,
            Commands::Time(args) => field::cmd(FieldKind::Time, args),
            Commands::Date(args) => field::cmd(FieldKind::Date, args),
            Commands::Duration(args) => duration::cmd(args),
        }
    }
}
