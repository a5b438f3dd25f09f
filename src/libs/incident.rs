//! Incident types, form fields and the declarative rule tables behind them.
//!
//! ## Incident types
//!
//! - **Garage** (`garage`): a vehicle entered the depot with a problem and left
//!   again. Duration is measured from entry time to exit time.
//! - **Trip** (`trip`): a vehicle was rescued en route. Duration is measured
//!   from the call time to the rescue vehicle's arrival back at the garage.
//!
//! Both share the car identification block and the solution block; which
//! other fields appear, and which of them are mandatory, is described by the
//! tables in this module and consumed by the generic validator in
//! [`crate::libs::validation`].

use super::field::FieldState;
use super::formatter::compute_duration;
use super::validation::{missing_required, FieldKind, FormError, CHOICE_NO};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IncidentType {
    Garage,
    Trip,
}

/// Every field that appears on either form variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    CarNumber,
    CarTime,
    CarLine,
    TripDate,
    Driver,
    CcoDuty,
    CarChangeRequired,
    ProblemSolution,
    // trip
    RescueCar,
    CallTime,
    RescueDepartureTime,
    ArrivalAtLocation,
    SosReason,
    SosLocationCity,
    ReturnTime,
    GarageArrivalTime,
    // garage
    EntryTime,
    ExitTime,
    EntryReason,
}

use FieldId::*;

const COMMON_FIELDS: &[FieldId] = &[CarNumber, CarTime, CarLine, TripDate, Driver, CcoDuty];

const TRIP_FIELDS: &[FieldId] = &[
    RescueCar,
    CallTime,
    RescueDepartureTime,
    ArrivalAtLocation,
    SosReason,
    SosLocationCity,
    CarChangeRequired,
    ReturnTime,
    GarageArrivalTime,
];

const GARAGE_FIELDS: &[FieldId] = &[EntryTime, ExitTime, EntryReason, CarChangeRequired];

const CLOSING_FIELDS: &[FieldId] = &[ProblemSolution];

const COMMON_REQUIRED: &[FieldId] = &[CarNumber, CarTime, CarLine, TripDate];

const TRIP_REQUIRED: &[FieldId] = &[
    RescueCar,
    Driver,
    CcoDuty,
    CallTime,
    RescueDepartureTime,
    ArrivalAtLocation,
    SosReason,
    SosLocationCity,
    ReturnTime,
    GarageArrivalTime,
    ProblemSolution,
];

const GARAGE_REQUIRED: &[FieldId] = &[Driver, CcoDuty, EntryTime, ExitTime, EntryReason, ProblemSolution];

impl IncidentType {
    /// Every incident type, in menu order.
    pub const ALL: [IncidentType; 2] = [IncidentType::Garage, IncidentType::Trip];

    pub fn title(&self) -> &'static str {
        match self {
            IncidentType::Garage => "Ocorrência na Garagem",
            IncidentType::Trip => "Ocorrência em Viagem",
        }
    }

    /// Fields of this form in display order.
    pub fn fields(&self) -> Vec<FieldId> {
        let specific = match self {
            IncidentType::Garage => GARAGE_FIELDS,
            IncidentType::Trip => TRIP_FIELDS,
        };
        [COMMON_FIELDS, specific, CLOSING_FIELDS].concat()
    }

    /// Mandatory fields of this form.
    pub fn required_fields(&self) -> Vec<FieldId> {
        let specific = match self {
            IncidentType::Garage => GARAGE_REQUIRED,
            IncidentType::Trip => TRIP_REQUIRED,
        };
        [COMMON_REQUIRED, specific].concat()
    }

    pub fn is_required(&self, id: FieldId) -> bool {
        self.required_fields().contains(&id)
    }

    /// Endpoints of the interval reported as the total occurrence time.
    pub fn duration_interval(&self) -> (FieldId, FieldId) {
        match self {
            IncidentType::Garage => (EntryTime, ExitTime),
            IncidentType::Trip => (CallTime, GarageArrivalTime),
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            CarNumber => "Número do Carro",
            CarTime => "Horário do Carro",
            CarLine => "Linha do Carro",
            TripDate => "Data da Viagem",
            Driver => "Motorista",
            CcoDuty => "Plantão CCO",
            CarChangeRequired => "Troca do Carro?",
            ProblemSolution => "Solução do Problema",
            RescueCar => "Carro de Socorro",
            CallTime => "Horário do Chamado",
            RescueDepartureTime => "Horário da Saída do Socorro",
            ArrivalAtLocation => "Chegada no Local",
            SosReason => "Motivo do SOS",
            SosLocationCity => "Cidade Local do SOS",
            ReturnTime => "Horário de Retorno",
            GarageArrivalTime => "Horário de Chegada na Garagem",
            EntryTime => "Horário da Entrada",
            ExitTime => "Horário da Saída",
            EntryReason => "Motivo da Entrada",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            CarTime | CallTime | RescueDepartureTime | ArrivalAtLocation | ReturnTime | GarageArrivalTime
            | EntryTime | ExitTime => FieldKind::Time,
            TripDate => FieldKind::Date,
            CarChangeRequired => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// Stable key used in JSON input files.
    pub fn key(&self) -> &'static str {
        match self {
            CarNumber => "carNumber",
            CarTime => "carTime",
            CarLine => "carLine",
            TripDate => "tripDate",
            Driver => "driver",
            CcoDuty => "ccoDuty",
            CarChangeRequired => "carChangeRequired",
            ProblemSolution => "problemSolution",
            RescueCar => "rescueCar",
            CallTime => "callTime",
            RescueDepartureTime => "rescueDepartureTime",
            ArrivalAtLocation => "arrivalAtLocation",
            SosReason => "sosReason",
            SosLocationCity => "sosLocationCity",
            ReturnTime => "returnTime",
            GarageArrivalTime => "garageArrivalTime",
            EntryTime => "entryTime",
            ExitTime => "exitTime",
            EntryReason => "entryReason",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            CarChangeRequired => CHOICE_NO,
            _ => "",
        }
    }
}

/// The filled-in form of one occurrence.
#[derive(Debug, Clone)]
pub struct OccurrenceForm {
    pub incident: IncidentType,
    fields: Vec<(FieldId, FieldState)>,
}

impl OccurrenceForm {
    pub fn new(incident: IncidentType) -> Self {
        let fields = incident
            .fields()
            .into_iter()
            .map(|id| {
                let mut state = FieldState::new(id.kind(), incident.is_required(id));
                state.set(id.default_value());
                (id, state)
            })
            .collect();

        Self { incident, fields }
    }

    /// Builds a form from `key → value` pairs (the JSON input format).
    ///
    /// Values go through the same typing and completion steps as interactive
    /// input. Unknown keys and keys belonging to the other incident type are
    /// ignored. Per-field errors are returned alongside the form so the
    /// caller can report them.
    pub fn from_values(incident: IncidentType, values: &HashMap<String, String>) -> (Self, Vec<(FieldId, String)>) {
        let mut form = Self::new(incident);
        let mut errors = Vec::new();

        for (id, state) in form.fields.iter_mut() {
            if let Some(value) = values.get(id.key()) {
                state.focus();
                state.clear();
                state.input(value);
                if let Err(err) = state.blur() {
                    errors.push((*id, err.to_string()));
                }
            }
        }

        (form, errors)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(|(id, _)| *id)
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.iter().find(|(field_id, _)| *field_id == id).map(|(_, state)| state)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|(field_id, _)| *field_id == id).map(|(_, state)| state)
    }

    /// Current value of a field; empty for fields not on this form.
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).map(FieldState::value).unwrap_or("")
    }

    /// Stores an already processed value. Returns `false` when the field is
    /// not part of this form.
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        match self.field_mut(id) {
            Some(state) => {
                state.set(value);
                true
            }
            None => false,
        }
    }

    /// Total occurrence time, recomputed from the interval endpoints on each
    /// call. Empty while either endpoint is missing.
    pub fn total_time(&self) -> String {
        let (start, end) = self.incident.duration_interval();
        compute_duration(self.value(start), self.value(end))
    }

    /// Form-level check run before the report is generated.
    pub fn validate(&self) -> Result<(), FormError> {
        let values = self.fields.iter().map(|(id, state)| (*id, state.value()));
        let missing = missing_required(values, &self.incident.required_fields());

        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(?missing, "required fields missing");
            Err(FormError::MissingRequiredFields { count: missing.len() })
        }
    }

    /// Resets every field to its initial value.
    pub fn clear(&mut self) {
        for (id, state) in self.fields.iter_mut() {
            state.clear();
            state.set(id.default_value());
        }
    }
}
