//! Fixed report templates for the two incident types.
//!
//! Rendering is plain substitution: values are expected to be normalized and
//! validated already, nothing is checked here.

use super::incident::{FieldId, IncidentType, OccurrenceForm};
use serde::{Deserialize, Serialize};

/// Depot named in the garage template when nothing else is configured.
pub const DEFAULT_GARAGE_NAME: &str = "Iguatu";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripOccurrence {
    pub car_number: String,
    pub car_time: String,
    pub car_line: String,
    pub trip_date: String,
    pub rescue_car: String,
    pub driver: String,
    pub cco_duty: String,
    pub call_time: String,
    pub rescue_departure_time: String,
    pub arrival_at_location: String,
    pub sos_reason: String,
    pub sos_location_city: String,
    pub car_change_required: String,
    pub return_time: String,
    pub garage_arrival_time: String,
    pub problem_solution: String,
    pub total_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarageOccurrence {
    pub car_number: String,
    pub car_time: String,
    pub car_line: String,
    pub trip_date: String,
    pub driver: String,
    pub cco_duty: String,
    pub entry_time: String,
    pub exit_time: String,
    pub entry_reason: String,
    pub car_change_required: String,
    pub problem_solution: String,
    pub total_time: String,
}

impl From<&OccurrenceForm> for TripOccurrence {
    fn from(form: &OccurrenceForm) -> Self {
        let value = |id| form.value(id).to_string();
        Self {
            car_number: value(FieldId::CarNumber),
            car_time: value(FieldId::CarTime),
            car_line: value(FieldId::CarLine),
            trip_date: value(FieldId::TripDate),
            rescue_car: value(FieldId::RescueCar),
            driver: value(FieldId::Driver),
            cco_duty: value(FieldId::CcoDuty),
            call_time: value(FieldId::CallTime),
            rescue_departure_time: value(FieldId::RescueDepartureTime),
            arrival_at_location: value(FieldId::ArrivalAtLocation),
            sos_reason: value(FieldId::SosReason),
            sos_location_city: value(FieldId::SosLocationCity),
            car_change_required: value(FieldId::CarChangeRequired),
            return_time: value(FieldId::ReturnTime),
            garage_arrival_time: value(FieldId::GarageArrivalTime),
            problem_solution: value(FieldId::ProblemSolution),
            total_time: form.total_time(),
        }
    }
}

impl From<&OccurrenceForm> for GarageOccurrence {
    fn from(form: &OccurrenceForm) -> Self {
        let value = |id| form.value(id).to_string();
        Self {
            car_number: value(FieldId::CarNumber),
            car_time: value(FieldId::CarTime),
            car_line: value(FieldId::CarLine),
            trip_date: value(FieldId::TripDate),
            driver: value(FieldId::Driver),
            cco_duty: value(FieldId::CcoDuty),
            entry_time: value(FieldId::EntryTime),
            exit_time: value(FieldId::ExitTime),
            entry_reason: value(FieldId::EntryReason),
            car_change_required: value(FieldId::CarChangeRequired),
            problem_solution: value(FieldId::ProblemSolution),
            total_time: form.total_time(),
        }
    }
}

pub fn render_trip(data: &TripOccurrence) -> String {
    format!(
        "Informo que o carro {}, horário {}, linha {}, \n\
do dia {}, foi socorrido com o carro {}. Segue abaixo as informações:\n\
- Motorista: {}\n\
- Plantão CCO: {}\n\
- Horário do Chamado: {}\n\
- Horário da Saída do Socorro: {}\n\
- Chegado no Local: {}\n\
- Motivo do SOS: {}\n\
- Local: {}\n\
- Houve Troca do Carro? {}\n\
- Horário de Retorno: {}\n\
- Horário de Chegada na Garagem: {}\n\
- Solução: {}\n\
- Tempo total da ocorrência: {}",
        data.car_number,
        data.car_time,
        data.car_line,
        data.trip_date,
        data.rescue_car,
        data.driver,
        data.cco_duty,
        data.call_time,
        data.rescue_departure_time,
        data.arrival_at_location,
        data.sos_reason,
        data.sos_location_city,
        data.car_change_required,
        data.return_time,
        data.garage_arrival_time,
        data.problem_solution,
        data.total_time,
    )
}

pub fn render_garage(data: &GarageOccurrence, garage_name: &str) -> String {
    format!(
        "Informo que o carro {}, horário {}, linha {}, \n\
do dia {}, deu entrada na garagem de {} com o problema abaixo. Segue as informações:\n\
- Motorista: {}\n\
- Plantão CCO: {}\n\
- Horário da Entrada: {}\n\
- Horário da Saída: {}\n\
- Motivo da Entrada: {}\n\
- Houve Troca do Carro? {}\n\
- Solução: {}\n\
- Tempo total da ocorrência na garagem: {}",
        data.car_number,
        data.car_time,
        data.car_line,
        data.trip_date,
        garage_name,
        data.driver,
        data.cco_duty,
        data.entry_time,
        data.exit_time,
        data.entry_reason,
        data.car_change_required,
        data.problem_solution,
        data.total_time,
    )
}

/// Renders the report matching the form's incident type.
pub fn render(form: &OccurrenceForm, garage_name: &str) -> String {
    match form.incident {
        IncidentType::Trip => render_trip(&TripOccurrence::from(form)),
        IncidentType::Garage => render_garage(&GarageOccurrence::from(form), garage_name),
    }
}
