#[cfg(test)]
mod tests {
    use occurrence::libs::incident::{IncidentType, OccurrenceForm};
    use occurrence::libs::report::{render, render_garage, render_trip, GarageOccurrence, TripOccurrence, DEFAULT_GARAGE_NAME};
    use std::collections::HashMap;

    fn trip() -> TripOccurrence {
        TripOccurrence {
            car_number: "12345".to_string(),
            car_time: "06:30".to_string(),
            car_line: "101".to_string(),
            trip_date: "25/12/2023".to_string(),
            rescue_car: "54321".to_string(),
            driver: "João Silva".to_string(),
            cco_duty: "Maria".to_string(),
            call_time: "14:00".to_string(),
            rescue_departure_time: "14:10".to_string(),
            arrival_at_location: "14:45".to_string(),
            sos_reason: "Pneu furado".to_string(),
            sos_location_city: "Iguatu".to_string(),
            car_change_required: "SIM".to_string(),
            return_time: "16:00".to_string(),
            garage_arrival_time: "16:30".to_string(),
            problem_solution: "Pneu trocado".to_string(),
            total_time: "2h 30m".to_string(),
        }
    }

    fn garage() -> GarageOccurrence {
        GarageOccurrence {
            car_number: "777".to_string(),
            car_time: "05:00".to_string(),
            car_line: "202".to_string(),
            trip_date: "01/02/2024".to_string(),
            driver: "Ana".to_string(),
            cco_duty: "Pedro".to_string(),
            entry_time: "23:30".to_string(),
            exit_time: "00:15".to_string(),
            entry_reason: "Freio".to_string(),
            car_change_required: "NÃO".to_string(),
            problem_solution: "Freio ajustado".to_string(),
            total_time: "45m".to_string(),
        }
    }

    const TRIP_REPORT: &str = concat!(
        "Informo que o carro 12345, horário 06:30, linha 101, \n",
        "do dia 25/12/2023, foi socorrido com o carro 54321. Segue abaixo as informações:\n",
        "- Motorista: João Silva\n",
        "- Plantão CCO: Maria\n",
        "- Horário do Chamado: 14:00\n",
        "- Horário da Saída do Socorro: 14:10\n",
        "- Chegado no Local: 14:45\n",
        "- Motivo do SOS: Pneu furado\n",
        "- Local: Iguatu\n",
        "- Houve Troca do Carro? SIM\n",
        "- Horário de Retorno: 16:00\n",
        "- Horário de Chegada na Garagem: 16:30\n",
        "- Solução: Pneu trocado\n",
        "- Tempo total da ocorrência: 2h 30m",
    );

    #[test]
    fn test_render_trip() {
        assert_eq!(render_trip(&trip()), TRIP_REPORT);
    }

    #[test]
    fn test_render_garage() {
        let expected = concat!(
            "Informo que o carro 777, horário 05:00, linha 202, \n",
            "do dia 01/02/2024, deu entrada na garagem de Juazeiro com o problema abaixo. Segue as informações:\n",
            "- Motorista: Ana\n",
            "- Plantão CCO: Pedro\n",
            "- Horário da Entrada: 23:30\n",
            "- Horário da Saída: 00:15\n",
            "- Motivo da Entrada: Freio\n",
            "- Houve Troca do Carro? NÃO\n",
            "- Solução: Freio ajustado\n",
            "- Tempo total da ocorrência na garagem: 45m",
        );
        assert_eq!(render_garage(&garage(), "Juazeiro"), expected);
    }

    #[test]
    fn test_render_empty_values() {
        let text = render_garage(&GarageOccurrence::default(), DEFAULT_GARAGE_NAME);
        assert!(text.contains("garagem de Iguatu"));
        assert!(text.ends_with("- Tempo total da ocorrência na garagem: "));
    }

    #[test]
    fn test_render_from_form() {
        let input: HashMap<String, String> = [
            ("carNumber", "12345"),
            ("carTime", "0630"),
            ("carLine", "101"),
            ("tripDate", "25122023"),
            ("rescueCar", "54321"),
            ("driver", "João Silva"),
            ("ccoDuty", "Maria"),
            ("callTime", "14"),
            ("rescueDepartureTime", "14:1"),
            ("arrivalAtLocation", "1445"),
            ("sosReason", "Pneu furado"),
            ("sosLocationCity", "Iguatu"),
            ("carChangeRequired", "SIM"),
            ("returnTime", "16"),
            ("garageArrivalTime", "16:30"),
            ("problemSolution", "Pneu trocado"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let (form, errors) = OccurrenceForm::from_values(IncidentType::Trip, &input);
        assert!(errors.is_empty(), "{:?}", errors);
        assert_eq!(render(&form, "ignored"), TRIP_REPORT.replace("14:10", "14:01"));
    }

    #[test]
    fn test_occurrence_json_uses_camel_case() {
        let json = serde_json::to_value(garage()).unwrap();
        assert_eq!(json["carNumber"], "777");
        assert_eq!(json["totalTime"], "45m");
    }
}
