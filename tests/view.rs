#[cfg(test)]
mod tests {
    use occurrence::libs::incident::{FieldId, IncidentType, OccurrenceForm};
    use occurrence::libs::messages::Message;
    use occurrence::libs::view::View;

    fn cell(table: &prettytable::Table, row: usize, column: usize) -> String {
        table
            .get_row(row)
            .and_then(|r| r.get_cell(column))
            .map(|c| c.get_content())
            .unwrap_or_default()
    }

    #[test]
    fn test_form_table_layout() {
        let mut form = OccurrenceForm::new(IncidentType::Garage);
        form.set_value(FieldId::EntryTime, "08:00");
        form.set_value(FieldId::ExitTime, "10:30");

        let table = View::form_table(&form);
        let fields = IncidentType::Garage.fields();

        // header + one row per field + total
        assert_eq!(table.len(), fields.len() + 2);
        assert_eq!(cell(&table, 0, 0), "CAMPO");
        assert_eq!(cell(&table, 1, 0), "Número do Carro *");
        assert_eq!(cell(&table, fields.len() + 1, 1), "2h 30m");
    }

    #[test]
    fn test_optional_fields_are_not_marked() {
        let form = OccurrenceForm::new(IncidentType::Trip);
        let table = View::form_table(&form);
        let position = IncidentType::Trip
            .fields()
            .iter()
            .position(|id| *id == FieldId::CarChangeRequired)
            .unwrap();

        assert_eq!(cell(&table, position + 1, 0), "Troca do Carro?");
        assert_eq!(cell(&table, position + 1, 1), "NÃO");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Message::FieldInvalid("Horário do Chamado".into(), "Campo obrigatório".into()).to_string(),
            "Horário do Chamado: Campo obrigatório"
        );
        assert_eq!(Message::ReportCopied.to_string(), "Texto copiado para a área de transferência!");
        assert_eq!(Message::FieldsCleared.to_string(), "Campos limpos com sucesso");
    }
}
