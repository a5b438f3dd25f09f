use super::incident::OccurrenceForm;
use prettytable::{row, Table};
use anyhow::Result;

pub struct View {}

impl View {
    /// Review table of a filled form: one row per field, required fields
    /// marked with `*`, total time last.
    pub fn form(form: &OccurrenceForm) -> Result<()> {
        Self::form_table(form).printstd();

        Ok(())
    }

    pub fn form_table(form: &OccurrenceForm) -> Table {
        let mut table = Table::new();

        table.add_row(row!["CAMPO", "VALOR"]);
        for id in form.field_ids() {
            let label = if form.incident.is_required(id) {
                format!("{} *", id.label())
            } else {
                id.label().to_string()
            };
            table.add_row(row![label, form.value(id)]);
        }
        table.add_row(row!["Tempo total da ocorrência", form.total_time()]);

        table
    }
}
