use crate::domain::ComparisonTable;
use crate::errors::ServerError;
use crate::responses::{attachment_response, ResultResp, XLSX_CONTENT_TYPE};
use rust_xlsxwriter::{Format, Workbook};

pub const COMPARISON_FILENAME: &str = "comparacion-vehiculos.xlsx";

/// One row per attribute, one column per vehicle, in selection order.
pub fn comparison_workbook(table: &ComparisonTable) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Comparación")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name sheet: {}", e)))?;

    let bold = Format::new().set_bold();

    worksheet
        .write_string_with_format(0, 0, "Característica", &bold)
        .map_err(|e| ServerError::XlsxError(format!("Failed to write header: {}", e)))?;
    worksheet.set_column_width(0, 18)?;

    for (i, col) in table.columns.iter().enumerate() {
        let c = (i + 1) as u16;
        let title = format!("{} ({})", col.title, col.year);
        worksheet
            .write_string_with_format(0, c, &title, &bold)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", title, e))
            })?;
        worksheet.set_column_width(c, 24)?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string_with_format(r, 0, row.label, &bold)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write label: {}", e)))?;

        for (j, value) in row.values.iter().enumerate() {
            worksheet
                .write_string(r, (j + 1) as u16, value)
                .map_err(|e| {
                    ServerError::XlsxError(format!("Failed to write {}: {}", row.label, e))
                })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_comparison_xlsx(table: &ComparisonTable) -> ResultResp {
    let buffer = comparison_workbook(table)?;
    attachment_response(buffer, COMPARISON_FILENAME, XLSX_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::comparison_table;
    use crate::domain::listing::fixtures::listing;

    #[test]
    fn workbook_is_a_zip_container() {
        let ls = vec![
            listing("1", "Kia", "Rio", 2021, 250000.0),
            listing("2", "Mazda", "2", 2022, 310000.0),
        ];
        let table = comparison_table(&ls).unwrap();

        let bytes = comparison_workbook(&table).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
