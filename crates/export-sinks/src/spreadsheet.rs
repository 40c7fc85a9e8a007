//! Spreadsheet sink

use crate::error::SinkError;
use action_catalog::ActionRecord;
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Column headers, matching the catalog source schema
const COLUMNS: [&str; 4] = ["Establecimiento", "Acción", "Documento PDF", "Página"];

/// Write one header row plus one row per record to `dest`
pub fn write_spreadsheet<'a, I>(rows: I, dest: &Path) -> Result<(), SinkError>
where
    I: IntoIterator<Item = &'a ActionRecord>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (idx, record) in rows.into_iter().enumerate() {
        let row = (idx + 1) as u32;
        worksheet.write_string(row, 0, record.establishment.as_str())?;
        worksheet.write_string(row, 1, record.action.as_str())?;
        worksheet.write_string(row, 2, record.document.as_str())?;
        worksheet.write_number(row, 3, f64::from(record.page))?;
    }

    workbook.save(dest)?;
    Ok(())
}
