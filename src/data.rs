use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use log::info;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::convert::address::{self, AddressRow};
use crate::convert::task::{self, TaskRow};
use crate::convert::{Cell, Conversion, ConvertError, Record};

pub const ADDRESS_FILE: &str = "address.xlsx";
pub const TASK_FILE: &str = "task.xlsx";
pub const SHEET_NAME: &str = "Sheet1";

pub fn read_records(path: &Path) -> Result<Vec<Record>, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records_from(file)?;
    info!("read input, path={}, records={}", path.display(), records.len());

    Ok(records)
}

/// Reads tab-separated records; lines may carry any number of fields.
///
/// Quotes have no meaning in the export, so fields are kept byte for byte and
/// a stray `"` never joins lines together.
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<Record>, ConvertError> {
    let mut tsv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in tsv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |position| position.line());
        records.push(Record::new(line, record.iter().map(String::from).collect()));
    }

    Ok(records)
}

pub fn render_address_workbook(rows: &[AddressRow]) -> Result<Vec<u8>, ConvertError> {
    render_workbook(
        ADDRESS_FILE,
        &address::HEADER,
        rows.iter().map(|row| (row.row(), row.cells())),
    )
}

pub fn render_task_workbook(rows: &[TaskRow]) -> Result<Vec<u8>, ConvertError> {
    render_workbook(
        TASK_FILE,
        &task::HEADER,
        rows.iter().map(|row| (row.row(), row.cells())),
    )
}

fn render_workbook(
    name: &str,
    header: &[&str],
    rows: impl Iterator<Item = (u32, Vec<(u16, Cell)>)>,
) -> Result<Vec<u8>, ConvertError> {
    let to_error = |source: XlsxError| ConvertError::Workbook {
        name: name.to_string(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_error)?;

    for (col, title) in (0u16..).zip(header) {
        worksheet.write_string(0, col, *title).map_err(to_error)?;
    }

    for (row, cells) in rows {
        for (col, cell) in cells {
            match cell {
                Cell::Text(text) if text.is_empty() => {},
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text).map_err(to_error)?;
                },
                Cell::Integer(value) => {
                    worksheet.write_number(row, col, value as f64).map_err(to_error)?;
                },
            }
        }
    }

    workbook.save_to_buffer().map_err(to_error)
}

/// Writes `address.xlsx` and `task.xlsx` into `output_dir`.
///
/// Both workbooks are rendered in memory before either file is touched.
pub fn write_workbooks(conversion: &Conversion, output_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let address_buffer = render_address_workbook(conversion.address_rows())?;
    let task_buffer = render_task_workbook(conversion.task_rows())?;

    let mut written = Vec::new();
    for (file_name, buffer) in [(ADDRESS_FILE, address_buffer), (TASK_FILE, task_buffer)] {
        let path = output_dir.join(file_name);
        fs::write(&path, buffer).map_err(|source| ConvertError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        info!("wrote workbook, path={}", path.display());
        written.push(path);
    }

    Ok(written)
}
