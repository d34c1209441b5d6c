use std::fmt;
use std::path::PathBuf;

use getset::{CopyGetters, Getters};
use log::debug;
use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::Deserialize;
use thiserror::Error;

pub mod address;
pub mod grouper;
pub mod layout;
pub mod normalize;
pub mod task;


use address::AddressRow;
use layout::ColumnMap;
use task::TaskRow;

/// First worksheet row that carries data; row 0 is the header.
pub const FIRST_DATA_ROW: u32 = 1;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("ファイル読込に失敗しました: {}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("テキスト->TSV変換エラー")]
    Parse(#[from] csv::Error),
    #[error("テキストファイル{line}行目の項目数が不足しています: {content}")]
    MalformedRecord { line: u64, content: String },
    #[error("{field}の数値変換エラー。 テキストファイルセクション{section}")]
    FieldFormat { field: CardField, section: String },
    #[error("{name}の作成に失敗しました")]
    Workbook {
        name: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
    #[error("{}の保存に失敗しました", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Card sub-fields that must be numeric once a card number has been detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Month,
    Year,
    Cvv,
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardField::Month => "カード期限月",
            CardField::Year => "カード期限年",
            CardField::Cvv => "カードCVV",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RecordTag {
    #[serde(rename = "*Section")]
    SectionMarker,
    #[serde(rename = "*S")]
    SectionDescriptor,
    #[serde(rename = "*I")]
    ItemDescriptor,
}

/// One line of the tab-delimited export.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Record {
    /// 1-based line number in the source file.
    #[getset(get_copy = "pub")]
    line: u64,
    #[getset(get = "pub")]
    fields: Vec<String>,
}

impl Record {
    pub fn new(line: u64, fields: Vec<String>) -> Record {
        Record { line, fields }
    }

    /// Returns `None` for an empty record or a tag outside the known vocabulary.
    pub fn tag(&self) -> Option<RecordTag> {
        let first = self.fields.first()?;
        let deserializer: StrDeserializer<'_, serde::de::value::Error> = first.as_str().into_deserializer();
        RecordTag::deserialize(deserializer).ok()
    }

    pub fn field(&self, index: usize) -> Result<&str, ConvertError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ConvertError::MalformedRecord {
                line: self.line,
                content: self.fields.join("\t"),
            })
    }
}

/// A single worksheet cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(i64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

/// Flags are written as the text `true`/`false`, not as boolean cells.
pub fn bool_text(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Both row sets of a finished pass, held in memory until they are written.
#[derive(Debug, Default, Getters, CopyGetters)]
pub struct Conversion {
    #[getset(get = "pub")]
    address_rows: Vec<AddressRow>,
    #[getset(get = "pub")]
    task_rows: Vec<TaskRow>,
    #[getset(get_copy = "pub")]
    group_count: usize,
}

/// Groups `records` into sections and projects every group into address and task rows.
///
/// Row numbers start at [`FIRST_DATA_ROW`] and advance once per item across the
/// whole run, so the address row and task row of an item always share a number.
pub fn convert(records: &[Record], layout: &ColumnMap) -> Result<Conversion, ConvertError> {
    let groups = grouper::group(records);
    let mut conversion = Conversion {
        group_count: groups.len(),
        ..Default::default()
    };

    let mut next_row = FIRST_DATA_ROW;
    for group in &groups {
        let (address_rows, row_after) = address::project_address(group, next_row, layout)?;
        if address_rows.is_empty() {
            debug!("skipping section without items, line={:?}", group.descriptor().map(Record::line));
            continue;
        }

        let section_id = group.section_id(layout)?;
        for (row, item) in (next_row..row_after).zip(group.items()) {
            conversion
                .task_rows
                .push(task::project_task(item, row, section_id, layout)?);
        }

        debug!(
            "projected section, id={}, rows={}..{}",
            section_id, next_row, row_after
        );
        conversion.address_rows.extend(address_rows);
        next_row = row_after;
    }

    Ok(conversion)
}
