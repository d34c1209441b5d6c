use getset::{CopyGetters, Getters};
use log::warn;

use super::address::profile_label;
use super::layout::ColumnMap;
use super::normalize::{normalize_category, normalize_size};
use super::{bool_text, Cell, ConvertError, Record};

pub const SHEET_LABEL: &str = "Sample";
pub const MODE: &str = "super";
pub const DELAY: i64 = 0;

pub const HEADER: [&str; 13] = [
    "Task Name",
    "Sheet Name",
    "Profile Name",
    "Keywords/Link",
    "Proxy List",
    "Category",
    "Color",
    "Size",
    "Mode",
    "Delay",
    "RetryOnFailure",
    "Restock Mode",
    "captcha bypass",
];

const COL_TASK: u16 = 0;
const COL_SHEET: u16 = 1;
const COL_PROFILE: u16 = 2;
const COL_KEYWORD: u16 = 3;
const COL_PROXY: u16 = 4;
const COL_CATEGORY: u16 = 5;
const COL_COLOR: u16 = 6;
const COL_SIZE: u16 = 7;
const COL_MODE: u16 = 8;
const COL_DELAY: u16 = 9;
const COL_RETRY_ON_FAILURE: u16 = 10;
const COL_RESTOCK_MODE: u16 = 11;
const COL_CAPTCHA_BYPASS: u16 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct TaskRow {
    #[getset(get_copy = "pub")]
    row: u32,
    #[getset(get = "pub")]
    task: String,
    #[getset(get = "pub")]
    profile: String,
    #[getset(get = "pub")]
    keyword: String,
    #[getset(get = "pub")]
    category: String,
    #[getset(get = "pub")]
    color: String,
    #[getset(get = "pub")]
    size: String,
}

impl TaskRow {
    /// Proxy list index; one proxy list per row.
    pub fn proxy(&self) -> i64 {
        i64::from(self.row)
    }

    pub fn cells(&self) -> Vec<(u16, Cell)> {
        vec![
            (COL_TASK, Cell::from(self.task.as_str())),
            (COL_SHEET, Cell::from(SHEET_LABEL)),
            (COL_PROFILE, Cell::from(self.profile.as_str())),
            (COL_KEYWORD, Cell::from(self.keyword.as_str())),
            (COL_PROXY, Cell::from(self.proxy())),
            (COL_CATEGORY, Cell::from(self.category.as_str())),
            (COL_COLOR, Cell::from(self.color.as_str())),
            (COL_SIZE, Cell::from(self.size.as_str())),
            (COL_MODE, Cell::from(MODE)),
            (COL_DELAY, Cell::from(DELAY)),
            (COL_RETRY_ON_FAILURE, Cell::from(bool_text(true))),
            (COL_RESTOCK_MODE, Cell::from(bool_text(true))),
            (COL_CAPTCHA_BYPASS, Cell::from(bool_text(true))),
        ]
    }
}

pub fn task_label(row: u32) -> String {
    format!("Task{}", row)
}

/// Projects one `*I` record into the task row numbered `row`.
///
/// Unknown size tokens are kept verbatim and reported with the row number and
/// `section_id` so they can be checked by hand.
pub fn project_task(item: &Record, row: u32, section_id: &str, layout: &ColumnMap) -> Result<TaskRow, ConvertError> {
    let columns = &layout.item;
    let raw_size = item.field(columns.size)?;

    let size = match normalize_size(raw_size) {
        Some(label) => label.to_string(),
        None => {
            warn!(
                "サイズ'{}'は、規定外のため、そのままtask.xlsxに入力します。Excel行{} セクション{}",
                raw_size, row, section_id
            );
            raw_size.to_string()
        },
    };

    Ok(TaskRow {
        row,
        task: task_label(row),
        profile: profile_label(row),
        keyword: item.field(columns.keyword)?.to_string(),
        category: normalize_category(item.field(columns.category)?),
        color: item.field(columns.color)?.to_string(),
        size,
    })
}
