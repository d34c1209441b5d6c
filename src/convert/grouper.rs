use log::warn;

use super::layout::ColumnMap;
use super::{ConvertError, Record, RecordTag};

/// A section descriptor and the items recorded under it before the next marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup<'a> {
    descriptor: Option<&'a Record>,
    items: Vec<&'a Record>,
}

impl<'a> SectionGroup<'a> {
    pub fn new(descriptor: Option<&'a Record>, items: Vec<&'a Record>) -> SectionGroup<'a> {
        SectionGroup { descriptor, items }
    }

    /// `None` when items appeared before any descriptor.
    pub fn descriptor(&self) -> Option<&'a Record> {
        self.descriptor
    }

    pub fn items(&self) -> &[&'a Record] {
        &self.items
    }

    /// Reads a descriptor field; a missing descriptor reads as blank.
    pub fn descriptor_field(&self, index: usize) -> Result<&'a str, ConvertError> {
        match self.descriptor {
            Some(record) => record.field(index),
            None => Ok(""),
        }
    }

    pub fn section_id(&self, layout: &ColumnMap) -> Result<&'a str, ConvertError> {
        self.descriptor_field(layout.section.section_id)
    }
}

/// Partitions the record stream into section groups.
///
/// A `*Section` marker flushes the buffered items together with the most recent
/// descriptor, which stays current until another `*S` record replaces it. The
/// trailing run after the last marker is always flushed, even when empty.
pub fn group(records: &[Record]) -> Vec<SectionGroup<'_>> {
    let mut groups = Vec::new();
    let mut descriptor: Option<&Record> = None;
    let mut items: Vec<&Record> = Vec::new();

    for record in records {
        match record.tag() {
            Some(RecordTag::SectionDescriptor) => descriptor = Some(record),
            Some(RecordTag::ItemDescriptor) => items.push(record),
            Some(RecordTag::SectionMarker) => groups.push(flush(descriptor, &mut items)),
            None => {},
        }
    }
    groups.push(flush(descriptor, &mut items));

    groups
}

fn flush<'a>(descriptor: Option<&'a Record>, items: &mut Vec<&'a Record>) -> SectionGroup<'a> {
    if descriptor.is_none() {
        if let Some(first) = items.first() {
            warn!(
                "セクション情報の前に商品行があります。空のセクションとして出力します。テキストファイル{}行目",
                first.line()
            );
        }
    }

    SectionGroup::new(descriptor, std::mem::take(items))
}
