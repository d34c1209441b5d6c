//! Positional offsets of the export format.
//!
//! Offsets are data rather than code so that a different export layout only
//! needs another [`ColumnMap`] value, never another projector.

/// Offsets inside a `*S` section descriptor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionColumns {
    pub section_id: usize,
    pub last_name: usize,
    pub first_name: usize,
    pub zip: usize,
    pub state: usize,
    pub city: usize,
    pub street: usize,
    pub phone: usize,
    pub email: usize,
    pub card_number: usize,
    pub card_month: usize,
    pub card_year: usize,
    pub card_cvv: usize,
}

/// Offsets inside a `*I` item descriptor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemColumns {
    pub size: usize,
    pub color: usize,
    pub keyword: usize,
    pub category: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub section: SectionColumns,
    pub item: ItemColumns,
}

impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap {
            section: SectionColumns {
                section_id: 1,
                last_name: 2,
                first_name: 3,
                zip: 4,
                state: 5,
                city: 6,
                street: 7,
                phone: 8,
                email: 9,
                card_number: 13,
                card_month: 14,
                card_year: 15,
                card_cvv: 16,
            },
            item: ItemColumns {
                size: 2,
                color: 3,
                keyword: 4,
                category: 5,
            },
        }
    }
}
