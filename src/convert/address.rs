use getset::{CopyGetters, Getters};

use super::grouper::SectionGroup;
use super::layout::ColumnMap;
use super::{bool_text, Cell, CardField, ConvertError};

pub const COUNTRY: &str = "Japan";
pub const CHECKOUT_LIMIT: &str = "No checkout limit";

pub const HEADER: [&str; 27] = [
    "First",
    "Last",
    "Country",
    "City",
    "Address",
    "Apt/House",
    "State",
    "ZipCode",
    "Phone",
    "First",
    "Last",
    "Country",
    "City",
    "Address",
    "Apt / House",
    "State",
    "ZipCode",
    "Phone",
    "Profile Name",
    "Card Number",
    "Month",
    "Year",
    "CVV",
    "Card Name",
    "Email",
    "Checkout Limit",
    "Use COD",
];

const COL_FIRST_NAME: u16 = 0;
const COL_LAST_NAME: u16 = 1;
const COL_COUNTRY: u16 = 2;
const COL_CITY: u16 = 3;
const COL_STREET: u16 = 4;
const COL_STATE: u16 = 6;
const COL_ZIP: u16 = 7;
const COL_PHONE: u16 = 8;
const COL_PROFILE: u16 = 18;
const COL_CARD_NUMBER: u16 = 19;
const COL_CARD_MONTH: u16 = 20;
const COL_CARD_YEAR: u16 = 21;
const COL_CARD_CVV: u16 = 22;
const COL_EMAIL: u16 = 24;
const COL_CHECKOUT_LIMIT: u16 = 25;
const COL_USE_COD: u16 = 26;

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Card {
    /// Kept as written in the export.
    #[getset(get = "pub")]
    number: String,
    #[getset(get_copy = "pub")]
    month: i64,
    #[getset(get_copy = "pub")]
    year: i64,
    #[getset(get_copy = "pub")]
    cvv: i64,
}

/// A descriptor either carries a complete card or pays cash on delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payment {
    Card(Card),
    CashOnDelivery,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct AddressRow {
    #[getset(get_copy = "pub")]
    row: u32,
    #[getset(get = "pub")]
    first_name: String,
    #[getset(get = "pub")]
    last_name: String,
    #[getset(get = "pub")]
    city: String,
    #[getset(get = "pub")]
    street: String,
    #[getset(get = "pub")]
    state: String,
    #[getset(get = "pub")]
    zip: String,
    #[getset(get = "pub")]
    phone: String,
    #[getset(get = "pub")]
    profile: String,
    #[getset(get = "pub")]
    payment: Payment,
    #[getset(get = "pub")]
    email: String,
}

impl AddressRow {
    pub fn cash_on_delivery(&self) -> bool {
        self.payment == Payment::CashOnDelivery
    }

    /// Non-blank cells of this row keyed by worksheet column.
    pub fn cells(&self) -> Vec<(u16, Cell)> {
        let mut cells = vec![
            (COL_FIRST_NAME, Cell::from(self.first_name.as_str())),
            (COL_LAST_NAME, Cell::from(self.last_name.as_str())),
            (COL_COUNTRY, Cell::from(COUNTRY)),
            (COL_CITY, Cell::from(self.city.as_str())),
            (COL_STREET, Cell::from(self.street.as_str())),
            (COL_STATE, Cell::from(self.state.as_str())),
            (COL_ZIP, Cell::from(self.zip.as_str())),
            (COL_PHONE, Cell::from(self.phone.as_str())),
            (COL_PROFILE, Cell::from(self.profile.as_str())),
        ];

        if let Payment::Card(card) = &self.payment {
            cells.push((COL_CARD_NUMBER, Cell::from(card.number.as_str())));
            cells.push((COL_CARD_MONTH, Cell::from(card.month)));
            cells.push((COL_CARD_YEAR, Cell::from(card.year)));
            cells.push((COL_CARD_CVV, Cell::from(card.cvv)));
        }

        cells.push((COL_EMAIL, Cell::from(self.email.as_str())));
        cells.push((COL_CHECKOUT_LIMIT, Cell::from(CHECKOUT_LIMIT)));
        cells.push((COL_USE_COD, Cell::from(bool_text(self.cash_on_delivery()))));

        cells
    }
}

pub fn profile_label(row: u32) -> String {
    format!("Profile{}", row)
}

/// Emits one address row per item of `group`, numbered from `start_row`.
///
/// Returns the rows and the next free row number; an empty group yields no
/// rows and hands `start_row` back unchanged.
pub fn project_address(
    group: &SectionGroup<'_>,
    start_row: u32,
    layout: &ColumnMap,
) -> Result<(Vec<AddressRow>, u32), ConvertError> {
    let item_count = group.items().len();
    if item_count == 0 {
        return Ok((Vec::new(), start_row));
    }

    let columns = &layout.section;
    let section_id = group.section_id(layout)?;
    let payment = detect_payment(group, layout, section_id)?;

    let first_name = group.descriptor_field(columns.first_name)?;
    let last_name = group.descriptor_field(columns.last_name)?;
    let city = group.descriptor_field(columns.city)?;
    let street = group.descriptor_field(columns.street)?;
    let state = group.descriptor_field(columns.state)?;
    let zip = group.descriptor_field(columns.zip)?;
    let phone = group.descriptor_field(columns.phone)?;
    let email = group.descriptor_field(columns.email)?;

    let next_row = start_row + item_count as u32;
    let rows = (start_row..next_row)
        .map(|row| AddressRow {
            row,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            city: city.to_string(),
            street: street.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            phone: phone.to_string(),
            profile: profile_label(row),
            payment: payment.clone(),
            email: email.to_string(),
        })
        .collect();

    Ok((rows, next_row))
}

/// A card number that parses as an integer commits the descriptor to card
/// payment; from then on month, year and cvv must parse too.
fn detect_payment(group: &SectionGroup<'_>, layout: &ColumnMap, section_id: &str) -> Result<Payment, ConvertError> {
    let columns = &layout.section;
    let number = group.descriptor_field(columns.card_number)?;
    if number.parse::<i64>().is_err() {
        return Ok(Payment::CashOnDelivery);
    }

    let parse = |index: usize, field: CardField| -> Result<i64, ConvertError> {
        group
            .descriptor_field(index)?
            .parse::<i64>()
            .map_err(|_| ConvertError::FieldFormat {
                field,
                section: section_id.to_string(),
            })
    };

    Ok(Payment::Card(Card {
        number: number.to_string(),
        month: parse(columns.card_month, CardField::Month)?,
        year: parse(columns.card_year, CardField::Year)?,
        cvv: parse(columns.card_cvv, CardField::Cvv)?,
    }))
}
