//! Contact schema constants and the per-row mapping logic
//!
//! The input schema is the fixed column order of the form-collection export;
//! the output schema is the 23-column Google Contacts import format. The
//! mapper is a pure function of (input row, label) -> output row.

use crate::error::{RowError, RowResult};

/// Column names of the Google Contacts import header, in order.
pub const GOOGLE_CONTACTS_COLUMNS: [&str; 23] = [
    "First Name",
    "Middle Name",
    "Last Name",
    "Phonetic First Name",
    "Phonetic Middle Name",
    "Phonetic Last Name",
    "Name Prefix",
    "Name Suffix",
    "Nickname",
    "File As",
    "Organization Name",
    "Organization Title",
    "Organization Department",
    "Birthday",
    "Notes",
    "Photo",
    "Labels",
    "E-mail 1 - Label",
    "E-mail 1 - Value",
    "E-mail 2 - Label",
    "E-mail 2 - Value",
    "Phone 1 - Label",
    "Phone 1 - Value",
];

/// Number of columns in the output schema
pub const NUM_OUTPUT_COLUMNS: usize = 23;

/// 0-based positions of the relevant columns in the input export
pub mod input {
    /// Role/position column (present in the export, not carried to output)
    pub const ROLE: usize = 1;
    pub const FIRST_NAME: usize = 2;
    /// Combined "group + last name" column, e.g. "ПМ-35 ПОНОМАРЕВ"
    pub const GROUP_LAST_NAME: usize = 3;
    /// Personal-login email
    pub const LOGIN_EMAIL: usize = 4;
    /// Provisioned (newly created) email
    pub const PROVISIONED_EMAIL: usize = 5;
    pub const PHONE: usize = 6;
}

/// 0-based positions of the filled columns in the output schema
pub mod output {
    pub const FIRST_NAME: usize = 0;
    pub const LAST_NAME: usize = 2;
    pub const LABELS: usize = 16;
    pub const EMAIL1_VALUE: usize = 18;
    pub const EMAIL2_VALUE: usize = 20;
    pub const PHONE1_VALUE: usize = 22;
}

/// Minimum number of fields a data row must carry
pub const MIN_INPUT_FIELDS: usize = 7;

/// One output row of the Google Contacts schema, always exactly 23 fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow(pub [String; NUM_OUTPUT_COLUMNS]);

impl ContactRow {
    /// Create a row with every field empty
    pub fn empty() -> Self {
        Self(std::array::from_fn(|_| String::new()))
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

/// Split a combined "group + last name" value on its first space.
///
/// The group is everything before the first space (trailing spaces trimmed),
/// the last name is everything after the first run of spaces. Without a
/// space, the whole value is the last name and the group is empty.
pub fn split_group_last_name(combined: &str) -> (String, String) {
    match combined.find(' ') {
        None => (String::new(), combined.to_string()),
        Some(first_space) => {
            let group = combined[..first_space].trim_end_matches(' ').to_string();
            let last_name = combined[first_space..].trim_start_matches(' ').to_string();
            (group, last_name)
        }
    }
}

/// Map one parsed input row plus the run's label to an output row.
///
/// Rows with fewer than [`MIN_INPUT_FIELDS`] fields are rejected. Note the
/// deliberate assignment: the provisioned email lands in "E-mail 1 - Value"
/// and the personal-login email in "E-mail 2 - Value", not the positional
/// order of the input.
pub fn map_contact_row(fields: &[String], label: &str) -> RowResult<ContactRow> {
    if fields.len() < MIN_INPUT_FIELDS {
        return Err(RowError::too_few_fields(fields.len()));
    }

    let mut row = ContactRow::empty();

    row.0[output::FIRST_NAME] = fields[input::FIRST_NAME].clone();

    let (group, last_name) = split_group_last_name(&fields[input::GROUP_LAST_NAME]);
    row.0[output::LAST_NAME] = if group.is_empty() {
        last_name
    } else {
        format!("{} {}", group, last_name)
    };

    row.0[output::LABELS] = label.to_string();
    row.0[output::EMAIL1_VALUE] = fields[input::PROVISIONED_EMAIL].clone();
    row.0[output::EMAIL2_VALUE] = fields[input::LOGIN_EMAIL].clone();
    row.0[output::PHONE1_VALUE] = fields[input::PHONE].clone();

    Ok(row)
}
