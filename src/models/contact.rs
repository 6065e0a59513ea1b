//! Contact model representing a single phonebook entry.

use crate::domain::ContactId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A phonebook entry.
///
/// `id` is assigned by the store on first save and is never read from
/// request bodies. `age` is not part of the record; see [`ContactResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    /// Store-assigned identifier, `None` until the contact has been saved
    #[serde(skip_deserializing)]
    pub id: Option<ContactId>,

    /// Display name
    pub name: Option<String>,

    /// Phone number, unique across the phonebook
    pub phone_number: Option<String>,

    /// Date of birth (ISO `YYYY-MM-DD` on the wire)
    pub date_of_birth: Option<NaiveDate>,
}

impl Contact {
    /// Create an unsaved contact with all fields.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        date_of_birth: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            phone_number: Some(phone_number.into()),
            date_of_birth: Some(date_of_birth),
        }
    }

    /// Create an unsaved contact with only a name and phone number.
    pub fn with_phone(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            phone_number: Some(phone_number.into()),
            date_of_birth: None,
        }
    }

    /// Whole years between the date of birth and `today`.
    ///
    /// `None` when no date of birth is recorded or it lies after `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.and_then(|dob| today.years_since(dob))
    }

    /// Wire representation with the derived age computed against `today`.
    pub fn to_response(&self, today: NaiveDate) -> ContactResponse {
        ContactResponse {
            age: self.age_on(today),
            contact: self.clone(),
        }
    }
}

/// JSON shape returned to clients: the stored fields plus the derived age.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactResponse {
    #[serde(flatten)]
    pub contact: Contact,

    /// Derived from `dateOfBirth`, read-only
    pub age: Option<u32>,
}

/// Requested changes for an existing contact.
///
/// Each field is applied independently and only when it carries a
/// non-empty value that differs from the stored one.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactUpdate {
    pub phone_number: Option<String>,
    pub name: Option<String>,
}

impl ContactUpdate {
    /// Apply the update in place. Returns `true` when any field changed.
    pub fn apply_to(&self, contact: &mut Contact) -> bool {
        let phone_changed = assign_if_changed(&mut contact.phone_number, &self.phone_number);
        let name_changed = assign_if_changed(&mut contact.name, &self.name);
        phone_changed || name_changed
    }
}

fn assign_if_changed(current: &mut Option<String>, requested: &Option<String>) -> bool {
    match requested.as_deref() {
        Some(value) if !value.is_empty() && current.as_deref() != Some(value) => {
            *current = Some(value.to_string());
            true
        }
        _ => false,
    }
}
