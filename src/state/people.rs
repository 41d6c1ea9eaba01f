//! Edit forms for people records and the user's own profile.

#[cfg(test)]
#[path = "people_test.rs"]
mod people_test;

use crate::net::types::{ClientUpdate, PersonRecord, PersonUpdate, Profile, ProfileUpdate};

pub const PHONE_DIGITS: usize = 9;

/// Live feedback while typing a phone number; `None` when nothing is wrong yet.
pub fn phone_hint(raw: &str) -> Option<&'static str> {
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        Some("Digits only.")
    } else if !raw.is_empty() && raw.len() != PHONE_DIGITS {
        Some("The phone number must have 9 digits.")
    } else {
        None
    }
}

fn is_valid_phone(raw: &str) -> bool {
    raw.len() == PHONE_DIGITS && raw.chars().all(|c| c.is_ascii_digit())
}

/// Editable copy of a client or guard record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub last_names: String,
    pub dni: String,
    pub address: String,
    pub phone: String,
    pub active: bool,
}

impl PersonForm {
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone().unwrap_or_default(),
            full_name: record.full_name.clone(),
            last_names: record.last_names.clone().unwrap_or_default(),
            dni: record.dni.clone().unwrap_or_default(),
            address: record.address.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            active: record.is_active(),
        }
    }

    /// # Errors
    ///
    /// A user-facing message when the name is blank.
    pub fn validate(&self) -> Result<PersonUpdate, &'static str> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err("Enter a name.");
        }
        Ok(PersonUpdate {
            email: self.email.trim().to_owned(),
            full_name: full_name.to_owned(),
            last_names: self.last_names.trim().to_owned(),
            dni: self.dni.trim().to_owned(),
            address: self.address.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
        })
    }

    /// # Errors
    ///
    /// Same as [`PersonForm::validate`].
    pub fn client_update(&self) -> Result<ClientUpdate, &'static str> {
        Ok(ClientUpdate { person: self.validate()?, status: u8::from(self.active) })
    }

    /// Apply a saved form back onto the listed record.
    pub fn merge_into(&self, record: &mut PersonRecord) {
        record.email = Some(self.email.trim().to_owned());
        record.full_name = self.full_name.trim().to_owned();
        record.last_names = Some(self.last_names.trim().to_owned());
        record.dni = Some(self.dni.trim().to_owned());
        record.address = Some(self.address.trim().to_owned());
        record.phone = Some(self.phone.trim().to_owned());
        record.status = Some(u8::from(self.active));
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub last_names: String,
    pub address: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            last_names: profile.last_names.clone(),
            address: profile.address.clone(),
            phone: profile.phone.clone(),
        }
    }

    /// # Errors
    ///
    /// A user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<ProfileUpdate, &'static str> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err("Enter your name.");
        }
        let phone = self.phone.trim();
        if !is_valid_phone(phone) {
            return Err("Enter a 9-digit phone number.");
        }
        Ok(ProfileUpdate {
            full_name: full_name.to_owned(),
            last_names: self.last_names.trim().to_owned(),
            address: self.address.trim().to_owned(),
            phone: phone.to_owned(),
        })
    }
}
