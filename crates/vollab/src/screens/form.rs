//! The administrator's lab form.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Lab, LabStatus, NewLab, Region};

/// Editable lab fields. Every field except `notes` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabForm {
    /// Lab name.
    pub name: String,
    /// District.
    pub district: String,
    /// Street address.
    pub address: String,
    /// Contact person.
    pub contact_person: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Contact email.
    pub email: String,
    /// Optional notes.
    pub notes: String,
}

impl LabForm {
    /// A blank form for adding a lab.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form prefilled from an existing lab.
    #[must_use]
    pub fn from_lab(lab: &Lab) -> Self {
        Self {
            name: lab.name.clone(),
            district: lab.district.clone(),
            address: lab.address.clone(),
            contact_person: lab.contact_person.clone(),
            contact_number: lab.contact_number.clone(),
            email: lab.email.clone(),
            notes: lab.notes.clone().unwrap_or_default(),
        }
    }

    /// Check that every required field is filled in.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("district", &self.district),
            ("address", &self.address),
            ("contact person", &self.contact_person),
            ("contact number", &self.contact_number),
            ("email", &self.email),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(Error::MissingField { field: *field }),
            None => Ok(()),
        }
    }

    /// Build an insert request. New labs always start as Pending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if a required field is blank.
    pub fn to_new_lab(&self, region: Region) -> Result<NewLab> {
        self.validate()?;
        Ok(NewLab {
            name: self.name.trim().to_string(),
            region,
            district: self.district.trim().to_string(),
            status: LabStatus::Pending,
            address: self.address.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            email: self.email.trim().to_string(),
            last_visit: None,
            notes: self.notes(),
        })
    }

    /// Apply the form to an existing lab.
    ///
    /// Id, status, last visit and reports are carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if a required field is blank.
    pub fn apply_to(&self, lab: &Lab, region: Region) -> Result<Lab> {
        self.validate()?;
        Ok(Lab {
            name: self.name.trim().to_string(),
            region,
            district: self.district.trim().to_string(),
            address: self.address.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            contact_number: self.contact_number.trim().to_string(),
            email: self.email.trim().to_string(),
            notes: self.notes(),
            ..lab.clone()
        })
    }

    fn notes(&self) -> Option<String> {
        let notes = self.notes.trim();
        (!notes.is_empty()).then(|| notes.to_string())
    }
}
