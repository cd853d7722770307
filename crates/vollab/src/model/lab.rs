//! Lab records and their reports.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Region;
use crate::error::Error;

/// Visit status of a lab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LabStatus {
    /// Not yet visited.
    #[default]
    Pending,
    /// A visit is under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// The visit is done.
    Completed,
    /// Something went wrong at the lab.
    #[serde(rename = "Issue Reported")]
    IssueReported,
}

impl LabStatus {
    /// All statuses, in the order they are offered to the user.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::IssueReported,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::IssueReported => "Issue Reported",
        }
    }
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LabStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match wanted.as_str() {
            "pending" => Ok(Self::Pending),
            "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "issuereported" | "issue" => Ok(Self::IssueReported),
            _ => Err(Error::UnknownVariant {
                kind: "lab status",
                value: s.to_string(),
            }),
        }
    }
}

/// A visit or incident report attached to a lab. Reports are append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier.
    pub id: String,
    /// Day the report was filed.
    pub date: NaiveDate,
    /// One-line summary.
    pub summary: String,
    /// Where the full report lives.
    pub url: String,
}

/// A diagnostic lab tracked for visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    /// Unique id, assigned by the store.
    pub id: String,
    /// Lab name.
    pub name: String,
    /// Region the lab belongs to.
    pub region: Region,
    /// District within the region.
    pub district: String,
    /// Current visit status.
    pub status: LabStatus,
    /// Street address.
    pub address: String,
    /// Person to contact at the lab.
    pub contact_person: String,
    /// Phone number of the contact person.
    pub contact_number: String,
    /// Contact email.
    pub email: String,
    /// Date of the most recent visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Reports in the order they were filed.
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl Lab {
    /// Build a stored record from an insert request.
    ///
    /// The report list always starts empty.
    #[must_use]
    pub fn from_new(id: String, new: NewLab) -> Self {
        Self {
            id,
            name: new.name,
            region: new.region,
            district: new.district,
            status: new.status,
            address: new.address,
            contact_person: new.contact_person,
            contact_number: new.contact_number,
            email: new.email,
            last_visit: new.last_visit,
            notes: new.notes,
            reports: Vec::new(),
        }
    }

    /// Check whether this lab lies in the given region.
    #[must_use]
    pub fn matches_region(&self, region: Region) -> bool {
        self.region == region
    }
}

/// A lab that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLab {
    /// Lab name.
    pub name: String,
    /// Region the lab belongs to.
    pub region: Region,
    /// District within the region.
    pub district: String,
    /// Initial status.
    #[serde(default)]
    pub status: LabStatus,
    /// Street address.
    pub address: String,
    /// Person to contact at the lab.
    pub contact_person: String,
    /// Phone number of the contact person.
    pub contact_number: String,
    /// Contact email.
    pub email: String,
    /// Date of the most recent visit.
    #[serde(default)]
    pub last_visit: Option<NaiveDate>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}
