//! Signed-in identities.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Region;
use crate::error::Error;

/// The role an identity acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Field volunteer: browses labs and updates their status.
    Volunteer,
    /// Administrator: full create, edit and delete rights over labs.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volunteer => write!(f, "volunteer"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volunteer" => Ok(Self::Volunteer),
            "admin" => Ok(Self::Admin),
            _ => Err(Error::UnknownVariant {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

/// Profile of a volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerProfile {
    /// Identity id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
    /// Region the volunteer is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    /// Volunteer number printed on the badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteer_number: Option<String>,
    /// Date of birth given at signup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
}

/// Profile of an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Identity id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
}

/// An authenticated user. Fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Identity {
    /// A volunteer.
    Volunteer(VolunteerProfile),
    /// An administrator.
    Admin(AdminProfile),
}

impl Identity {
    /// Identity id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Volunteer(p) => &p.id,
            Self::Admin(p) => &p.id,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Volunteer(p) => &p.name,
            Self::Admin(p) => &p.name,
        }
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Volunteer(p) => &p.email,
            Self::Admin(p) => &p.email,
        }
    }

    /// Mobile number.
    #[must_use]
    pub fn mobile(&self) -> &str {
        match self {
            Self::Volunteer(p) => &p.mobile,
            Self::Admin(p) => &p.mobile,
        }
    }

    /// The role this identity acts under.
    #[must_use]
    pub fn role(&self) -> Role {
        match self {
            Self::Volunteer(_) => Role::Volunteer,
            Self::Admin(_) => Role::Admin,
        }
    }

    /// Assigned region. Administrators are not tied to a region.
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        match self {
            Self::Volunteer(p) => p.region,
            Self::Admin(_) => None,
        }
    }
}
