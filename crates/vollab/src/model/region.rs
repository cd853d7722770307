//! The fixed set of regions that partition lab records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the eight geographic regions labs are grouped by.
///
/// Regions are not stored; they are a closed set used as a partition key and
/// as the tiles of the region picker grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Maharashtra.
    Maharashtra,
    /// Gujarat.
    Gujarat,
    /// Delhi.
    Delhi,
    /// Telangana.
    Telangana,
    /// Karnataka.
    Karnataka,
    /// Tamil Nadu.
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    /// Goa.
    Goa,
    /// Andhra Pradesh.
    #[serde(rename = "Andhra Pradesh")]
    AndhraPradesh,
}

impl Region {
    /// All regions, in grid order.
    pub const ALL: [Self; 8] = [
        Self::Maharashtra,
        Self::Gujarat,
        Self::Delhi,
        Self::Telangana,
        Self::Karnataka,
        Self::TamilNadu,
        Self::Goa,
        Self::AndhraPradesh,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maharashtra => "Maharashtra",
            Self::Gujarat => "Gujarat",
            Self::Delhi => "Delhi",
            Self::Telangana => "Telangana",
            Self::Karnataka => "Karnataka",
            Self::TamilNadu => "Tamil Nadu",
            Self::Goa => "Goa",
            Self::AndhraPradesh => "Andhra Pradesh",
        }
    }

    /// The region shown first when nothing else is known.
    #[must_use]
    pub const fn first() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|region| normalize(region.name()) == wanted)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "region",
                value: s.to_string(),
            })
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
