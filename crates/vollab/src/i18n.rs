//! Static display strings for the two supported locales.
//!
//! Each locale maps to a fixed table of message keys. There is no
//! interpolation or pluralization; callers concatenate as needed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Hindi.
    Hi,
}

impl Locale {
    /// All locales, in toggle order.
    pub const ALL: [Self; 2] = [Self::En, Self::Hi];

    /// Language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    /// The other locale.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "hi" | "hindi" => Ok(Self::Hi),
            _ => Err(Error::UnknownVariant {
                kind: "locale",
                value: s.to_string(),
            }),
        }
    }
}

/// Keys of the translated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Brand line, first word.
    Volunteer,
    /// Brand line, second word.
    Connect,
    /// Region grid heading.
    Explore,
    /// Prefix of the lab count line.
    LabsIn,
    /// Empty list heading.
    NoLabs,
    /// Empty list explanation.
    NoLabsDesc,
    /// Shown while labs load.
    Loading,
    /// Lab card action.
    ViewDetails,
    /// Lab card footer.
    LastUpdated,
    /// Back button.
    Back,
    /// Profile section title.
    Profile,
    /// Support section title.
    ContactAdmin,
    /// Home section title.
    Home,
}

impl MessageKey {
    /// Every key.
    pub const ALL: [Self; 13] = [
        Self::Volunteer,
        Self::Connect,
        Self::Explore,
        Self::LabsIn,
        Self::NoLabs,
        Self::NoLabsDesc,
        Self::Loading,
        Self::ViewDetails,
        Self::LastUpdated,
        Self::Back,
        Self::Profile,
        Self::ContactAdmin,
        Self::Home,
    ];
}

type Table = [(MessageKey, &'static str); 13];

const EN: Table = [
    (MessageKey::Volunteer, "VOLUNTEER"),
    (MessageKey::Connect, "CONNECT"),
    (MessageKey::Explore, "Explore by State"),
    (MessageKey::LabsIn, "Labs in"),
    (MessageKey::NoLabs, "No labs found"),
    (
        MessageKey::NoLabsDesc,
        "There are no labs assigned to this state currently.",
    ),
    (MessageKey::Loading, "Loading labs..."),
    (MessageKey::ViewDetails, "View Details"),
    (MessageKey::LastUpdated, "Last updated recently"),
    (MessageKey::Back, "Back"),
    (MessageKey::Profile, "My Profile"),
    (MessageKey::ContactAdmin, "Contact Support"),
    (MessageKey::Home, "Home"),
];

const HI: Table = [
    (MessageKey::Volunteer, "स्वयंसेवक"),
    (MessageKey::Connect, "कनेक्ट"),
    (MessageKey::Explore, "राज्य चुनें"),
    (MessageKey::LabsIn, "लैब -"),
    (MessageKey::NoLabs, "कोई लैब नहीं मिली"),
    (MessageKey::NoLabsDesc, "इस राज्य में कोई लैब उपलब्ध नहीं है।"),
    (MessageKey::Loading, "लोड हो रहा है..."),
    (MessageKey::ViewDetails, "विवरण देखें"),
    (MessageKey::LastUpdated, "हाल ही में अपडेट"),
    (MessageKey::Back, "पीछे"),
    (MessageKey::Profile, "मेरी प्रोफाइल"),
    (MessageKey::ContactAdmin, "संपर्क करें"),
    (MessageKey::Home, "होम"),
];

/// Lookup from locale to its string table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    fn table(locale: Locale) -> &'static Table {
        match locale {
            Locale::En => &EN,
            Locale::Hi => &HI,
        }
    }

    /// Translated text for a key.
    #[must_use]
    pub fn text(locale: Locale, key: MessageKey) -> &'static str {
        Self::table(locale)
            .iter()
            .find(|(k, _)| *k == key)
            .map_or("", |(_, text)| *text)
    }
}
