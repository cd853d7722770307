//! Role dashboards.
//!
//! Both dashboards browse regions and drill into the labs of one region;
//! they differ in what can be done to a lab. [`Dashboard`] picks the right one
//! for an identity by matching on its role.

pub mod admin;
pub mod volunteer;

pub use admin::{AdminDashboard, FormTarget, OpenForm};
pub use volunteer::{BrowseMode, Section, SupportContact, VolunteerDashboard, SUPPORT};

use crate::error::Result;
use crate::i18n::Locale;
use crate::model::{Identity, Lab, Region};
use crate::service::LabService;

/// Region browsing shared by both dashboards.
pub trait RegionBrowser {
    /// Every loaded lab.
    fn labs(&self) -> &[Lab];

    /// The region being browsed, if any.
    fn region(&self) -> Option<Region>;

    /// Whether a service call is in flight.
    fn is_loading(&self) -> bool;

    /// Loaded labs of the browsed region, in store order.
    fn labs_in_region(&self) -> Vec<&Lab> {
        match self.region() {
            Some(region) => self
                .labs()
                .iter()
                .filter(|lab| lab.matches_region(region))
                .collect(),
            None => Vec::new(),
        }
    }

    /// A loaded lab by id.
    fn find(&self, id: &str) -> Option<&Lab> {
        self.labs().iter().find(|lab| lab.id == id)
    }
}

/// The dashboard of the signed-in role.
#[derive(Debug, Clone)]
pub enum Dashboard {
    /// Volunteer dashboard.
    Volunteer(VolunteerDashboard),
    /// Admin dashboard.
    Admin(AdminDashboard),
}

impl Dashboard {
    /// Build the dashboard matching the identity's role.
    #[must_use]
    pub fn for_identity(identity: &Identity, locale: Locale) -> Self {
        match identity {
            Identity::Volunteer(profile) => {
                Self::Volunteer(VolunteerDashboard::new(profile.clone(), locale))
            }
            Identity::Admin(profile) => Self::Admin(AdminDashboard::new(profile.clone())),
        }
    }

    /// Reload the lab list.
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn load<S>(&mut self, service: &S) -> Result<()>
    where
        S: LabService + ?Sized,
    {
        match self {
            Self::Volunteer(dash) => dash.load(service).await,
            Self::Admin(dash) => dash.load(service).await,
        }
    }

    /// The shared browsing view of either dashboard.
    #[must_use]
    pub fn browser(&self) -> &dyn RegionBrowser {
        match self {
            Self::Volunteer(dash) => dash,
            Self::Admin(dash) => dash,
        }
    }

    /// The volunteer dashboard, if this is one.
    #[must_use]
    pub fn as_volunteer(&self) -> Option<&VolunteerDashboard> {
        match self {
            Self::Volunteer(dash) => Some(dash),
            Self::Admin(_) => None,
        }
    }

    /// Mutable volunteer dashboard, if this is one.
    pub fn as_volunteer_mut(&mut self) -> Option<&mut VolunteerDashboard> {
        match self {
            Self::Volunteer(dash) => Some(dash),
            Self::Admin(_) => None,
        }
    }

    /// The admin dashboard, if this is one.
    #[must_use]
    pub fn as_admin(&self) -> Option<&AdminDashboard> {
        match self {
            Self::Admin(dash) => Some(dash),
            Self::Volunteer(_) => None,
        }
    }

    /// Mutable admin dashboard, if this is one.
    pub fn as_admin_mut(&mut self) -> Option<&mut AdminDashboard> {
        match self {
            Self::Admin(dash) => Some(dash),
            Self::Volunteer(_) => None,
        }
    }
}
