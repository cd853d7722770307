//! The volunteer dashboard: region browsing, profile and support.

use tracing::{debug, error};

use super::RegionBrowser;
use crate::error::Result;
use crate::i18n::{Catalog, Locale, MessageKey};
use crate::model::{Lab, Region, VolunteerProfile};
use crate::service::LabService;

/// Sections reachable from the side menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    /// Region browsing.
    #[default]
    Home,
    /// The volunteer's own profile.
    Profile,
    /// Support contacts.
    Support,
}

/// How the home section presents regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BrowseMode {
    /// Grid of region tiles.
    #[default]
    Grid,
    /// Labs of the selected region.
    List,
}

/// Central support contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportContact {
    /// Team name.
    pub team: &'static str,
    /// Opening hours.
    pub hours: &'static str,
    /// Helpline number.
    pub helpline: &'static str,
    /// Support email.
    pub email: &'static str,
}

/// The support desk volunteers can reach.
pub const SUPPORT: SupportContact = SupportContact {
    team: "Central Support",
    hours: "Available Mon-Fri, 9am - 6pm",
    helpline: "+91 99999 99999",
    email: "support@vollab.com",
};

/// State of the volunteer dashboard.
#[derive(Debug, Clone)]
pub struct VolunteerDashboard {
    profile: VolunteerProfile,
    section: Section,
    mode: BrowseMode,
    region: Region,
    locale: Locale,
    labs: Vec<Lab>,
    loading: bool,
}

impl VolunteerDashboard {
    /// A dashboard for the given volunteer.
    ///
    /// Browsing starts at the volunteer's region, or the first region when
    /// none is assigned.
    #[must_use]
    pub fn new(profile: VolunteerProfile, locale: Locale) -> Self {
        let region = profile.region.unwrap_or_else(Region::first);
        Self {
            profile,
            section: Section::default(),
            mode: BrowseMode::default(),
            region,
            locale,
            labs: Vec::new(),
            loading: false,
        }
    }

    /// Fetch the full lab list.
    ///
    /// On failure the previously loaded labs are kept.
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn load<S>(&mut self, service: &S) -> Result<()>
    where
        S: LabService + ?Sized,
    {
        self.loading = true;
        let result = service.get_labs().await;
        self.loading = false;
        match result {
            Ok(labs) => {
                debug!("Volunteer dashboard loaded {} labs", labs.len());
                self.labs = labs;
                Ok(())
            }
            Err(e) => {
                error!("Failed to fetch labs: {}", e);
                Err(e)
            }
        }
    }

    /// Open the lab list of a region.
    pub fn select_region(&mut self, region: Region) {
        self.section = Section::Home;
        self.region = region;
        self.mode = BrowseMode::List;
    }

    /// Return from the lab list to the region grid.
    pub fn back_to_grid(&mut self) {
        self.mode = BrowseMode::Grid;
    }

    /// Switch section.
    pub fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Change display language.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Swap to the other display language.
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    /// Current section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Current browse mode.
    #[must_use]
    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    /// Current display language.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The signed-in volunteer.
    #[must_use]
    pub fn profile(&self) -> &VolunteerProfile {
        &self.profile
    }

    /// Support contact shown in the support section.
    #[must_use]
    pub fn support(&self) -> &'static SupportContact {
        &SUPPORT
    }

    /// Translated text in the current language.
    #[must_use]
    pub fn text(&self, key: MessageKey) -> &'static str {
        Catalog::text(self.locale, key)
    }

    /// The "N labs in Region" line above the list.
    #[must_use]
    pub fn count_line(&self) -> String {
        format!(
            "{} {} {}",
            self.labs_in_region().len(),
            self.text(MessageKey::LabsIn),
            self.region
        )
    }
}

impl RegionBrowser for VolunteerDashboard {
    fn labs(&self) -> &[Lab] {
        &self.labs
    }

    fn region(&self) -> Option<Region> {
        Some(self.region)
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockService;
    use crate::testing::OfflineService;

    fn profile(region: Option<Region>) -> VolunteerProfile {
        VolunteerProfile {
            id: "vol-1".to_string(),
            name: "John Volunteer".to_string(),
            email: "john@example.com".to_string(),
            mobile: "1".to_string(),
            region,
            volunteer_number: Some("VOL-101".to_string()),
            date_of_birth: None,
        }
    }

    #[test]
    fn test_initial_region_from_profile() {
        let dash = VolunteerDashboard::new(profile(Some(Region::Delhi)), Locale::En);
        assert_eq!(dash.region(), Some(Region::Delhi));
        assert_eq!(dash.mode(), BrowseMode::Grid);
        assert_eq!(dash.section(), Section::Home);
    }

    #[test]
    fn test_initial_region_falls_back_to_first() {
        let dash = VolunteerDashboard::new(profile(None), Locale::En);
        assert_eq!(dash.region(), Some(Region::Maharashtra));
    }

    #[tokio::test]
    async fn test_load_and_browse() {
        let service = MockService::instant();
        let mut dash = VolunteerDashboard::new(profile(None), Locale::En);
        dash.load(&service).await.unwrap();
        assert_eq!(dash.labs().len(), 5);
        assert!(!dash.is_loading());

        dash.select_region(Region::Maharashtra);
        assert_eq!(dash.mode(), BrowseMode::List);
        let names: Vec<_> = dash.labs_in_region().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["City Pathology Lab", "Green Cross Diagnostics"]);
        assert_eq!(dash.count_line(), "2 Labs in Maharashtra");

        dash.select_region(Region::Goa);
        assert!(dash.labs_in_region().is_empty());

        dash.back_to_grid();
        assert_eq!(dash.mode(), BrowseMode::Grid);
        assert_eq!(dash.region(), Some(Region::Goa));
    }

    #[tokio::test]
    async fn test_failed_load_keeps_labs() {
        let service = MockService::instant();
        let mut dash = VolunteerDashboard::new(profile(None), Locale::En);
        dash.load(&service).await.unwrap();
        service.delete_lab("l1").await.unwrap();

        assert!(dash.load(&OfflineService).await.is_err());
        assert_eq!(dash.labs().len(), 5);
        assert!(!dash.is_loading());
    }

    #[test]
    fn test_sections_and_support() {
        let mut dash = VolunteerDashboard::new(profile(None), Locale::En);
        dash.show_section(Section::Support);
        assert_eq!(dash.section(), Section::Support);
        assert_eq!(dash.support().email, "support@vollab.com");
        assert_eq!(dash.support().helpline, "+91 99999 99999");

        dash.show_section(Section::Profile);
        assert_eq!(dash.profile().volunteer_number.as_deref(), Some("VOL-101"));

        dash.select_region(Region::Gujarat);
        assert_eq!(dash.section(), Section::Home);
    }

    #[test]
    fn test_locale_only_changes_text() {
        let mut dash = VolunteerDashboard::new(profile(None), Locale::En);
        dash.select_region(Region::Goa);
        assert_eq!(dash.text(MessageKey::Home), "Home");

        dash.toggle_locale();
        assert_eq!(dash.locale(), Locale::Hi);
        assert_eq!(dash.text(MessageKey::Home), "होम");
        assert_eq!(dash.region(), Some(Region::Goa));
        assert_eq!(dash.mode(), BrowseMode::List);

        dash.set_locale(Locale::En);
        assert_eq!(dash.text(MessageKey::Back), "Back");
    }
}
