//! Screen navigation state machine.
//!
//! ```text
//! Authenticating --signed in--> Dashboard --select lab--> LabDetail
//!       ^                          |   ^                      |
//!       +---------logout-----------+   +---------back---------+
//! ```
//!
//! Any other move is rejected with [`Error::InvalidTransition`] and leaves the
//! current view as it was.

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{Identity, Lab};
use crate::screens::LabDetail;

/// The screen currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    /// Login or signup.
    #[default]
    Authenticating,
    /// The role's dashboard.
    Dashboard,
    /// A single lab, opened from the volunteer dashboard.
    LabDetail(LabDetail),
}

impl View {
    /// Short name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Authenticating => "authentication",
            Self::Dashboard => "dashboard",
            Self::LabDetail(_) => "lab detail",
        }
    }
}

/// Tracks the current [`View`] and applies transitions.
#[derive(Debug, Default, Clone)]
pub struct Navigator {
    view: View,
}

impl Navigator {
    /// Start on the authentication screen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The open lab detail screen, if any.
    #[must_use]
    pub fn lab_detail(&self) -> Option<&LabDetail> {
        match &self.view {
            View::LabDetail(detail) => Some(detail),
            View::Authenticating | View::Dashboard => None,
        }
    }

    /// Mutable access to the open lab detail screen.
    pub fn lab_detail_mut(&mut self) -> Option<&mut LabDetail> {
        match &mut self.view {
            View::LabDetail(detail) => Some(detail),
            View::Authenticating | View::Dashboard => None,
        }
    }

    /// `Authenticating -> Dashboard` after a successful login or signup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] from any other view.
    pub fn signed_in(&mut self) -> Result<()> {
        match self.view {
            View::Authenticating => self.go(View::Dashboard),
            _ => Err(self.reject("sign in")),
        }
    }

    /// `Dashboard -> LabDetail`, carrying the selected lab.
    ///
    /// Only volunteers open lab details.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] outside the dashboard or for an
    /// administrator.
    pub fn select_lab(&mut self, identity: &Identity, lab: Lab) -> Result<()> {
        match (&self.view, identity) {
            (View::Dashboard, Identity::Volunteer(_)) => {
                self.go(View::LabDetail(LabDetail::new(lab)))
            }
            (View::Dashboard, Identity::Admin(_)) => Err(Error::InvalidTransition {
                from: "admin dashboard",
                action: "open lab detail",
            }),
            _ => Err(self.reject("open lab detail")),
        }
    }

    /// `LabDetail -> Dashboard`. Returns the lab as it was last shown.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] from any other view.
    pub fn back(&mut self) -> Result<Lab> {
        let View::LabDetail(detail) = &self.view else {
            return Err(self.reject("go back"));
        };
        let lab = detail.lab().clone();
        self.go(View::Dashboard)?;
        Ok(lab)
    }

    /// `Dashboard -> Authenticating`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] from any other view.
    pub fn logout(&mut self) -> Result<()> {
        match self.view {
            View::Dashboard => self.go(View::Authenticating),
            _ => Err(self.reject("log out")),
        }
    }

    fn go(&mut self, next: View) -> Result<()> {
        debug!("View {} -> {}", self.view.name(), next.name());
        self.view = next;
        Ok(())
    }

    fn reject(&self, action: &'static str) -> Error {
        debug!("Rejected '{}' from {}", action, self.view.name());
        Error::InvalidTransition {
            from: self.view.name(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AdminProfile, VolunteerProfile};
    use crate::store::demo_labs;
    use crate::testing::capture_logs;

    fn volunteer() -> Identity {
        Identity::Volunteer(VolunteerProfile {
            id: "vol-1".to_string(),
            name: "John Volunteer".to_string(),
            email: "john@example.com".to_string(),
            mobile: "1".to_string(),
            region: None,
            volunteer_number: None,
            date_of_birth: None,
        })
    }

    fn admin() -> Identity {
        Identity::Admin(AdminProfile {
            id: "admin-1".to_string(),
            name: "Super Admin".to_string(),
            email: "admin@vollab.com".to_string(),
            mobile: "9999999999".to_string(),
        })
    }

    fn on_dashboard() -> Navigator {
        let mut nav = Navigator::new();
        nav.signed_in().unwrap();
        nav
    }

    #[test]
    fn test_starts_authenticating() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), &View::Authenticating);
        assert!(nav.lab_detail().is_none());
    }

    #[test]
    fn test_full_cycle() {
        let mut nav = on_dashboard();
        assert_eq!(nav.view(), &View::Dashboard);

        let lab = demo_labs().remove(0);
        nav.select_lab(&volunteer(), lab.clone()).unwrap();
        assert_eq!(nav.lab_detail().unwrap().lab(), &lab);

        let returned = nav.back().unwrap();
        assert_eq!(returned, lab);
        assert_eq!(nav.view(), &View::Dashboard);

        nav.logout().unwrap();
        assert_eq!(nav.view(), &View::Authenticating);
    }

    #[test]
    fn test_back_logs_transition_from_detail() {
        let mut nav = on_dashboard();
        nav.select_lab(&volunteer(), demo_labs().remove(0)).unwrap();

        let logs = capture_logs(|| {
            nav.back().unwrap();
        });

        assert!(logs.contains("View lab detail -> dashboard"), "{logs}");
        assert!(!logs.contains("authentication"), "{logs}");
    }

    #[test]
    fn test_back_from_dashboard_is_rejected() {
        let mut nav = on_dashboard();
        let err = nav.back().unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(nav.view(), &View::Dashboard);
    }

    #[test]
    fn test_select_while_in_detail_is_rejected() {
        let mut nav = on_dashboard();
        let labs = demo_labs();
        nav.select_lab(&volunteer(), labs[0].clone()).unwrap();

        let err = nav.select_lab(&volunteer(), labs[1].clone()).unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(nav.lab_detail().unwrap().lab().id, labs[0].id);
    }

    #[test]
    fn test_admin_cannot_open_detail() {
        let mut nav = on_dashboard();
        let err = nav.select_lab(&admin(), demo_labs().remove(0)).unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(nav.view(), &View::Dashboard);
    }

    #[test]
    fn test_logout_only_from_dashboard() {
        let mut nav = Navigator::new();
        assert!(nav.logout().is_err());

        let mut nav = on_dashboard();
        nav.select_lab(&volunteer(), demo_labs().remove(0)).unwrap();
        assert!(nav.logout().is_err());
        assert!(nav.lab_detail().is_some());
    }

    #[test]
    fn test_sign_in_twice_is_rejected() {
        let mut nav = on_dashboard();
        assert!(nav.signed_in().is_err());
    }

    #[test]
    fn test_select_before_sign_in_is_rejected() {
        let mut nav = Navigator::new();
        assert!(nav.select_lab(&volunteer(), demo_labs().remove(0)).is_err());
        assert_eq!(nav.view(), &View::Authenticating);
    }

    #[test]
    fn test_view_names() {
        assert_eq!(View::Authenticating.name(), "authentication");
        assert_eq!(View::Dashboard.name(), "dashboard");
    }
}
