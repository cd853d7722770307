//! Full-screen view of a single lab.

use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{Lab, LabStatus, Report};
use crate::service::LabService;

/// Tabs of the lab detail screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Extra details.
    Detail,
    /// Status picker.
    Status,
    /// Filed reports.
    Reports,
    /// Address, contact person and notes.
    #[default]
    Contact,
}

impl Tab {
    /// Tabs in display order.
    pub const ALL: [Self; 4] = [Self::Detail, Self::Status, Self::Reports, Self::Contact];
}

/// State of the lab detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabDetail {
    lab: Lab,
    tab: Tab,
}

impl LabDetail {
    /// Open the screen for a lab on the contact tab.
    #[must_use]
    pub fn new(lab: Lab) -> Self {
        Self {
            lab,
            tab: Tab::default(),
        }
    }

    /// The lab as currently shown.
    #[must_use]
    pub fn lab(&self) -> &Lab {
        &self.lab
    }

    /// The active tab.
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switch tabs.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Reports, oldest first.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.lab.reports
    }

    /// Change the lab status.
    ///
    /// The new status is shown immediately, before the service confirms it.
    /// If the service call fails the previous status is restored and the
    /// error returned.
    ///
    /// # Errors
    ///
    /// Propagates the service error after reverting the local change.
    pub async fn change_status<S>(&mut self, service: &S, status: LabStatus) -> Result<()>
    where
        S: LabService + ?Sized,
    {
        let previous = self.lab.status;
        if previous == status {
            debug!("Lab {} already {}", self.lab.id, status);
            return Ok(());
        }

        self.lab.status = status;
        match service.update_lab_status(&self.lab.id, status).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    "Status change of lab {} to {} failed, reverting to {}: {}",
                    self.lab.id, status, previous, e
                );
                self.lab.status = previous;
                Err(e)
            }
        }
    }
}
