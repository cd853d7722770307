//! The admin dashboard: region-scoped lab management.

use tracing::{debug, info};

use super::RegionBrowser;
use crate::error::{Error, Result};
use crate::model::{AdminProfile, Lab, Region};
use crate::screens::LabForm;
use crate::service::LabService;

/// What an open form will do on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    /// Add a new lab to the selected region.
    Create,
    /// Overwrite this lab.
    Edit(Lab),
}

/// An open lab form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenForm {
    /// Create or edit.
    pub target: FormTarget,
    /// Field values.
    pub fields: LabForm,
}

/// State of the admin dashboard.
///
/// The lab list is scoped to one region at a time; with no region selected
/// the region grid is shown.
#[derive(Debug, Clone)]
pub struct AdminDashboard {
    profile: AdminProfile,
    labs: Vec<Lab>,
    region: Option<Region>,
    form: Option<OpenForm>,
    pending_delete: Option<String>,
    loading: bool,
}

impl AdminDashboard {
    /// A dashboard for the given administrator, showing the region grid.
    #[must_use]
    pub fn new(profile: AdminProfile) -> Self {
        Self {
            profile,
            labs: Vec::new(),
            region: None,
            form: None,
            pending_delete: None,
            loading: false,
        }
    }

    /// The signed-in administrator.
    #[must_use]
    pub fn profile(&self) -> &AdminProfile {
        &self.profile
    }

    /// Fetch the full lab list.
    ///
    /// # Errors
    ///
    /// Propagates the service error; the previous list is kept.
    pub async fn load<S>(&mut self, service: &S) -> Result<()>
    where
        S: LabService + ?Sized,
    {
        self.loading = true;
        let result = service.get_labs().await;
        self.loading = false;
        let labs = result?;
        debug!("Admin dashboard loaded {} labs", labs.len());
        self.labs = labs;
        Ok(())
    }

    /// Scope the list to a region, or return to the grid with `None`.
    ///
    /// Returning to the grid closes any open form.
    pub fn select_region(&mut self, region: Option<Region>) {
        self.region = region;
        if region.is_none() {
            self.form = None;
            self.pending_delete = None;
        }
    }

    /// Open a blank form for a new lab in the selected region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] when no region is selected.
    pub fn open_new(&mut self) -> Result<()> {
        self.require_region()?;
        self.form = Some(OpenForm {
            target: FormTarget::Create,
            fields: LabForm::empty(),
        });
        Ok(())
    }

    /// Open the form prefilled from a lab of the selected region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] when no region is selected, or
    /// [`Error::LabNotFound`] if the lab is not listed in that region.
    pub fn open_edit(&mut self, id: &str) -> Result<()> {
        let lab = self.listed(id)?.clone();
        self.form = Some(OpenForm {
            fields: LabForm::from_lab(&lab),
            target: FormTarget::Edit(lab),
        });
        Ok(())
    }

    /// The open form.
    #[must_use]
    pub fn form(&self) -> Option<&OpenForm> {
        self.form.as_ref()
    }

    /// Field values of the open form, for editing.
    pub fn fields_mut(&mut self) -> Option<&mut LabForm> {
        self.form.as_mut().map(|form| &mut form.fields)
    }

    /// Close the form without saving.
    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Save the open form, then reload the list.
    ///
    /// The form stays open when saving fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] without an open form or region,
    /// [`Error::MissingField`] for a blank required field, or the service
    /// error.
    pub async fn submit<S>(&mut self, service: &S) -> Result<Lab>
    where
        S: LabService + ?Sized,
    {
        let region = self.require_region()?;
        let form = self
            .form
            .as_ref()
            .ok_or_else(|| Error::invalid_action("no form is open"))?;

        self.loading = true;
        let result = match &form.target {
            FormTarget::Create => match form.fields.to_new_lab(region) {
                Ok(new) => service.add_lab(new).await,
                Err(e) => Err(e),
            },
            FormTarget::Edit(lab) => match form.fields.apply_to(lab, region) {
                Ok(updated) => service.update_lab(updated).await,
                Err(e) => Err(e),
            },
        };
        self.loading = false;

        let saved = result?;
        info!("Saved lab {} ({})", saved.id, saved.name);
        self.form = None;
        self.load(service).await?;
        Ok(saved)
    }

    /// Ask to delete a lab of the selected region. Nothing is deleted until
    /// [`confirm_delete`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] when no region is selected, or
    /// [`Error::LabNotFound`] if the lab is not listed in that region.
    ///
    /// [`confirm_delete`]: AdminDashboard::confirm_delete
    pub fn request_delete(&mut self, id: &str) -> Result<()> {
        let id = self.listed(id)?.id.clone();
        self.pending_delete = Some(id);
        Ok(())
    }

    /// The id awaiting delete confirmation.
    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Drop the pending delete.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the lab awaiting confirmation, then reload the list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] when nothing awaits confirmation, or
    /// the service error.
    pub async fn confirm_delete<S>(&mut self, service: &S) -> Result<()>
    where
        S: LabService + ?Sized,
    {
        let id = self
            .pending_delete
            .take()
            .ok_or_else(|| Error::invalid_action("no delete awaiting confirmation"))?;

        self.loading = true;
        let result = service.delete_lab(&id).await;
        self.loading = false;
        result?;

        info!("Deleted lab {}", id);
        self.load(service).await
    }

    fn require_region(&self) -> Result<Region> {
        self.region
            .ok_or_else(|| Error::invalid_action("no region selected"))
    }

    fn listed(&self, id: &str) -> Result<&Lab> {
        let region = self.require_region()?;
        self.labs
            .iter()
            .find(|lab| lab.id == id && lab.matches_region(region))
            .ok_or_else(|| Error::lab_not_found(id))
    }
}

impl RegionBrowser for AdminDashboard {
    fn labs(&self) -> &[Lab] {
        &self.labs
    }

    fn region(&self) -> Option<Region> {
        self.region
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LabStatus;
    use crate::service::MockService;
    use crate::testing::OfflineService;

    fn admin() -> AdminProfile {
        AdminProfile {
            id: "admin-1".to_string(),
            name: "Super Admin".to_string(),
            email: "admin@vollab.com".to_string(),
            mobile: "9999999999".to_string(),
        }
    }

    fn fill(fields: &mut LabForm, name: &str) {
        fields.name = name.to_string();
        fields.district = "Panaji".to_string();
        fields.address = "1 Beach Road".to_string();
        fields.contact_person = "Ms. Naik".to_string();
        fields.contact_number = "+91 9000000000".to_string();
        fields.email = "test@example.com".to_string();
    }

    async fn loaded(service: &MockService) -> AdminDashboard {
        let mut dash = AdminDashboard::new(admin());
        dash.load(service).await.unwrap();
        dash
    }

    #[tokio::test]
    async fn test_starts_on_region_grid() {
        let service = MockService::instant();
        let dash = loaded(&service).await;
        assert_eq!(dash.region(), None);
        assert!(dash.labs_in_region().is_empty());
        assert_eq!(dash.labs().len(), 5);
        assert_eq!(dash.profile().name, "Super Admin");
    }

    #[tokio::test]
    async fn test_add_lab_in_goa() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Goa));
        dash.open_new().unwrap();
        fill(dash.fields_mut().unwrap(), "Test Lab");

        let saved = dash.submit(&service).await.unwrap();

        assert!(dash.form().is_none());
        assert_eq!(saved.status, LabStatus::Pending);
        assert!(saved.reports.is_empty());
        let in_goa = dash.labs_in_region();
        assert_eq!(in_goa.len(), 1);
        assert_eq!(in_goa[0].name, "Test Lab");
        assert_eq!(dash.labs().len(), 6);
    }

    #[tokio::test]
    async fn test_open_new_requires_region() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        assert!(dash.open_new().is_err());
        assert!(dash.form().is_none());
    }

    #[tokio::test]
    async fn test_submit_with_missing_field_keeps_form() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Goa));
        dash.open_new().unwrap();
        fill(dash.fields_mut().unwrap(), "Test Lab");
        dash.fields_mut().unwrap().contact_number.clear();

        let err = dash.submit(&service).await.unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "contact number"
            }
        ));
        assert!(dash.form().is_some());
        assert_eq!(service.get_labs().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_edit_lab() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Delhi));
        dash.open_edit("l4").unwrap();
        assert_eq!(dash.form().unwrap().fields.name, "Capital Care Lab");

        dash.fields_mut().unwrap().notes.clear();
        let saved = dash.submit(&service).await.unwrap();

        assert_eq!(saved.id, "l4");
        assert_eq!(saved.notes, None);
        assert_eq!(saved.status, LabStatus::IssueReported);
        assert_eq!(saved.reports.len(), 1);
        assert_eq!(dash.labs_in_region()[0].notes, None);
    }

    #[tokio::test]
    async fn test_edit_lab_deleted_elsewhere() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Delhi));
        dash.open_edit("l4").unwrap();
        service.delete_lab("l4").await.unwrap();

        let err = dash.submit(&service).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(dash.form().is_some());
    }

    #[tokio::test]
    async fn test_open_edit_unknown() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Delhi));
        assert!(dash.open_edit("nope").unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_open_edit_requires_region() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        let err = dash.open_edit("l1").unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
        assert!(dash.form().is_none());
    }

    #[tokio::test]
    async fn test_cannot_edit_lab_of_other_region() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Goa));

        assert!(dash.open_edit("l1").unwrap_err().is_not_found());
        assert!(dash.form().is_none());
        assert!(dash.submit(&service).await.is_err());

        let stored = service.get_labs().await.unwrap().remove(0);
        assert_eq!(stored.id, "l1");
        assert_eq!(stored.region, Region::Maharashtra);
    }

    #[tokio::test]
    async fn test_request_delete_requires_region() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        let err = dash.request_delete("l1").unwrap_err();
        assert!(matches!(err, Error::InvalidAction { .. }));
        assert!(dash.pending_delete().is_none());
    }

    #[tokio::test]
    async fn test_cannot_delete_lab_of_other_region() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Goa));

        assert!(dash.request_delete("l1").unwrap_err().is_not_found());
        assert!(dash.pending_delete().is_none());
        assert!(dash.confirm_delete(&service).await.is_err());
        assert_eq!(service.get_labs().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Maharashtra));

        dash.request_delete("l1").unwrap();
        assert_eq!(dash.pending_delete(), Some("l1"));
        dash.cancel_delete();
        assert_eq!(service.get_labs().await.unwrap().len(), 5);

        dash.request_delete("l1").unwrap();
        dash.confirm_delete(&service).await.unwrap();
        assert!(dash.pending_delete().is_none());
        assert_eq!(dash.labs_in_region().len(), 1);
        assert_eq!(dash.labs().len(), 4);
    }

    #[tokio::test]
    async fn test_confirm_without_request() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        assert!(dash.confirm_delete(&service).await.is_err());
    }

    #[tokio::test]
    async fn test_back_to_grid_closes_form() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Goa));
        dash.open_new().unwrap();
        dash.select_region(None);
        assert!(dash.form().is_none());
        assert!(dash.labs_in_region().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_surfaces_error() {
        let service = MockService::instant();
        let mut dash = loaded(&service).await;
        dash.select_region(Some(Region::Maharashtra));
        dash.request_delete("l1").unwrap();
        assert!(dash.confirm_delete(&OfflineService).await.is_err());
        assert_eq!(dash.labs().len(), 5);
        assert!(!dash.is_loading());
    }
}
