//! The application shell.
//!
//! [`App`] wires the service, the session, the navigator and the role
//! dashboard together and exposes the user actions that move between them.
//! Every action either completes or returns the error to show the user; a
//! failed action leaves the current screen in place.

use tracing::{info, warn};

use crate::dashboard::Dashboard;
use crate::error::{Error, Result};
use crate::i18n::Locale;
use crate::model::{Identity, LabStatus};
use crate::navigator::{Navigator, View};
use crate::screens::{AuthMode, AuthScreen, LabDetail, LoginForm, SignupForm};
use crate::service::LabService;
use crate::session::Session;

/// Application state over a [`LabService`].
#[derive(Debug)]
pub struct App<S> {
    service: S,
    session: Session,
    navigator: Navigator,
    dashboard: Option<Dashboard>,
    locale: Locale,
}

impl<S: LabService> App<S> {
    /// A signed-out application on the authentication screen.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            session: Session::new(),
            navigator: Navigator::new(),
            dashboard: None,
            locale: Locale::default(),
        }
    }

    /// Set the locale volunteer dashboards start in.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The service.
    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// The session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> &View {
        self.navigator.view()
    }

    /// The open lab detail screen.
    #[must_use]
    pub fn lab_detail(&self) -> Option<&LabDetail> {
        self.navigator.lab_detail()
    }

    /// Mutable lab detail screen, for tab switching.
    pub fn lab_detail_mut(&mut self) -> Option<&mut LabDetail> {
        self.navigator.lab_detail_mut()
    }

    /// The dashboard of the signed-in role.
    #[must_use]
    pub fn dashboard(&self) -> Option<&Dashboard> {
        self.dashboard.as_ref()
    }

    /// Mutable dashboard of the signed-in role.
    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        self.dashboard.as_mut()
    }

    /// Log in and open the role's dashboard.
    ///
    /// # Errors
    ///
    /// Returns the service or role-check error; the app stays on the
    /// authentication screen.
    pub async fn login(&mut self, form: &LoginForm) -> Result<&Identity> {
        self.require_authenticating("sign in")?;
        let identity = self.service.login(&form.to_request()).await?;
        let identity = form.accept(identity)?;
        self.enter(identity).await
    }

    /// Sign up as a volunteer and open the volunteer dashboard.
    ///
    /// # Errors
    ///
    /// Returns the validation or service error; the app stays on the
    /// authentication screen.
    pub async fn signup(&mut self, form: &SignupForm) -> Result<&Identity> {
        self.require_authenticating("sign up")?;
        let profile = form.to_profile()?;
        let identity = self.service.signup(profile).await?;
        self.enter(identity).await
    }

    /// Submit whichever form the authentication screen shows.
    ///
    /// # Errors
    ///
    /// See [`App::login`] and [`App::signup`].
    pub async fn authenticate(&mut self, screen: &AuthScreen) -> Result<&Identity> {
        match screen.mode() {
            AuthMode::Login => self.login(screen.login()).await,
            AuthMode::Signup => self.signup(screen.signup()).await,
        }
    }

    /// Log out from the dashboard, clearing the identity and the dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] outside the dashboard.
    pub fn logout(&mut self) -> Result<()> {
        self.navigator.logout()?;
        self.session.sign_out();
        self.dashboard = None;
        Ok(())
    }

    /// Open a loaded lab on the detail screen (volunteers only).
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabNotFound`] for an id the dashboard has not loaded,
    /// or [`Error::InvalidTransition`] when the move is not allowed.
    pub fn open_lab(&mut self, id: &str) -> Result<()> {
        let identity = self
            .session
            .identity()
            .ok_or_else(|| self.rejected("open lab detail"))?;
        let lab = self
            .dashboard
            .as_ref()
            .and_then(|dash| dash.browser().find(id))
            .cloned()
            .ok_or_else(|| Error::lab_not_found(id))?;
        self.navigator.select_lab(identity, lab)
    }

    /// Leave the detail screen and refresh the dashboard list.
    ///
    /// The dashboard keeps its region and browse mode. A failed refresh is
    /// logged and the previous list stays.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] outside the detail screen.
    pub async fn back(&mut self) -> Result<()> {
        self.navigator.back()?;
        if let Some(dashboard) = self.dashboard.as_mut() {
            if let Err(e) = dashboard.load(&self.service).await {
                warn!("Dashboard refresh failed: {}", e);
            }
        }
        Ok(())
    }

    /// Change the status of the open lab.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] outside the detail screen, or the
    /// service error after the local change has been reverted.
    pub async fn change_status(&mut self, status: LabStatus) -> Result<()> {
        let from = self.navigator.view().name();
        match self.navigator.lab_detail_mut() {
            Some(detail) => detail.change_status(&self.service, status).await,
            None => Err(Error::InvalidTransition {
                from,
                action: "change lab status",
            }),
        }
    }

    fn require_authenticating(&self, action: &'static str) -> Result<()> {
        match self.navigator.view() {
            View::Authenticating => Ok(()),
            View::Dashboard | View::LabDetail(_) => Err(self.rejected(action)),
        }
    }

    fn rejected(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            from: self.navigator.view().name(),
            action,
        }
    }

    async fn enter(&mut self, identity: Identity) -> Result<&Identity> {
        self.navigator.signed_in()?;
        let mut dashboard = Dashboard::for_identity(&identity, self.locale);
        if let Err(e) = dashboard.load(&self.service).await {
            warn!("Initial lab load failed: {}", e);
        }
        info!("Entered {} dashboard", identity.role());
        self.dashboard = Some(dashboard);
        self.session.sign_in(identity);
        self.session
            .identity()
            .ok_or_else(|| Error::internal("session empty after sign in"))
    }
}
