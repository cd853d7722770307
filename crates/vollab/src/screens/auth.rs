//! The authentication screen: role tabs, login and signup forms.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::model::{Identity, Region, Role};
use crate::service::{LoginRequest, SignupProfile};

/// Which form the authentication screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign in with existing credentials.
    #[default]
    Login,
    /// Register as a new volunteer.
    Signup,
}

/// The login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    /// Mobile number or user name.
    pub identifier: String,
    /// Password.
    pub secret: String,
    /// Role tab selected on the screen.
    pub role: Role,
}

impl LoginForm {
    /// A filled-in login form.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>, role: Role) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            role,
        }
    }

    /// The request sent to the service.
    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest::new(self.identifier.clone(), self.secret.clone(), self.role)
    }

    /// Check that the identity returned by the service fits the selected role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRejected`] when the admin tab yields a non-admin
    /// identity.
    pub fn accept(&self, identity: Identity) -> Result<Identity> {
        match (self.role, &identity) {
            (Role::Admin, Identity::Volunteer(_)) => Err(Error::auth("not an admin account")),
            (Role::Admin, Identity::Admin(_)) | (Role::Volunteer, _) => Ok(identity),
        }
    }
}

/// The volunteer signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Home region.
    pub region: Option<Region>,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    pub email: String,
    /// Volunteer number, if already issued.
    pub volunteer_number: String,
    /// Chosen password.
    pub password: String,
    /// Password, typed again.
    pub confirm_password: String,
}

impl SignupForm {
    /// Check required fields and the password confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for a blank name, mobile or password,
    /// and [`Error::PasswordMismatch`] when the confirmation differs.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField { field: "name" });
        }
        if self.mobile.trim().is_empty() {
            return Err(Error::MissingField { field: "mobile" });
        }
        if self.password.is_empty() {
            return Err(Error::MissingField { field: "password" });
        }
        if self.password != self.confirm_password {
            return Err(Error::PasswordMismatch);
        }
        Ok(())
    }

    /// Validate and convert into the profile sent to the service.
    ///
    /// # Errors
    ///
    /// See [`SignupForm::validate`].
    pub fn to_profile(&self) -> Result<SignupProfile> {
        self.validate()?;
        let volunteer_number = self.volunteer_number.trim();
        Ok(SignupProfile {
            name: self.name.trim().to_string(),
            date_of_birth: self.date_of_birth,
            region: self.region,
            mobile: self.mobile.trim().to_string(),
            email: self.email.trim().to_string(),
            volunteer_number: (!volunteer_number.is_empty()).then(|| volunteer_number.to_string()),
        })
    }
}

/// State of the authentication screen.
///
/// Picking a role tab always returns to the login form. Only volunteers can
/// switch to the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthScreen {
    mode: AuthMode,
    login: LoginForm,
    signup: SignupForm,
}

impl Default for AuthScreen {
    fn default() -> Self {
        Self {
            mode: AuthMode::default(),
            login: LoginForm::new(String::new(), String::new(), Role::Volunteer),
            signup: SignupForm::default(),
        }
    }
}

impl AuthScreen {
    /// The volunteer login form, empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The form being shown.
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// The selected role tab.
    #[must_use]
    pub fn role(&self) -> Role {
        self.login.role
    }

    /// Select a role tab and show its login form.
    pub fn select_role(&mut self, role: Role) {
        self.login.role = role;
        self.mode = AuthMode::Login;
    }

    /// Switch to the signup form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] on the admin tab.
    pub fn show_signup(&mut self) -> Result<()> {
        match self.login.role {
            Role::Volunteer => {
                self.mode = AuthMode::Signup;
                Ok(())
            }
            Role::Admin => Err(Error::invalid_action("administrators cannot sign up")),
        }
    }

    /// Switch back to the login form.
    pub fn show_login(&mut self) {
        self.mode = AuthMode::Login;
    }

    /// The login form.
    #[must_use]
    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    /// Login fields, for typing into. The role follows [`select_role`].
    ///
    /// [`select_role`]: AuthScreen::select_role
    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    /// The signup form.
    #[must_use]
    pub fn signup(&self) -> &SignupForm {
        &self.signup
    }

    /// Signup fields, for typing into.
    pub fn signup_mut(&mut self) -> &mut SignupForm {
        &mut self.signup
    }
}
