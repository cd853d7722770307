//! The service layer: the only path from screens to the lab store.
//!
//! [`LabService`] is the seam every screen talks to. [`MockService`] is the
//! in-process implementation; it waits a configured delay before each call to
//! behave like a remote backend, then applies the operation to an injected
//! [`LabStore`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{Config, ServiceConfig};
use crate::error::{Error, Result};
use crate::model::{AdminProfile, Identity, Lab, LabStatus, NewLab, Region, Role, VolunteerProfile};
use crate::store::LabStore;

/// Login identifier that selects the administrator when no role is given.
const LEGACY_ADMIN_IDENTIFIER: &str = "admin";

/// Credentials submitted from the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Mobile number or user name.
    pub identifier: String,
    /// Password.
    pub secret: String,
    /// Role chosen on the login screen. `None` is the legacy role-less login.
    pub role: Option<Role>,
}

impl LoginRequest {
    /// Credentials for an explicit role.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>, role: Role) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            role: Some(role),
        }
    }

    /// Credentials without a role.
    #[must_use]
    pub fn legacy(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
            role: None,
        }
    }
}

/// Fields collected by the volunteer signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupProfile {
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
    pub volunteer_number: Option<String>,
}

/// Operations available to the screens.
///
/// `delete_lab` and `update_lab_status` treat a missing id as an idempotent
/// no-op and return `Ok`. `update_lab` fails with [`Error::LabNotFound`]
/// for a missing id.
#[async_trait]
pub trait LabService: Send + Sync {
    /// Authenticate and return the identity to sign in as.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AuthRejected`] when the credentials are refused.
    async fn login(&self, request: &LoginRequest) -> Result<Identity>;

    /// Register a new volunteer.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn signup(&self, profile: SignupProfile) -> Result<Identity>;

    /// All labs.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn get_labs(&self) -> Result<Vec<Lab>>;

    /// Store a new lab and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn add_lab(&self, lab: NewLab) -> Result<Lab>;

    /// Replace an existing lab.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LabNotFound`] if the id is not stored.
    async fn update_lab(&self, lab: Lab) -> Result<Lab>;

    /// Delete a lab.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn delete_lab(&self, id: &str) -> Result<()>;

    /// Change the status of a lab.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the mock never does.
    async fn update_lab_status(&self, id: &str, status: LabStatus) -> Result<()>;
}

/// In-process service backed by a [`LabStore`].
///
/// Cloning yields a handle to the same store.
#[derive(Debug, Clone)]
pub struct MockService {
    store: Arc<RwLock<LabStore>>,
    config: ServiceConfig,
    default_region: Region,
}

impl MockService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: LabStore, config: ServiceConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
            default_region: Region::Maharashtra,
        }
    }

    /// Create a service from the application configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let store = if config.service.seed_demo_labs {
            LabStore::seeded()
        } else {
            LabStore::new()
        };
        Self::new(store, config.service.clone())
            .with_default_region(config.volunteer.default_region)
    }

    /// Seeded store, no latency.
    #[must_use]
    pub fn instant() -> Self {
        Self::new(LabStore::seeded(), ServiceConfig::instant())
    }

    /// Set the region given to volunteers who log in.
    #[must_use]
    pub fn with_default_region(mut self, region: Region) -> Self {
        self.default_region = region;
        self
    }

    /// Shared handle to the underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<RwLock<LabStore>> {
        Arc::clone(&self.store)
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn admin_identity() -> Identity {
        Identity::Admin(AdminProfile {
            id: "admin-1".to_string(),
            name: "Super Admin".to_string(),
            email: "admin@vollab.com".to_string(),
            mobile: "9999999999".to_string(),
        })
    }

    fn volunteer_identity(&self, mobile: &str) -> Identity {
        Identity::Volunteer(VolunteerProfile {
            id: "vol-1".to_string(),
            name: "John Volunteer".to_string(),
            email: "john@example.com".to_string(),
            mobile: mobile.to_string(),
            region: Some(self.default_region),
            volunteer_number: Some("VOL-101".to_string()),
            date_of_birth: None,
        })
    }

    fn is_admin_secret(&self, secret: &str) -> bool {
        secret == self.config.admin_secret
    }
}

#[async_trait]
impl LabService for MockService {
    async fn login(&self, request: &LoginRequest) -> Result<Identity> {
        self.simulate_latency(self.config.auth_latency()).await;

        match request.role {
            Some(Role::Admin) => {
                if self.is_admin_secret(&request.secret) {
                    info!("Admin login accepted");
                    Ok(Self::admin_identity())
                } else {
                    warn!("Admin login rejected");
                    Err(Error::auth("invalid admin credentials"))
                }
            }
            Some(Role::Volunteer) => {
                info!("Volunteer login for {}", request.identifier);
                Ok(self.volunteer_identity(&request.identifier))
            }
            None => {
                if request.identifier == LEGACY_ADMIN_IDENTIFIER
                    && self.is_admin_secret(&request.secret)
                {
                    info!("Role-less login resolved to admin");
                    Ok(Self::admin_identity())
                } else {
                    info!("Role-less login resolved to volunteer");
                    Ok(self.volunteer_identity(&request.identifier))
                }
            }
        }
    }

    async fn signup(&self, profile: SignupProfile) -> Result<Identity> {
        self.simulate_latency(self.config.signup_latency()).await;

        let id = format!("vol-{}", Uuid::new_v4().simple());
        info!("Volunteer signed up as {}", id);
        Ok(Identity::Volunteer(VolunteerProfile {
            id,
            name: profile.name,
            email: profile.email,
            mobile: profile.mobile,
            region: profile.region,
            volunteer_number: profile.volunteer_number,
            date_of_birth: profile.date_of_birth,
        }))
    }

    async fn get_labs(&self) -> Result<Vec<Lab>> {
        self.simulate_latency(self.config.latency()).await;
        let labs = self.store.read().await.list();
        debug!("Fetched {} labs", labs.len());
        Ok(labs)
    }

    async fn add_lab(&self, lab: NewLab) -> Result<Lab> {
        self.simulate_latency(self.config.latency()).await;
        let lab = self.store.write().await.insert(lab);
        info!("Added lab {} in {}", lab.id, lab.region);
        Ok(lab)
    }

    async fn update_lab(&self, lab: Lab) -> Result<Lab> {
        self.simulate_latency(self.config.latency()).await;
        let id = lab.id.clone();
        let result = self.store.write().await.replace(lab);
        match &result {
            Ok(_) => info!("Updated lab {}", id),
            Err(e) => warn!("Update of lab {} failed: {}", id, e),
        }
        result
    }

    async fn delete_lab(&self, id: &str) -> Result<()> {
        self.simulate_latency(self.config.latency()).await;
        if self.store.write().await.remove(id) {
            info!("Deleted lab {}", id);
        } else {
            warn!("Delete of unknown lab {} ignored", id);
        }
        Ok(())
    }

    async fn update_lab_status(&self, id: &str, status: LabStatus) -> Result<()> {
        self.simulate_latency(self.config.latency()).await;
        if self.store.write().await.set_status(id, status) {
            info!("Updated lab {} to {}", id, status);
        } else {
            warn!("Status update for unknown lab {} ignored", id);
        }
        Ok(())
    }
}
