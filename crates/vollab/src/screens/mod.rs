//! Screen state that sits between the navigator and the service.
//!
//! - **auth**: role tabs with the login and signup forms
//! - **form**: the administrator's lab form
//! - **lab_detail**: a single lab, with the optimistic status change

pub mod auth;
pub mod form;
pub mod lab_detail;

pub use auth::{AuthMode, AuthScreen, LoginForm, SignupForm};
pub use form::LabForm;
pub use lab_detail::{LabDetail, Tab};
