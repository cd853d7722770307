//! Core data types: regions, labs, reports and identities.

mod lab;
mod region;
mod user;

pub use lab::{Lab, LabStatus, NewLab, Report};
pub use region::Region;
pub use user::{AdminProfile, Identity, Role, VolunteerProfile};
