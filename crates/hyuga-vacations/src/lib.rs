//! Vacation backend gateway for Hyuga.
//!
//! Wraps the three read-only endpoints of the HR backend and normalizes
//! failures into display-ready messages.

pub mod client;
pub mod error;
pub mod types;

pub use client::VacationClient;
pub use error::GatewayError;
pub use types::{
    DepartmentVacation, DepartmentVacationList, Holiday, PersonalVacation, VacationStatus,
};
