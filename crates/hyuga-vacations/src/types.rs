//! Wire types for the vacation backend.

use chrono::NaiveDate;
use serde::Deserialize;

/// Public holiday returned by `/holidays/get-holiday`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub name: String,
    pub holiday_date: NaiveDate,
}

/// One of the caller's own vacation requests.
///
/// The personal endpoint carries no id; records are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalVacation {
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
    pub status: VacationStatus,
}

/// Lifecycle state of a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VacationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Deleted,
}

impl VacationStatus {
    /// Whether a request in this state still occupies calendar days.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Rejected | Self::Cancelled | Self::Deleted)
    }
}

/// A department member's vacation.
///
/// The department endpoint names its date fields in snake_case while the
/// personal endpoint uses camelCase; both spellings are part of the wire
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentVacation {
    #[serde(rename = "vacationId")]
    pub vacation_id: i64,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
}

/// Envelope of `/vacations/my-department`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DepartmentVacationList {
    pub data: Vec<DepartmentVacation>,
}
