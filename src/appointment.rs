//! Appointment records and their status.
//!
//! Records are created outside this crate (the bundled mock set, a JSON file,
//! or a confirmed [`crate::booking::BookingRequest`]). Nothing here mutates a
//! collection once it is loaded.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const MOCK_APPOINTMENTS: &str = include_str!("../data/appointments.json");

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Waiting for the hospital to confirm.
    Pending,
    /// Confirmed by the hospital.
    Confirmed,
    /// The visit took place.
    Completed,
    /// Cancelled by either side.
    Cancelled,
}

impl AppointmentStatus {
    /// All statuses in display order.
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    /// The label shown to patients.
    ///
    /// ```rust
    /// use medportal_widgets::appointment::AppointmentStatus;
    ///
    /// assert_eq!(AppointmentStatus::Pending.label(), "Chờ xác nhận");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Chờ xác nhận",
            AppointmentStatus::Confirmed => "Đã xác nhận",
            AppointmentStatus::Completed => "Đã hoàn thành",
            AppointmentStatus::Cancelled => "Đã hủy",
        }
    }

    fn name(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown appointment status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for AppointmentStatus {
    type Err = UnknownStatus;

    /// Accepts the patient-facing label or the English name, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| {
                status.label().to_lowercase() == wanted.to_lowercase()
                    || status.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A booked hospital appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier.
    pub id: u32,
    /// Medical specialty, e.g. "Tim mạch".
    pub specialty: String,
    /// Assigned doctor, if one was requested or assigned.
    #[serde(default)]
    pub doctor: Option<String>,
    /// Calendar date of the visit.
    pub date: NaiveDate,
    /// Time of day as `HH:MM`.
    pub time: String,
    /// Current status.
    pub status: AppointmentStatus,
}

/// Parses a JSON array of appointments.
pub fn parse_appointments(json: &str) -> Result<Vec<Appointment>> {
    let appointments: Vec<Appointment> = serde_json::from_str(json)?;
    tracing::debug!(count = appointments.len(), "parsed appointments");
    Ok(appointments)
}

/// Reads a JSON array of appointments from a file.
pub fn load_appointments(path: &Path) -> Result<Vec<Appointment>> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_appointments(&json)
}

/// The mock appointment set bundled with the crate.
pub fn mock_appointments() -> Result<Vec<Appointment>> {
    parse_appointments(MOCK_APPOINTMENTS)
}
