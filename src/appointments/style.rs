//! Styles for the appointment status view.
//!
//! Status badges get one color per status so the list can be scanned at a
//! glance; everything else follows the subdued palette of the pagination
//! row.

use crate::appointment::AppointmentStatus;
use lipgloss_extras::prelude::*;

/// Shown in place of a missing doctor or an unset date bound.
pub const EMPTY_CELL: &str = "—";

/// Styling for every part of the status view.
#[derive(Debug, Clone)]
pub struct AppointmentStyles {
    /// The view title.
    pub title: Style,
    /// The active filter summary under the title.
    pub filter_summary: Style,
    /// Table column headers.
    pub header: Style,
    /// Ordinary table cells.
    pub cell: Style,
    /// The "no results" and "empty" indicators.
    pub no_items: Style,
    /// Status badge for pending appointments.
    pub pending: Style,
    /// Status badge for confirmed appointments.
    pub confirmed: Style,
    /// Status badge for completed appointments.
    pub completed: Style,
    /// Status badge for cancelled appointments.
    pub cancelled: Style,
    /// The help line.
    pub help: Style,
}

impl AppointmentStyles {
    /// The badge style for a status.
    pub fn status(&self, status: AppointmentStatus) -> &Style {
        match status {
            AppointmentStatus::Pending => &self.pending,
            AppointmentStatus::Confirmed => &self.confirmed,
            AppointmentStatus::Completed => &self.completed,
            AppointmentStatus::Cancelled => &self.cancelled,
        }
    }
}

impl Default for AppointmentStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            filter_summary: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            header: Style::new().bold(true),
            cell: Style::new(),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            pending: Style::new().foreground(AdaptiveColor {
                Light: "#B45309",
                Dark: "#FBBF24",
            }),
            confirmed: Style::new().foreground(AdaptiveColor {
                Light: "#1D4ED8",
                Dark: "#60A5FA",
            }),
            completed: Style::new().foreground(AdaptiveColor {
                Light: "#047857",
                Dark: "#34D399",
            }),
            cancelled: Style::new().foreground(AdaptiveColor {
                Light: "#B91C1C",
                Dark: "#F87171",
            }),
            help: Style::new().foreground(subdued),
        }
    }
}
