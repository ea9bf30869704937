//! Key bindings for the appointment status view.

use crate::key;
use crossterm::event::KeyCode;

/// Filter keys of the status view. Page navigation keys belong to the
/// embedded pagination component.
#[derive(Debug, Clone)]
pub struct AppointmentKeyMap {
    /// Steps the status selector: All, each status, back to All.
    pub cycle_status: key::Binding,
    /// Clears status and date filters.
    pub clear_filters: key::Binding,
}

impl Default for AppointmentKeyMap {
    fn default() -> Self {
        Self {
            cycle_status: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "status"),
            clear_filters: key::Binding::new(vec![KeyCode::Char('x')])
                .with_help("x", "clear filters"),
        }
    }
}

impl key::KeyMap for AppointmentKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cycle_status, &self.clear_filters]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.cycle_status, &self.clear_filters]]
    }
}
