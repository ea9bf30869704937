#![warn(missing_docs)]

//! # medportal-widgets
//!
//! Terminal components for a hospital patient portal, built on
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! Each component follows the Elm Architecture: state is a plain struct,
//! `update()` reacts to messages and may return a command, and `view()`
//! renders a string. Components are controlled where it matters: the
//! pagination row never changes page on its own, it asks its owner with a
//! [`pagination::PageChangeMsg`].
//!
//! ## Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`Pagination`] | Page selector with ellipsis compaction and Previous/Next controls |
//! | [`AppointmentList`] | Appointment status list with status and date-range filters |
//! | [`BookingForm`] | Booking form state with typed "book for a relative" handling |
//!
//! Supporting modules: [`filter`] (pure status/date filtering), [`appointment`]
//! (records and the bundled mock data), [`config`] (TOML settings), [`key`]
//! (key bindings) and [`error`].
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use medportal_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     appointments: AppointmentList,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let config = Config::default();
//!         let appointments = AppointmentList::from_config(&config)
//!             .unwrap_or_else(|_| AppointmentList::new(Vec::new(), &config));
//!         (Self { appointments }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         // Page changes come back here as PageChangeMsg and are
//!         // routed to the list like any other message.
//!         self.appointments.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.appointments.view()
//!     }
//! }
//! ```

pub mod appointment;
pub mod appointments;
pub mod booking;
pub mod config;
pub mod error;
pub mod filter;
pub mod key;
pub mod pagination;

use bubbletea_rs::Cmd;

/// Keyboard focus for components that only react to some keys while
/// focused.
///
/// ```rust
/// use medportal_widgets::prelude::*;
///
/// let mut pagination = Pagination::new();
/// assert!(!pagination.focused());
///
/// pagination.focus();
/// assert!(pagination.focused());
///
/// pagination.blur();
/// assert!(!pagination.focused());
/// ```
pub trait Component {
    /// Focuses the component. May return a command, e.g. to start a timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus and any focus-only presentation state.
    fn blur(&mut self);

    /// Whether the component is focused.
    fn focused(&self) -> bool;
}

pub use appointment::{Appointment, AppointmentStatus};
pub use appointments::Model as AppointmentList;
pub use booking::{BookingError, BookingForm, BookingRequest, BookingSubject};
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{AppointmentFilter, FilteredView, StatusFilter};
pub use key::{Binding, KeyMap, KeyPress};
pub use pagination::{Model as Pagination, PageChangeMsg, PageItem, PaginationProps};

/// Commonly used types in one import.
///
/// ```rust
/// use medportal_widgets::prelude::*;
///
/// let props = PaginationProps::for_items(0, 12, 5);
/// assert_eq!(props.total_pages, 3);
/// ```
pub mod prelude {
    pub use crate::appointment::{Appointment, AppointmentStatus};
    pub use crate::appointments::{AppointmentKeyMap, AppointmentStyles, Model as AppointmentList};
    pub use crate::booking::{BookingForm, BookingRequest, BookingSubject, Field as BookingField};
    pub use crate::config::Config;
    pub use crate::filter::{AppointmentFilter, FilteredView, StatusFilter};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::pagination::{
        Model as Pagination, PageChangeMsg, PageItem, PaginationKeyMap, PaginationProps,
    };
    pub use crate::Component;
}
