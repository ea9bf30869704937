//! Appointment status view: a filterable, paginated list of appointments.
//!
//! The view owns the source collection and the filter inputs. Everything it
//! shows is derived from those two on demand:
//!
//! - the filtered records come from [`AppointmentFilter::view`] on every call
//!   and are never stored;
//! - the pagination props come from the filtered count, the page size and the
//!   current page;
//! - the rows come from slicing the filtered records with those props.
//!
//! The embedded [`pagination::Model`] only asks for page changes. The view
//! answers [`PageChangeMsg`] by moving its own page and handing the
//! pagination fresh props.
//!
//! ## Keys
//!
//! - `s`: cycle the status filter (All → each status → All)
//! - `x`: clear all filters
//! - `←/h`, `→/l`: previous / next page
//!
//! # Examples
//!
//! ```rust
//! use medportal_widgets::appointment::{mock_appointments, AppointmentStatus};
//! use medportal_widgets::appointments::Model;
//! use medportal_widgets::config::Config;
//! use medportal_widgets::filter::StatusFilter;
//!
//! let mut view = Model::new(mock_appointments().unwrap(), &Config::default());
//! view.set_status_filter(StatusFilter::Only(AppointmentStatus::Pending));
//! let ids: Vec<u32> = view.visible().iter().map(|a| a.id).collect();
//! assert_eq!(ids, vec![2, 5]);
//! ```

pub mod keys;
pub mod style;

mod rendering;
#[cfg(test)]
mod tests;

pub use keys::AppointmentKeyMap;
pub use style::AppointmentStyles;

use crate::appointment::Appointment;
use crate::config::Config;
use crate::error::Result;
use crate::filter::{AppointmentFilter, FilteredView, StatusFilter};
use crate::pagination::{self, PageChangeMsg, PaginationProps};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use chrono::NaiveDate;

/// The appointment status view.
#[derive(Debug, Clone)]
pub struct Model {
    source: Vec<Appointment>,
    filter: AppointmentFilter,
    page: usize,
    page_size: usize,
    pagination: pagination::Model,
    /// Filter key bindings.
    pub keymap: AppointmentKeyMap,
    /// Rendering styles.
    pub styles: AppointmentStyles,
    /// Title shown above the table.
    pub title: String,
    /// Whether the help line is rendered.
    pub show_help: bool,
}

impl Model {
    /// Creates the view over `source` with the configured page size and
    /// initial status filter.
    pub fn new(source: Vec<Appointment>, config: &Config) -> Self {
        let mut m = Self {
            source,
            filter: AppointmentFilter::new().with_status(config.initial_status_filter()),
            page: 0,
            page_size: config.page_size.max(1),
            pagination: pagination::Model::new(),
            keymap: AppointmentKeyMap::default(),
            styles: AppointmentStyles::default(),
            title: "Lịch hẹn của tôi".to_string(),
            show_help: true,
        };
        m.sync_pagination();
        m
    }

    /// Creates the view over the appointments named by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.load_appointments()?, config))
    }

    /// Sets the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: AppointmentStyles) -> Self {
        self.styles = styles;
        self
    }

    /// The unfiltered collection.
    pub fn source(&self) -> &[Appointment] {
        &self.source
    }

    /// Replaces the collection, e.g. after a reload, and returns to the
    /// first page.
    pub fn set_source(&mut self, source: Vec<Appointment>) {
        self.source = source;
        self.page = 0;
        self.sync_pagination();
    }

    /// The current filter inputs.
    pub fn filter(&self) -> &AppointmentFilter {
        &self.filter
    }

    /// Sets the status selector.
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.filter.status = status;
        self.filter_changed();
    }

    /// Sets the inclusive lower date bound.
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.filter.start_date = date;
        self.filter_changed();
    }

    /// Sets the inclusive upper date bound.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.filter.end_date = date;
        self.filter_changed();
    }

    /// Sets the lower bound from date-picker text; malformed text clears it.
    pub fn set_start_date_str(&mut self, value: &str) {
        self.filter.set_start_date_str(value);
        self.filter_changed();
    }

    /// Sets the upper bound from date-picker text; malformed text clears it.
    pub fn set_end_date_str(&mut self, value: &str) {
        self.filter.set_end_date_str(value);
        self.filter_changed();
    }

    /// Resets every filter input.
    pub fn clear_filters(&mut self) {
        self.filter = AppointmentFilter::new();
        self.filter_changed();
    }

    fn filter_changed(&mut self) {
        self.page = 0;
        self.sync_pagination();
        tracing::debug!(
            status = %self.filter.status,
            start = ?self.filter.start_date,
            end = ?self.filter.end_date,
            matches = self.pagination.props().total_elements,
            "appointment filter changed"
        );
    }

    /// The filtered records, recomputed from the source and filter.
    pub fn filtered(&self) -> FilteredView<'_> {
        self.filter.view(&self.source)
    }

    /// The current zero-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Moves to `page`, clamped to the available pages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medportal_widgets::appointment::mock_appointments;
    /// use medportal_widgets::appointments::Model;
    /// use medportal_widgets::config::Config;
    ///
    /// let mut view = Model::new(mock_appointments().unwrap(), &Config::default());
    /// view.set_page_size(2);
    /// view.set_page(1);
    /// assert_eq!(view.visible().iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 4]);
    ///
    /// view.set_page(99);
    /// assert_eq!(view.page(), 2);
    /// ```
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.sync_pagination();
    }

    /// Changes the number of rows per page (minimum 1) and returns to the
    /// first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
        self.sync_pagination();
    }

    /// Pagination props for the current filtered count and page.
    pub fn pagination_props(&self) -> PaginationProps {
        PaginationProps::for_items(self.page, self.filtered().len(), self.page_size).clamped()
    }

    fn sync_pagination(&mut self) {
        let props = self.pagination_props();
        self.page = props.current_page;
        self.pagination.set_props(props);
    }

    /// The embedded pagination component.
    pub fn pagination(&self) -> &pagination::Model {
        &self.pagination
    }

    /// Mutable access to the pagination component, e.g. to focus it.
    pub fn pagination_mut(&mut self) -> &mut pagination::Model {
        &mut self.pagination
    }

    /// The rows of the current page.
    pub fn visible(&self) -> Vec<&Appointment> {
        let filtered = self.filtered();
        let records = filtered.records();
        let (start, end) = self.pagination.props().slice_bounds(records.len());
        records[start..end].to_vec()
    }

    /// Handles page changes, filter keys, and forwards the rest to the
    /// pagination component.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(change) = msg.downcast_ref::<PageChangeMsg>() {
            self.set_page(change.page);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.cycle_status.matches(key_msg) {
                self.set_status_filter(self.filter.status.cycle());
                return None;
            }
            if self.keymap.clear_filters.matches(key_msg) {
                self.clear_filters();
                return None;
            }
        }

        self.pagination.update(&msg)
    }
}

impl BubbleTeaModel for Model {
    /// Builds the view over the bundled mock appointments.
    fn init() -> (Self, Option<Cmd>) {
        let config = Config::default();
        let source = config.load_appointments().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load appointments, starting empty");
            Vec::new()
        });
        (Self::new(source, &config), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
