//! Status and date-range filtering of appointment collections.
//!
//! Filtering is a pure derivation: [`AppointmentFilter::apply`] borrows the
//! source slice and returns the matching records in their original order.
//! Callers recompute it whenever the source or a filter input changes and
//! never keep the result around as a second copy of the data.
//!
//! ```rust
//! use medportal_widgets::appointment::{mock_appointments, AppointmentStatus};
//! use medportal_widgets::filter::{AppointmentFilter, StatusFilter};
//!
//! let source = mock_appointments().unwrap();
//! let filter = AppointmentFilter::new().with_status(StatusFilter::Only(AppointmentStatus::Pending));
//! let ids: Vec<u32> = filter.apply(&source).iter().map(|a| a.id).collect();
//! assert_eq!(ids, vec![2, 5]);
//! ```

use crate::appointment::{Appointment, AppointmentStatus, UnknownStatus};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Which statuses pass the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only the given status passes.
    Only(AppointmentStatus),
}

impl StatusFilter {
    /// Reports whether a status passes.
    pub fn allows(self, status: AppointmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// The next choice in the selector: `All`, then each status in display
    /// order, then back to `All`.
    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(AppointmentStatus::ALL[0]),
            StatusFilter::Only(current) => AppointmentStatus::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|i| AppointmentStatus::ALL.get(i + 1))
                .map_or(StatusFilter::All, |s| StatusFilter::Only(*s)),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("Tất cả"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.to_lowercase() == "tất cả" {
            return Ok(StatusFilter::All);
        }
        trimmed.parse().map(StatusFilter::Only)
    }
}

impl From<AppointmentStatus> for StatusFilter {
    fn from(status: AppointmentStatus) -> Self {
        StatusFilter::Only(status)
    }
}

/// The filter inputs of the appointment status view.
///
/// Both date bounds are inclusive and compare calendar dates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppointmentFilter {
    /// Status selector.
    pub status: StatusFilter,
    /// Earliest date kept, if set.
    pub start_date: Option<NaiveDate>,
    /// Latest date kept, if set.
    pub end_date: Option<NaiveDate>,
}

impl AppointmentFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status selector (builder pattern).
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Sets the inclusive lower date bound (builder pattern).
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the inclusive upper date bound (builder pattern).
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the lower bound from a date-picker string.
    ///
    /// An empty or malformed value clears the bound, so a bad input means
    /// "not filtered by start date" rather than an error.
    pub fn set_start_date_str(&mut self, value: &str) {
        self.start_date = parse_bound("start_date", value);
    }

    /// Sets the upper bound from a date-picker string. See
    /// [`set_start_date_str`](Self::set_start_date_str).
    pub fn set_end_date_str(&mut self, value: &str) {
        self.end_date = parse_bound("end_date", value);
    }

    /// Reports whether any input narrows the result.
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All || self.start_date.is_some() || self.end_date.is_some()
    }

    /// Reports whether one record passes every input.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.status.allows(appointment.status)
            && self.start_date.map_or(true, |start| appointment.date >= start)
            && self.end_date.map_or(true, |end| appointment.date <= end)
    }

    /// Returns the records that pass, in source order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use medportal_widgets::appointment::mock_appointments;
    /// use medportal_widgets::filter::AppointmentFilter;
    ///
    /// let source = mock_appointments().unwrap();
    /// let filter = AppointmentFilter::new()
    ///     .with_start_date(NaiveDate::from_ymd_opt(2025, 8, 25).unwrap());
    /// let ids: Vec<u32> = filter.apply(&source).iter().map(|a| a.id).collect();
    /// assert_eq!(ids, vec![1, 2, 5]);
    /// ```
    pub fn apply<'a>(&self, source: &'a [Appointment]) -> Vec<&'a Appointment> {
        let kept: Vec<&Appointment> = source.iter().filter(|a| self.matches(a)).collect();
        tracing::trace!(
            source = source.len(),
            kept = kept.len(),
            status = %self.status,
            "applied appointment filter"
        );
        kept
    }

    /// Applies the filter and classifies the outcome for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use medportal_widgets::appointment::{mock_appointments, AppointmentStatus};
    /// use medportal_widgets::filter::{AppointmentFilter, FilteredView};
    ///
    /// let source = mock_appointments().unwrap();
    /// let filter = AppointmentFilter::new()
    ///     .with_status(AppointmentStatus::Pending.into())
    ///     .with_end_date(NaiveDate::from_ymd_opt(2025, 8, 20).unwrap());
    /// assert_eq!(filter.view(&source), FilteredView::NoMatches);
    /// assert_eq!(filter.view(&[]), FilteredView::EmptySource);
    /// ```
    pub fn view<'a>(&self, source: &'a [Appointment]) -> FilteredView<'a> {
        if source.is_empty() {
            return FilteredView::EmptySource;
        }
        let kept = self.apply(source);
        if kept.is_empty() {
            FilteredView::NoMatches
        } else {
            FilteredView::Matches(kept)
        }
    }
}

fn parse_bound(which: &str, value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::warn!(bound = which, value, %err, "ignoring malformed date filter");
            None
        }
    }
}

/// The result of filtering, as the status view needs to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilteredView<'a> {
    /// There is nothing to filter.
    EmptySource,
    /// The source has records but none pass the filter.
    NoMatches,
    /// The records that pass, in source order.
    Matches(Vec<&'a Appointment>),
}

impl<'a> FilteredView<'a> {
    /// The matching records; empty for the other two cases.
    pub fn records(&self) -> &[&'a Appointment] {
        match self {
            FilteredView::Matches(records) => records.as_slice(),
            _ => &[],
        }
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Reports whether no record is shown.
    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Reports the "no results" state: records exist but none match.
    pub fn is_no_results(&self) -> bool {
        matches!(self, FilteredView::NoMatches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointment::mock_appointments;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(records: &[&Appointment]) -> Vec<u32> {
        records.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let source = mock_appointments().unwrap();
        assert_eq!(ids(&AppointmentFilter::new().apply(&source)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_status_filter_keeps_pending_in_order() {
        let source = mock_appointments().unwrap();
        let filter = AppointmentFilter::new().with_status("Pending".parse().unwrap());
        let kept = filter.apply(&source);
        assert_eq!(ids(&kept), vec![2, 5]);
        assert!(kept.iter().all(|a| a.status == AppointmentStatus::Pending));
    }

    #[test]
    fn test_start_date_alone_is_inclusive() {
        let source = mock_appointments().unwrap();
        let filter = AppointmentFilter::new().with_start_date(date(2025, 8, 25));
        let kept = filter.apply(&source);
        assert_eq!(ids(&kept), vec![1, 2, 5]);
        assert!(kept.iter().all(|a| a.date >= date(2025, 8, 25)));
    }

    #[test]
    fn test_end_date_alone_is_inclusive() {
        let source = mock_appointments().unwrap();
        let filter = AppointmentFilter::new().with_end_date(date(2025, 8, 10));
        assert_eq!(ids(&filter.apply(&source)), vec![3, 4]);
    }

    #[test]
    fn test_filters_compose_conjunctively() {
        let source = mock_appointments().unwrap();
        let filter = AppointmentFilter::new()
            .with_status(StatusFilter::Only(AppointmentStatus::Pending))
            .with_start_date(date(2025, 9, 1))
            .with_end_date(date(2025, 9, 30));
        assert_eq!(ids(&filter.apply(&source)), vec![5]);
    }

    #[test]
    fn test_pending_outside_range_is_no_results() {
        let source = mock_appointments().unwrap();
        let filter = AppointmentFilter::new()
            .with_status("Chờ xác nhận".parse().unwrap())
            .with_start_date(date(2025, 7, 1))
            .with_end_date(date(2025, 8, 20));
        let view = filter.view(&source);
        assert!(view.is_no_results());
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_source_is_not_no_results() {
        let view = AppointmentFilter::new().view(&[]);
        assert_eq!(view, FilteredView::EmptySource);
        assert!(!view.is_no_results());
    }

    #[test]
    fn test_apply_is_idempotent_and_leaves_source_untouched() {
        let source = mock_appointments().unwrap();
        let before = source.clone();
        let filter = AppointmentFilter::new().with_status(AppointmentStatus::Confirmed.into());
        let first = ids(&filter.apply(&source));
        let second = ids(&filter.apply(&source));
        assert_eq!(first, second);
        assert_eq!(source, before);
    }

    #[test]
    fn test_malformed_date_means_not_applied() {
        let mut filter = AppointmentFilter::new().with_start_date(date(2025, 8, 1));
        filter.set_start_date_str("25/08/2025");
        assert_eq!(filter.start_date, None);

        filter.set_end_date_str("2025-08-31");
        assert_eq!(filter.end_date, Some(date(2025, 8, 31)));

        filter.set_end_date_str("   ");
        assert_eq!(filter.end_date, None);
        assert!(!filter.is_active());
    }

    #[test]
    fn test_status_filter_parse_and_cycle() {
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!("Tất cả".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "Đã xác nhận".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(AppointmentStatus::Confirmed))
        );

        let mut seen = vec![StatusFilter::All];
        let mut current = StatusFilter::All.cycle();
        while current != StatusFilter::All {
            seen.push(current);
            current = current.cycle();
        }
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[1], StatusFilter::Only(AppointmentStatus::Pending));
        assert_eq!(seen[4], StatusFilter::Only(AppointmentStatus::Cancelled));
    }
}
