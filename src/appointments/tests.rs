//! Tests for the appointment status view.

use super::*;
use crate::appointment::{mock_appointments, AppointmentStatus};
use crossterm::event::{KeyCode, KeyModifiers};

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(view: &Model) -> Vec<u32> {
    view.visible().iter().map(|a| a.id).collect()
}

fn paged(page_size: usize) -> Model {
    let config = Config {
        page_size,
        ..Config::default()
    };
    Model::new(mock_appointments().unwrap(), &config)
}

fn plain(view: &Model) -> String {
    strip_ansi_escapes::strip_str(view.view())
}

#[test]
fn test_single_page_hides_pagination() {
    let view = paged(5);
    assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
    assert!(!view.pagination_props().is_visible());
    assert!(!plain(&view).contains("Showing"));
}

#[test]
fn test_page_change_msg_moves_page() {
    let mut view = paged(2);
    assert_eq!(view.pagination_props().total_pages, 3);
    assert_eq!(ids(&view), vec![1, 2]);

    view.update(Box::new(PageChangeMsg { page: 1 }) as Msg);
    assert_eq!(view.page(), 1);
    assert_eq!(ids(&view), vec![3, 4]);
    assert_eq!(view.pagination().props().current_page, 1);

    view.update(Box::new(PageChangeMsg { page: 2 }) as Msg);
    assert_eq!(ids(&view), vec![5]);
    assert!(view.pagination().props().is_last);
}

#[test]
fn test_out_of_range_page_is_clamped() {
    let mut view = paged(2);
    view.set_page(40);
    assert_eq!(view.page(), 2);
    assert_eq!(ids(&view), vec![5]);
}

#[test]
fn test_filter_change_returns_to_first_page() {
    let mut view = paged(2);
    view.set_page(2);
    view.set_start_date(Some(date(2025, 8, 25)));
    assert_eq!(view.page(), 0);
    assert_eq!(ids(&view), vec![1, 2]);
    assert_eq!(view.pagination_props().total_elements, 3);
}

#[test]
fn test_status_key_cycles_selector() {
    let mut view = paged(5);
    view.update(key(KeyCode::Char('s')));
    assert_eq!(
        view.filter().status,
        StatusFilter::Only(AppointmentStatus::Pending)
    );
    assert_eq!(ids(&view), vec![2, 5]);

    view.update(key(KeyCode::Char('s')));
    assert_eq!(ids(&view), vec![1]);
}

#[test]
fn test_clear_key_resets_filters() {
    let mut view = paged(5);
    view.set_status_filter(StatusFilter::Only(AppointmentStatus::Cancelled));
    view.set_end_date(Some(date(2025, 7, 1)));
    assert!(view.filtered().is_no_results());

    view.update(key(KeyCode::Char('x')));
    assert!(!view.filter().is_active());
    assert_eq!(ids(&view).len(), 5);
}

#[test]
fn test_no_results_state_is_rendered() {
    let mut view = paged(5);
    view.set_status_filter("Chờ xác nhận".parse().unwrap());
    view.set_start_date(Some(date(2025, 7, 1)));
    view.set_end_date(Some(date(2025, 8, 20)));

    assert!(view.filtered().is_no_results());
    assert!(view.visible().is_empty());
    let out = plain(&view);
    assert!(out.contains("No appointments match the selected filters."));
    assert!(!out.contains("Specialty"));
    assert!(!out.contains("Showing"));
}

#[test]
fn test_empty_source_has_its_own_message() {
    let view = Model::new(Vec::new(), &Config::default());
    assert_eq!(view.filtered(), FilteredView::EmptySource);
    let out = plain(&view);
    assert!(out.contains("No appointments yet."));
    assert!(!out.contains("match the selected filters"));
}

#[test]
fn test_table_rows_show_labels_and_placeholders() {
    let mut view = paged(5);
    view.set_status_filter(StatusFilter::Only(AppointmentStatus::Pending));
    let out = plain(&view);
    assert!(out.contains("Status: Chờ xác nhận · From: — · To: —"));
    assert!(out.contains("Nhi khoa"));
    assert!(out.contains("Nội tổng quát"));
    assert!(out.contains("Chờ xác nhận"));
    assert!(!out.contains("Tim mạch"));

    let row = out
        .lines()
        .find(|line| line.starts_with("2 "))
        .expect("row for appointment 2");
    assert!(row.contains("2025-08-28"));
    assert!(row.contains("—"));
}

#[test]
fn test_view_shows_pagination_row_when_paged() {
    let view = paged(2);
    let out = plain(&view);
    assert!(out.contains("Showing 1-2 of 5"));
    assert!(out.contains("[1] 2 3"));
    assert!(out.contains("→/l next page"));
}

#[test]
fn test_malformed_date_text_is_ignored() {
    let mut view = paged(5);
    view.set_start_date_str("not a date");
    assert_eq!(view.filter().start_date, None);
    assert_eq!(ids(&view).len(), 5);

    view.set_end_date_str("2025-08-10");
    assert_eq!(ids(&view), vec![3, 4]);
}

#[test]
fn test_filtering_leaves_source_untouched() {
    let mut view = paged(2);
    let before = view.source().to_vec();
    view.set_status_filter(StatusFilter::Only(AppointmentStatus::Completed));
    view.set_start_date(Some(date(2025, 9, 1)));
    assert_eq!(view.source(), before.as_slice());
}

#[test]
fn test_set_source_resets_page() {
    let mut view = paged(2);
    view.set_page(2);
    let mut more = mock_appointments().unwrap();
    more.truncate(3);
    view.set_source(more);
    assert_eq!(view.page(), 0);
    assert_eq!(view.pagination_props().total_pages, 2);
}

#[test]
fn test_config_preselects_status() {
    let config = Config {
        default_status: Some(AppointmentStatus::Confirmed),
        ..Config::default()
    };
    let view = Model::new(mock_appointments().unwrap(), &config);
    assert_eq!(ids(&view), vec![1]);
}

#[test]
fn test_init_uses_bundled_data() {
    let (view, cmd) = <Model as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert_eq!(view.source().len(), 5);
}

#[tokio::test]
async fn test_next_key_round_trip_through_owner() {
    let mut view = paged(2);
    let cmd = view.update(key(KeyCode::Right)).expect("next page is enabled");
    // nothing moves until the owner receives the message
    assert_eq!(view.page(), 0);

    let msg = cmd.await.expect("page change message");
    assert!(view.update(msg).is_none());
    assert_eq!(view.page(), 1);
    assert_eq!(ids(&view), vec![3, 4]);
}

#[test]
fn test_prev_key_on_first_page_does_nothing() {
    let mut view = paged(2);
    assert!(view.update(key(KeyCode::Left)).is_none());
    assert_eq!(view.page(), 0);
}
