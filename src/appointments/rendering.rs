//! View rendering for the appointment status view.

use super::style::EMPTY_CELL;
use super::Model;
use crate::appointment::Appointment;
use crate::filter::FilteredView;
use crate::key;
use unicode_width::UnicodeWidthStr;

const NO_MATCHES: &str = "No appointments match the selected filters.";
const EMPTY_SOURCE: &str = "No appointments yet.";
const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 6] = ["#", "Date", "Time", "Specialty", "Doctor", "Status"];

impl Model {
    /// Renders the title, filter summary, the current page of rows (or the
    /// matching empty-state message), the pagination row and the help line.
    pub fn view(&self) -> String {
        let mut sections = vec![
            self.styles.title.clone().render(&self.title),
            self.styles
                .filter_summary
                .clone()
                .render(&self.filter_summary()),
            String::new(),
        ];

        match self.filtered() {
            FilteredView::EmptySource => {
                sections.push(self.styles.no_items.clone().render(EMPTY_SOURCE));
            }
            FilteredView::NoMatches => {
                sections.push(self.styles.no_items.clone().render(NO_MATCHES));
            }
            FilteredView::Matches(_) => sections.push(self.view_table()),
        }

        let pagination = self.pagination.view();
        if !pagination.is_empty() {
            sections.push(String::new());
            sections.push(pagination);
        }

        if self.show_help {
            sections.push(String::new());
            sections.push(self.styles.help.clone().render(&self.help_line()));
        }

        sections.join("\n")
    }

    fn filter_summary(&self) -> String {
        let bound = |date: Option<chrono::NaiveDate>| {
            date.map_or_else(|| EMPTY_CELL.to_string(), |d| d.format("%Y-%m-%d").to_string())
        };
        format!(
            "Status: {} · From: {} · To: {}",
            self.filter.status,
            bound(self.filter.start_date),
            bound(self.filter.end_date)
        )
    }

    fn help_line(&self) -> String {
        let mut parts = vec![key::short_help_line(&self.keymap)];
        if self.pagination.props().is_visible() {
            parts.push(key::short_help_line(&self.pagination.keymap));
        }
        parts.join(" • ")
    }

    fn view_table(&self) -> String {
        let rows: Vec<(Vec<String>, &Appointment)> = self
            .visible()
            .into_iter()
            .map(|a| (cells(a), a))
            .collect();

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
        for (row, _) in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        let header = HEADERS
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (h, w))| pad(h, *w, i + 1 == HEADERS.len()))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        lines.push(self.styles.header.clone().render(&header));

        for (row, appointment) in rows {
            let last = row.len() - 1;
            let rendered = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    let padded = pad(cell, *w, i == last);
                    if i == last {
                        self.styles.status(appointment.status).clone().render(&padded)
                    } else {
                        self.styles.cell.clone().render(&padded)
                    }
                })
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            lines.push(rendered);
        }

        lines.join("\n")
    }
}

fn cells(a: &Appointment) -> Vec<String> {
    vec![
        a.id.to_string(),
        a.date.format("%Y-%m-%d").to_string(),
        a.time.clone(),
        a.specialty.clone(),
        a.doctor.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
        a.status.label().to_string(),
    ]
}

// The last column is left unpadded so rows carry no trailing blanks.
fn pad(text: &str, width: usize, last: bool) -> String {
    if last {
        return text.to_string();
    }
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
