//! A page-selector component for bubbletea-rs.
//!
//! The component turns caller-owned pagination state ([`PaginationProps`]) into a
//! range summary, a compacted row of page buttons and Previous/Next controls.
//! It is a controlled component: it never moves to another page by itself.
//! Every navigation request is handed back to the owner as a [`PageChangeMsg`],
//! and the owner decides the new page and pushes fresh props with
//! [`Model::set_props`].
//!
//! Page buttons are compacted around the current page:
//!
//! ```text
//! Showing 26-30 of 47  ‹ Prev  1 … 4 5 [6] 7 8 … 10  Next ›
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// Up to this many pages every page gets its own button.
pub const MAX_UNCOMPACTED_PAGES: usize = 5;

/// Pages shown on each side of the current page once compaction kicks in.
pub const WINDOW_RADIUS: usize = 2;

/// One entry of the page-button row.
///
/// The ellipsis is its own variant so it can never be confused with a real
/// page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    /// A selectable zero-based page index.
    Page(usize),
    /// A disabled marker standing for elided pages.
    Ellipsis,
}

/// Sent to the owner when the user asks for another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangeMsg {
    /// The requested zero-based page.
    pub page: usize,
}

/// Caller-owned pagination state.
///
/// `is_first` and `is_last` are supplied separately from `current_page` and
/// are trusted as given when gating Previous/Next, even if they disagree with
/// the page numbers. No field is corrected: inconsistent props render oddly
/// but never panic.
///
/// # Examples
///
/// ```rust
/// use medportal_widgets::pagination::{PageItem, PaginationProps};
///
/// let props = PaginationProps::new(5, 10, 47, 5);
/// assert_eq!(props.display_range(), (26, 30));
/// assert_eq!(
///     props.page_items(),
///     vec![
///         PageItem::Page(0),
///         PageItem::Ellipsis,
///         PageItem::Page(3),
///         PageItem::Page(4),
///         PageItem::Page(5),
///         PageItem::Page(6),
///         PageItem::Page(7),
///         PageItem::Ellipsis,
///         PageItem::Page(9),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationProps {
    /// The active zero-based page.
    pub current_page: usize,
    /// Number of available pages.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_elements: usize,
    /// Items per page.
    pub page_size: usize,
    /// Whether the owner considers this the first page.
    pub is_first: bool,
    /// Whether the owner considers this the last page.
    pub is_last: bool,
}

impl PaginationProps {
    /// Creates props with `is_first`/`is_last` derived from the page numbers.
    pub fn new(
        current_page: usize,
        total_pages: usize,
        total_elements: usize,
        page_size: usize,
    ) -> Self {
        Self {
            current_page,
            total_pages,
            total_elements,
            page_size,
            is_first: current_page == 0,
            is_last: current_page.saturating_add(1) >= total_pages,
        }
    }

    /// Creates props for `total_elements` items split into pages of
    /// `page_size`. There is always at least one page.
    pub fn for_items(current_page: usize, total_elements: usize, page_size: usize) -> Self {
        let total_pages = total_elements.div_ceil(page_size.max(1)).max(1);
        Self::new(current_page, total_pages, total_elements, page_size)
    }

    /// Overrides the boundary flags (builder pattern).
    pub fn with_boundaries(mut self, is_first: bool, is_last: bool) -> Self {
        self.is_first = is_first;
        self.is_last = is_last;
        self
    }

    /// Returns a copy with `current_page` clamped into `[0, total_pages-1]`
    /// and the boundary flags recomputed.
    pub fn clamped(self) -> Self {
        let last = self.total_pages.saturating_sub(1);
        Self::new(
            self.current_page.min(last),
            self.total_pages,
            self.total_elements,
            self.page_size,
        )
    }

    /// Reports whether there is anything to render.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1 && self.total_elements > 0
    }

    /// One-based, inclusive range of the items on the current page.
    pub fn display_range(&self) -> (usize, usize) {
        let first = self
            .current_page
            .saturating_mul(self.page_size)
            .saturating_add(1);
        let last = self
            .current_page
            .saturating_add(1)
            .saturating_mul(self.page_size)
            .min(self.total_elements);
        (first, last)
    }

    /// Zero-based `start..end` bounds of the current page within a slice of
    /// length `len`, suitable for `&items[start..end]`.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = self.current_page.saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        (start, end)
    }

    /// The compacted row of page buttons.
    ///
    /// With at most [`MAX_UNCOMPACTED_PAGES`] pages every page is listed.
    /// Otherwise the pages within [`WINDOW_RADIUS`] of the current page are
    /// listed, anchored by the first and last page, with an ellipsis wherever
    /// more than one page is skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medportal_widgets::pagination::{PageItem::{Ellipsis, Page}, PaginationProps};
    ///
    /// let props = PaginationProps::new(5, 10, 47, 5);
    /// assert_eq!(
    ///     props.page_items(),
    ///     vec![Page(0), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(9)]
    /// );
    ///
    /// let short = PaginationProps::new(0, 3, 12, 5);
    /// assert_eq!(short.page_items(), vec![Page(0), Page(1), Page(2)]);
    /// ```
    pub fn page_items(&self) -> Vec<PageItem> {
        if self.total_pages <= MAX_UNCOMPACTED_PAGES {
            return (0..self.total_pages).map(PageItem::Page).collect();
        }

        let last = self.total_pages - 1;
        let window_start = self.current_page.saturating_sub(WINDOW_RADIUS);
        let window_end = self.current_page.saturating_add(WINDOW_RADIUS).min(last);

        let mut items = Vec::with_capacity(2 * WINDOW_RADIUS + 5);
        if window_start > 0 {
            items.push(PageItem::Page(0));
            if window_start > 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend((window_start..=window_end).map(PageItem::Page));
        if window_end < last {
            if window_end < last - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(last));
        }
        items
    }

    /// The request made by the Previous control, if it is enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medportal_widgets::pagination::{PageChangeMsg, PaginationProps};
    ///
    /// assert_eq!(PaginationProps::new(0, 3, 12, 5).prev_page(), None);
    /// assert_eq!(
    ///     PaginationProps::new(2, 3, 12, 5).prev_page(),
    ///     Some(PageChangeMsg { page: 1 })
    /// );
    /// ```
    pub fn prev_page(&self) -> Option<PageChangeMsg> {
        (!self.is_first && self.current_page > 0).then(|| PageChangeMsg {
            page: self.current_page - 1,
        })
    }

    /// The request made by the Next control, if it is enabled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use medportal_widgets::pagination::{PageChangeMsg, PaginationProps};
    ///
    /// let props = PaginationProps::new(0, 3, 12, 5);
    /// assert_eq!(props.next_page(), Some(PageChangeMsg { page: 1 }));
    ///
    /// // The owner's flag wins even when a later page exists.
    /// assert_eq!(props.with_boundaries(true, true).next_page(), None);
    /// ```
    pub fn next_page(&self) -> Option<PageChangeMsg> {
        let has_next = self.current_page.saturating_add(1) < self.total_pages;
        (!self.is_last && has_next).then(|| PageChangeMsg {
            page: self.current_page + 1,
        })
    }

    /// The request made by clicking a page button. The ellipsis and the
    /// current page request nothing.
    ///
    /// ```rust
    /// use medportal_widgets::pagination::{PageChangeMsg, PageItem, PaginationProps};
    ///
    /// let props = PaginationProps::new(5, 10, 47, 5);
    /// assert_eq!(props.select(PageItem::Page(9)), Some(PageChangeMsg { page: 9 }));
    /// assert_eq!(props.select(PageItem::Page(5)), None);
    /// assert_eq!(props.select(PageItem::Ellipsis), None);
    /// ```
    pub fn select(&self, item: PageItem) -> Option<PageChangeMsg> {
        match item {
            PageItem::Page(page) if page != self.current_page => Some(PageChangeMsg { page }),
            _ => None,
        }
    }
}

/// Key bindings for the pagination controls.
#[derive(Debug, Clone)]
pub struct PaginationKeyMap {
    /// Activates the Previous control. Default keys: PageUp, Left, 'h'.
    pub prev_page: key::Binding,
    /// Activates the Next control. Default keys: PageDown, Right, 'l'.
    pub next_page: key::Binding,
    /// Moves the button highlight left while focused. Default: shift+tab.
    pub highlight_prev: key::Binding,
    /// Moves the button highlight right while focused. Default: tab.
    pub highlight_next: key::Binding,
    /// Clicks the highlighted page button while focused. Default: enter.
    pub select: key::Binding,
}

impl Default for PaginationKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            highlight_prev: key::Binding::new(vec![KeyCode::BackTab])
                .with_help("shift+tab", "prev button"),
            highlight_next: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "next button"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "go to page"),
        }
    }
}

impl KeyMapTrait for PaginationKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.highlight_prev, &self.highlight_next, &self.select],
        ]
    }
}

/// Terminal styles for the pagination row.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The "Showing A-B of N" summary.
    pub summary: Style,
    /// The current page button.
    pub active_page: Style,
    /// Other page buttons.
    pub page: Style,
    /// The highlighted page button while focused.
    pub highlighted_page: Style,
    /// Enabled Previous/Next controls.
    pub control: Style,
    /// Disabled controls and ellipsis markers.
    pub disabled: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        Self {
            summary: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            active_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1D4ED8",
                    Dark: "#60A5FA",
                })
                .bold(true),
            page: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            highlighted_page: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .underline(true),
            control: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#10B981",
            }),
            disabled: Style::new().foreground(subdued),
        }
    }
}

/// The pagination component.
///
/// Besides the props it only tracks which page button is highlighted for
/// keyboard selection; the highlight resets to the current page whenever new
/// props arrive.
///
/// # Examples
///
/// ```rust
/// use medportal_widgets::pagination::{Model, PaginationProps};
///
/// let pagination = Model::new().with_props(PaginationProps::new(0, 1, 3, 5));
/// assert_eq!(pagination.view(), ""); // a single page renders nothing
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    props: PaginationProps,
    /// Key bindings.
    pub keymap: PaginationKeyMap,
    /// Rendering styles.
    pub styles: Styles,
    /// Text of the Previous control.
    pub prev_label: String,
    /// Text of the Next control.
    pub next_label: String,
    highlight: usize,
    focus: bool,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            props: PaginationProps::default(),
            keymap: PaginationKeyMap::default(),
            styles: Styles::default(),
            prev_label: "‹ Prev".to_string(),
            next_label: "Next ›".to_string(),
            highlight: 0,
            focus: false,
        }
    }
}

impl Model {
    /// Creates a component with empty props.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the props (builder pattern).
    pub fn with_props(mut self, props: PaginationProps) -> Self {
        self.set_props(props);
        self
    }

    /// Replaces the props and moves the highlight to the current page.
    pub fn set_props(&mut self, props: PaginationProps) {
        self.props = props;
        self.highlight = props.current_page;
    }

    /// Sets the styles (builder pattern).
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// The current props.
    pub fn props(&self) -> &PaginationProps {
        &self.props
    }

    /// The page whose button is highlighted.
    pub fn highlighted(&self) -> usize {
        self.highlight
    }

    fn move_highlight(&mut self, forward: bool) {
        let pages: Vec<usize> = self
            .props
            .page_items()
            .into_iter()
            .filter_map(|item| match item {
                PageItem::Page(p) => Some(p),
                PageItem::Ellipsis => None,
            })
            .collect();
        let Some(pos) = pages.iter().position(|p| *p == self.highlight) else {
            self.highlight = self.props.current_page;
            return;
        };
        let next = if forward {
            (pos + 1).min(pages.len() - 1)
        } else {
            pos.saturating_sub(1)
        };
        self.highlight = pages[next];
    }

    /// Handles key presses and returns a command carrying a
    /// [`PageChangeMsg`] when the user requests another page.
    ///
    /// Previous/Next keys always work; highlight and select keys only while
    /// focused. The component's own props are left unchanged.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        let request = if self.keymap.prev_page.matches(key_msg) {
            self.props.prev_page()
        } else if self.keymap.next_page.matches(key_msg) {
            self.props.next_page()
        } else if !self.focus {
            None
        } else if self.keymap.highlight_next.matches(key_msg) {
            self.move_highlight(true);
            None
        } else if self.keymap.highlight_prev.matches(key_msg) {
            self.move_highlight(false);
            None
        } else if self.keymap.select.matches(key_msg) {
            self.props.select(PageItem::Page(self.highlight))
        } else {
            None
        };

        request.map(|change| {
            tracing::debug!(
                from = self.props.current_page,
                to = change.page,
                "page change requested"
            );
            bubbletea_tick(Duration::from_nanos(1), move |_| Box::new(change) as Msg)
        })
    }

    /// Renders the pagination row, or an empty string when there is at most
    /// one page or no items.
    pub fn view(&self) -> String {
        if !self.props.is_visible() {
            return String::new();
        }

        let (first, last) = self.props.display_range();
        let summary = self.styles.summary.clone().render(&format!(
            "Showing {}-{} of {}",
            first, last, self.props.total_elements
        ));

        let prev = self.control(&self.prev_label, self.props.prev_page().is_some());
        let next = self.control(&self.next_label, self.props.next_page().is_some());

        let pages = self
            .props
            .page_items()
            .into_iter()
            .map(|item| self.page_button(item))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{}  {}  {}  {}", summary, prev, pages, next)
    }

    fn control(&self, label: &str, enabled: bool) -> String {
        if enabled {
            self.styles.control.clone().render(label)
        } else {
            self.styles.disabled.clone().render(label)
        }
    }

    fn page_button(&self, item: PageItem) -> String {
        match item {
            PageItem::Ellipsis => self.styles.disabled.clone().render("…"),
            PageItem::Page(p) if p == self.props.current_page => {
                self.styles.active_page.clone().render(&format!("[{}]", p + 1))
            }
            PageItem::Page(p) if self.focus && p == self.highlight => {
                self.styles.highlighted_page.clone().render(&format!("<{}>", p + 1))
            }
            PageItem::Page(p) => self.styles.page.clone().render(&(p + 1).to_string()),
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
        self.highlight = self.props.current_page;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
