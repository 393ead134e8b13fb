//! Scroll-derived UI state and in-page navigation.
//!
//! [`ViewState`] is recomputed from scratch on every scroll sample. The
//! [`ViewportController`] owns that state plus the mobile menu flag, and talks to
//! the page through a [`ScrollHost`] so the logic can run outside a browser.

use thiserror::Error;

use crate::content::SectionId;

/// Navbar switches to its compact style past this offset.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;
/// Scroll-to-top control appears past this offset.
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_offset_px: f64,
    pub document_height_px: f64,
    pub viewport_height_px: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_offset_px: f64, document_height_px: f64, viewport_height_px: f64) -> Self {
        Self {
            scroll_offset_px,
            document_height_px,
            viewport_height_px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub is_scrolled: bool,
    pub show_scroll_to_top: bool,
    /// 0 at the top of the document, 1 at the bottom
    pub scroll_progress: f64,
}

impl ViewState {
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        let offset = metrics.scroll_offset_px;
        let scrollable = (metrics.document_height_px - metrics.viewport_height_px).max(1.0);
        let progress = offset / scrollable;
        Self {
            is_scrolled: offset > SCROLLED_THRESHOLD_PX,
            show_scroll_to_top: offset > SCROLL_TO_TOP_THRESHOLD_PX,
            scroll_progress: if progress.is_finite() {
                progress.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }
}

impl From<ScrollMetrics> for ViewState {
    fn from(metrics: ScrollMetrics) -> Self {
        Self::from_metrics(metrics)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    #[error("no browser window available")]
    NoWindow,
    #[error("no element with anchor #{0}")]
    MissingAnchor(String),
}

/// The page surface the controller scrolls. Both calls request a smooth scroll
/// and return without waiting for it to finish.
pub trait ScrollHost {
    /// Bring the element carrying `anchor` as its id to the top of the viewport.
    fn scroll_into_view(&self, anchor: &str) -> Result<(), ViewportError>;
    fn scroll_to(&self, top_px: f64) -> Result<(), ViewportError>;
}

#[derive(Debug)]
pub struct ViewportController<H> {
    host: H,
    state: ViewState,
    menu_open: bool,
}

impl<H: ScrollHost> ViewportController<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: ViewState::default(),
            menu_open: false,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> ViewState {
        self.state = metrics.into();
        self.state
    }

    /// Smooth-scrolls to `section` and closes the mobile menu. A missing anchor
    /// leaves everything untouched.
    pub fn navigate_to(&mut self, section: SectionId) {
        match self.host.scroll_into_view(section.anchor()) {
            Ok(()) => {
                log::debug!("navigating to #{section}");
                self.close_menu();
            }
            Err(e) => log::warn!("navigation to #{section} skipped: {e}"),
        }
    }

    pub fn scroll_to_top(&self) {
        if let Err(e) = self.host.scroll_to(0.0) {
            log::warn!("scroll to top skipped: {e}");
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    // Records scroll requests; only anchors in `present` exist on the page.
    #[derive(Default)]
    struct FakeHost {
        present: Vec<&'static str>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeHost {
        fn with(present: &[&'static str]) -> Self {
            Self {
                present: present.to_vec(),
                ..Default::default()
            }
        }
    }

    impl ScrollHost for FakeHost {
        fn scroll_into_view(&self, anchor: &str) -> Result<(), ViewportError> {
            if !self.present.contains(&anchor) {
                return Err(ViewportError::MissingAnchor(anchor.to_string()));
            }
            self.requests.borrow_mut().push(format!("#{anchor}"));
            Ok(())
        }

        fn scroll_to(&self, top_px: f64) -> Result<(), ViewportError> {
            self.requests.borrow_mut().push(format!("top={top_px}"));
            Ok(())
        }
    }

    struct NoWindowHost;

    impl ScrollHost for NoWindowHost {
        fn scroll_into_view(&self, _anchor: &str) -> Result<(), ViewportError> {
            Err(ViewportError::NoWindow)
        }

        fn scroll_to(&self, _top_px: f64) -> Result<(), ViewportError> {
            Err(ViewportError::NoWindow)
        }
    }

    fn at(offset: f64) -> ViewState {
        ViewState::from_metrics(ScrollMetrics::new(offset, 5000.0, 800.0))
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!at(0.0).is_scrolled);
        assert!(!at(20.0).is_scrolled);
        assert!(at(21.0).is_scrolled);
        assert!(at(20.5).is_scrolled);
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        assert!(!at(21.0).show_scroll_to_top);
        assert!(!at(400.0).show_scroll_to_top);
        assert!(at(401.0).show_scroll_to_top);
    }

    #[test]
    fn test_progress_scenario() {
        let state = ViewState::from_metrics(ScrollMetrics::new(600.0, 2000.0, 800.0));
        assert_eq!(state.scroll_progress, 0.5);
    }

    #[test]
    fn test_progress_monotonic_and_bounded() {
        let mut prev = 0.0;
        for offset in (-200..=6000).step_by(50) {
            let progress = at(offset as f64).scroll_progress;
            assert!((0.0..=1.0).contains(&progress), "{progress} out of range");
            assert!(progress >= prev, "progress decreased at offset {offset}");
            prev = progress;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_progress_short_document() {
        // document no taller than the viewport: denominator floors at 1
        let state = ViewState::from_metrics(ScrollMetrics::new(0.0, 600.0, 800.0));
        assert_eq!(state.scroll_progress, 0.0);
        let state = ViewState::from_metrics(ScrollMetrics::new(5.0, 600.0, 800.0));
        assert_eq!(state.scroll_progress, 1.0);

        let state = ViewState::from_metrics(ScrollMetrics::new(f64::NAN, 2000.0, 800.0));
        assert_eq!(state.scroll_progress, 0.0);
    }

    #[test]
    fn test_on_scroll_idempotent() {
        let mut controller = ViewportController::new(FakeHost::default());
        let metrics = ScrollMetrics::new(450.0, 3000.0, 900.0);
        let first = controller.on_scroll(metrics);
        let second = controller.on_scroll(metrics);
        assert_eq!(first, second);
        assert_eq!(controller.state(), first);
        assert_eq!(ViewState::from(metrics), first);
    }

    #[test]
    fn test_on_scroll_last_write_wins() {
        let mut controller = ViewportController::new(FakeHost::default());
        controller.on_scroll(ScrollMetrics::new(1000.0, 3000.0, 900.0));
        let state = controller.on_scroll(ScrollMetrics::new(10.0, 3000.0, 900.0));
        assert!(!state.is_scrolled);
        assert!(!state.show_scroll_to_top);
        assert_eq!(controller.state(), state);
    }

    #[test]
    fn test_on_scroll_tracks_document_growth_at_same_offset() {
        let mut controller = ViewportController::new(FakeHost::default());
        let before = controller.on_scroll(ScrollMetrics::new(600.0, 2000.0, 800.0));
        assert_eq!(before.scroll_progress, 0.5);

        // page reflowed taller without a scroll
        let after = controller.on_scroll(ScrollMetrics::new(600.0, 3200.0, 800.0));
        assert_eq!(after.scroll_progress, 0.25);
        assert_eq!(controller.state(), after);

        // window grew taller
        let resized = controller.on_scroll(ScrollMetrics::new(600.0, 3200.0, 2000.0));
        assert_eq!(resized.scroll_progress, 0.5);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut controller = ViewportController::new(FakeHost::with(&["about", "contact"]));
        assert!(controller.toggle_menu());
        controller.navigate_to(SectionId::Contact);
        assert!(!controller.menu_open());
        assert_eq!(*controller.host().requests.borrow(), vec!["#contact"]);
    }

    #[test]
    fn test_navigate_missing_anchor_is_noop() {
        let mut controller = ViewportController::new(FakeHost::with(&["hero"]));
        let state = controller.on_scroll(ScrollMetrics::new(500.0, 2000.0, 800.0));
        controller.toggle_menu();

        controller.navigate_to(SectionId::Contact);

        assert!(controller.menu_open());
        assert_eq!(controller.state(), state);
        assert!(controller.host().requests.borrow().is_empty());
    }

    #[test]
    fn test_navigate_without_window() {
        let mut controller = ViewportController::new(NoWindowHost);
        controller.toggle_menu();
        controller.navigate_to(SectionId::About);
        controller.scroll_to_top();
        assert!(controller.menu_open());
    }

    #[test]
    fn test_scroll_to_top_requests_zero() {
        let controller = ViewportController::new(FakeHost::default());
        controller.scroll_to_top();
        assert_eq!(*controller.host().requests.borrow(), vec!["top=0"]);
    }

    #[test]
    fn test_menu_toggle() {
        let mut controller = ViewportController::new(FakeHost::default());
        assert!(!controller.menu_open());
        assert!(controller.toggle_menu());
        assert!(!controller.toggle_menu());
        controller.toggle_menu();
        controller.close_menu();
        assert!(!controller.menu_open());
    }
}
