//! Browser side of the page: scrolling, metrics sampling, clipboard and the
//! mail client hand-off. Only called from event handlers and effects, which
//! never run during server rendering.

use std::time::Duration;

use js_sys::{Function, Promise, Reflect};
use leptos::prelude::{set_timeout, RwSignal, Update};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::contact::{ContactError, CopyFeedback, CopyHost};
use crate::content::SectionId;
use crate::viewport::{ScrollHost, ScrollMetrics, ViewportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl ScrollHost for BrowserHost {
    fn scroll_into_view(&self, anchor: &str) -> Result<(), ViewportError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(ViewportError::NoWindow)?;
        let element = document
            .get_element_by_id(anchor)
            .ok_or_else(|| ViewportError::MissingAnchor(anchor.to_string()))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn scroll_to(&self, top_px: f64) -> Result<(), ViewportError> {
        let win = window().ok_or(ViewportError::NoWindow)?;
        let options = ScrollToOptions::new();
        options.set_top(top_px);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }
}

pub fn sample_metrics(scroll_offset_px: f64) -> Option<ScrollMetrics> {
    let win = window()?;
    let viewport_height_px = win.inner_height().ok()?.as_f64()?;
    let document_height_px = f64::from(win.document()?.document_element()?.scroll_height());
    Some(ScrollMetrics::new(
        scroll_offset_px,
        document_height_px,
        viewport_height_px,
    ))
}

/// The section named by the URL fragment the page was opened with, if any.
pub fn location_section() -> Option<SectionId> {
    let hash = window()?.location().hash().ok()?;
    SectionId::from_anchor(&hash)
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Navigates to the `mailto:` URI so the OS hands it to the default mail client.
/// Whether a client actually opens cannot be observed from here.
pub fn open_mail_client(uri: &str) {
    let Some(win) = window() else {
        log::warn!("no window to open mail client from");
        return;
    };
    if let Err(e) = win.location().set_href(uri) {
        log::warn!("mail client hand-off failed: {e:?}");
    }
}

fn clipboard_error(value: JsValue) -> ContactError {
    ContactError::Clipboard(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// The copy-email button's view of the browser. Feedback lives in a signal
/// owned by the button.
#[derive(Debug, Clone, Copy)]
pub struct BrowserCopy {
    feedback: RwSignal<CopyFeedback>,
}

impl BrowserCopy {
    pub fn new(feedback: RwSignal<CopyFeedback>) -> Self {
        Self { feedback }
    }
}

impl CopyHost for BrowserCopy {
    /// `navigator.clipboard.writeText`, looked up dynamically since the API is
    /// missing on insecure origins.
    async fn write_text(&self, text: &str) -> Result<(), ContactError> {
        let navigator: JsValue = window()
            .ok_or_else(|| ContactError::Clipboard("no window".to_string()))?
            .navigator()
            .into();

        let clipboard =
            Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(clipboard_error)?;
        if clipboard.is_undefined() {
            return Err(ContactError::Clipboard(
                "clipboard API unavailable".to_string(),
            ));
        }

        let write_text =
            Reflect::get(&clipboard, &JsValue::from_str("writeText")).map_err(clipboard_error)?;
        let Some(write_text) = write_text.dyn_ref::<Function>() else {
            return Err(ContactError::Clipboard(
                "writeText is not a function".to_string(),
            ));
        };

        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(clipboard_error)?;
        JsFuture::from(Promise::from(promise))
            .await
            .map_err(clipboard_error)?;
        Ok(())
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn after(&self, delay_ms: u64, f: impl FnOnce() + 'static) {
        set_timeout(f, Duration::from_millis(delay_ms));
    }

    fn feedback(&self, f: impl FnOnce(&mut CopyFeedback)) {
        self.feedback.update(f);
    }
}
