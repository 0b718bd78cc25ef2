//! WASM bindings for the page enhancements
//!
//! This module wires the behaviors to the real DOM: trait implementations
//! over `web_sys`, click listener closures, a console-backed logger, and the
//! module start hook that attaches everything once the document is parsed.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, Event};

use crate::config::EnhanceConfig;
use crate::confirm::{ClickVerdict, ConfirmGuard};
use crate::error::{EnhanceError, EnhanceResult};
use crate::nav::NavToggle;
use crate::page::{ConfirmDialog, Page, PageElement};

// Use wee_alloc for smaller WASM binary
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook and console logging, then attach the default
/// enhancements: immediately when the document is already parsed, otherwise
/// from a one-shot `DOMContentLoaded` listener.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_logging();

    if let Err(err) = schedule_enhancement() {
        log::error!("page enhancement not scheduled: {err}");
    }
}

// ========================
// Console logging
// ========================

/// Forwards `log` records to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Debug
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from(format!("{}: {}", record.target(), record.args()));
        match record.level() {
            log::Level::Error => console::error_1(&line),
            log::Level::Warn => console::warn_1(&line),
            log::Level::Info => console::info_1(&line),
            log::Level::Debug | log::Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    // A second install attempt (host re-importing the module) is harmless
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }
}

// ========================
// DOM implementations of the page traits
// ========================

/// [`Page`] over the real DOM
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    /// Wrap an explicit document handle
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current browsing context
    pub fn from_window() -> EnhanceResult<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or(EnhanceError::DocumentUnavailable)
    }
}

impl Page for DomPage {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn first_matching(&self, selector: &str) -> EnhanceResult<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|_| EnhanceError::InvalidSelector(selector.to_string()))
    }

    fn marked_elements(&self, attribute: &str) -> EnhanceResult<Vec<Element>> {
        let selector = format!("[{attribute}]");
        let list = self
            .document
            .query_selector_all(&selector)
            .map_err(|_| EnhanceError::InvalidSelector(selector.clone()))?;

        let mut elements = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(element) = list
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                elements.push(element);
            }
        }
        Ok(elements)
    }
}

impl PageElement for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn toggle_class(&self, class: &str) -> EnhanceResult<bool> {
        self.class_list()
            .toggle(class)
            .map_err(|_| EnhanceError::InvalidClassName(class.to_string()))
    }
}

/// [`ConfirmDialog`] over `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialog;

impl ConfirmDialog for BrowserDialog {
    fn confirm(&self, message: &str) -> bool {
        // `window.confirm` never throws; a missing window (or an embedder
        // that disabled dialogs) counts as declined.
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

// ========================
// Listener wiring
// ========================

/// Attach both behaviors to `page`, reporting what got bound
pub fn enhance_document(
    page: &DomPage,
    config: &EnhanceConfig,
) -> EnhanceResult<EnhanceSummary> {
    let nav_toggle_bound = bind_nav_toggle(page, config)?;
    let confirm_guards_bound = bind_confirm_guards(page, config)?;
    Ok(EnhanceSummary {
        nav_toggle_bound,
        confirm_guards_bound,
    })
}

fn bind_nav_toggle(page: &DomPage, config: &EnhanceConfig) -> EnhanceResult<bool> {
    let toggle = NavToggle::from_config(config);

    // Pages without a mobile nav have no control; silently skip
    let Some(control) = toggle.locate_control(page) else {
        return Ok(false);
    };

    let handler_page = page.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        match toggle.handle_click(&handler_page) {
            Ok(open) => log::debug!("nav links {}", if open { "opened" } else { "closed" }),
            Err(err) => log::error!("nav toggle click failed: {err}"),
        }
    });
    attach_click(&control, &closure)?;
    closure.forget();
    Ok(true)
}

fn bind_confirm_guards(page: &DomPage, config: &EnhanceConfig) -> EnhanceResult<usize> {
    let guard = ConfirmGuard::from_config(config);
    let targets = guard.targets(page)?;
    let bound = targets.len();

    for element in targets {
        let handler_guard = guard.clone();
        let handler_element = element.clone();
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let verdict = handler_guard.handle_click(&handler_element, &BrowserDialog);
            if verdict == ClickVerdict::Suppress {
                event.prevent_default();
            }
        });
        attach_click(&element, &closure)?;
        closure.forget();
    }
    Ok(bound)
}

fn attach_click(element: &Element, closure: &Closure<dyn FnMut(Event)>) -> EnhanceResult<()> {
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|err| EnhanceError::Listener(format!("{err:?}")))
}

fn schedule_enhancement() -> EnhanceResult<()> {
    let page = DomPage::from_window()?;

    // Module scripts normally execute after parsing, but the module can also
    // be injected while the document is still streaming in
    if page.document.ready_state() == "loading" {
        let document = page.document.clone();
        let deferred = Closure::once(move || run_default_enhancement(&page));
        document
            .add_event_listener_with_callback("DOMContentLoaded", deferred.as_ref().unchecked_ref())
            .map_err(|err| EnhanceError::Listener(format!("{err:?}")))?;
        deferred.forget();
    } else {
        run_default_enhancement(&page);
    }
    Ok(())
}

fn run_default_enhancement(page: &DomPage) {
    match enhance_document(page, &EnhanceConfig::default()) {
        Ok(summary) => log::info!(
            "page enhancements attached (nav toggle: {}, confirm guards: {})",
            summary.nav_toggle_bound,
            summary.confirm_guards_bound
        ),
        Err(err) => log::error!("page enhancement failed: {err}"),
    }
}

// ========================
// Output Data Structures
// ========================

/// What a single enhancement pass attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnhanceSummary {
    /// Whether the nav toggle control was present and bound
    pub nav_toggle_bound: bool,
    /// Number of elements bound with a confirmation guard
    pub confirm_guards_bound: usize,
}

#[derive(Debug, Serialize)]
struct EnhanceResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<EnhanceSummary>,
    /// Timing information in milliseconds
    ms_elapsed: Option<u64>,
}

/// Current time in milliseconds from the JS clock
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

fn elapsed_ms(start: f64) -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() - start) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = start;
        0
    }
}

// ========================
// Main WASM Entry Point
// ========================

/// Re-run the enhancement with configuration overrides
///
/// Takes a JSON object string (absent fields keep their defaults) and
/// returns a JSON report. Intended for hosts that replace page content
/// wholesale and want the new elements scanned; elements that survived the
/// replacement end up with stacked listeners, exactly as repeated
/// `addEventListener` calls with distinct closures would.
#[wasm_bindgen]
pub fn enhance(config_json: &str) -> String {
    let start = now_ms();

    let result = match EnhanceConfig::from_json(config_json) {
        Ok(config) => run_enhancement(&config, start),
        Err(err) => EnhanceResponse {
            success: false,
            error: Some(format!("Failed to parse config: {err}")),
            summary: None,
            ms_elapsed: Some(elapsed_ms(start)),
        },
    };

    serde_json::to_string(&result).unwrap_or_else(|err| {
        format!(r#"{{"success":false,"error":"Serialization failed: {err}"}}"#)
    })
}

fn run_enhancement(config: &EnhanceConfig, start: f64) -> EnhanceResponse {
    let outcome = DomPage::from_window().and_then(|page| enhance_document(&page, config));
    match outcome {
        Ok(summary) => EnhanceResponse {
            success: true,
            error: None,
            summary: Some(summary),
            ms_elapsed: Some(elapsed_ms(start)),
        },
        Err(err) => EnhanceResponse {
            success: false,
            error: Some(err.to_string()),
            summary: None,
            ms_elapsed: Some(elapsed_ms(start)),
        },
    }
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_response_shape() {
        let response = EnhanceResponse {
            success: true,
            error: None,
            summary: Some(EnhanceSummary {
                nav_toggle_bound: true,
                confirm_guards_bound: 3,
            }),
            ms_elapsed: Some(1),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"success":true,"summary":{"nav_toggle_bound":true,"confirm_guards_bound":3},"ms_elapsed":1}"#
        );
    }

    #[test]
    fn test_error_response_skips_summary() {
        let response = EnhanceResponse {
            success: false,
            error: Some("no document available in this environment".to_string()),
            summary: None,
            ms_elapsed: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"error":"no document available in this environment","ms_elapsed":null}"#
        );
    }
}
