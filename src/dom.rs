//! Thin capability layer over the browser.
//!
//! Components reach the page through the [`Page`] trait for the handful of
//! imperative operations Yew does not cover (scrolling, focus, body styles),
//! and through [`Listener`] / [`observe_once`] for window-level events and
//! intersection notifications. Every browser lookup returns a [`DomError`]
//! instead of panicking.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use yew::NodeRef;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("no element matches {0}")]
    NotFound(String),
    #[error("{0} is not supported by this browser")]
    Unsupported(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Where the target lands in the viewport after `scroll_into_view`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
    Center,
}

/// The imperative page operations the components depend on.
pub trait Page {
    /// Vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn scroll_to_top(&self);
    /// Smoothly scrolls the element with `id` into view.
    fn scroll_into_view(&self, id: &str, block: ScrollBlock) -> Result<(), DomError>;
    fn set_body_overflow(&self, value: &str) -> Result<(), DomError>;
    /// Focuses the first element matching `selector`.
    fn focus(&self, selector: &str) -> Result<(), DomError>;
}

/// [`Page`] backed by the live `window`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserPage;

impl Page for BrowserPage {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_into_view(&self, id: &str, block: ScrollBlock) -> Result<(), DomError> {
        let target = document()?
            .get_element_by_id(id)
            .ok_or_else(|| DomError::NotFound(format!("#{}", id)))?;

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(match block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
            ScrollBlock::Center => ScrollLogicalPosition::Center,
        });
        target.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }

    fn set_body_overflow(&self, value: &str) -> Result<(), DomError> {
        let body = document()?.body().ok_or(DomError::NoBody)?;
        body.style().set_property("overflow", value)?;
        Ok(())
    }

    fn focus(&self, selector: &str) -> Result<(), DomError> {
        let element = document()?
            .query_selector(selector)?
            .ok_or_else(|| DomError::NotFound(selector.to_string()))?;
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| DomError::NotFound(selector.to_string()))?;
        element.focus()?;
        Ok(())
    }
}

/// An event listener that stays attached until dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Latch that lets a trigger through exactly once.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns true on the first call only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: None,
        }
    }
}

/// Live intersection observer; disconnects on drop.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Calls `on_enter` the first time `element` intersects the viewport, then
/// stops observing it.
pub fn observe_once<F>(
    element: &Element,
    options: ObserveOptions,
    mut on_enter: F,
) -> Result<IntersectionWatch, DomError>
where
    F: FnMut() + 'static,
{
    let mut latch = OneShot::default();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                observer.unobserve(&entry.target());
                if latch.fire() {
                    on_enter();
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(element);

    Ok(IntersectionWatch {
        observer,
        _callback: callback,
    })
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), DomError> {
    let navigator = window()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(DomError::Unsupported("clipboard"));
    }
    JsFuture::from(navigator.clipboard().write_text(text)).await?;
    Ok(())
}

/// True when both sides are present and name the same node.
pub fn same_node<T: PartialEq + ?Sized>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

/// True when the click landed on the `backdrop` element itself, not on one
/// of its children. Yew delegates events to the app root, so the event's
/// current target is never the backdrop and the node ref is the reference.
pub fn is_backdrop_click(e: &MouseEvent, backdrop: &NodeRef) -> bool {
    let target: Option<JsValue> = e.target().map(Into::into);
    let backdrop: Option<JsValue> = backdrop.get().map(Into::into);
    same_node(target.as_ref(), backdrop.as_ref())
}

#[cfg(test)]
pub mod testing {
    use super::{DomError, Page, ScrollBlock};
    use std::cell::{Cell, RefCell};

    /// Records every page operation instead of touching a browser.
    #[derive(Debug, Default)]
    pub struct FakePage {
        pub scroll: Cell<f64>,
        pub width: f64,
        pub ids: Vec<String>,
        pub selectors: Vec<String>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakePage {
        pub fn with_ids(ids: &[&str]) -> Self {
            Self {
                ids: ids.iter().map(|id| id.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl Page for FakePage {
        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn viewport_width(&self) -> f64 {
            self.width
        }

        fn scroll_to_top(&self) {
            self.scroll.set(0.0);
            self.record("scroll_to_top".to_string());
        }

        fn scroll_into_view(&self, id: &str, block: ScrollBlock) -> Result<(), DomError> {
            if !self.ids.iter().any(|known| known == id) {
                return Err(DomError::NotFound(format!("#{}", id)));
            }
            self.record(format!("scroll_into_view {} {:?}", id, block));
            Ok(())
        }

        fn set_body_overflow(&self, value: &str) -> Result<(), DomError> {
            self.record(format!("body overflow={}", value));
            Ok(())
        }

        fn focus(&self, selector: &str) -> Result<(), DomError> {
            if !self.selectors.iter().any(|known| known == selector) {
                return Err(DomError::NotFound(selector.to_string()));
            }
            self.record(format!("focus {}", selector));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakePage;
    use super::*;

    #[test]
    fn one_shot_fires_once() {
        let mut latch = OneShot::default();
        assert!(latch.fire());
        // Repeated intersections after the first are swallowed
        for _ in 0..5 {
            assert!(!latch.fire());
        }
    }

    #[test]
    fn fake_page_reports_missing_targets() {
        let page = FakePage::with_ids(&["contact"]);
        assert!(page.scroll_into_view("contact", ScrollBlock::Start).is_ok());
        assert!(matches!(
            page.scroll_into_view("pricing", ScrollBlock::Start),
            Err(DomError::NotFound(_))
        ));
        assert_eq!(page.calls(), vec!["scroll_into_view contact Start"]);
    }

    #[test]
    fn backdrop_requires_the_backdrop_itself() {
        let overlay = "chatbot-overlay";
        let panel = "chatbot-panel";
        assert!(same_node(Some(overlay), Some(overlay)));
        // Clicks inside the panel bubble up but must not dismiss
        assert!(!same_node(Some(panel), Some(overlay)));
        // Unmounted backdrop or a synthetic event without a target
        assert!(!same_node(Some(overlay), None));
        assert!(!same_node(None, Some(overlay)));
        assert!(!same_node::<str>(None, None));
    }

    #[test]
    fn dom_error_messages() {
        assert_eq!(
            DomError::NotFound("#faq".to_string()).to_string(),
            "no element matches #faq"
        );
        assert_eq!(
            DomError::Unsupported("clipboard").to_string(),
            "clipboard is not supported by this browser"
        );
    }
}
