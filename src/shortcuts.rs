use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Listener, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + K
    FocusSearch,
    /// Escape
    Dismiss,
}

impl Shortcut {
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        match key {
            "k" if ctrl || meta => Some(Shortcut::FocusSearch),
            "Escape" => Some(Shortcut::Dismiss),
            _ => None,
        }
    }
}

/// Focuses the page search box. Pages without one ignore the shortcut.
pub fn focus_search(page: &impl Page) {
    if let Err(e) = page.focus(config::SEARCH_INPUT_SELECTOR) {
        log::debug!("search shortcut ignored: {}", e);
    }
}

/// Invokes `on_shortcut` whenever the document sees `shortcut`. Browser
/// defaults are suppressed for the search shortcut.
#[hook]
pub fn use_shortcut(shortcut: Shortcut, on_shortcut: Callback<()>) {
    use_effect_with_deps(
        move |(shortcut, on_shortcut)| {
            let shortcut = *shortcut;
            let on_shortcut = on_shortcut.clone();
            let listener = dom::document().and_then(|document| {
                Listener::new(&document, "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if Shortcut::from_key(&event.key(), event.ctrl_key(), event.meta_key())
                        == Some(shortcut)
                    {
                        if shortcut == Shortcut::FocusSearch {
                            event.prevent_default();
                        }
                        log::debug!("shortcut {:?}", shortcut);
                        on_shortcut.emit(());
                    }
                })
            });
            if let Err(e) = &listener {
                log::warn!("keyboard shortcuts unavailable: {}", e);
            }

            move || drop(listener)
        },
        (shortcut, on_shortcut),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakePage;

    #[test]
    fn recognises_shortcuts() {
        assert_eq!(Shortcut::from_key("k", true, false), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("k", false, true), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::from_key("Escape", true, false), Some(Shortcut::Dismiss));
    }

    #[test]
    fn ignores_plain_keys() {
        assert_eq!(Shortcut::from_key("k", false, false), None);
        assert_eq!(Shortcut::from_key("K", true, false), None);
        assert_eq!(Shortcut::from_key("Enter", false, false), None);
    }

    #[test]
    fn focus_search_uses_search_input() {
        let page = FakePage {
            selectors: vec![config::SEARCH_INPUT_SELECTOR.to_string()],
            ..FakePage::default()
        };
        focus_search(&page);
        assert_eq!(page.calls(), vec![format!("focus {}", config::SEARCH_INPUT_SELECTOR)]);
    }

    #[test]
    fn focus_search_without_search_input_is_silent() {
        let page = FakePage::default();
        focus_search(&page);
        assert!(page.calls().is_empty());
    }
}
