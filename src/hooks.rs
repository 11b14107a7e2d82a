use yew::prelude::*;

use crate::dom::{self, BrowserPage, Listener, ObserveOptions, Page};

/// Re-evaluates `is_past` against the window scroll offset on every scroll
/// event. Only re-renders when the answer changes.
#[hook]
pub fn use_scrolled_past(is_past: fn(f64) -> bool) -> bool {
    let past = use_state_eq(|| is_past(BrowserPage.scroll_y()));

    {
        let past = past.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::window().and_then(|window| {
                    Listener::new(&window, "scroll", move |_| {
                        past.set(is_past(BrowserPage.scroll_y()));
                    })
                });
                if let Err(e) = &listener {
                    log::warn!("scroll listener not attached: {}", e);
                }

                move || drop(listener)
            },
            (),
        );
    }

    *past
}

/// Becomes true the first time `node` enters the viewport and stays true.
/// Nothing is observed while `enabled` is false.
#[hook]
pub fn use_seen_once(node: NodeRef, options: ObserveOptions, enabled: bool) -> bool {
    let seen = use_state_eq(|| false);

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |enabled| {
                let watch = match node.cast::<web_sys::Element>() {
                    Some(element) if *enabled && !*seen => {
                        let seen = seen.clone();
                        match dom::observe_once(&element, options, move || seen.set(true)) {
                            Ok(watch) => Some(watch),
                            Err(e) => {
                                log::warn!("intersection observer unavailable: {}", e);
                                None
                            }
                        }
                    }
                    _ => None,
                };

                move || drop(watch)
            },
            enabled,
        );
    }

    *seen
}
