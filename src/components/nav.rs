use std::rc::Rc;

use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::config;
use crate::dom::{self, Listener};
use crate::hooks::use_scrolled_past;
use crate::shortcuts::{use_shortcut, Shortcut};
use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
}

pub enum NavAction {
    Toggle,
    Close,
    /// A click somewhere in the document; `inside` is true when it hit the
    /// toggle or the menu.
    DocumentClick { inside: bool },
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            NavAction::Toggle => !self.open,
            NavAction::Close => false,
            NavAction::DocumentClick { inside } => self.open && inside,
        };
        if open == self.open {
            self
        } else {
            Rc::new(NavMenu { open })
        }
    }
}

pub fn navbar_shadow(scrolled: bool) -> &'static str {
    if scrolled {
        config::NAV_SHADOW_RAISED
    } else {
        config::NAV_SHADOW_FLAT
    }
}

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SHADOW_OFFSET
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(NavMenu::default);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();
    let scrolled = use_scrolled_past(is_scrolled);

    // Close when clicking outside the toggle and the menu
    {
        let menu = menu.dispatcher();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = dom::document().and_then(|document| {
                    Listener::new(&document, "click", move |event| {
                        let target = event
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
                        let contains = |node: &NodeRef| match (node.get(), target.as_ref()) {
                            (Some(node), Some(target)) => node.contains(Some(target)),
                            _ => false,
                        };
                        let inside = contains(&toggle_ref) || contains(&menu_ref);
                        menu.dispatch(NavAction::DocumentClick { inside });
                    })
                });
                if let Err(e) = &listener {
                    log::warn!("outside-click listener not attached: {}", e);
                }

                move || drop(listener)
            },
            (),
        );
    }

    let close_on_escape = {
        let menu = menu.dispatcher();
        use_callback(move |_, _| menu.dispatch(NavAction::Close), ())
    };
    use_shortcut(Shortcut::Dismiss, close_on_escape);

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(NavAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(NavAction::Close))
    };

    let active = menu.open.then_some("active");
    let shadow = format!("box-shadow: {};", navbar_shadow(scrolled));

    html! {
        <nav class="navbar" style={shadow}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"SuperChat"}
                </Link<Route>>

                <button id="navToggle" ref={toggle_ref} class={classes!("nav-toggle", active)} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", active)}>
                    <li onclick={close_menu.clone()}>
                        <AnchorLink href="#models" class="nav-link">{"Models"}</AnchorLink>
                    </li>
                    <li onclick={close_menu.clone()}>
                        <AnchorLink href="#workflows" class="nav-link">{"Workflows"}</AnchorLink>
                    </li>
                    <li onclick={close_menu.clone()}>
                        <AnchorLink href="#deployment" class="nav-link">{"Deployment"}</AnchorLink>
                    </li>
                    <li onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </li>
                    <li onclick={close_menu}>
                        <AnchorLink href="#contact" class="nav-link nav-cta">{"Contact Sales"}</AnchorLink>
                    </li>
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavMenu, action: NavAction) -> NavMenu {
        *Rc::new(state).reduce(action)
    }

    const OPEN: NavMenu = NavMenu { open: true };
    const CLOSED: NavMenu = NavMenu { open: false };

    #[test]
    fn toggle_flips() {
        assert_eq!(reduce(CLOSED, NavAction::Toggle), OPEN);
        assert_eq!(reduce(OPEN, NavAction::Toggle), CLOSED);
    }

    #[test]
    fn outside_click_closes_open_menu() {
        assert_eq!(reduce(OPEN, NavAction::DocumentClick { inside: false }), CLOSED);
    }

    #[test]
    fn inside_click_leaves_menu_alone() {
        assert_eq!(reduce(OPEN, NavAction::DocumentClick { inside: true }), OPEN);
        assert_eq!(reduce(CLOSED, NavAction::DocumentClick { inside: true }), CLOSED);
    }

    #[test]
    fn link_click_and_escape_close() {
        // Menu links and the Escape shortcut both dispatch Close
        assert_eq!(reduce(OPEN, NavAction::Close), CLOSED);
        assert_eq!(reduce(CLOSED, NavAction::Close), CLOSED);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(CLOSED);
        let next = state.clone().reduce(NavAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn shadow_follows_scroll_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert_eq!(navbar_shadow(is_scrolled(120.0)), config::NAV_SHADOW_RAISED);
        // Scrolling back up drops the shadow again
        assert_eq!(navbar_shadow(is_scrolled(10.0)), config::NAV_SHADOW_FLAT);
    }
}
