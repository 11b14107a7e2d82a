use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::dom::{BrowserPage, ObserveOptions, Page};
use crate::hooks::use_seen_once;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not yet in view, rendered as authored.
    Waiting,
    /// Just entered the view; pushed down and transparent.
    Entering,
    Revealed,
}

impl RevealPhase {
    pub fn style(self) -> Option<&'static str> {
        match self {
            RevealPhase::Waiting => None,
            RevealPhase::Entering => Some("opacity: 0; transform: translateY(20px);"),
            RevealPhase::Revealed => {
                Some("transition: all 0.6s ease; opacity: 1; transform: translateY(0);")
            }
        }
    }

    /// Phases only move forward, so a card never animates twice.
    pub fn advance(self, seen: bool) -> Self {
        match (self, seen) {
            (RevealPhase::Waiting, true) => RevealPhase::Entering,
            (RevealPhase::Entering, _) => RevealPhase::Revealed,
            (phase, _) => phase,
        }
    }
}

pub fn reveal_enabled(page: &impl Page) -> bool {
    page.viewport_width() > config::REVEAL_MIN_VIEWPORT_WIDTH
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Card class, e.g. "model-card" or "team-member".
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A card that fades up into place the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let enabled = use_memo(|_| reveal_enabled(&BrowserPage), ());
    let seen = use_seen_once(
        node.clone(),
        ObserveOptions {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: Some(config::REVEAL_ROOT_MARGIN),
        },
        *enabled,
    );
    let phase = use_state_eq(|| RevealPhase::Waiting);

    {
        let deps = (seen, *phase);
        let phase = phase.clone();
        use_effect_with_deps(
            move |(seen, current)| {
                let mut pending = None;
                match current.advance(*seen) {
                    RevealPhase::Entering => phase.set(RevealPhase::Entering),
                    RevealPhase::Revealed if *current == RevealPhase::Entering => {
                        pending = Some(Timeout::new(config::REVEAL_DELAY_MS, move || {
                            phase.set(RevealPhase::Revealed);
                        }));
                    }
                    _ => {}
                }
                move || drop(pending)
            },
            deps,
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={phase.style()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::FakePage;

    #[test]
    fn waits_until_seen() {
        assert_eq!(RevealPhase::Waiting.advance(false), RevealPhase::Waiting);
        assert_eq!(RevealPhase::Waiting.style(), None);
    }

    #[test]
    fn enters_then_reveals() {
        let entering = RevealPhase::Waiting.advance(true);
        assert_eq!(entering, RevealPhase::Entering);
        assert!(entering.style().unwrap().contains("translateY(20px)"));

        let revealed = entering.advance(true);
        assert_eq!(revealed, RevealPhase::Revealed);
        assert!(revealed.style().unwrap().contains("all 0.6s ease"));
    }

    #[test]
    fn animates_at_most_once() {
        let mut phase = RevealPhase::Waiting;
        let mut entered = 0;
        // In, out, in again
        for seen in [true, true, false, true, false, true] {
            let next = phase.advance(seen);
            if next == RevealPhase::Entering {
                entered += 1;
            }
            phase = next;
        }
        assert_eq!(entered, 1);
        assert_eq!(phase, RevealPhase::Revealed);
    }

    #[test]
    fn disabled_on_narrow_viewports() {
        let narrow = FakePage {
            width: 768.0,
            ..FakePage::default()
        };
        let wide = FakePage {
            width: 1280.0,
            ..FakePage::default()
        };
        assert!(!reveal_enabled(&narrow));
        assert!(reveal_enabled(&wide));
    }
}
