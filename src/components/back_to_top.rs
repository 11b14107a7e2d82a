use yew::prelude::*;

use crate::config;
use crate::dom::{BrowserPage, Page};
use crate::hooks::use_scrolled_past;

fn is_far_down(scroll_y: f64) -> bool {
    scroll_y >= config::BACK_TO_TOP_OFFSET
}

fn button_style(visible: bool, hovered: bool) -> String {
    format!(
        "position: fixed; bottom: 30px; right: 30px; width: 50px; height: 50px; \
         background: linear-gradient(135deg, #4f46e5 0%, #7c3aed 100%); color: white; \
         border: none; border-radius: 50%; font-size: 1.25rem; cursor: pointer; \
         transition: all 0.3s ease; z-index: 999; opacity: {}; visibility: {}; \
         transform: {}; box-shadow: {};",
        if visible { 1 } else { 0 },
        if visible { "visible" } else { "hidden" },
        if hovered { "translateY(-5px)" } else { "translateY(0)" },
        if hovered { "0 6px 12px rgba(0, 0, 0, 0.15)" } else { "0 4px 6px rgba(0, 0, 0, 0.1)" },
    )
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_scrolled_past(is_far_down);
    let hovered = use_state_eq(|| false);

    let onclick = Callback::from(|_: MouseEvent| BrowserPage.scroll_to_top());
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <button class="back-to-top" style={button_style(visible, *hovered)} aria-label="Back to top"
            onclick={onclick} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
