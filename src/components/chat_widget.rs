use yew::prelude::*;

use crate::dom::{self, BrowserPage, Page};

/// Opens or closes the overlay and locks page scrolling behind it.
pub fn set_chat_open(page: &impl Page, open: bool) {
    let overflow = if open { "hidden" } else { "" };
    if let Err(e) = page.set_body_overflow(overflow) {
        log::warn!("body scroll lock not applied: {}", e);
    }
}

#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let open = use_state_eq(|| false);
    let backdrop = use_node_ref();

    {
        use_effect_with_deps(
            move |is_open| {
                set_chat_open(&BrowserPage, *is_open);
                let was_open = *is_open;
                // Never leave the page locked behind an unmounted overlay
                move || {
                    if was_open {
                        set_chat_open(&BrowserPage, false);
                    }
                }
            },
            *open,
        );
    }

    let open_chat = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("chat widget opened");
            open.set(true);
        })
    };
    let close_chat = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let on_backdrop = {
        let open = open.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::is_backdrop_click(&e, &backdrop) {
                open.set(false);
            }
        })
    };

    html! {
        <>
            <button id="chatbot-toggle" class="chatbot-toggle" aria-label="Open chat" onclick={open_chat}>
                <i class="fas fa-comments"></i>
            </button>
            <div id="chatbot-overlay" ref={backdrop} class={classes!("chatbot-overlay", open.then_some("open"))} onclick={on_backdrop}>
                <div class="chatbot-panel">
                    <div class="chatbot-header">
                        <span>{"Chat with SuperChat"}</span>
                        <button id="chatbot-close" class="chatbot-close" aria-label="Close chat" onclick={close_chat}>
                            {"✕"}
                        </button>
                    </div>
                    <div class="chatbot-body">
                        <p>{"Hi! Ask us anything about private AI deployments."}</p>
                    </div>
                </div>
            </div>
        </>
    }
}
