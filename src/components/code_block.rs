use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::dom;

const COPY_BUTTON_STYLE: &str = "position: absolute; top: 10px; right: 10px; \
    background: rgba(255, 255, 255, 0.2); border: none; color: white; \
    padding: 8px 12px; border-radius: 4px; cursor: pointer; transition: opacity 0.2s;";

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,
}

/// A code sample with a copy button that appears on hover.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let hovered = use_state_eq(|| false);
    let copied = use_state_eq(|| false);

    // Swap the check mark back to the copy icon
    {
        let is_copied = *copied;
        let copied = copied.clone();
        use_effect_with_deps(
            move |is_copied| {
                let reset = is_copied.then(|| {
                    Timeout::new(config::COPY_RESET_MS, move || copied.set(false))
                });
                move || drop(reset)
            },
            is_copied,
        );
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let onclick = {
        let copied = copied.clone();
        let code = props.code.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let code = code.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match dom::copy_to_clipboard(&code).await {
                    Ok(()) => {
                        log::debug!("copied {} characters", code.len());
                        copied.set(true);
                    }
                    Err(e) => log::debug!("copy ignored: {}", e),
                }
            });
        })
    };

    let button_style = format!(
        "{} opacity: {};",
        COPY_BUTTON_STYLE,
        if *hovered { 1 } else { 0 }
    );
    let icon = if *copied { "fas fa-check" } else { "fas fa-copy" };

    html! {
        <div class="code-block-wrapper" style="position: relative;" onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <pre class="code-block"><code>{props.code.clone()}</code></pre>
            <button class="copy-code-btn" style={button_style} onclick={onclick} aria-label="Copy code">
                <i class={icon}></i>
            </button>
        </div>
    }
}
