use yew::prelude::*;

use crate::dom::{BrowserPage, Page, ScrollBlock};

/// The element id an in-page link points at. A bare `#` is a placeholder,
/// not a target.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Handles a click on `href`. Returns whether the default jump should be
/// suppressed.
pub fn follow_anchor(page: &impl Page, href: &str) -> bool {
    let Some(id) = fragment_target(href) else {
        return false;
    };
    if let Err(e) = page.scroll_into_view(id, ScrollBlock::Start) {
        log::debug!("anchor {} has no target: {}", href, e);
    }
    true
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        Callback::from(move |e: MouseEvent| {
            if follow_anchor(&BrowserPage, &href) {
                e.prevent_default();
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}
