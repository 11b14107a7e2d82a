use yew::prelude::*;

use crate::dom::ObserveOptions;
use crate::hooks::use_seen_once;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Holds the real source in `data-src` until the image scrolls into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_seen_once(node.clone(), ObserveOptions::default(), true);

    if loaded {
        html! {
            <img ref={node} class={props.class.clone()} src={props.src.clone()} alt={props.alt.clone()} />
        }
    } else {
        html! {
            <img ref={node} class={props.class.clone()} data-src={props.src.clone()} alt={props.alt.clone()} />
        }
    }
}
