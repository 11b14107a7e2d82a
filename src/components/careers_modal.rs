use yew::prelude::*;

use crate::dom;

const OPENINGS: [(&str, &str); 3] = [
    ("Senior Rust Engineer", "Inference runtime and deployment tooling. Remote, EU time zones."),
    ("ML Solutions Architect", "Help enterprise customers design private AI workflows."),
    ("Developer Advocate", "Write guides, build demos, and talk to the community."),
];

#[function_component(CareersModal)]
pub fn careers_modal() -> Html {
    let active = use_state_eq(|| false);
    let backdrop = use_node_ref();

    let open_modal = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(true))
    };
    let close_modal = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(false))
    };
    let on_backdrop = {
        let active = active.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::is_backdrop_click(&e, &backdrop) {
                active.set(false);
            }
        })
    };

    html! {
        <>
            <button id="openCareersModal" class="btn btn-primary" onclick={open_modal}>
                {"View Open Positions"}
            </button>
            <div id="careersModal" ref={backdrop} class={classes!("careers-modal", active.then_some("active"))} onclick={on_backdrop}>
                <div class="careers-modal-content">
                    <button class="careers-modal-close" aria-label="Close" onclick={close_modal}>{"×"}</button>
                    <h2>{"Join the team"}</h2>
                    <ul class="careers-list">
                        { for OPENINGS.iter().map(|(title, summary)| html! {
                            <li class="careers-item">
                                <h3>{*title}</h3>
                                <p>{*summary}</p>
                            </li>
                        }) }
                    </ul>
                    <p class="careers-note">
                        {"Don't see your role? Write to "}
                        <a href="mailto:careers@superchat.ai">{"careers@superchat.ai"}</a>
                    </p>
                </div>
            </div>
        </>
    }
}
