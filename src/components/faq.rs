use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub children: Children,
}

/// Answers start expanded; a collapsed question is dimmed.
#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| true);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let question_style = if *is_open { "cursor: pointer; opacity: 1;" } else { "cursor: pointer; opacity: 0.7;" };
    let answer_style = if *is_open { "display: block;" } else { "display: none;" };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" style={question_style} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer" style={answer_style}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2 class="section-title">{"Frequently Asked Questions"}</h2>

                <FaqItem question="Where does my data go?">
                    <p>
                        {"Nowhere you don't control. SuperChat runs inside your own infrastructure, so prompts, documents and chat history never leave your network."}
                    </p>
                </FaqItem>

                <FaqItem question="Which models can I run?">
                    <p>
                        {"Any open-weight model that fits your hardware, from compact 7B assistants to large reasoning models. You can switch models per workflow without touching your integrations."}
                    </p>
                </FaqItem>

                <FaqItem question="Do you support air-gapped deployments?">
                    <p>
                        {"Yes. The full stack ships as container images and installs without outbound internet access. Updates are delivered as signed bundles."}
                    </p>
                </FaqItem>

                <FaqItem question="How long does a rollout take?">
                    <p>
                        {"Most teams go from kickoff to first production workflow in under two weeks. Our engineers stay with you through the pilot."}
                    </p>
                </FaqItem>
            </div>
        </section>
    }
}
