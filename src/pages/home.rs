use yew::prelude::*;

use crate::components::{
    anchor::AnchorLink,
    code_block::CodeBlock,
    contact_form::ContactForm,
    faq::Faq,
    lazy_image::LazyImage,
    reveal::Reveal,
    stats::{Stat, Stats},
    tabs::{CategoryTabs, Panel, Tab},
};

const INSTALL_SNIPPET: &str = "docker run -d --name superchat \\
  -p 8080:8080 \\
  -v superchat-data:/data \\
  superchat/enterprise:latest";

fn stat(value: &'static str, label: &'static str) -> Stat {
    Stat {
        value: AttrValue::Static(value),
        label: AttrValue::Static(label),
    }
}

fn node_card(icon: &'static str, name: &'static str, blurb: &'static str) -> Html {
    html! {
        <div class="node-card">
            <i class={classes!("fas", icon)}></i>
            <h4>{name}</h4>
            <p>{blurb}</p>
        </div>
    }
}

fn workflow_tabs() -> (Vec<Tab>, Vec<Panel>) {
    let tab = |category: &'static str, label: &'static str| Tab {
        category: AttrValue::Static(category),
        label: AttrValue::Static(label),
    };
    let panel = |category: &'static str, content: Html| Panel {
        category: AttrValue::Static(category),
        content,
    };

    let tabs = vec![
        tab("triggers", "Triggers"),
        tab("ai", "AI Nodes"),
        tab("data", "Data"),
        tab("integrations", "Integrations"),
    ];
    let panels = vec![
        panel("triggers", html! {
            <>
                { node_card("fa-clock", "Schedule", "Run a workflow on a cron expression.") }
                { node_card("fa-globe", "Webhook", "Start a workflow from any HTTP call.") }
                { node_card("fa-envelope", "Inbox", "React to incoming email.") }
            </>
        }),
        panel("ai", html! {
            <>
                { node_card("fa-comments", "Chat", "Converse with any deployed model.") }
                { node_card("fa-file-lines", "Summarize", "Condense long documents.") }
                { node_card("fa-tags", "Classify", "Route items by intent or topic.") }
            </>
        }),
        panel("data", html! {
            <>
                { node_card("fa-database", "SQL Query", "Read from your warehouse.") }
                { node_card("fa-magnifying-glass", "Vector Search", "Retrieve relevant passages.") }
            </>
        }),
        panel("integrations", html! {
            <>
                { node_card("fa-slack", "Slack", "Post results to a channel.") }
                { node_card("fa-jira", "Jira", "Open and update tickets.") }
            </>
        }),
    ];
    (tabs, panels)
}

#[function_component(Home)]
pub fn home() -> Html {
    let (tabs, panels) = workflow_tabs();

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="container">
                    <h1 class="hero-title">{"Enterprise AI that never leaves your network"}</h1>
                    <p class="hero-subtitle">
                        {"Private chat, workflows and model hosting for teams that can't send data to someone else's cloud."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#contact" class="btn btn-primary">{"Book a demo"}</AnchorLink>
                        <AnchorLink href="#models" class="btn btn-secondary">{"Explore models"}</AnchorLink>
                    </div>
                    <Stats class="hero-stats" stats={vec![
                        stat("500", "Enterprise teams"),
                        stat("40", "Supported models"),
                        stat("2500000", "Messages a day"),
                    ]} />
                </div>
            </header>

            <section id="models" class="models-section">
                <div class="container">
                    <h2 class="section-title">{"Models"}</h2>
                    <input type="search" class="model-search" placeholder="Search models (Ctrl+K)" />
                    <div class="models-grid">
                        <Reveal class="model-card">
                            <h3>{"General assistant"}</h3>
                            <p>{"Fast instruction-tuned models for everyday chat and drafting."}</p>
                        </Reveal>
                        <Reveal class="model-card">
                            <h3>{"Reasoning"}</h3>
                            <p>{"Larger models for analysis, planning and code review."}</p>
                        </Reveal>
                        <Reveal class="model-card">
                            <h3>{"Embeddings"}</h3>
                            <p>{"Retrieval models that index your documents on premise."}</p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="workflows" class="workflows-section">
                <div class="container">
                    <h2 class="section-title">{"Workflow nodes"}</h2>
                    <CategoryTabs tabs={tabs} panels={panels} />
                </div>
            </section>

            <section id="architecture" class="architecture-section">
                <div class="container">
                    <h2 class="section-title">{"Architecture"}</h2>
                    <div class="arch-grid">
                        <Reveal class="arch-card">
                            <LazyImage src="/assets/arch-gateway.svg" alt="Gateway" />
                            <h3>{"Gateway"}</h3>
                            <p>{"Single sign-on, audit logging and per-team quotas."}</p>
                        </Reveal>
                        <Reveal class="arch-card">
                            <LazyImage src="/assets/arch-runtime.svg" alt="Inference runtime" />
                            <h3>{"Inference runtime"}</h3>
                            <p>{"GPU scheduling across every model you host."}</p>
                        </Reveal>
                        <Reveal class="arch-card">
                            <LazyImage src="/assets/arch-store.svg" alt="Knowledge store" />
                            <h3>{"Knowledge store"}</h3>
                            <p>{"Encrypted document and vector storage."}</p>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="deployment" class="deployment-section">
                <div class="container">
                    <h2 class="section-title">{"Deploy anywhere"}</h2>
                    <div class="deploy-grid">
                        <Reveal class="deploy-card">
                            <h3>{"On premise"}</h3>
                            <p>{"Bare metal or VMs inside your data centre."}</p>
                        </Reveal>
                        <Reveal class="deploy-card">
                            <h3>{"Private cloud"}</h3>
                            <p>{"Your own AWS, Azure or GCP account."}</p>
                        </Reveal>
                        <Reveal class="deploy-card">
                            <h3>{"Air-gapped"}</h3>
                            <p>{"Offline installs with signed update bundles."}</p>
                        </Reveal>
                    </div>
                    <CodeBlock code={INSTALL_SNIPPET} />
                    <div class="stack-grid">
                        <Reveal class="stack-card"><h4>{"Kubernetes"}</h4></Reveal>
                        <Reveal class="stack-card"><h4>{"PostgreSQL"}</h4></Reveal>
                        <Reveal class="stack-card"><h4>{"NVIDIA GPUs"}</h4></Reveal>
                    </div>
                </div>
            </section>

            <section class="stats-section">
                <div class="container">
                    <Stats class="stats-grid" stats={vec![
                        stat("99", "Percent uptime"),
                        stat("120", "Countries"),
                        stat("50000", "Daily active users"),
                        stat("1000000", "Documents indexed"),
                    ]} />
                </div>
            </section>

            <Faq />

            <section id="contact" class="contact-section">
                <div class="container">
                    <h2 class="section-title">{"Talk to sales"}</h2>
                    <p class="section-subtitle">{"Tell us about your team and we'll set up a private demo."}</p>
                    <ContactForm />
                </div>
            </section>
        </div>
    }
}
