use yew::prelude::*;

use crate::components::{careers_modal::CareersModal, lazy_image::LazyImage, reveal::Reveal};

const TEAM: [(&str, &str, &str); 3] = [
    ("Maria Lindqvist", "CEO", "/assets/team-maria.jpg"),
    ("Tomás Herrera", "CTO", "/assets/team-tomas.jpg"),
    ("Aiko Tanaka", "Head of Research", "/assets/team-aiko.jpg"),
];

const VALUES: [(&str, &str); 3] = [
    ("Privacy first", "Your data stays on hardware you control."),
    ("Open models", "No lock-in to a single model vendor."),
    ("Boring operations", "Software that is easy to run at 3 a.m."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="about-hero">
                <div class="container">
                    <h1>{"About SuperChat"}</h1>
                    <p>{"We build AI tooling for organisations that take data ownership seriously."}</p>
                </div>
            </section>

            <section class="team-section">
                <div class="container">
                    <h2 class="section-title">{"Team"}</h2>
                    <div class="team-grid">
                        { for TEAM.iter().map(|(name, role, photo)| html! {
                            <Reveal class="team-member">
                                <LazyImage src={*photo} alt={*name} class="team-photo" />
                                <h3>{*name}</h3>
                                <p>{*role}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="values-section">
                <div class="container">
                    <h2 class="section-title">{"What we value"}</h2>
                    <div class="values-grid">
                        { for VALUES.iter().map(|(title, text)| html! {
                            <Reveal class="value-card">
                                <h3>{*title}</h3>
                                <p>{*text}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="careers-section">
                <div class="container">
                    <h2 class="section-title">{"Careers"}</h2>
                    <p>{"We're a small, remote-first team. Come build with us."}</p>
                    <CareersModal />
                </div>
            </section>
        </div>
    }
}
