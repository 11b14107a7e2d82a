use std::cell::Cell;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::dom::ObserveOptions;
use crate::hooks::use_seen_once;
use crate::stats::{extract_target, CounterAnimation};

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    /// Authored text, e.g. "500+"; the first integer in it is the count target.
    pub value: AttrValue,
    pub label: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct StatsProps {
    /// "hero-stats" or "stats-grid"
    pub class: Classes,
    pub stats: Vec<Stat>,
}

/// A group of statistics that count up together the first time the group is
/// half visible.
#[function_component(Stats)]
pub fn stats(props: &StatsProps) -> Html {
    let node = use_node_ref();
    let started = use_seen_once(
        node.clone(),
        ObserveOptions {
            threshold: config::STATS_THRESHOLD,
            root_margin: None,
        },
        true,
    );

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.stats.iter().map(|stat| html! {
                <div class="stat-item">
                    <StatNumber text={stat.value.clone()} started={started} />
                    <div class="stat-label">{stat.label.clone()}</div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatNumberProps {
    text: AttrValue,
    started: bool,
}

#[function_component(StatNumber)]
fn stat_number(props: &StatNumberProps) -> Html {
    let shown = use_state(|| props.text.to_string());
    let finished = use_state_eq(|| false);

    {
        let deps = (props.started, *finished);
        let shown = shown.clone();
        let finished = finished.clone();
        let target = extract_target(&props.text);
        use_effect_with_deps(
            move |(started, done)| {
                let interval = match target {
                    Some(target) if *started && !*done => {
                        let counter = CounterAnimation::new(target);
                        let steps = Cell::new(0u32);
                        Some(Interval::new(config::COUNTER_STEP_MS, move || {
                            steps.set(steps.get() + 1);
                            let frame = counter.frame(steps.get());
                            shown.set(frame.text);
                            if frame.finished {
                                finished.set(true);
                            }
                        }))
                    }
                    _ => None,
                };

                // Dropping the interval stops it, on completion or unmount
                move || drop(interval)
            },
            deps,
        );
    }

    html! {
        <div class="stat-number">{(*shown).clone()}</div>
    }
}
