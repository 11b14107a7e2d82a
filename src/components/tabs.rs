use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Tab {
    pub category: AttrValue,
    pub label: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub category: AttrValue,
    pub content: Html,
}

/// The single active category of a tab group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    pub active: Option<AttrValue>,
}

impl TabSelection {
    pub fn is_active(&self, category: &str) -> bool {
        self.active.as_deref() == Some(category)
    }
}

pub struct Select(pub AttrValue);

impl Reducible for TabSelection {
    type Action = Select;

    fn reduce(self: Rc<Self>, Select(category): Select) -> Rc<Self> {
        if self.is_active(&category) {
            return self;
        }
        Rc::new(TabSelection {
            active: Some(category),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub tabs: Vec<Tab>,
    pub panels: Vec<Panel>,
}

/// Tab buttons and the grids they switch between. A tab whose category has
/// no grid leaves every grid hidden.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    let selection = {
        let first = props.tabs.first().map(|tab| tab.category.clone());
        use_reducer(move || TabSelection { active: first })
    };

    let buttons = props.tabs.iter().map(|tab| {
        let onclick = {
            let selection = selection.dispatcher();
            let category = tab.category.clone();
            Callback::from(move |_: MouseEvent| selection.dispatch(Select(category.clone())))
        };
        let active = selection.is_active(&tab.category).then_some("active");
        html! {
            <button class={classes!("tab-btn", active)} data-category={tab.category.clone()} onclick={onclick}>
                {tab.label.clone()}
            </button>
        }
    });

    let grids = props.panels.iter().map(|panel| {
        let active = selection.is_active(&panel.category).then_some("active");
        html! {
            <div class={classes!("nodes-grid", active)} data-category-content={panel.category.clone()}>
                {panel.content.clone()}
            </div>
        }
    });

    html! {
        <>
            <div id="categoryTabs" class="category-tabs">
                { for buttons }
            </div>
            { for grids }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: [&str; 4] = ["triggers", "llm", "data", "integrations"];
    const PANELS: [&str; 3] = ["triggers", "llm", "data"];

    fn select(state: TabSelection, category: &'static str) -> TabSelection {
        (*Rc::new(state).reduce(Select(AttrValue::Static(category)))).clone()
    }

    fn initial() -> TabSelection {
        TabSelection {
            active: Some(AttrValue::Static(TABS[0])),
        }
    }

    #[test]
    fn selection_is_exclusive_for_every_key() {
        for key in PANELS {
            let state = select(initial(), key);
            let active_tabs: Vec<_> = TABS.iter().filter(|t| state.is_active(t)).collect();
            let visible: Vec<_> = PANELS.iter().filter(|p| state.is_active(p)).collect();
            assert_eq!(active_tabs, vec![&key]);
            assert_eq!(visible, vec![&key]);
        }
    }

    #[test]
    fn switching_back_and_forth() {
        let state = select(initial(), "data");
        let state = select(state, "llm");
        assert!(state.is_active("llm"));
        assert!(!state.is_active("data"));
        assert!(!state.is_active("triggers"));
    }

    #[test]
    fn tab_without_panel_hides_every_panel() {
        let state = select(initial(), "integrations");
        assert!(state.is_active("integrations"));
        assert!(PANELS.iter().all(|p| !state.is_active(p)));
    }

    #[test]
    fn empty_group_has_nothing_active() {
        let state = TabSelection { active: None };
        assert!(TABS.iter().all(|t| !state.is_active(t)));
    }
}
