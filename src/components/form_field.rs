use yew::prelude::*;

pub fn lift_style(focused: bool) -> &'static str {
    if focused {
        "transform: translateY(-2px); transition: transform 0.2s ease;"
    } else {
        "transform: translateY(0); transition: transform 0.2s ease;"
    }
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    pub for_id: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper around a single input that lifts slightly while the input has focus.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let focused = use_state_eq(|| false);

    let onfocusin = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onfocusout = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    html! {
        <div class="form-group" style={lift_style(*focused)} onfocusin={onfocusin} onfocusout={onfocusout}>
            <label for={props.for_id.clone()}>
                {props.label.clone()}
                if props.required {
                    <span class="required">{" *"}</span>
                }
            </label>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_lifts_and_blur_restores() {
        assert!(lift_style(true).contains("translateY(-2px)"));
        assert!(lift_style(false).contains("translateY(0)"));
    }
}
