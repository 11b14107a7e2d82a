use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::form_field::FormField;
use crate::config;
use crate::contact::{self, ContactAction, ContactForm as FormState, Field, FormPhase};
use crate::dom::{BrowserPage, Page, ScrollBlock};

const INQUIRY_TYPES: [(&str, &str); 5] = [
    ("demo", "Request a demo"),
    ("enterprise", "Enterprise licensing"),
    ("deployment", "On-premise deployment"),
    ("partnership", "Partnership"),
    ("other", "Other"),
];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form = use_reducer(FormState::default);

    // Simulated delivery while submitting
    {
        let dispatcher = form.dispatcher();
        let snapshot = form.fields.clone();
        use_effect_with_deps(
            move |phase| {
                if *phase == FormPhase::Submitting {
                    wasm_bindgen_futures::spawn_local(async move {
                        match contact::deliver(&snapshot).await {
                            Ok(()) => dispatcher.dispatch(ContactAction::Delivered),
                            Err(reason) => {
                                log::error!("contact form delivery failed: {}", reason);
                                dispatcher.dispatch(ContactAction::Failed(reason));
                            }
                        }
                    });
                }
                || ()
            },
            form.phase,
        );
    }

    // Bring the success message into view and hide it again later
    {
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |phase| {
                let mut hide = None;
                if *phase == FormPhase::Submitted {
                    if let Err(e) = BrowserPage.scroll_into_view(config::FORM_MESSAGE_ID, ScrollBlock::Center) {
                        log::debug!("form message not scrolled into view: {}", e);
                    }
                    hide = Some(Timeout::new(config::SUCCESS_HIDE_MS, move || {
                        dispatcher.dispatch(ContactAction::HideStatus);
                    }));
                }
                move || drop(hide)
            },
            form.phase,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("contact form submitted");
            form.dispatch(ContactAction::Submit);
        })
    };

    let edit_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(field, input.value()));
        })
    };

    let on_inquiry = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(Field::InquiryType, select.value()));
        })
    };

    let on_message = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::Edit(Field::Message, area.value()));
        })
    };

    let on_terms = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(ContactAction::SetTerms(checkbox.checked()));
        })
    };

    let fields = &form.fields;
    let status = &form.status;
    let status_style = if status.is_visible() { "display: block;" } else { "display: none;" };
    let sending = form.phase == FormPhase::Submitting;

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit} novalidate={true}>
            <div class="form-row">
                <FormField label="First Name" for_id="firstName" required={true}>
                    <input type="text" id="firstName" name="firstName"
                        value={fields.first_name.clone()} oninput={edit_input(Field::FirstName)} />
                </FormField>
                <FormField label="Last Name" for_id="lastName" required={true}>
                    <input type="text" id="lastName" name="lastName"
                        value={fields.last_name.clone()} oninput={edit_input(Field::LastName)} />
                </FormField>
            </div>
            <div class="form-row">
                <FormField label="Work Email" for_id="email" required={true}>
                    <input type="email" id="email" name="email"
                        value={fields.email.clone()} oninput={edit_input(Field::Email)} />
                </FormField>
                <FormField label="Phone" for_id="phone">
                    <input type="tel" id="phone" name="phone"
                        value={fields.phone.clone()} oninput={edit_input(Field::Phone)} />
                </FormField>
            </div>
            <div class="form-row">
                <FormField label="Company" for_id="company" required={true}>
                    <input type="text" id="company" name="company"
                        value={fields.company.clone()} oninput={edit_input(Field::Company)} />
                </FormField>
                <FormField label="Job Title" for_id="jobTitle">
                    <input type="text" id="jobTitle" name="jobTitle"
                        value={fields.job_title.clone()} oninput={edit_input(Field::JobTitle)} />
                </FormField>
            </div>
            <FormField label="Inquiry Type" for_id="inquiryType" required={true}>
                <select id="inquiryType" name="inquiryType" onchange={on_inquiry}>
                    <option value="" selected={fields.inquiry_type.is_empty()}>{"Select an option"}</option>
                    { for INQUIRY_TYPES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={fields.inquiry_type == *value}>{*label}</option>
                    }) }
                </select>
            </FormField>
            <FormField label="Message" for_id="message" required={true}>
                <textarea id="message" name="message" rows="5"
                    value={fields.message.clone()} oninput={on_message} />
            </FormField>
            <div class="form-group checkbox-group">
                <label>
                    <input type="checkbox" name="terms" checked={fields.terms} onchange={on_terms} />
                    {" I agree to the terms of service and privacy policy"}
                </label>
            </div>
            <button type="submit" class="btn btn-primary" disabled={sending}>
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
            <div id={config::FORM_MESSAGE_ID} class={status.class()} style={status_style}>
                { for status.lines().into_iter().enumerate().map(|(i, line)| html! {
                    <>
                        if i > 0 { <br /> }
                        {line}
                    </>
                }) }
            </div>
        </form>
    }
}
