use std::rc::Rc;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use yew::functional::Reducible;

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We'll get back to you within 24 hours.";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub job_title: String,
    pub inquiry_type: String,
    pub message: String,
    pub terms: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Company,
    Phone,
    JobTitle,
    InquiryType,
    Message,
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_pattern() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::error!("email pattern rejected: {}", e);
                None
            }
        })
        .as_ref()
}

/// An address passes only when the pattern is available and matches.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().map_or(false, |pattern| pattern.is_match(email))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ContactSubmission {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::JobTitle => &mut self.job_title,
            Field::InquiryType => &mut self.inquiry_type,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Runs every check and returns all failures in form order.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let checks = [
            (is_blank(&self.first_name), "First name is required"),
            (is_blank(&self.last_name), "Last name is required"),
            (!is_valid_email(&self.email), "Valid email address is required"),
            (is_blank(&self.company), "Company name is required"),
            (self.inquiry_type.is_empty(), "Please select an inquiry type"),
            (is_blank(&self.message), "Message is required"),
            (!self.terms, "You must agree to the terms and privacy policy"),
        ];

        let errors: Vec<String> = checks
            .iter()
            .filter(|(failed, _)| *failed)
            .map(|(_, message)| message.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// What the `#formMessage` region shows.
#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Hidden,
    Info(String),
    Success(String),
    Error(Vec<String>),
}

impl FormStatus {
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Hidden => "form-message",
            FormStatus::Info(_) => "form-message info",
            FormStatus::Success(_) => "form-message success",
            FormStatus::Error(_) => "form-message error",
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            FormStatus::Hidden => Vec::new(),
            FormStatus::Info(text) | FormStatus::Success(text) => vec![text.clone()],
            FormStatus::Error(errors) => errors.clone(),
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, FormStatus::Hidden)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Invalid,
    Submitting,
    Submitted,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub fields: ContactSubmission,
    pub phase: FormPhase,
    pub status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            fields: ContactSubmission::default(),
            phase: FormPhase::Idle,
            status: FormStatus::Hidden,
        }
    }
}

pub enum ContactAction {
    Edit(Field, String),
    SetTerms(bool),
    Submit,
    Delivered,
    Failed(String),
    /// Success auto-hide timer elapsed.
    HideStatus,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.fields.set(field, value),
            ContactAction::SetTerms(accepted) => next.fields.terms = accepted,
            ContactAction::Submit => {
                if self.phase == FormPhase::Submitting {
                    return self;
                }
                match self.fields.validate() {
                    Ok(()) => {
                        next.phase = FormPhase::Submitting;
                        next.status = FormStatus::Info(SENDING_MESSAGE.to_string());
                    }
                    Err(errors) => {
                        next.phase = FormPhase::Invalid;
                        next.status = FormStatus::Error(errors);
                    }
                }
            }
            ContactAction::Delivered => {
                if self.phase != FormPhase::Submitting {
                    return self;
                }
                next.phase = FormPhase::Submitted;
                next.status = FormStatus::Success(SUCCESS_MESSAGE.to_string());
                next.fields = ContactSubmission::default();
            }
            ContactAction::Failed(reason) => {
                if self.phase != FormPhase::Submitting {
                    return self;
                }
                next.phase = FormPhase::Failed;
                next.status = FormStatus::Error(vec![format!(
                    "We couldn't send your message: {}",
                    reason
                )]);
            }
            ContactAction::HideStatus => {
                if !matches!(self.status, FormStatus::Success(_)) {
                    return self;
                }
                next.status = FormStatus::Hidden;
            }
        }
        Rc::new(next)
    }
}

/// Stands in for the network call. Always succeeds after the configured delay.
pub async fn deliver(submission: &ContactSubmission) -> Result<(), String> {
    match serde_json::to_string(submission) {
        Ok(payload) => log::info!("contact form payload: {}", payload),
        Err(e) => log::warn!("contact form payload not serializable: {}", e),
    }
    gloo_timers::future::TimeoutFuture::new(crate::config::SUBMIT_DELAY_MS).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ContactSubmission {
        ContactSubmission {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@analytical.engine".to_string(),
            company: "Analytical Engines Ltd".to_string(),
            phone: String::new(),
            job_title: String::new(),
            inquiry_type: "enterprise".to_string(),
            message: "We'd like a private deployment.".to_string(),
            terms: true,
        }
    }

    fn reduce(state: ContactForm, action: ContactAction) -> ContactForm {
        (*Rc::new(state).reduce(action)).clone()
    }

    const ALL_ERRORS: [&str; 7] = [
        "First name is required",
        "Last name is required",
        "Valid email address is required",
        "Company name is required",
        "Please select an inquiry type",
        "Message is required",
        "You must agree to the terms and privacy policy",
    ];

    fn blank(submission: &mut ContactSubmission, index: usize) {
        match index {
            0 => submission.first_name = "   ".to_string(),
            1 => submission.last_name.clear(),
            2 => submission.email.clear(),
            3 => submission.company = "\t".to_string(),
            4 => submission.inquiry_type.clear(),
            5 => submission.message.clear(),
            _ => submission.terms = false,
        }
    }

    #[test]
    fn email_pattern_is_available() {
        assert!(email_pattern().is_some());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn complete_submission_is_valid() {
        assert_eq!(complete().validate(), Ok(()));
    }

    #[test]
    fn every_subset_of_blank_fields_reports_exactly_that_subset() {
        for mask in 0u32..(1 << ALL_ERRORS.len()) {
            let mut submission = complete();
            let mut expected = Vec::new();
            for (index, message) in ALL_ERRORS.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    blank(&mut submission, index);
                    expected.push(message.to_string());
                }
            }

            let result = submission.validate();
            if expected.is_empty() {
                assert_eq!(result, Ok(()), "mask {:#b}", mask);
            } else {
                assert_eq!(result, Err(expected), "mask {:#b}", mask);
            }
        }
    }

    #[test]
    fn optional_fields_are_not_validated() {
        let mut submission = complete();
        submission.phone = "   ".to_string();
        submission.job_title.clear();
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn invalid_submit_shows_errors_and_keeps_fields() {
        let mut state = ContactForm::default();
        state.fields = complete();
        state.fields.email = "not-an-email".to_string();

        let state = reduce(state, ContactAction::Submit);
        assert_eq!(state.phase, FormPhase::Invalid);
        assert_eq!(
            state.status,
            FormStatus::Error(vec!["Valid email address is required".to_string()])
        );
        assert_eq!(state.status.class(), "form-message error");
        assert_eq!(state.fields.first_name, "Ada");

        // Error status does not auto-hide
        let state = reduce(state, ContactAction::HideStatus);
        assert!(state.status.is_visible());
    }

    #[test]
    fn valid_submit_goes_info_then_success_and_resets() {
        let mut state = ContactForm::default();
        for (field, value) in [
            (Field::FirstName, "Ada"),
            (Field::LastName, "Lovelace"),
            (Field::Email, "a@b.co"),
            (Field::Company, "AE"),
            (Field::InquiryType, "demo"),
            (Field::Message, "Hello"),
        ] {
            state = reduce(state, ContactAction::Edit(field, value.to_string()));
        }
        state = reduce(state, ContactAction::SetTerms(true));

        let state = reduce(state, ContactAction::Submit);
        assert_eq!(state.phase, FormPhase::Submitting);
        assert_eq!(state.status, FormStatus::Info(SENDING_MESSAGE.to_string()));
        assert_eq!(state.status.class(), "form-message info");

        let state = reduce(state, ContactAction::Delivered);
        assert_eq!(state.phase, FormPhase::Submitted);
        assert_eq!(state.status, FormStatus::Success(SUCCESS_MESSAGE.to_string()));
        assert_eq!(state.fields, ContactSubmission::default());

        let state = reduce(state, ContactAction::HideStatus);
        assert_eq!(state.status, FormStatus::Hidden);
    }

    #[test]
    fn resubmit_while_sending_is_ignored() {
        let mut state = ContactForm::default();
        state.fields = complete();
        let sending = reduce(state, ContactAction::Submit);
        let again = reduce(sending.clone(), ContactAction::Submit);
        assert_eq!(again, sending);
    }

    #[test]
    fn delivery_failure_is_distinct_from_validation_failure() {
        let mut state = ContactForm::default();
        state.fields = complete();
        let state = reduce(state, ContactAction::Submit);
        let state = reduce(state, ContactAction::Failed("timeout".to_string()));

        assert_eq!(state.phase, FormPhase::Failed);
        assert_eq!(
            state.status.lines(),
            vec!["We couldn't send your message: timeout".to_string()]
        );
        // Fields survive so the user can retry
        assert_eq!(state.fields, complete());
    }

    #[test]
    fn late_delivery_outside_submitting_is_ignored() {
        let state = ContactForm::default();
        let after = reduce(state.clone(), ContactAction::Delivered);
        assert_eq!(after, state);
    }

    #[test]
    fn snapshot_serializes_with_form_field_names() {
        let json = serde_json::to_value(complete()).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["inquiryType"], "enterprise");
        assert_eq!(json["terms"], true);
    }
}
