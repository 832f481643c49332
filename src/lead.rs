use std::rc::Rc;

use log::info;
use serde::Deserialize;
use yew::Reducible;

pub mod relay;

pub use relay::{send_lead, RelayError};

pub const DEFAULT_REJECTION_MESSAGE: &str = "Что-то пошло не так";
pub const NETWORK_ERROR_MESSAGE: &str = "Ошибка сети. Попробуйте еще раз.";

/// Lifecycle of one contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed { message: String },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message } => Some(message),
            _ => None,
        }
    }

    fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed { .. })
    }
}

/// What the relay answers with. Extra fields are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    fn into_state(self) -> SubmissionState {
        if self.success {
            return SubmissionState::Succeeded;
        }
        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
        SubmissionState::Failed { message }
    }
}

/// Terminal state for a finished request.
pub fn resolve(outcome: Result<RelayResponse, RelayError>) -> SubmissionState {
    match outcome {
        Ok(response) => response.into_state(),
        Err(e) => {
            log::warn!("Lead relay request failed: {}", e);
            SubmissionState::Failed {
                message: NETWORK_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

/// One submission attempt as it goes over the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadPayload {
    pub name: String,
    pub phone: String,
    pub message: Option<String>,
    pub access_key: String,
}

impl LeadPayload {
    /// Multipart fields in send order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("name", self.name.as_str()), ("phone", self.phone.as_str())];
        if let Some(message) = &self.message {
            fields.push(("message", message.as_str()));
        }
        fields.push(("access_key", self.access_key.as_str()));
        fields
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Message,
}

/// Live input values of a contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub name: String,
    pub phone: String,
    pub message: String,
}

impl LeadFields {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    /// The compact form has no message box, so nothing is sent for it.
    fn to_payload(&self, access_key: &str, with_message: bool) -> LeadPayload {
        LeadPayload {
            name: self.name.clone(),
            phone: self.phone.clone(),
            message: with_message.then(|| self.message.clone()),
            access_key: access_key.to_string(),
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    /// Input values were validated by the browser before this is sent.
    Submit { access_key: String, with_message: bool },
    Completed(Result<RelayResponse, RelayError>),
    Reset,
}

/// Everything a contact form instance owns.
///
/// `attempt` only grows on an accepted `Submit`, so a component can send
/// exactly one request per attempt by keying its effect on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormModel {
    pub fields: LeadFields,
    pub state: SubmissionState,
    pub attempt: u32,
    pub in_flight: Option<LeadPayload>,
}

impl ContactFormModel {
    fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.fields.set(field, value),
            FormAction::Submit { access_key, with_message } => {
                if !self.state.accepts_submit() {
                    info!("Ignoring submit while form is {:?}", self.state);
                    return;
                }
                self.in_flight = Some(self.fields.to_payload(&access_key, with_message));
                self.attempt += 1;
                self.state = SubmissionState::Submitting;
            }
            FormAction::Completed(outcome) => {
                if !self.state.is_submitting() {
                    return;
                }
                self.in_flight = None;
                self.state = resolve(outcome);
                if self.state == SubmissionState::Succeeded {
                    self.fields = LeadFields::default();
                }
                info!("Lead submission finished: {:?}", self.state);
            }
            FormAction::Reset => {
                if matches!(self.state, SubmissionState::Succeeded | SubmissionState::Failed { .. }) {
                    self.state = SubmissionState::Idle;
                }
            }
        }
    }
}

impl Reducible for ContactFormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Rc<ContactFormModel> {
        let model = Rc::new(ContactFormModel::default());
        let model = model.reduce(FormAction::Edit(Field::Name, "Анна".into()));
        let model = model.reduce(FormAction::Edit(Field::Phone, "+7 999 000-00-00".into()));
        model.reduce(FormAction::Edit(Field::Message, "Хочу щенка".into()))
    }

    fn submit(model: Rc<ContactFormModel>) -> Rc<ContactFormModel> {
        model.reduce(FormAction::Submit {
            access_key: "key".into(),
            with_message: true,
        })
    }

    fn relay_says(body: &str) -> Result<RelayResponse, RelayError> {
        serde_json::from_str(body).map_err(|e| RelayError::Decode(e.to_string()))
    }

    #[test]
    fn submit_moves_to_submitting_with_payload() {
        let model = submit(filled());
        assert_eq!(model.state, SubmissionState::Submitting);
        assert_eq!(model.attempt, 1);
        let payload = model.in_flight.as_ref().unwrap();
        assert_eq!(payload.name, "Анна");
        assert_eq!(payload.access_key, "key");
        assert_eq!(payload.message.as_deref(), Some("Хочу щенка"));
    }

    #[test]
    fn success_clears_fields() {
        let model = submit(filled()).reduce(FormAction::Completed(relay_says(r#"{"success": true}"#)));
        assert_eq!(model.state, SubmissionState::Succeeded);
        assert_eq!(model.fields, LeadFields::default());
        assert!(model.in_flight.is_none());
    }

    #[test]
    fn rejection_keeps_relay_message_verbatim() {
        let model = submit(filled()).reduce(FormAction::Completed(relay_says(
            r#"{"success": false, "message": "Invalid access key"}"#,
        )));
        assert_eq!(model.state.error_message(), Some("Invalid access key"));
        assert_eq!(model.fields.name, "Анна");
    }

    #[test]
    fn rejection_without_message_uses_default() {
        for body in [r#"{"success": false}"#, r#"{"success": false, "message": ""}"#] {
            let model = submit(filled()).reduce(FormAction::Completed(relay_says(body)));
            assert_eq!(model.state.error_message(), Some(DEFAULT_REJECTION_MESSAGE));
        }
    }

    #[test]
    fn transport_failures_use_network_message() {
        let errors = [
            RelayError::FormBody,
            RelayError::Transport("TypeError: Failed to fetch".into()),
            relay_says("<html>502</html>").unwrap_err(),
        ];
        for error in errors {
            let model = submit(filled()).reduce(FormAction::Completed(Err(error)));
            assert_eq!(model.state.error_message(), Some(NETWORK_ERROR_MESSAGE));
        }
    }

    #[test]
    fn no_second_submit_while_in_flight() {
        let model = submit(filled());
        let again = submit(model.clone());
        assert!(Rc::ptr_eq(&model, &again));
        assert_eq!(again.attempt, 1);
    }

    #[test]
    fn retry_from_failed_starts_one_new_attempt() {
        let failed = submit(filled()).reduce(FormAction::Completed(Err(RelayError::FormBody)));
        let retry = submit(failed);
        assert_eq!(retry.state, SubmissionState::Submitting);
        assert_eq!(retry.attempt, 2);
        assert_eq!(submit(retry).attempt, 2);
    }

    #[test]
    fn succeeded_needs_reset_before_next_submit() {
        let done = submit(filled()).reduce(FormAction::Completed(relay_says(r#"{"success":true}"#)));
        assert_eq!(submit(done.clone()).state, SubmissionState::Succeeded);

        let idle = done.reduce(FormAction::Reset);
        assert_eq!(idle.state, SubmissionState::Idle);
        assert_eq!(submit(idle).state, SubmissionState::Submitting);
    }

    #[test]
    fn reset_clears_error() {
        let failed = submit(filled()).reduce(FormAction::Completed(Err(RelayError::FormBody)));
        let idle = failed.reduce(FormAction::Reset);
        assert_eq!(idle.state, SubmissionState::Idle);
        assert_eq!(idle.state.error_message(), None);
    }

    #[test]
    fn reset_is_ignored_while_submitting() {
        let model = submit(filled());
        assert_eq!(model.reduce(FormAction::Reset).state, SubmissionState::Submitting);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let model = filled().reduce(FormAction::Completed(relay_says(r#"{"success":true}"#)));
        assert_eq!(model.state, SubmissionState::Idle);
        assert_eq!(model.fields.name, "Анна");
    }

    #[test]
    fn submitting_always_ends_in_exactly_one_terminal_state() {
        let outcomes = [
            relay_says(r#"{"success":true}"#),
            relay_says(r#"{"success":false,"message":"X"}"#),
            Err(RelayError::Transport("offline".into())),
        ];
        for outcome in outcomes {
            let model = submit(filled()).reduce(FormAction::Completed(outcome));
            assert!(matches!(
                model.state,
                SubmissionState::Succeeded | SubmissionState::Failed { .. }
            ));
            assert!(!model.state.is_submitting());
        }
    }

    #[test]
    fn compact_form_sends_no_message() {
        let model = filled().reduce(FormAction::Submit {
            access_key: "key".into(),
            with_message: false,
        });
        let payload = model.in_flight.as_ref().unwrap();
        let names: Vec<_> = payload.fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["name", "phone", "access_key"]);
    }

    #[test]
    fn payload_field_order() {
        let payload = LeadPayload {
            name: "Дмитрий".into(),
            phone: "123".into(),
            message: Some(String::new()),
            access_key: "k".into(),
        };
        assert_eq!(
            payload.fields(),
            vec![("name", "Дмитрий"), ("phone", "123"), ("message", ""), ("access_key", "k")]
        );
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let response = relay_says(r#"{"success":true,"data":{"id":1},"message":"Email sent"}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some("Email sent"));
    }
}
