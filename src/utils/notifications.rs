//! Success notifications. Pages talk to an injected [`Notifier`]; the app
//! shell renders the resulting toast stack and dismisses entries after a few
//! seconds.

use leptos::logging::log;
use leptos::*;
use serde_json::Value;
use std::rc::Rc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone)]
pub struct Notifier {
    sink: Rc<dyn Fn(String)>,
}

impl Notifier {
    pub fn new(sink: impl Fn(String) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        log!("[notify] {message}");
        (self.sink)(message);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
}

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

/// Toast stack plus the notifier that feeds it.
pub fn use_toasts() -> (RwSignal<Vec<Toast>>, Notifier) {
    let toasts = create_rw_signal(Vec::<Toast>::new());
    let notifier = Notifier::new(move |message| {
        let id = Uuid::new_v4();
        toasts.update(|stack| stack.push(Toast { id, message }));
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            toasts.try_update(|stack| stack.retain(|toast| toast.id != id));
        });
    });
    (toasts, notifier)
}

/// Message shown after a successful delete: the backend's `message` field
/// when it sends one, otherwise the raw body.
pub fn response_message(response: &Value) -> String {
    response
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| response.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_the_message_field() {
        let response = json!({"message": "UCSBOrganization with id KFC deleted"});
        assert_eq!(
            response_message(&response),
            "UCSBOrganization with id KFC deleted"
        );
    }

    #[test]
    fn falls_back_to_the_raw_body() {
        let response = json!({"deleted": true});
        assert_eq!(response_message(&response), r#"{"deleted":true}"#);
    }
}
