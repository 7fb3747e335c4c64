// src/forms.rs
//! Client-side contracts for the subscription / unsubscribe shell: an
//! immutable form-value record updated by a pure reducer, and one-shot POST
//! clients for the submission endpoints. Validation, persistence, and mail
//! delivery live on the other side of those endpoints.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AppConfig;

/// Generic message shown when the request itself fails (network, timeout).
/// The server's own `{ message }` is carried through otherwise.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionForm {
    pub name: String,
    pub email: String,
    pub feedback: String,
}

/// One field edit or a wholesale reset (the shell clears the form after a
/// successful submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Name(String),
    Email(String),
    Feedback(String),
    Clear,
}

/// Pure reducer: current values + one event → next values. No shared state.
pub fn apply(form: &SubscriptionForm, event: FormEvent) -> SubscriptionForm {
    let mut next = form.clone();
    match event {
        FormEvent::Name(v) => next.name = v,
        FormEvent::Email(v) => next.email = v,
        FormEvent::Feedback(v) => next.feedback = v,
        FormEvent::Clear => next = SubscriptionForm::default(),
    }
    next
}

/// Result of a submit/unsubscribe attempt, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub message: String,
}

#[derive(Deserialize)]
struct ServerMessage {
    #[serde(default)]
    message: String,
}

#[derive(Serialize)]
struct UnsubscribeReq<'a> {
    email: &'a str,
}

/// POST client for `/api/submit` and `/api/unsubscribe`. Fire-and-report:
/// no retry, no status taxonomy beyond success/failure.
pub struct FormsClient {
    client: Client,
    base_url: String,
}

impl FormsClient {
    pub fn new(cfg: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()
            .context("building forms client")?;
        Ok(Self {
            client,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn subscribe(&self, form: &SubscriptionForm) -> SubmitOutcome {
        self.post_json("/api/submit", form).await
    }

    pub async fn unsubscribe(&self, email: &str) -> SubmitOutcome {
        self.post_json("/api/unsubscribe", &UnsubscribeReq { email })
            .await
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> SubmitOutcome {
        let url = format!("{}{}", self.base_url, path);
        let resp = match self.client.post(&url).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = ?e, url = %url, "form submission transport failure");
                return SubmitOutcome {
                    ok: false,
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                };
            }
        };

        let ok = resp.status().is_success();
        let message = match resp.json::<ServerMessage>().await {
            Ok(m) if !m.message.is_empty() => m.message,
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        };
        SubmitOutcome { ok, message }
    }
}
