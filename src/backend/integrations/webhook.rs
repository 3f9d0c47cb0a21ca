/**
 * Webhook Notifications
 *
 * POSTs `{"event": <name>, "data": <record>}` to the configured URL.
 * Delivery is best-effort: callers spawn it and only the log sees failures.
 */
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Event name sent when a question is marked answered
pub const QUESTION_ANSWERED: &str = "question_answered";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Outcome of a delivery attempt that did not error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookDelivery {
    /// No webhook URL is configured
    Disabled,
    /// The target answered with this status
    Sent(StatusCode),
}

#[derive(Serialize)]
struct WebhookPayload<'a, T: Serialize> {
    event: &'a str,
    data: &'a T,
}

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(client: Client, url: Option<String>) -> Self {
        Self {
            client,
            url: url.filter(|u| !u.trim().is_empty()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    /// Send one notification
    pub async fn notify<T: Serialize>(&self, event: &str, data: &T) -> Result<WebhookDelivery, WebhookError> {
        let Some(url) = &self.url else {
            return Ok(WebhookDelivery::Disabled);
        };

        let response = self
            .client
            .post(url)
            .json(&WebhookPayload { event, data })
            .send()
            .await?;
        Ok(WebhookDelivery::Sent(response.status()))
    }

    /// Send a notification in the background, logging the outcome
    pub fn spawn_notify<T>(&self, event: &'static str, data: T)
    where
        T: Serialize + Send + Sync + 'static,
    {
        if !self.is_enabled() {
            return;
        }
        let notifier = self.clone();
        tokio::spawn(async move {
            match notifier.notify(event, &data).await {
                Ok(WebhookDelivery::Sent(status)) if status.is_success() => {
                    tracing::debug!(event, status = status.as_u16(), "Webhook delivered");
                }
                Ok(WebhookDelivery::Sent(status)) => {
                    tracing::warn!(event, status = status.as_u16(), "Webhook target rejected notification");
                }
                Ok(WebhookDelivery::Disabled) => {}
                Err(e) => tracing::warn!(event, "Webhook delivery failed: {}", e),
            }
        });
    }
}
