//! Outbound HTTP integrations
//!
//! Both clients share one `reqwest::Client` built in `create_app`.

/// Webhook notifications
pub mod webhook;

/// Answer suggestions
pub mod suggestion;

pub use suggestion::{SuggestionClient, SuggestionError};
pub use webhook::{WebhookDelivery, WebhookError, WebhookNotifier, QUESTION_ANSWERED};
