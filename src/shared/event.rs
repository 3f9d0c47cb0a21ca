/**
 * Real-time Event System
 *
 * This module defines the events pushed to dashboard clients over the
 * `/ws` connection. Every event travels as a JSON object of the form
 * `{"type": <string>, "data": <value>}`.
 */
use serde::{Deserialize, Serialize};

/// Type of real-time event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A question was created
    NewQuestion,
    /// A question's status changed
    QuestionUpdated,
    /// An answer was posted
    NewAnswer,
    /// Keepalive reply to an inbound text frame
    Pong,
}

impl EventType {
    /// Wire name of the event type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewQuestion => "new_question",
            Self::QuestionUpdated => "question_updated",
            Self::NewAnswer => "new_answer",
            Self::Pong => "pong",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Real-time event that can be broadcast to all connections
///
/// Events carry no ordering field. Once built they are only read, so
/// the broadcaster serializes each one exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Type of event
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Event payload (the persisted row plus `username`, or echoed text)
    pub data: serde_json::Value,
}

impl Event {
    /// Create a new real-time event
    pub fn new(event_type: EventType, data: serde_json::Value) -> Self {
        Self { event_type, data }
    }

    /// Create an event from any serializable record
    pub fn from_record<T: Serialize>(
        event_type: EventType,
        record: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(event_type, serde_json::to_value(record)?))
    }

    /// Create a `new_question` event
    pub fn new_question(data: serde_json::Value) -> Self {
        Self::new(EventType::NewQuestion, data)
    }

    /// Create a `question_updated` event
    pub fn question_updated(data: serde_json::Value) -> Self {
        Self::new(EventType::QuestionUpdated, data)
    }

    /// Create a `new_answer` event
    pub fn new_answer(data: serde_json::Value) -> Self {
        Self::new(EventType::NewAnswer, data)
    }

    /// Create the keepalive reply for an inbound text payload
    pub fn pong(payload: impl Into<String>) -> Self {
        Self::new(EventType::Pong, serde_json::Value::String(payload.into()))
    }

    /// Serialize to the JSON text frame sent on the wire
    pub fn to_frame(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
