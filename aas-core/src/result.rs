//! Result and message wrapper for API outcomes
//!
//! Remote and local API operations report their outcome as an [`ApiResult`]:
//! a success flag, an optional entity and a list of [`Message`]s. The JSON
//! form is shared with AAS servers, so error bodies returned by a server can
//! be read back into an `ApiResult`.

use crate::error::{AasError, AasResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessageType {
    #[default]
    Unspecified,
    Debug,
    Information,
    Warning,
    Error,
    Exception,
    Fatal,
}

/// A single message attached to a result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub message_type: MessageType,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Message {
    pub fn new(message_type: MessageType, text: impl Into<String>, code: Option<String>) -> Self {
        Self {
            message_type,
            text: text.into(),
            code,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageType::Information, text, None)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageType::Error, text, None)
    }

    /// Error message for a missing element
    pub fn not_found(what: impl fmt::Display) -> Self {
        Self::new(MessageType::Error, format!("{} not found", what), Some("404".to_string()))
    }

    /// Error message for an element that already exists
    pub fn conflict(what: impl fmt::Display) -> Self {
        Self::new(MessageType::Error, format!("{} already exists", what), Some("409".to_string()))
    }

    pub fn exception(text: impl Into<String>) -> Self {
        Self::new(MessageType::Exception, text, Some("500".to_string()))
    }

    /// Check if this message reports an error, exception or fatal failure
    pub fn is_error(&self) -> bool {
        self.message_type >= MessageType::Error
    }
}

impl From<&AasError> for Message {
    fn from(err: &AasError) -> Self {
        match err {
            AasError::NotFound(what) => Message::not_found(what),
            AasError::Conflict(what) => Message::conflict(what),
            AasError::Io(_) | AasError::Json(_) => Message::exception(err.to_string()),
            AasError::Http(_) => Message::error(err.to_string()),
            _ => Message::new(MessageType::Error, err.to_string(), Some("400".to_string())),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{:?} | {} | {}", self.message_type, code, self.text),
            None => write!(f, "{:?} | {}", self.message_type, self.text),
        }
    }
}

/// Ordered list of messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCollection(Vec<Message>);

impl MessageCollection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    pub fn has_errors(&self) -> bool {
        self.0.iter().any(Message::is_error)
    }

    /// First error-level message, if any
    pub fn first_error(&self) -> Option<&Message> {
        self.0.iter().find(|m| m.is_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MessageCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, message) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", message)?;
        }
        Ok(())
    }
}

impl From<Message> for MessageCollection {
    fn from(message: Message) -> Self {
        Self(vec![message])
    }
}

/// Outcome of an API operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResult<T> {
    pub success: bool,
    #[serde(default)]
    pub is_exception: bool,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub entity: Option<T>,
    #[serde(default)]
    pub messages: MessageCollection,
}

impl<T> ApiResult<T> {
    /// Successful result carrying `entity`
    pub fn ok(entity: T) -> Self {
        Self {
            success: true,
            is_exception: false,
            entity: Some(entity),
            messages: MessageCollection::new(),
        }
    }

    /// Failed result described by `message`
    pub fn failure(message: Message) -> Self {
        Self {
            success: false,
            is_exception: message.message_type >= MessageType::Exception,
            entity: None,
            messages: message.into(),
        }
    }

    /// Failed result describing `err`
    pub fn from_error(err: &AasError) -> Self {
        Self::failure(Message::from(err))
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    pub fn into_entity(self) -> Option<T> {
        self.entity
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Transform the entity, keeping success state and messages
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        ApiResult {
            success: self.success,
            is_exception: self.is_exception,
            entity: self.entity.map(f),
            messages: self.messages,
        }
    }

    /// Chain another operation on a successful result
    ///
    /// Messages of both results are kept in order. A successful result
    /// without entity fails with an error message instead of calling `f`.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> ApiResult<U>) -> ApiResult<U> {
        match (self.success, self.entity) {
            (true, Some(entity)) => {
                let mut next = f(entity);
                let mut messages = self.messages;
                for message in next.messages.0.drain(..) {
                    messages.push(message);
                }
                next.messages = messages;
                next
            }
            (true, None) => {
                let mut messages = self.messages;
                messages.push(Message::error("Successful result carries no entity"));
                ApiResult {
                    success: false,
                    is_exception: false,
                    entity: None,
                    messages,
                }
            }
            (false, _) => ApiResult {
                success: false,
                is_exception: self.is_exception,
                entity: None,
                messages: self.messages,
            },
        }
    }

    /// Convert into a plain [`AasResult`]
    ///
    /// # Errors
    /// A failed result maps its first error message back to an error
    /// (`404` to [`AasError::NotFound`], `409` to [`AasError::Conflict`]).
    /// A successful result without entity is reported as invalid data.
    pub fn into_result(self) -> AasResult<T> {
        if !self.success {
            return Err(error_from_messages(&self.messages));
        }
        self.entity
            .ok_or_else(|| AasError::InvalidData("Successful result carries no entity".to_string()))
    }

    /// Check for success, discarding any entity
    pub fn ensure_success(&self) -> AasResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(error_from_messages(&self.messages))
        }
    }
}

impl<T> From<AasResult<T>> for ApiResult<T> {
    fn from(result: AasResult<T>) -> Self {
        match result {
            Ok(entity) => ApiResult::ok(entity),
            Err(err) => ApiResult::from_error(&err),
        }
    }
}

fn error_from_messages(messages: &MessageCollection) -> AasError {
    match messages.first_error().or_else(|| messages.iter().next()) {
        Some(message) => match message.code.as_deref() {
            Some("404") => AasError::NotFound(message.text.clone()),
            Some("409") => AasError::Conflict(message.text.clone()),
            _ => AasError::Http(message.text.clone()),
        },
        None => AasError::Http("Operation failed without messages".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_result() {
        let result = ApiResult::ok(5);
        assert!(result.is_success());
        assert_eq!(result.entity(), Some(&5));
        assert_eq!(result.into_result().unwrap(), 5);
    }

    #[test]
    fn test_failure_from_error() {
        let error = AasError::NotFound("Submodel 'X'".into());
        let result: ApiResult<u32> = ApiResult::from_error(&error);
        assert!(!result.is_success());
        assert!(!result.is_exception);
        assert!(result.messages.has_errors());
        let err = result.into_result().unwrap_err();
        assert!(matches!(err, AasError::NotFound(text) if text == "Submodel 'X' not found"));
    }

    #[test]
    fn test_io_error_is_exception() {
        let err = AasError::Io(std::io::Error::other("disk gone"));
        let result: ApiResult<()> = ApiResult::from_error(&err);
        assert!(result.is_exception);
        assert_eq!(result.messages.first_error().unwrap().code.as_deref(), Some("500"));
    }

    #[test]
    fn test_map_and_then_keep_messages() {
        let result = ApiResult::ok(2)
            .with_message(Message::info("first"))
            .map(|v| v * 10)
            .and_then(|v| ApiResult::ok(v + 1).with_message(Message::info("second")));
        assert_eq!(result.entity(), Some(&21));
        let texts: Vec<_> = result.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);

        let failed: ApiResult<i32> = ApiResult::<i32>::failure(Message::error("boom"))
            .and_then(|v| ApiResult::ok(v + 1));
        assert!(!failed.is_success());
        assert_eq!(failed.messages.len(), 1);
    }

    #[test]
    fn test_and_then_without_entity() {
        let empty: ApiResult<i32> = serde_json::from_value(json!({"success": true})).unwrap();
        let mut called = false;
        let chained = empty.and_then(|v| {
            called = true;
            ApiResult::ok(v + 1)
        });
        assert!(!called);
        assert!(!chained.is_success());
        assert_eq!(chained.messages.len(), 1);
        let err = chained.into_result().unwrap_err();
        assert!(err.to_string().contains("carries no entity"));
    }

    #[test]
    fn test_json_shape() {
        let result: ApiResult<String> = ApiResult::failure(Message::conflict("Property 'A'"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            json!({
                "success": false,
                "isException": false,
                "messages": [{
                    "messageType": "Error",
                    "text": "Property 'A' already exists",
                    "code": "409"
                }]
            })
        );

        let back: ApiResult<String> = serde_json::from_value(json).unwrap();
        assert!(matches!(back.into_result(), Err(AasError::Conflict(_))));
    }

    #[test]
    fn test_from_aas_result() {
        let ok: ApiResult<i32> = AasResult::Ok(1).into();
        assert!(ok.is_success());
        let failed: ApiResult<i32> = AasResult::Err(AasError::InvalidData("bad".into())).into();
        assert!(failed.ensure_success().is_err());
    }
}
