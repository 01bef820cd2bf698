use std::collections::BTreeMap;

/// Caller-supplied metadata attached to a classified error.
///
/// The classifier never inspects or rewrites any of it. The only field with
/// an observable effect is `message`, which feeds the `Display` rendering of
/// the error it is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorContext {
    /// Free-text message returned alongside the error code.
    pub message: Option<String>,
    /// Identifier of the request that produced the error.
    pub request_id: Option<String>,
    /// Status line of the response (e.g. `"400 Bad Request"`).
    pub status_line: Option<String>,
    /// Response headers, as received.
    pub headers: BTreeMap<String, String>,
    /// Any further fields found in the error body besides code and message.
    pub additional_fields: BTreeMap<String, String>,
}

impl ErrorContext {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_status_line(mut self, status_line: impl Into<String>) -> Self {
        self.status_line = Some(status_line.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_fields.insert(name.into(), value.into());
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
