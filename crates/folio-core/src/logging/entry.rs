//! Log entry type handed to sinks.

use serde_json::Value;

/// A single flattened tracing event.
///
/// No timestamp is recorded: the browser console stamps lines itself, and
/// wall-clock access differs between the wasm and native builds.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "folio::behaviors::menu")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Optional structured fields
    pub fields: Option<Value>,

    /// Optional span path if this entry is from within a span
    pub span: Option<String>,
}

impl LogEntry {
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    /// Add structured fields to the entry.
    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Add span path to the entry.
    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Human-readable single line, e.g. `[folio::menu] Menu toggled open=true`.
    pub fn to_console_line(&self) -> String {
        let mut line = format!("[{}] ", self.target);
        if let Some(span) = &self.span {
            line.push_str(span);
            line.push_str(": ");
        }
        line.push_str(&self.msg);

        if let Some(Value::Object(fields)) = &self.fields {
            for (key, value) in fields {
                match value {
                    Value::String(s) => line.push_str(&format!(" {key}={s}")),
                    other => line.push_str(&format!(" {key}={other}")),
                }
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_line_plain() {
        let entry = LogEntry::new("info", "folio::app", "Controller ready");
        assert_eq!(entry.to_console_line(), "[folio::app] Controller ready");
    }

    #[test]
    fn test_console_line_with_span_and_fields() {
        let entry = LogEntry::new("debug", "folio::behaviors", "Section changed")
            .with_span("highlight")
            .with_fields(serde_json::json!({ "id": "work", "scroll": 812.5 }));

        assert_eq!(
            entry.to_console_line(),
            "[folio::behaviors] highlight: Section changed id=work scroll=812.5"
        );
    }
}
