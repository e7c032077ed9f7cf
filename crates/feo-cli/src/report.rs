//! The result every subcommand hands back to `main`.

use serde::Serialize;

/// Markdown text plus an error flag.
///
/// Serializes as `{"text": ..., "isError": ...}` for `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolReport {
    pub text: String,
    pub is_error: bool,
}

impl ToolReport {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.is_error)
    }

    /// Text to print on stdout.
    pub fn render(&self, json: bool) -> Result<String, serde_json::Error> {
        if json {
            serde_json::to_string_pretty(self)
        } else {
            Ok(self.text.clone())
        }
    }
}
