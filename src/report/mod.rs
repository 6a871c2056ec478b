//! Consumers of [`EvaluationResult`]. Renderers only format; every number
//! shown comes from the result as computed.

mod plain;

use crate::types::EvaluationResult;

pub use plain::PlainTextRenderer;

pub trait ReportRenderer {
    type Output;

    fn render(&self, result: &EvaluationResult) -> Self::Output;
}

/// Serializes the result as the response payload of an API layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl ReportRenderer for JsonRenderer {
    type Output = Result<String, serde_json::Error>;

    fn render(&self, result: &EvaluationResult) -> Self::Output {
        if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        }
    }
}
