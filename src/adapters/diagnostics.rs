use crate::domain::model::Diagnostic;
use crate::domain::ports::DiagnosticSink;

/// 把失敗原因寫進 tracing，供維運排查
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &Diagnostic) {
        tracing::error!(
            operation = ?event.operation,
            url = %event.url,
            "❌ Album request failed: {}",
            event.cause
        );
    }
}
