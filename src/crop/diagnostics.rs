use super::types::TrimRejection;

/// Receives the warning emitted when a trim request is rejected
pub trait DiagnosticSink {
    fn trim_rejected(&self, rejection: &TrimRejection);
}

/// Default sink: one `WARN` event per rejection
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn trim_rejected(&self, rejection: &TrimRejection) {
        tracing::warn!(
            axis = %rejection.axis,
            extent = rejection.extent,
            budget = rejection.budget,
            minimum = rejection.minimum,
            "image too small to trim, leaving image as is"
        );
    }
}

// Closures and references to closures act as sinks.
impl<F> DiagnosticSink for F
where
    F: Fn(&TrimRejection),
{
    fn trim_rejected(&self, rejection: &TrimRejection) {
        self(rejection)
    }
}
