/// Errors surfaced by the classification core.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// Misconfigured call: `k` of zero, an empty training set, or a
    /// non-finite query feature. Not retryable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The vote step was handed zero neighbors. `classify` guards against
    /// this; it can only surface when `majority` is called directly.
    #[error("majority vote over an empty neighborhood")]
    EmptyNeighborhood,
}
