use thiserror::Error;

#[derive(Debug, Error)]
pub enum StitcherError {
    /// The node sequence cannot be partitioned into line and cubic segments.
    #[error("Malformed outline: {reason}")]
    MalformedOutline { reason: String },

    #[error("Invalid spacing {spacing}; spacing must be a positive number")]
    InvalidSpacing { spacing: f64 },
}
