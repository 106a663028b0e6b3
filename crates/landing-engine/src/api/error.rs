use thiserror::Error;
use crate::page::element::ElementId;

/// Integration errors. Re-entrant triggers are not errors; they are
/// rejected transitions that return `false`.
#[derive(Debug, Error)]
pub enum LandingError {
    /// A required element is absent from the document or has no layout box.
    #[error("required element `{0}` is missing from the page")]
    MissingElement(ElementId),

    /// The landing config JSON did not parse.
    #[error("invalid landing config: {0}")]
    Config(#[source] serde_json::Error),

    /// A debug snapshot could not be serialized.
    #[error("failed to serialize landing state: {0}")]
    Snapshot(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LandingError>;
