use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnchorError {
    /// An empty form would match at every offset.
    #[error("candidate form is empty")]
    EmptyForm,

    /// A form in a candidate list was rejected by the occurrence strategy.
    #[error("candidate form #{position} {form:?} is invalid")]
    InvalidForm {
        position: usize,
        form: String,
        #[source]
        source: Box<AnchorError>,
    },
}
