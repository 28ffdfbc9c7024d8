use thiserror::Error;

/// The errors that abort a conversion.
///
/// These errors are returned wrapped into an [`anyhow::Error`], possibly with some context attached.
/// Use [`anyhow::Error::downcast_ref`] to recover them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// No weighted edge could be read from the grounder output or synthesized from the solver output.
    #[error("costs can not be empty or missing")]
    EmptyOrMissingCosts,
    /// A predicate matcher was requested for an arity other than 2 or 3.
    #[error("unsupported predicate arity {0} (expected 2 or 3)")]
    UnsupportedArity(usize),
    /// An edge fact refers to an edge that has no identifier, in any orientation.
    #[error(r#"no identifier for edge ("{from}","{to}") in any orientation"#)]
    EdgeIdLookupFailure {
        /// The first node of the edge fact.
        from: String,
        /// The second node of the edge fact.
        to: String,
    },
}
