use thiserror::Error;

/// Errors that may occur when generating or evaluating benchmark problems.
///
/// Every variant is fatal for the call that produced it: generation either
/// returns a complete set of objectives or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is outside its valid domain.
    ///
    /// For example, a correlation coefficient with magnitude above one,
    /// a qudit with fewer than two levels, or an assignment level that the
    /// corresponding qudit cannot take.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The qudit configuration is not supported by the requested family.
    ///
    /// The closed-form bounds of the coupled families are derived for a
    /// homogeneous alphabet over at least two variables.
    #[error("unsupported qudit configuration: {0}")]
    UnsupportedConfiguration(String),

    /// The name does not identify a registered problem family.
    #[error("unknown problem family `{0}`")]
    UnknownFamily(String),

    /// Vector or matrix dimensions do not agree.
    #[error("shape mismatch: expected {expected} entries, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
}
