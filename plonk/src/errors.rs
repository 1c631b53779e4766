use ark_std::{error, fmt};
use prism_algebra::prelude::AlgebraError;

pub(crate) type Result<T> = core::result::Result<T, PlonkError>;

/// Errors of the Plonk prover and its polynomial commitment scheme.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PlonkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// No FFT domain of the requested size exists in the field.
    GroupNotFound(usize),
    /// The witness does not satisfy the constraint system.
    ProofErrorInvalidWitness,
    /// Polynomial commitment error.
    CommitmentError,
    /// Error occurred when setup.
    SetupError,
    /// Division by zero.
    DivisionByZero,
    /// Function params error.
    FuncParamsError,
    /// The degree of the polynomial is higher than the maximum degree supported.
    DegreeError,
}

impl fmt::Display for PlonkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PlonkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            GroupNotFound(n) => write!(f, "Group of size {} not found.", n),
            ProofErrorInvalidWitness => f.write_str("Proof error invalid witness."),
            CommitmentError => f.write_str("Commitment error."),
            SetupError => f.write_str("Setup error."),
            DivisionByZero => f.write_str("Division by zero."),
            FuncParamsError => f.write_str("Function params error"),
            DegreeError => f.write_str(
                "The degree of the polynomial is higher than the maximum degree supported.",
            ),
        }
    }
}

impl error::Error for PlonkError {}

impl From<AlgebraError> for PlonkError {
    fn from(e: AlgebraError) -> PlonkError {
        PlonkError::Algebra(e)
    }
}
