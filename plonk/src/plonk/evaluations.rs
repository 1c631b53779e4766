use prism_algebra::prelude::*;

/// Lagrange form of a polynomial over a domain of size N:
/// `values[i]` is the value at `generator^i`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluations<F> {
    /// The values, natural order.
    pub values: Vec<F>,
}

impl<F: Scalar> Evaluations<F> {
    /// Wrap values given in natural order.
    pub fn new(values: Vec<F>) -> Self {
        Self { values }
    }

    /// Return the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Test if there is no value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Values of a polynomial on the four odd cosets of the 4N extended domain.
///
/// Index `4i + j` holds the value at `generator^i * u^(2j + 1)` where `u` is the
/// primitive 8N-th root of unity with `u^8 = generator`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosetEvaluations<F> {
    /// The interleaved values.
    pub values: Vec<F>,
}

impl<F: Scalar> CosetEvaluations<F> {
    /// Wrap already interleaved values.
    pub fn new(values: Vec<F>) -> Self {
        Self { values }
    }

    /// Return the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Test if there is no value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
