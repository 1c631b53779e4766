use crate::errors::{PlonkError, Result};
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_std::fmt::Debug;
use prism_algebra::prelude::*;
use serde::{Deserialize, Serialize};

/// The trait for help serialize to bytes,
/// implement by polynomial commitment.
pub trait ToBytes {
    /// Convert to bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

/// The trait for homomorphic polynomial commitment elements.
pub trait HomomorphicPolyComElem: ToBytes {
    /// This is the scalar field of the polynomial.
    type Scalar;

    /// Get identity of the group, i.e. the commitment to the zero polynomial.
    fn get_identity() -> Self;

    /// Add the underlying polynomials.
    fn add(&self, other: &Self) -> Self;

    /// Add assign the underlying polynomials.
    fn add_assign(&mut self, other: &Self);

    /// Multiply underlying polynomial by scalar `exp`.
    fn mul(&self, exp: &Self::Scalar) -> Self;
}

/// Opening of one committed polynomial at one point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningProof<F, C> {
    /// The evaluation point.
    pub point: F,
    /// The value of the polynomial at `point`.
    pub claimed_value: F,
    /// Commitment to the quotient `(f(X) - f(point)) / (X - point)`.
    pub witness: C,
}

/// Opening of several committed polynomials at the same point.
///
/// The witness opens the fold `sum_i v^i * f_i(X)` where `v` is the bundling
/// challenge, while `claimed_values` keeps the individual `f_i(point)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOpeningProof<F, C> {
    /// The evaluation point.
    pub point: F,
    /// The value of each polynomial at `point`, in input order.
    pub claimed_values: Vec<F>,
    /// Commitment to the quotient of the folded polynomial.
    pub witness: C,
}

/// Trait for polynomial commitment scheme.
pub trait PolyComScheme: Sized {
    /// Type of prime field.
    type Field: Scalar;

    /// Type of commitment produces, need to implement `HomomorphicPolyComElem`.
    type Commitment: HomomorphicPolyComElem<Scalar = Self::Field>
        + Debug
        + PartialEq
        + Eq
        + Clone
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Return maximum supported degree.
    fn max_degree(&self) -> usize;

    /// Commits to the polynomial, commitment is binding.
    fn commit(&self, polynomial: &FpPolynomial<Self::Field>) -> Result<Self::Commitment>;

    /// Evaluate the polynomial at a point.
    fn eval(&self, poly: &FpPolynomial<Self::Field>, point: &Self::Field) -> Self::Field;

    /// Compute the witness that `poly` evaluates to `poly(x)` at `x`.
    fn prove(
        &self,
        poly: &FpPolynomial<Self::Field>,
        x: &Self::Field,
        max_degree: usize,
    ) -> Result<Self::Commitment>;

    /// Verify an evaluation proof that polynomial inside commitment
    /// evaluates to `eval` on input `point`.
    fn verify(
        &self,
        cm: &Self::Commitment,
        degree: usize,
        point: &Self::Field,
        eval: &Self::Field,
        proof: &Self::Commitment,
    ) -> Result<()>;

    /// Keep only the parameters needed by `verify`.
    fn shrink_to_verifier_only(&self) -> Self;

    /// Open `poly` at `point`.
    fn open(
        &self,
        point: &Self::Field,
        poly: &FpPolynomial<Self::Field>,
    ) -> Result<OpeningProof<Self::Field, Self::Commitment>> {
        let claimed_value = self.eval(poly, point);
        let witness = self.prove(poly, point, self.max_degree())?;
        Ok(OpeningProof {
            point: *point,
            claimed_value,
            witness,
        })
    }

    /// Open every polynomial of `polys` at the same `point` with a single witness,
    /// folding them with the powers of `v_bundle`.
    fn batch_open_single_point(
        &self,
        point: &Self::Field,
        v_bundle: &Self::Field,
        polys: &[&FpPolynomial<Self::Field>],
    ) -> Result<BatchOpeningProof<Self::Field, Self::Commitment>> {
        if polys.is_empty() {
            return Err(PlonkError::FuncParamsError);
        }

        let mut claimed_values = Vec::with_capacity(polys.len());
        let mut folded = FpPolynomial::<Self::Field>::zero();
        let mut v_i = Self::Field::one();
        for poly in polys.iter() {
            claimed_values.push(self.eval(poly, point));
            folded.add_assign(&poly.mul_scalar(&v_i));
            v_i.mul_assign(v_bundle);
        }

        let witness = self.prove(&folded, point, self.max_degree())?;
        Ok(BatchOpeningProof {
            point: *point,
            claimed_values,
            witness,
        })
    }

    /// Check a single opening against the commitment.
    fn verify_opening(
        &self,
        cm: &Self::Commitment,
        opening: &OpeningProof<Self::Field, Self::Commitment>,
    ) -> Result<()> {
        self.verify(
            cm,
            self.max_degree(),
            &opening.point,
            &opening.claimed_value,
            &opening.witness,
        )
    }

    /// Check a batched opening against the commitments, folded with `v_bundle`
    /// the same way as `batch_open_single_point`.
    fn verify_batch_opening(
        &self,
        cms: &[&Self::Commitment],
        v_bundle: &Self::Field,
        opening: &BatchOpeningProof<Self::Field, Self::Commitment>,
    ) -> Result<()> {
        if cms.is_empty() || cms.len() != opening.claimed_values.len() {
            return Err(PlonkError::FuncParamsError);
        }

        let mut folded_cm = Self::Commitment::get_identity();
        let mut folded_value = Self::Field::zero();
        let mut v_i = Self::Field::one();
        for (cm, value) in cms.iter().zip(opening.claimed_values.iter()) {
            folded_cm.add_assign(&cm.mul(&v_i));
            folded_value.add_assign(&value.mul(&v_i));
            v_i.mul_assign(v_bundle);
        }

        self.verify(
            &folded_cm,
            self.max_degree(),
            &opening.point,
            &folded_value,
            &opening.witness,
        )
    }
}
