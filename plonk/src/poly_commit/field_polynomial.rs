use prism_algebra::prelude::*;

/// Field polynomial in coefficient form, low-order coefficient first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use prism_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use prism_algebra::bn254::BN254Scalar;
    /// use prism_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BN254Scalar>::zero();
    /// let zero = BN254Scalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&zero), zero);
    /// assert_eq!(poly.eval(&BN254Scalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use prism_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use prism_algebra::bn254::BN254Scalar;
    /// use prism_algebra::{Zero, One, prelude::*};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&zero), one);
    /// assert_eq!(poly.eval(&one), two);
    /// assert_eq!(poly.eval(&two), five);
    /// let poly2 = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero, zero]);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let coefs = (0..=degree).map(|_| F::random(&mut *prng)).collect();
        Self::from_coefs(coefs)
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs.first().map_or(true, |c| c.is_zero())
    }

    /// Evaluate a polynomial on a point with Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        if self.coefs.len() < other.coefs.len() {
            self.coefs.resize(other.coefs.len(), F::zero());
        }
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtracts another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        if self.coefs.len() < other.coefs.len() {
            self.coefs.resize(other.coefs.len(), F::zero());
        }
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Multiply polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Divide by `X - point` with synthetic division, returning the quotient and the
    /// remainder. The remainder equals the evaluation of the polynomial at `point`.
    /// # Example
    /// ```
    /// use prism_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use prism_algebra::bn254::BN254Scalar;
    /// use prism_algebra::{One, prelude::*};
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// // X^2 + 2X + 1 = (X + 3)(X - 1) + 4
    /// let poly = FpPolynomial::from_coefs(vec![one, two, one]);
    /// let (q, r) = poly.div_by_linear(&one);
    /// assert_eq!(q, FpPolynomial::from_coefs(vec![BN254Scalar::from(3u32), one]));
    /// assert_eq!(r, BN254Scalar::from(4u32));
    /// ```
    pub fn div_by_linear(&self, point: &F) -> (Self, F) {
        let n = self.coefs.len();
        if n == 1 {
            return (Self::zero(), self.coefs[0]);
        }
        let mut quotient = vec![F::zero(); n - 1];
        let mut carry = F::zero();
        for i in (0..n).rev() {
            let c = self.coefs[i].add(&carry.mul(point));
            if i == 0 {
                return (Self::from_coefs(quotient), c);
            }
            quotient[i - 1] = c;
            carry = c;
        }
        (Self::from_coefs(quotient), carry)
    }
}

#[cfg(test)]
mod test {
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use prism_algebra::{bn254::BN254Scalar, prelude::*};
    use rand_chacha::ChaChaRng;

    type F = BN254Scalar;

    #[test]
    fn empty_coefficients() {
        let poly: FpPolynomial<F> = serde_json::from_str(r#"{"coefs":[]}"#).unwrap();
        assert!(poly.coefs.is_empty());
        assert_eq!(poly.degree(), 0);
        assert!(poly.is_zero());
        assert_eq!(poly.eval(&F::one()), F::zero());
    }

    #[test]
    fn add_sub_trim() {
        let one = F::one();
        let two = one.add(&one);
        let three = two.add(&one);
        let mut poly1 = FpPolynomial::from_coefs(vec![three, three, two, one]);
        let poly2 = FpPolynomial::from_coefs(vec![three, two, one, one]);
        poly1.sub_assign(&poly2);
        assert_eq!(poly1, FpPolynomial::from_coefs(vec![F::zero(), one, one]));
        assert_eq!(poly1.degree(), 2);

        let sum = poly1.add(&poly2);
        assert_eq!(
            sum,
            FpPolynomial::from_coefs(vec![three, three, two, one])
        );

        let cancelled = poly2.sub(&poly2);
        assert!(cancelled.is_zero());
        assert_eq!(cancelled.degree(), 0);

        let scaled = poly2.mul_scalar(&F::zero());
        assert!(scaled.is_zero());
    }

    #[test]
    fn eval_matches_naive_powers() {
        let mut prng = ChaChaRng::from_seed([1u8; 32]);
        let poly = FpPolynomial::<F>::random(&mut prng, 17);
        let x = F::random(&mut prng);
        let mut expected = F::zero();
        let mut power = F::one();
        for c in poly.get_coefs_ref() {
            expected.add_assign(&c.mul(&power));
            power.mul_assign(&x);
        }
        assert_eq!(poly.eval(&x), expected);
    }

    #[test]
    fn div_by_linear_reconstructs() {
        let mut prng = ChaChaRng::from_seed([2u8; 32]);
        let poly = FpPolynomial::<F>::random(&mut prng, 12);
        let point = F::random(&mut prng);
        let (q, r) = poly.div_by_linear(&point);
        assert_eq!(r, poly.eval(&point));

        // q * (X - point) + r == poly
        let linear = FpPolynomial::from_coefs(vec![point.neg(), F::one()]);
        let x = F::random(&mut prng);
        assert_eq!(
            q.eval(&x).mul(&linear.eval(&x)).add(&r),
            poly.eval(&x)
        );

        let constant = FpPolynomial::from_coefs(vec![F::from(9u32)]);
        let (q, r) = constant.div_by_linear(&point);
        assert!(q.is_zero());
        assert_eq!(r, F::from(9u32));
    }
}
