use crate::errors::{PlonkError, Result};
use crate::poly_commit::{
    field_polynomial::FpPolynomial,
    pcs::{HomomorphicPolyComElem, PolyComScheme, ToBytes},
};
use prism_algebra::{
    bn254::{BN254Gt, BN254PairingEngine, BN254Scalar, BN254G1},
    prelude::*,
};
use ark_std::{end_timer, start_timer};

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

impl<G: Group> ToBytes for KZGCommitment<G> {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }
}

impl HomomorphicPolyComElem for KZGCommitment<BN254G1> {
    type Scalar = BN254Scalar;

    fn get_identity() -> Self {
        KZGCommitment(BN254G1::get_identity())
    }

    fn add(&self, other: &Self) -> Self {
        KZGCommitment(self.0.add(&other.0))
    }

    fn add_assign(&mut self, other: &Self) {
        self.0.add_assign(&other.0)
    }

    fn mul(&self, exp: &BN254Scalar) -> Self {
        KZGCommitment(self.0.mul(exp))
    }
}

/// KZG commitment scheme about `Pairing`.
#[derive(Debug, Serialize, Deserialize)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// public parameter about G1: `[s^i] * G1` for `i` up to the max degree.
    pub public_parameter_group_1: Vec<P::G1>,
    /// public parameter about G2: `G2` and `[s] * G2`.
    pub public_parameter_group_2: Vec<P::G2>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let setup_time = start_timer!(|| format!("KZG setup, degree {}", max_degree));
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::with_capacity(max_degree + 1);
        let mut elem_g1 = P::G1::get_base();
        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let elem_g2 = P::G2::get_base();
        let public_parameter_group_2 = vec![elem_g2, elem_g2.mul(&s)];
        end_timer!(setup_time);

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }
}

/// KZG commitment scheme over the BN254 curve
pub type KZGCommitmentSchemeBN254 = KZGCommitmentScheme<BN254PairingEngine>;

impl PolyComScheme for KZGCommitmentSchemeBN254 {
    type Field = BN254Scalar;
    type Commitment = KZGCommitment<BN254G1>;

    fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len().saturating_sub(1)
    }

    fn commit(&self, polynomial: &FpPolynomial<BN254Scalar>) -> Result<Self::Commitment> {
        let coefs = polynomial.get_coefs_ref();
        let degree = polynomial.degree();

        if degree + 1 > self.public_parameter_group_1.len() {
            return Err(PlonkError::DegreeError);
        }

        let coefs_ref: Vec<&BN254Scalar> = coefs.iter().collect();
        let pub_param_group_1_ref: Vec<&BN254G1> = self.public_parameter_group_1[0..degree + 1]
            .iter()
            .collect();

        let commitment_value = BN254G1::multi_exp(&coefs_ref[..], &pub_param_group_1_ref[..]);

        Ok(KZGCommitment(commitment_value))
    }

    fn eval(&self, poly: &FpPolynomial<Self::Field>, point: &Self::Field) -> Self::Field {
        poly.eval(point)
    }

    fn prove(
        &self,
        poly: &FpPolynomial<Self::Field>,
        x: &Self::Field,
        max_degree: usize,
    ) -> Result<Self::Commitment> {
        if poly.degree() > max_degree {
            return Err(PlonkError::DegreeError);
        }

        // (P(X) - P(x)) / (X - x), the remainder is P(x)
        let (q_poly, _) = poly.div_by_linear(x);

        self.commit(&q_poly)
    }

    fn verify(
        &self,
        cm: &Self::Commitment,
        _degree: usize,
        point: &Self::Field,
        eval: &Self::Field,
        proof: &Self::Commitment,
    ) -> Result<()> {
        if self.public_parameter_group_1.is_empty() || self.public_parameter_group_2.len() < 2 {
            return Err(PlonkError::CommitmentError);
        }
        let g1_0 = self.public_parameter_group_1[0];
        let g2_0 = self.public_parameter_group_2[0];
        let g2_1 = self.public_parameter_group_2[1];

        // e(C - y * G1 + x * W, G2) == e(W, [s] * G2)
        let left_first = cm.0.sub(&g1_0.mul(eval)).add(&proof.0.mul(point));
        let pairing_eval = BN254PairingEngine::product_of_pairings(
            &[left_first, proof.0.neg()],
            &[g2_0, g2_1],
        );

        if pairing_eval == BN254Gt::get_identity() {
            Ok(())
        } else {
            Err(PlonkError::CommitmentError)
        }
    }

    fn shrink_to_verifier_only(&self) -> Self {
        Self {
            public_parameter_group_1: self.public_parameter_group_1.iter().take(1).copied().collect(),
            public_parameter_group_2: self.public_parameter_group_2.iter().take(2).copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests_kzg_impl {
    use crate::poly_commit::{
        field_polynomial::FpPolynomial,
        kzg_poly_com::{KZGCommitmentScheme, KZGCommitmentSchemeBN254},
        pcs::{HomomorphicPolyComElem, PolyComScheme},
    };
    use prism_algebra::{
        bn254::{BN254PairingEngine, BN254Scalar, BN254G1},
        prelude::*,
    };

    fn check_public_parameters_generation<P: Pairing>() {
        let param_size = 5;
        let mut prng = test_rng();
        let kzg_scheme = KZGCommitmentScheme::<P>::new(param_size, &mut prng);
        let g1_power1 = kzg_scheme.public_parameter_group_1[1];
        let g2_power1 = kzg_scheme.public_parameter_group_2[1];

        // Check parameters for G1
        for i in 0..param_size - 1 {
            let elem_first_group_1 = kzg_scheme.public_parameter_group_1[i];
            let elem_next_group_1 = kzg_scheme.public_parameter_group_1[i + 1];
            let elem_next_group_1_target = P::pairing(&elem_next_group_1, &P::G2::get_base());
            let elem_next_group_1_target_recomputed = P::pairing(&elem_first_group_1, &g2_power1);
            assert_eq!(
                elem_next_group_1_target_recomputed,
                elem_next_group_1_target
            );
        }

        // Check parameters for G2
        let elem_first_group_2 = kzg_scheme.public_parameter_group_2[0];
        let elem_second_group_2 = kzg_scheme.public_parameter_group_2[1];
        let elem_next_group_2_target = P::pairing(&P::G1::get_base(), &elem_second_group_2);
        let elem_next_group_2_target_recomputed = P::pairing(&g1_power1, &elem_first_group_2);

        assert_eq!(
            elem_next_group_2_target_recomputed,
            elem_next_group_2_target
        );
    }

    #[test]
    fn test_public_parameters() {
        check_public_parameters_generation::<BN254PairingEngine>();
    }

    #[test]
    fn test_generation_of_crs() {
        let n = 1 << 5;
        let mut prng = test_rng();
        let kzg_scheme = KZGCommitmentSchemeBN254::new(n, &mut prng);
        assert_eq!(kzg_scheme.public_parameter_group_1.len(), n + 1);
        assert_eq!(kzg_scheme.public_parameter_group_2.len(), 2);
        assert_eq!(kzg_scheme.max_degree(), n);
    }

    #[test]
    fn test_homomorphic_poly_com_elem() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(20, &mut prng);
        type Field = BN254Scalar;
        let one = Field::one();
        let two = one.add(&one);
        let three = two.add(&one);
        let four = three.add(&one);
        let six = three.add(&three);
        let eight = six.add(&two);
        let poly1 = FpPolynomial::from_coefs(vec![two, three, six]);
        let commitment1 = pcs.commit(&poly1).unwrap();

        let poly2 = FpPolynomial::from_coefs(vec![one, eight, four]);
        let commitment2 = pcs.commit(&poly2).unwrap();

        // Add two polynomials
        let poly_sum = poly1.add(&poly2);
        let commitment_sum = pcs.commit(&poly_sum).unwrap();
        let commitment_sum_computed = commitment1.add(&commitment2);
        assert_eq!(commitment_sum, commitment_sum_computed);

        // Multiplying all the coefficients of a polynomial by some value
        let exponent = four.add(&one);
        let poly1_mult_5 = poly1.mul_scalar(&exponent);
        let commitment_poly1_mult_5 = pcs.commit(&poly1_mult_5).unwrap();
        let commitment_poly1_mult_5_hom = commitment1.mul(&exponent);
        assert_eq!(commitment_poly1_mult_5, commitment_poly1_mult_5_hom);
    }

    #[test]
    fn test_commit() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(10, &mut prng);
        type Field = BN254Scalar;
        let one = Field::one();
        let two = one.add(&one);
        let three = two.add(&one);
        let six = three.add(&three);

        let fq_poly = FpPolynomial::from_coefs(vec![two, three, six]);
        let commitment = pcs.commit(&fq_poly).unwrap();

        // Doing the multiexp by hand
        let mut expected_committed_value = BN254G1::get_identity();
        for (i, coef) in fq_poly.get_coefs_ref().iter().enumerate() {
            let g_i = pcs.public_parameter_group_1[i];
            expected_committed_value = expected_committed_value.add(&g_i.mul(coef));
        }
        assert_eq!(expected_committed_value, commitment.0);

        let too_big = FpPolynomial::<Field>::random(&mut prng, 11);
        assert!(pcs.commit(&too_big).is_err());
    }

    #[test]
    fn test_eval() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(10, &mut prng);
        type Field = BN254Scalar;
        let one = Field::one();
        let two = one.add(&one);
        let four = two.add(&two);
        let seven = four.add(&two).add(&one);
        let fq_poly = FpPolynomial::from_coefs(vec![one, two, four]);
        let point = one;
        let max_degree = fq_poly.degree();

        let degree = fq_poly.degree();
        let commitment_value = pcs.commit(&fq_poly).unwrap();

        // Check that an error is returned if the degree of the polynomial exceeds the maximum degree.
        let wrong_max_degree = 1;
        let res = pcs.prove(&fq_poly, &point, wrong_max_degree);
        assert!(res.is_err());

        let proof = pcs.prove(&fq_poly, &point, max_degree).unwrap();

        let res = pcs.verify(&commitment_value, degree, &point, &seven, &proof);
        assert!(res.is_ok());

        let new_pcs = pcs.shrink_to_verifier_only();
        let res = new_pcs.verify(&commitment_value, degree, &point, &seven, &proof);
        assert!(res.is_ok());

        let wrong_eval = one;
        let res = pcs.verify(&commitment_value, degree, &point, &wrong_eval, &proof);
        assert!(res.is_err());
    }

    #[test]
    fn test_open_and_batch_open() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
        let polys: Vec<FpPolynomial<BN254Scalar>> = (0..5)
            .map(|i| FpPolynomial::random(&mut prng, 10 + i))
            .collect();
        let cms: Vec<_> = polys.iter().map(|p| pcs.commit(p).unwrap()).collect();
        let point = BN254Scalar::random(&mut prng);
        let v = BN254Scalar::random(&mut prng);

        let opening = pcs.open(&point, &polys[2]).unwrap();
        assert_eq!(opening.claimed_value, polys[2].eval(&point));
        assert!(pcs.verify_opening(&cms[2], &opening).is_ok());
        assert!(pcs.verify_opening(&cms[1], &opening).is_err());

        let poly_refs: Vec<&FpPolynomial<BN254Scalar>> = polys.iter().collect();
        let batch = pcs.batch_open_single_point(&point, &v, &poly_refs).unwrap();
        for (value, poly) in batch.claimed_values.iter().zip(polys.iter()) {
            assert_eq!(*value, poly.eval(&point));
        }
        let cm_refs: Vec<_> = cms.iter().collect();
        assert!(pcs.verify_batch_opening(&cm_refs, &v, &batch).is_ok());

        let mut tampered = batch.clone();
        tampered.claimed_values[0].add_assign(&BN254Scalar::one());
        assert!(pcs.verify_batch_opening(&cm_refs, &v, &tampered).is_err());

        assert!(pcs.batch_open_single_point(&point, &v, &[]).is_err());
    }
}
