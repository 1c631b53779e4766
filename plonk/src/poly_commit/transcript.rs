use crate::poly_commit::pcs::ToBytes;
use merlin::Transcript;
use prism_algebra::prelude::*;
use rand_chacha::ChaChaRng;

/// The trait for polynomial commitment transcript.
pub trait PolyComTranscript {
    /// Append the commitment to the transcript.
    fn append_commitment<C: ToBytes>(&mut self, commitment: &C);

    /// Append the field to the transcript.
    fn append_field_elem<F: Scalar>(&mut self, point: &F);

    /// Get challenge result.
    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F;
}

impl PolyComTranscript for Transcript {
    fn append_commitment<C: ToBytes>(&mut self, commitment: &C) {
        self.append_message(b"append commitment", &commitment.to_bytes());
    }

    fn append_field_elem<F: Scalar>(&mut self, field_elem: &F) {
        self.append_message(b"append field point", &field_elem.to_bytes());
    }

    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        let mut buff = [0u8; 32];
        self.challenge_bytes(label, &mut buff[..]);
        F::random(&mut ChaChaRng::from_seed(buff))
    }
}

#[cfg(test)]
mod test {
    use crate::poly_commit::{
        field_polynomial::FpPolynomial, kzg_poly_com::KZGCommitmentSchemeBN254,
        pcs::PolyComScheme, transcript::PolyComTranscript,
    };
    use merlin::Transcript;
    use prism_algebra::{bn254::BN254Scalar, prelude::*};

    #[test]
    fn challenges_depend_on_absorbed_data() {
        let mut prng = test_rng();
        let pcs = KZGCommitmentSchemeBN254::new(4, &mut prng);
        let poly = FpPolynomial::<BN254Scalar>::random(&mut prng, 4);
        let cm = pcs.commit(&poly).unwrap();

        let mut t1 = Transcript::new(b"test");
        let mut t2 = Transcript::new(b"test");
        t1.append_commitment(&cm);
        t2.append_commitment(&cm);
        let c1: BN254Scalar = t1.get_challenge_field_elem(b"c");
        let c2: BN254Scalar = t2.get_challenge_field_elem(b"c");
        assert_eq!(c1, c2);

        t1.append_field_elem(&c1);
        t2.append_field_elem(&c1.add(&BN254Scalar::one()));
        let d1: BN254Scalar = t1.get_challenge_field_elem(b"d");
        let d2: BN254Scalar = t2.get_challenge_field_elem(b"d");
        assert_ne!(d1, d2);
    }
}
