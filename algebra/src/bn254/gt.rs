use crate::bn254::{BN254PairingEngine, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use crate::traits::Pairing;
use ark_bn254::{Bn254, Fq12};
use ark_ec::{pairing::PairingOutput, Group as ArkGroup};
use ark_ff::{Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};

/// The wrapped struct for the pairing target group, a subgroup of `Fq12`.
/// The group law is written additively to fit the `Group` trait.
#[derive(Copy, Default, Clone, PartialEq, Eq, Debug)]
pub struct BN254Gt(pub(crate) Fq12);

impl Neg for BN254Gt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut v = self.0;
        v.conjugate_in_place();
        Self(v)
    }
}

impl<'a> Add<&'a BN254Gt> for BN254Gt {
    type Output = BN254Gt;

    #[inline]
    fn add(self, rhs: &'a BN254Gt) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> Sub<&'a BN254Gt> for BN254Gt {
    type Output = BN254Gt;

    #[inline]
    fn sub(self, rhs: &'a BN254Gt) -> Self::Output {
        self.add(&rhs.neg())
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254Gt {
    type Output = BN254Gt;

    #[inline]
    fn mul(self, rhs: &'a BN254Scalar) -> Self::Output {
        let out = PairingOutput::<Bn254>(self.0).mul_bigint(rhs.0.into_bigint());
        Self(out.0)
    }
}

impl<'a> AddAssign<&'a BN254Gt> for BN254Gt {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BN254Gt) {
        self.0.mul_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BN254Gt> for BN254Gt {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BN254Gt) {
        *self = self.sub(rhs)
    }
}

impl Group for BN254Gt {
    type ScalarType = BN254Scalar;

    const COMPRESSED_LEN: usize = 384;

    #[inline]
    fn double(&self) -> Self {
        Self(self.0.square())
    }

    #[inline]
    fn get_identity() -> Self {
        Self(Fq12::one())
    }

    #[inline]
    fn get_base() -> Self {
        BN254PairingEngine::pairing(&BN254G1::get_base(), &BN254G2::get_base())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(PairingOutput::<Bn254>::rand(prng).0)
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        // writing into a vector cannot fail
        let _ = self.0.serialize_with_mode(&mut buf, Compress::Yes);

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let res = Fq12::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;

        Ok(Self(res))
    }
}
