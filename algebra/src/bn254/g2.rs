use crate::bn254::BN254Scalar;
use crate::prelude::*;
use ark_bn254::{G2Affine, G2Projective};
use ark_ec::{CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::fmt::{Debug, Display, Formatter};

/// The wrapped struct for ark_bn254::G2Projective
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BN254G2(pub(crate) G2Projective);

impl Debug for BN254G2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <G2Affine as Display>::fmt(&self.0.into_affine(), f)
    }
}

impl Group for BN254G2 {
    type ScalarType = BN254Scalar;
    const COMPRESSED_LEN: usize = 64;

    #[inline]
    fn double(&self) -> Self {
        Self(ArkGroup::double(&self.0))
    }

    #[inline]
    fn get_identity() -> Self {
        Self(G2Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G2Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G2Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let affine = G2Affine::from(self.0);
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        // writing into a vector cannot fail
        let _ = affine.serialize_with_mode(&mut buf, Compress::Yes);

        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G2Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;

        Ok(Self(G2Projective::from(affine)))
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        debug_assert_eq!(scalars.len(), points.len());
        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G2Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G2Projective>>(),
        );

        Self(G2Projective::msm(&points_raw, scalars_raw.as_ref()).unwrap_or_default())
    }
}

impl<'a> Add<&'a BN254G2> for BN254G2 {
    type Output = BN254G2;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl<'a> Sub<&'a BN254G2> for BN254G2 {
    type Output = BN254G2;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254G2 {
    type Output = BN254G2;

    #[inline]
    fn mul(self, rhs: &BN254Scalar) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> AddAssign<&'a BN254G2> for BN254G2 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BN254G2) {
        self.0.add_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BN254G2> for BN254G2 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BN254G2) {
        self.0.sub_assign(&rhs.0)
    }
}

impl<'a> MulAssign<&'a BN254Scalar> for BN254G2 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'a BN254Scalar) {
        self.0.mul_assign(rhs.0)
    }
}

impl Neg for BN254G2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}
