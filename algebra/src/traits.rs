use crate::prelude::*;
use ark_ff::FftField;
pub use ark_ff::LegendreSymbol;
use ark_std::fmt::Debug;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return multiplicative generator of order r,
    /// which is also required to be a quadratic nonresidue
    fn multiplicative_generator() -> Self;

    /// Return the little-endian byte representations of the field size
    fn get_field_size_le_bytes() -> Vec<u8> {
        Self::get_field_size_biguint().to_bytes_le()
    }

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from bytes, rejecting non-canonical encodings
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// Return the legendre symbol of the field element
    fn legendre(&self) -> LegendreSymbol;

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut base = *self;
        let mut result = Self::one();
        for exp_u64 in exponent {
            let mut e = *exp_u64;
            // we have to square the base for 64 times.
            for _ in 0..64 {
                if e % 2 == 1 {
                    result.mul_assign(&base);
                }
                base = base.mul(&base);
                e >>= 1;
            }
        }
        result
    }
}

/// Invert every element of `values` in place with a single field inversion.
///
/// Fails with `GroupInversionError` if any element is zero, leaving `values` untouched.
pub fn batch_inversion<S: Scalar>(values: &mut [S]) -> Result<()> {
    let mut prefix = Vec::with_capacity(values.len());
    let mut acc = S::one();
    for v in values.iter() {
        if v.is_zero() {
            return Err(AlgebraError::GroupInversionError);
        }
        prefix.push(acc);
        acc.mul_assign(v);
    }

    let mut acc_inv = acc.inv()?;
    for (v, p) in values.iter_mut().zip(prefix.into_iter()).rev() {
        let inv = acc_inv.mul(&p);
        acc_inv.mul_assign(&*v);
        *v = inv;
    }
    Ok(())
}

/// The trait for domain.
pub trait Domain: Scalar {
    /// The field that is able to be used in FFTs.
    type Field: FftField;

    /// Return fft field.
    fn get_field(&self) -> Self::Field;

    /// Sample a domain based on a fft field.
    fn from_field(field: Self::Field) -> Self;
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Serialize
    + Neg
    + for<'de> Deserialize<'de>
    + Sync
    + Send
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// Return the doubling of the group element
    fn double(&self) -> Self;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Compute the multiscalar multiplication
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&(**p).mul(*s)))
    }
}

/// The trait for a pair of groups for pairing
pub trait Pairing {
    /// The scalar type
    type ScalarField: Scalar;

    /// The first group
    type G1: Group<ScalarType = Self::ScalarField>;

    /// The second group
    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group
    type Gt: Group<ScalarType = Self::ScalarField>;

    /// The pairing operation
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// The product of pairing operation
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt;
}

#[cfg(test)]
pub(crate) mod group_tests {
    use crate::prelude::*;
    use crate::traits::batch_inversion;

    pub(crate) fn test_scalar_operations<S: Scalar>() {
        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = a.add(&b);
        let d = S::from(100u32);
        assert_eq!(c, d);

        let mut x = S::from(0u32);
        x.add_assign(&a);
        x.add_assign(&b);
        assert_eq!(x, d);

        let a = S::from(10u32);
        let b = S::from(40u32);
        let c = a.mul(&b);
        let d = S::from(400u32);
        assert_eq!(c, d);

        let a = S::from(0xFFFFFFFFu32);
        let b = S::from(1u32);
        let c = a.add(&b);
        let d = S::from(0x100000000u64);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = S::from(60u32);
        let c = b.sub(&a);
        let d = S::from(20u32);
        assert_eq!(c, d);

        let a = S::from(40u32);
        let b = a.neg();
        let c = b.add(&a);
        assert_eq!(c, S::zero());

        let a = S::from(40u32);
        let b = a.inv().unwrap();
        assert_eq!(b.mul(&a), S::one());
        assert!(S::zero().inv().is_err());

        let a = S::from(3u32);
        let c = a.pow(&[20]);
        let d = S::from(3486784401u64);
        assert_eq!(c, d);
        assert_eq!(a.square(), S::from(9u32));

        let minus_one = S::get_field_size_biguint() - 1u32;
        assert_eq!(
            S::from_bytes(&minus_one.to_bytes_le()).unwrap(),
            S::one().neg()
        );
    }

    pub(crate) fn test_scalar_serialization<S: Scalar>() {
        let a = S::from(100u32);
        let bytes = a.to_bytes();
        assert_eq!(bytes.len(), S::bytes_len());
        let b = S::from_bytes(bytes.as_slice()).unwrap();
        assert_eq!(a, b);

        // the modulus itself is not a canonical encoding
        assert!(S::from_bytes(&S::get_field_size_le_bytes()).is_err());
    }

    pub(crate) fn test_batch_inversion<S: Scalar>() {
        let mut prng = test_rng();
        let values: Vec<S> = (0..17).map(|_| S::random(&mut prng)).collect();
        let mut inverted = values.clone();
        batch_inversion(&mut inverted).unwrap();
        for (v, i) in values.iter().zip(inverted.iter()) {
            assert_eq!(v.mul(i), S::one());
        }

        let mut with_zero = vec![S::one(), S::zero(), S::from(7u32)];
        assert_eq!(
            batch_inversion(&mut with_zero),
            Err(AlgebraError::GroupInversionError)
        );
        assert_eq!(with_zero[2], S::from(7u32));
    }

    pub(crate) fn test_multi_exp<G: Group>() {
        let g = G::multi_exp(&[], &[]);
        assert_eq!(g, G::get_identity());

        let g1 = G::get_base();
        let zero = G::ScalarType::from(0u32);
        let g = G::multi_exp(&[&zero], &[&g1]);
        assert_eq!(g, G::get_identity());

        let g1 = G::get_base();
        let g2 = g1.add(&g1);
        let g3 = g1.mul(&G::ScalarType::from(500u32));
        let thousand = G::ScalarType::from(1000u32);
        let two = G::ScalarType::from(2u32);
        let three = G::ScalarType::from(3u32);
        let g = G::multi_exp(&[&thousand, &two, &three], &[&g1, &g2, &g3]);
        let expected = G::get_base().mul(&G::ScalarType::from((1000 + 4 + 1500) as u32));
        assert_eq!(g, expected);
    }
}
