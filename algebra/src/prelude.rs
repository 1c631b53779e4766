pub use crate::errors::AlgebraError;
pub use crate::rand_helper::test_rng;
pub use crate::serialization::*;
pub use crate::traits::{Domain, Group, LegendreSymbol, Pairing, Scalar};
pub use crate::utils::*;
pub use crate::{serialize_deserialize, One, UniformRand, Zero};
pub use ark_std::{
    iter::Sum,
    marker::PhantomData,
    ops::*,
    rand::{CryptoRng, Rng, RngCore, SeedableRng},
    string::String,
    vec,
    vec::Vec,
};

pub(crate) type Result<T> = core::result::Result<T, AlgebraError>;
