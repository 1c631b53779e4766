//! The crate wraps the BN254 scalar field, its pairing groups and the pairing itself behind
//! the small set of traits consumed by the Prism proof system.
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unused_import_braces, trivial_casts)]
#![deny(stable_features, non_shorthand_field_patterns)]
#![deny(unused_attributes, unused_imports, unused_mut, missing_docs)]
#![deny(renamed_and_removed_lints, unused_allocation)]
#![deny(unused_comparisons, bare_trait_objects, unused_must_use)]
#![forbid(unsafe_code)]
#![allow(clippy::upper_case_acronyms)]

/// The BN254 scalar field, groups and pairing.
pub mod bn254;
/// The error types.
pub mod errors;
/// Module for the commonly used imports.
pub mod prelude;
/// Module for test rngs.
pub mod rand_helper;
/// Module for serialization of the algebra types.
pub mod serialization;
/// Module for traits.
pub mod traits;
/// Module for utils.
pub mod utils;

pub use ark_std::{One, UniformRand, Zero};
