//! A PLONK prover over BN254 with KZG polynomial commitments.
#![deny(warnings)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// The error types.
pub mod errors;
/// The Plonk constraint system, indexer and prover.
pub mod plonk;
/// Polynomials and the KZG polynomial commitment scheme.
pub mod poly_commit;
