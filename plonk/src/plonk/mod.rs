//! The Plonk implementation over sparse R1CS circuits.

/// Module for the constraint system.
pub mod constraint_system;

/// Module for the FFT domains.
pub mod domain;

/// Module for the Lagrange and coset evaluation vectors.
pub mod evaluations;

/// Module for help functions of the prover rounds.
pub mod helpers;

/// Module for indexer.
pub mod indexer;

/// Module for prover.
pub mod prover;

/// Module for transcript.
pub mod transcript;
