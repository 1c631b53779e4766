use crate::plonk::indexer::PublicData;
use crate::poly_commit::{
    pcs::{PolyComScheme, ToBytes},
    transcript::PolyComTranscript,
};
use merlin::Transcript;
use prism_algebra::prelude::*;

/// The verifier challenges of one proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges<F> {
    /// The evaluation point of the openings.
    pub zeta: F,
    /// Folds the openings at `zeta` into one.
    pub v_bundle: F,
    /// Offsets the wire values in the permutation argument.
    pub gamma: F,
    /// Combines the gate and permutation constraints.
    pub alpha: F,
}

impl<F: Scalar> Challenges<F> {
    /// The historical constant challenges.
    pub fn fixed() -> Self {
        Self {
            zeta: F::from(2938092839238274283u64),
            v_bundle: F::from(987545678u64),
            gamma: F::from(8278263826u64),
            alpha: F::from(25678323434u64),
        }
    }
}

/// Where the prover gets its challenges from, in protocol order.
/// Each call sees the prover messages sent since the previous one.
pub trait ChallengeSource<F, C> {
    /// After committing to the wire polynomials.
    fn gamma(&mut self, cm_lro: &[C]) -> F;

    /// After committing to the permutation accumulator.
    fn alpha(&mut self, cm_z: &C) -> F;

    /// After committing to the quotient.
    fn zeta(&mut self, cm_h: &C) -> F;

    /// After sending the evaluations at `zeta` and `zeta * omega`.
    fn v_bundle(&mut self, evals: &[F]) -> F;
}

/// Hands out the same precomputed challenges whatever the prover sends.
pub struct FixedChallenges<F>(pub Challenges<F>);

impl<F: Scalar, C> ChallengeSource<F, C> for FixedChallenges<F> {
    fn gamma(&mut self, _cm_lro: &[C]) -> F {
        self.0.gamma
    }

    fn alpha(&mut self, _cm_z: &C) -> F {
        self.0.alpha
    }

    fn zeta(&mut self, _cm_h: &C) -> F {
        self.0.zeta
    }

    fn v_bundle(&mut self, _evals: &[F]) -> F {
        self.0.v_bundle
    }
}

/// Fiat-Shamir challenges squeezed from a merlin transcript.
pub struct TranscriptChallenges<'t> {
    transcript: &'t mut Transcript,
    group_order: usize,
}

impl<'t> TranscriptChallenges<'t> {
    /// Wrap a transcript already initialized with `transcript_init_plonk`.
    /// Challenges are resampled while they fall in the subgroup of order `group_order`.
    pub fn new(transcript: &'t mut Transcript, group_order: usize) -> Self {
        Self {
            transcript,
            group_order,
        }
    }
}

impl<'t, F: Scalar, C: ToBytes> ChallengeSource<F, C> for TranscriptChallenges<'t> {
    fn gamma(&mut self, cm_lro: &[C]) -> F {
        for cm in cm_lro.iter() {
            self.transcript.append_commitment(cm);
        }
        transcript_get_challenge_field_elem(self.transcript, self.group_order, b"gamma")
    }

    fn alpha(&mut self, cm_z: &C) -> F {
        self.transcript.append_commitment(cm_z);
        transcript_get_challenge_field_elem(self.transcript, self.group_order, b"alpha")
    }

    fn zeta(&mut self, cm_h: &C) -> F {
        self.transcript.append_commitment(cm_h);
        transcript_get_challenge_field_elem(self.transcript, self.group_order, b"zeta")
    }

    fn v_bundle(&mut self, evals: &[F]) -> F {
        for eval in evals.iter() {
            self.transcript.append_field_elem(eval);
        }
        transcript_get_challenge_field_elem(self.transcript, self.group_order, b"v_bundle")
    }
}

/// Initialize the transcript when compute PLONK proof.
pub fn transcript_init_plonk<PCS: PolyComScheme>(
    transcript: &mut Transcript,
    public_data: &PublicData<'_, PCS>,
) {
    transcript.append_message(b"New Domain", b"PLONK");

    transcript.append_u64(b"CS size", public_data.cs_size as u64);
    transcript.append_message(b"field size", &PCS::Field::get_field_size_le_bytes());
    for q in public_data.cm_q_vec.iter() {
        transcript.append_commitment(q);
    }
    for p in public_data.cm_s_vec.iter() {
        transcript.append_commitment(p);
    }
    transcript.append_field_elem(&public_data.domain_num.generator);
    for k in public_data.shifters.iter() {
        transcript.append_field_elem(k);
    }
}

/// Return the challenge result, squeezing again while it falls in the subgroup of
/// order `group_order`.
pub(crate) fn transcript_get_challenge_field_elem<F: Scalar>(
    transcript: &mut Transcript,
    group_order: usize,
    label: &'static [u8],
) -> F {
    loop {
        let elem: F = transcript.get_challenge_field_elem(label);
        // elem should not be root-of-unity
        if elem.pow(&[group_order as u64]) != F::one() {
            return elem;
        }
    }
}
