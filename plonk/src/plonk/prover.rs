use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::SparseR1CS,
    helpers::{
        compute_h, compute_lro, compute_z, eval_constraint_ordering, eval_constraints,
        eval_id_cosets, shift_z,
    },
    indexer::PublicData,
    transcript::{
        transcript_init_plonk, ChallengeSource, Challenges, FixedChallenges, TranscriptChallenges,
    },
};
use crate::poly_commit::{
    field_polynomial::FpPolynomial,
    pcs::{BatchOpeningProof, OpeningProof, PolyComScheme},
};
use ark_std::{cfg_iter, end_timer, start_timer};
use merlin::Transcript;
use prism_algebra::{prelude::*, traits::Domain};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The data structure of a Plonk proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof<F, C> {
    /// The commitments of L, R, O, H and Z.
    pub commitments: [C; 5],
    /// The evaluations of L, R, O, H and Z at zeta.
    pub lrohz: [F; 5],
    /// The evaluation of Z at zeta * omega.
    pub z_shift: F,
    /// The opening of L, R, O, H and Z at zeta, bundled with `v_bundle`.
    pub batch_openings: BatchOpeningProof<F, C>,
    /// The opening of Z at zeta * omega.
    pub opening_z_shift: OpeningProof<F, C>,
}

/// The type of the Plonk proof with a specific polynomial commitment scheme.
pub type PlonkPf<PCS> = Proof<<PCS as PolyComScheme>::Field, <PCS as PolyComScheme>::Commitment>;

/// PLONK Prover: it produces a proof that `assignment` satisfies the constraint system `cs`,
/// with the challenges squeezed from `transcript`.
/// The verifier must use a transcript with the same state as the prover.
/// # Example
/// ```
/// use prism_plonk::plonk::{
///     constraint_system::SparseR1CS,
///     indexer::indexer,
///     prover::prove,
/// };
/// use prism_plonk::poly_commit::kzg_poly_com::KZGCommitmentSchemeBN254;
/// use merlin::Transcript;
/// use rand_chacha::ChaChaRng;
/// use prism_algebra::{prelude::*, bn254::BN254Scalar};
///
/// let mut prng = ChaChaRng::from_seed([0u8; 32]);
/// let pcs = KZGCommitmentSchemeBN254::new(16, &mut prng);
/// let mut cs = SparseR1CS::new();
///
/// // circuit x_0 + x_1 = x_2
/// let one = BN254Scalar::one();
/// let two = one.add(&one);
/// let three = two.add(&one);
/// let var_one = cs.new_var();
/// let var_two = cs.new_var();
/// let var_three = cs.new_var();
/// cs.insert_add_gate(var_one, var_two, var_three).unwrap();
/// cs.insert_constant_gate(var_three, three).unwrap();
///
/// let assignment = vec![BN254Scalar::zero(), one, two, three];
/// let public_data = indexer(&cs, &pcs).unwrap();
///
/// let mut transcript = Transcript::new(b"Test");
/// let proof = prove(&mut transcript, &public_data, &cs, &assignment).unwrap();
/// assert_eq!(proof.batch_openings.claimed_values.len(), 5);
/// ```
pub fn prove<PCS: PolyComScheme>(
    transcript: &mut Transcript,
    public_data: &PublicData<'_, PCS>,
    cs: &SparseR1CS<PCS::Field>,
    assignment: &[PCS::Field],
) -> Result<PlonkPf<PCS>>
where
    PCS::Field: Domain,
{
    transcript_init_plonk(transcript, public_data);
    let mut source = TranscriptChallenges::new(transcript, public_data.domain_num.cardinality);
    prove_with_source(&mut source, public_data, cs, assignment)
}

/// PLONK Prover with caller-provided challenges, e.g. `Challenges::fixed()`.
pub fn prove_with_challenges<PCS: PolyComScheme>(
    public_data: &PublicData<'_, PCS>,
    cs: &SparseR1CS<PCS::Field>,
    assignment: &[PCS::Field],
    challenges: &Challenges<PCS::Field>,
) -> Result<PlonkPf<PCS>>
where
    PCS::Field: Domain,
{
    let mut source = FixedChallenges(*challenges);
    prove_with_source(&mut source, public_data, cs, assignment)
}

fn prove_with_source<PCS, S>(
    source: &mut S,
    public_data: &PublicData<'_, PCS>,
    cs: &SparseR1CS<PCS::Field>,
    assignment: &[PCS::Field],
) -> Result<PlonkPf<PCS>>
where
    PCS: PolyComScheme,
    PCS::Field: Domain,
    S: ChallengeSource<PCS::Field, PCS::Commitment>,
{
    let pcs = public_data.pcs;
    let domain = &public_data.domain_num;
    let n = domain.cardinality;
    if cs.domain_size() != n || public_data.domain_h.cardinality != 4 * n {
        return Err(PlonkError::FuncParamsError);
    }
    if pcs.max_degree() + 1 < 4 * n {
        return Err(PlonkError::SetupError);
    }

    #[cfg(feature = "debug")]
    cs.check_solution(assignment)?;

    let prover_timer = start_timer!(|| format!("Plonk::Prover, {} gates", cs.size()));
    let commit = |poly: &FpPolynomial<PCS::Field>| {
        pcs.commit(poly).map_err(|_| PlonkError::CommitmentError)
    };

    // 1. build the wire polynomials and commit
    let lro_timer = start_timer!(|| "Round 1: wire polynomials");
    let lro = compute_lro(assignment, cs, n)?;
    let [l_poly, r_poly, o_poly] = [
        domain.interpolate(&lro[0])?,
        domain.interpolate(&lro[1])?,
        domain.interpolate(&lro[2])?,
    ];
    let cm_l = commit(&l_poly)?;
    let cm_r = commit(&r_poly)?;
    let cm_o = commit(&o_poly)?;
    end_timer!(lro_timer);

    // 2. get challenge gamma
    let gamma = source.gamma(&[cm_l.clone(), cm_r.clone(), cm_o.clone()]);

    // 3. build the permutation accumulator and commit
    let z_timer = start_timer!(|| "Round 2: z polynomial");
    let z_evals = compute_z(public_data, &lro, &gamma)?;
    #[cfg(feature = "debug")]
    {
        if !crate::plonk::helpers::z_telescopes(public_data, &lro, &z_evals, &gamma)? {
            return Err(PlonkError::ProofErrorInvalidWitness);
        }
    }
    let z_poly = domain.interpolate(&z_evals)?;
    let zu_poly = domain.interpolate(&shift_z(&z_evals))?;
    let cm_z = commit(&z_poly)?;
    end_timer!(z_timer);

    // 4. get challenge alpha
    let alpha = source.alpha(&cm_z);

    // 5. build the quotient on the odd cosets of the 4N domain and commit
    let h_timer = start_timer!(|| "Round 3: h polynomial");
    let coset_timer = start_timer!(|| "Evaluate on cosets");
    let polys = vec![
        &public_data.ql,
        &public_data.qr,
        &public_data.qm,
        &public_data.qo,
        &public_data.qk,
        &public_data.cs1,
        &public_data.cs2,
        &public_data.cs3,
        &l_poly,
        &r_poly,
        &o_poly,
        &z_poly,
        &zu_poly,
    ];
    let cosets = cfg_iter!(polys)
        .map(|p| domain.evaluate_cosets(p))
        .collect::<Result<Vec<_>>>()?;
    end_timer!(coset_timer);
    let [ql, qr, qm, qo, qk, s1, s2, s3, l, r, o, z, zu] = [
        &cosets[0],
        &cosets[1],
        &cosets[2],
        &cosets[3],
        &cosets[4],
        &cosets[5],
        &cosets[6],
        &cosets[7],
        &cosets[8],
        &cosets[9],
        &cosets[10],
        &cosets[11],
        &cosets[12],
    ];

    let constraints = eval_constraints([ql, qr, qm, qo, qk], [l, r, o])?;
    let id = eval_id_cosets(domain);
    let ordering = eval_constraint_ordering(
        [l, r, o],
        z,
        zu,
        [s1, s2, s3],
        &id,
        &public_data.shifters,
        &gamma,
    )?;
    let h_poly = compute_h(
        domain,
        &public_data.domain_h,
        &constraints,
        &ordering,
        &alpha,
    )?;
    let cm_h = commit(&h_poly)?;
    end_timer!(h_timer);

    // 6. get challenge zeta
    let zeta = source.zeta(&cm_h);

    // 7. evaluate at zeta and zeta * omega
    let eval_timer = start_timer!(|| "Round 4: evaluations");
    let lrohz_polys = [&l_poly, &r_poly, &o_poly, &h_poly, &z_poly];
    let lrohz = [
        pcs.eval(lrohz_polys[0], &zeta),
        pcs.eval(lrohz_polys[1], &zeta),
        pcs.eval(lrohz_polys[2], &zeta),
        pcs.eval(lrohz_polys[3], &zeta),
        pcs.eval(lrohz_polys[4], &zeta),
    ];
    let zeta_omega = zeta.mul(&domain.generator);
    let z_shift = pcs.eval(&z_poly, &zeta_omega);
    end_timer!(eval_timer);

    // 8. get challenge v_bundle
    let mut evals = lrohz.to_vec();
    evals.push(z_shift);
    let v_bundle = source.v_bundle(&evals);

    // 9. open
    let open_timer = start_timer!(|| "Round 5: openings");
    let batch_openings = pcs.batch_open_single_point(&zeta, &v_bundle, &lrohz_polys)?;
    let opening_z_shift = pcs.open(&zeta_omega, &z_poly)?;
    end_timer!(open_timer);

    end_timer!(prover_timer);
    Ok(Proof {
        commitments: [cm_l, cm_r, cm_o, cm_h, cm_z],
        lrohz,
        z_shift,
        batch_openings,
        opening_z_shift,
    })
}
