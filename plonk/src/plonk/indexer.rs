use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{SparseR1CS, N_WIRES_PER_GATE},
    domain::FftDomain,
    evaluations::Evaluations,
};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use ark_std::{end_timer, start_timer};
use prism_algebra::{prelude::*, traits::Domain};

/// Depth of the size-N domain: its finer generator is a primitive 8N-th root of unity.
pub const DOMAIN_NUM_DEPTH: u32 = 3;

/// Depth of the size-4N domain, sharing the finer generator of the size-N domain.
pub const DOMAIN_H_DEPTH: u32 = 1;

/// The preprocessed circuit shared by every proof for it.
#[derive(Debug)]
pub struct PublicData<'a, PCS: PolyComScheme> {
    /// Number of gates before padding.
    pub cs_size: usize,
    /// The domain of size N.
    pub domain_num: FftDomain<PCS::Field>,
    /// The domain of size 4N, used for the quotient.
    pub domain_h: FftDomain<PCS::Field>,
    /// Left selector.
    pub ql: FpPolynomial<PCS::Field>,
    /// Right selector.
    pub qr: FpPolynomial<PCS::Field>,
    /// Multiplication selector.
    pub qm: FpPolynomial<PCS::Field>,
    /// Output selector.
    pub qo: FpPolynomial<PCS::Field>,
    /// Constant selector.
    pub qk: FpPolynomial<PCS::Field>,
    /// Encoded permutation of the left wires, Lagrange form.
    pub ls1: Evaluations<PCS::Field>,
    /// Encoded permutation of the right wires, Lagrange form.
    pub ls2: Evaluations<PCS::Field>,
    /// Encoded permutation of the output wires, Lagrange form.
    pub ls3: Evaluations<PCS::Field>,
    /// `ls1` in coefficient form.
    pub cs1: FpPolynomial<PCS::Field>,
    /// `ls2` in coefficient form.
    pub cs2: FpPolynomial<PCS::Field>,
    /// `ls3` in coefficient form.
    pub cs3: FpPolynomial<PCS::Field>,
    /// The raw permutation over `3N` wire positions.
    pub permutation: Vec<usize>,
    /// `[k1, k2]`: the right wires live on `k1 * H`, the output wires on `k2 * H`.
    pub shifters: [PCS::Field; 2],
    /// The commitments of `[ql, qr, qm, qo, qk]`.
    pub cm_q_vec: Vec<PCS::Commitment>,
    /// The commitments of `[cs1, cs2, cs3]`.
    pub cm_s_vec: Vec<PCS::Commitment>,
    /// The commitment scheme.
    pub pcs: &'a PCS,
}

impl<'a, PCS: PolyComScheme> PublicData<'a, PCS> {
    /// Return the selectors `[ql, qr, qm, qo, qk]`.
    pub fn selectors(&self) -> [&FpPolynomial<PCS::Field>; 5] {
        [&self.ql, &self.qr, &self.qm, &self.qo, &self.qk]
    }

    /// Return the permutation polynomials `[cs1, cs2, cs3]` in coefficient form.
    pub fn permutation_polys(&self) -> [&FpPolynomial<PCS::Field>; N_WIRES_PER_GATE] {
        [&self.cs1, &self.cs2, &self.cs3]
    }
}

/// Return the shifters `[g, g^2]` labelling the cosets of the right and output wires,
/// `g` being the multiplicative generator of the field.
///
/// The cosets `H`, `g * H` and `g^2 * H` of the order `n` subgroup `H` are disjoint
/// iff `g^n != 1` and `g^(2n) != 1`.
pub fn coset_shifters<F: Scalar>(n: usize) -> Result<[F; 2]> {
    let k1 = F::multiplicative_generator();
    let k2 = k1.square();
    let n = n as u64;
    if k1.pow(&[n]) == F::one() || k2.pow(&[n]) == F::one() {
        return Err(PlonkError::SetupError);
    }
    Ok([k1, k2])
}

/// Encode the permutation value, from a wire position `column * n + row` to the
/// element `k_column * generator^row`, with `k_0 = 1`.
pub fn encode_perm_to_group<F: Domain>(
    domain: &FftDomain<F>,
    perm: &[usize],
    shifters: &[F; 2],
) -> Vec<F> {
    let n = domain.cardinality;
    let group = (0..n).map(|i| domain.element(i)).collect::<Vec<_>>();
    perm.iter()
        .map(|pi| match pi / n {
            0 => group[pi % n],
            c => shifters[c - 1].mul(&group[pi % n]),
        })
        .collect()
}

/// Run the Plonk indexer: derive the public data of `cs` for proving with `pcs`.
pub fn indexer<'a, PCS: PolyComScheme>(
    cs: &SparseR1CS<PCS::Field>,
    pcs: &'a PCS,
) -> Result<PublicData<'a, PCS>>
where
    PCS::Field: Domain,
{
    let indexer_time = start_timer!(|| format!("Indexer, {} gates", cs.size()));

    let n = cs.domain_size();
    // H has degree below 4N
    if pcs.max_degree() + 1 < 4 * n {
        return Err(PlonkError::SetupError);
    }
    let domain_num = FftDomain::new(n, DOMAIN_NUM_DEPTH)?;
    let domain_h = FftDomain::new(4 * n, DOMAIN_H_DEPTH)?;
    if domain_num.finer_generator != domain_h.finer_generator {
        return Err(PlonkError::SetupError);
    }
    let shifters = coset_shifters::<PCS::Field>(n)?;

    // Step 1: selectors, padded with zero.
    let selectors_time = start_timer!(|| "Selectors");
    let mut columns = vec![vec![PCS::Field::zero(); n]; 5];
    for (row, gate) in cs.rows().enumerate() {
        for (column, q) in [gate.ql, gate.qr, gate.qm, gate.qo, gate.qk].iter().enumerate() {
            columns[column][row] = *q;
        }
    }
    let mut q_polys = Vec::with_capacity(5);
    for column in columns.into_iter() {
        q_polys.push(domain_num.interpolate(&Evaluations::new(column))?);
    }
    let cm_q_vec = q_polys
        .iter()
        .map(|q| pcs.commit(q))
        .collect::<Result<Vec<_>>>()?;
    end_timer!(selectors_time);

    // Step 2: permutation polynomials.
    let perm_time = start_timer!(|| "Permutation");
    let permutation = cs.compute_permutation(n)?;
    let encoded = encode_perm_to_group(&domain_num, &permutation, &shifters);
    let mut ls = Vec::with_capacity(N_WIRES_PER_GATE);
    let mut cs_polys = Vec::with_capacity(N_WIRES_PER_GATE);
    for chunk in encoded.chunks(n) {
        let evals = Evaluations::new(chunk.to_vec());
        cs_polys.push(domain_num.interpolate(&evals)?);
        ls.push(evals);
    }
    let cm_s_vec = cs_polys
        .iter()
        .map(|s| pcs.commit(s))
        .collect::<Result<Vec<_>>>()?;
    end_timer!(perm_time);

    let [ql, qr, qm, qo, qk]: [FpPolynomial<PCS::Field>; 5] =
        q_polys.try_into().map_err(|_| PlonkError::SetupError)?;
    let [ls1, ls2, ls3]: [Evaluations<PCS::Field>; N_WIRES_PER_GATE] =
        ls.try_into().map_err(|_| PlonkError::SetupError)?;
    let [cs1, cs2, cs3]: [FpPolynomial<PCS::Field>; N_WIRES_PER_GATE] =
        cs_polys.try_into().map_err(|_| PlonkError::SetupError)?;

    let public_data = PublicData {
        cs_size: cs.size(),
        ql,
        qr,
        qm,
        qo,
        qk,
        domain_num,
        domain_h,
        ls1,
        ls2,
        ls3,
        cs1,
        cs2,
        cs3,
        permutation,
        shifters,
        cm_q_vec,
        cm_s_vec,
        pcs,
    };
    end_timer!(indexer_time);
    Ok(public_data)
}
