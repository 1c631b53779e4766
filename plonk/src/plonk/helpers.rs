use crate::errors::{PlonkError, Result};
use crate::plonk::{
    constraint_system::{SparseR1CS, N_WIRES_PER_GATE},
    domain::{FftDomain, NUM_COSETS},
    evaluations::{CosetEvaluations, Evaluations},
    indexer::PublicData,
};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use ark_std::cfg_into_iter;
use prism_algebra::{prelude::*, traits::batch_inversion, traits::Domain};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Lay out the solved `assignment` on the left, right and output wires of the `n` rows,
/// constraints first, then assertions. Rows past the last gate repeat `assignment[0]`.
pub fn compute_lro<F: Scalar>(
    assignment: &[F],
    cs: &SparseR1CS<F>,
    n: usize,
) -> Result<[Evaluations<F>; N_WIRES_PER_GATE]> {
    if assignment.is_empty() || assignment.len() < cs.num_vars || cs.size() > n {
        return Err(PlonkError::FuncParamsError);
    }

    let dummy = assignment[0];
    let mut l = vec![dummy; n];
    let mut r = vec![dummy; n];
    let mut o = vec![dummy; n];
    for (i, gate) in cs.rows().enumerate() {
        let get = |var: usize| {
            assignment
                .get(var)
                .copied()
                .ok_or(PlonkError::ProofErrorInvalidWitness)
        };
        l[i] = get(gate.l)?;
        r[i] = get(gate.r)?;
        o[i] = get(gate.o)?;
    }
    Ok([
        Evaluations::new(l),
        Evaluations::new(r),
        Evaluations::new(o),
    ])
}

/// For each row `i`, the numerator
/// `(l_i + w^i + gamma)(r_i + k1 * w^i + gamma)(o_i + k2 * w^i + gamma)`
/// and the denominator `(l_i + s1_i + gamma)(r_i + s2_i + gamma)(o_i + s3_i + gamma)`
/// of the permutation accumulator ratio.
fn permutation_factors<PCS: PolyComScheme>(
    public_data: &PublicData<'_, PCS>,
    lro: &[Evaluations<PCS::Field>; N_WIRES_PER_GATE],
    gamma: &PCS::Field,
) -> Result<(Vec<PCS::Field>, Vec<PCS::Field>)>
where
    PCS::Field: Domain,
{
    let n = public_data.domain_num.cardinality;
    let ls = [&public_data.ls1, &public_data.ls2, &public_data.ls3];
    if lro.iter().chain(ls.iter().copied()).any(|e| e.len() != n) {
        return Err(PlonkError::FuncParamsError);
    }
    let [k1, k2] = public_data.shifters;
    let ks = [PCS::Field::one(), k1, k2];

    let mut numerators = Vec::with_capacity(n);
    let mut denominators = Vec::with_capacity(n);
    let mut omega_i = PCS::Field::one();
    for i in 0..n {
        let mut num = PCS::Field::one();
        let mut den = PCS::Field::one();
        for ((wire, s), k) in lro.iter().zip(ls.iter()).zip(ks.iter()) {
            let f_plus_gamma = wire.values[i].add(gamma);
            num.mul_assign(&f_plus_gamma.add(&k.mul(&omega_i)));
            den.mul_assign(&f_plus_gamma.add(&s.values[i]));
        }
        numerators.push(num);
        denominators.push(den);
        omega_i.mul_assign(&public_data.domain_num.generator);
    }
    Ok((numerators, denominators))
}

/// Compute the permutation accumulator in Lagrange form:
/// `Z(1) = 1` and `Z(w^(i+1)) = Z(w^i) * num_i / den_i`.
pub fn compute_z<PCS: PolyComScheme>(
    public_data: &PublicData<'_, PCS>,
    lro: &[Evaluations<PCS::Field>; N_WIRES_PER_GATE],
    gamma: &PCS::Field,
) -> Result<Evaluations<PCS::Field>>
where
    PCS::Field: Domain,
{
    let (numerators, mut denominators) = permutation_factors(public_data, lro, gamma)?;
    batch_inversion(&mut denominators).map_err(|_| PlonkError::DivisionByZero)?;

    let n = numerators.len();
    let mut z = Vec::with_capacity(n);
    let mut prev = PCS::Field::one();
    z.push(prev);
    for (num, den_inv) in numerators.iter().zip(denominators.iter()).take(n - 1) {
        prev.mul_assign(&num.mul(den_inv));
        z.push(prev);
    }
    Ok(Evaluations::new(z))
}

/// Check that the last step of the accumulator brings it back to one, which holds iff the
/// wires respect the copy constraints (w.h.p. over `gamma`).
pub fn z_telescopes<PCS: PolyComScheme>(
    public_data: &PublicData<'_, PCS>,
    lro: &[Evaluations<PCS::Field>; N_WIRES_PER_GATE],
    z: &Evaluations<PCS::Field>,
    gamma: &PCS::Field,
) -> Result<bool>
where
    PCS::Field: Domain,
{
    let (numerators, denominators) = permutation_factors(public_data, lro, gamma)?;
    let last = numerators.len() - 1;
    let z_last = z.values.get(last).ok_or(PlonkError::FuncParamsError)?;
    Ok(z_last.mul(&numerators[last]) == denominators[last])
}

/// Rotate the accumulator by one row: `Zu[i] = Z[(i + 1) mod N]`, i.e. `Zu(X) = Z(w * X)`.
pub fn shift_z<F: Scalar>(z: &Evaluations<F>) -> Evaluations<F> {
    let mut values = z.values.clone();
    if !values.is_empty() {
        values.rotate_left(1);
    }
    Evaluations::new(values)
}

fn check_lengths<F>(evals: &[&CosetEvaluations<F>]) -> Result<usize> {
    let len = evals.first().map_or(0, |e| e.values.len());
    if evals.iter().any(|e| e.values.len() != len) {
        return Err(PlonkError::FuncParamsError);
    }
    Ok(len)
}

/// Evaluate the gates pointwise: `ql * l + qr * r + qm * l * r + qo * o + qk`.
pub fn eval_constraints<F: Scalar>(
    selectors: [&CosetEvaluations<F>; 5],
    lro: [&CosetEvaluations<F>; N_WIRES_PER_GATE],
) -> Result<CosetEvaluations<F>> {
    let [ql, qr, qm, qo, qk] = selectors;
    let [l, r, o] = lro;
    let len = check_lengths(&[ql, qr, qm, qo, qk, l, r, o])?;

    let values = cfg_into_iter!(0..len)
        .map(|i| {
            let (l, r, o) = (l.values[i], r.values[i], o.values[i]);
            ql.values[i].mul(&l)
                + qr.values[i].mul(&r)
                + qm.values[i].mul(&l).mul(&r)
                + qo.values[i].mul(&o)
                + qk.values[i]
        })
        .collect();
    Ok(CosetEvaluations::new(values))
}

/// The identity polynomial `X` on the odd cosets: `id[4i + j] = w^i * u^(2j + 1)`.
pub fn eval_id_cosets<F: Domain>(domain: &FftDomain<F>) -> CosetEvaluations<F> {
    let u = domain.finer_generator;
    let u_sq = u.square();
    let mut shifts = Vec::with_capacity(NUM_COSETS);
    let mut shift = u;
    for _ in 0..NUM_COSETS {
        shifts.push(shift);
        shift.mul_assign(&u_sq);
    }

    let mut values = Vec::with_capacity(NUM_COSETS * domain.cardinality);
    let mut omega_i = F::one();
    for _ in 0..domain.cardinality {
        for s in shifts.iter() {
            values.push(omega_i.mul(s));
        }
        omega_i.mul_assign(&domain.generator);
    }
    CosetEvaluations::new(values)
}

/// Evaluate the permutation argument pointwise:
/// `Zu * (l + s1 + gamma)(r + s2 + gamma)(o + s3 + gamma) * L
///  - Z * (l + id + gamma)(r + k1 * id + gamma)(o + k2 * id + gamma) * L`.
///
/// The trailing `L` factor pads the degree to a multiple of N, it is not a divisor of
/// the vanishing polynomial.
#[allow(clippy::too_many_arguments)]
pub fn eval_constraint_ordering<F: Scalar>(
    lro: [&CosetEvaluations<F>; N_WIRES_PER_GATE],
    z: &CosetEvaluations<F>,
    zu: &CosetEvaluations<F>,
    sigmas: [&CosetEvaluations<F>; N_WIRES_PER_GATE],
    id: &CosetEvaluations<F>,
    shifters: &[F; 2],
    gamma: &F,
) -> Result<CosetEvaluations<F>> {
    let [l, r, o] = lro;
    let [s1, s2, s3] = sigmas;
    let len = check_lengths(&[l, r, o, z, zu, s1, s2, s3, id])?;
    let [k1, k2] = shifters;

    let values = cfg_into_iter!(0..len)
        .map(|i| {
            let l_gamma = l.values[i].add(gamma);
            let r_gamma = r.values[i].add(gamma);
            let o_gamma = o.values[i].add(gamma);
            let x = id.values[i];

            let sigma_term = zu.values[i]
                .mul(&l_gamma.add(&s1.values[i]))
                .mul(&r_gamma.add(&s2.values[i]))
                .mul(&o_gamma.add(&s3.values[i]));
            let id_term = z.values[i]
                .mul(&l_gamma.add(&x))
                .mul(&r_gamma.add(&k1.mul(&x)))
                .mul(&o_gamma.add(&k2.mul(&x)));
            sigma_term.sub(&id_term).mul(&l.values[i])
        })
        .collect();
    Ok(CosetEvaluations::new(values))
}

/// Return `((u^(2j+1))^N - 1)^(-1)` for each odd coset `j`, the inverse of the vanishing
/// polynomial `X^N - 1` on the whole coset.
pub fn vanishing_inverses<F: Domain>(domain: &FftDomain<F>) -> Result<[F; NUM_COSETS]> {
    let u_n = domain.finer_generator.pow(&[domain.cardinality as u64]);
    let u_2n = u_n.square();
    let mut res = [F::zero(); NUM_COSETS];
    let mut shift_n = u_n;
    for r in res.iter_mut() {
        *r = shift_n.sub(&F::one());
        shift_n.mul_assign(&u_2n);
    }
    batch_inversion(&mut res).map_err(|_| PlonkError::DivisionByZero)?;
    Ok(res)
}

/// Compute the quotient `H = (constraints + alpha * ordering) / (X^N - 1)` from its values
/// on the odd cosets, in coefficient form.
pub fn compute_h<F: Domain>(
    domain_num: &FftDomain<F>,
    domain_h: &FftDomain<F>,
    constraints: &CosetEvaluations<F>,
    ordering: &CosetEvaluations<F>,
    alpha: &F,
) -> Result<FpPolynomial<F>> {
    let len = check_lengths(&[constraints, ordering])?;
    if len != NUM_COSETS * domain_num.cardinality || domain_h.cardinality != len {
        return Err(PlonkError::FuncParamsError);
    }
    let inverses = vanishing_inverses(domain_num)?;

    let values = cfg_into_iter!(0..len)
        .map(|i| {
            constraints.values[i]
                .add(&alpha.mul(&ordering.values[i]))
                .mul(&inverses[i % NUM_COSETS])
        })
        .collect();
    domain_h.interpolate_cosets(&CosetEvaluations::new(values))
}
