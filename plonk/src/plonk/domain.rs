use crate::errors::{PlonkError, Result};
use crate::plonk::evaluations::{CosetEvaluations, Evaluations};
use crate::poly_commit::field_polynomial::FpPolynomial;
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use ark_std::{cfg_chunks_mut, cfg_into_iter, cfg_iter_mut};
use prism_algebra::{prelude::*, traits::Domain};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of odd cosets of the 4N domain used for the quotient.
pub const NUM_COSETS: usize = 4;

/// Butterfly ordering of the radix-2 transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decimation {
    /// Decimation in time (Cooley-Tukey): bit-reversed input, natural output.
    DIT,
    /// Decimation in frequency (Gentleman-Sande): natural input, bit-reversed output.
    DIF,
}

/// Multiplicative subgroup of size `cardinality` together with a finer root of unity
/// used to shift evaluations onto cosets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FftDomain<F> {
    /// Size of the subgroup, a power of two.
    pub cardinality: usize,
    /// Inverse of `cardinality` in the field.
    pub cardinality_inv: F,
    /// log2 of `cardinality`.
    pub log: u32,
    /// Primitive `cardinality`-th root of unity.
    pub generator: F,
    /// Inverse of `generator`.
    pub generator_inv: F,
    /// Primitive `cardinality * 2^depth`-th root of unity,
    /// with `finer_generator^(2^depth) == generator`.
    pub finer_generator: F,
    /// Inverse of `finer_generator`.
    pub finer_generator_inv: F,
    /// Number of halvings between `generator` and `finer_generator`.
    pub depth: u32,
    twiddles: Vec<F>,
    twiddles_inv: Vec<F>,
}

impl<F: Domain> FftDomain<F> {
    /// Build the domain of size `cardinality` whose coset shifts are powers of a
    /// primitive `cardinality * 2^depth`-th root of unity.
    pub fn new(cardinality: usize, depth: u32) -> Result<Self> {
        let log = log2_exact(cardinality).ok_or(PlonkError::GroupNotFound(cardinality))?;
        let finer_cardinality = 1usize
            .checked_shl(depth)
            .and_then(|m| cardinality.checked_mul(m))
            .ok_or(PlonkError::GroupNotFound(cardinality))?;

        let domain = Radix2EvaluationDomain::<F::Field>::new(cardinality)
            .filter(|d| d.size() == cardinality)
            .ok_or(PlonkError::GroupNotFound(cardinality))?;
        let finer = Radix2EvaluationDomain::<F::Field>::new(finer_cardinality)
            .filter(|d| d.size() == finer_cardinality)
            .ok_or(PlonkError::GroupNotFound(finer_cardinality))?;

        let generator = F::from_field(domain.group_gen);
        let generator_inv = F::from_field(domain.group_gen_inv);
        let cardinality_inv = F::from(cardinality as u64).inv()?;

        Ok(Self {
            cardinality,
            cardinality_inv,
            log,
            generator,
            generator_inv,
            finer_generator: F::from_field(finer.group_gen),
            finer_generator_inv: F::from_field(finer.group_gen_inv),
            depth,
            twiddles: powers(&generator, cardinality / 2),
            twiddles_inv: powers(&generator_inv, cardinality / 2),
        })
    }

    /// Return `generator^i`.
    pub fn element(&self, i: usize) -> F {
        self.generator.pow(&[i as u64])
    }

    /// Return the coset shift `finer_generator^coset`.
    pub fn coset_shift(&self, coset: u64) -> F {
        self.finer_generator.pow(&[coset])
    }

    /// Evaluate the coefficients in `data` on the coset `finer_generator^coset * <generator>`.
    ///
    /// With `Decimation::DIF` the coefficients are in natural order and the values come
    /// out bit-reversed. With `Decimation::DIT` the coefficients must already be
    /// bit-reversed and the values come out in natural order.
    pub fn fft(&self, data: &mut [F], decimation: Decimation, coset: u64) {
        debug_assert_eq!(data.len(), self.cardinality);
        let shift = self.coset_shift(coset);
        match decimation {
            Decimation::DIF => {
                if coset != 0 {
                    distribute_powers(data, &shift);
                }
                dif_butterflies(data, &self.twiddles);
            }
            Decimation::DIT => {
                if coset != 0 {
                    distribute_powers_bit_reversed(data, &shift, self.log);
                }
                dit_butterflies(data, &self.twiddles);
            }
        }
    }

    /// Inverse of `fft` on the same coset.
    ///
    /// With `Decimation::DIF` the values are in natural order and the coefficients come
    /// out bit-reversed. With `Decimation::DIT` the values must be bit-reversed and the
    /// coefficients come out in natural order.
    pub fn fft_inverse(&self, data: &mut [F], decimation: Decimation, coset: u64) {
        debug_assert_eq!(data.len(), self.cardinality);
        match decimation {
            Decimation::DIF => dif_butterflies(data, &self.twiddles_inv),
            Decimation::DIT => dit_butterflies(data, &self.twiddles_inv),
        }

        let inv = self.cardinality_inv;
        cfg_iter_mut!(data).for_each(|v| v.mul_assign(&inv));

        if coset != 0 {
            let shift_inv = self.finer_generator_inv.pow(&[coset]);
            match decimation {
                Decimation::DIF => distribute_powers_bit_reversed(data, &shift_inv, self.log),
                Decimation::DIT => distribute_powers(data, &shift_inv),
            }
        }
    }

    /// Convert Lagrange form to coefficient form.
    pub fn interpolate(&self, evals: &Evaluations<F>) -> Result<FpPolynomial<F>> {
        if evals.len() != self.cardinality {
            return Err(PlonkError::FuncParamsError);
        }
        let mut data = evals.values.clone();
        self.fft_inverse(&mut data, Decimation::DIF, 0);
        bit_reverse(&mut data);
        Ok(FpPolynomial::from_coefs(data))
    }

    /// Convert coefficient form to Lagrange form, the degree must be below `cardinality`.
    pub fn evaluate(&self, poly: &FpPolynomial<F>) -> Result<Evaluations<F>> {
        let mut data = self.padded_coefs(poly)?;
        self.fft(&mut data, Decimation::DIF, 0);
        bit_reverse(&mut data);
        Ok(Evaluations::new(data))
    }

    /// Evaluate on the four odd cosets `u^(2j+1) * <generator>` of a depth 3 domain,
    /// `u` being the finer generator. Value `4i + j` is `poly(generator^i * u^(2j+1))`.
    pub fn evaluate_cosets(&self, poly: &FpPolynomial<F>) -> Result<CosetEvaluations<F>> {
        if self.depth != 3 {
            return Err(PlonkError::FuncParamsError);
        }
        let coefs = self.padded_coefs(poly)?;

        let per_coset: Vec<Vec<F>> = cfg_into_iter!(0..NUM_COSETS)
            .map(|j| {
                let mut data = coefs.clone();
                self.fft(&mut data, Decimation::DIF, (2 * j + 1) as u64);
                bit_reverse(&mut data);
                data
            })
            .collect();

        let mut values = vec![F::zero(); NUM_COSETS * self.cardinality];
        for (j, coset) in per_coset.iter().enumerate() {
            for (i, v) in coset.iter().enumerate() {
                values[NUM_COSETS * i + j] = *v;
            }
        }
        Ok(CosetEvaluations::new(values))
    }

    /// Recover the coefficients from the interleaved coset values produced over a
    /// domain of a quarter of this size.
    ///
    /// Must be called on the 4N domain of depth 1: point `4i + j` is
    /// `u * (u^2)^(4i + j)`, i.e. the natural order of coset 1.
    pub fn interpolate_cosets(&self, evals: &CosetEvaluations<F>) -> Result<FpPolynomial<F>> {
        if self.depth != 1 || evals.len() != self.cardinality {
            return Err(PlonkError::FuncParamsError);
        }
        let mut data = evals.values.clone();
        self.fft_inverse(&mut data, Decimation::DIF, 1);
        bit_reverse(&mut data);
        Ok(FpPolynomial::from_coefs(data))
    }

    fn padded_coefs(&self, poly: &FpPolynomial<F>) -> Result<Vec<F>> {
        let coefs = poly.get_coefs_ref();
        if coefs.len() > self.cardinality {
            return Err(PlonkError::FuncParamsError);
        }
        let mut data = coefs.to_vec();
        data.resize(self.cardinality, F::zero());
        Ok(data)
    }
}

/// Permute `data` in place into bit-reversed index order. The length must be a power of two.
pub fn bit_reverse<F>(data: &mut [F]) {
    let n = data.len();
    let log = match log2_exact(n) {
        Some(log) if log > 0 => log,
        _ => return,
    };
    for i in 0..n {
        let j = reverse_index(i, log);
        if i < j {
            data.swap(i, j);
        }
    }
}

fn reverse_index(i: usize, log: u32) -> usize {
    if log == 0 {
        0
    } else {
        i.reverse_bits() >> (usize::BITS - log)
    }
}

fn powers<F: Scalar>(base: &F, count: usize) -> Vec<F> {
    let mut res = Vec::with_capacity(count);
    let mut acc = F::one();
    for _ in 0..count {
        res.push(acc);
        acc.mul_assign(base);
    }
    res
}

// data[k] *= g^k
fn distribute_powers<F: Scalar>(data: &mut [F], g: &F) {
    let mut acc = F::one();
    for v in data.iter_mut() {
        v.mul_assign(&acc);
        acc.mul_assign(g);
    }
}

// data[p] *= g^bitrev(p)
fn distribute_powers_bit_reversed<F: Scalar>(data: &mut [F], g: &F, log: u32) {
    let pows = powers(g, data.len());
    for (p, v) in data.iter_mut().enumerate() {
        v.mul_assign(&pows[reverse_index(p, log)]);
    }
}

fn dif_butterflies<F: Scalar>(data: &mut [F], twiddles: &[F]) {
    let n = data.len();
    let mut m = n;
    while m >= 2 {
        let half = m / 2;
        let stride = n / m;
        cfg_chunks_mut!(data, m).for_each(|block| {
            let (lo, hi) = block.split_at_mut(half);
            for j in 0..half {
                let u = lo[j];
                let v = hi[j];
                lo[j] = u.add(&v);
                hi[j] = u.sub(&v).mul(&twiddles[j * stride]);
            }
        });
        m = half;
    }
}

fn dit_butterflies<F: Scalar>(data: &mut [F], twiddles: &[F]) {
    let n = data.len();
    let mut m = 2;
    while m <= n {
        let half = m / 2;
        let stride = n / m;
        cfg_chunks_mut!(data, m).for_each(|block| {
            let (lo, hi) = block.split_at_mut(half);
            for j in 0..half {
                let u = lo[j];
                let t = hi[j].mul(&twiddles[j * stride]);
                lo[j] = u.add(&t);
                hi[j] = u.sub(&t);
            }
        });
        m *= 2;
    }
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::{
        domain::{bit_reverse, Decimation, FftDomain},
        evaluations::{CosetEvaluations, Evaluations},
    };
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
    use prism_algebra::{bn254::BN254Scalar, prelude::*, traits::Domain};
    use rand_chacha::ChaChaRng;

    type F = BN254Scalar;

    #[test]
    fn root_tower() {
        let domain = FftDomain::<F>::new(16, 3).unwrap();
        assert_eq!(domain.generator.pow(&[16]), F::one());
        assert_ne!(domain.generator.pow(&[8]), F::one());
        assert_eq!(domain.finer_generator.pow(&[8]), domain.generator);
        assert_eq!(domain.generator.mul(&domain.generator_inv), F::one());
        assert_eq!(
            domain.finer_generator.mul(&domain.finer_generator_inv),
            F::one()
        );
        assert_eq!(domain.cardinality_inv.mul(&F::from(16u32)), F::one());

        // the size-N and size-4N domains share the finer generator
        let domain_h = FftDomain::<F>::new(64, 1).unwrap();
        assert_eq!(domain_h.finer_generator, domain.finer_generator);
        assert_eq!(domain_h.generator, domain.finer_generator.square());

        assert_eq!(
            FftDomain::<F>::new(6, 1).unwrap_err(),
            PlonkError::GroupNotFound(6)
        );
        assert!(FftDomain::<F>::new(0, 1).is_err());
    }

    #[test]
    fn bit_reverse_permutation() {
        let mut data: Vec<u32> = (0..8).collect();
        bit_reverse(&mut data);
        assert_eq!(data, vec![0, 4, 2, 6, 1, 5, 3, 7]);
        bit_reverse(&mut data);
        assert_eq!(data, (0..8).collect::<Vec<u32>>());
    }

    #[test]
    fn fft_round_trip() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let domain = FftDomain::<F>::new(32, 3).unwrap();
        let coefs: Vec<F> = (0..32).map(|_| F::random(&mut prng)).collect();

        for coset in [0u64, 1, 3, 7] {
            // natural coefficients -> bit-reversed values -> natural coefficients
            let mut data = coefs.clone();
            domain.fft(&mut data, Decimation::DIF, coset);
            bit_reverse(&mut data);
            let shift = domain.coset_shift(coset);
            let poly = FpPolynomial::from_coefs(coefs.clone());
            assert_eq!(data[5], poly.eval(&domain.element(5).mul(&shift)));
            domain.fft_inverse(&mut data, Decimation::DIF, coset);
            bit_reverse(&mut data);
            assert_eq!(data, coefs);

            // bit-reversed coefficients -> natural values -> natural coefficients
            let mut data = coefs.clone();
            bit_reverse(&mut data);
            domain.fft(&mut data, Decimation::DIT, coset);
            assert_eq!(data[9], poly.eval(&domain.element(9).mul(&shift)));
            bit_reverse(&mut data);
            domain.fft_inverse(&mut data, Decimation::DIT, coset);
            assert_eq!(data, coefs);
        }
    }

    #[test]
    fn agrees_with_arkworks() {
        let mut prng = ChaChaRng::from_seed([1u8; 32]);
        let domain = FftDomain::<F>::new(64, 0).unwrap();
        let poly = FpPolynomial::<F>::random(&mut prng, 63);

        let ark_domain = Radix2EvaluationDomain::<<F as Domain>::Field>::new(64).unwrap();
        let ark_coefs: Vec<_> = poly.get_coefs_ref().iter().map(|c| c.get_field()).collect();
        let expected: Vec<F> = ark_domain
            .fft(&ark_coefs)
            .into_iter()
            .map(F::from_field)
            .collect();

        let evals = domain.evaluate(&poly).unwrap();
        assert_eq!(evals.values, expected);
        assert_eq!(domain.interpolate(&evals).unwrap(), poly);
    }

    #[test]
    fn coset_values_match_horner() {
        let mut prng = ChaChaRng::from_seed([2u8; 32]);
        let n = 8;
        let domain = FftDomain::<F>::new(n, 3).unwrap();
        let poly = FpPolynomial::<F>::random(&mut prng, n - 1);
        let cosets = domain.evaluate_cosets(&poly).unwrap();
        assert_eq!(cosets.len(), 4 * n);

        let u = domain.finer_generator;
        for i in 0..n {
            for j in 0..4 {
                let point = domain.element(i).mul(&u.pow(&[(2 * j + 1) as u64]));
                assert_eq!(cosets.values[4 * i + j], poly.eval(&point));
            }
        }

        // a depth 1 domain cannot produce the odd cosets
        let shallow = FftDomain::<F>::new(n, 1).unwrap();
        assert_eq!(
            shallow.evaluate_cosets(&poly).unwrap_err(),
            PlonkError::FuncParamsError
        );
    }

    #[test]
    fn coset_interpolation_recovers_high_degree() {
        let mut prng = ChaChaRng::from_seed([3u8; 32]);
        let n = 8;
        let domain_h = FftDomain::<F>::new(4 * n, 1).unwrap();
        let poly = FpPolynomial::<F>::random(&mut prng, 4 * n - 1);

        let u = domain_h.finer_generator;
        let values = (0..4 * n)
            .map(|k| poly.eval(&u.mul(&domain_h.element(k))))
            .collect();
        let recovered = domain_h
            .interpolate_cosets(&CosetEvaluations::new(values))
            .unwrap();
        assert_eq!(recovered, poly);
    }

    #[test]
    fn typed_helpers_check_lengths() {
        let domain = FftDomain::<F>::new(4, 3).unwrap();
        let too_long = FpPolynomial::from_coefs(vec![F::one(); 5]);
        assert_eq!(
            domain.evaluate(&too_long).unwrap_err(),
            PlonkError::FuncParamsError
        );
        let short = Evaluations::new(vec![F::one(); 3]);
        assert_eq!(
            domain.interpolate(&short).unwrap_err(),
            PlonkError::FuncParamsError
        );
        let constant = domain
            .interpolate(&Evaluations::new(vec![F::from(7u32); 4]))
            .unwrap();
        assert_eq!(constant, FpPolynomial::from_coefs(vec![F::from(7u32)]));
    }
}
