use crate::errors::{PlonkError, Result};
use prism_algebra::prelude::*;

/// Variable index
pub type VarIndex = usize;

/// Number of wires of a gate: left, right and output.
pub const N_WIRES_PER_GATE: usize = 3;

/// A sparse rank-1 constraint over three wires, satisfied iff
/// `ql * w_l + qr * w_r + qm * w_l * w_r + qo * w_o + qk == 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseR1C<F> {
    /// Left wire variable.
    pub l: VarIndex,
    /// Right wire variable.
    pub r: VarIndex,
    /// Output wire variable.
    pub o: VarIndex,
    /// Left selector.
    pub ql: F,
    /// Right selector.
    pub qr: F,
    /// Multiplication selector.
    pub qm: F,
    /// Output selector.
    pub qo: F,
    /// Constant selector.
    pub qk: F,
}

impl<F: Scalar> SparseR1C<F> {
    /// Return the wire variables `[l, r, o]`.
    pub fn wires(&self) -> [VarIndex; N_WIRES_PER_GATE] {
        [self.l, self.r, self.o]
    }

    /// Evaluate the gate equation on `witness`, zero iff satisfied.
    pub fn eval(&self, witness: &[F]) -> Result<F> {
        let get = |var: VarIndex| {
            witness
                .get(var)
                .copied()
                .ok_or(PlonkError::ProofErrorInvalidWitness)
        };
        let (l, r, o) = (get(self.l)?, get(self.r)?, get(self.o)?);
        Ok(self.ql.mul(&l)
            + self.qr.mul(&r)
            + self.qm.mul(&l).mul(&r)
            + self.qo.mul(&o)
            + self.qk)
    }
}

/// Sparse R1CS: the ordered gates of a circuit, constraints first, then assertions.
///
/// Variable 0 is the dummy slot. It must hold zero and is used to pad the rows up to
/// the domain size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparseR1CS<F> {
    /// Gates that define new variables.
    pub constraints: Vec<SparseR1C<F>>,
    /// Gates that only check existing variables.
    pub assertions: Vec<SparseR1C<F>>,
    /// Number of variables, the dummy slot included.
    pub num_vars: usize,
}

impl<F: Scalar> Default for SparseR1CS<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Scalar> SparseR1CS<F> {
    /// Create a constraint system holding only the dummy variable.
    pub fn new() -> Self {
        Self {
            constraints: vec![],
            assertions: vec![],
            num_vars: 1,
        }
    }

    /// Allocate a new variable.
    pub fn new_var(&mut self) -> VarIndex {
        self.num_vars += 1;
        self.num_vars - 1
    }

    fn check_wires(&self, c: &SparseR1C<F>) -> Result<()> {
        if c.wires().iter().any(|var| *var >= self.num_vars) {
            Err(PlonkError::FuncParamsError)
        } else {
            Ok(())
        }
    }

    /// Append a constraint.
    pub fn add_constraint(&mut self, c: SparseR1C<F>) -> Result<()> {
        self.check_wires(&c)?;
        self.constraints.push(c);
        Ok(())
    }

    /// Append an assertion.
    pub fn add_assertion(&mut self, c: SparseR1C<F>) -> Result<()> {
        self.check_wires(&c)?;
        self.assertions.push(c);
        Ok(())
    }

    /// Add a Mul gate: `left * right = out`.
    pub fn insert_mul_gate(
        &mut self,
        left_var: VarIndex,
        right_var: VarIndex,
        out_var: VarIndex,
    ) -> Result<()> {
        self.add_constraint(SparseR1C {
            l: left_var,
            r: right_var,
            o: out_var,
            ql: F::zero(),
            qr: F::zero(),
            qm: F::one(),
            qo: F::one().neg(),
            qk: F::zero(),
        })
    }

    /// Add an Add gate: `left + right = out`.
    pub fn insert_add_gate(
        &mut self,
        left_var: VarIndex,
        right_var: VarIndex,
        out_var: VarIndex,
    ) -> Result<()> {
        self.add_constraint(SparseR1C {
            l: left_var,
            r: right_var,
            o: out_var,
            ql: F::one(),
            qr: F::one(),
            qm: F::zero(),
            qo: F::one().neg(),
            qk: F::zero(),
        })
    }

    /// Assert that `var` equals `constant`.
    pub fn insert_constant_gate(&mut self, var: VarIndex, constant: F) -> Result<()> {
        self.add_assertion(SparseR1C {
            l: var,
            r: 0,
            o: 0,
            ql: F::one(),
            qr: F::zero(),
            qm: F::zero(),
            qo: F::zero(),
            qk: constant.neg(),
        })
    }

    /// Return the number of gates.
    pub fn size(&self) -> usize {
        self.constraints.len() + self.assertions.len()
    }

    /// Return the size of the evaluation domain: the next power of two, at least 2.
    pub fn domain_size(&self) -> usize {
        self.size().next_power_of_two().max(2)
    }

    /// Iterate over the gates, constraints first, then assertions.
    pub fn rows(&self) -> impl Iterator<Item = &SparseR1C<F>> {
        self.constraints.iter().chain(self.assertions.iter())
    }

    /// Compute the permutation implied by the copy constraints over `n` rows.
    ///
    /// Position `column * n + row` holds the wire of `column` (0 = left, 1 = right,
    /// 2 = output) on `row`; rows past the last gate reference variable 0. All the
    /// positions of one variable form a single cycle, in position order.
    pub fn compute_permutation(&self, n: usize) -> Result<Vec<usize>> {
        if n < self.size() {
            return Err(PlonkError::FuncParamsError);
        }

        let mut wiring = vec![0 as VarIndex; N_WIRES_PER_GATE * n];
        for (row, gate) in self.rows().enumerate() {
            for (column, var) in gate.wires().iter().enumerate() {
                wiring[column * n + row] = *var;
            }
        }

        let mut perm = vec![0usize; N_WIRES_PER_GATE * n];
        let mut first = vec![None; self.num_vars];
        let mut last = vec![None; self.num_vars];
        for (pos, var) in wiring.iter().enumerate() {
            if *var >= self.num_vars {
                return Err(PlonkError::FuncParamsError);
            }
            match last[*var] {
                Some(prev) => perm[prev] = pos,
                None => first[*var] = Some(pos),
            }
            last[*var] = Some(pos);
        }
        // close each cycle
        for (f, l) in first.iter().zip(last.iter()) {
            if let (Some(f), Some(l)) = (f, l) {
                perm[*l] = *f;
            }
        }
        Ok(perm)
    }

    /// Check that `witness` satisfies every gate and holds zero in the dummy slot.
    pub fn check_solution(&self, witness: &[F]) -> Result<()> {
        if witness.len() < self.num_vars {
            return Err(PlonkError::FuncParamsError);
        }
        if !witness[0].is_zero() {
            return Err(PlonkError::ProofErrorInvalidWitness);
        }
        for gate in self.rows() {
            if !gate.eval(witness)?.is_zero() {
                return Err(PlonkError::ProofErrorInvalidWitness);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::constraint_system::{SparseR1CS, N_WIRES_PER_GATE};
    use prism_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    // a * b = c, c + a = d, d == 15
    fn sample_cs() -> (SparseR1CS<F>, Vec<F>) {
        let mut cs = SparseR1CS::new();
        let a = cs.new_var();
        let b = cs.new_var();
        let c = cs.new_var();
        let d = cs.new_var();
        cs.insert_mul_gate(a, b, c).unwrap();
        cs.insert_add_gate(c, a, d).unwrap();
        cs.insert_constant_gate(d, F::from(15u32)).unwrap();
        let witness = vec![
            F::zero(),
            F::from(3u32),
            F::from(4u32),
            F::from(12u32),
            F::from(15u32),
        ];
        (cs, witness)
    }

    #[test]
    fn check_solution() {
        let (cs, witness) = sample_cs();
        assert_eq!(cs.size(), 3);
        assert_eq!(cs.domain_size(), 4);
        assert!(cs.check_solution(&witness).is_ok());

        let mut wrong = witness.clone();
        wrong[3] = F::from(13u32);
        assert_eq!(
            cs.check_solution(&wrong),
            Err(PlonkError::ProofErrorInvalidWitness)
        );

        let mut dirty_dummy = witness.clone();
        dirty_dummy[0] = F::one();
        assert_eq!(
            cs.check_solution(&dirty_dummy),
            Err(PlonkError::ProofErrorInvalidWitness)
        );

        assert_eq!(
            cs.check_solution(&witness[..3]),
            Err(PlonkError::FuncParamsError)
        );
    }

    #[test]
    fn rejects_unknown_variables() {
        let mut cs = SparseR1CS::<F>::new();
        let a = cs.new_var();
        assert_eq!(
            cs.insert_mul_gate(a, a, a + 1),
            Err(PlonkError::FuncParamsError)
        );
        assert_eq!(cs.size(), 0);
        assert_eq!(cs.domain_size(), 2);
    }

    #[test]
    fn permutation_cycles() {
        let (cs, witness) = sample_cs();
        let n = cs.domain_size();
        let perm = cs.compute_permutation(n).unwrap();
        assert_eq!(perm.len(), N_WIRES_PER_GATE * n);

        // a bijection
        let mut seen = vec![false; perm.len()];
        for p in perm.iter() {
            assert!(!seen[*p]);
            seen[*p] = true;
        }

        // copies carry the same value
        let mut values = vec![witness[0]; N_WIRES_PER_GATE * n];
        for (row, gate) in cs.rows().enumerate() {
            for (column, var) in gate.wires().iter().enumerate() {
                values[column * n + row] = witness[*var];
            }
        }
        for (pos, next) in perm.iter().enumerate() {
            assert_eq!(values[pos], values[*next]);
        }

        // a = position 0 (left, row 0) and 5 (right, row 1)
        assert_eq!(perm[0], 5);
        assert_eq!(perm[5], 0);
        // b is used once
        assert_eq!(perm[n], n);

        assert!(cs.compute_permutation(2).is_err());
    }
}
