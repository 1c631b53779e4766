use prism_algebra::{bn254::BN254Scalar, prelude::*};
use prism_plonk::plonk::domain::FftDomain;
use prism_plonk::poly_commit::field_polynomial::FpPolynomial;
use std::time::Instant;

fn main() {
    let mut prng = test_rng();
    let n = 65536;
    let rounds = 100;

    let domain = FftDomain::<BN254Scalar>::new(n, 3).unwrap();
    let coefs = (0..n)
        .map(|_| BN254Scalar::random(&mut prng))
        .collect::<Vec<_>>();
    let poly = FpPolynomial::from_coefs(coefs);

    let start = Instant::now();
    for _ in 0..rounds {
        let _ = domain.evaluate(&poly).unwrap();
    }
    println!(
        "fft total time: {} s",
        start.elapsed().as_secs_f32() / rounds as f32
    );

    let start = Instant::now();
    for _ in 0..rounds {
        let _ = domain.evaluate_cosets(&poly).unwrap();
    }
    println!(
        "coset fft total time: {} s",
        start.elapsed().as_secs_f32() / rounds as f32
    );
}
