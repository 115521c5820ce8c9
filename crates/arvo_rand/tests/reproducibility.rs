//! Integration tests for stream reproducibility.
//!
//! Golden values are reference traces of the published algorithms. Any change
//! to them breaks every stored search result that depends on a seed.

use approx::assert_relative_eq;
use arvo_rand::rng::{Generator, GeneratorKind, MultiplePrime, ParkMiller, ShuffledCongruential};
use arvo_rand::{RandError, UniformRng};

fn trace(kind: GeneratorKind, seed: i32, n: usize) -> Vec<f64> {
    let mut rng = Generator::new(kind, seed);
    let mut out = vec![0.0; n];
    rng.fill_uniform(&mut out);
    out
}

fn assert_trace(got: &[f64], want: &[f64]) {
    assert_eq!(got.len(), want.len());
    for (i, (&g, &w)) in got.iter().zip(want).enumerate() {
        assert_relative_eq!(g, w, max_relative = 1e-12);
        assert!(g < 1.0, "draw {} not below 1: {}", i, g);
    }
}

#[test]
fn test_shuffled_trace() {
    assert_trace(
        &trace(GeneratorKind::Shuffled, 42, 4),
        &[0.57448301984, 0.472071980352, 0.600547948672, 0.412819118656],
    );
    assert_trace(
        &trace(GeneratorKind::Shuffled, 0, 4),
        &[0.220982586944, 0.167092285696, 0.560187993856, 0.22864758912],
    );
}

#[test]
fn test_multiple_prime_trace() {
    assert_trace(
        &trace(GeneratorKind::MultiplePrime, 1, 4),
        &[0.139813981398, 0.626462646264, 0.748874887488, 0.635863586358],
    );
    assert_trace(
        &trace(GeneratorKind::MultiplePrime, 12345, 4),
        &[0.079907990799, 0.446644664466, 0.128812881288, 0.041604160416],
    );
    assert_trace(
        &trace(GeneratorKind::MultiplePrime, 7, 3),
        &[0.15101510151, 0.397539753975, 0.489948994899],
    );
}

#[test]
fn test_park_miller_trace() {
    assert_trace(
        &trace(GeneratorKind::ParkMiller, 42, 4),
        &[
            0.000328707508878525,
            0.5245871019852921,
            0.7354235321525766,
            0.2633055407709716,
        ],
    );
    assert_trace(
        &trace(GeneratorKind::ParkMiller, 12345, 4),
        &[
            0.09661652850250932,
            0.8339946273432385,
            0.9477024976351657,
            0.0358785949795561,
        ],
    );
}

#[test]
fn test_park_miller_largest_state_stays_below_one() {
    // Seed P3 - 1 maps to state P3 - 16807 on the first step.
    assert_trace(
        &trace(GeneratorKind::ParkMiller, 2_147_483_646, 2),
        &[0.9999921735779566, 0.8684622118109925],
    );
}

#[test]
fn test_concrete_types_reproduce_enum_traces() {
    let mut a = ShuffledCongruential::from_seed(-1);
    let b: Vec<f64> = (0..3).map(|_| a.next_uniform()).collect();
    assert_trace(&b, &trace(GeneratorKind::Shuffled, 1, 3));

    let mut a = MultiplePrime::from_seed(-12345);
    let b: Vec<f64> = (0..4).map(|_| a.next_uniform()).collect();
    assert_trace(&b, &trace(GeneratorKind::MultiplePrime, 12345, 4));

    let mut a = ParkMiller::from_seed(-42);
    let b: Vec<f64> = (0..4).map(|_| a.next_uniform()).collect();
    assert_trace(&b, &trace(GeneratorKind::ParkMiller, 42, 4));
}

#[test]
fn test_clone_snapshots_stream() {
    for kind in GeneratorKind::ALL {
        let mut rng = Generator::new(kind, 31337);
        let mut warmup = vec![0.0; 123];
        rng.fill_uniform(&mut warmup);

        let mut snapshot = rng.clone();
        let mut a = vec![0.0; 64];
        let mut b = vec![0.0; 64];
        rng.fill_uniform(&mut a);
        snapshot.fill_uniform(&mut b);
        assert_eq!(a, b, "kind={}", kind);
    }
}

#[test]
fn test_independent_instances_do_not_interfere() {
    let mut a = Generator::new(GeneratorKind::Shuffled, 10);
    let mut b = Generator::new(GeneratorKind::Shuffled, 10);

    let interleaved: Vec<f64> = (0..20)
        .map(|i| {
            if i % 2 == 0 {
                a.next_uniform()
            } else {
                let _ = b.next_uniform();
                a.next_uniform()
            }
        })
        .collect();

    assert_eq!(interleaved, trace(GeneratorKind::Shuffled, 10, 20));
}

#[test]
fn test_per_worker_generators_on_threads() {
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            std::thread::spawn(move || trace(GeneratorKind::MultiplePrime, 1000 + worker, 256))
        })
        .collect();

    for (worker, handle) in handles.into_iter().enumerate() {
        let got = handle.join().unwrap();
        assert_eq!(got, trace(GeneratorKind::MultiplePrime, 1000 + worker as i32, 256));
    }
}

#[test]
fn test_eval_batch_error_is_reported() {
    let mut rng = Generator::new(GeneratorKind::ParkMiller, 1);
    let mut short = [0.0; 1];
    let err = rng.eval_batch(2, &mut short).unwrap_err();
    assert!(matches!(
        err,
        RandError::BufferTooSmall {
            required: 2,
            actual: 1
        }
    ));
}
