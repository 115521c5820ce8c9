//! Integration tests for random permutations.

use arvo_rand::perm::PERM_BATCH;
use arvo_rand::rng::{Generator, GeneratorKind};
use arvo_rand::UniformRng;

fn perm(kind: GeneratorKind, seed: i32, len: usize) -> Vec<usize> {
    Generator::new(kind, seed).permutation(len)
}

#[test]
fn test_short_permutation_goldens() {
    assert_eq!(
        perm(GeneratorKind::Shuffled, 42, 10),
        vec![1, 0, 3, 7, 6, 9, 2, 8, 4, 5]
    );
    assert_eq!(
        perm(GeneratorKind::MultiplePrime, 42, 10),
        vec![4, 8, 9, 7, 6, 0, 1, 5, 3, 2]
    );
    assert_eq!(
        perm(GeneratorKind::ParkMiller, 42, 10),
        vec![8, 7, 6, 3, 9, 2, 1, 5, 4, 0]
    );

    assert_eq!(perm(GeneratorKind::Shuffled, 7, 5), vec![2, 4, 1, 3, 0]);
    assert_eq!(perm(GeneratorKind::MultiplePrime, 7, 5), vec![2, 4, 3, 1, 0]);
    assert_eq!(perm(GeneratorKind::ParkMiller, 7, 5), vec![1, 2, 4, 3, 0]);
}

#[test]
fn test_multi_batch_permutation_goldens() {
    // 44 draws span three batches of at most PERM_BATCH.

    assert_eq!(
        perm(GeneratorKind::Shuffled, 2024, 45),
        vec![
            42, 27, 7, 26, 6, 38, 18, 13, 22, 1, 5, 8, 30, 23, 29, 14, 25, 35, 41, 32, 0, 39, 4,
            28, 31, 12, 24, 20, 43, 9, 15, 11, 16, 21, 10, 2, 36, 17, 33, 44, 40, 37, 34, 19, 3,
        ]
    );
    assert_eq!(
        perm(GeneratorKind::MultiplePrime, 2024, 45),
        vec![
            12, 10, 43, 20, 27, 19, 26, 25, 40, 24, 21, 8, 16, 38, 31, 11, 3, 34, 28, 0, 14, 39,
            23, 1, 33, 32, 44, 13, 6, 22, 37, 42, 36, 35, 17, 18, 5, 2, 29, 15, 7, 4, 41, 9, 30,
        ]
    );
    assert_eq!(
        perm(GeneratorKind::ParkMiller, 2024, 45),
        vec![
            38, 19, 1, 5, 32, 41, 30, 42, 21, 15, 20, 23, 18, 17, 25, 35, 27, 9, 22, 36, 40, 4, 2,
            26, 24, 34, 37, 16, 11, 3, 39, 31, 28, 43, 7, 29, 33, 44, 8, 6, 13, 12, 14, 10, 0,
        ]
    );
}

#[test]
fn test_trivial_lengths_consume_no_draws() {
    for kind in GeneratorKind::ALL {
        let mut rng = Generator::new(kind, 5);
        let mut reference = rng.clone();

        assert!(rng.permutation(0).is_empty());
        assert_eq!(rng.permutation(1), vec![0]);
        let mut out: [usize; 0] = [];
        rng.permutation_into(0, &mut out).unwrap();

        assert_eq!(rng.next_uniform(), reference.next_uniform(), "kind={}", kind);
    }
}

#[test]
fn test_permutation_consumes_len_minus_one_draws() {
    for kind in GeneratorKind::ALL {
        let mut rng = Generator::new(kind, 17);
        let mut reference = rng.clone();

        let _ = rng.permutation(64);
        let mut skipped = vec![0.0; 63];
        reference.fill_uniform(&mut skipped);

        assert_eq!(rng.next_uniform(), reference.next_uniform(), "kind={}", kind);
    }
}

#[test]
fn test_large_permutation_is_valid() {
    let len = 10_000;
    for kind in GeneratorKind::ALL {
        let mut sorted = perm(kind, 123, len);
        assert_ne!(sorted, (0..len).collect::<Vec<_>>(), "kind={} left identity", kind);
        sorted.sort_unstable();
        assert_eq!(sorted, (0..len).collect::<Vec<_>>(), "kind={}", kind);
    }
}

#[test]
fn test_positions_are_roughly_uniform() {
    // Each value should land in each slot about 1/len of the time.
    let len = 5;
    let trials = 20_000;
    let mut rng = Generator::new(GeneratorKind::ParkMiller, 2718);
    let mut counts = vec![[0usize; 5]; len];

    for _ in 0..trials {
        for (slot, &value) in rng.permutation(len).iter().enumerate() {
            counts[slot][value] += 1;
        }
    }

    let expected = trials as f64 / len as f64;
    for (slot, row) in counts.iter().enumerate() {
        for (value, &count) in row.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.1,
                "slot {} value {}: {} hits, expected ~{}",
                slot,
                value,
                count,
                expected
            );
        }
    }
}

#[test]
fn test_batch_boundaries() {
    for len in [PERM_BATCH, PERM_BATCH + 1, PERM_BATCH + 2, 2 * PERM_BATCH + 1] {
        for kind in GeneratorKind::ALL {
            let mut rng = Generator::new(kind, 64);
            let mut reference = rng.clone();

            let mut sorted = rng.permutation(len);
            sorted.sort_unstable();
            assert_eq!(sorted, (0..len).collect::<Vec<_>>());

            let mut skipped = vec![0.0; len - 1];
            reference.fill_uniform(&mut skipped);
            assert_eq!(rng.next_uniform(), reference.next_uniform(), "len={}", len);
        }
    }
}
