use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use feistel_shuffle::{
    generate_keys, get_index, random_index, shuffle, FeistelNetwork, KeyMaterial, ShuffleError,
    ShuffleStream, DEFAULT_ROUNDS,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const KEYS: [u64; 4] = [
    0xA45C_F355_C3B1_CD88,
    0x8B92_71CC_2FC9_365A,
    0x33CD_458F_23C8_16B1,
    0xC026_F9D1_52DE_23A9,
];

// Need not be reversible.
fn round_function(v: u64, key: u64) -> u64 {
    v.wrapping_mul(941_083_987) ^ (key >> (v & 7)).wrapping_mul(104_729)
}

#[test]
fn golden_shuffle_sequence() {
    let net = FeistelNetwork::<u64, _>::new(KEYS, round_function);
    let values: Vec<u64> = shuffle(1000, 1020, &net).expect("keyed").collect();
    assert_eq!(
        values,
        [
            1003, 1005, 1006, 1009, 1004, 1011, 1008, 1016, 1010, 1001, 1017, 1000, 1013, 1012,
            1015, 1014, 1007, 1002, 1018, 1019,
        ]
    );
}

#[test]
fn golden_sequence_from_background_stream() {
    let net = Arc::new(FeistelNetwork::<u64, _>::new(KEYS, round_function));
    let values: Vec<u64> = ShuffleStream::spawn(1020, 1000, net).expect("keyed").collect();
    assert_eq!(
        values,
        [
            1003, 1005, 1006, 1009, 1004, 1011, 1008, 1016, 1010, 1001, 1017, 1000, 1013, 1012,
            1015, 1014, 1007, 1002, 1018, 1019,
        ]
    );
}

#[test]
fn zero_round_network_fails_everywhere() {
    let net = FeistelNetwork::<u64>::with_default_round(Vec::new());
    assert_eq!(net.cipher(0x1234, 0x5678, 0xffff), (0x1234, 0x5678));
    assert_eq!(random_index(0, 255, &net), Err(ShuffleError::InvalidKey));
    assert_eq!(get_index(0, 255, &net), Err(ShuffleError::InvalidKey));
    assert!(matches!(shuffle(0, 255, &net), Err(ShuffleError::InvalidKey)));
}

#[test]
fn inverse_for_random_networks_and_bounds() {
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
    for rounds in 1..6 {
        let net = FeistelNetwork::<u64>::with_default_round(generate_keys(&mut rng, rounds));
        for _ in 0..50 {
            let max: u64 = match rng.gen_range(0..3) {
                0 => 0,
                1 => rng.gen_range(1..10_000),
                _ => rng.gen(),
            };
            let idx = if max == 0 { rng.gen() } else { rng.gen_range(0..max) };
            let p = random_index(idx, max, &net).expect("valid index");
            if max != 0 {
                assert!(p < max);
            }
            assert_eq!(get_index(p, max, &net).expect("valid permutation"), idx);
        }
    }
}

#[test]
fn shuffle_is_a_bijection_on_range() {
    let net = FeistelNetwork::<u64>::with_default_round(KEYS);
    for (min, max) in [(0u64, 1u64), (3, 4), (0, 2), (1000, 1020), (50, 1074), (7, 4103)] {
        let values: Vec<u64> = shuffle(min, max, &net).expect("keyed").collect();
        assert_eq!(values.len() as u64, max - min);
        let unique: HashSet<u64> = values.iter().copied().collect();
        assert_eq!(unique.len(), values.len());
        assert!(values.iter().all(|v| (min..max).contains(v)));
    }
}

#[test]
fn shuffle_bound_order_is_irrelevant() {
    let net = FeistelNetwork::<u64, _>::new(KEYS, round_function);
    for (a, b) in [(0u64, 10u64), (1000, 1020), (5, 5), (u64::MAX - 16, u64::MAX)] {
        let forward: Vec<u64> = shuffle(a, b, &net).expect("keyed").take(64).collect();
        let backward: Vec<u64> = shuffle(b, a, &net).expect("keyed").take(64).collect();
        assert_eq!(forward, backward);
    }
}

#[test]
fn shuffle_values_match_random_index_plus_offset() {
    let net = FeistelNetwork::<u64>::with_default_round(KEYS);
    for (i, value) in shuffle(500, 777, &net).expect("keyed").enumerate() {
        assert_eq!(value, random_index(i as u64, 277, &net).expect("in range") + 500);
    }
}

#[test]
fn full_u16_domain_is_covered_exactly_once() {
    let net = FeistelNetwork::<u16>::with_default_round([0xCD88u16, 0x365A, 0x16B1, 0x23A9]);
    let mut acc = 0u64;
    let mut expected = 0u64;
    let mut count = 0u64;
    for (i, v) in shuffle(0, 0, &net).expect("keyed").enumerate() {
        acc += u64::from(v);
        expected += i as u64;
        count += 1;
    }
    assert_eq!(count, 1 << 16);
    assert_eq!(acc, expected);
}

#[test]
fn concurrent_lookups_agree_with_sequential() {
    let net = Arc::new(FeistelNetwork::<u64>::with_default_round(KEYS));
    let sequential: Vec<u64> = (0..12_345u64)
        .map(|i| random_index(i, 12_345, &*net).expect("in range"))
        .collect();

    thread::scope(|scope| {
        for worker in 0..4u64 {
            let net = Arc::clone(&net);
            let sequential = &sequential;
            scope.spawn(move || {
                for i in (worker..12_345).step_by(4) {
                    let p = random_index(i, 12_345, &*net).expect("in range");
                    assert_eq!(p, sequential[i as usize]);
                }
            });
        }
    });
}

#[test]
fn key_material_round_trip_preserves_permutation() {
    let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
    let keys = generate_keys(&mut rng, DEFAULT_ROUNDS);
    let original = FeistelNetwork::<u64>::with_default_round(keys.clone());

    let bytes = KeyMaterial::new(&keys).expect("round count fits").to_bytes().expect("serialize");
    let restored = KeyMaterial::from_bytes(&bytes).expect("deserialize").into_network();

    let a: Vec<u64> = shuffle(0, 300, &original).expect("keyed").collect();
    let b: Vec<u64> = shuffle(0, 300, &restored).expect("keyed").collect();
    assert_eq!(a, b);
}
