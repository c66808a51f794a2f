//! Shuffles a small range of identifiers and maps one back.

use feistel_shuffle::{get_index, random_index, shuffle, FeistelNetwork};

fn main() {
    // Fixed keys so the example output is reproducible.
    let net = FeistelNetwork::<u64>::with_default_round([
        0xA45C_F355_C3B1_CD88,
        0x8B92_71CC_2FC9_365A,
        0x33CD_458F_23C8_16B1,
        0xC026_F9D1_52DE_23A9,
    ]);

    let order: Vec<u64> = shuffle(1000, 1020, &net)
        .expect("network has round keys")
        .collect();
    println!("shuffled: {order:?}");

    let token = random_index(7, 1_000_000, &net).expect("index below bound");
    let back = get_index(token, 1_000_000, &net).expect("token below bound");
    assert_eq!(back, 7);
    println!("counter 7 -> token {token} -> counter {back}");
}
