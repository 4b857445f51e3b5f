use byteorder::{ByteOrder, NativeEndian};
use getrandom::getrandom;
use randomize::PCG32;

/// Builds a PRNG from OS entropy, used when reseeding the grid at random.
pub fn seeded_rng() -> PCG32 {
    let mut seed = [0_u8; 16];

    getrandom(&mut seed).expect("failed to getrandom");

    let state = NativeEndian::read_u64(&seed[0..8]);
    let inc = NativeEndian::read_u64(&seed[8..16]);
    (state, inc).into()
}
