//! Deterministic random streams.
//!
//! Every band task and the seam pass get their own xorshift32 state, derived
//! from the world seed, the tick number and a lane id. Nothing is shared
//! between threads, so a fixed seed replays the same grid.

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Fair coin flip.
#[inline]
pub fn coin(state: &mut u32) -> bool {
    // Low bit of xorshift32 is fine for a binary bias.
    xorshift32(state) & 1 == 1
}

/// True with probability `1 / n`. `n <= 1` is always true.
#[inline]
pub fn one_in(state: &mut u32, n: u32) -> bool {
    n <= 1 || xorshift32(state) % n == 0
}

/// Derive a non-zero stream state for `(seed, tick, lane)`.
///
/// Lane 0 is the seam pass; band `k` uses lane `k + 1`.
pub fn stream_seed(seed: u32, tick: u64, lane: u32) -> u32 {
    // splitmix64 finalizer over the packed inputs
    let mut z = (seed as u64)
        ^ tick.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (lane as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let folded = (z as u32) ^ ((z >> 32) as u32);
    // xorshift32 is stuck at zero forever
    if folded == 0 { 0x6D2B_79F5 } else { folded }
}
