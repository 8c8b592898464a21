//! Data generation utilities for testing.
//!
//! This module provides functions to generate randomized values for
//! round-trip tests.

pub fn random_i32s(count: usize) -> Vec<i32> {
    (0..count).map(|_| fastrand::i32(..)).collect()
}

pub fn random_i64s(count: usize) -> Vec<i64> {
    (0..count).map(|_| fastrand::i64(..)).collect()
}

/// Finite floats spread over a wide range of magnitudes and both signs.
pub fn random_f32s(count: usize) -> Vec<f32> {
    (0..count)
        .map(|_| (fastrand::f32() - 0.5) * 10f32.powi(fastrand::i32(-30..30)))
        .collect()
}

pub fn random_f64s(count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| (fastrand::f64() - 0.5) * 10f64.powi(fastrand::i32(-300..300)))
        .collect()
}

pub fn random_booleans(count: usize) -> Vec<bool> {
    (0..count).map(|_| fastrand::bool()).collect()
}

/// Byte arrays of random length in `0..=max_len`.
pub fn random_byte_arrays(count: usize, max_len: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|_| {
            let len = fastrand::usize(0..=max_len);
            (0..len).map(|_| fastrand::u8(..)).collect()
        })
        .collect()
}

/// Level-like values in `0..=max_level`, emitted in runs of random length up
/// to `max_run`, so that a hybrid encoding mixes RLE and bit-packed runs.
pub fn random_levels(count: usize, max_level: u32, max_run: usize) -> Vec<u32> {
    assert_ne!(max_run, 0);
    let mut levels = Vec::with_capacity(count);
    while levels.len() < count {
        let level = fastrand::u32(0..=max_level);
        let run = fastrand::usize(1..=max_run).min(count - levels.len());
        levels.extend(std::iter::repeat_n(level, run));
    }
    levels
}
