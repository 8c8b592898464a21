//! Test utilities and helpers for the pqread crates.
//!
//! This crate provides:
//! - Encoders producing PLAIN, hybrid RLE / bit-packed and varint bytes, used
//!   as fixtures by the decoder tests
//! - Data generation for creating randomized test values
//!
//! # Usage
//!
//! This crate is intended for use as a dev-dependency only.

pub mod data_gen;
pub mod encode;
