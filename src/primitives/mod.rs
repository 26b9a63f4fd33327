//! Primitive integer types
//!
//! Key generation runs over plain fixed-width unsigned integers. This module
//! defines the [`KeyInt`] trait that names the widths the generator accepts
//! and the handful of conversions it needs on top of `num-traits`.
//!
//! Supported widths:
//! - `u16`: toy keys, handy for exhaustive tests
//! - `u32`: the classic textbook width and the crate default
//! - `u64`: larger moduli, still far from cryptographic strength
//!
//! Every width widens losslessly into `u128`, which is where mixed-width
//! intermediate values (Bézout coefficients, `d * e` products, error
//! reports) live.

mod key_int;

pub use key_int::KeyInt;
