
//! Compute prefix code ("Huffman code") lengths from a symbol histogram.
//! Contains one optimal unlimited algorithm and six strategies that
//! cap the longest code at a chosen number of bits,
//! trading compression efficiency against running time.

#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused_extern_crates,
    unused,

    missing_copy_implementations,
    missing_debug_implementations,

    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]

#![deny(
    unused_variables,
    unused_assignments,
    dead_code,
    unused_must_use,
    missing_copy_implementations,
    trivial_numeric_casts
)]

#![forbid(unsafe_code)]


pub mod error;
pub mod math;
pub mod heap;
pub mod huffman;
pub mod limited;

mod sorting;


/// Re-exports of all types commonly required for simply computing code lengths.
pub mod prelude {

    // main exports
    pub use crate::huffman;
    pub use crate::limited::{ self, Strategy, RescaleOptions };

    // error handling
    pub use crate::error::{ Result, Error };
}
