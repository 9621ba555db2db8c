
//! Code length assignment with an upper limit on the longest code,
//! as required by formats such as DEFLATE (15 bits), JPEG (16 bits) or BZIP2 (17 bits).
//! Provides six strategies which trade compression efficiency against running time.


// private modules make non-breaking changes easier
mod package_merge;
mod reduce;
mod rescale;
mod kraft;

pub use self::package_merge::package_merge;
pub use self::reduce::{ jpeg, miniz, jpeg_in_place, miniz_in_place };
pub use self::rescale::{ bzip2, bzip2_with, RescaleOptions };
pub use self::kraft::{ kraft, kraft_heap };

use crate::error::{Result, Error};


/// No code may be longer than this, keeping all Kraft arithmetic within 64 bits.
pub const MAX_SUPPORTED_LENGTH: u8 = 63;


/// Specifies which length limiting strategy to use.
/// Use package-merge whenever the optimal code is worth a few more microseconds.
/// Use one of the other strategies for faster, slightly larger codes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {

    /// The only strategy that guarantees an optimal code under the limit.
    /// Runs the coin collector construction, taking time and space
    /// proportional to the limit times the number of used symbols.
    PackageMerge,

    /// Computes the optimal unlimited code first, then repeatedly demotes
    /// pairs of the longest codes as described in annex K.3 of the JPEG
    /// standard. Slow for large alphabets with very long codes,
    /// close to the optimum in practice.
    Jpeg,

    /// Computes the optimal unlimited code first, then collapses all
    /// oversized codes onto the limit in a single sweep and rebalances,
    /// the way the MiniZ library does. Faster than the JPEG procedure
    /// and produces codes of the same quality.
    Miniz,

    /// Repeatedly shrinks the histogram and retries the unlimited
    /// algorithm until the longest code happens to fit, the way BZIP2 does.
    /// The options control how aggressively each round shrinks.
    Bzip2(RescaleOptions),

    /// Skips tree construction entirely and rounds each symbol's entropy
    /// to a whole number of bits, then repairs the Kraft sum with linear
    /// scans. Fastest strategy, noticeably worse codes.
    Kraft,

    /// Like `Kraft`, but picks the cheapest code to lengthen through a
    /// max-heap instead of scanning. Fewer steps on large alphabets,
    /// at a higher cost per step.
    KraftHeap,
}


impl Strategy {

    /// Assign a code length to every used symbol, none exceeding `max_length` bits.
    /// Unused symbols receive length zero. Returns the longest assigned length.
    pub fn code_lengths(self, max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
        use self::Strategy::*;
        match self {
            PackageMerge => package_merge(max_length, histogram, lengths),
            Jpeg => jpeg(max_length, histogram, lengths),
            Miniz => miniz(max_length, histogram, lengths),
            Bzip2(options) => bzip2_with(options, max_length, histogram, lengths),
            Kraft => kraft(max_length, histogram, lengths),
            KraftHeap => kraft_heap(max_length, histogram, lengths),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} length limiting", match self {
            Strategy::PackageMerge => "package-merge",
            Strategy::Jpeg => "jpeg",
            Strategy::Miniz => "miniz",
            Strategy::Bzip2(_) => "bzip2",
            Strategy::Kraft => "kraft",
            Strategy::KraftHeap => "kraft heap",
        })
    }
}


/// Reject limits for which no strategy can work: zero would leave no room
/// for any code at all, and limits beyond 63 bits would overflow the
/// integer Kraft arithmetic.
pub(crate) fn validate_limit(max_length: u8) -> Result<()> {
    if max_length == 0 || max_length > MAX_SUPPORTED_LENGTH {
        Err(Error::UnsupportedLimit(max_length))
    }
    else {
        Ok(())
    }
}

/// Reject alphabets that cannot be represented under the limit at all.
/// A prefix code with at most `max_length` bits per code exists
/// if and only if there are at most `2^max_length` used symbols.
pub(crate) fn validate_symbol_count(max_length: u8, symbols: usize) -> Result<()> {
    if symbols as u64 > 1_u64 << max_length {
        Err(Error::LimitTooSmall { limit: max_length, symbols })
    }
    else {
        Ok(())
    }
}
