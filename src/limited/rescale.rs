
//! Length limiting by shrinking the histogram until the optimal
//! unlimited code happens to obey the limit, the way BZIP2 does.
// see https://github.com/Unidata/compression/blob/master/bzip2/huffman.c

use crate::error::{Result, Error};
use crate::huffman;
use crate::sorting;
use super::{validate_limit, validate_symbol_count};


/// How aggressively each rescaling round shrinks the symbol counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RescaleOptions {

    /// Every count is divided by this value in each round.
    /// Larger divisors reach the limit in fewer rounds
    /// but may overshoot and produce needlessly long codes.
    /// Must be at least two, as a smaller divisor would never shrink anything.
    pub divide_by: u32,

    /// This many low bits of every count are discarded before dividing
    /// and restored as zeroes afterwards, so small counts collapse quickly.
    pub extra_shift: u32,
}

impl Default for RescaleOptions {

    /// Halve all counts each round without discarding any bits.
    /// Needs a few more rounds than [`RescaleOptions::fast`]
    /// but finds considerably better codes.
    fn default() -> Self {
        RescaleOptions { divide_by: 2, extra_shift: 0 }
    }
}

impl RescaleOptions {

    /// The parameters of the original BZIP2 implementation, which discards
    /// the low eight bits of every count. Reaches the limit in very few
    /// rounds, sacrificing a noticeable amount of compression efficiency.
    pub fn fast() -> Self {
        RescaleOptions { divide_by: 2, extra_shift: 8 }
    }
}


/// Computes code lengths of at most `max_length` bits
/// by rescaling the histogram, using the default options.
///
/// Unused symbols are assigned length zero. Both slices must have the same
/// length. Returns the longest assigned code length.
pub fn bzip2(max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
    bzip2_with(RescaleOptions::default(), max_length, histogram, lengths)
}


/// Computes code lengths of at most `max_length` bits by rescaling the histogram.
///
/// Runs the optimal unlimited algorithm, and wherever the longest code
/// overshoots the limit, divides all symbol counts as specified by the
/// options and retries. Dividing never drops a count to zero, and ever
/// smaller counts flatten the code tree, so a handful of rounds suffices.
///
/// Unused symbols are assigned length zero. Both slices must have the same
/// length. Returns the longest assigned code length.
pub fn bzip2_with(options: RescaleOptions, max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
    assert_eq!(histogram.len(), lengths.len(), "histogram and length buffer size mismatch");

    validate_limit(max_length)?;

    for length in lengths.iter_mut() {
        *length = 0;
    }

    let sorted = sorting::ascending_counts(histogram);
    if sorted.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    validate_symbol_count(max_length, sorted.len())?;

    debug_assert!(options.divide_by >= 2, "a divisor below two never shrinks the histogram");
    let divide_by = options.divide_by.max(2);
    let extra_shift = options.extra_shift.min(31);

    // the scratch buffer is overwritten with code lengths on every attempt,
    // while the rescaled weights survive in a separate buffer
    let mut weights: Vec<u32> = sorted.iter().map(|&(count, _)| count).collect();
    let mut scratch = weights.clone();

    let mut max = huffman::sorted_in_place(&mut scratch)?;

    while max > max_length {
        for (weight, slot) in weights.iter_mut().zip(scratch.iter_mut()) {
            // adding one keeps every weight above zero,
            // and shrinking keeps the buffer ascending
            let shrunk = (1 + ((*weight >> extra_shift) / divide_by)) << extra_shift;

            *weight = shrunk;
            *slot = shrunk;
        }

        max = huffman::sorted_in_place(&mut scratch)?;
    }

    for (&(_, symbol), &length) in sorted.iter().zip(&scratch) {
        lengths[symbol] = length as u8;
    }

    Ok(max)
}
