
//! Length limiting by demoting codes in a histogram of bit lengths.
//! Contains two reducers with identical results: the iterative procedure
//! of JPEG annex K.3, and the single-sweep variant found in MiniZ.

use crate::error::{Result, Error};
use crate::huffman;
use crate::sorting;
use super::{validate_limit, validate_symbol_count, MAX_SUPPORTED_LENGTH};


/// Computes code lengths of at most `max_length` bits with the JPEG procedure.
///
/// Starts from the optimal unlimited code and demotes pairs of the longest
/// codes until the limit holds, as described in annex K.3 of the JPEG
/// standard. Close to the optimum in practice, but each step only shortens
/// two codes, so huge alphabets far over the limit take many steps.
///
/// Unused symbols are assigned length zero. Both slices must have the same
/// length. Returns the longest assigned code length.
pub fn jpeg(max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
    reduce_bit_lengths(jpeg_in_place, max_length, histogram, lengths)
}

/// Computes code lengths of at most `max_length` bits the way MiniZ does.
///
/// Starts from the optimal unlimited code, moves all oversized codes onto
/// the limit at once and then rebalances until the Kraft inequality holds
/// again. Produces the same lengths as [`jpeg`] while getting there faster.
///
/// Unused symbols are assigned length zero. Both slices must have the same
/// length. Returns the longest assigned code length.
pub fn miniz(max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
    reduce_bit_lengths(miniz_in_place, max_length, histogram, lengths)
}


/// Both reducers share everything but the actual histogram transformation.
type ReduceInPlace = fn(u8, u8, &mut [u32; 64]) -> Result<u8>;

fn reduce_bit_lengths(reduce: ReduceInPlace, max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
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

    let mut weights: Vec<u32> = sorted.iter().map(|&(count, _)| count).collect();
    let unlimited_max = huffman::sorted_in_place(&mut weights)?;

    // the optimal code may already obey the limit
    if unlimited_max <= max_length {
        for (&(_, symbol), &length) in sorted.iter().zip(&weights) {
            lengths[symbol] = length as u8;
        }

        return Ok(unlimited_max);
    }

    if unlimited_max > MAX_SUPPORTED_LENGTH {
        return Err(Error::UnsupportedLimit(unlimited_max));
    }

    let mut bit_counts = [0_u32; 64];
    for &length in &weights {
        bit_counts[length as usize] += 1;
    }

    let reduced_max = reduce(max_length, unlimited_max, &mut bit_counts)?;

    // hand the longest remaining length to the least frequent symbol,
    // consuming the reduced histogram from the top
    let mut next_length = reduced_max;
    for &(_, symbol) in &sorted {
        lengths[symbol] = next_length;

        bit_counts[next_length as usize] -= 1;
        while next_length > 0 && bit_counts[next_length as usize] == 0 {
            next_length -= 1;
        }
    }

    Ok(reduced_max)
}


/// Reduces the longest code in a histogram of bit lengths from
/// `old_max` to at most `new_max` bits, mutating the histogram in place.
///
/// `bit_counts[length]` states how many symbols currently use a code of
/// that length; entry zero must be zero. The histogram must describe a
/// complete prefix code, such as one produced by [`huffman::sorted_in_place`],
/// with no more than `2^new_max` codes in total.
///
/// Each step takes two codes of the longest length and a shorter donor
/// code: one long code gives up its last bit, while the donor grows by one
/// bit and thereby frees a sibling slot for the other long code. This
/// keeps the Kraft sum unchanged, so the result is again a valid prefix code.
///
/// Requires `1 < new_max <= old_max <= 63`. Returns the longest length
/// still in use afterwards, or an error if the histogram turns out not to
/// be reducible.
pub fn jpeg_in_place(new_max: u8, old_max: u8, bit_counts: &mut [u32; 64]) -> Result<u8> {
    // see https://www.w3.org/Graphics/JPEG/itu-t81.pdf, annex K.3 (page 147)

    if new_max <= 1 || new_max > old_max {
        return Err(Error::UnsupportedLimit(new_max));
    }

    if old_max > MAX_SUPPORTED_LENGTH {
        return Err(Error::UnsupportedLimit(old_max));
    }

    if new_max == old_max {
        return Ok(new_max);
    }

    debug_assert_eq!(bit_counts[0], 0, "no code can be zero bits long");

    // demote codes at the longest bit length until none remain over the limit
    let mut longest = old_max as usize;
    while longest > new_max as usize {
        if bit_counts[longest] == 0 {
            longest -= 1;
            continue;
        }

        // find a donor code that is at least two bits shorter
        let mut donor = longest - 2;
        while donor > 0 && bit_counts[donor] == 0 {
            donor -= 1;
        }

        // a complete code always has an even number of codes at the deepest
        // length and a donor above it, unless the histogram was invalid
        if donor == 0 || bit_counts[longest] < 2 {
            return Err(Error::InvalidLengthHistogram);
        }

        // the two longest codes shared a prefix: one keeps it and becomes one
        // bit shorter, the other takes over a code derived from the donor
        bit_counts[longest] -= 2;
        bit_counts[longest - 1] += 1;
        bit_counts[donor + 1] += 2;
        bit_counts[donor] -= 1;
    }

    // return the longest length still in use
    while longest > 0 && bit_counts[longest] == 0 {
        longest -= 1;
    }

    Ok(longest as u8)
}


/// Reduces the longest code in a histogram of bit lengths from
/// `old_max` to `new_max` bits, mutating the histogram in place.
///
/// Same contract and same results as [`jpeg_in_place`], but instead of
/// slowly walking down it collapses all oversized codes onto `new_max`
/// immediately and then repairs the Kraft sum, which is faster.
pub fn miniz_in_place(new_max: u8, old_max: u8, bit_counts: &mut [u32; 64]) -> Result<u8> {
    // see https://github.com/richgel999/miniz/blob/master/miniz_tdef.c

    if new_max <= 1 || new_max > old_max {
        return Err(Error::UnsupportedLimit(new_max));
    }

    if old_max > MAX_SUPPORTED_LENGTH {
        return Err(Error::UnsupportedLimit(old_max));
    }

    if new_max == old_max {
        return Ok(new_max);
    }

    debug_assert_eq!(bit_counts[0], 0, "no code can be zero bits long");

    let new_max_index = new_max as usize;

    // move all oversized codes onto the longest allowed length.
    // the code is invalid now, its kraft sum may exceed one
    for length in new_max_index + 1 ..= old_max as usize {
        bit_counts[new_max_index] += bit_counts[length];
        bit_counts[length] = 0;
    }

    // integer kraft sum, scaled such that 2^new_max means one
    let mut total: u64 = 0;
    for length in 1 ..= new_max_index {
        total += u64::from(bit_counts[length]) << (new_max_index - length);
    }

    let one = 1_u64 << new_max;

    while total > one {
        if bit_counts[new_max_index] == 0 {
            return Err(Error::InvalidLengthHistogram);
        }

        // select one code of maximum length, it will be moved
        bit_counts[new_max_index] -= 1;

        // extend the longest shorter code by one bit and let the selected
        // code take the freed slot beside it. quite often the selected code
        // ends up at the same length it already had
        let donor = match (1 .. new_max_index).rev().find(|&length| bit_counts[length] > 0) {
            Some(length) => length,
            None => return Err(Error::InvalidLengthHistogram),
        };

        bit_counts[donor] -= 1;
        bit_counts[donor + 1] += 2;

        total -= 1;
    }

    Ok(new_max)
}
