
//! Optimal prefix code lengths without any limit on the longest code,
//! based on Alistair Moffat's in-place algorithm.
// see https://people.eng.unimelb.edu.au/ammoffat/inplace.c

use crate::error::{Result, Error};
use crate::sorting;


/// Computes the optimal code length for every symbol in the histogram.
///
/// Each histogram entry states how often that symbol occurred.
/// Unused symbols (count zero) are assigned length zero, all other symbols
/// at least one bit. The lengths can be turned into actual bit patterns with
/// any canonical code assignment.
///
/// For example, the data `"AADADCAA"` yields the histogram `[5, 0, 1, 2]`
/// (five `A`, no `B`, one `C`, two `D`) and the code lengths `[1, 0, 2, 2]`:
/// encoding the whole data takes `5*1 + 1*2 + 2*2 = 11` bits, which no
/// prefix code can beat.
///
/// Both slices must have the same length.
/// Returns the longest assigned code length,
/// or an error for an all-zero histogram.
pub fn code_lengths(histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
    assert_eq!(histogram.len(), lengths.len(), "histogram and length buffer size mismatch");

    for length in lengths.iter_mut() {
        *length = 0;
    }

    let sorted = sorting::ascending_counts(histogram);
    if sorted.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    let mut weights: Vec<u32> = sorted.iter().map(|&(count, _)| count).collect();
    let max_length = sorted_in_place(&mut weights)?;

    // lengths come back in descending order,
    // so the least frequent symbol receives the longest code
    for (&(_, symbol), &length) in sorted.iter().zip(&weights) {
        lengths[symbol] = length as u8;
    }

    Ok(max_length)
}


/// Computes optimal code lengths directly inside the weight buffer.
///
/// The buffer must contain the counts of all used symbols in ascending order,
/// without any zero entry. On return, the same buffer holds the code lengths
/// in _descending_ order instead, such that the first entry is the longest
/// length and belongs to the least frequent symbol.
///
/// A single-entry buffer is assigned length one, not zero,
/// so that the resulting code remains usable.
/// Returns the longest assigned code length, or an error for an empty buffer.
///
/// Runs in three passes over the buffer and needs no extra memory.
pub fn sorted_in_place(weights: &mut [u32]) -> Result<u8> {
    if weights.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    debug_assert!(
        weights.windows(2).all(|pair| pair[0] <= pair[1]) && weights[0] > 0,
        "weights must be ascending and non-zero"
    );

    if weights.len() == 1 {
        weights[0] = 1;
        return Ok(1);
    }

    let count = weights.len();

    // phase 1: combine the two cheapest nodes until a single tree remains.
    // internal nodes overwrite the weight buffer from the front, and each
    // consumed slot records the index of its parent instead of a weight
    let mut leaf = 0;
    let mut root = 0;

    for next in 0 .. count - 1 {
        // first child
        if leaf >= count || (root < next && weights[root] < weights[leaf]) {
            weights[next] = weights[root];
            weights[root] = next as u32;
            root += 1;
        }
        else {
            weights[next] = weights[leaf];
            leaf += 1;
        }

        // second child
        if leaf >= count || (root < next && weights[root] < weights[leaf]) {
            weights[next] += weights[root];
            weights[root] = next as u32;
            root += 1;
        }
        else {
            weights[next] += weights[leaf];
            leaf += 1;
        }
    }

    // phase 2: convert the parent index chain into node depths, root first
    weights[count - 2] = 0;
    for node in (0 .. count - 2).rev() {
        weights[node] = weights[weights[node] as usize] + 1;
    }

    // phase 3: spread the leaf depths over the buffer, deepest level first.
    // on each level, the slots not consumed by internal nodes become leaves
    let mut available: u32 = 1;
    let mut used: u32 = 0;
    let mut depth: u32 = 0;

    let mut internal = count as i64 - 2;
    let mut next = count;

    while available > 0 {
        while internal >= 0 && weights[internal as usize] == depth {
            used += 1;
            internal -= 1;
        }

        while available > used {
            next -= 1;
            weights[next] = depth;
            available -= 1;
        }

        available = 2 * used;
        depth += 1;
        used = 0;
    }

    Ok(weights[0] as u8)
}
