
//! The package-merge algorithm, which constructs an optimal
//! length-limited prefix code by solving the coin collector problem.
// based on the paper "A Fast and Space-Economical Algorithm for Length-Limited Coding"
// by Katajainen, Moffat and Turpin

use crate::error::{Result, Error};
use crate::sorting;
use super::{validate_limit, validate_symbol_count};


/// Computes optimal code lengths of at most `max_length` bits per symbol.
///
/// Among all prefix codes obeying the limit, the result has the smallest
/// possible total encoded size. This optimality costs time and memory
/// proportional to the limit times the number of used symbols, which the
/// other strategies in this module undercut by giving up optimality.
///
/// Unused symbols are assigned length zero. Both slices must have the same
/// length. Returns the longest assigned code length, or an error if the
/// limit is out of range or too small for the number of used symbols.
pub fn package_merge(max_length: u8, histogram: &[u32], lengths: &mut [u8]) -> Result<u8> {
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

    if sorted.len() == 1 {
        lengths[sorted[0].1] = 1;
        return Ok(1);
    }

    let symbol_count = sorted.len();
    let list_capacity = 2 * symbol_count - 1;

    // one cost list per allowed bit position. each round merges the pairwise
    // packages of the previous list with the plain symbol costs, cheapest
    // first. instead of storing all lists, remember for every list position
    // whether it held a package, one bit per round
    let mut costs: Vec<u64> = Vec::with_capacity(list_capacity);
    let mut merged: Vec<u64> = Vec::with_capacity(list_capacity);
    let mut was_package: Vec<u64> = vec![0; list_capacity];

    for round in 0 .. max_length {
        let round_bit = 1_u64 << round;
        merged.clear();

        let mut packages = costs.chunks_exact(2)
            .map(|pair| pair[0] + pair[1])
            .peekable();

        let mut symbols = sorted.iter()
            .map(|&(count, _)| u64::from(count))
            .peekable();

        loop {
            match (packages.peek(), symbols.peek()) {
                // symbols win ties, keeping the merge deterministic
                (Some(&package), Some(&symbol)) if symbol <= package => {
                    merged.push(symbol);
                    let _ = symbols.next();
                }

                (Some(&package), _) => {
                    was_package[merged.len()] |= round_bit;
                    merged.push(package);
                    let _ = packages.next();
                }

                (None, Some(&symbol)) => {
                    merged.push(symbol);
                    let _ = symbols.next();
                }

                (None, None) => break,
            }
        }

        std::mem::swap(&mut merged, &mut costs);
    }

    // of the final list, the 2M-2 cheapest coins form the optimal solution.
    // walking the rounds backwards, every selected symbol coin makes that
    // symbol's code one bit longer, and every selected package expands
    // into two coins of the previous round
    let mut selected = 2 * symbol_count - 2;
    let mut round = max_length;

    while round > 0 && selected > 0 {
        round -= 1;
        let round_bit = 1_u64 << round;
        let mut packages = 0;

        for position in 0 .. selected {
            if was_package[position] & round_bit == 0 {
                let (_, symbol) = sorted[position - packages];
                lengths[symbol] += 1;
            }
            else {
                packages += 1;
            }
        }

        selected = 2 * packages;
    }

    // the cheapest symbol always carries the longest code
    Ok(lengths[sorted[0].1])
}
