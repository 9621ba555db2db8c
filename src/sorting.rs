
//! Shared preprocessing: extract the used symbols of a histogram,
//! ordered ascending by how often each symbol occurred.

use smallvec::SmallVec;


/// `(count, symbol)` pairs of all used symbols, least frequent first.
/// Stays on the stack for alphabets of up to 64 used symbols.
pub type SortedSymbols = SmallVec<[(u32, usize); 64]>;


/// Extract all non-zero histogram entries, sorted ascending by count.
/// Ties are broken by symbol index, keeping the result deterministic.
/// Returns an empty vector if no symbol is used at all.
pub fn ascending_counts(histogram: &[u32]) -> SortedSymbols {
    let mut sorted: SortedSymbols = histogram.iter().enumerate()
        .filter(|&(_, &count)| count != 0)
        .map(|(symbol, &count)| (count, symbol))
        .collect();

    sorted.sort_unstable();
    sorted
}
