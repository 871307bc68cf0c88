//! Longest-common-block match ratio.
//!
//! Greedy longest-contiguous-match algorithm: find the longest common block,
//! then recurse into the gaps on either side of it. The ratio is
//! `2 * M / (len(a) + len(b))` where `M` is the total matched size. No junk
//! or popularity heuristics are applied; every character participates.

use std::collections::HashMap;

/// Block-match ratio between two strings, in [0.0, 1.0].
///
/// Two empty strings are a perfect match (total length zero).
pub fn block_match_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    // char -> positions in b, ascending. Built once, shared by every
    // longest-match search.
    let mut b_positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b_positions.entry(c).or_default().push(j);
    }

    let matched = total_matched(&a, &b, &b_positions);
    2.0 * matched as f64 / total as f64
}

/// Sum of matched block sizes. Each longest match splits its range into a
/// left and a right gap, which are searched in turn; an explicit worklist
/// stands in for recursion.
fn total_matched(a: &[char], b: &[char], b_positions: &HashMap<char, Vec<usize>>) -> usize {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut matched = 0usize;

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, a_lo, a_hi, b_lo, b_hi, b_positions);
        if size == 0 {
            continue;
        }
        matched += size;
        pending.push((a_lo, i, b_lo, j));
        pending.push((i + size, a_hi, j + size, b_hi));
    }

    matched
}

/// Longest contiguous match within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`,
/// returned as `(a_start, b_start, size)`. Ties resolve to the earliest
/// block in `a`, then in `b`, which keeps the gap recursion deterministic.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
    b_positions: &HashMap<char, Vec<usize>>,
) -> (usize, usize, usize) {
    let mut best = (a_lo, b_lo, 0usize);

    // j2len[j] = length of the match ending at a[i] / b[j]; rebuilt per row
    // from the previous row's j - 1 entries.
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for i in a_lo..a_hi {
        let mut next_j2len: HashMap<usize, usize> = HashMap::new();

        if let Some(positions) = b_positions.get(&a[i]) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }

                let k = if j == b_lo {
                    1
                } else {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_j2len.insert(j, k);

                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }

        j2len = next_j2len;
    }

    best
}
