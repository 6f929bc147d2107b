//! Greedy longest-match search over the history window.
//!
//! The window is simply the part of the input that precedes the cursor, limited to the last
//! WINDOW_SIZE bytes. A candidate source run may be shorter than the match it produces: the
//! run is repeated cyclically, so `aaaa...` matches against a single earlier `a`.
//!
//! Among equally long matches the OLDEST window position (largest distance) wins. The encoded
//! output depends on this, so any faster search has to resolve ties the same way.

use super::token::{MAX_MATCH, MIN_MATCH, WINDOW_SIZE};

/// Find the best back-reference for the bytes starting at `position`.
///
/// Returns `Some((distance, length))` with `1 <= distance <= WINDOW_SIZE` and
/// `MIN_MATCH <= length <= MAX_MATCH`, or None when no run of at least MIN_MATCH bytes
/// can be found in the window.
pub fn find_match(data: &[u8], position: usize) -> Option<(usize, usize)> {
    let max_len = MAX_MATCH.min(data.len().saturating_sub(position));
    if max_len < MIN_MATCH {
        return None;
    }
    let target = &data[position..position + max_len];
    let start = position.saturating_sub(WINDOW_SIZE);

    // One pass over the window, oldest first. Only a strictly longer match replaces the
    // current best, which keeps the oldest position on ties. This gives the same answer as
    // trying every length from max_len down and scanning the window for each.
    let mut best: Option<(usize, usize)> = None;
    for s in start..position {
        let length = wrapped_match_len(&data[s..position], target);
        if length >= MIN_MATCH && best.map_or(true, |(_, l)| length > l) {
            best = Some((position - s, length));
            if length == max_len {
                break;
            }
        }
    }
    best
}

/// Count how many leading bytes of `target` agree with `source` repeated cyclically.
fn wrapped_match_len(source: &[u8], target: &[u8]) -> usize {
    target
        .iter()
        .zip(source.iter().cycle())
        .take_while(|(a, b)| a == b)
        .count()
}

/// Extend `x` to exactly `num_bytes` bytes by repeating it.
///
/// `wrapped_slice(b"123", 5) == b"12312"` and `wrapped_slice(b"1234567", 5) == b"12345"`.
///
/// # Panics
///
/// Panics if `x` is empty and `num_bytes` is not zero.
pub fn wrapped_slice(x: &[u8], num_bytes: usize) -> Vec<u8> {
    if num_bytes == 0 {
        return Vec::new();
    }
    assert!(!x.is_empty(), "cannot wrap an empty slice");
    let repetitions = num_bytes / x.len();
    let remainder = num_bytes % x.len();
    let mut result = x.repeat(repetitions);
    result.extend_from_slice(&x[..remainder]);
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    /// Straightforward longest-first, oldest-first search built on wrapped_slice.
    fn reference_match(data: &[u8], position: usize) -> Option<(usize, usize)> {
        let end = (position + MAX_MATCH).min(data.len());
        let start = position.saturating_sub(WINDOW_SIZE);
        for j in (position + MIN_MATCH..=end).rev() {
            let target = &data[position..j];
            for i in start..position {
                if target == wrapped_slice(&data[i..position], target.len()).as_slice() {
                    return Some((position - i, target.len()));
                }
            }
        }
        None
    }

    #[test]
    fn wrapped_slice_test() {
        assert_eq!(wrapped_slice(b"1", 0), b"");
        assert_eq!(wrapped_slice(b"1", 1), b"1");
        assert_eq!(wrapped_slice(b"1", 2), b"11");
        assert_eq!(wrapped_slice(b"123", 5), b"12312");
        assert_eq!(wrapped_slice(b"1234567", 5), b"12345");
    }

    #[test]
    #[should_panic]
    fn wrapped_slice_empty_test() {
        wrapped_slice(b"", 3);
    }

    #[test]
    fn no_history_test() {
        assert_eq!(find_match(b"aaaaaaaa", 0), None);
    }

    #[test]
    fn short_lookahead_test() {
        // only three bytes left to encode, below MIN_MATCH
        assert_eq!(find_match(b"abcabc", 3), None);
        assert_eq!(find_match(b"abc", 3), None);
    }

    #[test]
    fn run_wraps_test() {
        assert_eq!(find_match(b"aaaaa", 1), Some((1, 4)));
        assert_eq!(find_match(&[b'a'; 16], 1), Some((1, 15)));
    }

    #[test]
    fn periodic_pattern_test() {
        let data = b"abc".repeat(100);
        assert_eq!(find_match(&data, 3), Some((3, 15)));
        // every multiple of 3 works; the oldest one (position 0) wins
        assert_eq!(find_match(&data, 18), Some((18, 15)));
    }

    #[test]
    fn tie_prefers_largest_distance_test() {
        // "wxyz" occurs at 0 and at 10, then again at 20 followed by a mismatch.
        // Both earlier copies give a 4 byte match; the one at distance 20 must win.
        let data = b"wxyz123456wxyz654321wxyz!";
        assert_eq!(find_match(data, 20), Some((20, 4)));
    }

    #[test]
    fn longer_match_beats_older_test() {
        // the older copy only matches 4 bytes, the newer one matches 6
        let data = b"wxyz12....wxyzAB....wxyzAB";
        assert_eq!(find_match(data, 20), Some((10, 6)));
    }

    #[test]
    fn window_limit_test() {
        // a unique 5 byte marker, filler, then the marker again
        let mut data = b"QRSTU".to_vec();
        data.extend(std::iter::repeat(b'-').take(WINDOW_SIZE - 1));
        let position = data.len();
        data.extend_from_slice(b"QRSTU");
        // marker sits WINDOW_SIZE + 4 bytes back, only its tail "U" is still in range
        assert_eq!(find_match(&data, position), None);

        let mut data = b"QRSTU".to_vec();
        data.extend(std::iter::repeat(b'-').take(WINDOW_SIZE - 5));
        let position = data.len();
        data.extend_from_slice(b"QRSTU");
        assert_eq!(find_match(&data, position), Some((WINDOW_SIZE, 5)));
    }

    proptest! {
        #[test]
        fn matches_reference_search(data in proptest::collection::vec(0u8..4, 0..200), pos in 0usize..200) {
            let pos = pos.min(data.len());
            prop_assert_eq!(find_match(&data, pos), reference_match(&data, pos));
        }

        #[test]
        fn match_is_in_bounds(data in proptest::collection::vec(0u8..3, 1..300), pos in 0usize..300) {
            let pos = pos.min(data.len() - 1);
            if let Some((distance, length)) = find_match(&data, pos) {
                prop_assert!((1..=WINDOW_SIZE).contains(&distance));
                prop_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
                let wrapped = wrapped_slice(&data[pos - distance..pos], length);
                prop_assert_eq!(&data[pos..pos + length], wrapped.as_slice());
            }
        }
    }
}
