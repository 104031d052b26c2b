//! Cyclic index arithmetic shared by the chart engines.

/// Reduce `value` into `0..len`.
///
/// Negative values wrap from the end, so the result is always a valid
/// position in a table of `len` entries.
pub fn wrap(value: i64, len: usize) -> usize {
    value.rem_euclid(len as i64) as usize
}

/// One-based cyclic position in `1..=len`.
///
/// Like `value % len`, except that a zero remainder maps to `len` (the last
/// entry) instead of an empty slot.
pub fn one_based(value: i64, len: usize) -> usize {
    match wrap(value, len) {
        0 => len,
        rest => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negatives() {
        assert_eq!(wrap(13, 12), 1);
        assert_eq!(wrap(-1, 12), 11);
        assert_eq!(wrap(0, 9), 0);
    }

    #[test]
    fn one_based_maps_zero_to_last() {
        assert_eq!(one_based(16, 8), 8);
        assert_eq!(one_based(17, 8), 1);
        assert_eq!(one_based(2050, 6), 4);
        assert_eq!(one_based(0, 6), 6);
        assert_eq!(one_based(-1, 8), 7);
    }
}
