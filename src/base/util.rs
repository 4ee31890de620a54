pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

/// Minimum number of bar characters drawn for the largest category, even on
/// narrow terminals.
pub const MIN_BARLEN: usize = 10;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Number of characters `s` occupies, counted in chars rather than bytes.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}
