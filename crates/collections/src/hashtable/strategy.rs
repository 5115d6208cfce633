/// A pluggable string hash function.
///
/// Implementations must be pure and deterministic (the table never caches
/// hash values) and must handle the empty string. Arithmetic is wrapping
/// two's-complement `i32`, so long keys overflow rather than error and the
/// result may be negative.
pub trait HashStrategy {
    fn hash(&self, key: &str) -> i32;
}

/// Any `Fn(&str) -> i32` works as a strategy, which keeps fixed-value
/// strategies cheap to inject in tests.
impl<F> HashStrategy for F
where
    F: Fn(&str) -> i32,
{
    fn hash(&self, key: &str) -> i32 {
        self(key)
    }
}

/// Sums the code values of the key's characters.
///
/// Deliberately poor: every anagram of a key collides with it, so this is
/// the "bad" baseline in a comparison run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfCodepoints;

impl HashStrategy for SumOfCodepoints {
    fn hash(&self, key: &str) -> i32 {
        key.chars().fold(0i32, |h, c| h.wrapping_add(c as i32))
    }
}

/// Polynomial rolling hash with base 31 (`h = 31*h + c`), the classic
/// string-hash convention. Well distributed; may be negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellMixedStringHash;

impl HashStrategy for WellMixedStringHash {
    fn hash(&self, key: &str) -> i32 {
        key.chars()
            .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
    }
}
