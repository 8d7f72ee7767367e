//! Binomial coefficient computation.

/// The binomial coefficient: the number of ways to choose `k` elements from a
/// set of `n` elements, ignoring order.
///
/// The product `n * (n - 1) * … * (n - k + 1) / k!` is accumulated one factor
/// at a time, as `product * (n + 1 - i) / i` for `i = 1..=k` in that exact
/// order. After the `i`-th step the accumulator holds `i` consecutive factors
/// divided by `i!`, which is itself a binomial coefficient, so every
/// intermediate value is an exact integer and no fractional or
/// arbitrary-precision arithmetic is needed.
///
/// `choose(0, n)` is `1` for any `n >= 0` (the empty product). Arguments are
/// not validated: pairs outside `0 <= k <= n` produce unspecified values, as
/// do pairs whose intermediate products exceed `i64` range. Callers wanting
/// the empty-set convention for out-of-range `k` must guard separately, as
/// [`Combinations`](crate::Combinations) does.
///
/// # Examples
///
/// ```
/// use nchoosek_core::choose;
///
/// assert_eq!(choose(2, 4), 6);
/// assert_eq!(choose(0, 10), 1);
/// assert_eq!(choose(5, 5), 1);
/// assert_eq!(choose(3, 7), choose(4, 7));
/// ```
#[must_use]
pub fn choose(k: i64, n: i64) -> i64 {
    (1..=k).fold(1, |product, i| product * (n + 1 - i) / i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_values() {
        assert_eq!(choose(2, 4), 6);
        assert_eq!(choose(1, 4), 4);
        assert_eq!(choose(3, 4), 4);
        assert_eq!(choose(5, 10), 252);
    }

    #[test]
    fn test_zero_k() {
        for n in 0..20 {
            assert_eq!(choose(0, n), 1);
        }
    }

    #[test]
    fn test_k_equals_n() {
        for n in 0..20 {
            assert_eq!(choose(n, n), 1);
        }
    }

    #[test]
    fn test_symmetry() {
        for n in 0..30 {
            for k in 0..=n {
                assert_eq!(choose(k, n), choose(n - k, n));
            }
        }
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1..30 {
            for k in 1..n {
                assert_eq!(choose(k, n), choose(k - 1, n - 1) + choose(k, n - 1));
            }
        }
    }

    #[test]
    fn test_large_exact() {
        assert_eq!(choose(10, 20), 184_756);
        assert_eq!(choose(30, 60), 118_264_581_564_861_424);
    }
}
