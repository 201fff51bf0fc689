//! Digit arithmetic behind every property in the registry.
//!
//! All predicates are pure and run in `O(digits(n))`, except the square
//! checks which use the integer square root.

/// Yields the decimal digits of `n`, least significant first.
///
/// `0` yields nothing: it has no digits to inspect for the digit based
/// properties (duck, spy).
fn digits(n: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(n), |rest| Some(rest / 10))
        .take_while(|rest| *rest > 0)
        .map(|rest| rest % 10)
}

/// Number of decimal digits, `0` counting as one digit.
fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

fn is_perfect_square(n: u128) -> bool {
    let root = n.isqrt();
    root * root == n
}

fn digit_square_sum(n: u64) -> u64 {
    digits(n).map(|d| d * d).sum()
}

pub(crate) fn is_even(n: u64) -> bool {
    n % 2 == 0
}

pub(crate) fn is_odd(n: u64) -> bool {
    n % 2 != 0
}

pub(crate) fn is_buzz(n: u64) -> bool {
    n % 7 == 0 || n % 10 == 7
}

pub(crate) fn is_duck(n: u64) -> bool {
    digits(n).any(|d| d == 0)
}

pub(crate) fn is_palindromic(n: u64) -> bool {
    let text = n.to_string();
    text.bytes().eq(text.bytes().rev())
}

/// Numbers below three digits are never gapful.
pub(crate) fn is_gapful(n: u64) -> bool {
    let len = digit_count(n);
    if len < 3 {
        return false;
    }

    let first = n / 10u64.pow(len - 1);
    let divisor = first * 10 + n % 10;
    n % divisor == 0
}

pub(crate) fn is_spy(n: u64) -> bool {
    // 9^20 still fits in a u64, so the product of a u64's digits cannot overflow.
    let (sum, product) = digits(n).fold((0u64, 1u64), |(sum, product), d| (sum + d, product * d));
    sum == product
}

/// Squares of positive integers only, so `0` is sunny but not square.
pub(crate) fn is_square(n: u64) -> bool {
    n > 0 && is_perfect_square(u128::from(n))
}

pub(crate) fn is_sunny(n: u64) -> bool {
    is_perfect_square(u128::from(n) + 1)
}

pub(crate) fn is_jumping(n: u64) -> bool {
    let mut iter = digits(n);
    let Some(mut previous) = iter.next() else {
        return true;
    };

    for digit in iter {
        if previous.abs_diff(digit) != 1 {
            return false;
        }
        previous = digit;
    }
    true
}

/// Floyd's cycle detection over the digit-square-sum sequence.
///
/// Every such sequence ends in a cycle, either the fixed point `1` (happy)
/// or the `4 → 16 → … → 4` loop (sad), so the loop always terminates.
pub(crate) fn is_happy(n: u64) -> bool {
    let mut slow = n;
    let mut fast = n;
    loop {
        slow = digit_square_sum(slow);
        fast = digit_square_sum(digit_square_sum(fast));
        if slow == fast {
            return slow == 1;
        }
    }
}

pub(crate) fn is_sad(n: u64) -> bool {
    !is_happy(n)
}
