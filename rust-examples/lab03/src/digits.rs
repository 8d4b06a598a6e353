//! 오른쪽에서 왼쪽으로 읽는 자릿수 (Digits of a number, read right to left)

/// `x`의 십진 자릿수가 감소하지 않는 순서인지 여부
/// (Returns true if the base 10 digits of `x` are in non-decreasing order).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::ordered_digits;
/// assert!(ordered_digits(5));
/// assert!(ordered_digits(11));
/// assert!(ordered_digits(1357));
/// assert!(!ordered_digits(21));
/// assert!(!ordered_digits(1375));
/// ```
pub fn ordered_digits(mut x: u64) -> bool {
    // Walking from the right, each digit must be <= the one after it.
    let mut after = 9;
    while x != 0 {
        let digit = x % 10;
        if digit > after {
            return false;
        }
        after = digit;
        x /= 10;
    }
    true
}

/// `n` 안의 `k`번째 증가 구간의 첫 자릿수
/// (Returns the first digit of the `k`th increasing run within `n`).
///
/// 구간은 엄격히 증가하는 자릿수의 최대 구간이며 오른쪽부터 0번으로 셉니다
/// (Runs are maximal stretches of strictly increasing digits, numbered from
/// the right starting at 0). `k`가 마지막 구간을 넘으면 가장 왼쪽 구간의 첫
/// 자릿수를 돌려줍니다 (When `k` is past the last run, the first digit of the
/// leftmost run is returned). `0`에는 구간이 없습니다 (`0` has no runs).
///
/// ```text
/// 123444345  ->  1234 | 4 | 4 | 345
///   run           3     2   1    0
/// ```
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::get_k_run_starter;
/// assert_eq!(get_k_run_starter(123444345, 0), Some(3));
/// assert_eq!(get_k_run_starter(123444345, 1), Some(4));
/// assert_eq!(get_k_run_starter(123444345, 3), Some(1));
/// assert_eq!(get_k_run_starter(0, 0), None);
/// ```
pub fn get_k_run_starter(mut n: u64, k: usize) -> Option<u8> {
    let mut starter = None;
    let mut run = 0;
    while n != 0 && run <= k {
        // Strip one run: keep dropping digits while they decrease leftward.
        let mut first = 10;
        while n != 0 && n % 10 < first {
            first = n % 10;
            n /= 10;
        }
        starter = Some(first as u8);
        run += 1;
    }
    starter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_digits() {
        assert!(ordered_digits(5));
        assert!(ordered_digits(11));
        assert!(ordered_digits(127));
        assert!(ordered_digits(1357));
        assert!(!ordered_digits(21));
        assert!(!ordered_digits(1375));
    }

    #[test]
    fn test_ordered_digits_edges() {
        assert!(ordered_digits(0));
        assert!(ordered_digits(999));
        assert!(!ordered_digits(90));
    }

    #[test]
    fn test_run_starters() {
        assert_eq!(get_k_run_starter(123444345, 0), Some(3));
        assert_eq!(get_k_run_starter(123444345, 1), Some(4));
        assert_eq!(get_k_run_starter(123444345, 2), Some(4));
        assert_eq!(get_k_run_starter(123444345, 3), Some(1));
        assert_eq!(get_k_run_starter(123412341234, 1), Some(1));
        assert_eq!(get_k_run_starter(1234234534564567, 0), Some(4));
        assert_eq!(get_k_run_starter(1234234534564567, 1), Some(3));
        assert_eq!(get_k_run_starter(1234234534564567, 2), Some(2));
    }

    #[test]
    fn test_run_starter_past_last_run() {
        assert_eq!(get_k_run_starter(123444345, 4), Some(1));
        assert_eq!(get_k_run_starter(21, 7), Some(2));
        assert_eq!(get_k_run_starter(5, 0), Some(5));
    }

    #[test]
    fn test_run_starter_of_zero() {
        assert_eq!(get_k_run_starter(0, 3), None);
    }
}
