//! 자릿수 세기 (Counting digits)
//!
//! 텍스트북의 재귀 대신 10으로 나누는 반복을 사용합니다
//! (Uses repeated division by 10 instead of the textbook recursion).

/// `n`의 십진 표기에서 `digit`이 나타나는 횟수
/// (Number of times `digit` appears in the decimal digits of `n`).
///
/// `0`은 자릿수가 없는 것으로 봅니다 (`0` is treated as having no digits),
/// so `digit_count(0, 0) == 0`.
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::digits::digit_count;
/// assert_eq!(digit_count(1_001_000, 0), 5);
/// assert_eq!(digit_count(2638, 3), 1);
/// ```
pub fn digit_count(mut n: u64, digit: u8) -> u32 {
    let digit = u64::from(digit);
    let mut count = 0;
    while n > 0 {
        if n % 10 == digit {
            count += 1;
        }
        n /= 10;
    }
    count
}

/// 숫자 8이 나타나는 횟수 (Returns the number of times 8 appears as a digit of `pos`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::num_eights;
/// assert_eq!(num_eights(3), 0);
/// assert_eq!(num_eights(88888888), 8);
/// assert_eq!(num_eights(8782089), 3);
/// ```
pub fn num_eights(pos: u64) -> u32 {
    digit_count(pos, 8)
}

/// 8을 포함하는지 여부 (Whether any digit of `n` is an 8).
pub fn has_eight(n: u64) -> bool {
    num_eights(n) > 0
}
