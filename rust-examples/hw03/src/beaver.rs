//! 함수를 여러 번 호출하기 (Calling a function many times)

/// [`beaver`]가 인자를 호출하는 횟수 (How many times [`beaver`] calls its argument).
pub const BEAVER_CALLS: usize = 10_000;

/// `f`를 [`BEAVER_CALLS`]번 호출한다 (Calls `f` [`BEAVER_CALLS`] times).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::beaver::beaver;
/// let mut counter = 0;
/// beaver(|| counter += 1);
/// assert!(counter >= 1000);
/// ```
pub fn beaver(mut f: impl FnMut()) {
    (0..BEAVER_CALLS).for_each(|_| f());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calls_exactly() {
        let mut calls = 0;
        beaver(|| calls += 1);
        assert_eq!(calls, BEAVER_CALLS);
    }
}
