//! 핑퐁 수열 (The ping-pong sequence)
//!
//! 수열은 1부터 올라가다가 8의 배수이거나 숫자 8을 포함하는 인덱스마다 방향을 바꿉니다
//! (The sequence counts up from 1 and switches direction after every index
//! that is a multiple of 8 or contains the digit 8). 인덱스 `i`가 "위"를 가리키는지가
//! 방향 플래그이며, [`Classifier::classify`]가 계산하고 분류기가 소유한 표에 메모이제이션합니다
//! (Whether index `i` points "up" is its *direction flag*, computed by
//! [`Classifier::classify`] and memoized in a table owned by the classifier).
//!
//! ```text
//! i      1 2 3 4 5 6 7 8 9 10 ... 15 16 17 18 19 20 21
//! value  1 2 3 4 5 6 7 8 7 6  ... 1  0  1  2  1  0  -1
//! ```
//!
//! 교재 버전은 모듈 전역 딕셔너리와 인덱스마다 한 번의 재귀를 씁니다
//! (The textbook version keeps the flags in a module-level dictionary and
//! recurses once per index). 여기서는 표가 [`Classifier`] 값 안에 있고 두 연산 모두
//! 반복문이므로 큰 인덱스도 스택을 넘치게 하지 않습니다 (Here the table lives in a
//! [`Classifier`] value and both operations are loops, so large indices cannot
//! overflow the stack).

use crate::digits::has_eight;
use cs61a_common::{Error, MemoTable, Result};
use tracing::debug;

/// 방향 플래그를 계산하고 메모이제이션한다 (Computes and memoizes direction flags).
///
/// 플래그는 항상 인덱스 1부터 위로 채워지므로, 메모된 인덱스는 연속 구간
/// `1..=cached_len()`을 이룹니다 (Flags are always filled from index 1 upward, so
/// the memoized indices form the contiguous range `1..=cached_len()`).
///
/// # 예시 (Example)
///
/// ```
/// use cs61a_hw03::Classifier;
///
/// let mut classifier = Classifier::new();
/// assert_eq!(classifier.sequence_value(10).unwrap(), 6);
/// assert!(!classifier.classify(8).unwrap());
/// assert_eq!(classifier.cached_len(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    flags: MemoTable<u64, bool>,
}

/// Index `n` flips the direction if it is a multiple of 8 or contains an 8.
fn flips_at(n: u64) -> bool {
    n % 8 == 0 || has_eight(n)
}

fn require_positive(n: u64, what: &str) -> Result<()> {
    if n == 0 {
        return Err(Error::invalid(format!("{what} is defined for n >= 1, got 0")));
    }
    Ok(())
}

impl Classifier {
    /// 빈 캐시로 분류기 생성 (Creates a classifier with an empty cache).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 인덱스 `n`의 방향 플래그 (Returns the direction flag of index `n`).
    ///
    /// `classify(1)`은 `true`이고, `n > 1`이면 이전 플래그를 따르되 `n`이 8의 배수이거나
    /// 숫자 8을 포함하면 뒤집습니다 (for `n > 1` the flag is the previous flag,
    /// negated when `n` is a multiple of 8 or contains the digit 8).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for `n == 0`.
    pub fn classify(&mut self, n: u64) -> Result<bool> {
        require_positive(n, "classify")?;
        if let Some(flag) = self.flags.get(&n) {
            return Ok(flag);
        }

        let (mut index, mut flag) = match self.flags.last() {
            Some(last) => last,
            None => (1, self.flags.record(1, true)),
        };
        debug!(from = index + 1, to = n, "extending direction cache");

        while index < n {
            index += 1;
            if flips_at(index) {
                flag = !flag;
            }
            flag = self.flags.record(index, flag);
        }
        Ok(flag)
    }

    /// 핑퐁 수열의 `n`번째 원소 (Returns the `n`th element of the ping-pong sequence).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for `n == 0`.
    #[doc(alias = "pingpong")]
    pub fn sequence_value(&mut self, n: u64) -> Result<i64> {
        require_positive(n, "sequence_value")?;
        if n > 1 {
            self.classify(n - 1)?;
        }

        let flags = self.flags.snapshot();
        let mut steps = 0u64;
        let mut value = 1i64;
        for (_, up) in flags.range(1..n) {
            value += if *up { 1 } else { -1 };
            steps += 1;
        }
        debug_assert_eq!(steps, n - 1, "flags 1..{n} are memoized after classify");
        Ok(value)
    }

    /// 메모된 방향 플래그 수 (Number of memoized direction flags).
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.flags.len()
    }

    /// 메모된 모든 플래그의 저렴한 사본 (A cheap copy of every memoized flag, keyed by index).
    #[must_use]
    pub fn snapshot(&self) -> im::OrdMap<u64, bool> {
        self.flags.snapshot()
    }

    /// 메모된 플래그를 모두 버린다 (Drops every memoized flag).
    pub fn clear(&mut self) {
        debug!(entries = self.flags.len(), "clearing direction cache");
        self.flags.clear();
    }
}

/// 이 호출에만 쓰이는 캐시로 계산한 방향 플래그
/// (Direction flag of `n`, using a cache scoped to this call).
///
/// # 예시 (Example)
///
/// ```
/// use cs61a_hw03::classify;
/// assert!(classify(1).unwrap());
/// assert!(!classify(8).unwrap());
/// assert!(classify(0).is_err());
/// ```
pub fn classify(n: u64) -> Result<bool> {
    Classifier::new().classify(n)
}

/// 이 호출에만 쓰이는 캐시로 계산한 `n`번째 핑퐁 원소
/// (The `n`th ping-pong element, using a cache scoped to this call).
///
/// # 예시 (Example)
///
/// ```
/// use cs61a_hw03::sequence_value;
/// assert_eq!(sequence_value(8).unwrap(), 8);
/// assert_eq!(sequence_value(21).unwrap(), -1);
/// assert_eq!(sequence_value(100).unwrap(), -6);
/// ```
#[doc(alias = "pingpong")]
pub fn sequence_value(n: u64) -> Result<i64> {
    Classifier::new().sequence_value(n)
}
