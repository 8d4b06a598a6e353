//! 거스름돈 세기 (Counting change, SICP 1.2.2 in CS61A's coin set)
//!
//! `d` 이하의 동전으로 `amount`를 만드는 방법의 수는 `d`를 하나 이상 쓰는 방법과
//! 더 작은 동전만 쓰는 방법의 합입니다
//! (The ways to make `amount` from coins no larger than `d` are the ways that
//! use at least one `d` plus the ways that use only smaller coins):
//!
//! ```text
//! ways(a, d) = ways(a - d, d) + ways(a, next_smaller(d))
//! ways(0, d) = 1
//! ways(a, none) = 0
//! ```
//!
//! [`count_ways`]는 트리 재귀를 명시적 스택으로 그대로 따라갑니다
//! (follows the tree recursion literally on an explicit stack).
//! [`count_ways_memo`]는 (금액, 동전) 표를 채워 O(amount) 공간에서 같은 답을 냅니다
//! (fills a table keyed on (amount, denomination) and gives the same answers
//! in O(amount) space).
//!
//! 쿼터부터 세면 [`MAX_COUNTABLE_AMOUNT`]를 넘는 금액의 답은 `u64`에 들어가지 않습니다
//! (Starting from a quarter, the count for any amount above
//! [`MAX_COUNTABLE_AMOUNT`] does not fit in a `u64`).

use cs61a_common::{CountStrategy, Error, Result};
use std::fmt;
use tracing::trace;

/// 쿼터부터 셀 때 결과가 `u64`에 들어가는 가장 큰 금액
/// (Largest amount whose count, starting from a quarter, fits in a `u64`).
pub const MAX_COUNTABLE_AMOUNT: u64 = 51_720_194;

/// 1, 5, 10, 25 체인의 동전 (A coin in the 1, 5, 10, 25 chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coin {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Coin {
    /// 작은 것부터 모든 동전 (Every coin, smallest first).
    pub const ALL: [Coin; 4] = [Coin::Penny, Coin::Nickel, Coin::Dime, Coin::Quarter];

    /// 최상위 계산이 시작하는 동전 (The coin every top-level count starts from).
    pub const LARGEST: Coin = Coin::Quarter;

    /// 센트 단위 액면가 (Face value in cents).
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Coin::Penny => 1,
            Coin::Nickel => 5,
            Coin::Dime => 10,
            Coin::Quarter => 25,
        }
    }

    /// 다음으로 큰 동전, 쿼터는 `None` (The next larger coin, `None` for a quarter).
    #[must_use]
    pub const fn next_larger(self) -> Option<Coin> {
        match self {
            Coin::Penny => Some(Coin::Nickel),
            Coin::Nickel => Some(Coin::Dime),
            Coin::Dime => Some(Coin::Quarter),
            Coin::Quarter => None,
        }
    }

    /// 다음으로 작은 동전, 페니는 `None` (The next smaller coin, `None` for a penny).
    #[must_use]
    pub const fn next_smaller(self) -> Option<Coin> {
        match self {
            Coin::Penny => None,
            Coin::Nickel => Some(Coin::Penny),
            Coin::Dime => Some(Coin::Nickel),
            Coin::Quarter => Some(Coin::Dime),
        }
    }

    /// 액면가로 동전 찾기 (Looks a coin up by face value).
    #[must_use]
    pub fn from_value(value: u64) -> Option<Coin> {
        Coin::ALL.into_iter().find(|coin| coin.value() == value)
    }
}

impl TryFrom<u64> for Coin {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Coin::from_value(value).ok_or_else(|| {
            Error::invalid(format!(
                "{value} is not a denomination; expected one of 1, 5, 10, 25"
            ))
        })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// 다음으로 큰 동전 값, 그 외의 값은 `None`
/// (Returns the next larger coin value; other values return `None`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::coins::next_larger_coin;
/// assert_eq!(next_larger_coin(1), Some(5));
/// assert_eq!(next_larger_coin(10), Some(25));
/// assert_eq!(next_larger_coin(2), None);
/// ```
pub fn next_larger_coin(coin: u64) -> Option<u64> {
    Coin::from_value(coin)?.next_larger().map(Coin::value)
}

/// 다음으로 작은 동전 값, 그 외의 값은 `None`
/// (Returns the next smaller coin value; other values return `None`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::coins::next_smaller_coin;
/// assert_eq!(next_smaller_coin(25), Some(10));
/// assert_eq!(next_smaller_coin(5), Some(1));
/// assert_eq!(next_smaller_coin(2), None);
/// ```
pub fn next_smaller_coin(coin: u64) -> Option<u64> {
    Coin::from_value(coin)?.next_smaller().map(Coin::value)
}

/// 명시적 스택 위의 트리 재귀로 세기
/// (Ways to make `amount` from coins no larger than `largest`, by tree
/// recursion over an explicit stack).
///
/// `largest == None`은 남은 동전이 없다는 뜻이므로 금액이 0이어도 0입니다
/// (means no coin is left, which yields 0 even for a zero amount).
///
/// The walk visits one leaf per counted way, so it is only practical for
/// small amounts; [`count_ways_with`] rejects amounts whose count overflows.
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::{Coin, count_ways};
/// assert_eq!(count_ways(15, Some(Coin::Quarter)), 6);
/// assert_eq!(count_ways(15, Some(Coin::Nickel)), 4);
/// assert_eq!(count_ways(0, None), 0);
/// ```
pub fn count_ways(amount: u64, largest: Option<Coin>) -> u64 {
    let mut ways = 0;
    let mut pending = vec![(amount, largest)];

    while let Some((amount, coin)) = pending.pop() {
        let Some(coin) = coin else {
            continue;
        };
        if amount == 0 {
            ways += 1;
            continue;
        }
        // Overshooting the amount is the "negative amount" leaf: no ways.
        if let Some(rest) = amount.checked_sub(coin.value()) {
            pending.push((rest, Some(coin)));
        }
        pending.push((amount, coin.next_smaller()));
    }
    ways
}

fn overflow(amount: u64) -> Error {
    Error::invalid(format!(
        "the number of ways to make change for {amount} does not fit in 64 bits"
    ))
}

/// Rejects quarter-led counts that are known to overflow before any work.
fn check_countable(amount: u64, largest: Option<Coin>) -> Result<()> {
    if largest == Some(Coin::Quarter) && amount > MAX_COUNTABLE_AMOUNT {
        return Err(overflow(amount));
    }
    Ok(())
}

/// [`count_ways`]와 같은 값을 부분 금액 표로 계산
/// (Same count as [`count_ways`], computed from a table of sub-amounts).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when the count does not fit in a `u64`
/// or `amount` is too large to index a table on this platform.
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::{Coin, coins::count_ways_memo};
/// assert_eq!(count_ways_memo(100, Some(Coin::Quarter)).unwrap(), 242);
/// assert_eq!(count_ways_memo(100, Some(Coin::Penny)).unwrap(), 1);
/// ```
pub fn count_ways_memo(amount: u64, largest: Option<Coin>) -> Result<u64> {
    let Some(largest) = largest else {
        return Ok(0);
    };
    check_countable(amount, Some(largest))?;
    let size = usize::try_from(amount)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| Error::invalid(format!("amount {amount} is too large to tabulate")))?;

    // ways[a] = ways to make `a` from the coins processed so far
    let mut ways = vec![0u64; size];
    ways[0] = 1;
    for coin in Coin::ALL.into_iter().filter(|coin| *coin <= largest) {
        let step = coin.value() as usize;
        for a in step..size {
            ways[a] = ways[a]
                .checked_add(ways[a - step])
                .ok_or_else(|| overflow(amount))?;
        }
    }
    Ok(ways[size - 1])
}

/// 원시 액면가를 검증한 뒤 [`count_ways_memo`]로 세기
/// (Validates a raw denomination, then counts with [`count_ways_memo`]).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::coins::count_ways_from;
/// assert_eq!(count_ways_from(20, 10).unwrap(), 6);
/// assert!(count_ways_from(20, 3).is_err());
/// ```
pub fn count_ways_from(amount: u64, denomination: u64) -> Result<u64> {
    let coin = Coin::try_from(denomination)?;
    count_ways_memo(amount, Some(coin))
}

/// 페니, 니켈, 다임, 쿼터로 `amount`를 거슬러 주는 방법의 수
/// (Ways to make change for `amount` with pennies, nickels, dimes and
/// quarters).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] above [`MAX_COUNTABLE_AMOUNT`].
///
/// # 예시 (Examples)
/// ```
/// use cs61a_hw03::count_ways_total;
/// assert_eq!(count_ways_total(10).unwrap(), 4);
/// assert_eq!(count_ways_total(100).unwrap(), 242);
/// ```
#[doc(alias = "count_coins")]
pub fn count_ways_total(amount: u64) -> Result<u64> {
    count_ways_memo(amount, Some(Coin::LARGEST))
}

/// 주어진 전략으로 쿼터부터 세기
/// (Counts change for `amount` starting at a quarter with the given strategy).
pub fn count_ways_with(strategy: CountStrategy, amount: u64) -> Result<u64> {
    trace!(?strategy, amount, "counting change");
    check_countable(amount, Some(Coin::LARGEST))?;
    match strategy {
        CountStrategy::Memoized => count_ways_memo(amount, Some(Coin::LARGEST)),
        CountStrategy::TreeRecursive => Ok(count_ways(amount, Some(Coin::LARGEST))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Quarter-led count in closed form: for each number of quarters, sum
    /// over dimes of `floor(rest / 5) + 1` (nickels, pennies fill the rest).
    fn ways_closed_form(amount: u64) -> u128 {
        (0..=amount / 25)
            .map(|quarters| {
                let fives = u128::from((amount - 25 * quarters) / 5);
                let max_dimes = fives / 2;
                (max_dimes + 1) * (fives + 1) - max_dimes * (max_dimes + 1)
            })
            .sum()
    }

    #[test]
    fn test_count_coins_examples() {
        assert_eq!(count_ways_total(15).unwrap(), 6);
        assert_eq!(count_ways_total(10).unwrap(), 4);
        assert_eq!(count_ways_total(20).unwrap(), 9);
        assert_eq!(count_ways_total(100).unwrap(), 242);
        assert_eq!(count_ways_total(200).unwrap(), 1463);
    }

    #[test]
    fn test_strategies_agree() {
        for amount in 0..=120 {
            for coin in Coin::ALL.into_iter().map(Some).chain([None]) {
                assert_eq!(
                    count_ways(amount, coin),
                    count_ways_memo(amount, coin).unwrap(),
                    "amount {amount}, coin {coin:?}"
                );
            }
        }
    }

    #[test]
    fn test_closed_form_matches_table() {
        for amount in [0, 7, 100, 999, 123_456, 1_000_000] {
            assert_eq!(
                u128::from(count_ways_total(amount).unwrap()),
                ways_closed_form(amount),
                "amount {amount}"
            );
        }
    }

    #[test]
    fn test_countable_bound_is_exact() {
        assert!(ways_closed_form(MAX_COUNTABLE_AMOUNT) <= u128::from(u64::MAX));
        assert!(ways_closed_form(MAX_COUNTABLE_AMOUNT + 1) > u128::from(u64::MAX));
    }

    #[test]
    fn test_overflowing_amount_is_rejected() {
        let too_big = MAX_COUNTABLE_AMOUNT + 1;
        assert!(matches!(
            count_ways_total(too_big),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            count_ways_memo(60_000_000, Some(Coin::Quarter)),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            count_ways_with(CountStrategy::TreeRecursive, too_big),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            count_ways_with(CountStrategy::Memoized, u64::MAX),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_smaller_coins_are_not_bounded_by_quarter_limit() {
        assert!(check_countable(MAX_COUNTABLE_AMOUNT + 5, Some(Coin::Dime)).is_ok());
        assert!(check_countable(u64::MAX, Some(Coin::Penny)).is_ok());
        assert!(check_countable(u64::MAX, None).is_ok());
        assert!(check_countable(MAX_COUNTABLE_AMOUNT + 1, Some(Coin::Quarter)).is_err());
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(count_ways(0, Some(Coin::Penny)), 1);
        assert_eq!(count_ways(0, Some(Coin::Quarter)), 1);
        assert_eq!(count_ways(0, None), 0);
        assert_eq!(count_ways(7, None), 0);
        assert_eq!(count_ways_memo(0, None).unwrap(), 0);
        assert_eq!(count_ways_total(0).unwrap(), 1);
    }

    #[test]
    fn test_only_pennies() {
        assert_eq!(count_ways(37, Some(Coin::Penny)), 1);
    }

    #[test]
    fn test_chain_is_consistent() {
        for coin in Coin::ALL {
            if let Some(larger) = coin.next_larger() {
                assert_eq!(larger.next_smaller(), Some(coin));
                assert!(larger > coin);
            }
        }
        assert_eq!(Coin::Penny.next_smaller(), None);
        assert_eq!(Coin::Quarter.next_larger(), None);
    }

    #[test]
    fn test_raw_chain_lookups() {
        assert_eq!(next_larger_coin(5), Some(10));
        assert_eq!(next_smaller_coin(10), Some(5));
        assert_eq!(next_larger_coin(25), None);
        assert_eq!(next_smaller_coin(1), None);
        assert_eq!(next_smaller_coin(0), None);
    }

    #[test]
    fn test_rejects_unknown_denomination() {
        assert!(matches!(Coin::try_from(3), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            count_ways_from(10, 50),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(Coin::try_from(25).unwrap(), Coin::Quarter);
    }

    #[test]
    fn test_count_ways_with_strategy() {
        assert_eq!(count_ways_with(CountStrategy::Memoized, 100).unwrap(), 242);
        assert_eq!(
            count_ways_with(CountStrategy::TreeRecursive, 100).unwrap(),
            242
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Coin::Dime.to_string(), "10");
    }
}
