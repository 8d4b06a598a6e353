//! 처치 수 (Church numerals)
//!
//! `n`의 수는 단계 함수 `f`를 받아 `f`를 정확히 `n`번 적용하는 함수를 돌려줍니다
//! (The numeral for `n` takes a step function `f` and returns the function
//! that applies `f` exactly `n` times). 여기의 수는 `u64` 단계 위에서 동작하며,
//! [`church_to_int`]가 적용 횟수를 세는 데 필요합니다 (Numerals here work over
//! `u64` steps, which is what [`church_to_int`] needs to count applications).
//!
//! 덧셈과 곱셈은 수 자체로 만듭니다 (Addition and multiplication are built from the
//! numerals themselves):
//!
//! ```text
//! add(m, n) = f -> x -> m(f)(n(f)(x))
//! mul(m, n) = f -> m(n(f))
//! ```
//!
//! 거듭제곱은 `n`을 `m`에 적용해야 하지만 단계 타입이 고정되어 있으므로,
//! `m`을 `n`번 곱합니다 (Exponentiation would apply `n` to `m`, which needs
//! numerals over numerals; with a fixed step type it multiplies by `m`,
//! `n` times, instead).
//!
//! ## 중첩 깊이 (Nesting depth)
//!
//! [`successor`]는 호출마다 클로저를 한 겹 더 씌우므로, 적용하면 그 깊이만큼
//! 재귀합니다 (Every [`successor`] wraps one more closure, and applying the result
//! recurses that deep). [`int_to_church`]는 대신 반복문 하나로 된 평평한 수를 만들고,
//! [`pow_church`]는 곱할 때마다 결과를 평평하게 펼칩니다 ([`int_to_church`] builds a
//! flat numeral around a single loop instead, and [`pow_church`] flattens the
//! product after every multiplication). [`church_arithmetic`]은 결과 크기를
//! [`MAX_CHURCH_VALUE`]로 제한합니다 (bounds the result size).

use crate::higher_order::make_repeater;
use cs61a_common::{Error, Result};
use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// 수가 반복 적용하는 단계 함수 (A step function a numeral applies repeatedly).
pub type Step = Rc<dyn Fn(u64) -> u64>;

/// [`church_arithmetic`]이 받아들이는 가장 큰 피연산자와 결과
/// (Largest operand and result [`church_arithmetic`] accepts).
pub const MAX_CHURCH_VALUE: u64 = 1_000_000;

/// 함수로 부호화된 자연수 (A natural number encoded as a function).
#[derive(Clone)]
pub struct Church(Rc<dyn Fn(Step) -> Step>);

impl Church {
    /// 단계에서 단계로 가는 함수를 수로 감싼다
    /// (Wraps a function from steps to steps as a numeral).
    pub fn new(numeral: impl Fn(Step) -> Step + 'static) -> Self {
        Church(Rc::new(numeral))
    }

    /// 이 수만큼 `f`를 적용하는 함수
    /// (Returns the function applying `f` as many times as this numeral says).
    pub fn apply(&self, f: Step) -> Step {
        (self.0)(f)
    }
}

impl fmt::Debug for Church {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Church({})", church_to_int(self))
    }
}

/// 처치 수 0: `f`를 무시한다 (Church numeral 0: ignores `f`).
pub fn zero() -> Church {
    Church::new(|_f: Step| -> Step { Rc::new(|x: u64| x) })
}

/// 처치 수 1: `successor(zero)`와 같다 (Church numeral 1: same as `successor(zero)`).
pub fn one() -> Church {
    Church::new(|f: Step| -> Step { Rc::new(move |x: u64| f(x)) })
}

/// 처치 수 2: `successor(successor(zero))`와 같다
/// (Church numeral 2: same as `successor(successor(zero))`).
pub fn two() -> Church {
    Church::new(|f: Step| -> Step { Rc::new(move |x: u64| f(f(x))) })
}

/// 처치 수 3 (Church numeral 3).
pub fn three() -> Church {
    successor(&two())
}

/// `n`보다 하나 큰 수 (The numeral one greater than `n`).
pub fn successor(n: &Church) -> Church {
    let n = n.clone();
    Church::new(move |f: Step| -> Step {
        let inner = n.apply(f.clone());
        Rc::new(move |x: u64| f(inner(x)))
    })
}

/// 적용 횟수를 세어 처치 수를 정수로 바꾼다
/// (Converts a Church numeral to an integer by counting applications).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::church::{church_to_int, one, three, two, zero};
/// assert_eq!(church_to_int(&zero()), 0);
/// assert_eq!(church_to_int(&one()), 1);
/// assert_eq!(church_to_int(&two()), 2);
/// assert_eq!(church_to_int(&three()), 3);
/// ```
pub fn church_to_int(n: &Church) -> u64 {
    n.apply(Rc::new(|x: u64| x + 1))(0)
}

/// `x`의 수를 반복문 하나로 만든다 (Builds the numeral for `x` around a single loop).
///
/// 결과는 `x`번 [`successor`]를 적용한 수와 같지만 중첩되지 않습니다
/// (The result behaves like `x` applications of [`successor`] without nesting).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::church::{church_to_int, int_to_church};
/// assert_eq!(church_to_int(&int_to_church(1_000_000)), 1_000_000);
/// ```
pub fn int_to_church(x: u64) -> Church {
    Church::new(move |f: Step| -> Step {
        Rc::new(move |start: u64| (0..x).fold(start, |acc, _| f(acc)))
    })
}

/// `m + n`의 수 (The numeral for `m + n`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::church::{add_church, church_to_int, three, two};
/// assert_eq!(church_to_int(&add_church(&two(), &three())), 5);
/// ```
pub fn add_church(m: &Church, n: &Church) -> Church {
    let (m, n) = (m.clone(), n.clone());
    Church::new(move |f: Step| -> Step {
        let first = n.apply(f.clone());
        let then = m.apply(f);
        Rc::new(move |x: u64| then(first(x)))
    })
}

/// `m * n`의 수 (The numeral for `m * n`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::church::{church_to_int, mul_church, successor, three, two};
/// let four = successor(&three());
/// assert_eq!(church_to_int(&mul_church(&two(), &three())), 6);
/// assert_eq!(church_to_int(&mul_church(&three(), &four)), 12);
/// ```
pub fn mul_church(m: &Church, n: &Church) -> Church {
    let (m, n) = (m.clone(), n.clone());
    Church::new(move |f: Step| -> Step { m.apply(n.apply(f)) })
}

/// `m ** n`의 수 (The numeral for `m ** n`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::church::{church_to_int, pow_church, three, two};
/// assert_eq!(church_to_int(&pow_church(&two(), &three())), 8);
/// assert_eq!(church_to_int(&pow_church(&three(), &two())), 9);
/// ```
pub fn pow_church(m: &Church, n: &Church) -> Church {
    let exponent = church_to_int(n);
    trace!(exponent, "raising church numeral");
    // Each product is flattened so the result does not nest once per factor.
    let times_m = |acc: Church| int_to_church(church_to_int(&mul_church(&acc, m)));
    make_repeater(times_m, exponent as usize)(one())
}

/// [`church_arithmetic`]이 수행하는 연산 (An operation [`church_arithmetic`] performs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChurchOp {
    Add,
    Mul,
    Pow,
}

/// 두 정수를 처치 수로 바꿔 계산한 뒤 다시 정수로 돌려준다
/// (Combines two integers as Church numerals and converts the result back).
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when an operand or the result exceeds
/// [`MAX_CHURCH_VALUE`]; evaluating such a numeral applies its step function
/// that many times.
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::church::{ChurchOp, MAX_CHURCH_VALUE, church_arithmetic};
/// assert_eq!(church_arithmetic(ChurchOp::Mul, 3, 4).unwrap(), 12);
/// assert!(church_arithmetic(ChurchOp::Add, MAX_CHURCH_VALUE, 1).is_err());
/// ```
pub fn church_arithmetic(op: ChurchOp, m: u64, n: u64) -> Result<u64> {
    let expected = match op {
        ChurchOp::Add => m.checked_add(n),
        ChurchOp::Mul => m.checked_mul(n),
        ChurchOp::Pow => u32::try_from(n).ok().and_then(|exp| m.checked_pow(exp)),
    };
    match expected {
        Some(value) if m.max(n).max(value) <= MAX_CHURCH_VALUE => {}
        _ => {
            return Err(Error::invalid(format!(
                "{op:?} of {m} and {n} exceeds the Church numeral limit of {MAX_CHURCH_VALUE}"
            )));
        }
    }

    let (m, n) = (int_to_church(m), int_to_church(n));
    let result = match op {
        ChurchOp::Add => add_church(&m, &n),
        ChurchOp::Mul => mul_church(&m, &n),
        ChurchOp::Pow => pow_church(&m, &n),
    };
    Ok(church_to_int(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numerals() {
        assert_eq!(church_to_int(&zero()), 0);
        assert_eq!(church_to_int(&one()), 1);
        assert_eq!(church_to_int(&two()), 2);
        assert_eq!(church_to_int(&three()), 3);
    }

    #[test]
    fn test_successor_of_zero_is_one() {
        assert_eq!(church_to_int(&successor(&zero())), church_to_int(&one()));
    }

    #[test]
    fn test_int_to_church() {
        for x in [0, 1, 7, 42] {
            assert_eq!(church_to_int(&int_to_church(x)), x);
        }
    }

    #[test]
    fn test_int_to_church_matches_successor() {
        let built = (0..5).fold(zero(), |acc, _| successor(&acc));
        let double: Step = Rc::new(|x: u64| x * 2);
        assert_eq!(built.apply(double.clone())(3), int_to_church(5).apply(double)(3));
    }

    #[test]
    fn test_large_numeral_does_not_nest() {
        assert_eq!(church_to_int(&int_to_church(1_000_000)), 1_000_000);
        let sum = add_church(&int_to_church(1_000_000), &one());
        assert_eq!(church_to_int(&sum), 1_000_001);
    }

    #[test]
    fn test_numeral_applies_step() {
        let double: Step = Rc::new(|x: u64| x * 2);
        assert_eq!(three().apply(double)(1), 8);
    }

    #[test]
    fn test_arithmetic() {
        let four = successor(&three());
        assert_eq!(church_to_int(&add_church(&two(), &three())), 5);
        assert_eq!(church_to_int(&add_church(&zero(), &zero())), 0);
        assert_eq!(church_to_int(&mul_church(&two(), &three())), 6);
        assert_eq!(church_to_int(&mul_church(&three(), &four)), 12);
        assert_eq!(church_to_int(&mul_church(&zero(), &four)), 0);
        assert_eq!(church_to_int(&pow_church(&two(), &three())), 8);
        assert_eq!(church_to_int(&pow_church(&three(), &two())), 9);
    }

    #[test]
    fn test_power_edges() {
        assert_eq!(church_to_int(&pow_church(&three(), &zero())), 1);
        assert_eq!(church_to_int(&pow_church(&zero(), &two())), 0);
        assert_eq!(church_to_int(&pow_church(&zero(), &zero())), 1);
        let ten = int_to_church(10);
        assert_eq!(church_to_int(&pow_church(&two(), &ten)), 1024);
    }

    #[test]
    fn test_power_with_large_exponent() {
        let exponent = int_to_church(1_000_000);
        assert_eq!(church_to_int(&pow_church(&one(), &exponent)), 1);
        assert_eq!(church_to_int(&pow_church(&zero(), &exponent)), 0);
    }

    #[test]
    fn test_church_arithmetic() {
        assert_eq!(church_arithmetic(ChurchOp::Add, 2, 3).unwrap(), 5);
        assert_eq!(church_arithmetic(ChurchOp::Mul, 3, 4).unwrap(), 12);
        assert_eq!(church_arithmetic(ChurchOp::Pow, 2, 3).unwrap(), 8);
        assert_eq!(church_arithmetic(ChurchOp::Pow, 1000, 2).unwrap(), 1_000_000);
        assert_eq!(
            church_arithmetic(ChurchOp::Add, MAX_CHURCH_VALUE - 1, 1).unwrap(),
            MAX_CHURCH_VALUE
        );
    }

    #[test]
    fn test_church_arithmetic_limit() {
        for (op, m, n) in [
            (ChurchOp::Add, MAX_CHURCH_VALUE, 1),
            (ChurchOp::Add, 1_000_000_000, 0),
            (ChurchOp::Mul, 0, MAX_CHURCH_VALUE + 1),
            (ChurchOp::Mul, 1001, 1000),
            (ChurchOp::Pow, 2, 20),
            (ChurchOp::Pow, 10, u64::MAX),
        ] {
            assert!(
                matches!(church_arithmetic(op, m, n), Err(Error::InvalidArgument(_))),
                "{op:?} {m} {n}"
            );
        }
    }

    #[test]
    fn test_debug_shows_value() {
        assert_eq!(format!("{:?}", int_to_church(4)), "Church(4)");
    }
}
