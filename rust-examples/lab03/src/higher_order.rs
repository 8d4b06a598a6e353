//! 함수를 받고 함수를 돌려주는 함수 (Functions that take and return functions)
//!
//! 조합자 [`make_repeater`], [`composer`], [`apply_twice`]는 `impl Fn`을 돌려주며
//! 값의 타입에 대해 제네릭입니다 (The combinators return `impl Fn` and are
//! generic over the value type). `square`, `identity`, `triple`, `increment`는
//! 예제에 쓰이는 `i64` 도우미입니다 (are `i64` helpers for the examples).

/// x * x
pub fn square(x: i64) -> i64 {
    x * x
}

/// x
pub fn identity(x: i64) -> i64 {
    x
}

/// 3 * x
pub fn triple(x: i64) -> i64 {
    3 * x
}

/// x + 1
pub fn increment(x: i64) -> i64 {
    x + 1
}

/// `func`를 `n`번 적용하는 함수를 돌려준다
/// (Returns the function that computes the `n`th application of `func`).
///
/// 0번 적용하면 항등 함수입니다 (Applying a function zero times gives the identity).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::higher_order::{increment, make_repeater, square, triple};
/// let add_three = make_repeater(increment, 3);
/// assert_eq!(add_three(5), 8);
/// assert_eq!(make_repeater(triple, 5)(1), 243);
/// assert_eq!(make_repeater(square, 4)(5), 152587890625);
/// assert_eq!(make_repeater(square, 0)(5), 5);
/// ```
pub fn make_repeater<T, F>(func: F, n: usize) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |x| (0..n).fold(x, |acc, _| func(acc))
}

/// `f(x) = func1(func2(x))`인 `f`를 돌려준다 (Returns `f` such that `f(x) = func1(func2(x))`).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::higher_order::{composer, increment, square};
/// assert_eq!(composer(square, increment)(3), 16);
/// assert_eq!(composer(increment, square)(3), 10);
/// ```
pub fn composer<A, B, C, F, G>(func1: F, func2: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| func1(func2(x))
}

/// `func`를 두 번 적용하는 함수 (Returns a function that applies `func` twice).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::higher_order::{apply_twice, square};
/// assert_eq!(apply_twice(square)(2), 16);
/// ```
pub fn apply_twice<T, F>(func: F) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    make_repeater(func, 2)
}

/// 인자가 `2..=n`의 어떤 정수로 나누어떨어지면 참인 술어
/// (Returns a predicate that is true when its argument is divisible by some
/// integer in `2..=n`).
///
/// 1보다 큰 가장 작은 약수는 항상 소수이므로 모든 정수를 검사해도 됩니다
/// (Checking every integer is enough: the smallest divisor above 1 of any
/// number is prime).
///
/// # 예시 (Examples)
/// ```
/// use cs61a_lab03::higher_order::div_by_primes_under;
/// assert!(!div_by_primes_under(10)(11));
/// assert!(!div_by_primes_under(10)(121));
/// assert!(div_by_primes_under(10)(12));
/// assert!(!div_by_primes_under(5)(1));
/// ```
pub fn div_by_primes_under(n: u64) -> impl Fn(u64) -> bool {
    move |x| (2..=n).any(|i| x % i == 0)
}
