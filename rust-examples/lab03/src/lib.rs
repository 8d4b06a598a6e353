//! CS61A 실습 3: 고차 함수와 자릿수 다루기 (Lab 3: Higher-order functions and digit manipulation)
//!
//! 이 실습에서는 다음을 다룹니다:
//! - 자릿수 순서와 증가 구간 (Digit ordering and increasing runs)
//! - 함수 반복과 합성 (Repeating and composing functions)
//! - 처치 수: 함수로 부호화된 수 (Church numerals: numbers encoded as functions)

pub mod church;
pub mod digits;
pub mod higher_order;

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use church::{Church, ChurchOp, church_arithmetic, church_to_int, int_to_church};
pub use digits::{get_k_run_starter, ordered_digits};
pub use higher_order::{apply_twice, composer, make_repeater};
