//! CS61A 과제 3: 재귀와 트리 재귀 (Homework 3: Recursion and Tree Recursion)
//!
//! 이 과제에서는 다음을 다룹니다:
//! - 자릿수 세기 (Counting digits)
//! - 메모이제이션된 핑퐁 수열 (The memoized ping-pong sequence)
//! - 거스름돈 세기 트리 재귀 (Counting change with tree recursion)
//! - 고차 함수 호출 (Calling a function many times)

pub mod beaver;
pub mod coins;
pub mod digits;
pub mod pingpong;

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use coins::{Coin, count_ways, count_ways_total};
pub use digits::num_eights;
pub use pingpong::{Classifier, classify, sequence_value};
