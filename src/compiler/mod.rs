//! 패턴 컴파일 모듈

pub mod pattern;

pub use pattern::WildcardPattern;
