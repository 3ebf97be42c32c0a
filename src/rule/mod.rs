//! 규칙 모델 + 키워드 테이블 모듈

pub mod keyword;
pub mod model;

pub use keyword::KeywordTables;
pub use model::{ExtractedRules, NullFilling, NumericCondition, Operator, ValueMapping};
