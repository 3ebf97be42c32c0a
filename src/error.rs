//! 전역 에러 타입 정의
//! 추출 경로 자체는 실패하지 않는다(후보 규칙의 조용한 폐기만 존재).
//! 에러는 추출 주변 표면(패턴 컴파일, 설정 검증)에서만 발생한다.
use thiserror::Error;

use regex::Error as RegexError;

#[derive(Error, Debug)]
pub enum RulexError {
    // ===================== 패턴 컴파일 관련 에러 =====================
    /// 와일드카드 패턴의 정규식 컴파일 실패
    #[error("Pattern compilation failed: {0}")]
    PatternCompileError(#[from] RegexError),

    // ===================== 설정 관련 에러 =====================
    /// 사용자 정의 키워드 검증 실패(공백 포함/빈 문자열)
    #[error("Invalid custom keyword: {0:?}")]
    InvalidKeyword(String),
}

// 전역 Result 타입
pub type RulexResult<T> = Result<T, RulexError>;
