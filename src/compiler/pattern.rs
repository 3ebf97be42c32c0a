//! 와일드카드 패턴 컴파일
//! 매핑 from 값의 %d/%s/%3d/%5s 자리표시자를 앵커드 정규식으로 변환한다.
//! [%d] 처럼 대괄호로 감싼 표기도 동일하게 취급.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RulexResult;

// 자리표시자 재작성 규칙(이스케이프 이후의 문자열에 적용되므로 \[ 형태를 허용)
static WILDCARD_NUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\\\[)?%d(?:\\\])?").unwrap());
static WILDCARD_STR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\\\[)?%s(?:\\\])?").unwrap());
static WILDCARD_NUM_WIDTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\\\[)?%(\d+)d(?:\\\])?").unwrap());
static WILDCARD_STR_WIDTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\\\[)?%(\d+)s(?:\\\])?").unwrap());

/// 컴파일된 와일드카드 패턴
/// 원본 텍스트를 함께 보존해 로그/재직렬화에 사용한다
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    raw: String,
    regex: Regex,
}

impl WildcardPattern {
    /// 원본 패턴 문자열을 앵커드(^…$)·대소문자 무시 정규식으로 컴파일
    ///
    /// 순서: 정규식 메타문자 이스케이프 → %d → %s → %Nd → %Ns 재작성
    pub fn compile(raw: &str) -> RulexResult<Self> {
        let escaped = regex::escape(raw);
        let translated = WILDCARD_NUM_RE.replace_all(&escaped, r"\d+");
        let translated = WILDCARD_STR_RE.replace_all(&translated, r".+");
        let translated = WILDCARD_NUM_WIDTH_RE.replace_all(&translated, r"\d{${1}}");
        let translated = WILDCARD_STR_WIDTH_RE.replace_all(&translated, r".{${1}}");

        let regex = Regex::new(&format!("(?i)^{}$", translated))?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    /// 원본 패턴 문자열
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 셀 값 전체 일치 여부
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}
