//! 추출기 설정 관리, 모든 사용자 정의 항목 저장

use crate::error::{RulexError, RulexResult};

/// 추출기 설정
///
/// 내장 키워드 테이블([`crate::rule::keyword`])은 상수이며 제거할 수 없다.
/// 설정은 확장만 허용한다 - 호스트 도메인의 추가 동사/결측 표현 등록용.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    // 액션 키워드 추가분(예: "교체해")
    pub extra_action_keywords: Vec<String>,
    // 결측치 앵커 키워드 추가분(예: "누락")
    pub extra_null_keywords: Vec<String>,
}

impl ExtractorConfig {
    /// 사용자 정의 설정 빌더
    pub fn custom() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::new()
    }

    /// 키워드 검증: 토큰 단위 매칭이므로 빈 문자열/공백 포함 키워드는 매칭 불가능
    pub(crate) fn validate(&self) -> RulexResult<()> {
        for kw in self
            .extra_action_keywords
            .iter()
            .chain(self.extra_null_keywords.iter())
        {
            if kw.is_empty() || kw.chars().any(char::is_whitespace) {
                return Err(RulexError::InvalidKeyword(kw.clone()));
            }
        }
        Ok(())
    }
}

/// 설정 빌더(사용자 정의 편의용)
#[derive(Debug, Clone)]
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ExtractorConfig::default(),
        }
    }

    pub fn extra_action_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.extra_action_keywords.push(keyword.into());
        self
    }

    pub fn extra_null_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.config.extra_null_keywords.push(keyword.into());
        self
    }

    pub fn build(self) -> ExtractorConfig {
        self.config
    }
}

impl Default for ExtractorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
