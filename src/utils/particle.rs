//! 조사/인용 부호 처리 도구
//! 토큰을 컬럼명 또는 리터럴로 취급하기 전의 꼬리 정리 규칙을 모아 둔다

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::keyword::{DIRECTIONAL_PARTICLES, SUBJECT_PARTICLES, TARGET_PARTICLES};

// 작은따옴표/큰따옴표로 감싼 내부 텍스트 추출
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).unwrap());

/// 주격/주제격 조사 꼬리 1개 제거(이|가|은|는, 정확히 접미 일치)
#[inline]
pub fn strip_subject_particle(token: &str) -> &str {
    for particle in SUBJECT_PARTICLES {
        if let Some(stripped) = token.strip_suffix(particle) {
            return stripped;
        }
    }
    token
}

/// 방향격 조사 꼬리 제거((으)로). 으로 를 먼저 시도한다
#[inline]
pub fn strip_directional_suffix(token: &str) -> &str {
    token
        .strip_suffix("으로")
        .or_else(|| token.strip_suffix("로"))
        .unwrap_or(token)
}

/// 단독 방향격 조사 토큰 여부(으로/로 전체 일치)
#[inline]
pub fn is_directional_particle(token: &str) -> bool {
    DIRECTIONAL_PARTICLES.contains(&token)
}

/// 모호성 검사용 조사 꼬리 1개 제거(은|는|이|가|을|를|의|에서)
#[inline]
pub fn strip_target_particle(token: &str) -> &str {
    for particle in TARGET_PARTICLES {
        if let Some(stripped) = token.strip_suffix(particle) {
            return stripped;
        }
    }
    token
}

/// 인용된 리터럴 추출. 따옴표 안 텍스트는 조사 제거보다 항상 우선한다
#[inline]
pub fn extract_quoted(token: &str) -> Option<&str> {
    QUOTE_RE
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
