//! 지시문 대상 모호성 검사
//! 지시문이 실제 헤더 목록에 존재하는 컬럼을 지목하는지 판단하는 순수 텍스트 휴리스틱.
//! 호스트가 재질의 여부를 결정할 때 쓰며, 추출 자체를 막지는 않는다.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rule::keyword::NOISE_WORDS;
use crate::utils::particle::strip_target_particle;

// 1차: 조사/컬럼 표지가 뒤따르는 대상 후보 캡처
static TARGET_WITH_PARTICLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([가-힣a-zA-Z0-9_()%_]+)(?:\s*(?:은|는|이|가|을|를|의|에서|컬럼|필드))").unwrap()
});

/// 노이즈 단어 여부(토큰 전체 일치)
#[inline]
fn is_noise_word(token: &str) -> bool {
    NOISE_WORDS.contains(&token)
}

/// 헤더 목록과 대조해 유효한 대상 컬럼 언급 여부를 판단
///
/// 1차는 조사가 붙은 형태만 인정하고, 실패 시 2차로 조사를 벗긴 토큰 포함
/// 검사를 수행한다(조사 생략 지시문 대응). 비교는 양쪽 소문자 기준.
pub fn has_valid_target<S: AsRef<str>>(instruction: &str, headers: &[S]) -> bool {
    let lowered = instruction.to_lowercase();

    // 1. 조사 동반 후보 매칭
    let mut found = TARGET_WITH_PARTICLE_RE.captures_iter(&lowered).any(|caps| {
        let target = caps.get(1).map_or("", |m| m.as_str());
        if is_noise_word(target) {
            return false;
        }
        headers.iter().any(|header| {
            let header = header.as_ref().to_lowercase();
            header.contains(target) || target.contains(header.as_str())
        })
    });

    // 2. 조사 미동반 토큰 매칭(1차 실패 시)
    if !found && !headers.is_empty() {
        found = lowered.split_whitespace().any(|token| {
            let clean = strip_target_particle(token).trim();
            if clean.is_empty() || is_noise_word(clean) {
                return false;
            }
            headers.iter().any(|header| {
                let header = header.as_ref().to_lowercase();
                header == clean || (clean.chars().count() >= 2 && header.contains(clean))
            })
        });
    }

    found
}
