//! 값 매핑 추출기
//! "A는 B로 변경" 형태의 치환 지시를 캡처하는 정규식 채널.
//! 토큰 채널과 달리 정규화된 지시문 전체를 한 번에 스캔한다.

use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::compiler::WildcardPattern;
use crate::rule::keyword::{EMPTY_VALUE_WORDS, MAPPING_TRIGGER_KEYWORDS};
use crate::rule::{ExtractedRules, ValueMapping};

// "A는 B" 매핑 쌍 캡처(구분자: 는|은|->|:|를|을)
static MAPPING_PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([\[\]%A-Za-z0-9가-힣_\-]+)\s*(?:데이터|값|문구|텍스트|형식|패턴)?(?:\s*의)?\s*(?:데이터|값|문구|텍스트)?\s*(?:는|은|->|:|를|을)\s*([\[\]%A-Za-z0-9가-힣_\-\s]+)",
    )
    .unwrap()
});

// "<이름> 컬럼" 적용 대상 힌트
static COLUMN_HINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"]?([A-Za-z0-9가-힣]+)['"]?\s*컬럼"#).unwrap());

// to 값 어미 제거, 1차: 구/절 단위
static TO_SUFFIX_PHRASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:으로|로|라고|하게|으로\s+변경|로\s+변경|로\s+수정|변경\s*해\s*줘|변경해줘|해\s*줘|해줘)$",
    )
    .unwrap()
});

// to 값 어미 제거, 2차: 잔여 조사
static TO_SUFFIX_PARTICLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(으로|로|라고|하게)$").unwrap());

/// 값 매핑 분석기
pub struct MappingAnalyzer;

impl MappingAnalyzer {
    /// 정규화(소문자) 지시문에서 매핑 규칙 추출
    ///
    /// from 기준으로 마지막 할당이 승리하되 최초 등장 순서를 유지한다.
    /// 와일드카드 from 은 컴파일 검증을 통과한 것만 채택.
    pub fn analyze(lowered: &str, rules: &mut ExtractedRules) {
        // 트리거 동사가 없으면 채널 전체 생략
        if !MAPPING_TRIGGER_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            return;
        }

        let column_hint = COLUMN_HINT_RE
            .captures(lowered)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let mut entries: Vec<(String, String)> = Vec::new();
        let mut index: FxHashMap<String, usize> = FxHashMap::default();

        for caps in MAPPING_PAIR_RE.captures_iter(lowered) {
            let from = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
            if from.is_empty() {
                continue;
            }
            let to = clean_mapping_target(caps.get(2).map_or("", |m| m.as_str()).trim());

            match index.get(&from) {
                Some(&pos) => entries[pos].1 = to,
                None => {
                    index.insert(from.clone(), entries.len());
                    entries.push((from, to));
                }
            }
        }

        for (from, to) in entries {
            if from.contains('%') {
                // 컴파일 불가능한 와일드카드는 조용히 폐기
                if let Err(err) = WildcardPattern::compile(&from) {
                    log::debug!("MAPPING: 패턴 폐기 {:?}: {}", from, err);
                    continue;
                }
            }
            log::debug!("MAPPING: 규칙 방출 {:?} -> {:?}", from, to);
            rules.value_mappings.push(ValueMapping {
                column_hint: column_hint.clone(),
                from,
                to,
            });
        }
    }
}

/// to 값 정리: 어미 2단계 제거 후, 빈 값 의미 단어면 빈 문자열로 치환
fn clean_mapping_target(raw: &str) -> String {
    let cleaned = TO_SUFFIX_PHRASE_RE.replace(raw, "");
    let cleaned = cleaned.trim();
    let cleaned = TO_SUFFIX_PARTICLE_RE.replace(cleaned, "");
    let cleaned = cleaned.trim();

    if EMPTY_VALUE_WORDS.contains(&cleaned) {
        return String::new();
    }
    cleaned.to_string()
}
