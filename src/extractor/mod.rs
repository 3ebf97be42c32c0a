//! 규칙 추출 파이프라인
//! 정규화 → 토큰별 역할 분류 → 앵커 주변 해석 → 순서 보존 수집의 단일 패스.
//! 추출은 입력 문자열의 순수 함수이며 호출 간 공유 상태가 없다.

use crate::config::ExtractorConfig;
use crate::error::RulexResult;
use crate::rule::keyword::KeywordTables;
use crate::rule::ExtractedRules;

use self::mapping::MappingAnalyzer;
use self::neighbor::TokenCursor;
use self::normalizer::normalize;
use self::null_fill::NullFillAnalyzer;
use self::numeric::NumericAnalyzer;

pub mod mapping;
pub mod neighbor;
pub mod normalizer;
pub mod null_fill;
pub mod numeric;

/// 토큰 단위 역할 분석기의 공통 추상
/// 앵커 판정이 분석기별 유일한 분류 지점이고, 해석/방출은 앵커 국소 탐색으로 수행된다
pub trait TokenAnalyzer {
    /// 분석기 유형 이름, 로그 표준화 출력용
    const TYPE_NAME: &'static str;

    /// 앵커 판정
    fn is_anchor(token: &str, keywords: &KeywordTables) -> bool;

    /// 해석 + 방출
    fn resolve(cursor: &TokenCursor<'_>, keywords: &KeywordTables, rules: &mut ExtractedRules);

    /// 공통 실행 골격: 앵커 판정 → 커서 구성 → 해석 호출
    #[inline]
    fn analyze(
        tokens: &[String],
        anchor: usize,
        keywords: &KeywordTables,
        rules: &mut ExtractedRules,
    ) where
        Self: Sized,
    {
        if !Self::is_anchor(&tokens[anchor], keywords) {
            return;
        }
        log::trace!(
            "{}: 앵커 적중 idx={} token={:?}",
            Self::TYPE_NAME,
            anchor,
            tokens[anchor]
        );
        Self::resolve(&TokenCursor::new(tokens, anchor), keywords, rules);
    }
}

/// 규칙 추출기
#[derive(Debug, Clone)]
pub struct RuleExtractor {
    keywords: KeywordTables,
}

impl RuleExtractor {
    /// 내장 키워드 테이블만으로 추출기 생성
    pub fn new() -> Self {
        Self {
            keywords: KeywordTables::default(),
        }
    }

    /// 사용자 정의 설정으로 추출기 생성(추가 키워드 검증 포함)
    pub fn with_config(config: ExtractorConfig) -> RulexResult<Self> {
        config.validate()?;
        Ok(Self {
            keywords: KeywordTables::from_config(&config),
        })
    }

    /// 지시문 1건에서 규칙 집합 추출
    ///
    /// 절대 실패하지 않는다. 모호하거나 불완전한 조각은 해당 후보 규칙의
    /// 조용한 폐기로 끝나며, 호출 측에는 "기대보다 적은 규칙"으로만 보인다.
    pub fn extract(&self, instruction: &str) -> ExtractedRules {
        let mut rules = ExtractedRules::new();

        // 1. 정규화: 소문자 + 공백 토큰화
        let lowered = instruction.to_lowercase();
        let tokens: Vec<String> = lowered.split_whitespace().map(str::to_owned).collect();

        // 2. 토큰별 역할 분류 + 해석(두 분석기는 독립 평가, 상호 배제 없음)
        for anchor in 0..tokens.len() {
            NumericAnalyzer::analyze(&tokens, anchor, &self.keywords, &mut rules);
            NullFillAnalyzer::analyze(&tokens, anchor, &self.keywords, &mut rules);
        }

        // 3. 값 매핑 채널(정규식 기반, 지시문 전체 스캔)
        MappingAnalyzer::analyze(&lowered, &mut rules);

        log::debug!(
            "추출 완료: numeric={} null={} mapping={}",
            rules.numeric_conditions.len(),
            rules.null_fillings.len(),
            rules.value_mappings.len()
        );
        rules
    }

    /// 정규화 단독 수행(토큰 시퀀스 확인용)
    pub fn normalize(instruction: &str) -> Vec<String> {
        normalize(instruction)
    }
}

impl Default for RuleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 편의 함수: 기본 추출기로 1회 추출
pub fn extract_rules(instruction: &str) -> ExtractedRules {
    RuleExtractor::new().extract(instruction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Operator;

    #[test]
    fn test_numeric_condition_basic() {
        let rules = extract_rules("price 10000 이상이면 High로 바꿔");

        assert_eq!(rules.numeric_conditions.len(), 1);
        let rule = &rules.numeric_conditions[0];
        assert_eq!(rule.column, "price");
        assert_eq!(rule.value, 10000.0);
        assert_eq!(rule.operator, Operator::Ge);
        assert_eq!(rule.target_value, "high");
        assert!(rules.null_fillings.is_empty());
    }

    #[test]
    fn test_numeric_condition_with_subject_particle_and_commas() {
        let rules = extract_rules("price가 10,000 이하면 Low로 변경");

        assert_eq!(rules.numeric_conditions.len(), 1);
        let rule = &rules.numeric_conditions[0];
        assert_eq!(rule.column, "price");
        assert_eq!(rule.value, 10000.0);
        assert_eq!(rule.operator, Operator::Le);
        assert_eq!(rule.target_value, "low");
    }

    #[test]
    fn test_null_filling_basic() {
        let rules = extract_rules("grade 비어있으면 Unknown으로 채워");

        assert_eq!(rules.null_fillings.len(), 1);
        let rule = &rules.null_fillings[0];
        assert_eq!(rule.column, "grade");
        assert_eq!(rule.fill_value, "unknown");
        assert!(rules.numeric_conditions.is_empty());
    }

    #[test]
    fn test_quoted_target_wins_over_particle_strip() {
        let rules = extract_rules("age 18 미만이면 'Minor'로 설정");

        assert_eq!(rules.numeric_conditions.len(), 1);
        let rule = &rules.numeric_conditions[0];
        assert_eq!(rule.operator, Operator::Lt);
        // 인용 리터럴은 조사 제거 결과(minor로→minor)가 아니라 인용 내부 원문
        assert_eq!(rule.target_value, "minor");
    }

    #[test]
    fn test_standalone_particle_token_skipped() {
        let rules = extract_rules("grade 비어있으면 Unknown 으로 채워");

        assert_eq!(rules.null_fillings.len(), 1);
        assert_eq!(rules.null_fillings[0].fill_value, "unknown");
    }

    #[test]
    fn test_no_anchor_yields_empty_result() {
        let rules = extract_rules("foo 바꿔");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_anchor_at_start_is_rejected() {
        // 선행 토큰이 없으면 컬럼 미해석으로 규칙이 성립하지 않는다
        let rules = extract_rules("100 이상");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_operator_outside_window_abandons_anchor() {
        let rules = extract_rules("price 10000 그 값 이상이면 High로 바꿔");
        assert!(rules.numeric_conditions.is_empty());
    }

    #[test]
    fn test_multi_condition_left_to_right_order() {
        let rules =
            extract_rules("price 1000 이상이면 High로 바꾸고 score 100 이하면 Low로 바꿔");

        assert_eq!(rules.numeric_conditions.len(), 2);
        assert_eq!(rules.numeric_conditions[0].column, "price");
        assert_eq!(rules.numeric_conditions[0].operator, Operator::Ge);
        assert_eq!(rules.numeric_conditions[1].column, "score");
        assert_eq!(rules.numeric_conditions[1].operator, Operator::Le);
        assert_eq!(rules.numeric_conditions[1].target_value, "low");
    }

    #[test]
    fn test_numeric_and_null_in_one_instruction() {
        let rules =
            extract_rules("price 10000 이상이면 High로 바꾸고 grade 비어있으면 Unknown으로 채워");

        assert_eq!(rules.numeric_conditions.len(), 1);
        assert_eq!(rules.numeric_conditions[0].column, "price");
        assert_eq!(rules.null_fillings.len(), 1);
        assert_eq!(rules.null_fillings[0].column, "grade");
        assert_eq!(rules.null_fillings[0].fill_value, "unknown");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let _ = env_logger::builder().is_test(true).try_init();
        let instruction = "price 10000 이상이면 High로 바꾸고 grade 비어있으면 Unknown으로 채워";
        let first = extract_rules(instruction);
        let second = extract_rules(instruction);
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_instruction_is_empty() {
        assert!(extract_rules("").is_empty());
        assert!(extract_rules("   \t ").is_empty());
    }

    #[test]
    fn test_custom_action_keyword_via_config() {
        let config = ExtractorConfig::custom()
            .extra_action_keyword("교체해")
            .build();
        let extractor = RuleExtractor::with_config(config).unwrap();

        let rules = extractor.extract("price 500 초과면 High로 교체해");
        assert_eq!(rules.numeric_conditions.len(), 1);
        assert_eq!(rules.numeric_conditions[0].operator, Operator::Gt);
        assert_eq!(rules.numeric_conditions[0].target_value, "high");
    }

    #[test]
    fn test_invalid_config_keyword_is_rejected() {
        let config = ExtractorConfig::custom().extra_action_keyword("바 꿔").build();
        assert!(RuleExtractor::with_config(config).is_err());
    }

    #[test]
    fn test_mapping_channel_runs_in_same_call() {
        let rules = extract_rules("서울은 SEOUL로 변경");
        assert_eq!(rules.value_mappings.len(), 1);
        assert_eq!(rules.value_mappings[0].from, "서울");
        assert_eq!(rules.value_mappings[0].to, "seoul");
    }
}
