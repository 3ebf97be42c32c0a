//! 숫자 조건 분류기 + 해석기
//! 숫자 리터럴 앵커를 찾아 연산자/컬럼/타깃을 해석하고 NumericCondition 을 방출한다

use crate::extractor::neighbor::TokenCursor;
use crate::extractor::TokenAnalyzer;
use crate::rule::keyword::KeywordTables;
use crate::rule::{ExtractedRules, NumericCondition};

/// 숫자 조건 분석기
pub struct NumericAnalyzer;

/// 숫자 리터럴 앵커 판정: ASCII 숫자/콤마만으로 구성된 비어 있지 않은 토큰
#[inline]
fn is_numeric_literal(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b',')
}

/// 콤마 제거 후 유한 실수로 해석
#[inline]
fn parse_numeric_literal(token: &str) -> Option<f64> {
    token
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

impl TokenAnalyzer for NumericAnalyzer {
    const TYPE_NAME: &'static str = "NUMERIC";

    fn is_anchor(token: &str, _keywords: &KeywordTables) -> bool {
        is_numeric_literal(token)
    }

    fn resolve(cursor: &TokenCursor<'_>, keywords: &KeywordTables, rules: &mut ExtractedRules) {
        let Some(value) = parse_numeric_literal(cursor.anchor_token()) else {
            log::trace!(
                "{}: 앵커 포기, 수치 해석 실패: {:?}",
                Self::TYPE_NAME,
                cursor.anchor_token()
            );
            return;
        };

        // 연산자 미해석이면 컬럼/타깃 탐색 없이 즉시 포기
        let Some(operator) = cursor.operator_ahead() else {
            log::trace!(
                "{}: 앵커 포기, 윈도 내 연산자 없음: {:?}",
                Self::TYPE_NAME,
                cursor.anchor_token()
            );
            return;
        };

        let column = cursor.subject_column();
        let target_value = cursor.resolve_literal(keywords);

        // 전부 갖춰진 경우에만 방출(all-or-nothing)
        if column.is_empty() || target_value.is_empty() {
            log::debug!(
                "{}: 후보 폐기, column={:?} target={:?}",
                Self::TYPE_NAME,
                column,
                target_value
            );
            return;
        }

        log::debug!(
            "{}: 규칙 방출 {} {} {} -> {:?}",
            Self::TYPE_NAME,
            column,
            operator,
            value,
            target_value
        );
        rules.numeric_conditions.push(NumericCondition {
            column,
            value,
            operator,
            target_value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_anchor_shapes() {
        assert!(is_numeric_literal("500"));
        assert!(is_numeric_literal("10,000"));
        // 문자 혼입/기타 구두점은 앵커가 아니다
        assert!(!is_numeric_literal("10k"));
        assert!(!is_numeric_literal("10.5"));
        assert!(!is_numeric_literal(""));
    }

    #[test]
    fn test_parse_strips_commas() {
        assert_eq!(parse_numeric_literal("10,000"), Some(10000.0));
        assert_eq!(parse_numeric_literal("500"), Some(500.0));
        // 콤마뿐인 토큰은 해석 실패
        assert_eq!(parse_numeric_literal(","), None);
    }
}
