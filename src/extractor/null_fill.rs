//! 결측치 채움 분류기 + 해석기
//! 결측 키워드 앵커에서 컬럼/채움 값을 해석하고 NullFilling 을 방출한다.
//! 숫자 조건 분석기와 같은 패스에서 독립적으로 평가된다.

use crate::extractor::neighbor::TokenCursor;
use crate::extractor::TokenAnalyzer;
use crate::rule::keyword::KeywordTables;
use crate::rule::{ExtractedRules, NullFilling};

/// 결측치 채움 분석기
pub struct NullFillAnalyzer;

impl TokenAnalyzer for NullFillAnalyzer {
    const TYPE_NAME: &'static str = "NULL_FILL";

    fn is_anchor(token: &str, keywords: &KeywordTables) -> bool {
        keywords.is_null_trigger(token)
    }

    fn resolve(cursor: &TokenCursor<'_>, keywords: &KeywordTables, rules: &mut ExtractedRules) {
        let column = cursor.subject_column();
        let fill_value = cursor.resolve_literal(keywords);

        if column.is_empty() || fill_value.is_empty() {
            log::debug!(
                "{}: 후보 폐기, column={:?} fill={:?}",
                Self::TYPE_NAME,
                column,
                fill_value
            );
            return;
        }

        log::debug!(
            "{}: 규칙 방출 {} -> {:?}",
            Self::TYPE_NAME,
            column,
            fill_value
        );
        rules.null_fillings.push(NullFilling { column, fill_value });
    }
}
