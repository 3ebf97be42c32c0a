//! 규칙 데이터 모델 정의
//! 규칙 데이터만 저장하며 비즈니스 로직 없음, 직렬화/역직렬화 지원
//! JSON 필드명은 호스트가 표시/보존하던 camelCase 형태를 따른다

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::compiler::WildcardPattern;
use crate::error::RulexResult;
use crate::rule::keyword;

/// 숫자 조건 연산자
/// 기본값 없음 - 키워드 해석([`keyword::match_operator`])으로만 생성된다
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// 이상 (at least)
    Ge,
    /// 이하 (at most)
    Le,
    /// 초과 (strictly greater)
    Gt,
    /// 미만 (strictly less)
    Lt,
    /// 동일 (equal)
    Eq,
}

impl Operator {
    /// 토큰에서 연산자 해석(키워드 테이블 순서 = 우선순위)
    pub fn from_token(token: &str) -> Option<Self> {
        keyword::match_operator(token)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Ge => write!(f, "ge"),
            Operator::Le => write!(f, "le"),
            Operator::Gt => write!(f, "gt"),
            Operator::Lt => write!(f, "lt"),
            Operator::Eq => write!(f, "eq"),
        }
    }
}

/// 숫자 조건 규칙
/// "column 값이 operator value 를 만족하면 target_value 로 치환"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericCondition {
    pub column: String,
    pub value: f64,
    pub operator: Operator,
    pub target_value: String,
}

/// 결측치 채움 규칙
/// "column 값이 비어 있으면 fill_value 로 채움"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NullFilling {
    pub column: String,
    pub fill_value: String,
}

/// 값 매핑 규칙
/// "셀 값 from 을 to 로 치환". to 는 빈 문자열 허용(셀 비우기).
/// from 에 % 가 포함되면 와일드카드 패턴(%d/%s/%3d/%5s)으로 취급한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueMapping {
    /// "<이름> 컬럼" 형태로 지시된 적용 대상 힌트(미지정이면 전체 컬럼)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_hint: Option<String>,
    pub from: String,
    pub to: String,
}

impl ValueMapping {
    /// 와일드카드 패턴 매핑 여부
    pub fn is_wildcard(&self) -> bool {
        self.from.contains('%')
    }

    /// 적용 엔진용 매처 컴파일. 리터럴 매핑이면 None
    pub fn compile_matcher(&self) -> RulexResult<Option<WildcardPattern>> {
        if !self.is_wildcard() {
            return Ok(None);
        }
        WildcardPattern::compile(&self.from).map(Some)
    }
}

/// 추출 결과 집합
/// 각 시퀀스는 앵커/매칭 등장 순서를 유지하며, 중복 제거는 하지 않는다
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRules {
    pub numeric_conditions: Vec<NumericCondition>,
    pub null_fillings: Vec<NullFilling>,
    pub value_mappings: Vec<ValueMapping>,
}

impl ExtractedRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// 추출된 규칙이 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.numeric_conditions.is_empty()
            && self.null_fillings.is_empty()
            && self.value_mappings.is_empty()
    }

    /// 전체 규칙 수(로그 요약용)
    pub fn rule_count(&self) -> usize {
        self.numeric_conditions.len() + self.null_fillings.len() + self.value_mappings.len()
    }
}
