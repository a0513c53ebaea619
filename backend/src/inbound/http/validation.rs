//! Query-string validation shared by the paginated endpoints.

use pagination::{PageNumber, PageNumberError};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::Error;

/// `?page=N` query parameter. Absent means the first page.
///
/// Kept as a string so that non-numeric input reaches [`PageQuery::page`]
/// and is reported as a bad request with details.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; pages hold ten questions.
    #[param(value_type = Option<u32>, minimum = 1, example = 1)]
    pub page: Option<String>,
}

fn page_error_code(error: &PageNumberError) -> &'static str {
    match error {
        PageNumberError::NotNumeric { .. } => "not_numeric",
        PageNumberError::NotPositive { .. } => "not_positive",
        PageNumberError::OutOfRange { .. } => "out_of_range",
    }
}

impl PageQuery {
    /// Validated page number.
    pub fn page(&self) -> Result<PageNumber, Error> {
        let Some(raw) = self.page.as_deref() else {
            return Ok(PageNumber::FIRST);
        };
        raw.parse::<PageNumber>().map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "page",
                "code": page_error_code(&err),
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some("1"), 1)]
    #[case(Some("7"), 7)]
    fn accepts_positive_pages(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(query(raw).page().expect("valid page").get(), expected);
    }

    #[rstest]
    #[case("abc", "not_numeric")]
    #[case("", "not_numeric")]
    #[case("0", "not_positive")]
    #[case("-3", "not_positive")]
    fn rejects_unusable_pages(#[case] raw: &str, #[case] code: &str) {
        let error = query(Some(raw)).page().expect_err("invalid page");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.details().and_then(|d| d.get("code")),
            Some(&json!(code))
        );
    }
}
