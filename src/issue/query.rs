//! GraphQL request documents for fetching an issue page.

use indoc::indoc;
use serde::Serialize;

use super::error::{FetchError, Result};
use super::reference::IssueRef;

/// Largest `first:` argument GitHub accepts on a connection.
pub const MAX_BATCH_SIZE: u32 = 100;

const ISSUE_QUERY: &str = indoc! {"
    query($owner: String!, $name: String!, $number: Int!, $batchSize: Int!, $cursor: String) {
      repository(owner: $owner, name: $name) {
        issue(number: $number) {
          id
          title
          body
          closed
          createdAt
          author { login }
          viewerCanUpdate
          comments(first: $batchSize, after: $cursor) {
            pageInfo {
              endCursor
              hasNextPage
            }
            nodes {
              id
              body
              createdAt
              author { login }
              viewerCanDelete
              viewerCanUpdate
            }
          }
        }
      }
    }
"};

#[derive(Debug, Serialize)]
struct Request<'a> {
    query: &'static str,
    variables: &'a IssueQuery<'a>,
}

/// Variables for one page request.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IssueQuery<'a> {
    owner: &'a str,
    name: &'a str,
    number: u64,
    batch_size: u32,
    cursor: Option<&'a str>,
}

impl<'a> IssueQuery<'a> {
    /// `batch_size` is clamped into `1..=MAX_BATCH_SIZE`; `cursor` is
    /// `None` for the first page and the previous `endCursor` after that.
    pub fn new(reference: &'a IssueRef, batch_size: u32, cursor: Option<&'a str>) -> Self {
        let clamped = batch_size.clamp(1, MAX_BATCH_SIZE);
        if clamped != batch_size {
            tracing::warn!(
                requested = batch_size,
                used = clamped,
                "batch size out of range; clamping"
            );
        }

        Self {
            owner: reference.owner(),
            name: reference.repo(),
            number: reference.number(),
            batch_size: clamped,
            cursor,
        }
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }

    /// Serialize the `{"query", "variables"}` request body.
    pub fn to_body(&self) -> Result<Vec<u8>> {
        let request = Request {
            query: ISSUE_QUERY,
            variables: self,
        };
        serde_json::to_vec(&request)
            .map_err(|e| FetchError::Internal(format!("failed to serialize GraphQL request: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn reference() -> IssueRef {
        "kaction/opinion#42".parse().unwrap()
    }

    fn body_of(query: &IssueQuery<'_>) -> Value {
        serde_json::from_slice(&query.to_body().unwrap()).unwrap()
    }

    #[test]
    fn test_first_page_variables() {
        let reference = reference();
        let body = body_of(&IssueQuery::new(&reference, 100, None));

        assert_eq!(
            body["variables"],
            json!({
                "owner": "kaction",
                "name": "opinion",
                "number": 42,
                "batchSize": 100,
                "cursor": null
            })
        );
    }

    #[test]
    fn test_continuation_carries_cursor() {
        let reference = reference();
        let body = body_of(&IssueQuery::new(&reference, 100, Some("Y3Vyc29yOjEwMA==")));
        assert_eq!(body["variables"]["cursor"], "Y3Vyc29yOjEwMA==");
    }

    #[test]
    fn test_query_document_is_fixed() {
        let reference = reference();
        let first = body_of(&IssueQuery::new(&reference, 100, None));
        let second = body_of(&IssueQuery::new(&reference, 100, Some("X")));

        assert_eq!(first["query"], second["query"]);
        let text = first["query"].as_str().unwrap();
        assert!(text.contains("comments(first: $batchSize, after: $cursor)"));
        assert!(text.contains("pageInfo"));
    }

    #[rstest]
    #[case::too_large(500, 100)]
    #[case::just_over(101, 100)]
    #[case::max(100, 100)]
    #[case::small(25, 25)]
    #[case::zero(0, 1)]
    fn test_batch_size_is_clamped(#[case] requested: u32, #[case] expected: u32) {
        let reference = reference();
        let query = IssueQuery::new(&reference, requested, None);

        assert_eq!(query.batch_size(), expected);
        assert_eq!(body_of(&query)["variables"]["batchSize"], expected);
    }
}
