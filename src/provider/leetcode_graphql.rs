//! Adapter A: the platform's own GraphQL endpoint
//!
//! Solved counts come from `matchedUser.submitStats.acSubmissionNum`, scoped
//! to the queried user; category totals come from `allQuestionsCount`,
//! global to the platform. Both are lists keyed by a difficulty label.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::{Difficulty, StatsResult};
use crate::http::{HttpClient, HttpRequest};

use super::adapter::{FetchError, StatsAdapter, fetch_json};
use super::fields::{count_value, first_error_message};

pub const DEFAULT_GRAPHQL_BASE: &str = "https://leetcode.com";

const PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
      matchedUser(username: $username) {
        submitStats {
          acSubmissionNum {
            difficulty
            count
          }
        }
        profile {
          ranking
        }
      }
      allQuestionsCount {
        difficulty
        count
      }
    }
"#;

/// GraphQL-style adapter
pub struct GraphqlAdapter {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl GraphqlAdapter {
    pub const ID: &'static str = "leetcode-graphql";

    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn request(&self, identifier: &str) -> HttpRequest {
        let base = self.base_url.trim_end_matches('/');
        let body = json!({
            "query": PROFILE_QUERY,
            "variables": { "username": identifier },
        });
        HttpRequest::post(format!("{}/graphql", base), body.to_string())
            .header("Content-Type", "application/json")
            .header("Referer", base)
            .header("Origin", base)
    }
}

#[async_trait]
impl StatsAdapter for GraphqlAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    async fn fetch(&self, identifier: &str) -> Result<StatsResult, FetchError> {
        let body = fetch_json(self.client.as_ref(), self.request(identifier)).await?;
        normalize(&body)
    }
}

/// Map a GraphQL response body onto [`StatsResult`]
pub(crate) fn normalize(body: &Value) -> Result<StatsResult, FetchError> {
    if !body.is_object() {
        return Err(FetchError::Parse("expected a JSON object".to_string()));
    }

    if let Some(errors) = body.get("errors") {
        let message = first_error_message(Some(errors)).unwrap_or("GraphQL error");
        return Err(FetchError::Semantic(message.to_string()));
    }

    let data = body.get("data");
    let user = data
        .and_then(|d| d.get("matchedUser"))
        .filter(|u| !u.is_null())
        .ok_or_else(|| FetchError::Semantic("User not found".to_string()))?;

    let solved = user
        .get("submitStats")
        .and_then(|s| s.get("acSubmissionNum"))
        .and_then(Value::as_array)
        .ok_or_else(|| {
            FetchError::Parse("matchedUser.submitStats.acSubmissionNum is not a list".to_string())
        })?;
    let available = data
        .and_then(|d| d.get("allQuestionsCount"))
        .and_then(Value::as_array)
        .ok_or_else(|| FetchError::Parse("allQuestionsCount is not a list".to_string()))?;

    let total_solved = count_for(solved, "All");
    let easy_total = count_for(available, Difficulty::Easy.label());
    let medium_total = count_for(available, Difficulty::Medium.label());
    let hard_total = count_for(available, Difficulty::Hard.label());

    let total_questions = easy_total
        .saturating_add(medium_total)
        .saturating_add(hard_total);
    let acceptance_rate_percent = if total_questions > 0 {
        total_solved as f64 / total_questions as f64 * 100.0
    } else {
        0.0
    };

    let ranking = user
        .get("profile")
        .and_then(|p| p.get("ranking"))
        .map(count_value)
        .unwrap_or(0);

    Ok(StatsResult {
        total_solved,
        easy_solved: count_for(solved, Difficulty::Easy.label()),
        medium_solved: count_for(solved, Difficulty::Medium.label()),
        hard_solved: count_for(solved, Difficulty::Hard.label()),
        easy_total,
        medium_total,
        hard_total,
        acceptance_rate_percent,
        ranking,
    })
}

/// `count` of the entry whose `difficulty` equals `label`; 0 when absent
fn count_for(entries: &[Value], label: &str) -> u64 {
    entries
        .iter()
        .find(|item| item.get("difficulty").and_then(Value::as_str) == Some(label))
        .and_then(|item| item.get("count"))
        .map(count_value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_body() -> Value {
        json!({
            "data": {
                "matchedUser": {
                    "submitStats": {
                        "acSubmissionNum": [
                            {"difficulty": "All", "count": 120},
                            {"difficulty": "Easy", "count": 80},
                            {"difficulty": "Medium", "count": 30},
                            {"difficulty": "Hard", "count": 10}
                        ]
                    },
                    "profile": {"ranking": 654321}
                },
                "allQuestionsCount": [
                    {"difficulty": "All", "count": 3400},
                    {"difficulty": "Easy", "count": 850},
                    {"difficulty": "Medium", "count": 1780},
                    {"difficulty": "Hard", "count": 770}
                ]
            }
        })
    }

    #[test]
    fn test_normalize_full_response() {
        let stats = normalize(&sample_body()).unwrap();
        assert_eq!(stats.total_solved, 120);
        assert_eq!(stats.easy_solved, 80);
        assert_eq!(stats.medium_solved, 30);
        assert_eq!(stats.hard_solved, 10);
        assert_eq!(stats.easy_total, 850);
        assert_eq!(stats.medium_total, 1780);
        assert_eq!(stats.hard_total, 770);
        assert_eq!(stats.ranking, 654321);
        let expected_rate = 120.0 / 3400.0 * 100.0;
        assert!((stats.acceptance_rate_percent - expected_rate).abs() < 1e-9);
    }

    #[test]
    fn test_missing_difficulty_keys_default_to_zero() {
        let body = json!({
            "data": {
                "matchedUser": {
                    "submitStats": {"acSubmissionNum": [{"difficulty": "Easy", "count": 4}]}
                },
                "allQuestionsCount": []
            }
        });
        let stats = normalize(&body).unwrap();
        assert_eq!(stats.easy_solved, 4);
        assert_eq!(stats.total_solved, 0);
        assert_eq!(stats.medium_solved, 0);
        assert_eq!(stats.easy_total, 0);
        assert_eq!(stats.acceptance_rate_percent, 0.0);
        assert_eq!(stats.ranking, 0);
    }

    #[test]
    fn test_null_matched_user_is_semantic() {
        let body = json!({"data": {"matchedUser": null, "allQuestionsCount": []}});
        assert_eq!(
            normalize(&body).unwrap_err(),
            FetchError::Semantic("User not found".to_string())
        );
    }

    #[test]
    fn test_graphql_errors_are_semantic() {
        let body = json!({"errors": [{"message": "That user does not exist."}], "data": null});
        assert_eq!(
            normalize(&body).unwrap_err(),
            FetchError::Semantic("That user does not exist.".to_string())
        );
    }

    #[test]
    fn test_missing_submission_list_is_parse_error() {
        let body = json!({"data": {"matchedUser": {}}});
        assert!(matches!(normalize(&body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_non_list_question_counts_is_parse_error() {
        let mut body = sample_body();
        body["data"]["allQuestionsCount"] = json!({"Easy": 850});
        assert!(matches!(normalize(&body), Err(FetchError::Parse(_))));

        body["data"].as_object_mut().unwrap().remove("allQuestionsCount");
        assert!(matches!(normalize(&body), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_huge_totals_saturate_instead_of_overflowing() {
        let mut body = sample_body();
        body["data"]["allQuestionsCount"] = json!([
            {"difficulty": "Easy", "count": u64::MAX},
            {"difficulty": "Medium", "count": 1}
        ]);
        let stats = normalize(&body).unwrap();
        assert_eq!(stats.easy_total, u64::MAX);
        assert_eq!(stats.total_available(), u64::MAX);
        assert!(stats.acceptance_rate_percent < 1e-9);
    }

    #[test]
    fn test_non_object_is_parse_error() {
        assert!(matches!(normalize(&json!([1, 2])), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_request_shape() {
        struct Never;
        #[async_trait]
        impl HttpClient for Never {
            async fn send(
                &self,
                _request: HttpRequest,
            ) -> Result<crate::http::HttpResponse, crate::http::HttpError> {
                unreachable!()
            }
        }

        let adapter = GraphqlAdapter::new(Arc::new(Never), "https://leetcode.com/");
        let request = adapter.request("alice");
        assert_eq!(request.url, "https://leetcode.com/graphql");
        assert_eq!(request.method, crate::http::Method::Post);
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["variables"]["username"], "alice");
        assert!(
            request
                .headers
                .iter()
                .any(|(k, v)| k == "Content-Type" && v == "application/json")
        );
    }
}
