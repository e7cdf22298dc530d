use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use joinup_boundary::{Activities, MessageResponse};

use crate::{util::into_json, Result};

/// Public Joinup API
#[derive(Clone, Copy)]
pub struct PublicApi {
    url: &'static str,
}

/// Criteria for narrowing an activity list request.
///
/// Constructed fresh from the form controls for every filter action and
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

impl ActivityQuery {
    /// Builds a query from raw form control values. Empty or
    /// whitespace-only values are omitted entirely.
    #[must_use]
    pub fn from_form(category: &str, sort: &str, search: &str) -> Self {
        Self {
            category: non_empty(category),
            sort: non_empty(sort),
            search: non_empty(search),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            category,
            sort,
            search,
        } = self;
        category.is_none() && sort.is_none() && search.is_none()
    }

    /// Serializes the present fields as a percent-encoded query string,
    /// or `None` if there is nothing to send.
    #[must_use]
    pub fn query_string(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let Self {
            category,
            sort,
            search,
        } = self;
        let mut params = vec![];

        if let Some(category) = category {
            let encoded_category = utf8_percent_encode(category, NON_ALPHANUMERIC);
            params.push(("category", encoded_category.to_string()));
        }
        if let Some(sort) = sort {
            let encoded_sort = utf8_percent_encode(sort, NON_ALPHANUMERIC);
            params.push(("sort", encoded_sort.to_string()));
        }
        if let Some(search) = search {
            let encoded_search = utf8_percent_encode(search, NON_ALPHANUMERIC);
            params.push(("search", encoded_search.to_string()));
        }
        let params = params
            .into_iter()
            .map(|(key, value)| [key, &value].join("="))
            .collect::<Vec<_>>()
            .join("&");
        Some(params)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: &'static str) -> Self {
        Self { url }
    }

    pub async fn activities(&self, query: &ActivityQuery) -> Result<Activities> {
        let mut url = format!("{}/activities", self.url);
        if let Some(query) = query.query_string() {
            url = format!("{url}?{query}");
        }
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        let url = signup_url(self.url, activity, email);
        let response = Request::post(&url).send().await?;
        into_json(response).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<MessageResponse> {
        let url = unregister_url(self.url, activity, email);
        let response = Request::delete(&url).send().await?;
        into_json(response).await
    }
}

fn signup_url(base: &str, activity: &str, email: &str) -> String {
    let activity = utf8_percent_encode(activity, NON_ALPHANUMERIC);
    let email = utf8_percent_encode(email, NON_ALPHANUMERIC);
    format!("{base}/activities/{activity}/signup?email={email}")
}

fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    let activity = utf8_percent_encode(activity, NON_ALPHANUMERIC);
    let email = utf8_percent_encode(email, NON_ALPHANUMERIC);
    format!("{base}/activities/{activity}/unregister?email={email}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_produce_no_query_string() {
        assert_eq!(ActivityQuery::default().query_string(), None);
        assert_eq!(ActivityQuery::from_form("", "", "").query_string(), None);
        assert_eq!(
            ActivityQuery::from_form("  ", "\t", "  ").query_string(),
            None
        );
    }

    #[test]
    fn only_present_fields_are_serialized() {
        let query = ActivityQuery::from_form("Art", "", "");
        assert_eq!(query.query_string().as_deref(), Some("category=Art"));

        let query = ActivityQuery::from_form("Art", "", "painting");
        assert_eq!(
            query.query_string().as_deref(),
            Some("category=Art&search=painting")
        );

        let query = ActivityQuery::from_form("Art", "name", "painting");
        assert_eq!(
            query.query_string().as_deref(),
            Some("category=Art&sort=name&search=painting")
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let query = ActivityQuery::from_form("", "", "rock & roll");
        assert_eq!(
            query.query_string().as_deref(),
            Some("search=rock%20%26%20roll")
        );
    }

    #[test]
    fn form_values_are_trimmed() {
        let query = ActivityQuery::from_form(" Art ", "", "");
        assert_eq!(query.category.as_deref(), Some("Art"));
        assert_eq!(query.sort, None);
        assert_eq!(query.search, None);
    }

    #[test]
    fn signup_url_encodes_path_segment_and_email() {
        assert_eq!(
            signup_url("", "Chess Club", "alice@example.org"),
            "/activities/Chess%20Club/signup?email=alice%40example%2Eorg"
        );
    }

    #[test]
    fn unregister_url_encodes_path_segment_and_email() {
        assert_eq!(
            unregister_url("/api", "Chess Club", "alice@example.org"),
            "/api/activities/Chess%20Club/unregister?email=alice%40example%2Eorg"
        );
    }
}
