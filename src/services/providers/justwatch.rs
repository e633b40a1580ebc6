/// JustWatch catalog provider
///
/// Pages through the `newTitles` GraphQL connection with cursor-based
/// pagination. Pages are requested strictly one after another, each with a
/// freshly generated device identity.
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{NewTitlesPage, NewTitlesResponse, RawNode},
    services::{
        identity::IdentityGenerator,
        providers::{
            queries::{NEW_TITLES_OPERATION, NEW_TITLES_QUERY},
            CatalogProvider, FetchParams,
        },
        transport::{Transport, TransportRequest},
    },
};

pub struct JustWatchProvider {
    transport: Arc<dyn Transport>,
    api_url: String,
    identity: IdentityGenerator,
}

impl JustWatchProvider {
    pub fn new(transport: Arc<dyn Transport>, api_url: String) -> Self {
        Self::with_identity(transport, api_url, IdentityGenerator::from_entropy())
    }

    pub fn with_identity(
        transport: Arc<dyn Transport>,
        api_url: String,
        identity: IdentityGenerator,
    ) -> Self {
        Self {
            transport,
            api_url,
            identity,
        }
    }

    /// GraphQL variables for one page; `after` is only sent once a cursor is held
    fn build_variables(params: &FetchParams, cursor: Option<&str>) -> Value {
        let mut variables = json!({
            "first": params.page_size,
            "pageType": "NEW",
            "date": params.date.format("%Y-%m-%d").to_string(),
            "filter": {
                "ageCertifications": [],
                "excludeGenres": [],
                "excludeProductionCountries": [],
                "objectTypes": [],
                "productionCountries": [],
                "subgenres": [],
                "genres": [],
                "packages": params.packages,
                "excludeIrrelevantTitles": false,
                "presentationTypes": [],
                "monetizationTypes": [],
            },
            "language": params.language,
            "country": params.country,
            "priceDrops": false,
            "platform": "WEB",
        });

        if let Some(after) = cursor {
            variables["after"] = json!(after);
        }

        variables
    }

    async fn fetch_page(
        &self,
        params: &FetchParams,
        cursor: Option<&str>,
    ) -> AppResult<NewTitlesPage> {
        let request = TransportRequest {
            url: self.api_url.clone(),
            headers: self.identity.headers(),
            body: json!({
                "operationName": NEW_TITLES_OPERATION,
                "variables": Self::build_variables(params, cursor),
                "query": NEW_TITLES_QUERY,
            }),
        };

        let response = self.transport.post_json(request).await.map_err(|e| {
            tracing::error!(error = %e, "Catalog request could not be sent");
            AppError::Fetch(format!("Catalog request failed: {}", e))
        })?;

        if !response.is_success() {
            tracing::error!(
                status = response.status,
                body = %response.body,
                "Catalog request failed"
            );
            return Err(AppError::Fetch(format!(
                "Catalog API returned status {}: {}",
                response.status, response.body
            )));
        }

        let parsed: NewTitlesResponse = response.json().map_err(|e| {
            tracing::error!(error = %e, body = %response.body, "Failed to parse catalog response");
            AppError::Fetch(format!("Failed to parse catalog response: {}", e))
        })?;

        match parsed.data.and_then(|data| data.new_titles) {
            Some(page) => Ok(page),
            None => match parsed.errors {
                Some(errors) => Err(AppError::Fetch(format!(
                    "Catalog GraphQL errors: {}",
                    errors
                ))),
                None => {
                    tracing::warn!("Catalog response carried no newTitles; treating as last page");
                    Ok(NewTitlesPage::default())
                }
            },
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for JustWatchProvider {
    async fn fetch_new_titles(&self, params: &FetchParams) -> AppResult<Vec<RawNode>> {
        tracing::info!(
            country = %params.country,
            language = %params.language,
            date = %params.date,
            page_size = params.page_size,
            provider = self.name(),
            "Fetching new titles"
        );

        let mut nodes = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self.fetch_page(params, cursor.as_deref()).await?;
            pages += 1;

            for edge in page.edges {
                let provider_label = edge.provider_label();
                if let Some(mut node) = edge.node.filter(|node| !node.is_empty()) {
                    node.streaming_service = provider_label;
                    nodes.push(node);
                }
            }

            tracing::info!(
                page = pages,
                fetched = nodes.len(),
                total = page.total_count,
                "Fetched {}/{} titles",
                nodes.len(),
                page.total_count
            );

            if !page.page_info.has_next_page {
                break;
            }

            // A next page without a usable cursor ends the stream
            match page.page_info.end_cursor.filter(|c| !c.is_empty()) {
                Some(next) => cursor = Some(next),
                None => {
                    tracing::warn!(page = pages, "hasNextPage set but no end cursor; stopping");
                    break;
                }
            }
        }

        Ok(nodes)
    }

    fn name(&self) -> &'static str {
        "justwatch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::{MockTransport, TransportResponse};
    use chrono::NaiveDate;

    fn params() -> FetchParams {
        FetchParams {
            country: "US".to_string(),
            language: "en".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            packages: vec!["nfx".to_string()],
            page_size: 2,
        }
    }

    fn page_body(labels: &[Option<&str>], end_cursor: Option<&str>, has_next: bool) -> String {
        let edges: Vec<Value> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let offer = match label {
                    Some(name) => json!({ "package": { "clearName": name } }),
                    None => Value::Null,
                };
                json!({
                    "cursor": format!("c{}", i),
                    "watchNowOffer": offer,
                    "node": {
                        "__typename": "Movie",
                        "objectId": i as u64 + 1,
                        "objectType": "MOVIE",
                        "content": { "title": format!("Title {}", i) }
                    }
                })
            })
            .collect();

        json!({
            "data": {
                "newTitles": {
                    "totalCount": 3,
                    "edges": edges,
                    "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next }
                }
            }
        })
        .to_string()
    }

    fn ok(body: String) -> AppResult<TransportResponse> {
        Ok(TransportResponse { status: 200, body })
    }

    fn provider(transport: MockTransport) -> JustWatchProvider {
        JustWatchProvider::with_identity(
            Arc::new(transport),
            "http://catalog.test/graphql".to_string(),
            IdentityGenerator::seeded(11),
        )
    }

    #[test]
    fn test_build_variables_first_page() {
        let variables = JustWatchProvider::build_variables(&params(), None);
        assert_eq!(variables["first"], 2);
        assert_eq!(variables["date"], "2024-11-01");
        assert_eq!(variables["country"], "US");
        assert_eq!(variables["platform"], "WEB");
        assert_eq!(variables["pageType"], "NEW");
        assert_eq!(variables["priceDrops"], false);
        assert_eq!(variables["filter"]["packages"], json!(["nfx"]));
        assert_eq!(variables["filter"]["genres"], json!([]));
        assert_eq!(variables["filter"]["excludeIrrelevantTitles"], false);
        assert!(variables.get("after").is_none());
        assert!(variables.get("bucketType").is_none());
    }

    #[test]
    fn test_build_variables_with_cursor() {
        let variables = JustWatchProvider::build_variables(&params(), Some("cursor-1"));
        assert_eq!(variables["after"], "cursor-1");
    }

    #[tokio::test]
    async fn test_single_page_when_no_next_page() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_| ok(page_body(&[Some("Netflix"), None], Some("end"), false)));

        let nodes = provider(transport)
            .fetch_new_titles(&params())
            .await
            .unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].streaming_service.as_deref(), Some("Netflix"));
        assert_eq!(nodes[1].streaming_service, None);
    }

    #[tokio::test]
    async fn test_follows_cursor_until_exhausted() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(2)
            .returning(|request| match request.body["variables"].get("after") {
                None => ok(page_body(&[Some("Netflix"), Some("Hulu")], Some("p1"), true)),
                Some(after) => {
                    assert_eq!(after, "p1");
                    ok(page_body(&[Some("Peacock")], None, false))
                }
            });

        let nodes = provider(transport)
            .fetch_new_titles(&params())
            .await
            .unwrap();

        let labels: Vec<_> = nodes
            .iter()
            .map(|n| n.streaming_service.as_deref())
            .collect();
        assert_eq!(labels, vec![Some("Netflix"), Some("Hulu"), Some("Peacock")]);
    }

    #[tokio::test]
    async fn test_stops_when_next_page_has_no_cursor() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_| ok(page_body(&[Some("Netflix")], Some(""), true)));

        let nodes = provider(transport)
            .fetch_new_titles(&params())
            .await
            .unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[tokio::test]
    async fn test_every_request_carries_device_id() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .withf(|request| {
                request
                    .headers
                    .iter()
                    .any(|(name, value)| name == "DEVICE-ID" && value.len() == 22)
                    && request.body["operationName"] == "GetNewTitles"
            })
            .times(2)
            .returning(|request| match request.body["variables"].get("after") {
                None => ok(page_body(&[Some("Netflix")], Some("p1"), true)),
                Some(_) => ok(page_body(&[], None, false)),
            });

        provider(transport)
            .fetch_new_titles(&params())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_skips_empty_nodes() {
        let body = json!({
            "data": { "newTitles": {
                "totalCount": 2,
                "edges": [
                    { "watchNowOffer": null, "node": {} },
                    { "watchNowOffer": null, "node": null },
                    { "watchNowOffer": null, "node": { "objectId": 9, "objectType": "MOVIE" } }
                ],
                "pageInfo": { "endCursor": null, "hasNextPage": false }
            } }
        })
        .to_string();

        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(move |_| ok(body.clone()));

        let nodes = provider(transport)
            .fetch_new_titles(&params())
            .await
            .unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].object_id, Some(9));
    }

    #[tokio::test]
    async fn test_non_success_status_aborts_fetch() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(2)
            .returning(|request| match request.body["variables"].get("after") {
                None => ok(page_body(&[Some("Netflix")], Some("p1"), true)),
                Some(_) => Ok(TransportResponse {
                    status: 503,
                    body: "unavailable".to_string(),
                }),
            });

        let result = provider(transport).fetch_new_titles(&params()).await;
        match result {
            Err(AppError::Fetch(message)) => assert!(message.contains("503")),
            other => panic!("expected fetch error, got {:?}", other.map(|n| n.len())),
        }
    }

    #[tokio::test]
    async fn test_graphql_errors_abort_fetch() {
        let mut transport = MockTransport::new();
        transport.expect_post_json().times(1).returning(|_| {
            ok(json!({ "errors": [{ "message": "bad country" }] }).to_string())
        });

        let result = provider(transport).fetch_new_titles(&params()).await;
        assert!(matches!(result, Err(AppError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_missing_new_titles_is_empty() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_json()
            .times(1)
            .returning(|_| ok(json!({ "data": {} }).to_string()));

        let nodes = provider(transport)
            .fetch_new_titles(&params())
            .await
            .unwrap();
        assert!(nodes.is_empty());
    }
}
