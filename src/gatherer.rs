use async_trait::async_trait;
use ec2_types::{Paginated, PaginatedResponse};
use log::{debug, warn};
use std::collections::HashSet;
use std::future::Future;

use crate::error::Result;

pub mod aws;

#[async_trait]
pub trait Gatherer {
    type Resource;
    async fn gather(&self) -> Result<Vec<Self::Resource>>;
}

/// Collects the items of every page of a describe call.
///
/// A page's non-empty `next_token` is copied into the next request. Stops when
/// the token is absent or empty, or when the service hands back a token that
/// was already followed.
pub async fn paginate<Req, Resp, F, Fut>(
    mut request: Req,
    mut fetch: F,
) -> Result<Vec<Resp::Item>>
where
    Req: Paginated + Clone,
    Resp: PaginatedResponse,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp>>,
{
    let mut items = vec![];
    let mut seen: HashSet<String> = request
        .next_token()
        .map(str::to_string)
        .into_iter()
        .collect();
    loop {
        let page = fetch(request.clone()).await?;
        let token = page
            .next_token()
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        items.extend(page.into_items());
        match token {
            None => break,
            Some(token) if seen.contains(&token) => {
                warn!("Service repeated page token {}, stopping", token);
                break;
            }
            Some(token) => {
                seen.insert(token.clone());
                debug!("Fetching next page: {}", token);
                request.set_next_token(Some(token));
            }
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use ec2_types::route_table::{
        DescribeRouteTablesRequest, DescribeRouteTablesResponse, RouteTable,
    };
    use std::future::ready;

    fn page(ids: &[&str], next: Option<&str>) -> DescribeRouteTablesResponse {
        DescribeRouteTablesResponse {
            route_tables: Some(
                ids.iter()
                    .map(|id| RouteTable {
                        route_table_id: Some(id.to_string()),
                        ..Default::default()
                    })
                    .collect(),
            ),
            next_token: next.map(str::to_string),
        }
    }

    fn ids(tables: Vec<RouteTable>) -> Vec<String> {
        tables
            .into_iter()
            .filter_map(|t| t.route_table_id)
            .collect()
    }

    #[tokio::test]
    async fn test_follows_tokens_across_pages() {
        let mut seen = vec![];
        let request = DescribeRouteTablesRequest {
            max_results: Some(5),
            ..Default::default()
        };
        let tables = paginate(request, |req: DescribeRouteTablesRequest| {
            seen.push(req.next_token.clone());
            let resp = match req.next_token.as_deref() {
                None => page(&["rtb-1", "rtb-2"], Some("p2")),
                Some("p2") => page(&["rtb-3"], Some("p3")),
                _ => page(&["rtb-4"], None),
            };
            ready(Ok(resp))
        })
        .await
        .unwrap();
        assert_eq!(ids(tables), vec!["rtb-1", "rtb-2", "rtb-3", "rtb-4"]);
        assert_eq!(
            seen,
            vec![None, Some("p2".to_string()), Some("p3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_empty_token_ends() {
        let mut calls = 0;
        let tables = paginate(DescribeRouteTablesRequest::default(), |_| {
            calls += 1;
            ready(Ok(page(&["rtb-1"], Some(""))))
        })
        .await
        .unwrap();
        assert_eq!(ids(tables), vec!["rtb-1"]);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_repeated_token_ends() {
        let mut calls = 0;
        let tables = paginate(DescribeRouteTablesRequest::default(), |_| {
            calls += 1;
            ready(Ok(page(&["rtb-1"], Some("same"))))
        })
        .await
        .unwrap();
        assert_eq!(ids(tables), vec!["rtb-1", "rtb-1"]);
        assert_eq!(calls, 2);
    }

    #[tokio::test]
    async fn test_cycling_tokens_end() {
        let mut calls = 0;
        let tables = paginate(
            DescribeRouteTablesRequest::default(),
            |req: DescribeRouteTablesRequest| {
                calls += 1;
                let resp = match req.next_token.as_deref() {
                    None => page(&["rtb-1"], Some("a")),
                    Some("a") => page(&["rtb-2"], Some("b")),
                    _ => page(&["rtb-3"], Some("a")),
                };
                ready(Ok(resp))
            },
        )
        .await
        .unwrap();
        assert_eq!(ids(tables), vec!["rtb-1", "rtb-2", "rtb-3"]);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn test_page_without_items() {
        let tables = paginate(DescribeRouteTablesRequest::default(), |_| {
            ready(Ok(DescribeRouteTablesResponse::default()))
        })
        .await
        .unwrap();
        assert!(tables.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let result = paginate(
            DescribeRouteTablesRequest::default(),
            |req: DescribeRouteTablesRequest| match req.next_token {
                None => ready(Ok(page(&["rtb-1"], Some("p2")))),
                Some(_) => ready(Err(Error::InvalidInput("boom".to_string()))),
            },
        )
        .await;
        assert!(matches!(result, Err(Error::InvalidInput(msg)) if msg == "boom"));
    }
}
