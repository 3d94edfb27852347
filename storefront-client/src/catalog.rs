//! Catalog service client
//!
//! Typed GETs against the headless catalog API. List responses are
//! cached for a short TTL keyed by the exact query; the convenience
//! methods degrade to the built-in fallback catalog when the backend
//! fails, while the `try_*` variants surface the raw error.

use crate::error::{ClientError, ClientResult};
use crate::fallback;
use crate::ClientConfig;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Category, Product};
use shared::response::PaginatedResponse;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::warn;

/// Product listing filters, mapped onto the API query string.
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: bool,
    pub sort: Option<String>,
}

impl ProductFilters {
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Sort key passed through to the backend (e.g. "price_asc").
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if self.featured {
            params.push(("featured", "true".to_string()));
        }
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        params
    }
}

struct CachedPage {
    fetched_at: Instant,
    page: PaginatedResponse<Product>,
}

/// HTTP client for the catalog service
pub struct CatalogClient {
    client: Client,
    base_url: String,
    cache_ttl: Duration,
    cache: Mutex<HashMap<String, CachedPage>>,
}

impl CatalogClient {
    /// Create a new catalog client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            cache_ttl: Duration::from_secs(config.cache_ttl),
            cache: Mutex::new(HashMap::new()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    // ========== Products ==========

    /// Fetch a product page, returning the raw result.
    pub async fn try_products(
        &self,
        filters: &ProductFilters,
    ) -> ClientResult<PaginatedResponse<Product>> {
        let params = filters.query_params();
        let cache_key = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        if let Some(page) = self.cached(&cache_key) {
            return Ok(page);
        }

        let response = self
            .client
            .get(self.url("api/products"))
            .query(&params)
            .send()
            .await?;
        let page: PaginatedResponse<Product> = Self::handle_response(response).await?;

        self.remember(cache_key, &page);
        Ok(page)
    }

    /// Fetch a product page; on failure, serve the fallback catalog so
    /// the listing stays usable.
    pub async fn products(&self, filters: &ProductFilters) -> PaginatedResponse<Product> {
        match self.try_products(filters).await {
            Ok(page) => page,
            Err(err) => {
                warn!(error = %err, "product fetch failed, serving fallback catalog");
                fallback::product_page(filters)
            }
        }
    }

    /// Fetch a single product by id or slug.
    pub async fn try_product(&self, id_or_slug: &str) -> ClientResult<Product> {
        let response = self
            .client
            .get(self.url(&format!("api/products/{}", id_or_slug)))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Fetch a single product; missing or unreachable both come back
    /// as `None`.
    pub async fn product(&self, id_or_slug: &str) -> Option<Product> {
        match self.try_product(id_or_slug).await {
            Ok(product) => Some(product),
            Err(ClientError::NotFound(_)) => None,
            Err(err) => {
                warn!(id_or_slug, error = %err, "product fetch failed");
                None
            }
        }
    }

    /// Featured products only.
    pub async fn featured_products(&self, limit: i64) -> Vec<Product> {
        self.products(&ProductFilters::default().featured().limit(limit))
            .await
            .docs
    }

    /// Products in a category (by slug).
    pub async fn products_in_category(
        &self,
        slug: &str,
        filters: ProductFilters,
    ) -> Vec<Product> {
        self.products(&filters.category(slug)).await.docs
    }

    /// Substring search, delegated to the backend.
    pub async fn search(&self, query: &str, filters: ProductFilters) -> Vec<Product> {
        self.products(&filters.search(query)).await.docs
    }

    // ========== Categories ==========

    /// Fetch categories, returning the raw result.
    pub async fn try_categories(&self, featured_only: bool) -> ClientResult<Vec<Category>> {
        let mut request = self.client.get(self.url("api/categories"));
        if featured_only {
            request = request.query(&[("featured", "true")]);
        }
        Self::handle_response(request.send().await?).await
    }

    /// Fetch categories; on failure, serve the fallback set.
    pub async fn categories(&self, featured_only: bool) -> Vec<Category> {
        match self.try_categories(featured_only).await {
            Ok(categories) => categories,
            Err(err) => {
                warn!(error = %err, "category fetch failed, serving fallback set");
                fallback::category_list(featured_only)
            }
        }
    }

    // ========== Cache ==========

    /// Drop all cached responses.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }

    fn cached(&self, key: &str) -> Option<PaginatedResponse<Product>> {
        if self.cache_ttl.is_zero() {
            return None;
        }
        let cache = self.cache.lock().ok()?;
        let entry = cache.get(key)?;
        (entry.fetched_at.elapsed() < self.cache_ttl).then(|| entry.page.clone())
    }

    fn remember(&self, key: String, page: &PaginatedResponse<Product>) {
        if self.cache_ttl.is_zero() {
            return;
        }
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                key,
                CachedPage {
                    fetched_at: Instant::now(),
                    page: page.clone(),
                },
            );
        }
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn product_json(id: i64, name: &str, price: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "price": price,
            "category": "Gaming",
            "rating": 4.5,
            "reviews": 10
        })
    }

    fn envelope(docs: Vec<serde_json::Value>) -> serde_json::Value {
        let total = docs.len();
        json!({
            "docs": docs,
            "totalDocs": total,
            "limit": 20,
            "totalPages": 1,
            "page": 1,
            "pagingCounter": 1,
            "hasPrevPage": false,
            "hasNextPage": false,
            "prevPage": null,
            "nextPage": null
        })
    }

    fn client(server_uri: &str) -> CatalogClient {
        CatalogClient::new(&ClientConfig::new(server_uri).with_timeout(5).with_cache_ttl(0))
    }

    #[tokio::test]
    async fn test_products_parses_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![
                product_json(11, "Wireless Gaming Mouse Pro", "KSh 5,900"),
                product_json(301, "PlayStation 5 Console (Slim)", "KSh 75,000"),
            ])))
            .mount(&server)
            .await;

        let page = client(&server.uri())
            .try_products(&ProductFilters::default())
            .await
            .unwrap();

        assert_eq!(page.docs.len(), 2);
        assert_eq!(page.docs[0].price, "KSh 5,900");
        assert_eq!(page.total_docs, 2);
    }

    #[tokio::test]
    async fn test_products_sends_filter_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(query_param("limit", "8"))
            .and(query_param("category", "Gaming"))
            .and(query_param("search", "mouse"))
            .and(query_param("featured", "true"))
            .and(query_param("sort", "price_asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let filters = ProductFilters::default()
            .limit(8)
            .category("Gaming")
            .search("mouse")
            .featured()
            .sort("price_asc");

        let result = client(&server.uri()).try_products(&filters).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_products_fall_back_on_server_error() {
        let _ = tracing_subscriber::fmt().with_env_filter("warn").try_init();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let page = client(&server.uri())
            .products(&ProductFilters::default())
            .await;

        assert_eq!(page.total_docs, 14);
        assert!(page.docs.iter().any(|p| p.price == "KSh 5,900"));
    }

    #[tokio::test]
    async fn test_products_fall_back_on_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let catalog = client(&server.uri());
        assert!(catalog.try_products(&ProductFilters::default()).await.is_err());

        let page = catalog.products(&ProductFilters::default()).await;
        assert_eq!(page.total_docs, 14);
    }

    #[tokio::test]
    async fn test_products_fall_back_on_connection_refused() {
        let catalog = client("http://127.0.0.1:1");

        let page = catalog
            .products(&ProductFilters::default().category("Gaming"))
            .await;

        // Fallback applies the filters locally
        assert!(page.docs.iter().all(|p| p.category == "Gaming"));
        assert!(!page.docs.is_empty());
    }

    #[tokio::test]
    async fn test_cache_serves_repeat_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![
                product_json(1, "Thing", "KSh 1,000"),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let catalog =
            CatalogClient::new(&ClientConfig::new(server.uri()).with_timeout(5));
        let filters = ProductFilters::default().limit(4);

        let first = catalog.try_products(&filters).await.unwrap();
        let second = catalog.try_products(&filters).await.unwrap();
        assert_eq!(first, second);

        // expect(1) fails here if the repeat request reached the server
        server.verify().await;
    }

    #[tokio::test]
    async fn test_clear_cache_forces_refetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
            .expect(2)
            .mount(&server)
            .await;

        let catalog =
            CatalogClient::new(&ClientConfig::new(server.uri()).with_timeout(5));
        let filters = ProductFilters::default();

        catalog.try_products(&filters).await.unwrap();
        catalog.clear_cache();
        catalog.try_products(&filters).await.unwrap();

        server.verify().await;
    }

    #[tokio::test]
    async fn test_product_not_found_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products/999"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert!(client(&server.uri()).product("999").await.is_none());
    }

    #[tokio::test]
    async fn test_product_by_slug() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products/wireless-gaming-mouse-pro"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(product_json(11, "Wireless Gaming Mouse Pro", "KSh 5,900")),
            )
            .mount(&server)
            .await;

        let product = client(&server.uri())
            .product("wireless-gaming-mouse-pro")
            .await
            .unwrap();
        assert_eq!(product.name, "Wireless Gaming Mouse Pro");
    }

    #[tokio::test]
    async fn test_categories_parse_and_filter_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .and(query_param("featured", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "1",
                "name": "Smartphones",
                "slug": "smartphones",
                "sortOrder": 1,
                "isActive": true,
                "isFeatured": true,
                "productCount": 3
            }])))
            .mount(&server)
            .await;

        let categories = client(&server.uri()).categories(true).await;
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "smartphones");
    }

    #[tokio::test]
    async fn test_categories_fall_back_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let categories = client(&server.uri()).categories(false).await;
        assert_eq!(categories.len(), 4);
    }
}
