use crate::client::{create_rest_client, Config};
use crate::error::{RestError, Result};
use crate::query::{filter_query, search_query, with_query, FilterOptions, Filters};
use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;

/// Per-request settings: method, extra headers and a pre-serialized body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// HTTP method, `GET` when unset
    pub method: Option<Method>,
    /// Headers applied over the JSON content-type default
    pub headers: IndexMap<String, String>,
    /// Request body, sent as-is
    pub body: Option<String>,
}

impl RequestOptions {
    /// Create options for a plain `GET` with no extra headers
    pub fn new() -> Self {
        Self::default()
    }

    /// `GET` request
    pub fn get() -> Self {
        Self::new().with_method(Method::GET)
    }

    /// `POST` request with a body
    pub fn post(body: impl Into<String>) -> Self {
        Self::new().with_method(Method::POST).with_body(body)
    }

    /// `PUT` request with a body
    pub fn put(body: impl Into<String>) -> Self {
        Self::new().with_method(Method::PUT).with_body(body)
    }

    /// `PATCH` request with a body
    pub fn patch(body: impl Into<String>) -> Self {
        Self::new().with_method(Method::PATCH).with_body(body)
    }

    /// `DELETE` request
    pub fn delete() -> Self {
        Self::new().with_method(Method::DELETE)
    }

    /// Set the HTTP method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Add a header, replacing any earlier value for the same name
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Merge headers: JSON content type, then caller headers, then the
    /// bearer token. Later entries replace earlier ones with the same name.
    pub fn merged_headers(&self, token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| RestError::RequestBuild(format!("invalid header name {:?}: {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| RestError::RequestBuild(format!("invalid value for header {}: {}", name, e)))?;
            headers.insert(name, value);
        }

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RestError::RequestBuild(format!("invalid bearer token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

/// Serialize a request payload to the JSON string sent as the body
pub fn encode_body<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    serde_json::to_string(value).map_err(|e| {
        tracing::error!(error = %e, "failed to encode request body");
        RestError::from(e)
    })
}

/// Context for REST API requests
#[derive(Debug, Clone)]
pub struct RestContext {
    /// HTTP client
    pub client: Client,
    /// Configuration
    pub config: Config,
}

impl RestContext {
    /// Create a new REST context with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a new REST context with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(RestContext {
            client: create_rest_client()?,
            config,
        })
    }

    /// Create a REST context around an existing HTTP client
    pub fn with_client(client: Client, config: Config) -> Self {
        RestContext { client, config }
    }

    /// Make a REST API request and decode the JSON response body into `T`
    ///
    /// # Arguments
    /// * `endpoint` - Path appended verbatim to the base URL
    /// * `options` - Method, headers and body
    /// * `token` - Optional bearer token
    ///
    /// # Returns
    /// The decoded response body. Decoding is structural only.
    pub async fn request<T>(&self, endpoint: &str, options: RequestOptions, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.config.url_for(endpoint);
        let response = self.send(endpoint, options, token).await?;

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "failed to read response body");
            RestError::from(e)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(url = %url, error = %e, "failed to decode response body");
            RestError::from(e)
        })
    }

    /// Execute a REST API request and return the raw response once its
    /// status is known to be successful
    pub async fn send(&self, endpoint: &str, options: RequestOptions, token: Option<&str>) -> Result<reqwest::Response> {
        let url = self.config.url_for(endpoint);
        let method = options.method.clone().unwrap_or(Method::GET);

        let headers = options.merged_headers(token).map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "request rejected");
            e
        })?;

        let mut request = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "request failed");
            RestError::from(e)
        })?;
        let status = response.status();

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            elapsed = ?start.elapsed(),
            "request completed"
        );

        if !status.is_success() {
            let error = RestError::http(status.as_u16());
            tracing::error!(method = %method, url = %url, error = %error, "request returned an error status");
            return Err(error);
        }

        Ok(response)
    }

    /// Search a resource collection by `<field>_like=<term>`.
    ///
    /// An empty term lists the whole collection.
    pub async fn fetch_data<T>(&self, resource: &str, field: &str, term: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let path = format!("/{}", resource);
        let endpoint = match search_query(field, term) {
            Some(query) => with_query(&path, &query),
            None => path,
        };
        self.request(&endpoint, RequestOptions::new(), None).await
    }

    /// List a resource collection with field filters, sorting and pagination
    pub async fn fetch_filtered_data<T>(&self, resource: &str, filters: &Filters, options: &FilterOptions) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let endpoint = with_query(&format!("/{}", resource), &filter_query(filters, options));
        self.request(&endpoint, RequestOptions::new(), None).await
    }
}
