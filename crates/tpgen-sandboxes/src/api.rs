//! CodeSandbox REST wire client.
//!
//! Two endpoints are used:
//! - `GET {api}/sandbox` — authenticated, paged sandbox summaries ordered
//!   by insertion time descending;
//! - `GET {web}/api/v1/sandboxes/{id}` — unauthenticated alias lookup used
//!   to build the browsable URL for a sandbox.

use crate::error::SandboxError;
use std::future::Future;
use tpgen_core::Sandbox;

const API_BASE_URL: &str = "https://api.codesandbox.io";
const BROWSE_BASE_URL: &str = "https://codesandbox.io";

/// Fixed page size used when listing sandboxes.
pub const PAGE_SIZE: u32 = 50;

// ── Wire format ────────────────────────────────────────────────────

#[derive(Debug, serde::Deserialize)]
struct ListEnvelope {
    errors: Option<Vec<String>>,
    success: bool,
    data: ListData,
}

#[derive(Debug, serde::Deserialize)]
struct ListData {
    sandboxes: Vec<Sandbox>,
    pagination: Pagination,
}

#[derive(Debug, serde::Deserialize)]
struct Pagination {
    next_page: Option<u32>,
    total_records: u32,
}

#[derive(Debug, serde::Deserialize)]
struct AliasEnvelope {
    data: AliasData,
}

#[derive(Debug, serde::Deserialize)]
struct AliasData {
    alias: String,
}

/// One page of sandbox summaries.
#[derive(Debug, Clone)]
pub struct SandboxPage {
    /// Sandboxes on this page, newest first.
    pub sandboxes: Vec<Sandbox>,
    /// Next page number, if the collection has one.
    pub next_page: Option<u32>,
    /// Total record count reported by the API.
    pub total_records: u32,
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the CodeSandbox API, bound to one access token.
pub struct CodeSandboxApi {
    http: reqwest::Client,
    token: String,
}

impl CodeSandboxApi {
    /// Create a client for the given access token.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("tpgen/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            token: token.into(),
        }
    }

    /// Fetch one page (1-based) of the caller's sandboxes, ordered by
    /// insertion time descending.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError`] if the request fails, the API returns a
    /// non-success status, or the envelope reports failure.
    pub async fn list_page(&self, page: u32) -> Result<SandboxPage, SandboxError> {
        let url = format!(
            "{API_BASE_URL}/sandbox?order_by=inserted_at&direction=desc&page_size={PAGE_SIZE}&page={page}"
        );
        let resp = check_response(
            self.http
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?,
        )
        .await?;

        let envelope: ListEnvelope = resp.json().await?;
        if !envelope.success {
            return Err(SandboxError::Parse(format!(
                "API reported failure: {}",
                envelope.errors.unwrap_or_default().join("; ")
            )));
        }

        Ok(SandboxPage {
            sandboxes: envelope.data.sandboxes,
            next_page: envelope.data.pagination.next_page,
            total_records: envelope.data.pagination.total_records,
        })
    }

    /// Resolve a sandbox id to its browsable URL via the alias lookup.
    ///
    /// # Errors
    ///
    /// Returns [`SandboxError`] if the request fails or the response does
    /// not carry an alias.
    pub async fn resolve_url(&self, sandbox_id: &str) -> Result<String, SandboxError> {
        let url = format!(
            "{BROWSE_BASE_URL}/api/v1/sandboxes/{}",
            urlencoding::encode(sandbox_id)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;

        let envelope: AliasEnvelope = resp.json().await?;
        Ok(format!(
            "{BROWSE_BASE_URL}/p/sandbox/{}",
            envelope.data.alias
        ))
    }
}

/// Resolves a sandbox id to its browsable URL.
///
/// Implemented by [`CodeSandboxApi`] via the alias lookup; tests substitute
/// an in-memory resolver.
pub trait UrlResolver {
    /// Translate an opaque sandbox id into a browsable address.
    fn resolve(
        &self,
        sandbox_id: &str,
    ) -> impl Future<Output = Result<String, SandboxError>> + Send;
}

impl<R: UrlResolver + Sync> UrlResolver for &R {
    fn resolve(
        &self,
        sandbox_id: &str,
    ) -> impl Future<Output = Result<String, SandboxError>> + Send {
        (**self).resolve(sandbox_id)
    }
}

impl UrlResolver for CodeSandboxApi {
    fn resolve(
        &self,
        sandbox_id: &str,
    ) -> impl Future<Output = Result<String, SandboxError>> + Send {
        self.resolve_url(sandbox_id)
    }
}

/// Fail loudly on non-success responses, carrying status and body.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SandboxError> {
    if !resp.status().is_success() {
        return Err(SandboxError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
