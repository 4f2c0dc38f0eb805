//! Paginated, filtered sandbox listing with the public-only gate.

use crate::api::SandboxPage;
use crate::error::{ListError, SandboxError};
use std::future::Future;
use tpgen_core::Sandbox;

/// Source of sandbox pages, ordered by insertion time descending.
///
/// Implemented by [`CodeSandboxApi`](crate::CodeSandboxApi) for the real
/// service; tests drive the paging loop through an in-memory source.
pub trait PageSource {
    /// Fetch one page (1-based).
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<SandboxPage, SandboxError>> + Send;
}

impl<P: PageSource + Sync> PageSource for &P {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<SandboxPage, SandboxError>> + Send {
        (**self).fetch_page(page)
    }
}

impl PageSource for crate::CodeSandboxApi {
    fn fetch_page(
        &self,
        page: u32,
    ) -> impl Future<Output = Result<SandboxPage, SandboxError>> + Send {
        self.list_page(page)
    }
}

/// Pages through a [`PageSource`] collecting sandboxes accepted by a
/// caller-supplied predicate.
pub struct SandboxLister<P> {
    source: P,
}

impl<P: PageSource> SandboxLister<P> {
    pub const fn new(source: P) -> Self {
        Self { source }
    }

    /// Collect every sandbox accepted by `filter`, paging from page 1
    /// until the source is exhausted or, when `max_results` is set, the
    /// accumulated count reaches it (the final page is kept whole, so the
    /// result may overshoot the cap).
    ///
    /// Pages are fetched one at a time; the cursor increments only after a
    /// successful fetch.
    ///
    /// # Errors
    ///
    /// - [`ListError::NotPublic`] if any accepted sandbox on a page is not
    ///   public. The gate runs before that page is appended, the whole call
    ///   fails, and nothing accumulated so far is surfaced.
    /// - [`ListError::Transport`] if a page fetch fails. No retry is made
    ///   and prior accumulation is discarded.
    pub async fn list<F>(
        &self,
        filter: F,
        max_results: Option<usize>,
    ) -> Result<Vec<Sandbox>, ListError>
    where
        F: Fn(&Sandbox) -> bool,
    {
        let mut sandboxes: Vec<Sandbox> = Vec::new();
        let mut page = 1;

        loop {
            let fetched = self.source.fetch_page(page).await?;
            tracing::debug!(
                page,
                returned = fetched.sandboxes.len(),
                total = fetched.total_records,
                "fetched sandbox page"
            );

            let accepted: Vec<Sandbox> =
                fetched.sandboxes.into_iter().filter(|s| filter(s)).collect();

            if let Some(sandbox) = accepted.iter().find(|s| !s.privacy.is_public()) {
                tracing::warn!(
                    id = %sandbox.id,
                    privacy = %sandbox.privacy,
                    "matching sandbox is not public, aborting"
                );
                return Err(ListError::NotPublic {
                    id: sandbox.id.clone(),
                });
            }

            sandboxes.extend(accepted);

            let reached_cap = max_results.is_some_and(|max| sandboxes.len() >= max);
            if fetched.next_page.is_none() || reached_cap {
                break;
            }
            page += 1;
        }

        Ok(sandboxes)
    }
}
