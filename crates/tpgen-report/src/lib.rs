//! # tpgen-report
//!
//! The contract the request handler consumes: given assignment coordinates
//! and an access token, produce the ordered `{url, question}` list for the
//! report generator.
//!
//! Composition is one-directional: a matcher built from the coordinates
//! supplies the membership predicate to the lister; each accepted sandbox
//! is then resolved to its browsable URL and paired with the question
//! number its title encodes.

mod error;

pub use error::ReportError;

use tpgen_assignment::AssignmentMatcher;
use tpgen_core::{AssignmentCoordinates, SandboxLink};
use tpgen_sandboxes::{CodeSandboxApi, PageSource, SandboxLister, UrlResolver};

/// List this assignment's sandboxes as ordered report links, against the
/// real CodeSandbox API.
///
/// # Errors
///
/// See [`list_matching_with`].
pub async fn list_matching(
    coords: &AssignmentCoordinates,
    token: &str,
    max_results: Option<usize>,
) -> Result<Vec<SandboxLink>, ReportError> {
    let api = CodeSandboxApi::new(token);
    list_matching_with(coords, &api, &api, max_results).await
}

/// Same contract over explicit page and resolver seams.
///
/// URL resolution for the final filtered set runs concurrently; the output
/// keeps the report order regardless of completion order: ascending by
/// question number, entries without a parsable question last.
///
/// # Errors
///
/// - [`ReportError::Pattern`] if the custom pattern does not compile.
/// - [`ReportError::List`] on transport failure or a non-public match;
///   resolver failures also land here.
/// - [`ReportError::NoMatches`] when paging completes with zero matches.
pub async fn list_matching_with<P, R>(
    coords: &AssignmentCoordinates,
    pages: P,
    resolver: R,
    max_results: Option<usize>,
) -> Result<Vec<SandboxLink>, ReportError>
where
    P: PageSource,
    R: UrlResolver,
{
    let matcher = AssignmentMatcher::new(coords)?;
    let lister = SandboxLister::new(pages);

    let sandboxes = lister
        .list(|s| matcher.is_member(s.title.as_deref()), max_results)
        .await?;

    if sandboxes.is_empty() {
        return Err(ReportError::NoMatches);
    }
    tracing::debug!(matches = sandboxes.len(), "resolving sandbox URLs");

    let links = futures::future::try_join_all(sandboxes.iter().map(|sandbox| async {
        let url = resolver.resolve(&sandbox.id).await?;
        Ok::<_, ReportError>(SandboxLink {
            url,
            question: matcher.question_number(sandbox.title.as_deref()),
        })
    }))
    .await?;

    Ok(order_links(links))
}

/// Order links for the report: ascending question number, unparsable
/// questions last.
fn order_links(mut links: Vec<SandboxLink>) -> Vec<SandboxLink> {
    links.sort_by_key(|link| (link.question.is_none(), link.question));
    links
}
