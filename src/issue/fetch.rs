//! Cursor-paginated fetch of an issue and its whole comment thread.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::decode::{PageResult, decode_page};
use super::error::{FetchError, Result};
use super::models::{Comment, Issue, IssueMetadata};
use super::query::{IssueQuery, MAX_BATCH_SIZE};
use super::reference::IssueRef;
use crate::infra::github::{Transport, TransportError};

/// Upper bound on requests per fetch; at 100 comments a page this is far
/// beyond any real thread.
const MAX_PAGES: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Comments per page; clamped to `1..=MAX_BATCH_SIZE`.
    pub batch_size: u32,
    /// Extra attempts per page after a transient transport failure.
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each further retry.
    pub retry_backoff: Duration,
    /// Limit on the whole paginated fetch, retries included.
    pub deadline: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
            max_retries: 0,
            retry_backoff: Duration::ZERO,
            deadline: None,
        }
    }
}

enum PageState {
    Start,
    Fetching(String),
    Done,
}

impl PageState {
    fn cursor(&self) -> Option<&str> {
        match self {
            Self::Fetching(cursor) => Some(cursor),
            Self::Start | Self::Done => None,
        }
    }

    fn advance(&self, next_cursor: Option<String>) -> Result<Self> {
        match next_cursor {
            None => Ok(Self::Done),
            Some(next) if self.cursor() == Some(next.as_str()) => Err(FetchError::MalformedResponse(
                format!("endCursor {next:?} did not advance"),
            )),
            Some(next) => Ok(Self::Fetching(next)),
        }
    }
}

/// Fetch `reference` with every comment page and assemble one `Issue`.
///
/// Pages are requested one after another, each with the previous page's
/// `endCursor`. Any failure aborts the whole fetch: a partial thread is
/// never returned.
pub async fn fetch_issue<T: Transport>(
    transport: &T,
    reference: &IssueRef,
    options: &FetchOptions,
) -> Result<Issue> {
    let Some(deadline) = options.deadline else {
        return fetch_all_pages(transport, reference, options).await;
    };

    tokio::time::timeout(deadline, fetch_all_pages(transport, reference, options))
        .await
        .map_err(|_| TransportError::DeadlineExceeded(deadline))?
}

async fn fetch_all_pages<T: Transport>(
    transport: &T,
    reference: &IssueRef,
    options: &FetchOptions,
) -> Result<Issue> {
    let mut state = PageState::Start;
    let mut metadata: Option<IssueMetadata> = None;
    let mut comments: Vec<Comment> = Vec::new();
    let mut pages = 0;

    while !matches!(state, PageState::Done) {
        if pages == MAX_PAGES {
            return Err(FetchError::MalformedResponse(format!(
                "comment thread did not end after {MAX_PAGES} pages"
            )));
        }
        pages += 1;

        let cursor = state.cursor();
        let page = fetch_page(transport, reference, cursor, options).await?;
        debug!(
            page = pages,
            cursor,
            comments = page.comments.len(),
            has_next_page = page.page_info.has_next_page,
            "fetched comment page"
        );

        comments.extend(page.comments);
        metadata.get_or_insert(page.issue);
        state = state.advance(page.page_info.next_cursor())?;
    }

    let metadata = metadata
        .ok_or_else(|| FetchError::Internal("pagination finished without a page".to_string()))?;
    info!(%reference, pages, comments = comments.len(), "fetched issue");

    Ok(Issue::assemble(reference.clone(), metadata, comments))
}

async fn fetch_page<T: Transport>(
    transport: &T,
    reference: &IssueRef,
    cursor: Option<&str>,
    options: &FetchOptions,
) -> Result<PageResult> {
    let query = IssueQuery::new(reference, options.batch_size, cursor);
    debug!(cursor, batch_size = query.batch_size(), "requesting comment page");
    let body = query.to_body()?;
    let bytes = send_with_retry(transport, body, options).await?;
    decode_page(&bytes)
}

/// Send `body`, retrying transient transport failures with exponential
/// backoff. Only the transport is retried; decoding happens after.
async fn send_with_retry<T: Transport>(
    transport: &T,
    body: Vec<u8>,
    options: &FetchOptions,
) -> Result<Vec<u8>> {
    let mut attempt: u32 = 0;
    loop {
        match transport.post(body.clone()).await {
            Ok(bytes) => return Ok(bytes),
            Err(e) if e.is_retryable() && attempt < options.max_retries => {
                let delay = options
                    .retry_backoff
                    .saturating_mul(2u32.saturating_pow(attempt));
                attempt += 1;
                warn!(attempt, max_retries = options.max_retries, ?delay, error = %e, "retrying GraphQL request");
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
