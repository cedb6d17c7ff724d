//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ApiConfig;
use crate::options::FilterOptions;
use crate::services::summarizer::{SummaryClient, SummaryError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    pool: PgPool,
    summarizer: SummaryClient,
    /// `None` if the descriptor failed to load at startup; only the
    /// options endpoint degrades in that case.
    filter_options: Option<FilterOptions>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the summarization HTTP client cannot be built.
    pub fn new(
        config: ApiConfig,
        pool: PgPool,
        filter_options: Option<FilterOptions>,
    ) -> Result<Self, SummaryError> {
        let summarizer =
            SummaryClient::new(&config.summary_service_url, config.summary_timeout)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                summarizer,
                filter_options,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the summarization service client.
    #[must_use]
    pub fn summarizer(&self) -> &SummaryClient {
        &self.inner.summarizer
    }

    /// The filter options descriptor, if it loaded at startup.
    #[must_use]
    pub fn filter_options(&self) -> Option<&FilterOptions> {
        self.inner.filter_options.as_ref()
    }
}
