//! Forecast search service
//!
//! Couples the [`SearchSession`] state machine with a [`ForecastPort`]. The
//! session lock is only held while applying an event, never across the fetch,
//! so several searches may be in flight; only the latest one is accepted.

use std::sync::Arc;

use domain::{CityQuery, ForecastPayload, GroupBy};
use parking_lot::Mutex;
use tracing::{info, instrument};

use super::search_session::{RequestId, SearchEvent, SearchSession, SearchState, Transition};
use crate::error::ApplicationError;
use crate::ports::ForecastPort;

/// Runs city searches against a forecast source
pub struct SearchService {
    forecast_source: Arc<dyn ForecastPort>,
    session: Mutex<SearchSession>,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("session", &*self.session.lock())
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a service that groups by weekday
    #[must_use]
    pub fn new(forecast_source: Arc<dyn ForecastPort>) -> Self {
        Self::with_grouping(forecast_source, GroupBy::default())
    }

    #[must_use]
    pub fn with_grouping(forecast_source: Arc<dyn ForecastPort>, group_by: GroupBy) -> Self {
        Self {
            forecast_source,
            session: Mutex::new(SearchSession::new(group_by)),
        }
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.session.lock().state().clone()
    }

    /// Issue a new request; any in-flight request becomes stale
    ///
    /// Yields [`Transition::Started`] with the id to pass to [`Self::complete`].
    pub fn begin(&self, query: CityQuery) -> Transition {
        self.session
            .lock()
            .apply(SearchEvent::SearchRequested(query))
    }

    /// Deliver the outcome of a fetch
    pub fn complete(
        &self,
        request: RequestId,
        result: Result<ForecastPayload, ApplicationError>,
    ) -> Transition {
        self.session
            .lock()
            .apply(SearchEvent::ResponseReceived { request, result })
    }

    /// Fetch the payload for an already issued request
    pub async fn fetch(&self, query: &CityQuery) -> Result<ForecastPayload, ApplicationError> {
        self.forecast_source.fetch_forecast(query).await
    }

    /// Begin, fetch and complete one search
    #[instrument(skip(self), fields(city = %query))]
    pub async fn search(&self, query: CityQuery) -> Transition {
        let request = match self.begin(query.clone()) {
            Transition::Started(request) => request,
            other => return other,
        };
        let result = self.fetch(&query).await;
        let transition = self.complete(request, result);

        if let Transition::Applied(state) = &transition {
            info!(
                %request,
                days = state.forecast().len(),
                loaded = matches!(state, SearchState::Loaded { .. }),
                "Search finished"
            );
        }
        transition
    }
}
