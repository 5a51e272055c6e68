//! Search lifecycle state machine
//!
//! A search moves `Idle -> Loading -> Loaded | Failed`. Only an explicit
//! [`SearchEvent::SearchRequested`] starts a fetch; the matching
//! [`SearchEvent::ResponseReceived`] finishes it. Every request gets a
//! monotonically increasing [`RequestId`] and responses for anything but the
//! latest request are discarded, so a slow stale response can never replace a
//! newer one.

use std::fmt;

use domain::{BucketedForecast, CityInfo, CityQuery, ForecastPayload, GroupBy, bucket_by};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApplicationError;

static EMPTY_FORECAST: BucketedForecast = BucketedForecast::empty();

/// Sequence number of a search request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the current search stands
#[derive(Debug, Clone, Default)]
pub enum SearchState {
    /// No search issued yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading { request: RequestId, query: CityQuery },
    /// The latest fetch succeeded
    Loaded {
        request: RequestId,
        query: CityQuery,
        city: CityInfo,
        forecast: BucketedForecast,
    },
    /// The latest fetch failed; the forecast is empty
    Failed {
        request: RequestId,
        query: CityQuery,
        reason: String,
    },
}

impl SearchState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// Buckets to render; empty unless the latest search succeeded
    #[must_use]
    pub fn forecast(&self) -> &BucketedForecast {
        match self {
            Self::Loaded { forecast, .. } => forecast,
            _ => &EMPTY_FORECAST,
        }
    }

    #[must_use]
    pub const fn city(&self) -> Option<&CityInfo> {
        match self {
            Self::Loaded { city, .. } => Some(city),
            _ => None,
        }
    }

    #[must_use]
    pub const fn query(&self) -> Option<&CityQuery> {
        match self {
            Self::Idle => None,
            Self::Loading { query, .. } | Self::Loaded { query, .. } | Self::Failed { query, .. } => {
                Some(query)
            },
        }
    }

    #[must_use]
    pub const fn request(&self) -> Option<RequestId> {
        match self {
            Self::Idle => None,
            Self::Loading { request, .. }
            | Self::Loaded { request, .. }
            | Self::Failed { request, .. } => Some(*request),
        }
    }
}

/// Input to the state machine
#[derive(Debug)]
pub enum SearchEvent {
    /// The user asked for a city
    SearchRequested(CityQuery),
    /// A fetch finished
    ResponseReceived {
        request: RequestId,
        result: Result<ForecastPayload, ApplicationError>,
    },
}

/// Effect of applying one event
#[derive(Debug, Clone)]
pub enum Transition {
    /// A new request was issued; the caller should fetch it
    Started(RequestId),
    /// The response was accepted; carries the resulting state
    Applied(SearchState),
    /// The response did not belong to the latest request and was dropped
    Discarded {
        request: RequestId,
        latest: Option<RequestId>,
    },
}

/// Single-search state machine with stale-response protection
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SearchState,
    issued: u64,
    group_by: GroupBy,
}

impl SearchSession {
    #[must_use]
    pub fn new(group_by: GroupBy) -> Self {
        Self {
            group_by,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[must_use]
    pub const fn group_by(&self) -> GroupBy {
        self.group_by
    }

    /// Most recently issued request, if any
    #[must_use]
    pub const fn latest_request(&self) -> Option<RequestId> {
        if self.issued == 0 {
            None
        } else {
            Some(RequestId(self.issued))
        }
    }

    fn issue(&mut self, query: CityQuery) -> RequestId {
        self.issued += 1;
        let request = RequestId(self.issued);
        debug!(%request, city = %query, "Search requested");
        self.state = SearchState::Loading { request, query };
        request
    }

    /// The single transition function
    pub fn apply(&mut self, event: SearchEvent) -> Transition {
        match event {
            SearchEvent::SearchRequested(query) => Transition::Started(self.issue(query)),
            SearchEvent::ResponseReceived { request, result } => {
                let query = match &self.state {
                    SearchState::Loading {
                        request: pending,
                        query,
                    } if *pending == request => query.clone(),
                    _ => {
                        let latest = self.latest_request();
                        debug!(%request, ?latest, "Discarding stale forecast response");
                        return Transition::Discarded { request, latest };
                    },
                };

                self.state = match result {
                    Ok(payload) => {
                        let forecast = bucket_by(payload.samples, self.group_by);
                        debug!(
                            %request,
                            days = forecast.len(),
                            samples = forecast.total_samples(),
                            "Forecast bucketed"
                        );
                        SearchState::Loaded {
                            request,
                            query,
                            city: payload.city,
                            forecast,
                        }
                    },
                    Err(e) => {
                        warn!(
                            %request,
                            city = %query,
                            error = %e,
                            retryable = e.is_retryable(),
                            "Forecast search failed"
                        );
                        SearchState::Failed {
                            request,
                            query,
                            reason: e.to_string(),
                        }
                    },
                };
                Transition::Applied(self.state.clone())
            },
        }
    }
}
