//! Application services - Use case implementations

mod card_formatter;
mod search_service;
mod search_session;

pub use card_formatter::{
    CardFormatter, CityHeader, DEFAULT_ICON_BASE_URL, DayCard, ForecastView, NO_RESULTS_MESSAGE,
    TITLE,
};
pub use search_service::SearchService;
pub use search_session::{RequestId, SearchEvent, SearchSession, SearchState, Transition};
