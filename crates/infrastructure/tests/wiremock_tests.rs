//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Forecast adapter against a mocked OpenWeatherMap endpoint
//! - Config-to-adapter wiring
//! - Error mapping into application errors

use std::sync::Arc;

use application::{ApplicationError, CardFormatter, ForecastPort, SearchService, SearchState};
use domain::CityQuery;
use infrastructure::{AppConfig, ForecastAdapter};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": 4,
        "list": [
            {
                "dt": 1_705_341_600,
                "dt_txt": "2024-01-15 18:00:00",
                "main": { "temp": 4.0, "temp_min": 2.5, "temp_max": 8.0, "humidity": 75 },
                "weather": [{ "id": 802, "main": "Clouds", "description": "ابرهای پراکنده", "icon": "03n" }]
            },
            {
                "dt": 1_705_363_200,
                "dt_txt": "2024-01-16 00:00:00",
                "main": { "temp": 1.0, "temp_min": 1.0, "temp_max": 1.0, "humidity": 80 },
                "weather": [{ "id": 800, "main": "Clear", "description": "آسمان صاف", "icon": "01n" }]
            },
            {
                "dt": 1_705_352_400,
                "dt_txt": "2024-01-15 21:00:00",
                "main": { "temp": 3.0, "temp_min": -1.0, "temp_max": 3.0, "humidity": 120 },
                "weather": [{ "id": 800, "main": "Clear", "description": "آسمان صاف", "icon": "01n" }]
            },
            {
                "dt": 1_705_946_400,
                "dt_txt": "2024-01-22 18:00:00",
                "main": { "temp": 5.0, "temp_min": 5.0, "temp_max": 5.0, "humidity": 60 },
                "weather": [{ "id": 500, "main": "Rain", "description": "باران سبک", "icon": "10d" }]
            }
        ],
        "city": { "id": 112_931, "name": "تهران", "country": "IR", "population": 7_153_309, "timezone": 12_600 }
    })
}

fn config_for(server: &MockServer) -> AppConfig {
    let mut config = AppConfig::default().with_api_key(Some("test-key".to_string()));
    config.openweather.base_url = server.uri();
    config.openweather.timeout_secs = 5;
    config
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Forecast Adapter Tests
// ============================================================================

mod forecast_adapter_tests {
    use super::*;

    #[tokio::test]
    async fn fetch_maps_payload_in_source_order() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body())).await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let payload = adapter
            .fetch_forecast(&CityQuery::parse("تهران").unwrap())
            .await
            .unwrap();

        assert_eq!(payload.city.name, "تهران");
        assert_eq!(payload.city.population, 7_153_309);
        assert_eq!(payload.samples.len(), 4);
        assert_eq!(payload.samples[1].weather.icon.as_str(), "01n");
        assert_eq!(payload.samples[2].humidity.value(), 100);
    }

    #[tokio::test]
    async fn fetch_sends_configured_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("q", "Shiraz"))
            .and(query_param("units", "metric"))
            .and(query_param("lang", "fa"))
            .and(query_param("APPID", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let result = adapter
            .fetch_forecast(&CityQuery::parse("  Shiraz ").unwrap())
            .await;
        assert!(result.is_ok(), "Expected success, got: {result:?}");
    }

    #[tokio::test]
    async fn unknown_city_maps_to_not_found() {
        let server = MockServer::start().await;
        mount_forecast(
            &server,
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let result = adapter
            .fetch_forecast(&CityQuery::parse("Atlantis").unwrap())
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn invalid_key_maps_to_not_authorized() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(401)).await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let result = adapter
            .fetch_forecast(&CityQuery::parse("Tehran").unwrap())
            .await;
        assert!(matches!(result, Err(ApplicationError::NotAuthorized(_))));
    }

    #[tokio::test]
    async fn server_error_maps_to_external_service() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(502)).await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let result = adapter
            .fetch_forecast(&CityQuery::parse("Tehran").unwrap())
            .await;
        let err = result.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
        assert!(err.is_retryable());
    }
}

// ============================================================================
// End-to-end Search Tests
// ============================================================================

mod search_flow_tests {
    use super::*;

    #[tokio::test]
    async fn search_buckets_by_weekday_and_builds_cards() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(200).set_body_json(forecast_body())).await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let service = SearchService::new(Arc::new(adapter));
        service.search(CityQuery::parse("تهران").unwrap()).await;

        let state = service.state();
        assert!(matches!(state, SearchState::Loaded { .. }));

        // 15th and 22nd are both Mondays and share a bucket
        let forecast = state.forecast();
        assert_eq!(forecast.len(), 2);
        assert_eq!(forecast.buckets()[0].len(), 3);
        assert_eq!(forecast.buckets()[1].len(), 1);

        let view = CardFormatter::default().view(&state);
        assert_eq!(view.city.as_ref().unwrap().population, "7,153,309");
        assert_eq!(view.cards[0].day_name, "دوشنبه");
        assert_eq!(view.cards[0].persian_date, "۱۴۰۲/۱۰/۲۵");
        assert_eq!(
            view.cards[0].icon_url,
            "https://openweathermap.org/img/wn/03d@2x.png"
        );
        assert_eq!(view.cards[1].day_name, "سه شنبه");
    }

    #[tokio::test]
    async fn search_failure_leaves_no_cards() {
        let server = MockServer::start().await;
        mount_forecast(&server, ResponseTemplate::new(404)).await;

        let adapter = ForecastAdapter::new(config_for(&server).openweather.to_client_config())
            .unwrap();
        let service = SearchService::new(Arc::new(adapter));
        service.search(CityQuery::parse("Atlantis").unwrap()).await;

        let view = CardFormatter::default().view(&service.state());
        assert!(view.cards.is_empty());
        assert!(view.empty_message().is_some());
    }
}
