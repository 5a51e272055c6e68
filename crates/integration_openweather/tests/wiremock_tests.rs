//! Integration tests for the forecast client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

use integration_openweather::{
    ForecastClient, ForecastError, OpenWeatherConfig, OpenWeatherMapClient,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample `/forecast` response spanning two days
fn sample_forecast_response() -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": 3,
        "list": [
            {
                "dt": 1_705_341_600,
                "main": {
                    "temp": 4.2, "feels_like": 1.9, "temp_min": 2.5, "temp_max": 4.2,
                    "pressure": 1025, "humidity": 75
                },
                "weather": [
                    { "id": 802, "main": "Clouds", "description": "ابرهای پراکنده", "icon": "03n" }
                ],
                "clouds": { "all": 40 },
                "wind": { "speed": 1.5, "deg": 200 },
                "dt_txt": "2024-01-15 18:00:00"
            },
            {
                "dt": 1_705_352_400,
                "main": {
                    "temp": 3.1, "feels_like": 1.0, "temp_min": 3.1, "temp_max": 3.1,
                    "pressure": 1025, "humidity": 80
                },
                "weather": [
                    { "id": 800, "main": "Clear", "description": "آسمان صاف", "icon": "01n" }
                ],
                "dt_txt": "2024-01-15 21:00:00"
            },
            {
                "dt": 1_705_363_200,
                "main": {
                    "temp": 2.0, "feels_like": 0.1, "temp_min": 2.0, "temp_max": 2.0,
                    "pressure": 1026, "humidity": 82
                },
                "weather": [
                    { "id": 800, "main": "Clear", "description": "آسمان صاف", "icon": "01n" }
                ],
                "dt_txt": "2024-01-16 00:00:00"
            }
        ],
        "city": {
            "id": 112_931,
            "name": "تهران",
            "coord": { "lat": 35.6944, "lon": 51.4215 },
            "country": "IR",
            "population": 7_153_309,
            "timezone": 12_600,
            "sunrise": 1_705_289_412,
            "sunset": 1_705_325_831
        }
    })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = OpenWeatherConfig {
        api_key: Some("test-key".to_string()),
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(config).expect("Failed to create client")
}

/// Setup a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_forecast_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_forecast_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("تهران").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let forecast = result.unwrap();
    assert_eq!(forecast.cnt, 3);
    assert_eq!(forecast.list.len(), 3);
    assert_eq!(forecast.city.name, "تهران");
    assert_eq!(forecast.city.population, 7_153_309);
    assert!((forecast.list[0].main.temp_min - 2.5).abs() < 0.01);
    assert_eq!(forecast.list[0].main.humidity, 75);
    assert_eq!(forecast.list[0].weather[0].icon, "03n");
    assert_eq!(
        forecast.list[2].dt_txt.as_deref(),
        Some("2024-01-16 00:00:00")
    );
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_unknown_city_returns_not_found() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Atlantis").await;

    assert!(
        matches!(result, Err(ForecastError::CityNotFound(ref c)) if c == "Atlantis"),
        "Expected CityNotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_key_returns_unauthorized() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({ "cod": 401, "message": "Invalid API key." })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Tehran").await;

    assert!(
        matches!(result, Err(ForecastError::Unauthorized)),
        "Expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(503).set_body_string("Service Unavailable"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Tehran").await;

    assert!(
        matches!(result, Err(ForecastError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(429).set_body_string("Rate limit exceeded"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Tehran").await;

    assert!(
        matches!(result, Err(ForecastError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("Tehran").await;

    assert!(
        matches!(result, Err(ForecastError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_parse_error_does_not_leak_api_key() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("{"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.get_forecast("Tehran").await.unwrap_err();
    assert!(!err.to_string().contains("test-key"));
}

// ============================================================================
// Input validation scenarios
// ============================================================================

#[tokio::test]
async fn test_empty_city_is_rejected_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast("   ").await;

    assert!(
        matches!(result, Err(ForecastError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "تهران"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "fa"))
        .and(query_param("APPID", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_forecast(" تهران ").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_custom_language_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = OpenWeatherConfig {
        api_key: Some("test-key".to_string()),
        base_url: mock_server.uri(),
        lang: "en".to_string(),
        ..Default::default()
    };
    let client = OpenWeatherMapClient::new(config).unwrap();
    let result = client.get_forecast("Tehran").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
