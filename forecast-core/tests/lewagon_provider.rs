use std::time::Duration;

use forecast_core::{ClientConfig, WeatherError, provider_from_config};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::with_base_url(server.uri())
}

#[tokio::test]
async fn geocode_sends_query_and_limit() {
    let server = MockServer::start().await;

    let body = r#"
    [
      { "name": "Paris", "country": "FR", "lat": 48.8589, "lon": 2.32, "local_names": { "en": "Paris" } },
      { "name": "Paris", "lat": 33.66, "lon": -95.55 }
    ]
    "#;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Paris"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_from_config(&config_for(&server)).expect("provider");
    let places = provider.geocode("Paris", 5).await.expect("geocode");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].name, "Paris");
    assert_eq!(places[0].country, "FR");
    assert_eq!(places[1].country, "N/A");
    assert_eq!(places[1].longitude, -95.55);
}

#[tokio::test]
async fn geocode_empty_array_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let provider = provider_from_config(&config_for(&server)).expect("provider");
    let places = provider.geocode("Nowhereville", 5).await.expect("geocode");

    assert!(places.is_empty());
}

#[tokio::test]
async fn forecast_maps_series_entries() {
    let server = MockServer::start().await;

    let body = r#"
    {
      "cod": "200",
      "list": [
        {
          "dt": 1709283600,
          "dt_txt": "2024-03-01 09:00:00",
          "main": { "temp": 7.1, "temp_max": 7.9 },
          "weather": [ { "id": 800, "main": "Clear", "description": "clear sky" } ]
        },
        {
          "dt": 1709294400,
          "dt_txt": "2024-03-01 12:00:00",
          "main": { "temp": 10.2, "temp_max": 11.5 },
          "weather": [ { "id": 500, "main": "Rain", "description": "light rain" } ]
        }
      ],
      "city": { "name": "Paris", "country": "FR" }
    }
    "#;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let provider = provider_from_config(&config_for(&server)).expect("provider");
    let entries = provider.forecast(48.85, 2.35).await.expect("forecast");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].timestamp, "2024-03-01 12:00:00");
    assert_eq!(entries[1].description, "light rain");
    assert_eq!(entries[1].max_temperature, 11.5);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let provider = provider_from_config(&config_for(&server)).expect("provider");
    let err = provider.forecast(1.0, 2.0).await.unwrap_err();

    match err {
        WeatherError::Status { endpoint, status, body } => {
            assert_eq!(endpoint, "forecast");
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"message\":\"nope\"}", "application/json"))
        .mount(&server)
        .await;

    let provider = provider_from_config(&config_for(&server)).expect("provider");
    let err = provider.geocode("Paris", 5).await.unwrap_err();

    assert!(matches!(err, WeatherError::Decode { endpoint: "geocoding", .. }));
}

#[tokio::test]
async fn slow_upstream_hits_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("[]", "application/json")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let cfg = ClientConfig { timeout: Duration::from_millis(200), ..config_for(&server) };
    let provider = provider_from_config(&cfg).expect("provider");
    let err = provider.geocode("Paris", 5).await.unwrap_err();

    assert!(err.is_transport());
}
