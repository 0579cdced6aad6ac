use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use greensense_server::{build_router, AppState, FixedSource, RandomSource, SnapshotSource};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_server(source: Arc<dyn SnapshotSource>) -> std::net::SocketAddr {
    let router = build_router(AppState::new(source));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

async fn send_raw(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

fn body_json(body: &str) -> Value {
    // Connection: close responses may still arrive chunked.
    let raw = if body.contains("\r\n") {
        body.lines()
            .filter(|l| l.starts_with('{') || l.starts_with('['))
            .collect::<String>()
    } else {
        body.to_string()
    };
    serde_json::from_str(&raw).expect("json body")
}

#[tokio::test]
async fn status_endpoint_reports_operational() {
    let addr = spawn_server(Arc::new(FixedSource::default())).await;
    let (status, _, body) = send_raw(addr, "GET", "/api/status").await;
    assert_eq!(status, 200);

    let payload = body_json(&body);
    assert_eq!(payload["backendStatus"], "ok");
    assert!(payload["message"]
        .as_str()
        .expect("message")
        .contains("operational"));
    let server_time = payload["serverTime"].as_str().expect("serverTime");
    assert!(DateTime::parse_from_rfc3339(server_time).is_ok());
}

#[tokio::test]
async fn aqi_endpoint_carries_every_field_and_pinned_city_rule() {
    let addr = spawn_server(Arc::new(FixedSource::default())).await;

    let (status, _, body) = send_raw(addr, "GET", "/api/aqi/Mumbai").await;
    assert_eq!(status, 200);
    let payload = body_json(&body);
    assert_eq!(payload["city"], "Mumbai");
    assert_eq!(payload["aqi"], 95);
    assert_eq!(payload["mainPollutant"], "PM2.5");
    assert_eq!(payload["level"], "Unhealthy");
    assert!(payload["date"].as_str().is_some());

    let (_, _, body) = send_raw(addr, "GET", "/api/aqi/Paris").await;
    assert_eq!(body_json(&body)["level"], "Moderate");
}

#[tokio::test]
async fn missing_path_segments_substitute_documented_defaults() {
    let addr = spawn_server(Arc::new(FixedSource::default())).await;

    let (status, _, body) = send_raw(addr, "GET", "/api/aqi").await;
    assert_eq!(status, 200);
    assert_eq!(body_json(&body)["city"], "Default Location");

    let (_, _, body) = send_raw(addr, "GET", "/api/carbon").await;
    assert_eq!(body_json(&body)["city"], "Global Average");

    let (_, _, body) = send_raw(addr, "GET", "/api/water").await;
    assert_eq!(body_json(&body)["city"], "Region X");

    let (_, _, body) = send_raw(addr, "GET", "/api/ndvi").await;
    assert_eq!(body_json(&body)["areaId"], "Forest-1A");

    let (_, _, body) = send_raw(addr, "GET", "/api/forecast/pollution").await;
    assert_eq!(body_json(&body)["city"], "Mumbai");
}

#[tokio::test]
async fn recommendations_threshold_and_silent_default() {
    let addr = spawn_server(Arc::new(FixedSource::default())).await;

    let (_, _, body) = send_raw(addr, "GET", "/api/recommendations?risk=0.7").await;
    let items = body_json(&body)["recommendations"]
        .as_array()
        .expect("items")
        .clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 4);
    assert_eq!(items[0]["impact"], "Low");

    let (_, _, body) = send_raw(addr, "GET", "/api/recommendations?risk=0.71").await;
    assert_eq!(
        body_json(&body)["recommendations"]
            .as_array()
            .expect("items")
            .len(),
        3
    );

    // Unparseable and missing values fall back to the default 0.8, which is
    // above the threshold.
    for path in ["/api/recommendations?risk=abc", "/api/recommendations"] {
        let (status, _, body) = send_raw(addr, "GET", path).await;
        assert_eq!(status, 200);
        assert_eq!(
            body_json(&body)["recommendations"]
                .as_array()
                .expect("items")
                .len(),
            3
        );
    }
}

#[tokio::test]
async fn unknown_route_yields_uniform_not_found_shape() {
    let addr = spawn_server(Arc::new(FixedSource::default())).await;
    let (status, _, body) = send_raw(addr, "GET", "/api/does-not-exist").await;
    assert_eq!(status, 404);
    let payload = body_json(&body);
    assert_eq!(payload["error"], "Not Found");
    assert!(payload["message"].as_str().is_some());
}

#[tokio::test]
async fn cors_is_unconditional_on_every_response() {
    let addr = spawn_server(Arc::new(FixedSource::default())).await;

    let (_, head, _) = send_raw(addr, "GET", "/api/status").await;
    assert!(head
        .to_ascii_lowercase()
        .contains("access-control-allow-origin: *"));

    // Even the 404 fallback must stay reachable cross-origin.
    let (_, head, _) = send_raw(addr, "GET", "/nope").await;
    assert!(head
        .to_ascii_lowercase()
        .contains("access-control-allow-origin: *"));

    let (status, head, _) = send_raw(addr, "OPTIONS", "/api/aqi/Paris").await;
    assert_eq!(status, 204);
    let head = head.to_ascii_lowercase();
    assert!(head.contains("access-control-allow-origin: *"));
    assert!(head.contains("access-control-allow-methods: get,options"));
}

#[tokio::test]
async fn carbon_breakdown_has_fixed_sectors_summing_near_hundred() {
    let addr = spawn_server(Arc::new(RandomSource)).await;
    let (_, _, body) = send_raw(addr, "GET", "/api/carbon/Berlin").await;
    let payload = body_json(&body);
    let breakdown = payload["industryBreakdown"].as_array().expect("breakdown");
    let sectors: Vec<&str> = breakdown
        .iter()
        .map(|s| s["sector"].as_str().expect("sector"))
        .collect();
    assert_eq!(
        sectors,
        vec!["Energy", "Transportation", "Industry", "Residential/Commercial"]
    );
    let total: u64 = breakdown
        .iter()
        .map(|s| s["percentage"].as_u64().expect("percentage"))
        .sum();
    assert!((96..=117).contains(&total), "sum out of band: {total}");
    assert!(payload["totalAnnualEmissions"].as_f64().expect("total") <= 50_000_000.0);
}

#[tokio::test]
async fn ndvi_and_forecast_fields_hold_their_contracts() {
    let addr = spawn_server(Arc::new(RandomSource)).await;

    let (_, _, body) = send_raw(addr, "GET", "/api/ndvi/Amazon-Basin-01").await;
    let payload = body_json(&body);
    let ndvi = payload["ndvi"].as_f64().expect("ndvi");
    assert!((0.3..=0.8).contains(&ndvi));
    let status_label = payload["status"].as_str().expect("status");
    if ndvi < 0.4 {
        assert_eq!(status_label, "Sparse/Stressed Vegetation");
    } else {
        assert_eq!(status_label, "Healthy Vegetation");
    }
    assert!(payload["imageUrl"]
        .as_str()
        .expect("imageUrl")
        .contains("Amazon-Basin-01"));
    assert!(payload["vegetationChange"]
        .as_str()
        .expect("vegetationChange")
        .ends_with('%'));

    let (_, _, body) = send_raw(addr, "GET", "/api/forecast/pollution/Delhi").await;
    let payload = body_json(&body);
    let date = NaiveDate::parse_from_str(
        payload["forecastDate"].as_str().expect("forecastDate"),
        "%Y-%m-%d",
    )
    .expect("parse date");
    assert_eq!(date, (Utc::now() + Duration::days(7)).date_naive());
    let prediction = payload["aqiPrediction"].as_u64().expect("prediction");
    assert!((50..=199).contains(&prediction));
    assert_eq!(payload["risk"], "Medium");
    assert_eq!(payload["model"], "ARIMA/LSTM (Mock)");
}

#[tokio::test]
async fn water_endpoint_stress_index_stays_in_band() {
    let addr = spawn_server(Arc::new(RandomSource)).await;
    let (_, _, body) = send_raw(addr, "GET", "/api/water/Cairo").await;
    let payload = body_json(&body);
    let stress = payload["stressIndex"].as_f64().expect("stressIndex");
    assert!((1.0..=5.0).contains(&stress));
    assert!(payload["totalConsumptionLiters"].as_f64().is_some());
    assert!(payload["forecast"].as_str().expect("forecast").contains("Drought"));
}
