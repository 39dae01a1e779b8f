#![allow(clippy::float_cmp)]
// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Ampere.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use chrono::Utc;
use serde_json::json;

use ampere_server::calculate::NO_FIT_MESSAGE;
use ampere_server::error::INVALID_INPUT_MESSAGE;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

struct TestServer {
    port: u16,
    client: reqwest::Client,
}

impl TestServer {
    async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener.local_addr().expect("No local addr").port();

        tokio::spawn(async move {
            axum::serve(listener, ampere_server::router())
                .await
                .expect("Test server error");
        });

        Self {
            port,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{path}", self.port)
    }

    async fn post_calculate(&self, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url("/calculate"))
            .form(fields)
            .send()
            .await
            .expect("Failed to send calculate request")
    }
}

async fn json_body(resp: reqwest::Response) -> serde_json::Value {
    resp.json().await.expect("Response is not JSON")
}

// ---------------------------------------------------------------------------
// Calculation — successful sizing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn calculate_typical_panel() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "50"),
            ("alarm_load", "200"),
            ("standby_period", "24"),
        ])
        .await;

    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    assert_eq!(body["standby_capacity"], 1200.0);
    assert_eq!(body["operational_capacity"], 100.0);
    assert_eq!(body["operational_duration"], 0.5);
    assert_eq!(body["minimum_required_capacity"], 1.62);
    assert_eq!(body["battery_size_required"], 2.1);
    assert!(body.get("error_message").is_none());
}

#[tokio::test]
async fn calculate_exact_size_boundary() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "100"),
            ("alarm_load", "400"),
            ("standby_period", "30"),
        ])
        .await;

    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    assert_eq!(body["minimum_required_capacity"], 4.0);
    assert_eq!(body["battery_size_required"], 4.0);
}

#[tokio::test]
async fn calculate_ignores_unknown_fields() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "10"),
            ("alarm_load", "100"),
            ("standby_period", "72"),
            ("site", "north wing"),
        ])
        .await;

    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    // (720 + 50) / 1000 * 1.25 = 0.9625
    assert_eq!(body["minimum_required_capacity"], 0.96);
    assert_eq!(body["battery_size_required"], 1.2);
}

// ---------------------------------------------------------------------------
// Calculation — no standard size fits
// ---------------------------------------------------------------------------

#[tokio::test]
async fn calculate_above_catalog_is_still_success() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "1000"),
            ("alarm_load", "1000"),
            ("standby_period", "100"),
        ])
        .await;

    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    assert_eq!(body["standby_capacity"], 100_000.0);
    assert_eq!(body["operational_capacity"], 500.0);
    assert_eq!(body["minimum_required_capacity"], 125.62);
    assert!(body["battery_size_required"].is_null());
    assert_eq!(body["error_message"], NO_FIT_MESSAGE);
}

// ---------------------------------------------------------------------------
// Calculation — invalid input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn calculate_missing_field_returns_400() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[("quiescent_load", "50"), ("standby_period", "24")])
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": INVALID_INPUT_MESSAGE })
    );
}

#[tokio::test]
async fn calculate_non_numeric_returns_400() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "50"),
            ("alarm_load", "two hundred"),
            ("standby_period", "24"),
        ])
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp).await["error"], "Invalid input values");
}

#[tokio::test]
async fn calculate_non_finite_returns_400() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "nan"),
            ("alarm_load", "200"),
            ("standby_period", "24"),
        ])
        .await;

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn calculate_overflowing_inputs_return_400() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "1e200"),
            ("alarm_load", "200"),
            ("standby_period", "1e200"),
        ])
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": INVALID_INPUT_MESSAGE })
    );
}

#[tokio::test]
async fn calculate_repeated_field_uses_first_value() {
    let server = TestServer::start().await;
    let resp = server
        .post_calculate(&[
            ("quiescent_load", "50"),
            ("alarm_load", "200"),
            ("alarm_load", "999"),
            ("standby_period", "24"),
        ])
        .await;

    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    assert_eq!(body["operational_capacity"], 100.0);
    assert_eq!(body["battery_size_required"], 2.1);
}

#[tokio::test]
async fn calculate_json_body_returns_400() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .post(server.url("/calculate"))
        .json(&json!({
            "quiescent_load": 50,
            "alarm_load": 200,
            "standby_period": 24
        }))
        .send()
        .await
        .expect("Failed to send calculate request");

    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp).await["error"], INVALID_INPUT_MESSAGE);
}

#[tokio::test]
async fn calculate_rejects_get() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .get(server.url("/calculate"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), 405);
}

// ---------------------------------------------------------------------------
// Index page and health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_serves_form() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .get(server.url("/"))
        .send()
        .await
        .expect("Failed to fetch index");

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/html"));

    let html = resp.text().await.unwrap();
    assert!(html.contains("name=\"quiescent_load\""));
    assert!(html.contains("name=\"alarm_load\""));
    assert!(html.contains("name=\"standby_period\""));
}

#[tokio::test]
async fn health_reports_ok_and_server_time() {
    let server = TestServer::start().await;
    let before = Utc::now();
    let resp = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .expect("Failed to fetch health");
    let after = Utc::now();

    assert_eq!(resp.status(), 200);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "ok");
    let server_time: chrono::DateTime<Utc> =
        serde_json::from_value(body["server_time"].clone()).unwrap();
    assert!(server_time >= before);
    assert!(server_time <= after);
}
