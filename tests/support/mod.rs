//! Shared helpers for integration tests.
//!
//! `FakeUpstream` serves canned chart and currency responses on an ephemeral
//! local port, so clients and the proxy can be exercised without network.

#![allow(dead_code)]

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Chart body for a quote in the given currency.
pub fn chart_body(symbol: &str, price: f64, currency: &str) -> Value {
    json!({
        "chart": {
            "result": [{
                "meta": {
                    "currency": currency,
                    "symbol": symbol,
                    "regularMarketPrice": price,
                }
            }],
            "error": null
        }
    })
}

#[derive(Default)]
struct Hits {
    chart: AtomicUsize,
    currency: AtomicUsize,
}

/// Canned upstream APIs.
///
/// Chart, under `/chart/{symbol}`:
/// - `AAPL`, `MSFT`: USD quotes at 187.25 and 400
/// - `SAP.DE`: EUR quote
/// - `WEIRD`: 200 with an unexpected shape
/// - `TEXT`: 200 with a non-JSON body
/// - anything else: 404
///
/// Currency, under `/usd/{code}.json`:
/// - `eur`: 0.875, `gbp`: 0.75
/// - `bad`: 200 without the rate key
/// - anything else: 404
pub struct FakeUpstream {
    pub addr: SocketAddr,
    hits: Arc<Hits>,
}

impl FakeUpstream {
    pub async fn start() -> Self {
        let hits = Arc::new(Hits::default());
        let app = Router::new()
            .route("/chart/{symbol}", get(chart))
            .route("/usd/{file}", get(currency))
            .with_state(hits.clone());
        let addr = serve(app).await;
        Self { addr, hits }
    }

    pub fn chart_url(&self) -> String {
        format!("http://{}/chart", self.addr)
    }

    pub fn currency_url(&self) -> String {
        format!("http://{}/usd", self.addr)
    }

    pub fn chart_hits(&self) -> usize {
        self.hits.chart.load(Ordering::SeqCst)
    }

    pub fn currency_hits(&self) -> usize {
        self.hits.currency.load(Ordering::SeqCst)
    }
}

async fn chart(State(hits): State<Arc<Hits>>, Path(symbol): Path<String>) -> Response {
    hits.chart.fetch_add(1, Ordering::SeqCst);
    match symbol.as_str() {
        "AAPL" => Json(chart_body("AAPL", 187.25, "USD")).into_response(),
        "MSFT" => Json(chart_body("MSFT", 400.0, "USD")).into_response(),
        "SAP.DE" => Json(chart_body("SAP.DE", 120.5, "EUR")).into_response(),
        "WEIRD" => Json(json!({"chart": {"result": []}})).into_response(),
        "TEXT" => (StatusCode::OK, "definitely not json").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"chart": {"result": null, "error": {"code": "Not Found"}}})),
        )
            .into_response(),
    }
}

async fn currency(State(hits): State<Arc<Hits>>, Path(file): Path<String>) -> Response {
    hits.currency.fetch_add(1, Ordering::SeqCst);
    match file.as_str() {
        "eur.json" => Json(json!({"date": "2024-05-01", "eur": 0.875})).into_response(),
        "gbp.json" => Json(json!({"date": "2024-05-01", "gbp": 0.75})).into_response(),
        "bad.json" => Json(json!({"date": "2024-05-01"})).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serve `app` on an ephemeral local port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    listener.local_addr().expect("local addr")
}

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Write `contents` to a unique temporary config file.
pub fn write_temp_config(contents: &str) -> PathBuf {
    let dir = std::env::temp_dir();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = dir.join(format!(
        "vestcalc-test-{}-{suffix}.toml",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write temp config");
    path
}

/// Config pointing both APIs at a fake upstream.
pub fn upstream_config(upstream: &FakeUpstream) -> String {
    format!(
        "[quote]\napi_url = \"{}\"\nupstream_url = \"{}\"\n\n[currency]\napi_url = \"{}\"\n",
        upstream.chart_url(),
        upstream.chart_url(),
        upstream.currency_url()
    )
}
