//! Test harness: a fixture Ergast API and the dashboard app on ephemeral ports.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;

use season_dashboard::{build_app, AppState, Config};

const CURRENT: &str = include_str!("../fixtures/current.json");
const LAST_RESULTS: &str = include_str!("../fixtures/last_results.json");
const DRIVER_STANDINGS: &str = include_str!("../fixtures/driver_standings.json");
const CONSTRUCTOR_STANDINGS: &str = include_str!("../fixtures/constructor_standings.json");

pub struct TestServer {
  pub addr: SocketAddr,
  _handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
  pub async fn spawn(app: Router) -> Self {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });
    Self {
      addr,
      _handle: handle,
    }
  }

  pub fn url(&self, path: &str) -> String {
    format!("http://{}{}", self.addr, path)
  }
}

fn json(body: &'static str) -> ([(header::HeaderName, &'static str); 1], &'static str) {
  ([(header::CONTENT_TYPE, "application/json")], body)
}

/// Serves every endpoint the dashboard uses.
pub fn fixture_api() -> Router {
  Router::new()
    .route("/current.json", get(|| async { json(CURRENT) }))
    .route("/current/last/results.json", get(|| async { json(LAST_RESULTS) }))
    .route("/current/driverStandings.json", get(|| async { json(DRIVER_STANDINGS) }))
    .route(
      "/current/constructorStandings.json",
      get(|| async { json(CONSTRUCTOR_STANDINGS) }),
    )
}

/// Only the standings endpoints; everything else 404s.
pub fn standings_only_api() -> Router {
  Router::new()
    .route("/current/driverStandings.json", get(|| async { json(DRIVER_STANDINGS) }))
    .route(
      "/current/constructorStandings.json",
      get(|| async { json(CONSTRUCTOR_STANDINGS) }),
    )
}

/// Every request fails upstream.
pub fn failing_api() -> Router {
  Router::new().fallback(|| async { StatusCode::SERVICE_UNAVAILABLE })
}

/// Start `api` and a dashboard pointed at it. Returns (dashboard, api).
pub async fn dashboard_with(api: Router) -> (TestServer, TestServer) {
  let api = TestServer::spawn(api).await;
  let config = Config {
    api_base_url: api.url("/"),
    request_timeout_secs: 5,
    ..Config::default()
  };
  let state = Arc::new(AppState::new(config).unwrap());
  let dashboard = TestServer::spawn(build_app(state)).await;
  (dashboard, api)
}
