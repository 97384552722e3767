//! Shared test doubles for provider integration tests

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use solvegauge::StatsResult;
use solvegauge::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use solvegauge::provider::{FetchError, StatsAdapter};

/// Canned reply for a scripted route
#[derive(Clone)]
pub enum Reply {
    Status(u16, String),
    Unreachable(String),
}

/// HTTP client answering from a list of `(url prefix, reply)` routes
#[derive(Default)]
pub struct ScriptedHttpClient {
    routes: Vec<(String, Reply)>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, prefix: &str, reply: Reply) -> Self {
        self.routes.push((prefix.to_string(), reply));
        self
    }

    pub fn json(self, prefix: &str, status: u16, body: serde_json::Value) -> Self {
        self.route(prefix, Reply::Status(status, body.to_string()))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let reply = self
            .routes
            .iter()
            .find(|(prefix, _)| request.url.starts_with(prefix.as_str()))
            .map(|(_, reply)| reply.clone());

        self.requests.lock().unwrap().push(request.clone());

        match reply {
            Some(Reply::Status(status, body)) => Ok(HttpResponse { status, body }),
            Some(Reply::Unreachable(message)) => Err(HttpError(message)),
            None => Err(HttpError(format!("no route for {}", request.url))),
        }
    }
}

/// Adapter returning a fixed result and counting its calls
pub struct CountingAdapter {
    id: &'static str,
    result: Result<StatsResult, FetchError>,
    calls: AtomicUsize,
}

impl CountingAdapter {
    pub fn ok(id: &'static str, stats: StatsResult) -> Self {
        Self {
            id,
            result: Ok(stats),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(id: &'static str, error: FetchError) -> Self {
        Self {
            id,
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsAdapter for CountingAdapter {
    fn id(&self) -> &str {
        self.id
    }

    async fn fetch(&self, _identifier: &str) -> Result<StatsResult, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// A plausible non-default record
pub fn sample_stats(total_solved: u64) -> StatsResult {
    StatsResult {
        total_solved,
        easy_solved: total_solved / 2,
        medium_solved: total_solved / 3,
        hard_solved: total_solved / 6,
        easy_total: 830,
        medium_total: 1740,
        hard_total: 760,
        acceptance_rate_percent: 55.0,
        ranking: 1234,
    }
}
