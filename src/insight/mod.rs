//! Budgeting-tips integration with the hosted insight service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::core::services::{BookTotals, SummaryService};
use crate::domain::book::Book;
use crate::domain::profile::UserProfile;
use crate::domain::transaction::Transaction;

/// Transactions included with each advice request.
pub const RECENT_WINDOW: usize = 10;

const USER_AGENT: &str = concat!("hisebi_core/", env!("CARGO_PKG_VERSION"));

/// Payload posted to the insight service.
#[derive(Debug, Clone, Serialize)]
pub struct InsightRequest {
    pub totals: BookTotals,
    pub profile: UserProfile,
    pub recent: Vec<Transaction>,
}

/// Advice returned by the service: three short tips in the happy path (not
/// enforced) and an optional warning line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightReport {
    pub tips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum InsightError {
    #[error("no insight endpoint configured")]
    NotConfigured,
    #[error("another advice request is already in flight")]
    Busy,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("service returned no tips")]
    EmptyTips,
}

/// Client for the remote tip generator. One instance per shell; duplicate
/// calls while a request is in flight are rejected rather than raced.
pub struct InsightClient {
    endpoint: Option<String>,
    timeout: Duration,
    in_flight: AtomicBool,
}

impl InsightClient {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint,
            timeout,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.insight_endpoint.clone(),
            Duration::from_secs(config.insight_timeout_secs),
        )
    }

    /// Builds the request payload from the current snapshot: headline
    /// totals, the profile, and the ten most recent transactions.
    pub fn request_for(book: &Book) -> InsightRequest {
        InsightRequest {
            totals: SummaryService::totals(book),
            profile: book.profile.clone(),
            recent: book
                .transactions
                .iter()
                .take(RECENT_WINDOW)
                .cloned()
                .collect(),
        }
    }

    /// Fetches advice for the snapshot. Every failure path — endpoint not
    /// configured, request already in flight, transport error, malformed or
    /// empty body — degrades to the fixed fallback report. The caller never
    /// sees an error and never receives "no insight".
    pub fn advise(&self, book: &Book) -> InsightReport {
        match self.fetch(Self::request_for(book)) {
            Ok(report) => report,
            Err(err) => {
                warn!("insight service unavailable, serving fallback tips: {err}");
                fallback_report()
            }
        }
    }

    fn fetch(&self, request: InsightRequest) -> Result<InsightReport, InsightError> {
        let _gate = FlightGuard::acquire(&self.in_flight).ok_or(InsightError::Busy)?;
        let endpoint = self.endpoint.as_deref().ok_or(InsightError::NotConfigured)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        let report: InsightReport = client
            .post(endpoint)
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;
        if report.tips.is_empty() {
            return Err(InsightError::EmptyTips);
        }
        Ok(report)
    }
}

/// The fixed advice served whenever the remote service cannot.
pub fn fallback_report() -> InsightReport {
    InsightReport {
        tips: vec![
            "Record every expense the day it happens, even the small ones.".into(),
            "Move a fixed share of each income into savings before spending.".into(),
            "Review your category totals at the end of every week.".into(),
        ],
        alert: Some(
            "Personalised tips are unavailable right now; showing general guidance.".into(),
        ),
    }
}

struct FlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
