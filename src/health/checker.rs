// src/health/checker.rs
use super::marker::InvocationMarker;
use super::reporter::{CheckReporter, CompletionGuard, TracingReporter};
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

pub const USER_AGENT: &str = "AWS Lambda";

/// The only way a check fails. Non-200 statuses and transport errors are
/// reported identically; the message keeps the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Check failed: {0}")]
    CheckFailed(String),
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        CheckError::CheckFailed(err.to_string())
    }
}

impl From<StatusCode> for CheckError {
    fn from(status: StatusCode) -> Self {
        CheckError::CheckFailed(format!("HTTP {}", status))
    }
}

pub struct SiteChecker<R = TracingReporter> {
    target: Url,
    client: Client,
    reporter: R,
}

impl SiteChecker {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_reporter(config, TracingReporter)
    }
}

impl<R: CheckReporter> SiteChecker<R> {
    pub fn with_reporter(config: &Config, reporter: R) -> Result<Self> {
        // No timeout: the hosting runtime's limit applies.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            target: config.site.clone(),
            client,
            reporter,
        })
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Run one liveness check and echo `marker` back if the site answered 200.
    pub async fn check(&self, marker: InvocationMarker) -> Result<InvocationMarker, CheckError> {
        self.reporter.started(&self.target, &marker);
        let _complete = CompletionGuard::new(&self.reporter);

        match self.probe().await {
            Ok(()) => {
                self.reporter.passed();
                Ok(marker)
            }
            Err(e) => {
                self.reporter.failed(&e);
                Err(e)
            }
        }
    }

    async fn probe(&self) -> Result<(), CheckError> {
        let response = self.client.get(self.target.as_str()).send().await?;
        let status = response.status();
        debug!(%status, "Received response from {}", self.target);

        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(status.into())
        }
    }
}
