// src/health/reporter.rs
use super::checker::CheckError;
use super::marker::InvocationMarker;
use chrono::{DateTime, Local};
use tracing::{error, info};
use url::Url;

/// Receives the three log lines of a single check.
pub trait CheckReporter: Send + Sync {
    fn started(&self, target: &Url, marker: &InvocationMarker);

    fn passed(&self);

    fn failed(&self, error: &CheckError);

    fn completed(&self, at: DateTime<Local>);
}

/// Writes check progress to the tracing subscriber (stdout on Lambda).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl CheckReporter for TracingReporter {
    fn started(&self, target: &Url, marker: &InvocationMarker) {
        info!("Checking {} at {}...", target, marker);
    }

    fn passed(&self) {
        info!("Check passed!");
    }

    fn failed(&self, error: &CheckError) {
        error!(%error, "Check failed!");
    }

    fn completed(&self, at: DateTime<Local>) {
        info!("Check complete at {}", at.format("%Y-%m-%d %H:%M:%S%.6f"));
    }
}

/// Reports completion when dropped, so every exit path of a check logs it.
pub(crate) struct CompletionGuard<'a, R: CheckReporter + ?Sized> {
    reporter: &'a R,
}

impl<'a, R: CheckReporter + ?Sized> CompletionGuard<'a, R> {
    pub(crate) fn new(reporter: &'a R) -> Self {
        Self { reporter }
    }
}

impl<R: CheckReporter + ?Sized> Drop for CompletionGuard<'_, R> {
    fn drop(&mut self) {
        self.reporter.completed(Local::now());
    }
}
