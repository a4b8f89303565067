// src/health/mod.rs
mod checker;
mod marker;
mod reporter;

pub use checker::{CheckError, SiteChecker, USER_AGENT};
pub use marker::InvocationMarker;
pub use reporter::{CheckReporter, TracingReporter};
