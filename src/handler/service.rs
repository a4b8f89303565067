// src/handler/service.rs
use super::event::CheckEvent;
use crate::health::{CheckReporter, InvocationMarker, SiteChecker, TracingReporter};
use lambda_runtime::LambdaEvent;
use std::sync::Arc;
use tower::Service;
use tracing::Instrument;

/// Adapts a [`SiteChecker`] to the Lambda runtime.
pub struct CheckHandler<R = TracingReporter> {
    checker: Arc<SiteChecker<R>>,
}

impl<R> CheckHandler<R> {
    pub fn new(checker: Arc<SiteChecker<R>>) -> Self {
        Self { checker }
    }
}

impl<R> Clone for CheckHandler<R> {
    fn clone(&self) -> Self {
        Self {
            checker: self.checker.clone(),
        }
    }
}

impl<R: CheckReporter + 'static> Service<LambdaEvent<CheckEvent>> for CheckHandler<R> {
    type Response = InvocationMarker;
    type Error = lambda_runtime::Error;
    type Future = futures::future::BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, event: LambdaEvent<CheckEvent>) -> Self::Future {
        let checker = self.checker.clone();
        let span = tracing::info_span!("check", request_id = %event.context.request_id);

        Box::pin(
            async move {
                checker
                    .check(event.payload.time)
                    .await
                    .map_err(lambda_runtime::Error::from)
            }
            .instrument(span),
        )
    }
}
