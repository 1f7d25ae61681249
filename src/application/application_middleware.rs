use super::ApplicationEnv;
use crate::{dto::output, error::INTERNAL_SERVER_ERROR_DETAIL};
use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    classify::{ServerErrorsAsFailures, SharedClassifier},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response<Body>;

pub struct ApplicationMiddleware {
    pub body_limit: RequestBodyLimitLayer,
    pub catch_panic: CatchPanicLayer<PanicHandler>,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let body_limit = RequestBodyLimitLayer::new(env.max_http_content_len);
    let catch_panic = CatchPanicLayer::custom(handle_panic as PanicHandler);
    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        body_limit,
        catch_panic,
        trace,
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = message, "request handler panicked");

    let body = output::ErrorDetail {
        detail: INTERNAL_SERVER_ERROR_DETAIL,
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
