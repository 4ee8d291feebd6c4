//! Panic catch-all
//!
//! Turns a panicking handler into the standard 500 error body. The panic
//! message is only exposed outside production.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use shared::error::AppError;
use tower_http::catch_panic::ResponseForPanic;

#[derive(Debug, Clone, Copy)]
pub struct PanicHandler {
    expose_details: bool,
}

impl PanicHandler {
    pub fn new(is_production: bool) -> Self {
        Self {
            expose_details: !is_production,
        }
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

impl ResponseForPanic for PanicHandler {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let message = panic_message(err.as_ref());
        tracing::error!(panic = %message, "Handler panicked");

        let mut error = AppError::internal("Internal server error");
        if self.expose_details {
            error = error.with_detail("panic", message);
        }
        error.into_response()
    }
}
