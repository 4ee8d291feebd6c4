//! HTTP middleware

mod logging;
mod panic;

pub use logging::logging_middleware;
pub use panic::PanicHandler;
