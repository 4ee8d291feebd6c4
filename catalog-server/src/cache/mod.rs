//! In-process query caches
//!
//! - [`TtlCell`] - single value with expiry (category list)
//! - [`QueryCache`] - keyed, LRU-bounded, with expiry (product listings)
//!
//! Both read time from an injected [`Clock`] so expiry is testable without
//! sleeping.

mod clock;
mod query_cache;
mod ttl_cell;

pub use clock::{Clock, ManualClock, SystemClock};
pub use query_cache::QueryCache;
pub use ttl_cell::TtlCell;
