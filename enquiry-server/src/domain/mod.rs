//! Domain types for the travel enquiry router.
//!
//! Route records are validated when they are built, so the matcher and the
//! formatters can trust every `Route` they receive.

pub(crate) mod lenient;
mod normalize;
mod outcome;
mod route;

pub use normalize::normalize;
pub use outcome::{AnswerKind, ResultStatus};
pub use route::{
    InvalidRoute, NOT_AVAILABLE, ROUTE_SEPARATOR, Route, RouteDetail, RouteRecord, TransportMode,
};
