//! Handlers for each main route.

pub mod convert;
pub mod dictionary;

mod prelude;
