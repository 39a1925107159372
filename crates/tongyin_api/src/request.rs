//! Types for requests from the frontend to the backend.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Convert<'a> {
    pub text: Cow<'a, str>,
}
