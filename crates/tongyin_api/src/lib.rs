//! Types for communication between the backend and frontend.

pub mod request;
pub mod response;

/// The path the dictionary resource is served at.
pub const DICTIONARY_ASSET_PATH: &str = "/assets/chinese_homophone_char.txt";
