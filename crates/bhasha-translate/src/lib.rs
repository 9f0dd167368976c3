pub mod client;
pub mod decode;
pub mod engine;

pub use client::{GtxClient, TranslateTransport};
pub use engine::TranslationEngine;
