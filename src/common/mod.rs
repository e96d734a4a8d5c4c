//! Common types and utilities shared across pagesim.
//!
//! - Configuration constants and [`SimulatorConfig`](config::SimulatorConfig)
//! - Error types
//! - Identifiers (PageId, FrameNumber)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use error::{Error, Result};
pub use frame_id::FrameNumber;
pub use page_id::PageId;
