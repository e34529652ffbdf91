//! Error types for the Fresco storyboard generation library.
//!
//! This crate provides the foundation error types used throughout the Fresco
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Unit-level generation failures (a single character portrait, a single
//! scene image) are not errors at all; they travel as values in
//! `fresco_core::GenerationResult`. The types in this crate are reserved for
//! pipeline-fatal conditions.
//!
//! # Examples
//!
//! ```
//! use fresco_error::{FrescoResult, HttpError};
//!
//! fn fetch_data() -> FrescoResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod config;
mod error;
mod http;
mod image;
mod pipeline;
mod rai;
mod storage;
mod text;
mod video;

pub use audio::{AudioGenError, AudioGenErrorKind};
pub use config::ConfigError;
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use http::HttpError;
pub use image::{ImageGenError, ImageGenErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use rai::rai_user_message;
pub use storage::{StorageError, StorageErrorKind};
pub use text::{TextGenError, TextGenErrorKind};
pub use video::{VideoGenError, VideoGenErrorKind};
