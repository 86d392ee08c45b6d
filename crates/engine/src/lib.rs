//! PaleoCam Engine library.
//!
//! This crate contains the generation core: the credential gate, the
//! one-job-at-a-time generation orchestrator, the in-memory result gallery,
//! and the adapters for the remote video-generation service and local media
//! storage.
//!
//! ## Structure
//!
//! - `application/` - Services implementing the use cases
//! - `infrastructure/` - Port traits and external dependency implementations
//! - `app` - Application composition

pub mod app;
pub mod application;
pub mod infrastructure;

pub use app::App;
