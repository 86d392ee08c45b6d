//! Application services - use case implementations.
//!
//! Each service accepts its port dependencies by `Arc` and owns one concern:
//! the credential gate, the generation cycle, and the result gallery.

pub mod credential_service;
pub mod gallery_service;
pub mod generation_service;

pub use credential_service::CredentialService;
pub use gallery_service::GalleryService;
pub use generation_service::{
    GenerationConfig, GenerationError, GenerationPhase, GenerationService, StatusProjection,
};
