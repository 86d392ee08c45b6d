//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - The remote video-generation service (could swap providers)
//! - The hosting environment's credential selector
//! - Local media materialization
//! - Clock/Random (for testing)

mod error;
mod external;
mod testing;

pub use external::{
    CredentialHostPort, MediaStorePort, VideoGenPort, VideoJob, VideoJobRequest,
};

pub use testing::{ClockPort, RandomPort};

pub use error::{CredentialError, MediaStoreError, VideoGenError};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockCredentialHostPort, MockMediaStorePort, MockVideoGenPort};

#[cfg(test)]
pub use testing::MockClockPort;
