//! Business services containing the token lifecycle policy.

pub mod token;

// Re-export commonly used types
pub use token::{ExpirationSweep, ExpiredToken, SweepReport, TokenPolicyConfig, TokenService};
