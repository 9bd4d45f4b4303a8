//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod clock;
mod repository;
mod validation;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use clock::{Clock, SystemClock};
pub use repository::{BaseRepository, PostMutation, PostRepository, ProfileRepository};
pub use validation::{FieldErrors, PostInputValidator, ValidationOutcome};
