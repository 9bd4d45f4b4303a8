//! Domain entities - the core business objects.

mod policy;
mod post;
mod principal;
mod profile;

pub use policy::{Capability, PostPolicy};
pub use post::{Comment, Like, Post, PostInput};
pub use principal::Principal;
pub use profile::Profile;
