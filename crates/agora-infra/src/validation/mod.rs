//! Payload validation backed by the `validator` crate.

mod post;

pub use post::PostInputRules;
