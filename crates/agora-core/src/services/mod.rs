//! Application services built on the domain and ports.

mod posts;

pub use posts::PostService;
