pub mod client;
pub mod types;
pub mod validate;

pub use client::{PracticumClient, ReviewApi};
pub use types::{ApiError, Submission};
pub use validate::check_response;
