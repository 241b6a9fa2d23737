pub mod environment;

pub use environment::Config;
