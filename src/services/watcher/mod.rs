pub mod engine;

pub use engine::{CycleState, WatchEngine};
