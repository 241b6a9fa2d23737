pub mod notifier;
pub mod review_api;
pub mod verdict;
pub mod watcher;
