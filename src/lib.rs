pub mod contestant;
pub mod criteria;
pub mod error;
pub mod export;
pub mod registry;
pub mod scoring;
pub mod store;
