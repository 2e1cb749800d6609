pub mod error;
pub mod fields;
pub mod patch;
pub mod repo;
pub mod service;
