pub mod record_repository;
pub mod service;
pub mod summary_repository;
