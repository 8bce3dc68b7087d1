//! Common types and traits for all UseCases

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
