//! Custom extractors for Axum handlers.
//!
//! This module provides reusable extractors that reduce boilerplate
//! and standardize error handling across the application.

pub mod validated_query;

pub use validated_query::ValidatedQuery;
