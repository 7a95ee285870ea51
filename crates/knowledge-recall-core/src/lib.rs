//! # Knowledge Recall Core
//!
//! Storage-agnostic retrieval logic for Knowledge Recall: content models,
//! the query ranker, the record store abstraction, and the retrieval
//! service with its related-content extension point.
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or logging. The
//! ranker is pure; the only I/O path is the [`store::RecordStore`] trait
//! supplied by the caller.

pub mod models;
pub mod rank;
pub mod related;
pub mod retrieval;
pub mod store;
