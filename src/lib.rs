//! # Knowledge Recall
//!
//! **A local knowledge base that ranks captured pages against free-text queries.**
//!
//! Records (pages, and later videos) live in a local SQLite store. Queries
//! are ranked by the pure substring scorer in `knowledge-recall-core` and
//! returned as a bounded, ordered list of previews.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────────────┐   ┌─────────────┐
//! │   CLI    │──▶│ RetrievalService │──▶│ RecordStore │
//! │ (recall) │   │  rank / related  │   │   SQLite    │
//! └──────────┘   └──────────────────┘   └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! recall init                         # create database
//! recall import pages.json            # load captured records
//! recall search "neural" --explain    # ranked search over pages
//! recall related 1 --kind page        # related-content lookup
//! recall get 1                        # full stored record
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`db`] | SQLite connection pool with WAL mode |
//! | [`migrate`] | Idempotent schema creation |
//! | [`sqlite_store`] | `RecordStore` implementation over SQLite |
//! | [`import`] | Load records from a JSON file |
//! | [`search`] | Ranked search and result printing |
//! | [`related`] | Related-content lookups |
//! | [`get`] | Record retrieval by ID |

pub mod config;
pub mod db;
pub mod get;
pub mod import;
pub mod migrate;
pub mod related;
pub mod search;
pub mod sqlite_store;

pub use knowledge_recall_core::models;
pub use knowledge_recall_core::store;
