// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Fleet Client
//!
//! Async client for the list operations of a container-orchestration
//! control plane, built around one generic cursor paginator.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Visit pages in order, stop early, cap page counts
//! - **Typed Requests**: Clusters, services, tasks, container instances, task definitions
//! - **Resilient Transport**: Retry with backoff, rate limiting, service error decoding
//! - **YAML Configuration**: With environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleet_client::api::{ControlPlaneClient, ListTasks};
//! use fleet_client::config::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> fleet_client::Result<()> {
//!     let config = ClientConfig::new("https://control-plane.example.com");
//!     let client = ControlPlaneClient::from_config(&config)?;
//!
//!     let summary = client
//!         .paginate(ListTasks::new().cluster("prod"), |page, is_last| {
//!             println!("{} tasks (last: {is_last})", page.len());
//!             true
//!         })
//!         .await?;
//!
//!     println!("{} pages", summary.pages);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   ControlPlaneClient                     │
//! │   list_page()    paginate()    pages()    list_all()     │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴───────────┬──────────────────┐
//! │     Auth     │          HTTP          │    Pagination    │
//! ├──────────────┼────────────────────────┼──────────────────┤
//! │ API Key      │ JSON-RPC POST          │ Paginator        │
//! │ Bearer       │ Retry + Backoff        │ Page stream      │
//! │ Basic        │ Rate Limit             │ Cursor guard     │
//! └──────────────┴────────────────────────┴──────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document error and wire enum variants, then drop this allow

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Control-plane list operations
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use api::ControlPlaneClient;
pub use config::ClientConfig;
pub use pagination::{Cursor, Page, PageFetcher, PaginationSummary, Paginator, PaginatorConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
