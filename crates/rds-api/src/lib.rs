//! # rds-api
//!
//! Typed request and response models for a cloud relational database
//! management API, plus the [`RelationalDatabaseService`] trait that
//! transport crates implement.
//!
//! This crate is the data layer only. Requests are plain structs of
//! optional fields, built up with chained `with_*` setters and handed to a
//! transport implementation as-is; responses come back fully populated
//! through serde. There is no HTTP client, signing, retry, or pagination
//! logic here, and none of the model operations can fail; the remote
//! service validates everything.
//!
//! ## Example
//!
//! ```rust
//! use rds_api::model::DescribeDbSnapshotsRequest;
//!
//! let request = DescribeDbSnapshotsRequest::new()
//!     .with_db_instance_identifier("db1")
//!     .with_max_records(50);
//!
//! assert_eq!(request.db_instance_identifier.as_deref(), Some("db1"));
//! // filters were never set, so no filter constraint is sent
//! assert!(request.filters.is_none());
//! ```

pub mod error;
pub mod model;
pub mod service;

pub use error::{RdsError, Result};
pub use service::RelationalDatabaseService;
