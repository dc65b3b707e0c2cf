//! Request and response models
//!
//! One struct per operation input/output shape, grouped by resource. All
//! fields are optional; an unset field means "leave this attribute alone"
//! in requests and "not returned" in responses. Nothing here validates or
//! fails; the remote service is the source of truth for every constraint.

pub mod cluster;
pub mod cluster_restore;
pub mod common;
pub mod instance;
pub mod instance_restore;
pub mod orderable;
pub mod snapshot;

pub use cluster::*;
pub use cluster_restore::*;
pub use common::*;
pub use instance::*;
pub use instance_restore::*;
pub use orderable::*;
pub use snapshot::*;
