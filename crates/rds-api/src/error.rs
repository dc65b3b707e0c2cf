//! Error taxonomy for the relational database management API
//!
//! The model types in this crate never fail; these errors are raised by
//! transport implementations of [`RelationalDatabaseService`] when the
//! remote service rejects an operation. Classification helpers let callers
//! branch on error families without matching every variant.
//!
//! [`RelationalDatabaseService`]: crate::service::RelationalDatabaseService

use thiserror::Error;

/// Error type for service operations
#[derive(Error, Debug)]
pub enum RdsError {
    /// The requested DB cluster does not exist
    #[error("DB cluster not found: {message}")]
    ClusterNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The requested DB instance does not exist
    #[error("DB instance not found: {message}")]
    InstanceNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The requested DB snapshot does not exist
    #[error("DB snapshot not found: {message}")]
    SnapshotNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The requested DB cluster snapshot does not exist
    #[error("DB cluster snapshot not found: {message}")]
    ClusterSnapshotNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The named DB subnet group does not exist
    #[error("DB subnet group not found: {message}")]
    SubnetGroupNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The named DB parameter group does not exist
    #[error("DB parameter group not found: {message}")]
    ParameterGroupNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The named option group does not exist
    #[error("option group not found: {message}")]
    OptionGroupNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The named Active Directory domain does not exist
    #[error("domain not found: {message}")]
    DomainNotFound {
        /// Detail message from the service
        message: String,
    },

    /// The named global cluster does not exist
    #[error("global cluster not found: {message}")]
    GlobalClusterNotFound {
        /// Detail message from the service
        message: String,
    },

    /// A DB cluster with the given identifier already exists
    #[error("DB cluster already exists: {message}")]
    ClusterAlreadyExists {
        /// Detail message from the service
        message: String,
    },

    /// A DB instance with the given identifier already exists
    #[error("DB instance already exists: {message}")]
    InstanceAlreadyExists {
        /// Detail message from the service
        message: String,
    },

    /// A DB snapshot with the given identifier already exists
    #[error("DB snapshot already exists: {message}")]
    SnapshotAlreadyExists {
        /// Detail message from the service
        message: String,
    },

    /// A DB cluster snapshot with the given identifier already exists
    #[error("DB cluster snapshot already exists: {message}")]
    ClusterSnapshotAlreadyExists {
        /// Detail message from the service
        message: String,
    },

    /// The DB cluster is not in a valid state for the operation
    #[error("invalid DB cluster state: {message}")]
    InvalidClusterState {
        /// Detail message from the service
        message: String,
    },

    /// The DB instance is not in a valid state for the operation
    #[error("invalid DB instance state: {message}")]
    InvalidInstanceState {
        /// Detail message from the service
        message: String,
    },

    /// The DB snapshot is not in a valid state for the operation
    #[error("invalid DB snapshot state: {message}")]
    InvalidSnapshotState {
        /// Detail message from the service
        message: String,
    },

    /// The DB cluster snapshot is not in a valid state for the operation
    #[error("invalid DB cluster snapshot state: {message}")]
    InvalidClusterSnapshotState {
        /// Detail message from the service
        message: String,
    },

    /// The source cannot be restored from (e.g. engine mismatch)
    #[error("invalid restore: {message}")]
    InvalidRestore {
        /// Detail message from the service
        message: String,
    },

    /// The VPC network state does not allow the operation
    #[error("invalid VPC network state: {message}")]
    InvalidVpcNetworkState {
        /// Detail message from the service
        message: String,
    },

    /// The requested subnet is invalid, or multiple subnets share an
    /// availability zone
    #[error("invalid subnet: {message}")]
    InvalidSubnet {
        /// Detail message from the service
        message: String,
    },

    /// The request would exceed the allowed amount of storage
    #[error("storage quota exceeded: {message}")]
    StorageQuotaExceeded {
        /// Detail message from the service
        message: String,
    },

    /// The request would exceed the allowed number of snapshots
    #[error("snapshot quota exceeded: {message}")]
    SnapshotQuotaExceeded {
        /// Detail message from the service
        message: String,
    },

    /// The request would exceed the allowed number of DB instances
    #[error("instance quota exceeded: {message}")]
    InstanceQuotaExceeded {
        /// Detail message from the service
        message: String,
    },

    /// The request would exceed the allowed number of DB clusters
    #[error("cluster quota exceeded: {message}")]
    ClusterQuotaExceeded {
        /// Detail message from the service
        message: String,
    },

    /// The requested instance class is not available in the target zone
    #[error("insufficient DB instance capacity: {message}")]
    InsufficientInstanceCapacity {
        /// Detail message from the service
        message: String,
    },

    /// Not enough storage is available for the cluster
    #[error("insufficient storage cluster capacity: {message}")]
    InsufficientStorageClusterCapacity {
        /// Detail message from the service
        message: String,
    },

    /// The KMS key is not accessible for encryption operations
    #[error("KMS key not accessible: {message}")]
    KmsKeyNotAccessible {
        /// Detail message from the service
        message: String,
    },

    /// The security group authorization does not exist
    #[error("authorization not found: {message}")]
    AuthorizationNotFound {
        /// Detail message from the service
        message: String,
    },

    /// Any other fault reported by the remote service
    #[error("service error: {message}")]
    Service {
        /// Detail message from the service
        message: String,
    },

    /// A client-side fault raised before the request reached the service
    #[error("client error: {message}")]
    Client {
        /// Detail message from the transport layer
        message: String,
    },
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, RdsError>;

impl RdsError {
    /// Returns true if the referenced resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RdsError::ClusterNotFound { .. }
                | RdsError::InstanceNotFound { .. }
                | RdsError::SnapshotNotFound { .. }
                | RdsError::ClusterSnapshotNotFound { .. }
                | RdsError::SubnetGroupNotFound { .. }
                | RdsError::ParameterGroupNotFound { .. }
                | RdsError::OptionGroupNotFound { .. }
                | RdsError::DomainNotFound { .. }
                | RdsError::GlobalClusterNotFound { .. }
                | RdsError::AuthorizationNotFound { .. }
        )
    }

    /// Returns true if the target identifier is already taken
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RdsError::ClusterAlreadyExists { .. }
                | RdsError::InstanceAlreadyExists { .. }
                | RdsError::SnapshotAlreadyExists { .. }
                | RdsError::ClusterSnapshotAlreadyExists { .. }
        )
    }

    /// Returns true if a resource is in a state that rejects the operation
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            RdsError::InvalidClusterState { .. }
                | RdsError::InvalidInstanceState { .. }
                | RdsError::InvalidSnapshotState { .. }
                | RdsError::InvalidClusterSnapshotState { .. }
                | RdsError::InvalidVpcNetworkState { .. }
                | RdsError::InvalidSubnet { .. }
        )
    }

    /// Returns true if an account quota would be exceeded
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(
            self,
            RdsError::StorageQuotaExceeded { .. }
                | RdsError::SnapshotQuotaExceeded { .. }
                | RdsError::InstanceQuotaExceeded { .. }
                | RdsError::ClusterQuotaExceeded { .. }
        )
    }

    /// Returns true if this error is potentially retryable
    ///
    /// Invalid-state errors clear once the resource finishes its current
    /// transition; capacity and generic service faults may clear on their
    /// own. Not-found, conflict, and quota errors will not.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.is_invalid_state()
            || matches!(
                self,
                RdsError::InsufficientInstanceCapacity { .. }
                    | RdsError::InsufficientStorageClusterCapacity { .. }
                    | RdsError::Service { .. }
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = RdsError::ClusterNotFound {
            message: "cluster demo-1 not found".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_conflict_classification() {
        let err = RdsError::SnapshotAlreadyExists {
            message: "snapshot nightly already exists".to_string(),
        };
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_invalid_state_is_retryable() {
        let err = RdsError::InvalidInstanceState {
            message: "instance is rebooting".to_string(),
        };
        assert!(err.is_invalid_state());
        assert!(err.is_retryable());
        assert!(!err.is_quota_exceeded());
    }

    #[test]
    fn test_quota_classification() {
        let err = RdsError::StorageQuotaExceeded {
            message: "requested 100TiB".to_string(),
        };
        assert!(err.is_quota_exceeded());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_capacity_and_service_faults_retryable() {
        let capacity = RdsError::InsufficientInstanceCapacity {
            message: "no db.r5.24xlarge in zone".to_string(),
        };
        assert!(capacity.is_retryable());

        let service = RdsError::Service {
            message: "internal failure".to_string(),
        };
        assert!(service.is_retryable());

        let client = RdsError::Client {
            message: "connection refused".to_string(),
        };
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_display_includes_message() {
        let err = RdsError::KmsKeyNotAccessible {
            message: "key disabled".to_string(),
        };
        assert!(err.to_string().contains("KMS key"));
        assert!(err.to_string().contains("key disabled"));
    }
}
