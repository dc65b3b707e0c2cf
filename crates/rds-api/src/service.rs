//! The service trait
//!
//! One async method per modeled operation. Transport crates implement
//! [`RelationalDatabaseService`] over their HTTP stack of choice; callers
//! and tests can stay generic over it. The trait itself performs no I/O.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{
    CopyDbClusterSnapshotRequest, CopyDbClusterSnapshotResult, CopyDbSnapshotRequest,
    CopyDbSnapshotResult, CreateDbClusterRequest, CreateDbClusterResult,
    CreateDbInstanceReadReplicaRequest, CreateDbInstanceReadReplicaResult,
    DescribeDbClustersRequest, DescribeDbClustersResult, DescribeDbInstancesRequest,
    DescribeDbInstancesResult, DescribeDbSnapshotsRequest, DescribeDbSnapshotsResult,
    DescribeOrderableDbInstanceOptionsRequest, DescribeOrderableDbInstanceOptionsResult,
    ModifyDbClusterRequest, ModifyDbClusterResult, RestoreDbClusterFromS3Request,
    RestoreDbClusterFromS3Result, RestoreDbClusterFromSnapshotRequest,
    RestoreDbClusterFromSnapshotResult, RestoreDbClusterToPointInTimeRequest,
    RestoreDbClusterToPointInTimeResult, RestoreDbInstanceFromDbSnapshotRequest,
    RestoreDbInstanceFromDbSnapshotResult, RestoreDbInstanceFromS3Request,
    RestoreDbInstanceFromS3Result,
};

/// Operations of the relational database management API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationalDatabaseService: Send + Sync {
    /// Copy a DB snapshot, within the region or across regions
    async fn copy_db_snapshot(
        &self,
        request: &CopyDbSnapshotRequest,
    ) -> Result<CopyDbSnapshotResult>;

    /// Copy a DB cluster snapshot
    async fn copy_db_cluster_snapshot(
        &self,
        request: &CopyDbClusterSnapshotRequest,
    ) -> Result<CopyDbClusterSnapshotResult>;

    /// Create a new DB cluster
    async fn create_db_cluster(
        &self,
        request: &CreateDbClusterRequest,
    ) -> Result<CreateDbClusterResult>;

    /// Modify a DB cluster's settings; unset fields are left unchanged
    async fn modify_db_cluster(
        &self,
        request: &ModifyDbClusterRequest,
    ) -> Result<ModifyDbClusterResult>;

    /// List DB clusters, one page at a time
    async fn describe_db_clusters(
        &self,
        request: &DescribeDbClustersRequest,
    ) -> Result<DescribeDbClustersResult>;

    /// Create a read replica of an existing DB instance
    async fn create_db_instance_read_replica(
        &self,
        request: &CreateDbInstanceReadReplicaRequest,
    ) -> Result<CreateDbInstanceReadReplicaResult>;

    /// List DB instances, one page at a time
    async fn describe_db_instances(
        &self,
        request: &DescribeDbInstancesRequest,
    ) -> Result<DescribeDbInstancesResult>;

    /// List DB snapshots, one page at a time
    async fn describe_db_snapshots(
        &self,
        request: &DescribeDbSnapshotsRequest,
    ) -> Result<DescribeDbSnapshotsResult>;

    /// List the instance offerings orderable for an engine
    async fn describe_orderable_db_instance_options(
        &self,
        request: &DescribeOrderableDbInstanceOptionsRequest,
    ) -> Result<DescribeOrderableDbInstanceOptionsResult>;

    /// Create a DB cluster from files exported to S3
    async fn restore_db_cluster_from_s3(
        &self,
        request: &RestoreDbClusterFromS3Request,
    ) -> Result<RestoreDbClusterFromS3Result>;

    /// Create a DB cluster from a snapshot
    async fn restore_db_cluster_from_snapshot(
        &self,
        request: &RestoreDbClusterFromSnapshotRequest,
    ) -> Result<RestoreDbClusterFromSnapshotResult>;

    /// Create a DB cluster from a point in time on a source cluster
    async fn restore_db_cluster_to_point_in_time(
        &self,
        request: &RestoreDbClusterToPointInTimeRequest,
    ) -> Result<RestoreDbClusterToPointInTimeResult>;

    /// Create a DB instance from a DB snapshot
    async fn restore_db_instance_from_db_snapshot(
        &self,
        request: &RestoreDbInstanceFromDbSnapshotRequest,
    ) -> Result<RestoreDbInstanceFromDbSnapshotResult>;

    /// Create a DB instance from files exported to S3
    async fn restore_db_instance_from_s3(
        &self,
        request: &RestoreDbInstanceFromS3Request,
    ) -> Result<RestoreDbInstanceFromS3Result>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RdsError;
    use crate::model::DbSnapshot;

    #[tokio::test]
    async fn test_mocked_describe_returns_page() {
        let mut service = MockRelationalDatabaseService::new();
        service
            .expect_describe_db_snapshots()
            .withf(|request| request.db_instance_identifier.as_deref() == Some("db1"))
            .returning(|_| {
                Ok(DescribeDbSnapshotsResult {
                    marker: None,
                    db_snapshots: Some(vec![DbSnapshot {
                        db_snapshot_identifier: Some("rds:db1-2026-08-07".to_string()),
                        status: Some("available".to_string()),
                        ..DbSnapshot::default()
                    }]),
                })
            });

        let request = DescribeDbSnapshotsRequest::new().with_db_instance_identifier("db1");
        let result = service.describe_db_snapshots(&request).await.unwrap();
        assert_eq!(result.db_snapshots.as_ref().map(Vec::len), Some(1));
        assert_eq!(result.marker, None);
    }

    #[tokio::test]
    async fn test_mocked_copy_propagates_service_error() {
        let mut service = MockRelationalDatabaseService::new();
        service.expect_copy_db_snapshot().returning(|_| {
            Err(RdsError::SnapshotAlreadyExists {
                message: "target db1-clone already exists".to_string(),
            })
        });

        let request = CopyDbSnapshotRequest::new("rds:db1-2026-08-07", "db1-clone");
        let err = service.copy_db_snapshot(&request).await.unwrap_err();
        assert!(err.is_conflict());
    }
}
