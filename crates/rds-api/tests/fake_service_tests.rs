//! Trait-level tests against an in-memory fake
//!
//! A minimal `RelationalDatabaseService` implementation backed by a vector
//! of snapshots, enough to drive the describe and copy flows end to end
//! without a transport layer.

use async_trait::async_trait;
use std::sync::Mutex;

use rds_api::model::{
    CopyDbClusterSnapshotRequest, CopyDbClusterSnapshotResult, CopyDbSnapshotRequest,
    CopyDbSnapshotResult, CreateDbClusterRequest, CreateDbClusterResult,
    CreateDbInstanceReadReplicaRequest, CreateDbInstanceReadReplicaResult, DbSnapshot,
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
use rds_api::{RdsError, RelationalDatabaseService, Result};

/// In-memory stand-in for the remote service
struct FakeRds {
    snapshots: Mutex<Vec<DbSnapshot>>,
}

impl FakeRds {
    fn with_snapshots(snapshots: Vec<DbSnapshot>) -> Self {
        Self {
            snapshots: Mutex::new(snapshots),
        }
    }

    fn unsupported<T>(&self, operation: &str) -> Result<T> {
        Err(RdsError::Client {
            message: format!("{operation} is not supported by the in-memory fake"),
        })
    }
}

#[async_trait]
impl RelationalDatabaseService for FakeRds {
    async fn copy_db_snapshot(
        &self,
        request: &CopyDbSnapshotRequest,
    ) -> Result<CopyDbSnapshotResult> {
        let mut snapshots = self.snapshots.lock().unwrap();

        let target = request.target_db_snapshot_identifier.as_deref();
        if snapshots
            .iter()
            .any(|s| s.db_snapshot_identifier.as_deref() == target)
        {
            return Err(RdsError::SnapshotAlreadyExists {
                message: format!("{} already exists", target.unwrap_or("<unset>")),
            });
        }

        let source = snapshots
            .iter()
            .find(|s| {
                s.db_snapshot_identifier.as_deref()
                    == request.source_db_snapshot_identifier.as_deref()
            })
            .cloned()
            .ok_or_else(|| RdsError::SnapshotNotFound {
                message: "source snapshot does not exist".to_string(),
            })?;

        let copy = DbSnapshot {
            db_snapshot_identifier: target.map(str::to_string),
            source_db_snapshot_identifier: source.db_snapshot_identifier.clone(),
            snapshot_type: Some("manual".to_string()),
            ..source
        };
        snapshots.push(copy.clone());

        Ok(CopyDbSnapshotResult {
            db_snapshot: Some(copy),
        })
    }

    async fn copy_db_cluster_snapshot(
        &self,
        _request: &CopyDbClusterSnapshotRequest,
    ) -> Result<CopyDbClusterSnapshotResult> {
        self.unsupported("copy_db_cluster_snapshot")
    }

    async fn create_db_cluster(
        &self,
        _request: &CreateDbClusterRequest,
    ) -> Result<CreateDbClusterResult> {
        self.unsupported("create_db_cluster")
    }

    async fn modify_db_cluster(
        &self,
        _request: &ModifyDbClusterRequest,
    ) -> Result<ModifyDbClusterResult> {
        self.unsupported("modify_db_cluster")
    }

    async fn describe_db_clusters(
        &self,
        _request: &DescribeDbClustersRequest,
    ) -> Result<DescribeDbClustersResult> {
        self.unsupported("describe_db_clusters")
    }

    async fn create_db_instance_read_replica(
        &self,
        _request: &CreateDbInstanceReadReplicaRequest,
    ) -> Result<CreateDbInstanceReadReplicaResult> {
        self.unsupported("create_db_instance_read_replica")
    }

    async fn describe_db_instances(
        &self,
        _request: &DescribeDbInstancesRequest,
    ) -> Result<DescribeDbInstancesResult> {
        self.unsupported("describe_db_instances")
    }

    async fn describe_db_snapshots(
        &self,
        request: &DescribeDbSnapshotsRequest,
    ) -> Result<DescribeDbSnapshotsResult> {
        let snapshots = self.snapshots.lock().unwrap();

        let matches: Vec<DbSnapshot> = snapshots
            .iter()
            .filter(|s| {
                request.db_instance_identifier.is_none()
                    || s.db_instance_identifier == request.db_instance_identifier
            })
            .filter(|s| {
                request.snapshot_type.is_none() || s.snapshot_type == request.snapshot_type
            })
            .cloned()
            .collect();

        Ok(DescribeDbSnapshotsResult {
            marker: None,
            db_snapshots: Some(matches),
        })
    }

    async fn describe_orderable_db_instance_options(
        &self,
        _request: &DescribeOrderableDbInstanceOptionsRequest,
    ) -> Result<DescribeOrderableDbInstanceOptionsResult> {
        self.unsupported("describe_orderable_db_instance_options")
    }

    async fn restore_db_cluster_from_s3(
        &self,
        _request: &RestoreDbClusterFromS3Request,
    ) -> Result<RestoreDbClusterFromS3Result> {
        self.unsupported("restore_db_cluster_from_s3")
    }

    async fn restore_db_cluster_from_snapshot(
        &self,
        _request: &RestoreDbClusterFromSnapshotRequest,
    ) -> Result<RestoreDbClusterFromSnapshotResult> {
        self.unsupported("restore_db_cluster_from_snapshot")
    }

    async fn restore_db_cluster_to_point_in_time(
        &self,
        _request: &RestoreDbClusterToPointInTimeRequest,
    ) -> Result<RestoreDbClusterToPointInTimeResult> {
        self.unsupported("restore_db_cluster_to_point_in_time")
    }

    async fn restore_db_instance_from_db_snapshot(
        &self,
        _request: &RestoreDbInstanceFromDbSnapshotRequest,
    ) -> Result<RestoreDbInstanceFromDbSnapshotResult> {
        self.unsupported("restore_db_instance_from_db_snapshot")
    }

    async fn restore_db_instance_from_s3(
        &self,
        _request: &RestoreDbInstanceFromS3Request,
    ) -> Result<RestoreDbInstanceFromS3Result> {
        self.unsupported("restore_db_instance_from_s3")
    }
}

fn snapshot(identifier: &str, instance: &str, snapshot_type: &str) -> DbSnapshot {
    DbSnapshot {
        db_snapshot_identifier: Some(identifier.to_string()),
        db_instance_identifier: Some(instance.to_string()),
        snapshot_type: Some(snapshot_type.to_string()),
        status: Some("available".to_string()),
        engine: Some("postgres".to_string()),
        ..DbSnapshot::default()
    }
}

#[tokio::test]
async fn describe_filters_by_instance_identifier() {
    let service = FakeRds::with_snapshots(vec![
        snapshot("rds:db1-2026-08-06", "db1", "automated"),
        snapshot("rds:db2-2026-08-06", "db2", "automated"),
        snapshot("db1-pre-upgrade", "db1", "manual"),
    ]);

    let request = DescribeDbSnapshotsRequest::new().with_db_instance_identifier("db1");
    let result = service.describe_db_snapshots(&request).await.unwrap();
    assert_eq!(result.db_snapshots.as_ref().map(Vec::len), Some(2));

    let manual_only = DescribeDbSnapshotsRequest::new()
        .with_db_instance_identifier("db1")
        .with_snapshot_type("manual");
    let result = service.describe_db_snapshots(&manual_only).await.unwrap();
    let snapshots = result.db_snapshots.unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(
        snapshots[0].db_snapshot_identifier.as_deref(),
        Some("db1-pre-upgrade")
    );
}

#[tokio::test]
async fn copy_then_describe_sees_the_new_snapshot() {
    let service =
        FakeRds::with_snapshots(vec![snapshot("rds:db1-2026-08-06", "db1", "automated")]);

    let copy = CopyDbSnapshotRequest::new("rds:db1-2026-08-06", "db1-keep").with_copy_tags(true);
    let result = service.copy_db_snapshot(&copy).await.unwrap();
    let copied = result.db_snapshot.unwrap();
    assert_eq!(copied.db_snapshot_identifier.as_deref(), Some("db1-keep"));
    assert_eq!(
        copied.source_db_snapshot_identifier.as_deref(),
        Some("rds:db1-2026-08-06")
    );
    assert_eq!(copied.snapshot_type.as_deref(), Some("manual"));

    let all = service
        .describe_db_snapshots(&DescribeDbSnapshotsRequest::new())
        .await
        .unwrap();
    assert_eq!(all.db_snapshots.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn copy_to_existing_identifier_is_a_conflict() {
    let service = FakeRds::with_snapshots(vec![
        snapshot("rds:db1-2026-08-06", "db1", "automated"),
        snapshot("db1-keep", "db1", "manual"),
    ]);

    let copy = CopyDbSnapshotRequest::new("rds:db1-2026-08-06", "db1-keep");
    let err = service.copy_db_snapshot(&copy).await.unwrap_err();
    assert!(err.is_conflict());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn copy_of_missing_source_is_not_found() {
    let service = FakeRds::with_snapshots(Vec::new());

    let copy = CopyDbSnapshotRequest::new("rds:gone-2026-01-01", "gone-copy");
    let err = service.copy_db_snapshot(&copy).await.unwrap_err();
    assert!(err.is_not_found());
}
