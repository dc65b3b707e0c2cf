//! DB snapshot and DB cluster snapshot models
//!
//! Covers the describe and copy operations for instance-level and
//! cluster-level snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Filter, ProcessorFeature, Tag};

/// A point-in-time snapshot of a DB instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbSnapshot {
    #[serde(rename = "DBSnapshotIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_snapshot_identifier: Option<String>,
    /// Identifier of the DB instance the snapshot was taken from
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// When the snapshot was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Allocated storage in gibibytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    /// Snapshot status, e.g. `available`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Port the source instance listened on at snapshot time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    /// When the source instance was created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    /// `automated`, `manual`, `shared`, or `public`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    /// Percentage of the estimated data transferred so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<i32>,
    /// Region the snapshot was copied from, for cross-region copies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_region: Option<String>,
    #[serde(
        rename = "SourceDBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_db_snapshot_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(rename = "DBSnapshotArn", skip_serializing_if = "Option::is_none")]
    pub db_snapshot_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub iam_database_authentication_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Region-unique immutable identifier of the source instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
}

/// A point-in-time snapshot of a DB cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbClusterSnapshot {
    /// Availability zones instances in the snapshot's cluster can be
    /// restored into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(
        rename = "DBClusterSnapshotIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_snapshot_identifier: Option<String>,
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "DBClusterSnapshotArn",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_snapshot_arn: Option<String>,
    /// ARN of the snapshot this one was copied from, if any
    #[serde(
        rename = "SourceDBClusterSnapshotArn",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_db_cluster_snapshot_arn: Option<String>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub iam_database_authentication_enabled: Option<bool>,
}

/// Request for the describe-DB-snapshots operation
///
/// All parameters are optional; an empty request returns the automated and
/// manual snapshots owned by the account, one page at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbSnapshotsRequest {
    /// Only return snapshots of this DB instance. Can't be used together
    /// with `db_snapshot_identifier`.
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// Describe one specific snapshot. Can't be used together with
    /// `db_instance_identifier`.
    #[serde(rename = "DBSnapshotIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_snapshot_identifier: Option<String>,
    /// Restrict results to `automated`, `manual`, `shared`, or `public`
    /// snapshots; unset returns automated and manual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100; default 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    /// Continuation marker from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Include manual snapshots shared from other accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shared: Option<bool>,
    /// Include public snapshots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_public: Option<bool>,
    /// Only return snapshots of the instance with this resource ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
}

impl DescribeDbSnapshotsRequest {
    /// Create an empty describe request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to snapshots of one DB instance
    #[must_use]
    pub fn with_db_instance_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(identifier.into());
        self
    }

    /// Describe one specific snapshot
    #[must_use]
    pub fn with_db_snapshot_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.db_snapshot_identifier = Some(identifier.into());
        self
    }

    /// Restrict the snapshot type
    #[must_use]
    pub fn with_snapshot_type(mut self, snapshot_type: impl Into<String>) -> Self {
        self.snapshot_type = Some(snapshot_type.into());
        self
    }

    /// Append filters, initializing the list if absent
    #[must_use]
    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = Filter>,
    {
        self.filters.get_or_insert_with(Vec::new).extend(filters);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_max_records(mut self, max_records: i32) -> Self {
        self.max_records = Some(max_records);
        self
    }

    /// Set the continuation marker
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Include snapshots shared from other accounts
    #[must_use]
    pub fn with_include_shared(mut self, include_shared: bool) -> Self {
        self.include_shared = Some(include_shared);
        self
    }

    /// Include public snapshots
    #[must_use]
    pub fn with_include_public(mut self, include_public: bool) -> Self {
        self.include_public = Some(include_public);
        self
    }

    /// Restrict to snapshots of the instance with this resource ID
    #[must_use]
    pub fn with_dbi_resource_id(mut self, dbi_resource_id: impl Into<String>) -> Self {
        self.dbi_resource_id = Some(dbi_resource_id.into());
        self
    }
}

/// One page of describe-DB-snapshots results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbSnapshotsResult {
    /// Marker for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(rename = "DBSnapshots", skip_serializing_if = "Option::is_none")]
    pub db_snapshots: Option<Vec<DbSnapshot>>,
}

/// Request for the copy-DB-snapshot operation
///
/// Copies a snapshot within a region or, with a pre-signed source URL,
/// across regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDbSnapshotRequest {
    /// Identifier or ARN of the snapshot to copy; must be in `available`
    /// state
    #[serde(
        rename = "SourceDBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_db_snapshot_identifier: Option<String>,
    /// Identifier for the new snapshot
    #[serde(
        rename = "TargetDBSnapshotIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_db_snapshot_identifier: Option<String>,
    /// KMS key for the copy; required when copying an encrypted snapshot
    /// to another account or region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Copy the source snapshot's tags to the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,
    /// Pre-signed source-region URL authorizing a cross-region copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,
    /// Option group for the copy; defaults to the source's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
}

impl CopyDbSnapshotRequest {
    /// Create a copy request with source and target identifiers set
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_db_snapshot_identifier: Some(source.into()),
            target_db_snapshot_identifier: Some(target.into()),
            ..Self::default()
        }
    }

    /// Set the KMS key for the copy
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Append tags, initializing the list if absent
    #[must_use]
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }

    /// Copy the source snapshot's tags to the target
    #[must_use]
    pub fn with_copy_tags(mut self, copy_tags: bool) -> Self {
        self.copy_tags = Some(copy_tags);
        self
    }

    /// Set the pre-signed URL for a cross-region copy
    #[must_use]
    pub fn with_pre_signed_url(mut self, url: impl Into<String>) -> Self {
        self.pre_signed_url = Some(url.into());
        self
    }

    /// Set the option group for the copy
    #[must_use]
    pub fn with_option_group_name(mut self, name: impl Into<String>) -> Self {
        self.option_group_name = Some(name.into());
        self
    }
}

/// Result of the copy-DB-snapshot operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDbSnapshotResult {
    #[serde(rename = "DBSnapshot", skip_serializing_if = "Option::is_none")]
    pub db_snapshot: Option<DbSnapshot>,
}

/// Request for the copy-DB-cluster-snapshot operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDbClusterSnapshotRequest {
    /// Identifier or ARN of the cluster snapshot to copy
    #[serde(
        rename = "SourceDBClusterSnapshotIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_db_cluster_snapshot_identifier: Option<String>,
    /// Identifier for the new cluster snapshot
    #[serde(
        rename = "TargetDBClusterSnapshotIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_db_cluster_snapshot_identifier: Option<String>,
    /// KMS key for the copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Pre-signed source-region URL authorizing a cross-region copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,
    /// Copy the source snapshot's tags to the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CopyDbClusterSnapshotRequest {
    /// Create a copy request with source and target identifiers set
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source_db_cluster_snapshot_identifier: Some(source.into()),
            target_db_cluster_snapshot_identifier: Some(target.into()),
            ..Self::default()
        }
    }

    /// Set the KMS key for the copy
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Set the pre-signed URL for a cross-region copy
    #[must_use]
    pub fn with_pre_signed_url(mut self, url: impl Into<String>) -> Self {
        self.pre_signed_url = Some(url.into());
        self
    }

    /// Copy the source snapshot's tags to the target
    #[must_use]
    pub fn with_copy_tags(mut self, copy_tags: bool) -> Self {
        self.copy_tags = Some(copy_tags);
        self
    }

    /// Append tags, initializing the list if absent
    #[must_use]
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags);
        self
    }
}

/// Result of the copy-DB-cluster-snapshot operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CopyDbClusterSnapshotResult {
    #[serde(rename = "DBClusterSnapshot", skip_serializing_if = "Option::is_none")]
    pub db_cluster_snapshot: Option<DbClusterSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_builder_equals_field_assignment() {
        let built = DescribeDbSnapshotsRequest::new()
            .with_db_instance_identifier("db1")
            .with_max_records(50);

        let mut assigned = DescribeDbSnapshotsRequest::new();
        assigned.db_instance_identifier = Some("db1".to_string());
        assigned.max_records = Some(50);

        assert_eq!(built, assigned);
    }

    #[test]
    fn test_describe_filters_append_across_calls() {
        let request = DescribeDbSnapshotsRequest::new()
            .with_filters([Filter::new("db-instance-id").with_values(["db1"])])
            .with_filters([Filter::new("snapshot-type").with_values(["manual"])]);
        assert_eq!(request.filters.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_changing_one_field_breaks_equality() {
        let a = DescribeDbSnapshotsRequest::new().with_db_instance_identifier("db1");
        let b = a.clone().with_include_shared(false);
        assert_ne!(a, b);
        // include_shared absent is not the same as include_shared false
        assert_eq!(a.include_shared, None);
        assert_eq!(b.include_shared, Some(false));
    }

    #[test]
    fn test_copy_request_new_sets_identifiers() {
        let request = CopyDbSnapshotRequest::new("rds:db1-2026-01-01", "db1-clone");
        assert_eq!(
            request.source_db_snapshot_identifier.as_deref(),
            Some("rds:db1-2026-01-01")
        );
        assert_eq!(
            request.target_db_snapshot_identifier.as_deref(),
            Some("db1-clone")
        );
        assert_eq!(request.kms_key_id, None);
    }

    #[test]
    fn test_copy_request_serializes_documented_member_names() {
        let request = CopyDbSnapshotRequest::new("src", "dst").with_copy_tags(true);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["SourceDBSnapshotIdentifier"], "src");
        assert_eq!(json["TargetDBSnapshotIdentifier"], "dst");
        assert_eq!(json["CopyTags"], true);
        assert!(json.get("KmsKeyId").is_none());
    }

    #[test]
    fn test_cluster_snapshot_result_deserializes() {
        let payload = r#"{
            "DBClusterSnapshot": {
                "DBClusterSnapshotIdentifier": "prod-nightly",
                "DBClusterIdentifier": "prod",
                "Engine": "aurora-mysql",
                "Status": "available",
                "StorageEncrypted": true,
                "PercentProgress": 100
            }
        }"#;
        let result: CopyDbClusterSnapshotResult = serde_json::from_str(payload).unwrap();
        let snapshot = result.db_cluster_snapshot.unwrap();
        assert_eq!(
            snapshot.db_cluster_snapshot_identifier.as_deref(),
            Some("prod-nightly")
        );
        assert_eq!(snapshot.storage_encrypted, Some(true));
        assert_eq!(snapshot.availability_zones, None);
    }
}
