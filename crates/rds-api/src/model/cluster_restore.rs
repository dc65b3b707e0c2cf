//! DB cluster restore operations
//!
//! Three ways to materialize a new cluster from existing data: an S3
//! export, a cluster snapshot, or a point in time on a source cluster's
//! backup history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cluster::{DbCluster, ScalingConfiguration};
use super::common::Tag;

/// Request for the restore-DB-cluster-from-S3 operation
///
/// Creates a cluster from database files previously exported to an S3
/// bucket. The source engine and version describe what produced the
/// export, not the engine of the new cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbClusterFromS3Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Days to retain automated backups, 1 to 35; default 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Identifier for the new cluster
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    /// Engine of the new cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    /// Engine that produced the S3 export, e.g. `mysql`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine: Option<String>,
    /// Version of the engine that produced the export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_engine_version: Option<String>,
    /// Bucket holding the exported files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_bucket_name: Option<String>,
    /// Key prefix of the exported files within the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_prefix: Option<String>,
    /// IAM role authorizing the service to read the bucket
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_ingestion_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterFromS3Request {
    /// Create a request with the new cluster's identifier and engine set
    #[must_use]
    pub fn new(db_cluster_identifier: impl Into<String>, engine: impl Into<String>) -> Self {
        Self {
            db_cluster_identifier: Some(db_cluster_identifier.into()),
            engine: Some(engine.into()),
            ..Self::default()
        }
    }

    /// Append availability zones, initializing the list if absent
    #[must_use]
    pub fn with_availability_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(zones.into_iter().map(Into::into));
        self
    }

    /// Set the backup retention period in days
    #[must_use]
    pub fn with_backup_retention_period(mut self, days: i32) -> Self {
        self.backup_retention_period = Some(days);
        self
    }

    /// Set the character set
    #[must_use]
    pub fn with_character_set_name(mut self, name: impl Into<String>) -> Self {
        self.character_set_name = Some(name.into());
        self
    }

    /// Name a database to create in the cluster
    #[must_use]
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set the cluster parameter group
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(name.into());
        self
    }

    /// Append VPC security group IDs, initializing the list if absent
    #[must_use]
    pub fn with_vpc_security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Set the DB subnet group
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(name.into());
        self
    }

    /// Set the engine version of the new cluster
    #[must_use]
    pub fn with_engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the master username
    #[must_use]
    pub fn with_master_username(mut self, username: impl Into<String>) -> Self {
        self.master_username = Some(username.into());
        self
    }

    /// Set the master password
    #[must_use]
    pub fn with_master_user_password(mut self, password: impl Into<String>) -> Self {
        self.master_user_password = Some(password.into());
        self
    }

    /// Set the option group
    #[must_use]
    pub fn with_option_group_name(mut self, name: impl Into<String>) -> Self {
        self.option_group_name = Some(name.into());
        self
    }

    /// Set the daily backup window
    #[must_use]
    pub fn with_preferred_backup_window(mut self, window: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(window.into());
        self
    }

    /// Set the weekly maintenance window
    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, window: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(window.into());
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

    /// Enable or disable storage encryption
    #[must_use]
    pub fn with_storage_encrypted(mut self, encrypted: bool) -> Self {
        self.storage_encrypted = Some(encrypted);
        self
    }

    /// Set the KMS key for encrypted storage
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Enable or disable IAM database authentication
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, enable: bool) -> Self {
        self.enable_iam_database_authentication = Some(enable);
        self
    }

    /// Set the engine that produced the export
    #[must_use]
    pub fn with_source_engine(mut self, engine: impl Into<String>) -> Self {
        self.source_engine = Some(engine.into());
        self
    }

    /// Set the version of the engine that produced the export
    #[must_use]
    pub fn with_source_engine_version(mut self, version: impl Into<String>) -> Self {
        self.source_engine_version = Some(version.into());
        self
    }

    /// Set the bucket holding the exported files
    #[must_use]
    pub fn with_s3_bucket_name(mut self, bucket: impl Into<String>) -> Self {
        self.s3_bucket_name = Some(bucket.into());
        self
    }

    /// Set the key prefix of the exported files
    #[must_use]
    pub fn with_s3_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.s3_prefix = Some(prefix.into());
        self
    }

    /// Set the IAM role authorizing reads from the bucket
    #[must_use]
    pub fn with_s3_ingestion_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.s3_ingestion_role_arn = Some(arn.into());
        self
    }

    /// Set the backtrack window in seconds
    #[must_use]
    pub fn with_backtrack_window(mut self, seconds: i64) -> Self {
        self.backtrack_window = Some(seconds);
        self
    }

    /// Append log types to export, initializing the list if absent
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I, S>(mut self, log_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(log_types.into_iter().map(Into::into));
        self
    }

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }

    /// Copy cluster tags to snapshots taken from it
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, copy: bool) -> Self {
        self.copy_tags_to_snapshot = Some(copy);
        self
    }

    /// Set the Active Directory domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the IAM role used when joining the domain
    #[must_use]
    pub fn with_domain_iam_role_name(mut self, name: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(name.into());
        self
    }
}

/// Result of the restore-DB-cluster-from-S3 operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbClusterFromS3Result {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DbCluster>,
}

/// Request for the restore-DB-cluster-from-snapshot operation
///
/// Creates a cluster from a DB snapshot or DB cluster snapshot with a new
/// configuration; attributes left unset fall back to the snapshot's or the
/// engine's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbClusterFromSnapshotRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Identifier for the new cluster
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    /// Snapshot or cluster-snapshot identifier to restore from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_identifier: Option<String>,
    /// Engine of the new cluster; must be compatible with the source's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// KMS key for the restored cluster; defaults to the snapshot's key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterFromSnapshotRequest {
    /// Create a request with the new identifier, source snapshot, and
    /// engine set
    #[must_use]
    pub fn new(
        db_cluster_identifier: impl Into<String>,
        snapshot_identifier: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            db_cluster_identifier: Some(db_cluster_identifier.into()),
            snapshot_identifier: Some(snapshot_identifier.into()),
            engine: Some(engine.into()),
            ..Self::default()
        }
    }

    /// Append availability zones, initializing the list if absent
    #[must_use]
    pub fn with_availability_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(zones.into_iter().map(Into::into));
        self
    }

    /// Set the engine version
    #[must_use]
    pub fn with_engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the DB subnet group
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(name.into());
        self
    }

    /// Name a database to create in the cluster
    #[must_use]
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set the option group
    #[must_use]
    pub fn with_option_group_name(mut self, name: impl Into<String>) -> Self {
        self.option_group_name = Some(name.into());
        self
    }

    /// Append VPC security group IDs, initializing the list if absent
    #[must_use]
    pub fn with_vpc_security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
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

    /// Set the KMS key for the restored cluster
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Enable or disable IAM database authentication
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, enable: bool) -> Self {
        self.enable_iam_database_authentication = Some(enable);
        self
    }

    /// Set the backtrack window in seconds
    #[must_use]
    pub fn with_backtrack_window(mut self, seconds: i64) -> Self {
        self.backtrack_window = Some(seconds);
        self
    }

    /// Append log types to export, initializing the list if absent
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I, S>(mut self, log_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(log_types.into_iter().map(Into::into));
        self
    }

    /// Set the engine mode
    #[must_use]
    pub fn with_engine_mode(mut self, mode: impl Into<String>) -> Self {
        self.engine_mode = Some(mode.into());
        self
    }

    /// Set the serverless scaling configuration
    #[must_use]
    pub fn with_scaling_configuration(mut self, configuration: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(configuration);
        self
    }

    /// Set the cluster parameter group
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(name.into());
        self
    }

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }

    /// Copy cluster tags to snapshots taken from it
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, copy: bool) -> Self {
        self.copy_tags_to_snapshot = Some(copy);
        self
    }

    /// Set the Active Directory domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the IAM role used when joining the domain
    #[must_use]
    pub fn with_domain_iam_role_name(mut self, name: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(name.into());
        self
    }
}

/// Result of the restore-DB-cluster-from-snapshot operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbClusterFromSnapshotResult {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DbCluster>,
}

/// Request for the restore-DB-cluster-to-point-in-time operation
///
/// Either a target time or `use_latest_restorable_time` selects the
/// restore point; the service rejects requests specifying both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbClusterToPointInTimeRequest {
    /// Identifier for the new cluster
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    /// `full-copy` or `copy-on-write`; default is a full copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_type: Option<String>,
    /// Cluster whose backup history is restored from
    #[serde(
        rename = "SourceDBClusterIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_db_cluster_identifier: Option<String>,
    /// Target time, within the source's restorable window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_to_time: Option<DateTime<Utc>>,
    /// Restore to the latest backed-up time instead of a fixed one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_latest_restorable_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl RestoreDbClusterToPointInTimeRequest {
    /// Create a request with the new and source cluster identifiers set
    #[must_use]
    pub fn new(
        db_cluster_identifier: impl Into<String>,
        source_db_cluster_identifier: impl Into<String>,
    ) -> Self {
        Self {
            db_cluster_identifier: Some(db_cluster_identifier.into()),
            source_db_cluster_identifier: Some(source_db_cluster_identifier.into()),
            ..Self::default()
        }
    }

    /// Set the restore type
    #[must_use]
    pub fn with_restore_type(mut self, restore_type: impl Into<String>) -> Self {
        self.restore_type = Some(restore_type.into());
        self
    }

    /// Set the target time
    #[must_use]
    pub fn with_restore_to_time(mut self, time: DateTime<Utc>) -> Self {
        self.restore_to_time = Some(time);
        self
    }

    /// Restore to the latest backed-up time
    #[must_use]
    pub fn with_use_latest_restorable_time(mut self, use_latest: bool) -> Self {
        self.use_latest_restorable_time = Some(use_latest);
        self
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the DB subnet group
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(name.into());
        self
    }

    /// Set the option group
    #[must_use]
    pub fn with_option_group_name(mut self, name: impl Into<String>) -> Self {
        self.option_group_name = Some(name.into());
        self
    }

    /// Append VPC security group IDs, initializing the list if absent
    #[must_use]
    pub fn with_vpc_security_group_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vpc_security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
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

    /// Set the KMS key for the restored cluster
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Enable or disable IAM database authentication
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, enable: bool) -> Self {
        self.enable_iam_database_authentication = Some(enable);
        self
    }

    /// Set the backtrack window in seconds
    #[must_use]
    pub fn with_backtrack_window(mut self, seconds: i64) -> Self {
        self.backtrack_window = Some(seconds);
        self
    }

    /// Append log types to export, initializing the list if absent
    #[must_use]
    pub fn with_enable_cloudwatch_logs_exports<I, S>(mut self, log_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_cloudwatch_logs_exports
            .get_or_insert_with(Vec::new)
            .extend(log_types.into_iter().map(Into::into));
        self
    }

    /// Set the cluster parameter group
    #[must_use]
    pub fn with_db_cluster_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_cluster_parameter_group_name = Some(name.into());
        self
    }

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }

    /// Copy cluster tags to snapshots taken from it
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, copy: bool) -> Self {
        self.copy_tags_to_snapshot = Some(copy);
        self
    }

    /// Set the Active Directory domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the IAM role used when joining the domain
    #[must_use]
    pub fn with_domain_iam_role_name(mut self, name: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(name.into());
        self
    }
}

/// Result of the restore-DB-cluster-to-point-in-time operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbClusterToPointInTimeResult {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DbCluster>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_s3_restore_source_fields() {
        let request = RestoreDbClusterFromS3Request::new("restored", "aurora")
            .with_source_engine("mysql")
            .with_source_engine_version("5.7.28")
            .with_s3_bucket_name("exports")
            .with_s3_prefix("prod/2026-08")
            .with_s3_ingestion_role_arn("arn:aws:iam::123456789012:role/ingest");

        assert_eq!(request.source_engine.as_deref(), Some("mysql"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["S3BucketName"], "exports");
        assert_eq!(json["S3Prefix"], "prod/2026-08");
        assert_eq!(json["S3IngestionRoleArn"], "arn:aws:iam::123456789012:role/ingest");
    }

    #[test]
    fn test_snapshot_restore_new_equals_builder() {
        let a = RestoreDbClusterFromSnapshotRequest::new("restored", "prod-final", "aurora");
        let mut b = RestoreDbClusterFromSnapshotRequest::default();
        b.db_cluster_identifier = Some("restored".to_string());
        b.snapshot_identifier = Some("prod-final".to_string());
        b.engine = Some("aurora".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn test_point_in_time_serializes_restore_time() {
        let at = Utc.with_ymd_and_hms(2026, 8, 1, 12, 30, 0).unwrap();
        let request = RestoreDbClusterToPointInTimeRequest::new("restored", "prod")
            .with_restore_to_time(at)
            .with_restore_type("copy-on-write");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["SourceDBClusterIdentifier"], "prod");
        assert_eq!(json["RestoreType"], "copy-on-write");
        assert!(
            json["RestoreToTime"]
                .as_str()
                .unwrap()
                .starts_with("2026-08-01T12:30:00")
        );
        // unset means "latest" was not requested, not "false"
        assert!(json.get("UseLatestRestorableTime").is_none());
    }
}
