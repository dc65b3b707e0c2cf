//! DB instance restore operations
//!
//! Creates a new instance from a DB snapshot or from database files
//! exported to S3.

use serde::{Deserialize, Serialize};

use super::common::{ProcessorFeature, Tag};
use super::instance::DbInstance;

/// Request for the restore-DB-instance-from-DB-snapshot operation
///
/// The new instance runs with the snapshot's configuration except where a
/// field here overrides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbInstanceFromDbSnapshotRequest {
    /// Identifier for the new instance
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// Snapshot to restore from; must be in `available` state
    #[serde(rename = "DBSnapshotIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_snapshot_identifier: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    /// Can't be set together with `availability_zone`
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    /// Database name; ignored by the MySQL and MariaDB engines
    #[serde(rename = "DBName", skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    /// Engine of the new instance; must be compatible with the source's
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,
    #[serde(rename = "DBParameterGroupName", skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

impl RestoreDbInstanceFromDbSnapshotRequest {
    /// Create a request with the new identifier and source snapshot set
    #[must_use]
    pub fn new(
        db_instance_identifier: impl Into<String>,
        db_snapshot_identifier: impl Into<String>,
    ) -> Self {
        Self {
            db_instance_identifier: Some(db_instance_identifier.into()),
            db_snapshot_identifier: Some(db_snapshot_identifier.into()),
            ..Self::default()
        }
    }

    /// Set the instance class
    #[must_use]
    pub fn with_db_instance_class(mut self, class: impl Into<String>) -> Self {
        self.db_instance_class = Some(class.into());
        self
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the availability zone
    #[must_use]
    pub fn with_availability_zone(mut self, zone: impl Into<String>) -> Self {
        self.availability_zone = Some(zone.into());
        self
    }

    /// Set the DB subnet group
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(name.into());
        self
    }

    /// Make the instance a multi-AZ deployment
    #[must_use]
    pub fn with_multi_az(mut self, multi_az: bool) -> Self {
        self.multi_az = Some(multi_az);
        self
    }

    /// Give the instance a public address
    #[must_use]
    pub fn with_publicly_accessible(mut self, accessible: bool) -> Self {
        self.publicly_accessible = Some(accessible);
        self
    }

    /// Apply minor engine upgrades automatically
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, upgrade: bool) -> Self {
        self.auto_minor_version_upgrade = Some(upgrade);
        self
    }

    /// Set the license model
    #[must_use]
    pub fn with_license_model(mut self, model: impl Into<String>) -> Self {
        self.license_model = Some(model.into());
        self
    }

    /// Set the database name
    #[must_use]
    pub fn with_db_name(mut self, name: impl Into<String>) -> Self {
        self.db_name = Some(name.into());
        self
    }

    /// Set the engine of the new instance
    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Set provisioned IOPS
    #[must_use]
    pub fn with_iops(mut self, iops: i32) -> Self {
        self.iops = Some(iops);
        self
    }

    /// Set the option group
    #[must_use]
    pub fn with_option_group_name(mut self, name: impl Into<String>) -> Self {
        self.option_group_name = Some(name.into());
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

    /// Set the storage type
    #[must_use]
    pub fn with_storage_type(mut self, storage_type: impl Into<String>) -> Self {
        self.storage_type = Some(storage_type.into());
        self
    }

    /// Set the ARN of the key store for TDE
    #[must_use]
    pub fn with_tde_credential_arn(mut self, arn: impl Into<String>) -> Self {
        self.tde_credential_arn = Some(arn.into());
        self
    }

    /// Set the key store password for TDE
    #[must_use]
    pub fn with_tde_credential_password(mut self, password: impl Into<String>) -> Self {
        self.tde_credential_password = Some(password.into());
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

    /// Set the Active Directory domain
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Copy instance tags to snapshots taken from it
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, copy: bool) -> Self {
        self.copy_tags_to_snapshot = Some(copy);
        self
    }

    /// Set the IAM role used when joining the domain
    #[must_use]
    pub fn with_domain_iam_role_name(mut self, name: impl Into<String>) -> Self {
        self.domain_iam_role_name = Some(name.into());
        self
    }

    /// Enable or disable IAM database authentication
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, enable: bool) -> Self {
        self.enable_iam_database_authentication = Some(enable);
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

    /// Append processor feature overrides, initializing the list if absent
    #[must_use]
    pub fn with_processor_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = ProcessorFeature>,
    {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(features);
        self
    }

    /// Revert to the instance class's default processor features
    #[must_use]
    pub fn with_use_default_processor_features(mut self, use_default: bool) -> Self {
        self.use_default_processor_features = Some(use_default);
        self
    }

    /// Set the parameter group
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(name.into());
        self
    }

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }
}

/// Result of the restore-DB-instance-from-DB-snapshot operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbInstanceFromDbSnapshotResult {
    #[serde(rename = "DBInstance", skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DbInstance>,
}

/// Request for the restore-DB-instance-from-S3 operation
///
/// Creates an instance from database files previously exported to an S3
/// bucket; unlike the snapshot restore, the full instance configuration is
/// given here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbInstanceFromS3Request {
    #[serde(rename = "DBName", skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    /// Identifier for the new instance
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// Storage in gibibytes; allow headroom over the source data size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(rename = "DBSecurityGroups", skip_serializing_if = "Option::is_none")]
    pub db_security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(rename = "DBParameterGroupName", skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    /// Engine that produced the export; currently `mysql`
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
    pub enable_performance_insights: Option<bool>,
    #[serde(
        rename = "PerformanceInsightsKMSKeyId",
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_insights_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
}

impl RestoreDbInstanceFromS3Request {
    /// Create a request with the identifier, instance class, and engine set
    #[must_use]
    pub fn new(
        db_instance_identifier: impl Into<String>,
        db_instance_class: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            db_instance_identifier: Some(db_instance_identifier.into()),
            db_instance_class: Some(db_instance_class.into()),
            engine: Some(engine.into()),
            ..Self::default()
        }
    }

    /// Set the database name
    #[must_use]
    pub fn with_db_name(mut self, name: impl Into<String>) -> Self {
        self.db_name = Some(name.into());
        self
    }

    /// Set the allocated storage in gibibytes
    #[must_use]
    pub fn with_allocated_storage(mut self, gibibytes: i32) -> Self {
        self.allocated_storage = Some(gibibytes);
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

    /// Append EC2-Classic security group names, initializing the list if
    /// absent
    #[must_use]
    pub fn with_db_security_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.db_security_groups
            .get_or_insert_with(Vec::new)
            .extend(groups.into_iter().map(Into::into));
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

    /// Set the availability zone
    #[must_use]
    pub fn with_availability_zone(mut self, zone: impl Into<String>) -> Self {
        self.availability_zone = Some(zone.into());
        self
    }

    /// Set the DB subnet group
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(name.into());
        self
    }

    /// Set the weekly maintenance window
    #[must_use]
    pub fn with_preferred_maintenance_window(mut self, window: impl Into<String>) -> Self {
        self.preferred_maintenance_window = Some(window.into());
        self
    }

    /// Set the parameter group
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(name.into());
        self
    }

    /// Set the backup retention period in days
    #[must_use]
    pub fn with_backup_retention_period(mut self, days: i32) -> Self {
        self.backup_retention_period = Some(days);
        self
    }

    /// Set the daily backup window
    #[must_use]
    pub fn with_preferred_backup_window(mut self, window: impl Into<String>) -> Self {
        self.preferred_backup_window = Some(window.into());
        self
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Make the instance a multi-AZ deployment
    #[must_use]
    pub fn with_multi_az(mut self, multi_az: bool) -> Self {
        self.multi_az = Some(multi_az);
        self
    }

    /// Set the engine version
    #[must_use]
    pub fn with_engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    /// Apply minor engine upgrades automatically
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, upgrade: bool) -> Self {
        self.auto_minor_version_upgrade = Some(upgrade);
        self
    }

    /// Set the license model
    #[must_use]
    pub fn with_license_model(mut self, model: impl Into<String>) -> Self {
        self.license_model = Some(model.into());
        self
    }

    /// Set provisioned IOPS
    #[must_use]
    pub fn with_iops(mut self, iops: i32) -> Self {
        self.iops = Some(iops);
        self
    }

    /// Set the option group
    #[must_use]
    pub fn with_option_group_name(mut self, name: impl Into<String>) -> Self {
        self.option_group_name = Some(name.into());
        self
    }

    /// Give the instance a public address
    #[must_use]
    pub fn with_publicly_accessible(mut self, accessible: bool) -> Self {
        self.publicly_accessible = Some(accessible);
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

    /// Set the storage type
    #[must_use]
    pub fn with_storage_type(mut self, storage_type: impl Into<String>) -> Self {
        self.storage_type = Some(storage_type.into());
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

    /// Copy instance tags to snapshots taken from it
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, copy: bool) -> Self {
        self.copy_tags_to_snapshot = Some(copy);
        self
    }

    /// Set the enhanced monitoring interval in seconds
    #[must_use]
    pub fn with_monitoring_interval(mut self, seconds: i32) -> Self {
        self.monitoring_interval = Some(seconds);
        self
    }

    /// Set the IAM role that publishes enhanced monitoring metrics
    #[must_use]
    pub fn with_monitoring_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.monitoring_role_arn = Some(arn.into());
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

    /// Enable or disable Performance Insights
    #[must_use]
    pub fn with_enable_performance_insights(mut self, enable: bool) -> Self {
        self.enable_performance_insights = Some(enable);
        self
    }

    /// Set the KMS key for Performance Insights data
    #[must_use]
    pub fn with_performance_insights_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.performance_insights_kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Set the Performance Insights retention period in days
    #[must_use]
    pub fn with_performance_insights_retention_period(mut self, days: i32) -> Self {
        self.performance_insights_retention_period = Some(days);
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

    /// Append processor feature overrides, initializing the list if absent
    #[must_use]
    pub fn with_processor_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = ProcessorFeature>,
    {
        self.processor_features
            .get_or_insert_with(Vec::new)
            .extend(features);
        self
    }

    /// Revert to the instance class's default processor features
    #[must_use]
    pub fn with_use_default_processor_features(mut self, use_default: bool) -> Self {
        self.use_default_processor_features = Some(use_default);
        self
    }

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }
}

/// Result of the restore-DB-instance-from-S3 operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreDbInstanceFromS3Result {
    #[serde(rename = "DBInstance", skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DbInstance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_restore_builder_equivalence() {
        let built = RestoreDbInstanceFromDbSnapshotRequest::new("app-restored", "app-final")
            .with_db_instance_class("db.m5.large")
            .with_multi_az(true);

        let mut assigned = RestoreDbInstanceFromDbSnapshotRequest::default();
        assigned.db_instance_identifier = Some("app-restored".to_string());
        assigned.db_snapshot_identifier = Some("app-final".to_string());
        assigned.db_instance_class = Some("db.m5.large".to_string());
        assigned.multi_az = Some(true);

        assert_eq!(built, assigned);
    }

    #[test]
    fn test_s3_restore_serializes_security_group_members() {
        let request = RestoreDbInstanceFromS3Request::new("imported", "db.m5.large", "mysql")
            .with_db_security_groups(["default"])
            .with_vpc_security_group_ids(["sg-0aa11bb22cc33dd44"])
            .with_source_engine("mysql")
            .with_source_engine_version("5.7.28");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["DBSecurityGroups"][0], "default");
        assert_eq!(json["VpcSecurityGroupIds"][0], "sg-0aa11bb22cc33dd44");
        assert_eq!(json["SourceEngineVersion"], "5.7.28");
        // nothing serialized for unset toggles
        assert!(json.get("MultiAZ").is_none());
        assert!(json.get("StorageEncrypted").is_none());
    }

    #[test]
    fn test_clearing_a_field_restores_absence() {
        let mut request =
            RestoreDbInstanceFromDbSnapshotRequest::new("app-restored", "app-final").with_port(3306);
        assert_eq!(request.port, Some(3306));

        request.port = None;
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("Port").is_none());
    }
}
