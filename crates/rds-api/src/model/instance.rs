//! DB instance models
//!
//! The `DbInstance` payload, the nested records it embeds, the describe
//! operation, and read-replica creation. Restore operations live in
//! [`instance_restore`](super::instance_restore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    AvailabilityZone, DomainMembership, Endpoint, Filter, ProcessorFeature, Tag,
    VpcSecurityGroupMembership,
};

/// Membership of a DB instance in an EC2-Classic security group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbSecurityGroupMembership {
    #[serde(rename = "DBSecurityGroupName", skip_serializing_if = "Option::is_none")]
    pub db_security_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A DB parameter group applied to an instance and its apply state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbParameterGroupStatus {
    #[serde(rename = "DBParameterGroupName", skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,
    /// e.g. `in-sync` or `pending-reboot`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_apply_status: Option<String>,
}

/// Membership of a DB instance in an option group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionGroupMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Status detail for a DB instance, currently read-replication only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbInstanceStatusInfo {
    /// Status type; currently always `read replication`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_type: Option<String>,
    /// False when the instance is in an error state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Error detail when the status is error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// An IAM role associated with a DB instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbInstanceRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
    /// `ACTIVE`, `PENDING`, or `INVALID`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A subnet in a DB subnet group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_availability_zone: Option<AvailabilityZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_status: Option<String>,
}

/// A DB subnet group and the subnets it spans
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbSubnetGroup {
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(
        rename = "DBSubnetGroupDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_subnet_group_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_group_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Subnet>>,
    #[serde(rename = "DBSubnetGroupArn", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_arn: Option<String>,
}

/// Log export changes that have been requested but not yet applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingCloudwatchLogsExports {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_types_to_enable: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_types_to_disable: Option<Vec<String>>,
}

/// Changes to a DB instance that are pending application
///
/// Only the attributes being changed are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PendingModifiedValues {
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    /// New identifier, when a rename is pending
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(
        rename = "CACertificateIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub ca_certificate_identifier: Option<String>,
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_cloudwatch_logs_exports: Option<PendingCloudwatchLogsExports>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
}

/// A DB instance as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbInstance {
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// Compute and memory class, e.g. `db.r5.large`
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(rename = "DBInstanceStatus", skip_serializing_if = "Option::is_none")]
    pub db_instance_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    /// Initial database name, or for Oracle the SID
    #[serde(rename = "DBName", skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    /// Allocated storage in gibibytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(rename = "DBSecurityGroups", skip_serializing_if = "Option::is_none")]
    pub db_security_groups: Option<Vec<DbSecurityGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    #[serde(rename = "DBParameterGroups", skip_serializing_if = "Option::is_none")]
    pub db_parameter_groups: Option<Vec<DbParameterGroupStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "DBSubnetGroup", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group: Option<DbSubnetGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_modified_values: Option<PendingModifiedValues>,
    /// Latest time a point-in-time restore can target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<DateTime<Utc>>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    /// Source identifier when this instance is a read replica
    #[serde(
        rename = "ReadReplicaSourceDBInstanceIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_replica_source_db_instance_identifier: Option<String>,
    #[serde(
        rename = "ReadReplicaDBInstanceIdentifiers",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_replica_db_instance_identifiers: Option<Vec<String>>,
    /// Aurora clusters replicating from this instance
    #[serde(
        rename = "ReadReplicaDBClusterIdentifiers",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_replica_db_cluster_identifiers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_memberships: Option<Vec<OptionGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    /// Failover target zone for multi-AZ deployments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_infos: Option<Vec<DbInstanceStatusInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tde_credential_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_instance_port: Option<i32>,
    /// Cluster this instance belongs to, for cluster members
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Region-unique immutable identifier, used in KMS log entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbi_resource_id: Option<String>,
    #[serde(
        rename = "CACertificateIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub ca_certificate_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_memberships: Option<Vec<DomainMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    /// Seconds between enhanced monitoring samples; 0 when disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_monitoring_resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,
    /// Failover priority, 0 (highest) through 15
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i32>,
    #[serde(rename = "DBInstanceArn", skip_serializing_if = "Option::is_none")]
    pub db_instance_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub iam_database_authentication_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_enabled: Option<bool>,
    #[serde(
        rename = "PerformanceInsightsKMSKeyId",
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_insights_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_roles: Option<Vec<DbInstanceRole>>,
    /// On-premises interface endpoint for RDS on VMware
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_endpoint: Option<Endpoint>,
    /// Storage autoscaling ceiling in gibibytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allocated_storage: Option<i32>,
}

impl DbInstance {
    /// DNS address of the instance's endpoint, if reported
    #[must_use]
    pub fn endpoint_address(&self) -> Option<&str> {
        self.endpoint.as_ref()?.address.as_deref()
    }

    /// True when this instance replicates from another instance
    #[must_use]
    pub fn is_read_replica(&self) -> bool {
        self.read_replica_source_db_instance_identifier.is_some()
    }

    /// True when a modification is waiting to be applied
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.pending_modified_values
            .as_ref()
            .is_some_and(|p| *p != PendingModifiedValues::default())
    }
}

/// Request for the create-DB-instance-read-replica operation
///
/// Most attributes default to the source instance's values when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbInstanceReadReplicaRequest {
    /// Identifier for the new replica
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// Source instance; must have backups enabled
    #[serde(
        rename = "SourceDBInstanceIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub source_db_instance_identifier: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(rename = "DBParameterGroupName", skip_serializing_if = "Option::is_none")]
    pub db_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicly_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Subnet group for a cross-region or cross-VPC replica
    #[serde(rename = "DBSubnetGroupName", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_role_arn: Option<String>,
    /// KMS key for an encrypted replica in another region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Pre-signed source-region URL for a cross-region replica
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_performance_insights: Option<bool>,
    #[serde(
        rename = "PerformanceInsightsKMSKeyId",
        skip_serializing_if = "Option::is_none"
    )]
    pub performance_insights_kms_key_id: Option<String>,
    /// 7 days or a multiple of 31 up to 731
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_insights_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_features: Option<Vec<ProcessorFeature>>,
    /// Revert to the instance class's default processor features
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_processor_features: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl CreateDbInstanceReadReplicaRequest {
    /// Create a request with the replica and source identifiers set
    #[must_use]
    pub fn new(
        db_instance_identifier: impl Into<String>,
        source_db_instance_identifier: impl Into<String>,
    ) -> Self {
        Self {
            db_instance_identifier: Some(db_instance_identifier.into()),
            source_db_instance_identifier: Some(source_db_instance_identifier.into()),
            ..Self::default()
        }
    }

    /// Set the instance class
    #[must_use]
    pub fn with_db_instance_class(mut self, class: impl Into<String>) -> Self {
        self.db_instance_class = Some(class.into());
        self
    }

    /// Set the availability zone
    #[must_use]
    pub fn with_availability_zone(mut self, zone: impl Into<String>) -> Self {
        self.availability_zone = Some(zone.into());
        self
    }

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Make the replica a multi-AZ deployment
    #[must_use]
    pub fn with_multi_az(mut self, multi_az: bool) -> Self {
        self.multi_az = Some(multi_az);
        self
    }

    /// Apply minor engine upgrades automatically
    #[must_use]
    pub fn with_auto_minor_version_upgrade(mut self, upgrade: bool) -> Self {
        self.auto_minor_version_upgrade = Some(upgrade);
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

    /// Set the parameter group
    #[must_use]
    pub fn with_db_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_parameter_group_name = Some(name.into());
        self
    }

    /// Give the replica a public address
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

    /// Set the DB subnet group
    #[must_use]
    pub fn with_db_subnet_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_subnet_group_name = Some(name.into());
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

    /// Set the storage type
    #[must_use]
    pub fn with_storage_type(mut self, storage_type: impl Into<String>) -> Self {
        self.storage_type = Some(storage_type.into());
        self
    }

    /// Copy replica tags to snapshots taken from it
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

    /// Set the KMS key for an encrypted cross-region replica
    #[must_use]
    pub fn with_kms_key_id(mut self, kms_key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(kms_key_id.into());
        self
    }

    /// Set the pre-signed URL for a cross-region replica
    #[must_use]
    pub fn with_pre_signed_url(mut self, url: impl Into<String>) -> Self {
        self.pre_signed_url = Some(url.into());
        self
    }

    /// Enable or disable IAM database authentication
    #[must_use]
    pub fn with_enable_iam_database_authentication(mut self, enable: bool) -> Self {
        self.enable_iam_database_authentication = Some(enable);
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

/// Result of the create-DB-instance-read-replica operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbInstanceReadReplicaResult {
    #[serde(rename = "DBInstance", skip_serializing_if = "Option::is_none")]
    pub db_instance: Option<DbInstance>,
}

/// Request for the describe-DB-instances operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbInstancesRequest {
    /// Describe one specific instance by identifier or ARN
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100; default 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    /// Continuation marker from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeDbInstancesRequest {
    /// Create an empty describe request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe one specific instance
    #[must_use]
    pub fn with_db_instance_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.db_instance_identifier = Some(identifier.into());
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
}

/// One page of describe-DB-instances results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbInstancesResult {
    /// Marker for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(rename = "DBInstances", skip_serializing_if = "Option::is_none")]
    pub db_instances: Option<Vec<DbInstance>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_replica_request_builder() {
        let request = CreateDbInstanceReadReplicaRequest::new("app-replica", "app-primary")
            .with_db_instance_class("db.r5.large")
            .with_availability_zone("us-west-2b")
            .with_enable_performance_insights(true)
            .with_processor_features([ProcessorFeature::new("coreCount", "4")])
            .with_processor_features([ProcessorFeature::new("threadsPerCore", "2")]);

        assert_eq!(
            request.source_db_instance_identifier.as_deref(),
            Some("app-primary")
        );
        assert_eq!(request.processor_features.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_instance_helpers() {
        let instance = DbInstance {
            endpoint: Some(Endpoint {
                address: Some("app.cluster.us-west-2.example.com".to_string()),
                port: Some(5432),
                hosted_zone_id: None,
            }),
            read_replica_source_db_instance_identifier: Some("app-primary".to_string()),
            ..DbInstance::default()
        };
        assert_eq!(
            instance.endpoint_address(),
            Some("app.cluster.us-west-2.example.com")
        );
        assert!(instance.is_read_replica());
        assert!(!instance.has_pending_changes());

        let pending = DbInstance {
            pending_modified_values: Some(PendingModifiedValues {
                db_instance_class: Some("db.r5.xlarge".to_string()),
                ..PendingModifiedValues::default()
            }),
            ..DbInstance::default()
        };
        assert!(pending.has_pending_changes());
    }

    #[test]
    fn test_instance_deserializes_nested_records() {
        let payload = r#"{
            "DBInstanceIdentifier": "app-primary",
            "DBInstanceClass": "db.r5.large",
            "DBInstanceStatus": "available",
            "DBSubnetGroup": {
                "DBSubnetGroupName": "app-subnets",
                "VpcId": "vpc-0a1b2c3d",
                "Subnets": [
                    {"SubnetIdentifier": "subnet-1", "SubnetAvailabilityZone": {"Name": "us-west-2a"}}
                ]
            },
            "StatusInfos": [
                {"StatusType": "read replication", "Normal": true, "Status": "replicating"}
            ]
        }"#;
        let instance: DbInstance = serde_json::from_str(payload).unwrap();
        let subnet_group = instance.db_subnet_group.unwrap();
        assert_eq!(subnet_group.db_subnet_group_name.as_deref(), Some("app-subnets"));
        assert_eq!(subnet_group.subnets.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            instance.status_infos.unwrap()[0].normal,
            Some(true)
        );
    }

    #[test]
    fn test_describe_request_absent_fields_omitted() {
        let request = DescribeDbInstancesRequest::new().with_max_records(20);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"MaxRecords":20}"#);
    }
}
