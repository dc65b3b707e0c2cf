//! DB cluster models
//!
//! The `DbCluster` payload, the nested records it embeds, and the create,
//! modify, and describe operations. Restore operations live in
//! [`cluster_restore`](super::cluster_restore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{DomainMembership, Filter, Tag, VpcSecurityGroupMembership};

/// Status of an option group associated with a DB cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbClusterOptionGroupStatus {
    #[serde(
        rename = "DBClusterOptionGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// An instance that belongs to a DB cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbClusterMember {
    #[serde(rename = "DBInstanceIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_instance_identifier: Option<String>,
    /// True for the current writer, false for readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cluster_writer: Option<bool>,
    #[serde(
        rename = "DBClusterParameterGroupStatus",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_parameter_group_status: Option<String>,
    /// Failover priority, 0 (highest) through 15
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_tier: Option<i32>,
}

/// An IAM role associated with a DB cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbClusterRole {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    /// `ACTIVE`, `PENDING`, or `INVALID`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_name: Option<String>,
}

/// Serverless scaling properties requested for a DB cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingConfiguration {
    /// Minimum capacity units; must be a value the engine supports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<i32>,
    /// Maximum capacity units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    /// Pause the cluster when idle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,
    /// Idle seconds before an auto-pause
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i32>,
    /// `ForceApplyCapacityChange` or `RollbackCapacityChange`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<String>,
}

impl ScalingConfiguration {
    /// Create an empty scaling configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum capacity
    #[must_use]
    pub fn with_min_capacity(mut self, min_capacity: i32) -> Self {
        self.min_capacity = Some(min_capacity);
        self
    }

    /// Set the maximum capacity
    #[must_use]
    pub fn with_max_capacity(mut self, max_capacity: i32) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Enable or disable pausing when idle
    #[must_use]
    pub fn with_auto_pause(mut self, auto_pause: bool) -> Self {
        self.auto_pause = Some(auto_pause);
        self
    }

    /// Set the idle period before an auto-pause
    #[must_use]
    pub fn with_seconds_until_auto_pause(mut self, seconds: i32) -> Self {
        self.seconds_until_auto_pause = Some(seconds);
        self
    }

    /// Set the capacity-change timeout action
    #[must_use]
    pub fn with_timeout_action(mut self, action: impl Into<String>) -> Self {
        self.timeout_action = Some(action.into());
        self
    }
}

/// Serverless scaling properties currently in effect for a DB cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingConfigurationInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pause: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_until_auto_pause: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_action: Option<String>,
}

/// Log types to start and stop exporting to CloudWatch Logs
///
/// Applied as a delta by the modify operation; types in neither list keep
/// their current state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudwatchLogsExportConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_log_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_log_types: Option<Vec<String>>,
}

impl CloudwatchLogsExportConfiguration {
    /// Create an empty export configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append log types to start exporting
    #[must_use]
    pub fn with_enable_log_types<I, S>(mut self, log_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enable_log_types
            .get_or_insert_with(Vec::new)
            .extend(log_types.into_iter().map(Into::into));
        self
    }

    /// Append log types to stop exporting
    #[must_use]
    pub fn with_disable_log_types<I, S>(mut self, log_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disable_log_types
            .get_or_insert_with(Vec::new)
            .extend(log_types.into_iter().map(Into::into));
        self
    }
}

/// A DB cluster as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DbCluster {
    /// For serverless engine modes, current storage in gibibytes; for
    /// provisioned clusters always 1, storage grows automatically
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Days automated backups are retained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    /// Name of the initial database, if one was created with the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    #[serde(
        rename = "DBClusterParameterGroup",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_parameter_group: Option<String>,
    #[serde(rename = "DBSubnetGroup", skip_serializing_if = "Option::is_none")]
    pub db_subnet_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_progress: Option<String>,
    /// Earliest time a point-in-time restore can target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_restorable_time: Option<DateTime<Utc>>,
    /// Writer endpoint for the cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Load-balanced reader endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reader_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoints: Option<Vec<String>>,
    #[serde(rename = "MultiAZ", skip_serializing_if = "Option::is_none")]
    pub multi_az: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// Latest time a point-in-time restore can target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_restorable_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    #[serde(
        rename = "DBClusterOptionGroupMemberships",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_option_group_memberships: Option<Vec<DbClusterOptionGroupStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    /// Identifier of the source this cluster replicates, if a read replica
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_identifiers: Option<Vec<String>>,
    #[serde(rename = "DBClusterMembers", skip_serializing_if = "Option::is_none")]
    pub db_cluster_members: Option<Vec<DbClusterMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_groups: Option<Vec<VpcSecurityGroupMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// Region-unique immutable identifier, used in KMS log entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cluster_resource_id: Option<String>,
    #[serde(rename = "DBClusterArn", skip_serializing_if = "Option::is_none")]
    pub db_cluster_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_roles: Option<Vec<DbClusterRole>>,
    #[serde(
        rename = "IAMDatabaseAuthenticationEnabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub iam_database_authentication_enabled: Option<bool>,
    /// Identifier shared by a clone and its source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_backtrack_time: Option<DateTime<Utc>>,
    /// Backtrack target window in seconds; 0 when backtracking is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_consumed_change_records: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_cloudwatch_logs_exports: Option<Vec<String>>,
    /// Current serverless capacity; absent for provisioned clusters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    /// `provisioned`, `serverless`, `parallelquery`, `global`, or
    /// `multimaster`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration_info: Option<ScalingConfigurationInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_endpoint_enabled: Option<bool>,
    /// `sync` or `async` when the activity stream is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_kms_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_stream_kinesis_stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    /// True when the cluster is a clone across accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_account_clone: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_memberships: Option<Vec<DomainMembership>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_write_forwarding_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_write_forwarding_requested: Option<bool>,
}

impl DbCluster {
    /// Identifiers of the member instances, writers and readers alike
    #[must_use]
    pub fn member_identifiers(&self) -> Vec<&str> {
        self.db_cluster_members
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|m| m.db_instance_identifier.as_deref())
            .collect()
    }

    /// Identifier of the current writer instance, if reported
    #[must_use]
    pub fn writer_identifier(&self) -> Option<&str> {
        self.db_cluster_members
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|m| m.is_cluster_writer == Some(true))
            .and_then(|m| m.db_instance_identifier.as_deref())
    }
}

/// Request for the create-DB-cluster operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbClusterRequest {
    /// Availability zones instances in the cluster can be created in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    /// Days to retain automated backups, 1 to 35; default 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set_name: Option<String>,
    /// Name of a database to create in the cluster; none created if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    /// Cluster identifier, stored lowercase; 1 to 63 letters, numbers, or
    /// hyphens
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
    /// Database engine, e.g. `aurora-mysql` or `aurora-postgresql`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// Port the instances accept connections on; engine default if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_username: Option<String>,
    /// Master password, 8 to 41 printable characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    /// Daily backup window as `hh24:mi-hh24:mi` UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    /// Weekly maintenance window as `ddd:hh24:mi-ddd:hh24:mi` UTC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    /// Make this cluster a read replica of the given source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_source_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_encrypted: Option<bool>,
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
    /// Backtrack target window in seconds, 0 to disable; up to 72 hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_cloudwatch_logs_exports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_mode: Option<String>,
    /// Scaling properties; only valid with the `serverless` engine mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    /// Add the new cluster as a secondary of this global cluster
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_endpoint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
    /// Active Directory domain to create the cluster in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
}

impl CreateDbClusterRequest {
    /// Create a request with the cluster identifier and engine set
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

    /// Set the engine version
    #[must_use]
    pub fn with_engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    /// Set the port instances accept connections on
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

    /// Make the cluster a read replica of the given source
    #[must_use]
    pub fn with_replication_source_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.replication_source_identifier = Some(identifier.into());
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

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }

    /// Join the new cluster to a global cluster as a secondary
    #[must_use]
    pub fn with_global_cluster_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.global_cluster_identifier = Some(identifier.into());
        self
    }

    /// Enable or disable the HTTP endpoint (serverless only)
    #[must_use]
    pub fn with_enable_http_endpoint(mut self, enable: bool) -> Self {
        self.enable_http_endpoint = Some(enable);
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

/// Result of the create-DB-cluster operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDbClusterResult {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DbCluster>,
}

/// Request for the modify-DB-cluster operation
///
/// Unset fields leave the corresponding cluster attribute unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDbClusterRequest {
    /// Identifier of the cluster to modify
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    /// Rename the cluster
    #[serde(
        rename = "NewDBClusterIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub new_db_cluster_identifier: Option<String>,
    /// Apply changes now instead of during the next maintenance window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_immediately: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_period: Option<i32>,
    #[serde(
        rename = "DBClusterParameterGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_cluster_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_backup_window: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
    #[serde(
        rename = "EnableIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtrack_window: Option<i64>,
    /// Log export changes to apply, as a delta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudwatch_logs_export_configuration: Option<CloudwatchLogsExportConfiguration>,
    /// Upgrade the engine version; requires `apply_immediately` for major
    /// versions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_major_version_upgrade: Option<bool>,
    /// Parameter group applied to member instances during a major version
    /// upgrade
    #[serde(
        rename = "DBInstanceParameterGroupName",
        skip_serializing_if = "Option::is_none"
    )]
    pub db_instance_parameter_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(rename = "DomainIAMRoleName", skip_serializing_if = "Option::is_none")]
    pub domain_iam_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_configuration: Option<ScalingConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_http_endpoint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshot: Option<bool>,
}

impl ModifyDbClusterRequest {
    /// Create a modify request for the given cluster
    #[must_use]
    pub fn new(db_cluster_identifier: impl Into<String>) -> Self {
        Self {
            db_cluster_identifier: Some(db_cluster_identifier.into()),
            ..Self::default()
        }
    }

    /// Returns true when no change is requested
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self
            == Self {
                db_cluster_identifier: self.db_cluster_identifier.clone(),
                ..Self::default()
            }
    }

    /// Rename the cluster
    #[must_use]
    pub fn with_new_db_cluster_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.new_db_cluster_identifier = Some(identifier.into());
        self
    }

    /// Apply changes now instead of in the next maintenance window
    #[must_use]
    pub fn with_apply_immediately(mut self, apply: bool) -> Self {
        self.apply_immediately = Some(apply);
        self
    }

    /// Set the backup retention period in days
    #[must_use]
    pub fn with_backup_retention_period(mut self, days: i32) -> Self {
        self.backup_retention_period = Some(days);
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

    /// Set the port
    #[must_use]
    pub fn with_port(mut self, port: i32) -> Self {
        self.port = Some(port);
        self
    }

    /// Change the master password
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

    /// Set log export changes to apply
    #[must_use]
    pub fn with_cloudwatch_logs_export_configuration(
        mut self,
        configuration: CloudwatchLogsExportConfiguration,
    ) -> Self {
        self.cloudwatch_logs_export_configuration = Some(configuration);
        self
    }

    /// Upgrade the engine version
    #[must_use]
    pub fn with_engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    /// Allow major version upgrades
    #[must_use]
    pub fn with_allow_major_version_upgrade(mut self, allow: bool) -> Self {
        self.allow_major_version_upgrade = Some(allow);
        self
    }

    /// Set the instance parameter group used during major upgrades
    #[must_use]
    pub fn with_db_instance_parameter_group_name(mut self, name: impl Into<String>) -> Self {
        self.db_instance_parameter_group_name = Some(name.into());
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

    /// Set the serverless scaling configuration
    #[must_use]
    pub fn with_scaling_configuration(mut self, configuration: ScalingConfiguration) -> Self {
        self.scaling_configuration = Some(configuration);
        self
    }

    /// Enable or disable deletion protection
    #[must_use]
    pub fn with_deletion_protection(mut self, protect: bool) -> Self {
        self.deletion_protection = Some(protect);
        self
    }

    /// Enable or disable the HTTP endpoint (serverless only)
    #[must_use]
    pub fn with_enable_http_endpoint(mut self, enable: bool) -> Self {
        self.enable_http_endpoint = Some(enable);
        self
    }

    /// Copy cluster tags to snapshots taken from it
    #[must_use]
    pub fn with_copy_tags_to_snapshot(mut self, copy: bool) -> Self {
        self.copy_tags_to_snapshot = Some(copy);
        self
    }
}

/// Result of the modify-DB-cluster operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDbClusterResult {
    #[serde(rename = "DBCluster", skip_serializing_if = "Option::is_none")]
    pub db_cluster: Option<DbCluster>,
}

/// Request for the describe-DB-clusters operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbClustersRequest {
    /// Describe one specific cluster by identifier or ARN
    #[serde(rename = "DBClusterIdentifier", skip_serializing_if = "Option::is_none")]
    pub db_cluster_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100; default 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    /// Continuation marker from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Include clusters shared from other accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shared: Option<bool>,
}

impl DescribeDbClustersRequest {
    /// Create an empty describe request
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe one specific cluster
    #[must_use]
    pub fn with_db_cluster_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.db_cluster_identifier = Some(identifier.into());
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

    /// Include clusters shared from other accounts
    #[must_use]
    pub fn with_include_shared(mut self, include_shared: bool) -> Self {
        self.include_shared = Some(include_shared);
        self
    }
}

/// One page of describe-DB-clusters results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDbClustersResult {
    /// Marker for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(rename = "DBClusters", skip_serializing_if = "Option::is_none")]
    pub db_clusters: Option<Vec<DbCluster>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_new_sets_required_fields() {
        let request = CreateDbClusterRequest::new("prod", "aurora-postgresql");
        assert_eq!(request.db_cluster_identifier.as_deref(), Some("prod"));
        assert_eq!(request.engine.as_deref(), Some("aurora-postgresql"));
        assert_eq!(request.master_username, None);
    }

    #[test]
    fn test_create_request_builder_chain() {
        let request = CreateDbClusterRequest::new("prod", "aurora-mysql")
            .with_master_username("admin")
            .with_master_user_password("correct-horse-battery")
            .with_backup_retention_period(14)
            .with_storage_encrypted(true)
            .with_availability_zones(["us-east-1a", "us-east-1b"])
            .with_availability_zones(["us-east-1c"]);

        assert_eq!(request.backup_retention_period, Some(14));
        assert_eq!(request.storage_encrypted, Some(true));
        // appended across both calls, not replaced
        assert_eq!(request.availability_zones.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_modify_request_is_empty() {
        let untouched = ModifyDbClusterRequest::new("prod");
        assert!(untouched.is_empty());

        let changed = ModifyDbClusterRequest::new("prod").with_port(5432);
        assert!(!changed.is_empty());
    }

    #[test]
    fn test_modify_serializes_renamed_members() {
        let request = ModifyDbClusterRequest::new("prod")
            .with_new_db_cluster_identifier("prod-renamed")
            .with_enable_iam_database_authentication(true);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["DBClusterIdentifier"], "prod");
        assert_eq!(json["NewDBClusterIdentifier"], "prod-renamed");
        assert_eq!(json["EnableIAMDatabaseAuthentication"], true);
        assert!(json.get("ApplyImmediately").is_none());
    }

    #[test]
    fn test_cluster_writer_lookup() {
        let cluster = DbCluster {
            db_cluster_members: Some(vec![
                DbClusterMember {
                    db_instance_identifier: Some("prod-reader-1".to_string()),
                    is_cluster_writer: Some(false),
                    ..DbClusterMember::default()
                },
                DbClusterMember {
                    db_instance_identifier: Some("prod-writer".to_string()),
                    is_cluster_writer: Some(true),
                    ..DbClusterMember::default()
                },
            ]),
            ..DbCluster::default()
        };
        assert_eq!(cluster.writer_identifier(), Some("prod-writer"));
        assert_eq!(
            cluster.member_identifiers(),
            vec!["prod-reader-1", "prod-writer"]
        );

        let empty = DbCluster::default();
        assert_eq!(empty.writer_identifier(), None);
        assert!(empty.member_identifiers().is_empty());
    }

    #[test]
    fn test_cluster_deserializes_from_documented_names() {
        let payload = r#"{
            "DBClusterIdentifier": "prod",
            "Status": "available",
            "MultiAZ": true,
            "IAMDatabaseAuthenticationEnabled": false,
            "BacktrackWindow": 86400,
            "ScalingConfigurationInfo": {"MinCapacity": 2, "MaxCapacity": 64}
        }"#;
        let cluster: DbCluster = serde_json::from_str(payload).unwrap();
        assert_eq!(cluster.db_cluster_identifier.as_deref(), Some("prod"));
        assert_eq!(cluster.multi_az, Some(true));
        assert_eq!(cluster.backtrack_window, Some(86400));
        assert_eq!(
            cluster.scaling_configuration_info,
            Some(ScalingConfigurationInfo {
                min_capacity: Some(2),
                max_capacity: Some(64),
                ..ScalingConfigurationInfo::default()
            })
        );
    }
}
