//! Orderable DB instance option models
//!
//! Describes which engine, instance class, and zone combinations can be
//! ordered, and what each combination supports.

use serde::{Deserialize, Serialize};

use super::common::{AvailabilityZone, AvailableProcessorFeature, Filter};

/// An engine/class/zone combination available for new DB instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderableDbInstanceOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<AvailabilityZone>>,
    #[serde(rename = "MultiAZCapable", skip_serializing_if = "Option::is_none")]
    pub multi_az_capable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_replica_capable: Option<bool>,
    /// True when the offering is VPC-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_storage_encryption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_iops: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_enhanced_monitoring: Option<bool>,
    #[serde(
        rename = "SupportsIAMDatabaseAuthentication",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_iam_database_authentication: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_performance_insights: Option<bool>,
    /// Minimum storage for the combination, in gibibytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_storage_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_storage_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_iops_per_db_instance: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iops_per_db_instance: Option<i32>,
    /// Minimum provisioned IOPS per GiB of storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_iops_per_gib: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iops_per_gib: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_processor_features: Option<Vec<AvailableProcessorFeature>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_engine_modes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_storage_autoscaling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_kerberos_authentication: Option<bool>,
}

/// Request for the describe-orderable-DB-instance-options operation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrderableDbInstanceOptionsRequest {
    /// Engine to list offerings for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    /// Only offerings for this engine version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// Only offerings for this instance class
    #[serde(rename = "DBInstanceClass", skip_serializing_if = "Option::is_none")]
    pub db_instance_class: Option<String>,
    /// Only offerings with this license model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_model: Option<String>,
    /// Only VPC or only non-VPC offerings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    /// Page size, between 20 and 100; default 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    /// Continuation marker from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

impl DescribeOrderableDbInstanceOptionsRequest {
    /// Create a describe request for one engine
    #[must_use]
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: Some(engine.into()),
            ..Self::default()
        }
    }

    /// Restrict to one engine version
    #[must_use]
    pub fn with_engine_version(mut self, version: impl Into<String>) -> Self {
        self.engine_version = Some(version.into());
        self
    }

    /// Restrict to one instance class
    #[must_use]
    pub fn with_db_instance_class(mut self, class: impl Into<String>) -> Self {
        self.db_instance_class = Some(class.into());
        self
    }

    /// Restrict to one license model
    #[must_use]
    pub fn with_license_model(mut self, model: impl Into<String>) -> Self {
        self.license_model = Some(model.into());
        self
    }

    /// Restrict to VPC or non-VPC offerings
    #[must_use]
    pub fn with_vpc(mut self, vpc: bool) -> Self {
        self.vpc = Some(vpc);
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

/// One page of describe-orderable-DB-instance-options results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrderableDbInstanceOptionsResult {
    #[serde(
        rename = "OrderableDBInstanceOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub orderable_db_instance_options: Option<Vec<OrderableDbInstanceOption>>,
    /// Marker for the next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request_engine_required_fields() {
        let request = DescribeOrderableDbInstanceOptionsRequest::new("postgres")
            .with_db_instance_class("db.m5.large")
            .with_vpc(true);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Engine"], "postgres");
        assert_eq!(json["DBInstanceClass"], "db.m5.large");
        assert_eq!(json["Vpc"], true);
        assert!(json.get("LicenseModel").is_none());
    }

    #[test]
    fn test_option_deserializes_fractional_iops_ratio() {
        let payload = r#"{
            "Engine": "postgres",
            "DBInstanceClass": "db.m5.large",
            "StorageType": "io1",
            "SupportsIops": true,
            "MinIopsPerGib": 0.5,
            "MaxIopsPerGib": 50.0,
            "AvailabilityZones": [{"Name": "us-west-2a"}, {"Name": "us-west-2b"}]
        }"#;
        let option: OrderableDbInstanceOption = serde_json::from_str(payload).unwrap();
        assert_eq!(option.min_iops_per_gib, Some(0.5));
        assert_eq!(option.availability_zones.as_ref().map(Vec::len), Some(2));
        assert_eq!(option.multi_az_capable, None);
    }
}
