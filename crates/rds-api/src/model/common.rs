//! Shared model types referenced across operations
//!
//! These are the small value objects that request and response shapes
//! embed: resource tags, describe filters, processor features, and the
//! membership/endpoint records returned inside larger payloads.

use serde::{Deserialize, Serialize};

/// A key/value pair attached to a resource
///
/// Keys and values each allow up to 128 and 256 printable characters and
/// must not start with `aws:`; the service enforces both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tag value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Create a tag with both key and value set
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// Set the tag key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the tag value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A name/values filter narrowing a describe operation
///
/// Filter names and the values accepted for each are documented per
/// operation; unsupported names are rejected by the service, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    /// Name of the filter, e.g. `db-instance-id` or `engine`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// One or more filter values, combined with OR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Filter {
    /// Create a filter with its name set
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            values: None,
        }
    }

    /// Set the filter name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append filter values, initializing the list if absent
    #[must_use]
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }
}

/// A processor feature override for a DB instance class
///
/// Currently the service understands `coreCount` and `threadsPerCore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorFeature {
    /// Feature name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Feature value, as a string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ProcessorFeature {
    /// Create a processor feature with name and value set
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    /// Set the feature name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the feature value
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// A processor feature an orderable instance class supports, with its
/// default and allowed values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailableProcessorFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
}

/// An availability zone a resource or offering is placed in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvailabilityZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The connection endpoint of a DB instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    /// DNS address of the instance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Port the database engine listens on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// Hosted zone ID of the endpoint's DNS record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

/// Membership of a DB cluster or instance in an Active Directory domain
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainMembership {
    /// Domain identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Membership status, e.g. `joined` or `pending-join`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "FQDN", skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    /// IAM role used when joining the domain
    #[serde(rename = "IAMRoleName", skip_serializing_if = "Option::is_none")]
    pub iam_role_name: Option<String>,
}

/// Membership of a resource in a VPC security group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VpcSecurityGroupMembership {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_id: Option<String>,
    /// Membership status, e.g. `active`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_new_equals_builder() {
        let a = Tag::new("env", "prod");
        let b = Tag::default().with_key("env").with_value("prod");
        assert_eq!(a, b);
    }

    #[test]
    fn test_filter_values_append() {
        let filter = Filter::new("engine")
            .with_values(["aurora"])
            .with_values(["aurora-postgresql"]);
        assert_eq!(
            filter.values,
            Some(vec![
                "aurora".to_string(),
                "aurora-postgresql".to_string()
            ])
        );
    }

    #[test]
    fn test_absent_is_not_empty() {
        // An unset value and an empty string are different states.
        let absent = Tag::default().with_key("env");
        let empty = Tag::default().with_key("env").with_value("");
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_serialized_form_omits_absent_fields() {
        let filter = Filter::new("db-instance-id");
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"Name":"db-instance-id"}"#);
    }
}
