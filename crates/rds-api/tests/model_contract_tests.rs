//! Contract tests for the model layer
//!
//! Exercises the properties every request shape shares: builder and
//! field-assignment equivalence, appending sequence setters, absence being
//! distinct from zero values, and absent members staying out of the
//! serialized form.

use pretty_assertions::assert_eq;

use rds_api::model::{
    CreateDbClusterRequest, DescribeDbSnapshotsRequest, Filter, ModifyDbClusterRequest, Tag,
};

#[test]
fn describe_snapshots_request_round_trip() {
    let request = DescribeDbSnapshotsRequest::new()
        .with_db_instance_identifier("db1")
        .with_max_records(50);

    assert_eq!(request.db_instance_identifier.as_deref(), Some("db1"));
    assert_eq!(request.max_records, Some(50));
    assert_eq!(request.filters, None);

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains(r#""DBInstanceIdentifier":"db1""#));
    assert!(json.contains(r#""MaxRecords":50"#));
    assert!(!json.contains("Filters"));
}

#[test]
fn setting_then_clearing_returns_to_absent() {
    let mut request = DescribeDbSnapshotsRequest::new().with_snapshot_type("manual");
    assert_eq!(request.snapshot_type.as_deref(), Some("manual"));

    request.snapshot_type = None;
    assert_eq!(request, DescribeDbSnapshotsRequest::new());
}

#[test]
fn builder_equals_field_assignment() {
    let built = CreateDbClusterRequest::new("prod", "aurora-postgresql")
        .with_port(5432)
        .with_deletion_protection(true)
        .with_tags([Tag::new("team", "storage")]);

    let mut assigned = CreateDbClusterRequest::default();
    assigned.db_cluster_identifier = Some("prod".to_string());
    assigned.engine = Some("aurora-postgresql".to_string());
    assigned.port = Some(5432);
    assigned.deletion_protection = Some(true);
    assigned.tags = Some(vec![Tag::new("team", "storage")]);

    assert_eq!(built, assigned);
}

#[test]
fn equality_is_reflexive_and_symmetric() {
    let a = ModifyDbClusterRequest::new("prod").with_backup_retention_period(7);
    let b = ModifyDbClusterRequest::new("prod").with_backup_retention_period(7);

    assert_eq!(a, a.clone());
    assert_eq!(a == b, b == a);
    assert_eq!(a, b);

    // any single differing field breaks equality
    let c = b.clone().with_apply_immediately(true);
    assert_ne!(a, c);
}

#[test]
fn absence_is_distinct_from_zero_values() {
    let absent = ModifyDbClusterRequest::new("prod");

    assert_ne!(absent, absent.clone().with_backup_retention_period(0));
    assert_ne!(absent, absent.clone().with_apply_immediately(false));
    assert_ne!(absent, absent.clone().with_master_user_password(""));
}

#[test]
fn sequence_setters_append_instead_of_replacing() {
    let one = Filter::new("db-instance-id").with_values(["db1"]);
    let two = Filter::new("engine").with_values(["aurora"]);

    let request = DescribeDbSnapshotsRequest::new()
        .with_filters([one.clone()])
        .with_filters([two.clone()]);

    assert_eq!(request.filters, Some(vec![one, two]));
}

#[test]
fn serialized_form_omits_every_absent_member() {
    let request = CreateDbClusterRequest::new("prod", "aurora-mysql");
    let json = serde_json::to_value(&request).unwrap();
    let members = json.as_object().unwrap();

    // only the two populated members appear
    assert_eq!(members.len(), 2);
    assert!(members.contains_key("DBClusterIdentifier"));
    assert!(members.contains_key("Engine"));
}
