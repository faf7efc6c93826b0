// Copyright (c) 2026 - Stratus Labs
//! Partition Resolution Tests
//!
//! Verifies the region → partition table against the full set of known
//! prefixes, the commercial fallback, and the unresolved-placeholder guard.

use pretty_assertions::assert_eq;
use test_case::test_case;

use cloud_infrastructure_bindings::{
    resolve_partition, BindingError, Partition, PartitionInfo,
};

#[test_case("cn-north-1", Partition::AwsCn ; "china")]
#[test_case("us-gov-west-1", Partition::AwsUsGov ; "govcloud")]
#[test_case("us-iso-east-1", Partition::AwsIso ; "iso")]
#[test_case("us-isob-east-1", Partition::AwsIsoB ; "isob")]
#[test_case("us-isof-south-1", Partition::AwsIsoF ; "isof")]
#[test_case("eu-isoe-west-1", Partition::AwsIsoE ; "isoe")]
#[test_case("us-east-1", Partition::Aws ; "commercial")]
fn test_known_prefixes_resolve(region: &str, expected: Partition) {
    let info = resolve_partition(region).unwrap();
    assert_eq!(info, PartitionInfo::of(expected));
}

#[test]
fn test_domain_suffixes_match_partition_table() {
    assert_eq!(
        resolve_partition("cn-north-1").unwrap().domain_suffix,
        "amazonaws.com.cn"
    );
    assert_eq!(
        resolve_partition("us-gov-east-1").unwrap().domain_suffix,
        "amazonaws.com"
    );
    assert_eq!(
        resolve_partition("us-iso-east-1").unwrap().domain_suffix,
        "c2s.ic.gov"
    );
    assert_eq!(
        resolve_partition("eu-isoe-west-1").unwrap().domain_suffix,
        "cloud.adc-e.uk"
    );
    assert_eq!(
        resolve_partition("sa-east-1").unwrap().domain_suffix,
        "amazonaws.com"
    );
}

#[test]
fn test_iso_prefixes_do_not_shadow_each_other() {
    // us-iso- and us-isob- share the "us-iso" stem and must not misclassify
    let isob = resolve_partition("us-isob-east-1").unwrap();
    assert_eq!(isob.partition, Partition::AwsIsoB);

    let iso = resolve_partition("us-iso-east-1").unwrap();
    assert_eq!(iso.partition, Partition::AwsIso);
}

#[test]
fn test_placeholder_region_surfaces_error_unmodified() {
    let token = "${Token[AWS.Region.5]}";
    let err = resolve_partition(token).unwrap_err();
    assert_eq!(err, BindingError::UnresolvedRegion(token.to_string()));
    assert!(err.to_string().contains("unresolved placeholder"));
}

#[test]
fn test_prefix_must_match_start_of_region() {
    // A prefix appearing mid-string does not reclassify the region
    let info = resolve_partition("region-cn-lookalike").unwrap();
    assert_eq!(info.partition, Partition::Aws);
}
