// Copyright (c) 2026 - Stratus Labs
//! Partition Resolution for Region Strings
//!
//! Maps a region string to its deployment partition and the DNS domain suffix
//! used for service endpoints in that partition. Resolution is a pure prefix
//! scan over a static table; the commercial partition is the fallback, so
//! every resolved region string maps to exactly one partition.
//!
//! # Examples
//!
//! ```rust
//! use cloud_infrastructure_bindings::domain::{resolve_partition, Partition};
//!
//! let info = resolve_partition("cn-north-1").unwrap();
//! assert_eq!(info.partition, Partition::AwsCn);
//! assert_eq!(info.domain_suffix, "amazonaws.com.cn");
//!
//! // Regions outside every special prefix fall back to the commercial partition
//! let info = resolve_partition("us-east-1").unwrap();
//! assert_eq!(info.partition, Partition::Aws);
//! assert_eq!(info.domain_suffix, "amazonaws.com");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::errors::{BindingError, BindingResult};

/// Marker that prefixes unresolved deferred values in the host
/// infrastructure-as-code framework (`${Token[...]}` syntax)
const UNRESOLVED_MARKER: &str = "${Token[";

/// Deployment partition taxonomy
///
/// A partition is a top-level deployment realm (commercial, China, government,
/// isolated) that selects the regional endpoint domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Partition {
    /// Standard commercial partition
    Aws,
    /// China partition
    AwsCn,
    /// US government partition (GovCloud)
    AwsUsGov,
    /// US isolated partition
    AwsIso,
    /// US isolated partition B
    AwsIsoB,
    /// US isolated partition F
    AwsIsoF,
    /// European isolated partition
    AwsIsoE,
}

impl Partition {
    /// Get the canonical partition code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::AwsCn => "aws-cn",
            Self::AwsUsGov => "aws-us-gov",
            Self::AwsIso => "aws-iso",
            Self::AwsIsoB => "aws-iso-b",
            Self::AwsIsoF => "aws-iso-f",
            Self::AwsIsoE => "aws-iso-e",
        }
    }

    /// Parse from a partition code
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aws" => Some(Self::Aws),
            "aws-cn" => Some(Self::AwsCn),
            "aws-us-gov" => Some(Self::AwsUsGov),
            "aws-iso" => Some(Self::AwsIso),
            "aws-iso-b" => Some(Self::AwsIsoB),
            "aws-iso-f" => Some(Self::AwsIsoF),
            "aws-iso-e" => Some(Self::AwsIsoE),
            _ => None,
        }
    }

    /// Get the DNS domain suffix for endpoints in this partition
    pub fn domain_suffix(&self) -> &'static str {
        match self {
            Self::Aws | Self::AwsUsGov => "amazonaws.com",
            Self::AwsCn => "amazonaws.com.cn",
            Self::AwsIso => "c2s.ic.gov",
            Self::AwsIsoB => "sc2s.sgov.gov",
            Self::AwsIsoF => "csp.hci.ic.gov",
            Self::AwsIsoE => "cloud.adc-e.uk",
        }
    }
}

impl Default for Partition {
    fn default() -> Self {
        Self::Aws
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved partition information for a region
///
/// Suffixes are static table data, so the value is `Copy` and serializes
/// without owning its strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PartitionInfo {
    /// The deployment partition the region belongs to
    pub partition: Partition,
    /// DNS suffix appended to service endpoint hostnames in the partition
    pub domain_suffix: &'static str,
}

impl PartitionInfo {
    /// Partition info for a partition, using its canonical domain suffix
    pub fn of(partition: Partition) -> Self {
        Self {
            partition,
            domain_suffix: partition.domain_suffix(),
        }
    }
}

impl fmt::Display for PartitionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.partition, self.domain_suffix)
    }
}

/// Region prefixes with a partition other than the commercial fallback
///
/// The prefixes are disjoint by construction. Resolution still picks the
/// longest matching prefix so a future overlapping entry cannot make the
/// result depend on table order.
const PARTITION_PREFIXES: &[(&str, Partition)] = &[
    ("cn-", Partition::AwsCn),
    ("us-gov-", Partition::AwsUsGov),
    ("us-iso-", Partition::AwsIso),
    ("us-isob-", Partition::AwsIsoB),
    ("us-isof-", Partition::AwsIsoF),
    ("eu-isoe-", Partition::AwsIsoE),
];

/// Check whether a region value is an unresolved deferred-value placeholder
///
/// Placeholders come from the host infrastructure-as-code framework and carry
/// no region information at synthesis time, so they must never be matched
/// against the partition table.
pub fn region_is_unresolved(region: &str) -> bool {
    region.contains(UNRESOLVED_MARKER)
}

/// Resolve a region string to its partition and endpoint domain suffix
///
/// # Invariants
/// - Total over resolved inputs: every region string yields exactly one
///   [`PartitionInfo`]; unmatched regions fall back to the commercial
///   partition
/// - Deterministic: the longest matching table prefix wins
///
/// # Errors
/// Returns [`BindingError::UnresolvedRegion`] when the region value still
/// contains a deferred-value placeholder.
pub fn resolve_partition(region: &str) -> BindingResult<PartitionInfo> {
    if region_is_unresolved(region) {
        return Err(BindingError::UnresolvedRegion(region.to_string()));
    }

    let mut resolved = PartitionInfo::of(Partition::Aws);
    let mut matched_len = 0;
    for &(prefix, partition) in PARTITION_PREFIXES {
        if region.starts_with(prefix) && prefix.len() > matched_len {
            resolved = PartitionInfo::of(partition);
            matched_len = prefix.len();
        }
    }

    trace!(region, partition = %resolved.partition, "resolved region partition");
    Ok(resolved)
}
