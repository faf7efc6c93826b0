//! Binding helpers for cloud infrastructure-as-code
//!
//! This crate provides the declarative glue used by an infrastructure-as-code
//! binding layer: region → partition resolution, key-lookup option shapes,
//! and notification-rule capability traits with deterministic test fixtures.

pub mod domain;
pub mod errors;
pub mod notifications;

// Re-export commonly used types
pub use domain::{
    region_is_unresolved, resolve_partition, KeyLookupOptions, Partition, PartitionInfo,
};
pub use errors::{BindingError, BindingResult};
pub use notifications::{
    NotificationRuleSource, NotificationRuleSourceConfig, NotificationRuleTarget,
    NotificationRuleTargetConfig, TargetType,
};
