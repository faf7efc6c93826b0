// Copyright (c) 2026 - Stratus Labs
//! Binding Domain Models
//!
//! Value objects for the infrastructure binding layer.
//!
//! # Value Objects
//!
//! - [`Partition`] / [`PartitionInfo`] - deployment partition taxonomy and the
//!   resolved region → partition mapping
//! - [`KeyLookupOptions`] - shape-only descriptor for key lookup by alias
//!
//! # Operations
//!
//! - [`resolve_partition`] - pure longest-prefix resolution of a region string
//! - [`region_is_unresolved`] - deferred-value placeholder detection

pub mod key_lookup;
pub mod partition;

// Re-export value objects
pub use key_lookup::KeyLookupOptions;
pub use partition::{region_is_unresolved, resolve_partition, Partition, PartitionInfo};
