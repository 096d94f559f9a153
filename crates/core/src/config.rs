//! Partition options via TOML
//!
//! Engines that expose partitioning behaviour to their users can embed a
//! `[partition]`-style table in their own config and hand the text to
//! [`PartitionOptions::from_toml_str`]. Every field has a default, so an empty
//! document yields [`PartitionOptions::default`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Order in which partitioning returns equivalence sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassOrder {
    /// Ascending set size, ties by key, then by first appearance
    ///
    /// Small classes first: they constrain a matching search the most.
    #[default]
    Size,
    /// Ascending class key, then by first appearance
    Key,
    /// Order in which each class's first member appeared in the input
    FirstSeen,
}

/// Partitioning configuration
///
/// # Example
///
/// ```toml
/// # "size" (default), "key" or "first_seen"
/// order = "size"
///
/// # Confirm bucket membership with `equivalent` (default: true).
/// verify_members = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartitionOptions {
    /// Order of the returned sets
    #[serde(default)]
    pub order: ClassOrder,
    /// Confirm each member against its set's representative
    ///
    /// Disable only for faithful policies, where equal keys already imply
    /// equivalence; hash-keyed policies would merge colliding classes.
    #[serde(default = "default_verify_members")]
    pub verify_members: bool,
}

fn default_verify_members() -> bool {
    true
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            order: ClassOrder::default(),
            verify_members: default_verify_members(),
        }
    }
}

impl PartitionOptions {
    /// Parse options from a TOML document
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML, unknown fields, or an
    /// unknown `order` value.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: PartitionOptions = toml::from_str(text)?;
        debug!(
            order = ?options.order,
            verify_members = options.verify_members,
            "Loaded partition options"
        );
        Ok(options)
    }

    /// Set the order, builder style
    pub fn with_order(mut self, order: ClassOrder) -> Self {
        self.order = order;
        self
    }

    /// Set member verification, builder style
    pub fn with_verify_members(mut self, verify: bool) -> Self {
        self.verify_members = verify;
        self
    }

    /// Returns the default options document with comments.
    pub fn default_toml() -> &'static str {
        r#"# Partition options
#
# Order of returned equivalence sets:
#   "size"       = ascending set size, ties by class key (default)
#   "key"        = ascending class key
#   "first_seen" = order of first appearance in the input
order = "size"

# Confirm each member with `equivalent` before joining a set (default: true).
# Only disable for policies whose class keys never collide.
verify_members = true
"#
    }
}
