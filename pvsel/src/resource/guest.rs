//! Guests: QEMU virtual machines and LXC containers.

use serde::{Deserialize, Serialize};

use super::{flag, text, yes_no};
use crate::matcher::{Comparison, FieldResolver, Resolved};

/// A virtual machine as listed by the cluster resources endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub vmid: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// running, stopped, paused, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,

    /// Tags joined with `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(default, deserialize_with = "flag")]
    pub template: bool,
}

impl FieldResolver for VirtualMachine {
    const KIND: &'static str = "virtual machine";
    const FIELDS: &'static [&'static str] = &["status", "tags", "pool", "name", "template"];
    const COMPARISONS: &'static [(&'static str, Comparison)] = &[("tags", Comparison::TagList)];

    fn resolve(&self, field: &str) -> Option<Resolved<'_>> {
        let value = match field {
            "status" => text(&self.status),
            "tags" => text(&self.tags),
            "pool" => text(&self.pool),
            "name" => text(&self.name),
            "template" => yes_no(self.template),
            _ => return None,
        };
        Some(value)
    }
}

/// A container as listed by the cluster resources endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub vmid: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<String>,

    /// Tags joined with `;`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl FieldResolver for Container {
    const KIND: &'static str = "container";
    const FIELDS: &'static [&'static str] = &["status", "tags", "pool", "name"];
    const COMPARISONS: &'static [(&'static str, Comparison)] = &[("tags", Comparison::TagList)];

    fn resolve(&self, field: &str) -> Option<Resolved<'_>> {
        let value = match field {
            "status" => text(&self.status),
            "tags" => text(&self.tags),
            "pool" => text(&self.pool),
            "name" => text(&self.name),
            _ => return None,
        };
        Some(value)
    }
}
