//! Physical disks attached to a node.

use serde::{Deserialize, Serialize};

use super::{flag, text, yes_no};
use crate::matcher::{FieldResolver, Resolved};

/// A physical disk on a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    /// Device path, e.g. /dev/sda.
    pub devpath: String,

    /// hdd, ssd, nvme, usb, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,

    /// SMART health (PASSED, OK, UNKNOWN, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,

    /// What the disk is used by (LVM, ZFS, partitions, ...), absent when unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    #[serde(default, deserialize_with = "flag")]
    pub gpt: bool,

    #[serde(default, deserialize_with = "flag")]
    pub mounted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl FieldResolver for Disk {
    const KIND: &'static str = "disk";
    const FIELDS: &'static [&'static str] = &["type", "health", "used", "node", "gpt", "mounted"];

    fn resolve(&self, field: &str) -> Option<Resolved<'_>> {
        let value = match field {
            "type" => text(&self.disk_type),
            "health" => text(&self.health),
            "used" => text(&self.used),
            "node" => text(&self.node),
            "gpt" => yes_no(self.gpt),
            "mounted" => yes_no(self.mounted),
            _ => return None,
        };
        Some(value)
    }
}
