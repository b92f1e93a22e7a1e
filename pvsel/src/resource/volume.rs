//! Storage volumes (guest disks, ISOs, templates, backups).

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::text;
use crate::matcher::{FieldResolver, Resolved};

/// A volume in a storage's content listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume identifier, `<storage>:<name>`.
    pub volid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// raw, qcow2, subvol, iso, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    /// images, rootdir, iso, vztmpl, backup, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Owner guest type (qemu, lxc), when the volume belongs to a guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmid: Option<u32>,
}

impl Volume {
    /// Explicit name, or the part of the volid after the storage prefix.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self
                .volid
                .split_once(':')
                .map_or(self.volid.as_str(), |(_, name)| name),
        }
    }
}

impl FieldResolver for Volume {
    const KIND: &'static str = "volume";
    const FIELDS: &'static [&'static str] =
        &["format", "storage", "node", "content", "resource_type", "name"];

    fn resolve(&self, field: &str) -> Option<Resolved<'_>> {
        let value = match field {
            "format" => text(&self.format),
            "storage" => text(&self.storage),
            "node" => text(&self.node),
            "content" => text(&self.content),
            "resource_type" => text(&self.resource_type),
            "name" => Some(Cow::Borrowed(self.display_name())),
            _ => return None,
        };
        Some(value)
    }
}
