//! Resource record types and their selector field tables.
//!
//! Records mirror the JSON the cluster API returns for each kind. The engine
//! never constructs them; they are read-only inputs.

mod disk;
mod guest;
mod volume;

pub use disk::Disk;
pub use guest::{Container, VirtualMachine};
pub use volume::Volume;

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};

use crate::matcher::{FieldResolver, ResourceFilter, Resolved};

/// Selector bound to virtual machines.
pub type VmSelector<'s> = ResourceFilter<'s, VirtualMachine>;
/// Selector bound to containers.
pub type ContainerSelector<'s> = ResourceFilter<'s, Container>;
/// Selector bound to physical disks.
pub type DiskSelector<'s> = ResourceFilter<'s, Disk>;
/// Selector bound to virtual volumes.
pub type VolumeSelector<'s> = ResourceFilter<'s, Volume>;

/// Resource kinds that selectors can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    VirtualMachine,
    Container,
    Disk,
    Volume,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::VirtualMachine,
        ResourceKind::Container,
        ResourceKind::Disk,
        ResourceKind::Volume,
    ];

    /// Supported selector fields for this kind.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::VirtualMachine => VirtualMachine::FIELDS,
            ResourceKind::Container => Container::FIELDS,
            ResourceKind::Disk => Disk::FIELDS,
            ResourceKind::Volume => Volume::FIELDS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::VirtualMachine => VirtualMachine::KIND,
            ResourceKind::Container => Container::KIND,
            ResourceKind::Disk => Disk::KIND,
            ResourceKind::Volume => Volume::KIND,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrow an optional string attribute as a field value.
fn text(value: &Option<String>) -> Resolved<'_> {
    value.as_deref().map(Cow::Borrowed)
}

/// Boolean attributes are exposed to selectors as "yes" / "no".
fn yes_no(flag: bool) -> Resolved<'static> {
    Some(Cow::Borrowed(if flag { "yes" } else { "no" }))
}

/// Deserialize an API flag that may be a bool, a 0/1 integer, or a string.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(n)) => n != 0,
        Some(Flag::Text(s)) => matches!(s.as_str(), "1" | "yes" | "true"),
    })
}
