//! pvsel: selector query engine for cluster resources.
//!
//! Filters virtual machines, containers, disks and volumes with kubectl-style
//! selectors such as `status=running,tags=prod` or `name=~web-*`.

pub mod error;
pub mod matcher;
pub mod resource;
pub mod selector;

pub use error::{Error, Result};
pub use matcher::{Comparison, FieldResolver, ResourceFilter, Resolved};
pub use resource::{
    Container, ContainerSelector, Disk, DiskSelector, ResourceKind, VirtualMachine, VmSelector,
    Volume, VolumeSelector,
};
pub use selector::{Condition, Glob, Operator, Predicate, Selector};
