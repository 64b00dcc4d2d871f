//! Control-plane API module
//!
//! List operations for clusters, services, tasks, container instances and
//! task definitions.
//!
//! # Overview
//!
//! - [`ListOperation`] - per-operation wire names (action, cursor, page size, results)
//! - Typed requests such as [`ListTasks`] with builder-style filters
//! - [`Validate`] - client-side checks run before anything is sent
//! - [`ControlPlaneClient`] - JSON-RPC transport, also the paginator's fetcher

mod client;
mod operation;
mod requests;
pub mod validate;

pub use client::{ControlPlaneClient, DEFAULT_TARGET_PREFIX, RPC_CONTENT_TYPE, TARGET_HEADER};
pub use operation::{ListOperation, ListRequest, DEFAULT_CURSOR_FIELD, DEFAULT_PAGE_SIZE_FIELD};
pub use requests::{
    ContainerInstanceStatus, DesiredStatus, LaunchType, ListClusters, ListContainerInstances,
    ListServices, ListTaskDefinitionFamilies, ListTaskDefinitions, ListTasks, SchedulingStrategy,
    SortOrder, TaskDefinitionFamilyStatus, TaskDefinitionStatus,
};
pub use validate::Validate;
