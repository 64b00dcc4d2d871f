//! Typed list requests
//!
//! Filter fields serialize as camelCase JSON. The cursor and page size are
//! skipped here and written by the operation descriptor under its own
//! field names.

use super::operation::{ListOperation, ListRequest};
use super::validate::{self, Validate};
use crate::error::{Error, Result};
use crate::pagination::{Cursor, PagedQuery};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Wire Enums
// ============================================================================

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every accepted value
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Value as sent on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        // Accepts "FARGATE", "fargate" and "delete-in-progress" style input.
        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(&wanted))
                    .ok_or_else(|| {
                        let expected: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                        Error::validation(
                            stringify!($name),
                            format!("unknown value '{s}', expected one of {}", expected.join(", ")),
                        )
                    })
            }
        }
    };
}

wire_enum! {
    /// Infrastructure a task or service runs on
    LaunchType {
        Ec2 => "EC2",
        Fargate => "FARGATE",
        External => "EXTERNAL",
    }
}

wire_enum! {
    /// How a service places its tasks
    SchedulingStrategy {
        Replica => "REPLICA",
        Daemon => "DAEMON",
    }
}

wire_enum! {
    /// Desired status filter for tasks
    DesiredStatus {
        Running => "RUNNING",
        Pending => "PENDING",
        Stopped => "STOPPED",
    }
}

wire_enum! {
    /// Container instance lifecycle status
    ContainerInstanceStatus {
        Active => "ACTIVE",
        Draining => "DRAINING",
        Registering => "REGISTERING",
        Deregistering => "DEREGISTERING",
        RegistrationFailed => "REGISTRATION_FAILED",
    }
}

wire_enum! {
    /// Task definition revision status
    TaskDefinitionStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        DeleteInProgress => "DELETE_IN_PROGRESS",
    }
}

wire_enum! {
    /// Task definition family status filter
    TaskDefinitionFamilyStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        All => "ALL",
    }
}

wire_enum! {
    /// Result ordering
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

// ============================================================================
// Requests
// ============================================================================

/// List cluster ARNs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClusters {
    /// Cursor from the previous page
    #[serde(skip)]
    pub next_token: Option<Cursor>,
    /// Page size hint
    #[serde(skip)]
    pub max_results: Option<u32>,
}

impl ListClusters {
    /// Create a request with no filters
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validate for ListClusters {
    fn validate(&self) -> Result<()> {
        validate::page_size("maxResults", self.max_results)
    }
}

/// List service ARNs in a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListServices {
    /// Cluster name or ARN; the default cluster when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Launch type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    /// Scheduling strategy filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_strategy: Option<SchedulingStrategy>,
    /// Cursor from the previous page
    #[serde(skip)]
    pub next_token: Option<Cursor>,
    /// Page size hint
    #[serde(skip)]
    pub max_results: Option<u32>,
}

impl ListServices {
    /// Create a request with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster name or ARN
    #[must_use]
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Filter by launch type
    #[must_use]
    pub fn launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }

    /// Filter by scheduling strategy
    #[must_use]
    pub fn scheduling_strategy(mut self, strategy: SchedulingStrategy) -> Self {
        self.scheduling_strategy = Some(strategy);
        self
    }
}

impl Validate for ListServices {
    fn validate(&self) -> Result<()> {
        validate::non_empty("cluster", self.cluster.as_deref())?;
        validate::page_size("maxResults", self.max_results)
    }
}

/// List task ARNs, optionally narrowed by several filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTasks {
    /// Cluster name or ARN; the default cluster when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Container instance ID or ARN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_instance: Option<String>,
    /// Task definition family
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Value of `startedBy` set when the task was started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_by: Option<String>,
    /// Owning service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    /// Desired status filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<DesiredStatus>,
    /// Launch type filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_type: Option<LaunchType>,
    /// Cursor from the previous page
    #[serde(skip)]
    pub next_token: Option<Cursor>,
    /// Page size hint
    #[serde(skip)]
    pub max_results: Option<u32>,
}

impl ListTasks {
    /// Create a request with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster name or ARN
    #[must_use]
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Filter by container instance ID or ARN
    #[must_use]
    pub fn container_instance(mut self, instance: impl Into<String>) -> Self {
        self.container_instance = Some(instance.into());
        self
    }

    /// Filter by task definition family
    #[must_use]
    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Filter by the `startedBy` value
    #[must_use]
    pub fn started_by(mut self, started_by: impl Into<String>) -> Self {
        self.started_by = Some(started_by.into());
        self
    }

    /// Filter by owning service
    #[must_use]
    pub fn service_name(mut self, service: impl Into<String>) -> Self {
        self.service_name = Some(service.into());
        self
    }

    /// Filter by desired status
    #[must_use]
    pub fn desired_status(mut self, status: DesiredStatus) -> Self {
        self.desired_status = Some(status);
        self
    }

    /// Filter by launch type
    #[must_use]
    pub fn launch_type(mut self, launch_type: LaunchType) -> Self {
        self.launch_type = Some(launch_type);
        self
    }
}

impl Validate for ListTasks {
    fn validate(&self) -> Result<()> {
        validate::non_empty("cluster", self.cluster.as_deref())?;
        validate::non_empty("containerInstance", self.container_instance.as_deref())?;
        validate::non_empty("family", self.family.as_deref())?;
        validate::non_empty("startedBy", self.started_by.as_deref())?;
        validate::non_empty("serviceName", self.service_name.as_deref())?;
        validate::page_size("maxResults", self.max_results)
    }
}

/// List container instance ARNs in a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListContainerInstances {
    /// Cluster name or ARN; the default cluster when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    /// Cluster query language expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Status filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContainerInstanceStatus>,
    /// Cursor from the previous page
    #[serde(skip)]
    pub next_token: Option<Cursor>,
    /// Page size hint
    #[serde(skip)]
    pub max_results: Option<u32>,
}

impl ListContainerInstances {
    /// Create a request with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cluster name or ARN
    #[must_use]
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Set a cluster query language expression
    #[must_use]
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Filter by status
    #[must_use]
    pub fn status(mut self, status: ContainerInstanceStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl Validate for ListContainerInstances {
    fn validate(&self) -> Result<()> {
        validate::non_empty("cluster", self.cluster.as_deref())?;
        validate::non_empty("filter", self.filter.as_deref())?;
        validate::page_size("maxResults", self.max_results)
    }
}

/// List task definition ARNs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitions {
    /// Family name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,
    /// Status filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskDefinitionStatus>,
    /// Result order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortOrder>,
    /// Cursor from the previous page
    #[serde(skip)]
    pub next_token: Option<Cursor>,
    /// Page size hint
    #[serde(skip)]
    pub max_results: Option<u32>,
}

impl ListTaskDefinitions {
    /// Create a request with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by family name prefix
    #[must_use]
    pub fn family_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.family_prefix = Some(prefix.into());
        self
    }

    /// Filter by status
    #[must_use]
    pub fn status(mut self, status: TaskDefinitionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the result order
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl Validate for ListTaskDefinitions {
    fn validate(&self) -> Result<()> {
        validate::non_empty("familyPrefix", self.family_prefix.as_deref())?;
        validate::page_size("maxResults", self.max_results)
    }
}

/// List task definition family names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskDefinitionFamilies {
    /// Family name prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_prefix: Option<String>,
    /// Status filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskDefinitionFamilyStatus>,
    /// Cursor from the previous page
    #[serde(skip)]
    pub next_token: Option<Cursor>,
    /// Page size hint
    #[serde(skip)]
    pub max_results: Option<u32>,
}

impl ListTaskDefinitionFamilies {
    /// Create a request with no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by family name prefix
    #[must_use]
    pub fn family_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.family_prefix = Some(prefix.into());
        self
    }

    /// Filter by status
    #[must_use]
    pub fn status(mut self, status: TaskDefinitionFamilyStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl Validate for ListTaskDefinitionFamilies {
    fn validate(&self) -> Result<()> {
        validate::non_empty("familyPrefix", self.family_prefix.as_deref())?;
        validate::page_size("maxResults", self.max_results)
    }
}

// ============================================================================
// Paging Plumbing
// ============================================================================

macro_rules! list_request {
    ($($request:ident => $operation:expr),+ $(,)?) => {
        $(
            impl PagedQuery for $request {
                fn cursor(&self) -> Option<&Cursor> {
                    self.next_token.as_ref()
                }

                fn set_cursor(&mut self, cursor: Option<Cursor>) {
                    self.next_token = cursor;
                }

                fn set_page_size(&mut self, size: u32) {
                    self.max_results = Some(size);
                }
            }

            impl ListRequest for $request {
                const OPERATION: ListOperation = $operation;

                fn page_size(&self) -> Option<u32> {
                    self.max_results
                }
            }

            impl $request {
                /// Set the page size hint
                #[must_use]
                pub fn max_results(mut self, size: u32) -> Self {
                    self.max_results = Some(size);
                    self
                }

                /// Resume from a cursor returned by an earlier call
                #[must_use]
                pub fn next_token(mut self, cursor: Cursor) -> Self {
                    self.next_token = Some(cursor);
                    self
                }
            }
        )+
    };
}

list_request! {
    ListClusters => ListOperation::new("ListClusters", "clusterArns"),
    ListServices => ListOperation::new("ListServices", "serviceArns"),
    ListTasks => ListOperation::new("ListTasks", "taskArns"),
    ListContainerInstances => ListOperation::new("ListContainerInstances", "containerInstanceArns"),
    ListTaskDefinitions => ListOperation::new("ListTaskDefinitions", "taskDefinitionArns"),
    ListTaskDefinitionFamilies => ListOperation::new("ListTaskDefinitionFamilies", "families"),
}
