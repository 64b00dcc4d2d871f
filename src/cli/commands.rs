//! CLI commands and argument parsing

use crate::api::{
    ContainerInstanceStatus, DesiredStatus, LaunchType, SchedulingStrategy, SortOrder,
    TaskDefinitionFamilyStatus, TaskDefinitionStatus,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fleet control-plane client CLI
#[derive(Parser, Debug)]
#[command(name = "fleet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Control-plane endpoint, overrides the config file and environment
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources page by page
    List {
        #[command(flatten)]
        paging: PagingArgs,

        #[command(subcommand)]
        resource: Resource,
    },
}

/// Paging overrides for `list`
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PagingArgs {
    /// Page size hint (1-100)
    #[arg(long, global = true)]
    pub page_size: Option<u32>,

    /// Stop after this many pages
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,
}

/// Listable resources and their filters
#[derive(Subcommand, Debug, Clone)]
pub enum Resource {
    /// Cluster ARNs
    Clusters,

    /// Service ARNs in a cluster
    Services {
        /// Cluster name or ARN
        #[arg(long)]
        cluster: Option<String>,

        /// EC2, FARGATE or EXTERNAL
        #[arg(long)]
        launch_type: Option<LaunchType>,

        /// REPLICA or DAEMON
        #[arg(long)]
        scheduling_strategy: Option<SchedulingStrategy>,
    },

    /// Task ARNs
    Tasks {
        /// Cluster name or ARN
        #[arg(long)]
        cluster: Option<String>,

        /// Container instance ID or ARN
        #[arg(long)]
        container_instance: Option<String>,

        /// Task definition family
        #[arg(long)]
        family: Option<String>,

        /// Value of `startedBy`
        #[arg(long)]
        started_by: Option<String>,

        /// Owning service
        #[arg(long)]
        service_name: Option<String>,

        /// RUNNING, PENDING or STOPPED
        #[arg(long)]
        desired_status: Option<DesiredStatus>,

        /// EC2, FARGATE or EXTERNAL
        #[arg(long)]
        launch_type: Option<LaunchType>,
    },

    /// Container instance ARNs
    ContainerInstances {
        /// Cluster name or ARN
        #[arg(long)]
        cluster: Option<String>,

        /// Cluster query language expression
        #[arg(long)]
        filter: Option<String>,

        /// Lifecycle status
        #[arg(long)]
        status: Option<ContainerInstanceStatus>,
    },

    /// Task definition ARNs
    TaskDefinitions {
        /// Family name prefix
        #[arg(long)]
        family_prefix: Option<String>,

        /// ACTIVE, INACTIVE or DELETE_IN_PROGRESS
        #[arg(long)]
        status: Option<TaskDefinitionStatus>,

        /// ASC or DESC
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Task definition family names
    TaskDefinitionFamilies {
        /// Family name prefix
        #[arg(long)]
        family_prefix: Option<String>,

        /// ACTIVE, INACTIVE or ALL
        #[arg(long)]
        status: Option<TaskDefinitionFamilyStatus>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one object per page)
    Json,
    /// Human-readable output
    Pretty,
}
