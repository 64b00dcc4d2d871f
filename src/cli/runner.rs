//! CLI runner - executes commands

use crate::api::{
    ControlPlaneClient, ListClusters, ListContainerInstances, ListRequest, ListServices,
    ListTaskDefinitionFamilies, ListTaskDefinitions, ListTasks,
};
use crate::cli::commands::{Cli, Commands, OutputFormat, PagingArgs, Resource};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::{Page, PaginationSummary, Termination};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::List { paging, resource } => {
                let config = self.resolve_config(*paging)?;
                let client = ControlPlaneClient::from_config(&config)?;
                self.list(&client, resource.clone()).await
            }
        }
    }

    /// Layer file, environment and flags into one config
    fn resolve_config(&self, paging: PagingArgs) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        config.apply_env()?;
        apply_flags(&mut config, self.cli.endpoint.as_deref(), paging);
        Ok(config)
    }

    async fn list(&self, client: &ControlPlaneClient, resource: Resource) -> Result<()> {
        match resource {
            Resource::Clusters => self.print_pages(client, ListClusters::new()).await,
            Resource::Services {
                cluster,
                launch_type,
                scheduling_strategy,
            } => {
                let request = ListServices {
                    cluster,
                    launch_type,
                    scheduling_strategy,
                    ..ListServices::default()
                };
                self.print_pages(client, request).await
            }
            Resource::Tasks {
                cluster,
                container_instance,
                family,
                started_by,
                service_name,
                desired_status,
                launch_type,
            } => {
                let request = ListTasks {
                    cluster,
                    container_instance,
                    family,
                    started_by,
                    service_name,
                    desired_status,
                    launch_type,
                    ..ListTasks::default()
                };
                self.print_pages(client, request).await
            }
            Resource::ContainerInstances {
                cluster,
                filter,
                status,
            } => {
                let request = ListContainerInstances {
                    cluster,
                    filter,
                    status,
                    ..ListContainerInstances::default()
                };
                self.print_pages(client, request).await
            }
            Resource::TaskDefinitions {
                family_prefix,
                status,
                sort,
            } => {
                let request = ListTaskDefinitions {
                    family_prefix,
                    status,
                    sort,
                    ..ListTaskDefinitions::default()
                };
                self.print_pages(client, request).await
            }
            Resource::TaskDefinitionFamilies {
                family_prefix,
                status,
            } => {
                let request = ListTaskDefinitionFamilies {
                    family_prefix,
                    status,
                    ..ListTaskDefinitionFamilies::default()
                };
                self.print_pages(client, request).await
            }
        }
    }

    /// Print every page as it arrives, then a summary line
    async fn print_pages<R: ListRequest>(&self, client: &ControlPlaneClient, request: R) -> Result<()> {
        let format = self.cli.format;
        let started = Instant::now();
        let mut number = 0u32;

        let summary = client
            .paginate(request, |page, is_last| {
                number += 1;
                println!("{}", render_page(format, number, page, is_last));
                true
            })
            .await?;

        info!(
            operation = R::OPERATION.target,
            pages = summary.pages,
            items = summary.items,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "List complete"
        );
        println!("{}", render_summary(format, &summary));
        Ok(())
    }
}

/// Command-line flags win over the file and the environment
fn apply_flags(config: &mut ClientConfig, endpoint: Option<&str>, paging: PagingArgs) {
    if let Some(endpoint) = endpoint {
        config.endpoint = Some(endpoint.to_string());
    }
    if let Some(size) = paging.page_size {
        config.pagination = config.pagination.page_size(size);
    }
    if let Some(pages) = paging.max_pages {
        config.pagination = config.pagination.max_pages(pages);
    }
}

fn termination_name(termination: Termination) -> &'static str {
    match termination {
        Termination::Exhausted => "exhausted",
        Termination::Stopped => "stopped",
        Termination::PageLimit => "page_limit",
    }
}

fn render_page(format: OutputFormat, number: u32, page: &Page<String>, is_last: bool) -> String {
    match format {
        OutputFormat::Json => {
            let msg = json!({
                "type": "page",
                "page": number,
                "items": page.items,
                "next_token": page.next_cursor.as_ref().map(|c| c.as_str()),
                "is_last": is_last,
            });
            serde_json::to_string(&msg).unwrap_or_default()
        }
        OutputFormat::Pretty => {
            let mut out = format!("Page {number} ({} items)", page.len());
            for item in &page.items {
                out.push_str("\n  ");
                out.push_str(item);
            }
            out
        }
    }
}

fn render_summary(format: OutputFormat, summary: &PaginationSummary) -> String {
    match format {
        OutputFormat::Json => {
            let msg: Value = json!({
                "type": "summary",
                "pages": summary.pages,
                "items": summary.items,
                "termination": termination_name(summary.termination),
            });
            serde_json::to_string(&msg).unwrap_or_default()
        }
        OutputFormat::Pretty => format!(
            "{} pages, {} items ({})",
            summary.pages,
            summary.items,
            termination_name(summary.termination)
        ),
    }
}
