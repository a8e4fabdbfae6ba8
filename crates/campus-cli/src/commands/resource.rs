//! Resource catalog commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_database::Stores;
use campus_entity::resource::ResourceListing;

use crate::output::{self, OutputFormat};

/// Arguments for resource commands
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Resource subcommand
    #[command(subcommand)]
    pub command: ResourceCommand,
}

/// Resource subcommands
#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    /// List the whole catalog, newest first
    List,
}

/// Resource display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ResourceRow {
    id: String,
    name: String,
    category: String,
    owner: String,
    status: String,
    borrower: String,
    pending: i64,
    file: String,
}

impl From<ResourceListing> for ResourceRow {
    fn from(listing: ResourceListing) -> Self {
        let resource = listing.resource;
        Self {
            id: resource.id.to_string(),
            name: resource.name,
            category: resource.category,
            owner: listing.owner_name,
            status: resource.status.to_string(),
            borrower: listing.borrower_name.unwrap_or_else(|| "-".to_string()),
            pending: listing.pending_requests,
            file: resource.stored_file,
        }
    }
}

/// Execute resource commands
pub async fn execute(
    args: &ResourceArgs,
    stores: &Stores,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ResourceCommand::List => {
            let listings = stores.resources.list_all().await?;
            let rows: Vec<ResourceRow> = listings.into_iter().map(ResourceRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
