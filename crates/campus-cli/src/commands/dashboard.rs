//! Dashboard command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_core::types::UserId;
use campus_database::Stores;
use campus_service::DashboardService;

use crate::output::{self, OutputFormat};

/// Arguments for the dashboard command
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// User id
    pub user_id: UserId,
}

#[derive(Debug, Serialize, Tabled)]
struct ItemRow {
    id: String,
    name: String,
    status: String,
    /// Borrower for owned items, owner for borrowed ones.
    with: String,
}

/// Execute the dashboard command
pub async fn execute(
    args: &DashboardArgs,
    stores: &Stores,
    format: OutputFormat,
) -> Result<(), AppError> {
    let dashboard = DashboardService::new(stores.dashboard.clone())
        .for_user(args.user_id)
        .await?;

    if format == OutputFormat::Json {
        output::print_json(&dashboard);
        return Ok(());
    }

    let owned: Vec<ItemRow> = dashboard
        .owned_items
        .into_iter()
        .map(|item| ItemRow {
            id: item.resource.id.to_string(),
            name: item.resource.name,
            status: item.resource.status.to_string(),
            with: item.borrower_name.unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    let borrowed: Vec<ItemRow> = dashboard
        .borrowed_items
        .into_iter()
        .map(|item| ItemRow {
            id: item.resource.id.to_string(),
            name: item.resource.name,
            status: item.resource.status.to_string(),
            with: item.owner_name,
        })
        .collect();

    output::print_heading("Owned");
    output::print_list(&owned, format);
    output::print_heading("Borrowed");
    output::print_list(&borrowed, format);
    Ok(())
}
