//! Owner inbox commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use campus_core::error::AppError;
use campus_core::types::UserId;
use campus_database::Stores;
use campus_entity::notification::NotificationView;

use crate::output::{self, OutputFormat};

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List an owner's inbox, newest first
    List {
        /// Owner user id
        owner_id: UserId,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    id: String,
    status: String,
    resource: String,
    requester: String,
    created_at: String,
}

impl From<NotificationView> for NotificationRow {
    fn from(view: NotificationView) -> Self {
        Self {
            id: view.id.to_string(),
            status: view.status.to_string(),
            resource: view.resource_name,
            requester: view.requester_name,
            created_at: view.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute notification commands
pub async fn execute(
    args: &NotificationArgs,
    stores: &Stores,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        NotificationCommand::List { owner_id } => {
            let inbox = stores.notifications.list_for_owner(*owner_id).await?;
            let rows: Vec<NotificationRow> = inbox.into_iter().map(NotificationRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
