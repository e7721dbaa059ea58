//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use prnotify_chat_interface::ChatService;
use prnotify_config::Config;
use prnotify_core::{ChatAccounts, CoreContext, CoreModule};
use prnotify_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{
    debug::DebugCommand, deployed::DeployedCommand, handle::HandleCommand, show::ShowCommand,
};
use crate::Result;

mod debug;
mod deployed;
mod handle;
mod show;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub chat_service: Box<dyn ChatService + Send + Sync>,
    pub accounts: ChatAccounts,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            chat_service: self.chat_service.as_ref(),
            accounts: &self.accounts,
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Handle(HandleCommand),
    Deployed(DeployedCommand),
    Show(ShowCommand),
    /// Debug related commands
    #[command(subcommand)]
    Debug(DebugCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Handle(sub) => sub.execute(ctx).await,
            Self::Deployed(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
            Self::Debug(sub) => sub.execute(ctx).await,
        }
    }
}
