use std::sync::Arc;

use clap::Parser;
use prnotify_chat_interface::ChatService;
use prnotify_chat_null::NullChatService;
use prnotify_chat_slack::SlackChatService;
use prnotify_config::{ChatDriver, Config};
use prnotify_core::{ChatAccounts, CoreModule};
use prnotify_ghapi_github::GithubApiService;
use prnotify_ghapi_interface::ApiService;
use prnotify_sentry::with_sentry_configuration;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();
            let accounts = ChatAccounts::from_path(&config.chat.accounts_path)?;
            info!(
                accounts = accounts.len(),
                message = "Loaded chat accounts"
            );

            let api_service: Box<dyn ApiService + Send + Sync + 'static> =
                Box::new(GithubApiService::new(config.clone()));

            let chat_service: Box<dyn ChatService + Send + Sync + 'static> = {
                if config.chat.driver == Ok(ChatDriver::Slack) {
                    info!("Using SlackChatService chat driver");
                    Box::new(SlackChatService::new(config.clone()))
                } else {
                    info!("Using NullChatService chat driver");
                    Box::new(NullChatService::new())
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                api_service,
                chat_service,
                accounts,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config.clone(), || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
