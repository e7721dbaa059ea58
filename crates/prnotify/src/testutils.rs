use std::{io::Write, sync::Arc};

use clap::Parser;
use prnotify_chat_interface::MockChatService;
use prnotify_config::Config;
use prnotify_core::{ChatAccounts, CoreModule};
use prnotify_ghapi_interface::MockApiService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub chat_service: MockChatService,
    pub accounts: ChatAccounts,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version();
        config.repository = "me/test".into();
        config.chat.channel = "C01".into();
        config.sentry.url = String::new();

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            chat_service: MockChatService::new(),
            accounts: ChatAccounts::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            chat_service: Box::new(self.chat_service),
            accounts: self.accounts,
            writer,
        }
    }
}

pub(crate) async fn try_test_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> anyhow::Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["prnotify"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = match Args::try_parse_from(command_args) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        };

        CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?;
    }

    let vec = buf.read().await.to_vec();
    Ok(std::str::from_utf8(&vec).unwrap().to_string())
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    try_test_command(ctx, command_args).await.unwrap()
}
