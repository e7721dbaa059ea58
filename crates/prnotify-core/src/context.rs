use prnotify_chat_interface::ChatService;
use prnotify_config::Config;
use prnotify_ghapi_interface::ApiService;

use crate::{accounts::ChatAccounts, CoreError, CoreModule, Result};

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub chat_service: &'a (dyn ChatService + 'a),
    pub accounts: &'a ChatAccounts,
}

impl<'a> CoreContext<'a> {
    /// Owner and name of the watched repository.
    pub fn repository(&self) -> Result<(&'a str, &'a str)> {
        self.config
            .repository_components()
            .ok_or_else(|| CoreError::InvalidRepository {
                repository: self.config.repository.clone(),
            })
    }

    /// Target chat channel.
    pub fn channel(&self) -> &'a str {
        &self.config.chat.channel
    }
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use prnotify_chat_interface::MockChatService;
    use prnotify_config::Config;
    use prnotify_ghapi_interface::MockApiService;

    use crate::{accounts::ChatAccounts, CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub chat_service: MockChatService,
        pub accounts: ChatAccounts,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version();
            config.repository = "me/test".into();
            config.chat.channel = "C01".into();
            config.chat.history_limit = 200;

            Self {
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                chat_service: MockChatService::new(),
                accounts: ChatAccounts::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                chat_service: &self.chat_service,
                accounts: &self.accounts,
            }
        }
    }
}
