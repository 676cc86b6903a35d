use std::sync::Arc;

use clap::Parser;
use labelbot_config::{ApiDriver, Config};
use labelbot_core::CoreModule;
use labelbot_ghapi_github::GithubApiService;
use labelbot_ghapi_interface::ApiService;
use labelbot_ghapi_null::NullApiService;
use labelbot_sentry::with_sentry_configuration;
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
            let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using GithubApiService API driver");
                    Box::new(GithubApiService::new(config.clone()))
                } else {
                    info!("Using NullApiService API driver");
                    Box::new(NullApiService::new())
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                api_service,
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
            .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
