use std::time::Duration;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info, warn};

use crate::commands::{self, Command};
use crate::config::Config;

/// Long-poll timeout for `getUpdates`.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(10);

/// Start the Telegram bot and poll until interrupted
pub async fn run(config: Config) -> Result<()> {
    let bot = Bot::new(&config.telegram.bot_token);

    info!("Starting Telegram bot...");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to set bot commands: {}", e);
    }

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(commands::handle_command);

    let listener = Polling::builder(bot.clone())
        .timeout(POLL_TIMEOUT)
        .drop_pending_updates()
        .build();

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("bot"))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("update listener"),
        )
        .await;

    info!("Telegram bot stopped");

    Ok(())
}
