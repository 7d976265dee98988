//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use docbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Long-polls Telegram until Ctrl-C. Each message is converted to core::Message and handled in
/// its own task, so a slow conversion never blocks polling; handlers must not share per-request
/// state.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = ?me.user.username,
            "Connected to Telegram, polling for updates"
        ),
        Err(e) => error!(error = %e, "getMe failed; polling anyway"),
    }

    let chain = handler_chain;
    teloxide::repl(
        bot,
        move |_bot: Bot, msg: teloxide::types::Message| {
            let chain = chain.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();
                debug!(
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: update received, spawning handler chain"
                );

                tokio::spawn(async move {
                    if let Err(e) = chain.handle(&core_msg).await {
                        error!(
                            error = %e,
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            "Handler chain failed"
                        );
                    }
                });

                Ok(())
            }
        },
    )
    .await;

    info!("Polling stopped");
    Ok(())
}
