use crate::discord::check::MASTER_CHECK;
use crate::discord::map::ShardManagerMap;
use crate::discord::utils::get_user_name;
use crate::discord::utils::send_reply;
use serenity::framework::standard::macros::command;
use serenity::framework::standard::macros::group;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::info;
use tracing_unwrap::OptionExt;

#[group]
#[description = "General management group"]
#[commands(ping, ola, quit)]
pub(crate) struct Meta;

#[command]
async fn ping(ctx: &Context, msg: &Message) -> CommandResult {
    send_reply(ctx, msg, "**info** *pong*").await?;
    Ok(())
}

#[command]
#[aliases("hello")]
#[description = "Greets whoever asks"]
async fn ola(ctx: &Context, msg: &Message) -> CommandResult {
    let name = get_user_name(ctx, msg).await;
    send_reply(ctx, msg, &format!("**olá** *{}*!", name)).await?;
    Ok(())
}

#[command]
#[checks(Master)]
#[description = "Shuts the bot down, masters only"]
async fn quit(ctx: &Context, msg: &Message) -> CommandResult {
    let data = ctx.data.read().await;
    let shard_manager = data
        .get::<ShardManagerMap>()
        .expect_or_log("unable to get shard manager");
    info!("Shutdown requested by `{}`", msg.author.name);
    send_reply(ctx, msg, "**info** *shutting down*").await?;
    shard_manager.lock().await.shutdown_all().await;
    Ok(())
}
