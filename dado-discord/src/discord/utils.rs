use serenity::model::prelude::Message;
use serenity::prelude::Context;

#[inline]
pub async fn send_reply(
    ctx: &Context,
    msg: &Message,
    reply: &str,
) -> Result<Message, serenity::Error> {
    msg.reply_ping(ctx, reply).await
}

/// Guild nickname when there is one
pub async fn get_user_name(ctx: &Context, msg: &Message) -> String {
    match msg.guild_id {
        Some(guild_id) => msg
            .author
            .nick_in(ctx, guild_id)
            .await
            .unwrap_or_else(|| msg.author.name.clone()),
        None => msg.author.name.clone(),
    }
}
