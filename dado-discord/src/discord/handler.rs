use itertools::Itertools;
use serenity::async_trait;
use serenity::model::event::ResumedEvent;
use serenity::model::gateway::Ready;
use serenity::model::guild::Guild;
use serenity::prelude::Context;
use serenity::prelude::EventHandler;
use tracing::debug;
use tracing::info;

pub(crate) struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _: Context, ready: Ready) {
        info!("Connected as `{}`", ready.user.name);
        info!(
            "Serving `{}` guild(s): {}",
            ready.guilds.len(),
            ready.guilds.iter().map(|guild| guild.id).format(", ")
        );
    }

    async fn guild_create(&self, _: Context, guild: Guild, is_new: bool) {
        if is_new {
            info!(
                "Joined guild `{}` (`{}`) with `{}` member(s)",
                guild.name, guild.id, guild.member_count
            );
        }
    }

    async fn resume(&self, _: Context, _: ResumedEvent) {
        debug!("Resumed");
    }
}
