use super::map::PolicyMap;
use serenity::framework::standard::macros::check;
use serenity::framework::standard::Args;
use serenity::framework::standard::CommandOptions;
use serenity::framework::standard::Reason;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing::warn;

#[check]
#[name = "Master"]
pub(crate) async fn master_check(
    ctx: &Context,
    msg: &Message,
    _: &mut Args,
    _: &CommandOptions,
) -> Result<(), Reason> {
    let data = ctx.data.read().await;
    let privileged = data
        .get::<PolicyMap>()
        .map(|policy| policy.is_privileged(*msg.author.id.as_u64()))
        .unwrap_or(false);
    if privileged {
        Ok(())
    } else {
        warn!("User `{}` is not a master", msg.author.name);
        Err(Reason::User("only masters can do that".to_owned()))
    }
}
