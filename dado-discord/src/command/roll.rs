pub(crate) mod map;
use map::RollMap;

pub(crate) mod utils;
use utils::react_to_critic;
use utils::roll_query;
use utils::solve;

use crate::discord::utils::get_user_name;
use crate::discord::utils::send_reply;
use serenity::framework::standard::macros::command;
use serenity::framework::standard::macros::group;
use serenity::framework::standard::Args;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use tracing_unwrap::OptionExt;

#[group]
#[description = "Dice rolling group"]
#[commands(roll, reroll)]
pub(crate) struct Roll;

#[command]
#[aliases("r", "rolar")]
#[min_args(1)]
#[description = "Rolls up to two dice groups, e.g. `2d20+3, 1d6`"]
async fn roll(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let (to_send, critics) = roll_query(ctx, msg, args.rest()).await;
    let sent = send_reply(ctx, msg, &to_send).await?;
    react_to_critic(ctx, &sent, &critics).await?;
    Ok(())
}

#[command]
#[aliases("rr")]
#[description = "Rolls your previous notation again"]
async fn reroll(ctx: &Context, msg: &Message) -> CommandResult {
    let solver = {
        let data = ctx.data.read().await;
        let roll_map = data.get::<RollMap>().unwrap_or_log();
        roll_map.get(msg.author.id.as_u64()).cloned()
    };
    let (to_send, critics) = match solver {
        Some(solver) => {
            let query = solver.as_str().to_owned();
            let result = solve(ctx, msg, solver).await;
            let critics = utils::critics(&result);
            (format!("**rerolling** `{}`\n{}", query, result), critics)
        }
        None => (
            format!(
                "**error** *no previous rolls for* **{}**",
                get_user_name(ctx, msg).await
            ),
            Vec::new(),
        ),
    };
    let sent = send_reply(ctx, msg, &to_send).await?;
    react_to_critic(ctx, &sent, &critics).await?;
    Ok(())
}
