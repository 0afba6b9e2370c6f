use super::roll::utils::format_error;
use super::roll::utils::react_to_critic;
use super::roll::utils::roll_query;
use crate::discord::utils::send_reply;
use dado_lib::attribute::attribute_die;
use serenity::framework::standard::macros::command;
use serenity::framework::standard::macros::group;
use serenity::framework::standard::Args;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::prelude::Context;

const ROLL_WORDS: [&str; 2] = ["roll", "rolar"];

#[group]
#[description = "Attribute dice group"]
#[commands(dado)]
pub(crate) struct Attribute;

#[command]
#[aliases("attr")]
#[min_args(1)]
#[max_args(2)]
#[usage = "<level> [roll]"]
#[description = "Shows the die of an attribute level, `roll` also rolls it"]
async fn dado(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let level = match args.single::<i64>() {
        Ok(level) => level,
        Err(_) => {
            send_reply(ctx, msg, "**bad input** *attribute level must be an integer*").await?;
            return Ok(());
        }
    };
    let wants_roll = args
        .single::<String>()
        .map(|word| ROLL_WORDS.contains(&word.to_lowercase().as_str()))
        .unwrap_or(false);
    match attribute_die(level) {
        Ok(die) if wants_roll => {
            let (to_send, critics) = roll_query(ctx, msg, &die).await;
            let sent = send_reply(ctx, msg, &to_send).await?;
            react_to_critic(ctx, &sent, &critics).await?;
        }
        Ok(die) => {
            send_reply(ctx, msg, &format!("**level** `{}` *die* `{}`", level, die)).await?;
        }
        Err(error) => {
            send_reply(ctx, msg, &format_error(&error)).await?;
        }
    }
    Ok(())
}
