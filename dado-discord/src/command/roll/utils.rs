use super::map::RollMap;
use dado_lib::dice::Critic;
use dado_lib::error::Error;
use dado_lib::roll;
use dado_lib::solver::Solver;
use serenity::framework::standard::CommandResult;
use serenity::model::channel::Message;
use serenity::model::prelude::ReactionType;
use serenity::prelude::Context;
use tracing_unwrap::OptionExt;

const TWEMOJI_MIN: &str = "🥶";
const TWEMOJI_MAX: &str = "🤩";

/// Too large and malformed inputs read differently
pub fn format_error(error: &Error) -> String {
    match error {
        Error::LimitExceeded(limit) => format!("**too large** *{}*", limit),
        Error::InvalidNotation(_) | Error::InvalidArgument(_) => {
            format!("**bad input** *{}*", error)
        }
    }
}

pub fn format_roll(result: &roll::Result) -> String {
    format!("**rolling** `{}`\n{}", result.get_source().trim(), result)
}

/// Distinct critic kinds in a roll, successes first
pub fn critics(result: &roll::Result) -> Vec<Critic> {
    [Critic::Success, Critic::Failure]
        .into_iter()
        .filter(|critic| result.has_critic(*critic))
        .collect()
}

pub async fn react_to_critic(ctx: &Context, msg: &Message, critics: &[Critic]) -> CommandResult {
    for critic in critics.iter() {
        let twemoji = match critic {
            Critic::Success => TWEMOJI_MAX,
            Critic::Failure => TWEMOJI_MIN,
            Critic::Not => continue,
        };
        msg.react(ctx, ReactionType::Unicode(twemoji.to_string()))
            .await?;
    }
    Ok(())
}

/// Parse, roll and remember `query`; errors come back as the reply text
pub async fn roll_query(ctx: &Context, msg: &Message, query: &str) -> (String, Vec<Critic>) {
    match Solver::new(query) {
        Ok(solver) => {
            let result = solve(ctx, msg, solver).await;
            (format_roll(&result), critics(&result))
        }
        Err(error) => (format_error(&error), Vec::new()),
    }
}

pub async fn solve(ctx: &Context, msg: &Message, solver: Solver) -> roll::Result {
    let result = solver.solve();
    let mut data = ctx.data.write().await;
    let roll_map = data.get_mut::<RollMap>().unwrap_or_log();
    roll_map.insert(*msg.author.id.as_u64(), solver);
    result
}
