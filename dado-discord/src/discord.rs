pub(crate) mod check;
pub(crate) mod handler;
pub(crate) mod help;
pub(crate) mod map;
pub(crate) mod utils;

use crate::command::attribute::ATTRIBUTE_GROUP;
use crate::command::meta::META_GROUP;
use crate::command::roll::map::RollMap;
use crate::command::roll::ROLL_GROUP;
use crate::config::Config;
use crate::policy::Masters;
use handler::Handler;
use map::PolicyMap;
use map::ShardManagerMap;
use serenity::framework::standard::StandardFramework;
use serenity::http::Http;
use serenity::prelude::GatewayIntents;
use serenity::Client;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;
use tracing_unwrap::ResultExt;

pub async fn run(config: Config, prefix: &str) {
    let http = Http::new(&config.token);

    let (owners, _bot_id) = http
        .get_current_application_info()
        .await
        .map(|info| {
            let mut owners = HashSet::new();
            owners.insert(info.owner.id);
            (owners, info.id)
        })
        .expect_or_log("Could not access app info");

    let policy = Masters::new(
        config
            .masters
            .iter()
            .copied()
            .chain(owners.iter().map(|id| *id.as_u64())),
    );
    info!(
        "Privileged commands allowed for `{}` master(s) and the owner",
        config.masters.len()
    );

    let framework = StandardFramework::new()
        .configure(|c| c.owners(owners).prefix(prefix))
        .before(help::before)
        .after(help::after)
        .unrecognised_command(help::unknown_command)
        .on_dispatch_error(help::dispatch_error)
        .help(&help::MY_HELP)
        .group(&META_GROUP)
        .group(&ROLL_GROUP)
        .group(&ATTRIBUTE_GROUP);

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .framework(framework)
        .event_handler(Handler)
        .await
        .expect_or_log("Error creating client");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerMap>(client.shard_manager.clone());
        data.insert::<RollMap>(HashMap::new());
        data.insert::<PolicyMap>(Arc::new(policy));
    }

    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect_or_log("Could not register Ctrl+C handler");
        shard_manager.lock().await.shutdown_all().await;
    });

    client.start().await.expect_or_log("Client error");
}
