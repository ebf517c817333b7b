use crate::CommandMeta;
use geode_core::{Context, Error};
use geode_store::impls::balances;
use geode_store::impls::settings;
use geode_utils::embed::basic_embed;

pub const META: CommandMeta = CommandMeta {
    name: "balance",
    desc: "Show your current balance.",
    category: "economy",
    usage: "!balance",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn balance(ctx: Context<'_>) -> Result<(), Error> {
    let store = &ctx.data().store;
    let amount = balances::balance(store, ctx.author().id.get());
    let currency = settings::currency(store);

    let embed = basic_embed(
        "Your Balance",
        format!("You currently have **{} {}**.", amount, currency),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
