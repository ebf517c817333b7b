use crate::CommandMeta;
use crate::economy::catalog::{effective_price, find_item};
use crate::moderation::embeds::usage_message;
use geode_core::{Context, Error};
use geode_store::StoreError;
use geode_store::impls::balances;
use geode_store::impls::settings;
use geode_utils::embed::basic_embed;

pub const META: CommandMeta = CommandMeta {
    name: "buy",
    desc: "Buy an item from the shop.",
    category: "economy",
    usage: "!buy <item name>",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn buy(
    ctx: Context<'_>,
    #[description = "Item name as shown in the shop"]
    #[rest]
    item: Option<String>,
) -> Result<(), Error> {
    let Some(raw) = item else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let Some(item) = find_item(&raw) else {
        ctx.say("Item not found. Use `!shop` to see what's available.")
            .await?;
        return Ok(());
    };

    let store = &ctx.data().store;
    let cost = effective_price(item, ctx.data().discount.is_active());
    let currency = settings::currency(store);

    match balances::try_spend(store, ctx.author().id.get(), cost) {
        Ok(remaining) => {
            let embed = basic_embed(
                "Purchase Complete",
                format!(
                    "You bought **{}** for **{} {}**. {} {} left.",
                    item.name, cost, currency, remaining, currency
                ),
            );
            ctx.send(poise::CreateReply::default().embed(embed)).await?;
        }
        Err(StoreError::InsufficientFunds { balance, cost }) => {
            ctx.say(format!(
                "Not enough {}! You have {} and need {}.",
                currency, balance, cost
            ))
            .await?;
        }
        Err(source) => return Err(source.into()),
    }

    Ok(())
}
