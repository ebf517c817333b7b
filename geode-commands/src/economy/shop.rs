use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::economy::catalog::{SHOP_ITEMS, effective_price};
use geode_core::{Context, Error};
use geode_store::impls::settings;
use geode_utils::embed::basic_embed;

pub const META: CommandMeta = CommandMeta {
    name: "shop",
    desc: "List the premium perks and their prices.",
    category: "economy",
    usage: "!shop",
};

#[poise::command(prefix_command, slash_command, category = "Economy")]
pub async fn shop(ctx: Context<'_>) -> Result<(), Error> {
    let discount_active = ctx.data().discount.is_active();
    let currency = settings::currency(&ctx.data().store);

    let lines = SHOP_ITEMS
        .iter()
        .map(|item| {
            format!(
                "**{}** : {} {}",
                item.name,
                effective_price(item, discount_active),
                currency
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let title = if discount_active {
        "Shop (Daily Discount!)"
    } else {
        "Shop"
    };

    let embed = basic_embed(title, lines).footer(serenity::CreateEmbedFooter::new(
        "Type !buy <item name> to purchase.",
    ));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
