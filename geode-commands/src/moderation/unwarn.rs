use chrono::Utc;
use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, target_label, usage_message};
use geode_core::{Context, Error};
use geode_store::StoreError;
use geode_store::impls::warnings::{clear_warnings, remove_warning};
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "unwarn",
    desc: "Remove an active warning by number, or clear all warnings.",
    category: "moderation",
    usage: "!unwarn <user> <number|all>",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn unwarn(
    ctx: Context<'_>,
    #[description = "The user to modify warnings for"] user: Option<serenity::User>,
    #[description = "Warning number (from !warnings) or 'all'"] selector: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_MESSAGES,
    )
    .await?
    {
        return Ok(());
    }

    let Some(user) = user else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };
    let label = target_label(&user);

    let Some(selector) = selector.as_deref().map(str::trim) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let store = &ctx.data().store;

    if selector.eq_ignore_ascii_case("all") {
        let removed = clear_warnings(store, user.id.get())?;
        ctx.say(format!("Removed {} warning(s) for {}.", removed, label))
            .await?;
        return Ok(());
    }

    // Positions shown by !warnings are 1-based over the active view.
    let Some(position) = selector.parse::<usize>().ok().filter(|position| *position >= 1) else {
        ctx.say("Selector must be a warning number or 'all'.").await?;
        return Ok(());
    };

    match remove_warning(store, user.id.get(), position - 1, Utc::now()) {
        Ok(removed) => {
            ctx.say(format!(
                "Removed warning #{} for {} ({}).",
                position, label, removed.reason
            ))
            .await?;
        }
        Err(StoreError::NotFound) => {
            ctx.say(format!(
                "Warning #{} was not found for {}.",
                position, label
            ))
            .await?;
        }
        Err(source) => return Err(source.into()),
    }

    Ok(())
}
