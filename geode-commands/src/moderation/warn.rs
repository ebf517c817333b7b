use chrono::Utc;
use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, send_moderation_target_dm_for_guild,
    target_profile_from_user, usage_message,
};
use crate::moderation::escalation_check::check_and_escalate;
use geode_core::{Context, Error};
use geode_store::impls::warnings::{add_warning, total_active_severity};
use geode_utils::parse::parse_positive_u32;
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Issue a warning worth a number of points.",
    category: "moderation",
    usage: "!warn <user> <amount> [reason]",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The user to warn"] user: Option<serenity::User>,
    #[description = "Warning points (positive integer)"] amount: Option<String>,
    #[description = "Reason for the warning"]
    #[rest]
    reason: Option<String>,
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

    if user.id == ctx.author().id {
        ctx.say("You can't warn yourself.").await?;
        return Ok(());
    }

    let Some(raw_amount) = amount else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };
    let Some(amount) = parse_positive_u32(&raw_amount) else {
        ctx.say("Amount must be a positive whole number.").await?;
        return Ok(());
    };

    let issuer = ctx
        .author()
        .global_name
        .as_deref()
        .unwrap_or(&ctx.author().name)
        .to_owned();
    let now = Utc::now();

    let store = &ctx.data().store;
    let record = add_warning(
        store,
        user.id.get(),
        amount,
        reason.as_deref().unwrap_or(""),
        &issuer,
        now,
    )?;
    let total = total_active_severity(store, user.id.get(), now);

    let _ = send_moderation_target_dm_for_guild(
        ctx.http(),
        &user,
        guild_id,
        "warned",
        Some(&record.reason),
        None,
    )
    .await;

    let action = format!("warned ({} point(s), {} active)", record.amount, total);
    let target_profile = target_profile_from_user(&user);
    let embed =
        moderation_action_embed(&target_profile, user.id, &action, Some(&record.reason), None);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    check_and_escalate(ctx.http(), guild_id, &user, total).await;

    Ok(())
}
