use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{
    guild_only_message, moderation_action_embed, target_profile_from_user, usage_message,
};
use geode_core::{Context, Error};
use geode_utils::formatting::format_compact_duration;
use geode_utils::parse::parse_duration_seconds;
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "mute",
    desc: "Mute (timeout) a user for a duration (default: 10m).",
    category: "moderation",
    usage: "!mute <user> [duration] [reason]",
};

const DEFAULT_MUTE_SECS: u64 = 10 * 60;

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn mute(
    ctx: Context<'_>,
    #[description = "The user to mute"] user: Option<serenity::User>,
    #[description = "Duration (e.g. 30s, 10m, 2h, 1d)"] duration: Option<String>,
    #[description = "Reason for the mute"]
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
        serenity::Permissions::MODERATE_MEMBERS,
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
        ctx.say("You can't mute yourself.").await?;
        return Ok(());
    }

    let mute_seconds = match duration.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let Some(seconds) = parse_duration_seconds(raw) else {
                ctx.say(format!(
                    "Invalid duration. Usage: `{}` (examples: 30s, 10m, 2h, 1d)",
                    META.usage
                ))
                .await?;
                return Ok(());
            };
            seconds
        }
        _ => DEFAULT_MUTE_SECS,
    };
    let duration_label = format_compact_duration(mute_seconds);

    let until_system_time = SystemTime::now()
        .checked_add(Duration::from_secs(mute_seconds))
        .unwrap_or(SystemTime::now());
    let until_unix = until_system_time
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs()) as i64;
    let until = serenity::Timestamp::from_unix_timestamp(until_unix)?;

    let edit = serenity::EditMember::new().disable_communication_until_datetime(until);
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        error!(?source, "mute request failed");
        ctx.say("I couldn't mute that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    let target_profile = target_profile_from_user(&user);
    let embed = moderation_action_embed(
        &target_profile,
        user.id,
        "muted",
        reason.as_deref(),
        Some(&duration_label),
    );
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
