use chrono::Utc;
use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, target_profile_from_user, usage_message};
use geode_core::{Context, Error};
use geode_store::impls::warnings::{ACTIVE_WINDOW_DAYS, active_warnings};
use geode_utils::embed::DEFAULT_EMBED_COLOR;
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "warnings",
    desc: "Show a user's active warnings and point total.",
    category: "moderation",
    usage: "!warnings <user>",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The user to check"] user: Option<serenity::User>,
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

    let entries = active_warnings(&ctx.data().store, user.id.get(), Utc::now());
    let total: u64 = entries.iter().map(|entry| u64::from(entry.amount)).sum();

    let mut description = format!(
        "Active points in the last {} days: **{}**\n\n",
        ACTIVE_WINDOW_DAYS, total
    );

    if entries.is_empty() {
        description.push_str("No active warnings.");
    } else {
        for (index, entry) in entries.iter().enumerate() {
            description.push_str(&format!(
                "#{position} • {amount} point(s) by {issuer}\n**Reason :** {reason}\n**When :** <t:{ts}:R>\n\n",
                position = index + 1,
                amount = entry.amount,
                issuer = entry.issued_by.replace('@', "@\u{200B}"),
                reason = entry.reason.replace('@', "@\u{200B}"),
                ts = entry.issued_at.timestamp(),
            ));
        }
    }

    let target_profile = target_profile_from_user(&user);
    let mut embed = serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .title(format!("Warnings for {}", target_profile.display_name))
        .description(description.trim_end().to_owned());
    if let Some(url) = target_profile.avatar_url.as_deref() {
        embed = embed.thumbnail(url);
    }

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
