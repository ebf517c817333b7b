use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use geode_core::{Context, Error};
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "lock",
    desc: "Lock the current channel (block @everyone from sending).",
    category: "moderation",
    usage: "!lock",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn lock(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::MANAGE_CHANNELS,
    )
    .await?
    {
        return Ok(());
    }

    // The @everyone role shares the guild's id.
    let everyone_role = serenity::RoleId::new(guild_id.get());
    let overwrite = serenity::PermissionOverwrite {
        allow: serenity::Permissions::empty(),
        deny: serenity::Permissions::SEND_MESSAGES,
        kind: serenity::PermissionOverwriteType::Role(everyone_role),
    };

    if let Err(source) = ctx
        .channel_id()
        .create_permission(ctx.http(), overwrite)
        .await
    {
        error!(?source, "channel lock failed");
        ctx.say("I couldn't lock this channel. Check my permissions.")
            .await?;
        return Ok(());
    }

    ctx.say("🔒 Channel locked.").await?;

    Ok(())
}
