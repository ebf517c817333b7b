use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use geode_core::{Context, Error};
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "unlock",
    desc: "Unlock the current channel.",
    category: "moderation",
    usage: "!unlock",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn unlock(ctx: Context<'_>) -> Result<(), Error> {
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

    let everyone_role = serenity::RoleId::new(guild_id.get());
    if let Err(source) = ctx
        .channel_id()
        .delete_permission(
            ctx.http(),
            serenity::PermissionOverwriteType::Role(everyone_role),
        )
        .await
    {
        error!(?source, "channel unlock failed");
        ctx.say("I couldn't unlock this channel. Check my permissions.")
            .await?;
        return Ok(());
    }

    ctx.say("🔓 Channel unlocked.").await?;

    Ok(())
}
