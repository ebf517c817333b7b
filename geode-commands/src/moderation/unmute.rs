use tracing::error;

use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, target_label, usage_message};
use geode_core::{Context, Error};
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "unmute",
    desc: "Lift an active mute (timeout) from a user.",
    category: "moderation",
    usage: "!unmute <user>",
};

#[poise::command(prefix_command, slash_command, category = "Moderation")]
pub async fn unmute(
    ctx: Context<'_>,
    #[description = "The user to unmute"] user: Option<serenity::User>,
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

    let edit = serenity::EditMember::new().enable_communication();
    if let Err(source) = guild_id.edit_member(ctx.http(), user.id, edit).await {
        error!(?source, "unmute request failed");
        ctx.say("I couldn't unmute that user. Check role hierarchy and permissions.")
            .await?;
        return Ok(());
    }

    ctx.say(format!("{} has been unmuted.", target_label(&user)))
        .await?;

    Ok(())
}
