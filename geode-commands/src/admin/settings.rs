use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::guild_only_message;
use geode_core::{Context, Error};
use geode_store::StoreError;
use geode_store::impls::settings::{self, SettingKey};
use geode_utils::embed::basic_embed;
use geode_utils::formatting::enabled_label;
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "settings",
    desc: "Show the feature toggles, or flip one by name.",
    category: "admin",
    usage: "!settings [name]",
};

#[poise::command(prefix_command, slash_command, category = "Admin")]
pub async fn settings(
    ctx: Context<'_>,
    #[description = "Toggle to flip (e.g. automod, welcomeDM)"] key: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    if !has_user_permission(
        ctx.http(),
        guild_id,
        ctx.author().id,
        serenity::Permissions::ADMINISTRATOR,
    )
    .await?
    {
        return Ok(());
    }

    let store = &ctx.data().store;

    let Some(raw_key) = key.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) else {
        let lines = SettingKey::ALL
            .into_iter()
            .map(|key| {
                format!(
                    "**{}** : {}",
                    key.name(),
                    enabled_label(settings::is_enabled(store, key))
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let embed = basic_embed("Bot Settings", lines).footer(serenity::CreateEmbedFooter::new(
            format!("Currency: {} • Use !settings <name> to toggle", settings::currency(store)),
        ));
        ctx.send(poise::CreateReply::default().embed(embed)).await?;
        return Ok(());
    };

    match settings::toggle(store, raw_key) {
        Ok((key, enabled)) => {
            ctx.say(format!(
                "Setting **{}** is now **{}**.",
                key.name(),
                enabled_label(enabled)
            ))
            .await?;
        }
        Err(StoreError::UnknownSetting(name)) => {
            ctx.say(format!("Unknown setting `{}`. Use `!settings` to list them.", name))
                .await?;
        }
        Err(source) => return Err(source.into()),
    }

    Ok(())
}
