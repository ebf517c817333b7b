use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, usage_message};
use geode_core::{Context, Error};
use geode_utils::embed::DEFAULT_EMBED_COLOR;
use geode_utils::permissions::has_user_permission;

pub const META: CommandMeta = CommandMeta {
    name: "say",
    desc: "Post an announcement embed, optionally with poll-style options.",
    category: "admin",
    usage: "!say <message> | <option 1> | <option 2> ...",
};

const MAX_OPTIONS: usize = 5;

#[poise::command(prefix_command, slash_command, category = "Admin")]
pub async fn say(
    ctx: Context<'_>,
    #[description = "Announcement text, options separated by |"]
    #[rest]
    message: Option<String>,
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

    let Some((text, options)) = message.as_deref().and_then(split_announcement) else {
        ctx.say(usage_message(META.usage)).await?;
        return Ok(());
    };

    let mut embed = serenity::CreateEmbed::new()
        .title("Announcement")
        .color(DEFAULT_EMBED_COLOR)
        .description(text);

    for (index, option) in options.iter().enumerate() {
        embed = embed.field(format!("Option {}", index + 1), option.clone(), false);
    }

    ctx.channel_id()
        .send_message(ctx.http(), serenity::CreateMessage::new().embed(embed))
        .await?;

    Ok(())
}

/// Split `text | option | option` into the main text and up to five
/// non-empty options.
fn split_announcement(raw: &str) -> Option<(String, Vec<String>)> {
    let mut parts = raw
        .split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty());

    let text = parts.next()?.to_owned();
    let options = parts.take(MAX_OPTIONS).map(str::to_owned).collect();
    Some((text, options))
}

#[cfg(test)]
mod tests {
    use super::split_announcement;

    #[test]
    fn splits_text_and_options() {
        let (text, options) =
            split_announcement("movie night | friday | saturday").expect("parses");
        assert_eq!(text, "movie night");
        assert_eq!(options, vec!["friday", "saturday"]);
    }

    #[test]
    fn caps_options_at_five() {
        let (_, options) =
            split_announcement("poll | a | b | c | d | e | f | g").expect("parses");
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn rejects_empty_text() {
        assert!(split_announcement("").is_none());
        assert!(split_announcement("   |   ").is_none());
    }

    #[test]
    fn skips_blank_segments() {
        let (text, options) = split_announcement("hello | | world").expect("parses");
        assert_eq!(text, "hello");
        assert_eq!(options, vec!["world"]);
    }
}
