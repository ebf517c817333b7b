use poise::serenity_prelude as serenity;
use tracing::{error, warn};

use geode_core::Data;
use geode_store::impls::settings::{SettingKey, is_enabled};

/// Terms removed by the automod. Matched at token boundaries only, so
/// substrings inside harmless words don't trigger it.
const FILTERED_TERMS: &[&str] = &["fuck", "shit", "bitch", "asshole", "cunt", "dickhead"];

/// Delete messages containing filtered terms and post a short notice,
/// when the automod toggle is enabled.
pub async fn handle_message_automod(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    if message.guild_id.is_none() {
        return;
    }

    if !is_enabled(&data.store, SettingKey::Automod) {
        return;
    }

    let content_lower = message.content.to_lowercase();
    let matched = FILTERED_TERMS.iter().any(|term| {
        content_lower
            .split(|ch: char| !ch.is_alphanumeric())
            .any(|token| token == *term)
    });

    if !matched {
        return;
    }

    if let Err(source) = message.delete(&ctx.http).await {
        if crate::events::is_missing_permissions(&source) {
            warn!("missing permissions to delete filtered message");
        } else {
            error!(?source, "failed to delete filtered message");
        }
        return;
    }

    let notice = format!(
        "<@{}>, please avoid inappropriate terms.",
        message.author.id.get()
    );
    if let Err(source) = message.channel_id.say(&ctx.http, notice).await {
        error!(?source, "failed to post automod notice");
    }
}
