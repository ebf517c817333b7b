use poise::serenity_prelude as serenity;
use tracing::debug;

use geode_core::Data;
use geode_store::impls::settings::{SettingKey, currency, is_enabled};
use geode_utils::embed::basic_embed;

/// DM new members a welcome message when the welcomeDM toggle is enabled.
/// Closed DMs are common and only logged at debug level.
pub async fn handle_member_join(
    ctx: &serenity::Context,
    data: &Data,
    member: &serenity::Member,
) {
    if !is_enabled(&data.store, SettingKey::WelcomeDm) {
        return;
    }

    let display_name = member
        .user
        .global_name
        .as_deref()
        .unwrap_or(&member.user.name);
    let currency = currency(&data.store);

    let embed = basic_embed(
        "Welcome to Diamond Hub",
        format!(
            "Hello **{}**!\nEarn **{}** by chatting and taking part in events.\nUse `!shop` to view the premium perks.",
            display_name, currency
        ),
    );

    let message = async {
        let dm_channel = member.user.create_dm_channel(&ctx.http).await?;
        dm_channel
            .send_message(&ctx.http, serenity::CreateMessage::new().embed(embed))
            .await
    };

    if let Err(source) = message.await {
        debug!(?source, user_id = %member.user.id, "could not DM new member");
    }
}
