use poise::serenity_prelude as serenity;
use rand::Rng;
use tracing::error;

use geode_core::Data;
use geode_store::impls::balances::add_balance;
use geode_store::impls::settings::{SettingKey, is_enabled};

/// Credit a small random reward for every non-bot message when the
/// chatRewards toggle is enabled.
pub fn handle_message_reward(data: &Data, message: &serenity::Message) {
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    if !is_enabled(&data.store, SettingKey::ChatRewards) {
        return;
    }

    let reward: i64 = rand::thread_rng().gen_range(0..=2);
    if reward == 0 {
        return;
    }

    if let Err(source) = add_balance(&data.store, message.author.id.get(), reward) {
        error!(?source, "failed to credit chat reward");
    }
}
