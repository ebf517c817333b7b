pub mod automod;
pub mod chat_rewards;
pub mod member_join;

use poise::serenity_prelude as serenity;

pub(crate) fn is_missing_permissions(source: &serenity::Error) -> bool {
    matches!(
        source,
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403 || response.error.code == 50013
    )
}
