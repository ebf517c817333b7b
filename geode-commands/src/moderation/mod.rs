pub mod ban;
pub(crate) mod embeds;
pub mod escalation_check;
pub mod kick;
pub mod lock;
pub mod mute;
pub mod unlock;
pub mod unmute;
pub mod unwarn;
pub mod warn;
pub mod warnings;

pub use embeds::send_moderation_target_dm_for_guild;
