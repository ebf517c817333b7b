//! Shared escalation logic, run after every recorded warning.
//!
//! The ledger only computes which punishment applies to a user's new
//! active total; this module executes it against Discord. The table is
//! evaluated once at the new total, so a single large warning lands on
//! exactly one row and skipped tiers never fire retroactively.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use geode_store::impls::warnings::escalate;
use geode_store::model::warnings::PunishmentAction;
use geode_utils::formatting::format_compact_duration;

use crate::moderation::embeds::{is_missing_permissions_error, send_moderation_target_dm_for_guild};

/// Apply the escalation table to `total_active_severity` and carry out the
/// selected action. Returns the action taken, if any.
///
/// Failures to apply the punishment (role hierarchy, missing permissions)
/// are logged and swallowed: the warning itself is already recorded.
pub async fn check_and_escalate(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    target_user: &serenity::User,
    total_active_severity: u64,
) -> Option<PunishmentAction> {
    let action = escalate(total_active_severity)?;

    info!(
        user_id = %target_user.id,
        guild_id = %guild_id,
        total_active_severity,
        ?action,
        "warning escalation triggered"
    );

    let reason = format!(
        "Reached {} active warning point(s) in the last 30 days",
        total_active_severity
    );

    match action {
        PunishmentAction::Timeout { seconds } => {
            let until_system_time = SystemTime::now()
                .checked_add(Duration::from_secs(seconds))
                .unwrap_or(SystemTime::now());
            let until_unix = until_system_time
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_secs()) as i64;

            if let Ok(until) = serenity::Timestamp::from_unix_timestamp(until_unix) {
                let edit = serenity::EditMember::new().disable_communication_until_datetime(until);
                if let Err(source) = guild_id.edit_member(http, target_user.id, edit).await {
                    if is_missing_permissions_error(&source) {
                        warn!(
                            user_id = %target_user.id,
                            "missing permissions to auto-timeout user (check role hierarchy)"
                        );
                    } else {
                        error!(?source, "failed to auto-timeout user");
                    }
                }
            }

            let _ = send_moderation_target_dm_for_guild(
                http,
                target_user,
                guild_id,
                "timed out",
                Some(&reason),
                Some(&format_compact_duration(seconds)),
            )
            .await;
        }
        PunishmentAction::Ban => {
            // DM before the ban lands; afterwards the shared server is gone
            // and the DM would fail.
            let _ = send_moderation_target_dm_for_guild(
                http,
                target_user,
                guild_id,
                "banned",
                Some(&reason),
                None,
            )
            .await;

            if let Err(source) = guild_id
                .ban_with_reason(http, target_user.id, 0, &reason)
                .await
            {
                if is_missing_permissions_error(&source) {
                    warn!(
                        user_id = %target_user.id,
                        "missing permissions to auto-ban user (check role hierarchy)"
                    );
                } else {
                    error!(?source, "failed to auto-ban user");
                }
            }
        }
    }

    Some(action)
}
