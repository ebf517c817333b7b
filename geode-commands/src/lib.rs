pub mod admin;
pub mod economy;
pub mod moderation;
pub mod utility;

use geode_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    economy::balance::META,
    economy::shop::META,
    economy::buy::META,
    admin::settings::META,
    admin::say::META,
    moderation::warn::META,
    moderation::warnings::META,
    moderation::unwarn::META,
    moderation::ban::META,
    moderation::kick::META,
    moderation::mute::META,
    moderation::unmute::META,
    moderation::lock::META,
    moderation::unlock::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::help::help(),
        economy::balance::balance(),
        economy::shop::shop(),
        economy::buy::buy(),
        admin::settings::settings(),
        admin::say::say(),
        moderation::warn::warn(),
        moderation::warnings::warnings(),
        moderation::unwarn::unwarn(),
        moderation::ban::ban(),
        moderation::kick::kick(),
        moderation::mute::mute(),
        moderation::unmute::unmute(),
        moderation::lock::lock(),
        moderation::unlock::unlock(),
    ]
}
