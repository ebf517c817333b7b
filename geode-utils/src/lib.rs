/// Generic embed builders shared across commands.
pub mod embed;
/// Shared formatting helpers (durations, toggle labels).
pub mod formatting;
/// Pure parser helpers.
pub mod parse;
/// Permission helper utilities.
pub mod permissions;
/// Shared time helpers.
pub mod time;

/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
