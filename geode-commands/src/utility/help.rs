use crate::{COMMANDS, CommandMeta};
use geode_core::{Context, Error};
use geode_utils::embed::basic_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists all available commands.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let embed = basic_embed("Available Commands", grouped_help_description());
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Commands grouped by category, sorted by category then name.
fn grouped_help_description() -> String {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    let mut description = String::new();
    let mut current_category = "";
    for command in commands {
        if command.category != current_category {
            if !description.is_empty() {
                description.push('\n');
            }
            description.push_str(&format!("**{}**\n", capitalize(command.category)));
            current_category = command.category;
        }
        description.push_str(&format!("`{}` : {}\n", command.usage, command.desc));
    }

    description
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, grouped_help_description};

    #[test]
    fn capitalizes_categories() {
        assert_eq!(capitalize("moderation"), "Moderation");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn help_lists_every_command_once() {
        let description = grouped_help_description();
        for command in crate::COMMANDS {
            assert!(
                description.contains(command.usage),
                "missing usage for {}",
                command.name
            );
        }
        assert_eq!(description.matches("`!warn ").count(), 1);
    }
}
