//! Text clean-up for content the bot stores or echoes back.

/// Zero-width space used to break mention syntax without visibly changing the text.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Replaces user mentions with `@name`.
///
/// Both `<@id>` and the nickname form `<@!id>` are replaced for every user in `mentions`.
/// Mentions of users not in the list are left untouched.
///
/// # Arguments
/// - `content` - Raw message content
/// - `mentions` - `(user id, display name)` pairs for the users mentioned in the message
///
/// # Returns
/// - `String` - Content with known mentions replaced
pub fn replace_mentions<'a>(
    content: &str,
    mentions: impl IntoIterator<Item = (u64, &'a str)>,
) -> String {
    let mut replaced = content.to_string();

    for (id, name) in mentions {
        let readable = format!("@{}", name);
        replaced = replaced
            .replace(&format!("<@{}>", id), &readable)
            .replace(&format!("<@!{}>", id), &readable);
    }

    replaced
}

/// Makes user supplied text safe to echo back inside a code block.
///
/// Strips code fences so the text cannot close the surrounding block, and defangs mass
/// mentions and user/role mentions so echoing a stored item never pings anyone.
pub fn sanitize_output(text: &str) -> String {
    text.replace("```", "")
        .replace("@everyone", &format!("@{}everyone", ZERO_WIDTH_SPACE))
        .replace("@here", &format!("@{}here", ZERO_WIDTH_SPACE))
        .replace("<@", &format!("<@{}", ZERO_WIDTH_SPACE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_both_mention_forms() {
        let content = "hi <@42> and <@!42>, not <@7>";
        let replaced = replace_mentions(content, [(42, "Sweetie")]);

        assert_eq!(replaced, "hi @Sweetie and @Sweetie, not <@7>");
    }

    #[test]
    fn leaves_content_without_mentions() {
        assert_eq!(replace_mentions("plain text", []), "plain text");
    }

    #[test]
    fn defangs_mass_mentions_and_fences() {
        let sanitized = sanitize_output("```@everyone <@42> @here```");

        assert!(!sanitized.contains("```"));
        assert!(!sanitized.contains("@everyone"));
        assert!(!sanitized.contains("@here"));
        assert!(!sanitized.contains("<@4"));
        assert!(sanitized.contains("everyone"));
    }
}
