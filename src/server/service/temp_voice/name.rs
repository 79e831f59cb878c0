/// Discord's maximum channel name length in characters.
const MAX_CHANNEL_NAME_CHARS: usize = 100;

/// Fallback for `{user}` when the joining member's name is unknown.
const UNKNOWN_MEMBER_NAME: &str = "user";

/// Renders a temporary channel name from a guild's template.
///
/// Supports `{count}` (the per-guild sequence number) and `{user}` (the joining member's
/// display name). The result is trimmed and truncated to Discord's name limit; an empty
/// result falls back to the count alone.
///
/// # Arguments
/// - `template` - Guild's configured name template
/// - `count` - Sequence number from the guild counter
/// - `member_name` - Display name of the member who triggered creation, if known
///
/// # Returns
/// - `String` - Channel name ready for the create request
pub fn render_channel_name(template: &str, count: u64, member_name: Option<&str>) -> String {
    let member_name = member_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_MEMBER_NAME);

    let rendered = template
        .replace("{count}", &count.to_string())
        .replace("{user}", member_name);

    let trimmed = rendered.trim();
    if trimmed.is_empty() {
        return count.to_string();
    }

    trimmed.chars().take(MAX_CHANNEL_NAME_CHARS).collect()
}
