//! Inbound slash command parameters.

use std::fmt;

/// Form fields a chat platform posts when a user invokes a slash command.
///
/// Every field is optional at parse time; absence is dealt with by the
/// handler, not the extractor.
#[derive(Debug, Clone, Default)]
pub struct SlashCommand {
    pub token: Option<String>,
    pub team_id: Option<String>,
    pub team_domain: Option<String>,
    pub channel_id: Option<String>,
    pub channel_name: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub command: Option<String>,
    pub text: Option<String>,
    pub response_url: Option<String>,
}

impl SlashCommand {
    /// Build from decoded form pairs. The first value wins for repeated
    /// keys and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut command = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "token" => &mut command.token,
                "team_id" => &mut command.team_id,
                "team_domain" => &mut command.team_domain,
                "channel_id" => &mut command.channel_id,
                "channel_name" => &mut command.channel_name,
                "user_id" => &mut command.user_id,
                "user_name" => &mut command.user_name,
                "command" => &mut command.command,
                "text" => &mut command.text,
                "response_url" => &mut command.response_url,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        command
    }
}

/// Displays an optional form value, or `None` when it was not sent.
pub struct FieldValue<'a>(pub &'a Option<String>);

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => f.write_str(value),
            None => f.write_str("None"),
        }
    }
}
