//! Response payload sent back to the chat platform.
//!
//! Field names follow the platform's message attachment format.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SlashResponse {
    /// `in_channel` makes the reply visible to everyone in the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<&'static str>,
    pub text: &'static str,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    pub fallback: &'static str,
    pub color: &'static str,
    pub pretext: &'static str,
    pub author_name: &'static str,
    pub author_link: &'static str,
    pub author_icon: &'static str,
    pub title: &'static str,
    pub title_link: &'static str,
    pub text: &'static str,
    pub fields: Vec<AttachmentField>,
    pub image_url: &'static str,
    pub thumb_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttachmentField {
    pub title: &'static str,
    pub value: &'static str,
    pub short: bool,
}

impl SlashResponse {
    /// The fixed reply returned for every accepted command.
    pub fn fleshed_out(in_channel: bool) -> Self {
        Self {
            response_type: in_channel.then_some("in_channel"),
            text: "More fleshed out response to the slash command",
            attachments: vec![Attachment {
                fallback: "Required plain-text summary of the attachment.",
                color: "#36a64f",
                pretext: "Optional text above the attachment block",
                author_name: "Bobby Tables",
                author_link: "http://flickr.com/bobby/",
                author_icon: "http://flickr.com/icons/bobby.jpg",
                title: "Slack API Documentation",
                title_link: "https://api.slack.com/",
                text: "Optional text that appears within the attachment",
                fields: vec![AttachmentField {
                    title: "Priority",
                    value: "High",
                    short: false,
                }],
                image_url: "http://my-website.com/path/to/image.jpg",
                thumb_url: "http://example.com/path/to/thumb.png",
            }],
        }
    }
}
