use base64::{engine::general_purpose, Engine as _};

/// Embed URL prefix used when no `embed_base` is configured.
pub const DEFAULT_EMBED_BASE: &str = "https://youtube.com/embed/";

/// A single "show this video" instruction, built fresh for every request.
///
/// The identifier is appended to the embed base verbatim. No escaping happens
/// here: the only transformation before the URL crosses into the page's script
/// context is [`DisplayCommand::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCommand {
    url: String,
}

impl DisplayCommand {
    pub fn for_video(embed_base: &str, video: &str) -> Self {
        DisplayCommand {
            url: format!("{embed_base}{video}"),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Standard padded base64 of the URL bytes. The alphabet contains no quote
    /// or backslash, so the result can sit inside a single-quoted JS string.
    pub fn encode(&self) -> String {
        general_purpose::STANDARD.encode(self.url.as_bytes())
    }
}

/// Reverse of [`DisplayCommand::encode`], i.e. what the page does with `atob`.
/// Returns None if the payload is not valid base64 or not UTF-8.
pub fn decode_payload(payload: &str) -> Option<String> {
    let bytes = general_purpose::STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}
