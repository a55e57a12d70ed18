use vidremote::command::{decode_payload, DisplayCommand, DEFAULT_EMBED_BASE};
use vidremote::display::post_message_script;

#[test]
fn test_embed_url_is_prefix_plus_id() {
    let cmd = DisplayCommand::for_video(DEFAULT_EMBED_BASE, "dQw4w9WgXcQ");
    assert_eq!(cmd.url(), "https://youtube.com/embed/dQw4w9WgXcQ");
}

#[test]
fn test_encode_is_standard_padded_base64() {
    let cmd = DisplayCommand::for_video(DEFAULT_EMBED_BASE, "dQw4w9WgXcQ");
    assert_eq!(cmd.encode(), "aHR0cHM6Ly95b3V0dWJlLmNvbS9lbWJlZC9kUXc0dzlXZ1hjUQ==");
}

#[test]
fn test_decode_reverses_encode() {
    let cmd = DisplayCommand::for_video("https://example.test/e/", "a b'\"\\<>");
    assert_eq!(decode_payload(&cmd.encode()).as_deref(), Some(cmd.url()));
}

#[test]
fn test_encoded_payload_has_no_script_metacharacters() {
    let cmd = DisplayCommand::for_video(DEFAULT_EMBED_BASE, "');alert(1)//\n");
    let encoded = cmd.encode();
    assert!(
        encoded.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')),
        "unexpected character in payload: {encoded}"
    );
}

#[test]
fn test_custom_embed_base() {
    let cmd = DisplayCommand::for_video("https://player.example/embed?id=", "42");
    assert_eq!(cmd.url(), "https://player.example/embed?id=42");
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(decode_payload("not base64!").is_none());
}

#[test]
fn test_post_message_script_shape() {
    assert_eq!(
        post_message_script("aGk="),
        "window.postMessage(atob('aGk='))"
    );
}
