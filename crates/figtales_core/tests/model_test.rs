//! Tests for images, files, requests and share links.

use figtales_core::{
    DesignFile, EncodedImage, GenerationRequest, ShareLink, StorySettings, UserStory,
    fallback_prompt,
};

#[test]
fn test_data_url_without_mime_defaults_to_jpeg() {
    let image = EncodedImage::from_data_url("data:;base64,AAAA").unwrap();
    assert_eq!(image.mime_type(), "image/jpeg");
    assert_eq!(image.data(), "AAAA");

    let image = EncodedImage::from_data_url("AAAA,BBBB").unwrap();
    assert_eq!(image.mime_type(), "image/jpeg");
}

#[test]
fn test_data_url_without_payload_is_rejected() {
    assert!(EncodedImage::from_data_url("data:image/png;base64").is_none());
    assert!(EncodedImage::from_data_url("data:image/png;base64,").is_none());
}

#[test]
fn test_design_file_payload_persists_as_base64() {
    let file = DesignFile::new("home.png", "image/png", b"hello".to_vec());
    let json = serde_json::to_value(&file).unwrap();
    assert_eq!(json["payload"], "aGVsbG8=");
    assert_eq!(json["mimeType"], "image/png");
    assert!(json.get("preview").is_none());

    let restored: DesignFile = serde_json::from_value(json).unwrap();
    assert_eq!(restored.payload(), &b"hello".to_vec());
    assert_eq!(restored.id(), file.id());
    assert!(restored.preview().is_none());
}

#[test]
fn test_request_from_settings_embeds_shape() {
    let settings = StorySettings::default();
    let request = GenerationRequest::from_settings(&settings, Vec::new());
    assert_eq!(request.shape(), (5, 3));
    assert!(request.prompt().contains("Generate exactly 5 user stories"));
    assert!(request.prompt().contains("3 acceptance criteria"));
    assert!(request.prompt().contains("As a [user type]"));
    assert!(!request.prompt().contains("audience"));
}

#[test]
fn test_fallback_prompt() {
    assert_eq!(
        fallback_prompt(2, 4),
        "Generate 2 user stories with 4 acceptance criteria each based on these design screens."
    );
}

#[test]
fn test_share_link_url() {
    let link = ShareLink::new("http://localhost:8080", "42");
    assert_eq!(link.url(), "http://localhost:8080/share/42");
    assert_eq!(link.id(), "42");
}

#[test]
fn test_story_ids_are_fresh() {
    let a = UserStory::new("As a user", "d", Vec::new());
    let b = UserStory::new("As a user", "d", Vec::new());
    assert_ne!(a.id(), b.id());
}
