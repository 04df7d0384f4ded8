//! Tests for settings validation and partial updates.

use figtales_core::{SettingsField, SettingsUpdate, StorySettings};

#[test]
fn test_defaults_are_valid() {
    let settings = StorySettings::default();
    assert!(settings.is_valid());
    assert_eq!(*settings.story_count(), 5);
    assert_eq!(*settings.criteria_count(), 3);
    assert_eq!(settings.user_type(), "user");
    assert!(settings.audience_type().is_none());
}

#[test]
fn test_criteria_count_above_max_is_rejected() {
    let mut settings = StorySettings::default();
    settings.apply(SettingsUpdate::new().criteria_count(4));

    let report = settings.apply(SettingsUpdate::new().criteria_count(9));

    assert_eq!(*settings.criteria_count(), 4);
    assert!(report.has_rejections());
    assert_eq!(report.rejected().len(), 1);
    assert_eq!(report.rejected()[0].field, SettingsField::CriteriaCount);
    assert_eq!(report.rejected()[0].value, "9");
    assert!(report.applied().is_empty());
}

#[test]
fn test_fields_are_validated_independently() {
    let mut settings = StorySettings::default();
    let report = settings.apply(
        SettingsUpdate::new()
            .story_count(0)
            .criteria_count(8)
            .user_type("shopper"),
    );

    assert_eq!(*settings.story_count(), 5);
    assert_eq!(*settings.criteria_count(), 8);
    assert_eq!(settings.user_type(), "shopper");
    assert_eq!(
        report.applied(),
        &vec![SettingsField::CriteriaCount, SettingsField::UserType]
    );
    assert_eq!(report.rejected()[0].field, SettingsField::StoryCount);
}

#[test]
fn test_range_bounds_are_inclusive() {
    let mut settings = StorySettings::default();
    let report = settings.apply(SettingsUpdate::new().story_count(15).criteria_count(1));
    assert!(!report.has_rejections());
    assert_eq!(*settings.story_count(), 15);
    assert_eq!(*settings.criteria_count(), 1);

    let report = settings.apply(SettingsUpdate::new().story_count(16));
    assert!(report.has_rejections());
    assert_eq!(*settings.story_count(), 15);
}

#[test]
fn test_blank_user_type_is_rejected() {
    let mut settings = StorySettings::default();
    let report = settings.apply(SettingsUpdate::new().user_type("   "));
    assert!(report.has_rejections());
    assert_eq!(settings.user_type(), "user");
}

#[test]
fn test_audience_can_be_set_and_cleared() {
    let mut settings = StorySettings::default();
    settings.apply(SettingsUpdate::new().audience_type(Some("Small business owners".into())));
    assert_eq!(
        settings.audience_type().as_deref(),
        Some("Small business owners")
    );

    settings.apply(SettingsUpdate::new().audience_type(Some("  ".into())));
    assert!(settings.audience_type().is_none());

    settings.apply(SettingsUpdate::new().audience_type(Some("Teachers".into())));
    settings.apply(SettingsUpdate::new().audience_type(None));
    assert!(settings.audience_type().is_none());
}

#[test]
fn test_out_of_range_json_is_invalid() {
    let settings: StorySettings = serde_json::from_str(
        r#"{"storyCount": 20, "criteriaCount": 3, "userType": "user"}"#,
    )
    .unwrap();
    assert!(!settings.is_valid());
}

#[test]
fn test_settings_serialize_camel_case() {
    let json = serde_json::to_value(StorySettings::default()).unwrap();
    assert_eq!(json["storyCount"], 5);
    assert_eq!(json["criteriaCount"], 3);
    assert_eq!(json["userType"], "user");
    assert!(json.get("audienceType").is_none());
}
