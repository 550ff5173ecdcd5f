use chrono::NaiveDate;
use taskline::model::fields::{FieldType, UserFieldSchema};
use taskline::model::parser::{ParserOptions, TaskParser};
use taskline::model::triggers::{
    CONTEXTS, PRIORITY, PROJECTS, STATUS, SuggesterKind, TAGS, TriggerConfig, TriggerDef,
    TriggerResolver,
};

fn schema() -> Vec<UserFieldSchema> {
    vec![UserFieldSchema::new("owner", "Owner", FieldType::Text)]
}

#[test]
fn test_default_triggers() {
    let r = TriggerResolver::new(TriggerConfig::default(), &[]);
    assert_eq!(r.trigger_for(TAGS), Some("#"));
    assert_eq!(r.trigger_for(CONTEXTS), Some("@"));
    assert_eq!(r.trigger_for(PROJECTS), Some("+"));
    assert_eq!(r.trigger_for(STATUS), Some("*"));
    assert_eq!(r.trigger_for(PRIORITY), Some("!"));
    assert_eq!(r.trigger_for("owner"), None);
}

#[test]
fn test_reverse_lookup() {
    let config = TriggerConfig::default().with(TriggerDef::new("owner", "owner:"));
    let r = TriggerResolver::new(config, &schema());
    assert_eq!(r.property_for_trigger("@"), Some(CONTEXTS));
    assert_eq!(r.property_for_trigger("owner:"), Some("owner"));
    assert_eq!(r.property_for_trigger("%"), None);
}

#[test]
fn test_disabled_trigger_is_kept_but_not_active() {
    let config = TriggerConfig::default().with(TriggerDef::new(CONTEXTS, "@").disabled());
    let r = TriggerResolver::new(config, &[]);
    assert_eq!(r.trigger_for(CONTEXTS), None);
    assert_eq!(r.property_for_trigger("@"), None);
    let def = r.config_for(CONTEXTS).expect("definition kept");
    assert!(!def.enabled);
}

#[test]
fn test_empty_trigger_counts_as_disabled() {
    let config = TriggerConfig::default().with(TriggerDef::new(TAGS, ""));
    let r = TriggerResolver::new(config, &[]);
    assert_eq!(r.trigger_for(TAGS), None);
}

#[test]
fn test_user_field_detection_and_suggesters() {
    let config = TriggerConfig::default().with(TriggerDef::new("owner", "owner:"));
    let r = TriggerResolver::new(config, &schema());
    assert!(r.is_user_field("owner"));
    assert!(!r.is_user_field(TAGS));
    assert!(!r.is_user_field("nobody"));

    assert_eq!(r.suggester_for(TAGS), Some(SuggesterKind::Tag));
    assert_eq!(r.suggester_for(STATUS), Some(SuggesterKind::Status));
    assert_eq!(
        r.suggester_for("owner"),
        Some(SuggesterKind::UserField(FieldType::Text))
    );
    assert_eq!(r.suggester_for("nobody"), None);
}

#[test]
fn test_rebuild_after_config_change() {
    let mut r = TriggerResolver::new(TriggerConfig::default(), &[]);
    r.rebuild();
    assert_eq!(r.trigger_for(TAGS), Some("#"));

    r.set_config(TriggerConfig::default().with(TriggerDef::new(TAGS, "%")));
    assert_eq!(r.trigger_for(TAGS), Some("%"));
    assert_eq!(r.property_for_trigger("#"), None);
    assert_eq!(r.property_for_trigger("%"), Some(TAGS));
}

#[test]
fn test_parser_uses_custom_triggers() {
    let options = ParserOptions {
        triggers: TriggerConfig::default()
            .with(TriggerDef::new(TAGS, "%"))
            .with(TriggerDef::new(CONTEXTS, "ctx:")),
        ..Default::default()
    };
    let reference = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let task = TaskParser::new(options).parse_at("email #boss %work ctx:desk", reference);
    assert_eq!(task.tags, vec!["work"]);
    assert_eq!(task.contexts, vec!["desk"]);
    assert_eq!(task.title, "email #boss");
}
