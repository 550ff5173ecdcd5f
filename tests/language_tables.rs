use chrono::{NaiveDate, NaiveDateTime};
use taskline::model::item::ParsedTaskData;
use taskline::model::language::{BoundaryMode, Language, LanguageConfig};
use taskline::model::parser::{ParserOptions, TaskParser};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn parse_in(lang: &str, input: &str) -> ParsedTaskData {
    let options = ParserOptions {
        language: lang.to_string(),
        ..Default::default()
    };
    TaskParser::new(options).parse_at(input, reference())
}

#[test]
fn test_language_codes() {
    assert_eq!(Language::from_code("de-AT"), Language::De);
    assert_eq!(Language::from_code("FR"), Language::Fr);
    assert_eq!(Language::from_code("es_MX"), Language::Es);
    // Unknown codes fall back to English.
    assert_eq!(Language::from_code("xx"), Language::En);
    assert_eq!(LanguageConfig::for_code("ru").language, Language::Ru);
}

#[test]
fn test_boundary_modes() {
    assert_eq!(LanguageConfig::for_language(Language::En).boundary, BoundaryMode::Word);
    for lang in [Language::De, Language::Fr, Language::Es, Language::Ru] {
        let cfg = LanguageConfig::for_language(lang);
        assert_eq!(cfg.boundary, BoundaryMode::Whitespace, "{}", lang);
        assert_eq!(cfg.date_locale, lang);
    }
}

#[test]
fn test_every_table_is_populated() {
    for lang in [
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
        Language::Ru,
    ] {
        let cfg = LanguageConfig::for_language(lang);
        assert!(!cfg.due_triggers.is_empty(), "{}", lang);
        assert!(!cfg.scheduled_triggers.is_empty(), "{}", lang);
        assert!(!cfg.recurrence.every.is_empty(), "{}", lang);
        assert!(!cfg.hour_units.is_empty(), "{}", lang);
        assert!(!cfg.minute_units.is_empty(), "{}", lang);
        assert_eq!(cfg.priority_words.len(), 4, "{}", lang);
        assert_eq!(cfg.status_words.len(), 5, "{}", lang);
    }
}

#[test]
fn test_german_fallback_words() {
    let task = parse_in("de", "Bericht schreiben dringend erledigt");
    assert_eq!(task.priority.as_deref(), Some("urgent"));
    assert_eq!(task.status.as_deref(), Some("done"));
    assert_eq!(task.title, "Bericht schreiben");
}

#[test]
fn test_german_recurrence() {
    let task = parse_in("de", "Müll rausbringen jeden Montag");
    assert_eq!(task.recurrence.as_deref(), Some("FREQ=WEEKLY;BYDAY=MO"));
    assert_eq!(task.title, "Müll rausbringen");
}

#[test]
fn test_whitespace_boundary_in_cyrillic() {
    let task = parse_in("ru", "позвонить врачу срочно");
    assert_eq!(task.priority.as_deref(), Some("urgent"));
    assert_eq!(task.title, "позвонить врачу");

    // "несрочно" contains the keyword but is a different word.
    let task = parse_in("ru", "несрочно позвонить");
    assert_eq!(task.priority, None);
    assert_eq!(task.title, "несрочно позвонить");
}

#[test]
fn test_russian_has_no_every_other_pattern() {
    let task = parse_in("ru", "уборка каждую неделю");
    assert_eq!(task.recurrence.as_deref(), Some("FREQ=WEEKLY"));
    assert_eq!(task.title, "уборка");
}

#[test]
fn test_french_estimate_and_tomorrow() {
    let task = parse_in("fr", "réunion demain 45 min");
    assert_eq!(task.estimate, Some(45));
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.title, "réunion");
}

#[test]
fn test_unknown_language_parses_as_english() {
    let task = parse_in("xx", "call mom tomorrow !high");
    assert_eq!(task.priority.as_deref(), Some("high"));
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
}

#[test]
fn test_clock_hours_after_connector_are_not_estimates() {
    let task = parse_in("fr", "réunion demain à 15h");
    assert_eq!(task.estimate, None);
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.due_time.as_deref(), Some("15:00"));
    assert_eq!(task.title, "réunion");

    let task = parse_in("de", "Treffen morgen um 15h");
    assert_eq!(task.estimate, None);
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.due_time.as_deref(), Some("15:00"));
    assert_eq!(task.title, "Treffen");

    // Without the connector it is still a duration.
    let task = parse_in("fr", "lecture 2h");
    assert_eq!(task.estimate, Some(120));
    assert_eq!(task.title, "lecture");
}
