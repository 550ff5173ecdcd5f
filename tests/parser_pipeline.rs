use anyhow::anyhow;
use chrono::{NaiveDate, NaiveDateTime};
use taskline::model::dates::{DateMatch, DateParser};
use taskline::model::fields::{ChoiceDef, FieldType, UserFieldSchema};
use taskline::model::item::{ParsedTaskData, UserFieldValue};
use taskline::model::parser::{ParserOptions, TaskParser};
use taskline::model::triggers::{TAGS, TriggerConfig, TriggerDef};

fn reference() -> NaiveDateTime {
    // Monday
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn parse(input: &str) -> ParsedTaskData {
    TaskParser::new(ParserOptions::default()).parse_at(input, reference())
}

fn parse_with(options: ParserOptions, input: &str) -> ParsedTaskData {
    TaskParser::new(options).parse_at(input, reference())
}

#[test]
fn test_full_line_with_due_trigger() {
    let options = ParserOptions {
        default_to_scheduled: true,
        ..Default::default()
    };
    let task = parse_with(
        options,
        "Submit report due tomorrow 5pm #work @office +ProjectX p1",
    );

    // "p1" is not a fallback priority word, so it stays in the title.
    assert_eq!(task.title, "Submit report p1");
    assert_eq!(task.tags, vec!["work"]);
    assert_eq!(task.contexts, vec!["office"]);
    assert_eq!(task.projects, vec!["ProjectX"]);
    assert_eq!(task.priority, None);
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.due_time.as_deref(), Some("17:00"));
    assert_eq!(task.scheduled_date, None);
}

#[test]
fn test_weekly_recurrence_with_estimate() {
    let task = parse("Weekly sync every monday 30min");
    assert_eq!(task.recurrence.as_deref(), Some("FREQ=WEEKLY;BYDAY=MO"));
    assert_eq!(task.estimate, Some(30));
    assert_eq!(task.title, "Weekly sync");
    assert!(!task.has_dates());
}

#[test]
fn test_empty_input() {
    let task = parse("");
    assert_eq!(
        task,
        ParsedTaskData {
            title: "Untitled Task".to_string(),
            ..Default::default()
        }
    );
    assert_eq!(parse("   ").title, "Untitled Task");
}

#[test]
fn test_duplicate_tags_collapse() {
    let task = parse("take out trash #chore #chore @home");
    assert_eq!(task.tags, vec!["chore"]);
    assert_eq!(task.contexts, vec!["home"]);
    assert_eq!(task.title, "take out trash");
}

#[test]
fn test_tag_hierarchy_and_order() {
    let task = parse("#b file #a/sub taxes #b");
    assert_eq!(task.tags, vec!["b", "a/sub"]);
    assert_eq!(task.title, "file taxes");
}

#[test]
fn test_token_order_does_not_matter() {
    let a = parse("buy milk #errand @store tomorrow");
    let b = parse("@store buy milk #errand tomorrow");
    assert_eq!(a.tags, b.tags);
    assert_eq!(a.contexts, b.contexts);
    assert_eq!(a.due_date, b.due_date);
    assert_eq!(a.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(a.title, "buy milk");
}

#[test]
fn test_custom_priority_prefers_longest_label() {
    let options = ParserOptions {
        priorities: vec![ChoiceDef::new("p1"), ChoiceDef::new("p1-urgent")],
        ..Default::default()
    };
    let parser = TaskParser::new(options);

    let task = parser.parse_at("fix bug p1-urgent", reference());
    assert_eq!(task.priority.as_deref(), Some("p1-urgent"));
    assert_eq!(task.title, "fix bug");

    let task = parser.parse_at("fix bug p1", reference());
    assert_eq!(task.priority.as_deref(), Some("p1"));
}

#[test]
fn test_custom_priority_label_and_trigger() {
    let options = ParserOptions {
        priorities: vec![
            ChoiceDef::new("1-high").with_label("High"),
            ChoiceDef::new("3-low").with_label("Low"),
        ],
        ..Default::default()
    };
    let parser = TaskParser::new(options);

    let task = parser.parse_at("water plants !low", reference());
    assert_eq!(task.priority.as_deref(), Some("3-low"));
    assert_eq!(task.title, "water plants");

    // Custom definitions replace the language fallback entirely.
    let task = parser.parse_at("urgent call", reference());
    assert_eq!(task.priority, None);
    assert_eq!(task.title, "urgent call");
}

#[test]
fn test_fallback_priority_and_status_words() {
    let task = parse("renew passport !urgent *waiting");
    assert_eq!(task.priority.as_deref(), Some("urgent"));
    assert_eq!(task.status.as_deref(), Some("waiting"));
    assert_eq!(task.title, "renew passport");

    let task = parse("plan trip high priority in progress");
    assert_eq!(task.priority.as_deref(), Some("high"));
    assert_eq!(task.status.as_deref(), Some("in-progress"));
    assert_eq!(task.title, "plan trip");
}

#[test]
fn test_custom_status_values() {
    let options = ParserOptions {
        statuses: vec![ChoiceDef::new("backlog"), ChoiceDef::new("in-review")],
        ..Default::default()
    };
    let task = parse_with(options, "check PR *in-review");
    assert_eq!(task.status.as_deref(), Some("in-review"));
    assert_eq!(task.title, "check PR");
}

#[test]
fn test_explicit_trigger_wins_and_stops() {
    let task = parse("due tomorrow scheduled friday");
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.scheduled_date, None);
    assert_eq!(task.title, "scheduled friday");
}

#[test]
fn test_scheduled_trigger() {
    let task = parse("paint fence start on saturday");
    assert_eq!(task.scheduled_date.as_deref(), Some("2024-01-06"));
    assert_eq!(task.due_date, None);
    assert_eq!(task.title, "paint fence");
}

#[test]
fn test_time_estimate_sums_separate_matches() {
    assert_eq!(parse("meeting 1h30m").estimate, Some(90));

    // The combined phrase settles the estimate on its own.
    let task = parse("meeting 1h30m plus another 15min");
    assert_eq!(task.estimate, Some(90));
    assert_eq!(task.title, "meeting plus another 15min");

    let task = parse("workshop 2h then 15min");
    assert_eq!(task.estimate, Some(135));
    assert_eq!(task.title, "workshop then");

    assert_eq!(parse("read 2 hours").estimate, Some(120));
    assert_eq!(parse("read 1.5h").estimate, Some(90));
}

#[test]
fn test_oversized_estimates_are_dropped() {
    let task = parse("task 4294967295min then 1h");
    assert_eq!(task.estimate, Some(60));
    assert_eq!(task.title, "task 4294967295min then");

    let task = parse("task 1h 4294967295min");
    assert_eq!(task.estimate, Some(60));
    assert_eq!(task.title, "task 4294967295min");

    let task = parse("nap 99999999999min");
    assert_eq!(task.estimate, None);
    assert_eq!(task.title, "nap 99999999999min");
}

#[test]
fn test_wiki_link_projects() {
    let task = parse("plan +[[Big Plan]] and +Garden");
    assert_eq!(task.projects, vec!["Big Plan", "Garden"]);
    assert_eq!(task.title, "plan and");
}

#[test]
fn test_details_after_first_line() {
    let task = parse("Title line #x\nmore text\n  indented");
    assert_eq!(task.title, "Title line");
    assert_eq!(task.details.as_deref(), Some("more text\n  indented"));
    assert_eq!(task.tags, vec!["x"]);

    // Details are passed through as typed; only an empty remainder is dropped.
    assert_eq!(parse("only title\n   ").details.as_deref(), Some("   "));
    assert_eq!(parse("only title\n").details, None);
}

#[test]
fn test_inferred_date_follows_default_flag() {
    let task = parse("call mom tomorrow");
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.scheduled_date, None);

    let options = ParserOptions {
        default_to_scheduled: true,
        ..Default::default()
    };
    let task = parse_with(options, "call mom tomorrow");
    assert_eq!(task.scheduled_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.due_date, None);
}

#[test]
fn test_keyword_far_from_date_still_decides_kind() {
    let options = ParserOptions {
        default_to_scheduled: true,
        ..Default::default()
    };
    let task = parse_with(options, "report due for review tomorrow");
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.scheduled_date, None);
    assert_eq!(task.title, "report due for review");
}

#[test]
fn test_both_keywords_fall_back_to_default() {
    let input = "start the due diligence tomorrow";

    let task = parse(input);
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.scheduled_date, None);

    let options = ParserOptions {
        default_to_scheduled: true,
        ..Default::default()
    };
    let task = parse_with(options, input);
    assert_eq!(task.scheduled_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.due_date, None);
}

#[test]
fn test_range_maps_to_scheduled_and_due() {
    let task = parse("vacation jan 10 to jan 15");
    assert_eq!(task.scheduled_date.as_deref(), Some("2024-01-10"));
    assert_eq!(task.due_date.as_deref(), Some("2024-01-15"));
    assert_eq!(task.title, "vacation");
}

#[test]
fn test_time_only_when_hour_is_known() {
    let task = parse("lunch tomorrow");
    assert_eq!(task.due_date.as_deref(), Some("2024-01-02"));
    assert_eq!(task.due_time, None);

    let task = parse("lunch tomorrow at noon");
    assert_eq!(task.due_time.as_deref(), Some("12:00"));
    assert_eq!(task.title, "lunch");
}

#[test]
fn test_user_fields() {
    let options = ParserOptions {
        triggers: TriggerConfig::default()
            .with(TriggerDef::new("owner", "owner:"))
            .with(TriggerDef::new("labels", "labels:"))
            .with(TriggerDef::new("billable", "billable:"))
            .with(TriggerDef::new("effort", "effort:")),
        user_fields: vec![
            UserFieldSchema::new("owner", "Owner", FieldType::Text),
            UserFieldSchema::new("labels", "Labels", FieldType::List),
            UserFieldSchema::new("billable", "Billable", FieldType::Boolean),
            UserFieldSchema::new("effort", "Effort", FieldType::Number),
        ],
        ..Default::default()
    };
    let task = parse_with(
        options,
        r#"fix sink owner:"Ann Lee" labels:a,b labels:c billable:yes effort:2.5"#,
    );

    assert_eq!(task.title, "fix sink");
    assert_eq!(
        task.user_field("owner"),
        Some(&UserFieldValue::Text("Ann Lee".to_string()))
    );
    assert_eq!(
        task.user_field("labels").and_then(|v| v.as_list()),
        Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
    );
    assert_eq!(
        task.user_field("billable"),
        Some(&UserFieldValue::Text("true".to_string()))
    );
    assert_eq!(
        task.user_field("effort"),
        Some(&UserFieldValue::Text("2.5".to_string()))
    );
}

#[test]
fn test_user_field_without_schema_is_ignored() {
    let options = ParserOptions {
        triggers: TriggerConfig::default().with(TriggerDef::new("owner", "owner:")),
        ..Default::default()
    };
    let task = parse_with(options, "fix sink owner:ann");
    assert!(task.user_fields.is_empty());
    assert_eq!(task.title, "fix sink owner:ann");
}

#[test]
fn test_disabled_tag_trigger() {
    let options = ParserOptions {
        triggers: TriggerConfig::default().with(TriggerDef::new(TAGS, "#").disabled()),
        ..Default::default()
    };
    let task = parse_with(options, "keep #literal hash");
    assert!(task.tags.is_empty());
    assert_eq!(task.title, "keep #literal hash");
}

#[derive(Debug)]
struct BrokenCalendar;

impl DateParser for BrokenCalendar {
    fn parse(
        &self,
        _text: &str,
        _reference: NaiveDateTime,
        _forward_date: bool,
    ) -> anyhow::Result<Vec<DateMatch>> {
        Err(anyhow!("calendar exploded"))
    }
}

#[test]
fn test_failing_stage_does_not_abort_parse() {
    let parser = TaskParser::with_date_parser(ParserOptions::default(), Box::new(BrokenCalendar));
    let task = parser.parse_at("pay rent tomorrow #bills", reference());
    assert_eq!(task.tags, vec!["bills"]);
    assert_eq!(task.due_date, None);
    assert_eq!(task.title, "pay rent tomorrow");
}

#[test]
fn test_json_output_skips_empty_fields() {
    let json = parse("water plants #home 30min").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "water plants");
    assert_eq!(value["tags"][0], "home");
    assert_eq!(value["estimate"], 30);
    assert!(value.get("dueDate").is_none());
    assert!(value.get("userFields").is_none());
}
