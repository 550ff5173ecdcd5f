// File: ./src/model/parser.rs
//! Quick-entry parser: turns one line of free text into `ParsedTaskData`.
//!
//! Extraction runs as a fixed sequence of stages over a shrinking working
//! string. Each stage removes the tokens it understood and records them in
//! the result. Dates run last so digits inside tags or estimates are already
//! gone by then.
use crate::model::dates::{DateMatch, DateParser, NaturalDateParser, ParsedComponents, parse_clock};
use crate::model::fields::{ChoiceDef, FieldType, PriorityDef, StatusDef, UserFieldSchema};
use crate::model::item::{ParsedTaskData, UNTITLED, UserFieldValue};
use crate::model::language::{BoundaryMode, DateVocabulary, LanguageConfig};
use crate::model::patterns::{
    BoundedRegex, alternation, collapse_whitespace, remove_span, remove_spans,
    trigger_token_regex,
};
use crate::model::recurrence::{RecurrenceSynthesizer, validate_rule};
use crate::model::triggers::{
    BUILT_IN, CONTEXTS, PRIORITY, PROJECTS, STATUS, TAGS, TriggerConfig, TriggerResolver,
};
use anyhow::{Result, anyhow, bail};
use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Characters tolerated between a date trigger and its date ("by the 5/1").
const TRIGGER_SLACK: usize = 3;

static ISO_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));
static CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("static time pattern"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Language code, e.g. "en" or "de-AT".
    pub language: String,
    /// Where a lone inferred date goes when no due/scheduled keyword decides.
    pub default_to_scheduled: bool,
    pub triggers: TriggerConfig,
    pub statuses: Vec<StatusDef>,
    pub priorities: Vec<PriorityDef>,
    pub user_fields: Vec<UserFieldSchema>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            default_to_scheduled: false,
            triggers: TriggerConfig::default(),
            statuses: Vec::new(),
            priorities: Vec::new(),
            user_fields: Vec::new(),
        }
    }
}

/// Extraction stages in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Tags,
    Contexts,
    Projects,
    Priority,
    Status,
    Recurrence,
    Estimate,
    UserFields,
    Dates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateKind {
    Due,
    Scheduled,
}

/// Matcher for one spelling of a configured status/priority.
#[derive(Debug, Clone)]
struct ChoiceMatcher {
    value: String,
    triggered: Option<BoundedRegex>,
    bare: BoundedRegex,
}

#[derive(Debug, Clone)]
struct FieldMatcher {
    schema: UserFieldSchema,
    regex: Regex,
}

#[derive(Debug)]
pub struct TaskParser {
    options: ParserOptions,
    lang: LanguageConfig,
    resolver: TriggerResolver,
    date_parser: Box<dyn DateParser>,
    recurrence: RecurrenceSynthesizer,
    tag_re: Option<Regex>,
    context_re: Option<Regex>,
    project_link_re: Option<Regex>,
    project_re: Option<Regex>,
    custom_priorities: Vec<ChoiceMatcher>,
    custom_statuses: Vec<ChoiceMatcher>,
    fallback_priorities: Vec<(String, BoundedRegex)>,
    fallback_statuses: Vec<(String, BoundedRegex)>,
    estimate_combined: Option<BoundedRegex>,
    estimate_hours: Option<BoundedRegex>,
    estimate_minutes: Option<BoundedRegex>,
    /// Words that turn a following "15h" into a clock time ("à", "um").
    time_connectors: Vec<String>,
    field_matchers: Vec<FieldMatcher>,
    due_re: Option<BoundedRegex>,
    scheduled_re: Option<BoundedRegex>,
}

fn usable<T>(what: &str, built: Result<T>) -> Option<T> {
    match built {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("{} pattern unavailable: {:#}", what, e);
            None
        }
    }
}

fn token_regex(resolver: &TriggerResolver, property: &str, body: &str) -> Option<Regex> {
    let trigger = resolver.trigger_for(property)?;
    usable(property, trigger_token_regex(trigger, body))
}

/// Builds matchers for configured choices, longest spelling first.
fn choice_matchers(defs: &[ChoiceDef], trigger: Option<&str>) -> Vec<ChoiceMatcher> {
    let mut candidates: Vec<(&str, &str)> = defs
        .iter()
        .flat_map(|d| d.spellings().into_iter().map(move |s| (s, d.value.as_str())))
        .collect();
    candidates.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

    let mut out = Vec::new();
    for (spelling, value) in candidates {
        let escaped = regex::escape(spelling);
        let triggered = trigger.and_then(|t| {
            usable(
                "custom choice",
                BoundedRegex::new(
                    &format!("{}{}", regex::escape(t), escaped),
                    BoundaryMode::Whitespace,
                ),
            )
        });
        if let Some(bare) = usable(
            "custom choice",
            BoundedRegex::new(&escaped, BoundaryMode::Whitespace),
        ) {
            out.push(ChoiceMatcher {
                value: value.to_string(),
                triggered,
                bare,
            });
        }
    }
    out
}

fn fallback_matchers(
    words: &[(&'static str, Vec<&'static str>)],
    boundary: BoundaryMode,
    trigger: Option<&str>,
) -> Vec<(String, BoundedRegex)> {
    // Whitespace-bounded words must swallow their trigger to pass the boundary check.
    let prefix = match (boundary, trigger) {
        (BoundaryMode::Whitespace, Some(t)) => format!("(?:{})?", regex::escape(t)),
        _ => String::new(),
    };
    words
        .iter()
        .filter(|(_, list)| !list.is_empty())
        .filter_map(|(value, list)| {
            let body = format!("{}(?:{})", prefix, alternation(list));
            usable("fallback", BoundedRegex::new(&body, boundary)).map(|re| (value.to_string(), re))
        })
        .collect()
}

fn keyword_regex(words: &[&'static str], boundary: BoundaryMode) -> Option<BoundedRegex> {
    if words.is_empty() {
        return None;
    }
    usable("date trigger", BoundedRegex::new(&alternation(words), boundary))
}

impl TaskParser {
    pub fn new(options: ParserOptions) -> Self {
        let lang = LanguageConfig::for_code(&options.language);
        let date_parser = Box::new(NaturalDateParser::new(lang.date_locale));
        Self::build(options, lang, date_parser)
    }

    /// Uses a caller-supplied calendar parser instead of the built-in one.
    pub fn with_date_parser(options: ParserOptions, date_parser: Box<dyn DateParser>) -> Self {
        let lang = LanguageConfig::for_code(&options.language);
        Self::build(options, lang, date_parser)
    }

    fn build(options: ParserOptions, lang: LanguageConfig, date_parser: Box<dyn DateParser>) -> Self {
        let resolver = TriggerResolver::new(options.triggers.clone(), &options.user_fields);

        let tag_re = token_regex(&resolver, TAGS, r"(?P<val>[\w/-]+)");
        let context_re = token_regex(&resolver, CONTEXTS, r"(?P<val>\w+)");
        let project_link_re = token_regex(&resolver, PROJECTS, r"\[\[(?P<val>[^\]]+)\]\]");
        let project_re = token_regex(&resolver, PROJECTS, r"(?P<val>\w[\w/-]*)");

        let priority_trigger = resolver.trigger_for(PRIORITY);
        let status_trigger = resolver.trigger_for(STATUS);
        let custom_priorities = choice_matchers(&options.priorities, priority_trigger);
        let custom_statuses = choice_matchers(&options.statuses, status_trigger);
        let fallback_priorities =
            fallback_matchers(&lang.priority_words, lang.boundary, priority_trigger);
        let fallback_statuses = fallback_matchers(&lang.status_words, lang.boundary, status_trigger);

        let hours = alternation(&lang.hour_units);
        let minutes = alternation(&lang.minute_units);
        let (estimate_combined, estimate_hours, estimate_minutes) =
            if hours.is_empty() || minutes.is_empty() {
                log::error!("No estimate units for '{}'", lang.language);
                (None, None, None)
            } else {
                (
                    usable(
                        "estimate",
                        BoundedRegex::new(
                            &format!(
                                r"(?P<h>\d+)\s*(?:{})\s*(?P<m>\d+)\s*(?:{})",
                                hours, minutes
                            ),
                            lang.boundary,
                        ),
                    ),
                    usable(
                        "estimate",
                        BoundedRegex::new(
                            &format!(r"(?P<h>\d+(?:[.,]\d+)?)\s*(?:{})", hours),
                            lang.boundary,
                        ),
                    ),
                    usable(
                        "estimate",
                        BoundedRegex::new(&format!(r"(?P<m>\d+)\s*(?:{})", minutes), lang.boundary),
                    ),
                )
            };

        let time_connectors = DateVocabulary::for_language(lang.date_locale)
            .at
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        let field_matchers = options
            .user_fields
            .iter()
            .filter(|f| !BUILT_IN.contains(&f.id.as_str()))
            .filter_map(|f| {
                let trigger = resolver.trigger_for(&f.id)?;
                let regex = usable(
                    &f.id,
                    trigger_token_regex(trigger, r#"(?:"(?P<q>[^"]*)"|(?P<val>\S+))"#),
                )?;
                Some(FieldMatcher {
                    schema: f.clone(),
                    regex,
                })
            })
            .collect();

        let due_re = keyword_regex(&lang.due_triggers, lang.boundary);
        let scheduled_re = keyword_regex(&lang.scheduled_triggers, lang.boundary);
        let recurrence = RecurrenceSynthesizer::new(&lang);

        Self {
            options,
            lang,
            resolver,
            date_parser,
            recurrence,
            tag_re,
            context_re,
            project_link_re,
            project_re,
            custom_priorities,
            custom_statuses,
            fallback_priorities,
            fallback_statuses,
            estimate_combined,
            estimate_hours,
            estimate_minutes,
            time_connectors,
            field_matchers,
            due_re,
            scheduled_re,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn language(&self) -> &LanguageConfig {
        &self.lang
    }

    pub fn resolver(&self) -> &TriggerResolver {
        &self.resolver
    }

    /// Parses relative to the current local time.
    pub fn parse(&self, input: &str) -> ParsedTaskData {
        self.parse_at(input, Local::now().naive_local())
    }

    /// Parses relative to `reference`. Never fails; unrecognized parts stay in the title.
    pub fn parse_at(&self, input: &str, reference: NaiveDateTime) -> ParsedTaskData {
        let (first_line, details) = match input.split_once('\n') {
            Some((first, rest)) => (first, Some(rest)),
            None => (input, None),
        };

        let mut data = ParsedTaskData::default();
        let mut text = first_line.trim().to_string();
        for stage in Stage::iter() {
            match self.run_stage(stage, &text, &mut data, reference) {
                Ok(rest) => text = rest,
                Err(e) => log::warn!("Stage '{}' failed on {:?}: {:#}", stage, text, e),
            }
        }
        log::debug!("Residual title after extraction: {:?}", text);

        data.title = text;
        // Kept verbatim; only an empty remainder counts as no details.
        data.details = details.filter(|d| !d.is_empty()).map(|d| d.to_string());
        finalize(data)
    }

    /// Runs a single stage over `text`, returning the residual text.
    pub fn run_stage(
        &self,
        stage: Stage,
        text: &str,
        data: &mut ParsedTaskData,
        reference: NaiveDateTime,
    ) -> Result<String> {
        match stage {
            Stage::Tags => self.extract_tags(text, data),
            Stage::Contexts => self.extract_contexts(text, data),
            Stage::Projects => self.extract_projects(text, data),
            Stage::Priority => self.extract_priority(text, data),
            Stage::Status => self.extract_status(text, data),
            Stage::Recurrence => self.extract_recurrence(text, data),
            Stage::Estimate => self.extract_estimate(text, data),
            Stage::UserFields => self.extract_user_fields(text, data),
            Stage::Dates => self.extract_dates(text, data, reference),
        }
    }

    fn ready<'a>(&self, property: &str, re: &'a Option<Regex>) -> Result<Option<&'a Regex>> {
        if self.resolver.trigger_for(property).is_none() {
            return Ok(None);
        }
        re.as_ref()
            .map(Some)
            .ok_or_else(|| anyhow!("{} pattern unavailable", property))
    }

    fn extract_tags(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let Some(re) = self.ready(TAGS, &self.tag_re)? else {
            return Ok(text.to_string());
        };
        let (values, spans) = collect_tokens(re, text);
        data.tags.extend(values);
        Ok(remove_spans(text, &spans))
    }

    fn extract_contexts(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let Some(re) = self.ready(CONTEXTS, &self.context_re)? else {
            return Ok(text.to_string());
        };
        let (values, spans) = collect_tokens(re, text);
        data.contexts.extend(values);
        Ok(remove_spans(text, &spans))
    }

    fn extract_projects(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let Some(link_re) = self.ready(PROJECTS, &self.project_link_re)? else {
            return Ok(text.to_string());
        };
        let Some(bare_re) = self.ready(PROJECTS, &self.project_re)? else {
            return Ok(text.to_string());
        };
        // Links first, so "+[[Big Plan]]" is never half-eaten as "+".
        let (links, spans) = collect_tokens(link_re, text);
        let text = remove_spans(text, &spans);
        let (bare, spans) = collect_tokens(bare_re, &text);
        data.projects.extend(links);
        data.projects.extend(bare);
        Ok(remove_spans(&text, &spans))
    }

    fn extract_priority(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let found = if self.options.priorities.is_empty() {
            self.match_fallback(text, &self.fallback_priorities, self.resolver.trigger_for(PRIORITY))
        } else {
            match_custom(text, &self.custom_priorities)
        };
        Ok(match found {
            Some((value, start, end)) => {
                data.priority = Some(value);
                remove_span(text, start, end)
            }
            None => text.to_string(),
        })
    }

    fn extract_status(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let found = if self.options.statuses.is_empty() {
            self.match_fallback(text, &self.fallback_statuses, self.resolver.trigger_for(STATUS))
        } else {
            match_custom(text, &self.custom_statuses)
        };
        Ok(match found {
            Some((value, start, end)) => {
                data.status = Some(value);
                remove_span(text, start, end)
            }
            None => text.to_string(),
        })
    }

    fn match_fallback(
        &self,
        text: &str,
        table: &[(String, BoundedRegex)],
        trigger: Option<&str>,
    ) -> Option<(String, usize, usize)> {
        for (value, re) in table {
            if let Some(m) = re.captures(text).and_then(|c| c.get(0)) {
                let mut start = m.start();
                if let Some(t) = trigger
                    && text[..start].ends_with(t)
                {
                    start -= t.len();
                }
                return Some((value.clone(), start, m.end()));
            }
        }
        None
    }

    fn extract_recurrence(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let Some(found) = self.recurrence.find(text) else {
            return Ok(text.to_string());
        };
        data.recurrence = Some(found.rule.to_string());
        Ok(remove_span(text, found.start, found.end))
    }

    fn extract_estimate(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let (Some(combined), Some(hours), Some(minutes)) = (
            &self.estimate_combined,
            &self.estimate_hours,
            &self.estimate_minutes,
        ) else {
            bail!("estimate patterns unavailable for '{}'", self.lang.language);
        };

        // A combined "1h30m" is the whole estimate.
        if let Some(caps) = combined.captures(text) {
            let h = capture_number(&caps, "h")?;
            let m = capture_number(&caps, "m")?;
            let whole = caps.get(0).ok_or_else(|| anyhow!("empty estimate match"))?;
            match minutes_from(h * 60.0 + m) {
                Some(total) => {
                    if total > 0 {
                        data.estimate = Some(total);
                    }
                    return Ok(remove_span(text, whole.start(), whole.end()));
                }
                None => log::debug!("Estimate '{}' out of range, ignoring it", whole.as_str()),
            }
        }

        let mut total = 0u32;
        let mut text = text.to_string();
        for (re, group, scale) in [(hours, "h", 60.0), (minutes, "m", 1.0)] {
            let mut taken = None;
            for caps in re.captures_all(&text) {
                let whole = caps.get(0).ok_or_else(|| anyhow!("empty estimate match"))?;
                if group == "h" && self.follows_time_connector(&text[..whole.start()]) {
                    log::debug!("'{}' is a clock time, not an estimate", whole.as_str());
                    continue;
                }
                let value = capture_number(&caps, group)?;
                match minutes_from(value * scale).and_then(|v| total.checked_add(v)) {
                    Some(sum) => {
                        taken = Some((sum, whole.start(), whole.end()));
                        break;
                    }
                    None => log::debug!("Estimate '{}' out of range, ignoring it", whole.as_str()),
                }
            }
            if let Some((sum, start, end)) = taken {
                total = sum;
                text = remove_span(&text, start, end);
            }
        }

        if total > 0 {
            data.estimate = Some(total);
        }
        Ok(text)
    }

    fn follows_time_connector(&self, before: &str) -> bool {
        let before = before.trim_end().to_lowercase();
        self.time_connectors.iter().any(|word| {
            before
                .strip_suffix(word.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.ends_with(char::is_whitespace))
        })
    }

    fn extract_user_fields(&self, text: &str, data: &mut ParsedTaskData) -> Result<String> {
        let mut text = text.to_string();
        for matcher in &self.field_matchers {
            let id = matcher.schema.id.clone();
            let mut spans = Vec::new();
            let mut values = Vec::new();

            for caps in matcher.regex.captures_iter(&text) {
                let Some(tok) = caps.name("tok") else {
                    continue;
                };
                let raw = caps
                    .name("q")
                    .or_else(|| caps.name("val"))
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                let value = match matcher.schema.field_type {
                    FieldType::Boolean => normalize_bool(&raw).map(str::to_string),
                    FieldType::Number => raw.replace(',', ".").parse::<f64>().ok().map(|_| raw),
                    FieldType::Text | FieldType::Date | FieldType::List => {
                        (!raw.is_empty()).then_some(raw)
                    }
                };
                let Some(value) = value else {
                    log::debug!("Ignoring unusable value for field '{}'", id);
                    continue;
                };
                spans.push((tok.start(), tok.end()));
                values.push(value);
                if matcher.schema.field_type != FieldType::List {
                    break;
                }
            }

            if values.is_empty() {
                continue;
            }
            let value = if matcher.schema.field_type == FieldType::List {
                UserFieldValue::List(
                    values
                        .iter()
                        .flat_map(|v| v.split(','))
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect(),
                )
            } else {
                UserFieldValue::Text(values.remove(0))
            };
            data.user_fields.insert(id, value);
            text = remove_spans(&text, &spans);
        }
        Ok(text)
    }

    fn extract_dates(
        &self,
        text: &str,
        data: &mut ParsedTaskData,
        reference: NaiveDateTime,
    ) -> Result<String> {
        if let Some(rest) = self.explicit_dates(text, data, reference)? {
            return Ok(rest);
        }
        self.inferred_dates(text, data, reference)
    }

    /// Phase A: a date right after a due/scheduled phrase. The first such
    /// phrase that yields a date wins and ends the stage.
    fn explicit_dates(
        &self,
        text: &str,
        data: &mut ParsedTaskData,
        reference: NaiveDateTime,
    ) -> Result<Option<String>> {
        let mut triggers: Vec<(usize, usize, DateKind)> = Vec::new();
        for (re, kind) in [
            (&self.due_re, DateKind::Due),
            (&self.scheduled_re, DateKind::Scheduled),
        ] {
            let Some(re) = re else { continue };
            for caps in re.captures_all(text) {
                if let Some(m) = caps.get(0) {
                    triggers.push((m.start(), m.end(), kind));
                }
            }
        }
        triggers.sort_by_key(|(start, _, _)| *start);

        for (start, end, kind) in triggers {
            let rest = &text[end..];
            let matches = self.date_parser.parse(rest, reference, true)?;
            let Some(found) = matches.into_iter().next() else {
                continue;
            };
            let lead = rest.get(..found.index).unwrap_or_default();
            if lead.trim().chars().count() > TRIGGER_SLACK {
                continue;
            }
            log::debug!("Explicit {:?} date from {:?}", kind, found.text);
            assign(data, kind, &found.start);
            let spans = [(start, end), (end + found.index, end + found.end_index())];
            return Ok(Some(remove_spans(text, &spans)));
        }
        Ok(None)
    }

    /// Phase B: the first date anywhere in the remaining text.
    fn inferred_dates(
        &self,
        text: &str,
        data: &mut ParsedTaskData,
        reference: NaiveDateTime,
    ) -> Result<String> {
        let matches = self.date_parser.parse(text, reference, true)?;
        let Some(found) = matches.into_iter().next() else {
            return Ok(text.to_string());
        };

        if is_range(&found) {
            if let Some(end) = &found.end {
                assign(data, DateKind::Scheduled, &found.start);
                assign(data, DateKind::Due, end);
            }
        } else {
            let has_due = self.due_re.as_ref().is_some_and(|re| re.is_match(text));
            let has_scheduled = self.scheduled_re.as_ref().is_some_and(|re| re.is_match(text));
            let kind = match (has_due, has_scheduled) {
                (true, false) => DateKind::Due,
                (false, true) => DateKind::Scheduled,
                // Neither or both: the configured default decides.
                _ if self.options.default_to_scheduled => DateKind::Scheduled,
                _ => DateKind::Due,
            };
            assign(data, kind, &found.start);
        }
        Ok(remove_span(text, found.index, found.end_index()))
    }
}

fn is_range(found: &DateMatch) -> bool {
    found
        .end
        .as_ref()
        .is_some_and(|end| end.datetime() != found.start.datetime())
}

fn assign(data: &mut ParsedTaskData, kind: DateKind, when: &ParsedComponents) {
    let date = when.date().format("%Y-%m-%d").to_string();
    let time = when.time().map(|t| t.format("%H:%M").to_string());
    match kind {
        DateKind::Due => {
            data.due_date = Some(date);
            data.due_time = time;
        }
        DateKind::Scheduled => {
            data.scheduled_date = Some(date);
            data.scheduled_time = time;
        }
    }
}

/// Values and `tok` spans of every match of a trigger token pattern.
fn collect_tokens(re: &Regex, text: &str) -> (Vec<String>, Vec<(usize, usize)>) {
    let mut values = Vec::new();
    let mut spans = Vec::new();
    for caps in re.captures_iter(text) {
        if let (Some(tok), Some(val)) = (caps.name("tok"), caps.name("val")) {
            values.push(val.as_str().trim().to_string());
            spans.push((tok.start(), tok.end()));
        }
    }
    (values, spans)
}

fn match_custom(text: &str, matchers: &[ChoiceMatcher]) -> Option<(String, usize, usize)> {
    let triggered = matchers.iter().find_map(|m| {
        let re = m.triggered.as_ref()?;
        let whole = re.captures(text)?.get(0)?;
        Some((m.value.clone(), whole.start(), whole.end()))
    });
    triggered.or_else(|| {
        matchers.iter().find_map(|m| {
            let whole = m.bare.captures(text)?.get(0)?;
            Some((m.value.clone(), whole.start(), whole.end()))
        })
    })
}

fn capture_number(caps: &regex::Captures, name: &str) -> Result<f64> {
    let raw = caps
        .name(name)
        .ok_or_else(|| anyhow!("missing '{}' in estimate", name))?;
    raw.as_str()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|e| anyhow!("bad estimate number '{}': {}", raw.as_str(), e))
}

/// Whole minutes, or `None` when the value does not fit a `u32`.
fn minutes_from(value: f64) -> Option<u32> {
    let rounded = value.round();
    (rounded >= 0.0 && rounded <= f64::from(u32::MAX)).then_some(rounded as u32)
}

fn normalize_bool(raw: &str) -> Option<&'static str> {
    match raw.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Some("true"),
        "false" | "no" | "n" | "0" | "off" => Some("false"),
        _ => None,
    }
}

/// Trims, drops blanks and keeps the first occurrence of each entry.
fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let item = item.trim().to_string();
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn valid_date(s: &str) -> bool {
    ISO_DAY.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

fn valid_time(s: &str) -> bool {
    CLOCK.is_match(s) && parse_clock(s).is_some()
}

fn clean_date_pair(date: &mut Option<String>, time: &mut Option<String>) {
    if date.as_deref().is_some_and(|d| !valid_date(d)) {
        log::debug!("Discarding malformed date {:?}", date);
        *date = None;
    }
    if date.is_none() || time.as_deref().is_some_and(|t| !valid_time(t)) {
        *time = None;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Final cleanup applied to every parse result.
pub fn finalize(mut data: ParsedTaskData) -> ParsedTaskData {
    data.title = collapse_whitespace(&data.title);
    if data.title.is_empty() {
        data.title = UNTITLED.to_string();
    }

    data.tags = dedupe(data.tags);
    data.contexts = dedupe(data.contexts);
    data.projects = dedupe(data.projects);

    clean_date_pair(&mut data.due_date, &mut data.due_time);
    clean_date_pair(&mut data.scheduled_date, &mut data.scheduled_time);

    data.priority = non_blank(data.priority);
    data.status = non_blank(data.status);

    if let Some(rule) = &data.recurrence
        && !validate_rule(rule)
    {
        log::warn!("Dropping invalid recurrence rule '{}'", rule);
        data.recurrence = None;
    }
    if data.estimate == Some(0) {
        data.estimate = None;
    }

    data.user_fields = std::mem::take(&mut data.user_fields)
        .into_iter()
        .filter_map(|(id, value)| {
            let value = match value {
                UserFieldValue::List(items) => UserFieldValue::List(dedupe(items)),
                UserFieldValue::Text(s) => UserFieldValue::Text(s.trim().to_string()),
            };
            (!value.is_blank()).then_some((id, value))
        })
        .collect();
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let items = vec!["b".into(), " a".into(), "b".into(), "".into(), "a".into()];
        assert_eq!(dedupe(items), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn finalize_drops_malformed_dates_and_times() {
        let data = ParsedTaskData {
            due_date: Some("2024-02-30".into()),
            due_time: Some("10:00".into()),
            scheduled_date: Some("2024-02-03".into()),
            scheduled_time: Some("7pm".into()),
            estimate: Some(0),
            recurrence: Some("BYDAY=MO".into()),
            ..Default::default()
        };
        let out = finalize(data);
        assert_eq!(out.title, UNTITLED);
        assert_eq!(out.due_date, None);
        assert_eq!(out.due_time, None);
        assert_eq!(out.scheduled_date.as_deref(), Some("2024-02-03"));
        assert_eq!(out.scheduled_time, None);
        assert_eq!(out.estimate, None);
        assert_eq!(out.recurrence, None);
    }

    #[test]
    fn stages_without_matches_leave_text_alone() {
        let parser = TaskParser::new(ParserOptions::default());
        let text = "plain  words here";
        for stage in Stage::iter() {
            let mut data = ParsedTaskData::default();
            let out = parser.run_stage(stage, text, &mut data, reference()).unwrap();
            assert_eq!(out, text, "stage {} changed the text", stage);
            assert_eq!(data, ParsedTaskData::default(), "stage {} wrote data", stage);
        }
    }

    #[test]
    fn bool_normalization() {
        assert_eq!(normalize_bool("YES"), Some("true"));
        assert_eq!(normalize_bool("off"), Some("false"));
        assert_eq!(normalize_bool("maybe"), None);
    }
}
