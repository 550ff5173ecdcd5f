// File: ./src/model/recurrence.rs
use crate::model::language::LanguageConfig;
use crate::model::patterns::{BoundedRegex, alternation};
use chrono::Weekday;
use rrule::RRuleSet;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }

    fn unit(&self, plural: bool) -> &'static str {
        match (self, plural) {
            (Frequency::Daily, false) => "day",
            (Frequency::Daily, true) => "days",
            (Frequency::Weekly, false) => "week",
            (Frequency::Weekly, true) => "weeks",
            (Frequency::Monthly, false) => "month",
            (Frequency::Monthly, true) => "months",
            (Frequency::Yearly, false) => "year",
            (Frequency::Yearly, true) => "years",
        }
    }
}

impl FromStr for Frequency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            "YEARLY" => Ok(Frequency::Yearly),
            _ => Err(()),
        }
    }
}

/// Named sets of weekdays ("every weekday", "weekends").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayGroup {
    Workdays,
    Weekend,
}

impl WeekdayGroup {
    pub fn days(&self) -> Vec<Weekday> {
        match self {
            WeekdayGroup::Workdays => vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            WeekdayGroup::Weekend => vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

pub fn parse_weekday_code(s: &str) -> Option<Weekday> {
    match s.to_uppercase().as_str() {
        "MO" => Some(Weekday::Mon),
        "TU" => Some(Weekday::Tue),
        "WE" => Some(Weekday::Wed),
        "TH" => Some(Weekday::Thu),
        "FR" => Some(Weekday::Fri),
        "SA" => Some(Weekday::Sat),
        "SU" => Some(Weekday::Sun),
        _ => None,
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Structured form of the rules this crate produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: u32,
    pub by_day: Vec<Weekday>,
    pub by_set_pos: Option<i32>,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            by_day: Vec::new(),
            by_set_pos: None,
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.by_day = days;
        self
    }

    pub fn with_set_pos(mut self, pos: i32) -> Self {
        self.by_set_pos = Some(pos);
        self
    }

    /// Reads a `FREQ=...;INTERVAL=...;BYDAY=...;BYSETPOS=...` string.
    /// Returns `None` for anything outside that subset.
    pub fn parse(rule: &str) -> Option<Self> {
        let clean = rule.trim();
        let clean = if clean.to_uppercase().starts_with("RRULE:") {
            &clean[6..]
        } else {
            clean
        };
        let mut frequency = None;
        let mut parsed = Self::new(Frequency::Daily);
        for part in clean.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = part.split_once('=')?;
            match key.trim().to_uppercase().as_str() {
                "FREQ" => frequency = Some(Frequency::from_str(value.trim()).ok()?),
                "INTERVAL" => parsed.interval = value.trim().parse().ok()?,
                "BYDAY" => {
                    parsed.by_day = value
                        .split(',')
                        .map(|code| parse_weekday_code(code.trim()))
                        .collect::<Option<Vec<_>>>()?;
                }
                "BYSETPOS" => parsed.by_set_pos = Some(value.trim().parse().ok()?),
                _ => return None,
            }
        }
        parsed.frequency = frequency?;
        Some(parsed)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={}", self.frequency.as_str())?;
        if self.interval > 1 {
            write!(f, ";INTERVAL={}", self.interval)?;
        }
        if !self.by_day.is_empty() {
            let codes: Vec<&str> = self.by_day.iter().map(|d| weekday_code(*d)).collect();
            write!(f, ";BYDAY={}", codes.join(","))?;
        }
        if let Some(pos) = self.by_set_pos {
            write!(f, ";BYSETPOS={}", pos)?;
        }
        Ok(())
    }
}

/// Accepts a rule only when it names a frequency, has no empty or
/// placeholder `BYDAY`, and survives a full `rrule` parse.
pub fn validate_rule(rule: &str) -> bool {
    let mut has_freq = false;
    for part in rule.split(';').filter(|p| !p.is_empty()) {
        let Some((key, value)) = part.split_once('=') else {
            return false;
        };
        let value = value.trim();
        match key.trim().to_uppercase().as_str() {
            "FREQ" => {
                if value.is_empty() || value.eq_ignore_ascii_case("undefined") {
                    return false;
                }
                has_freq = true;
            }
            "BYDAY" => {
                if value.is_empty() || value.contains("undefined") {
                    return false;
                }
            }
            "INTERVAL" => {
                if !value.parse::<u32>().is_ok_and(|n| n > 0) {
                    return false;
                }
            }
            _ => {}
        }
    }
    if !has_freq {
        return false;
    }

    let rrule_string = format!("DTSTART:20000103T000000Z\nRRULE:{}\n", rule);
    match RRuleSet::from_str(&rrule_string) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("rrule rejected '{}': {}", rule, e);
            false
        }
    }
}

fn ordinal_name(pos: i32) -> String {
    match pos {
        1 => "first".to_string(),
        2 => "second".to_string(),
        3 => "third".to_string(),
        4 => "fourth".to_string(),
        5 => "fifth".to_string(),
        -1 => "last".to_string(),
        n => format!("#{}", n),
    }
}

fn join_day_names(days: &[Weekday]) -> String {
    let names: Vec<&str> = days.iter().map(|d| weekday_name(*d)).collect();
    match names.len() {
        0 => String::new(),
        1 => names[0].to_string(),
        n => format!("{} and {}", names[..n - 1].join(", "), names[n - 1]),
    }
}

/// Human-readable text for a rule, falling back to the raw string.
pub fn describe_rule(rule: &str) -> String {
    let Some(parsed) = RecurrenceRule::parse(rule) else {
        return rule.to_string();
    };
    let every = if parsed.interval > 1 {
        format!("every {} {}", parsed.interval, parsed.frequency.unit(true))
    } else {
        format!("every {}", parsed.frequency.unit(false))
    };

    if parsed.by_day.is_empty() {
        if parsed.interval > 1 {
            return every;
        }
        return match parsed.frequency {
            Frequency::Daily => "daily".to_string(),
            Frequency::Weekly => "weekly".to_string(),
            Frequency::Monthly => "monthly".to_string(),
            Frequency::Yearly => "yearly".to_string(),
        };
    }

    if let Some(pos) = parsed.by_set_pos {
        let lead = if parsed.interval > 1 {
            every
        } else {
            "monthly".to_string()
        };
        return format!(
            "{} on the {} {}",
            lead,
            ordinal_name(pos),
            join_day_names(&parsed.by_day)
        );
    }

    if parsed.frequency == Frequency::Weekly && parsed.interval == 1 {
        if parsed.by_day == WeekdayGroup::Workdays.days() {
            return "every weekday".to_string();
        }
        if parsed.by_day == WeekdayGroup::Weekend.days() {
            return "every weekend".to_string();
        }
        return format!("every {}", join_day_names(&parsed.by_day));
    }
    format!("{} on {}", every, join_day_names(&parsed.by_day))
}

/// A rule found in text, with the byte span of the phrase that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceMatch {
    pub start: usize,
    pub end: usize,
    pub rule: RecurrenceRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    OrdinalWeekday,
    Interval,
    EveryOther,
    EveryWeekday,
    PluralWeekday,
    EveryPeriod,
    Frequency,
}

/// Builds recurrence rules from phrases like "every other week" or "mondays".
/// Patterns are tried most specific first; the first valid one wins.
#[derive(Debug, Clone)]
pub struct RecurrenceSynthesizer {
    patterns: Vec<(PatternKind, BoundedRegex)>,
    ordinals: HashMap<String, i32>,
    weekdays: HashMap<String, Weekday>,
    groups: HashMap<String, WeekdayGroup>,
    periods: HashMap<String, Frequency>,
    frequencies: HashMap<String, Frequency>,
}

impl RecurrenceSynthesizer {
    pub fn new(lang: &LanguageConfig) -> Self {
        let vocab = &lang.recurrence;
        let every = alternation(&vocab.every);
        let other = alternation(&vocab.other);
        let ordinals = alternation(&words_of(&vocab.ordinals));
        let weekdays = alternation(&words_of(&vocab.weekdays));
        let plurals = alternation(&words_of(&vocab.plural_weekdays));
        let periods = alternation(&words_of(&vocab.periods));
        let freqs = alternation(&words_of(&vocab.frequencies));
        let groups = alternation(&words_of(&vocab.weekday_groups));
        let plural_groups = alternation(&words_of(&vocab.plural_weekday_groups));

        let every_units = [weekdays.as_str(), groups.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("|");
        let bare_units = [plurals.as_str(), plural_groups.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("|");
        let other_units = [periods.as_str(), weekdays.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("|");

        let specs: Vec<(PatternKind, Vec<&str>, String)> = vec![
            (
                PatternKind::OrdinalWeekday,
                vec![every.as_str(), ordinals.as_str(), weekdays.as_str()],
                format!(r"(?:{})\s+(?P<ord>{})\s+(?P<unit>{})", every, ordinals, weekdays),
            ),
            (
                PatternKind::Interval,
                vec![every.as_str(), periods.as_str()],
                format!(r"(?:{})\s+(?P<n>\d+)\s+(?P<unit>{})", every, periods),
            ),
            (
                PatternKind::EveryOther,
                vec![every.as_str(), other.as_str(), other_units.as_str()],
                format!(r"(?:{})\s+(?:{})\s+(?P<unit>{})", every, other, other_units),
            ),
            (
                PatternKind::EveryWeekday,
                vec![every.as_str(), every_units.as_str()],
                format!(r"(?:{})\s+(?P<unit>{})", every, every_units),
            ),
            (
                PatternKind::PluralWeekday,
                vec![bare_units.as_str()],
                format!(r"(?P<unit>{})", bare_units),
            ),
            (
                PatternKind::EveryPeriod,
                vec![every.as_str(), periods.as_str()],
                format!(r"(?:{})\s+(?P<unit>{})", every, periods),
            ),
            (
                PatternKind::Frequency,
                vec![freqs.as_str()],
                format!(r"(?P<unit>{})", freqs),
            ),
        ];

        let mut patterns = Vec::new();
        for (kind, parts, body) in specs {
            // A language without words for one slot simply skips that pattern.
            if parts.iter().any(|p| p.is_empty()) {
                continue;
            }
            match BoundedRegex::new(&body, lang.boundary) {
                Ok(re) => patterns.push((kind, re)),
                Err(e) => log::error!("Recurrence pattern {:?} unavailable: {:#}", kind, e),
            }
        }

        let lower_map = |pairs: &[(&'static str, Weekday)]| -> HashMap<String, Weekday> {
            pairs.iter().map(|(w, d)| (w.to_lowercase(), *d)).collect()
        };
        let mut weekday_map = lower_map(&vocab.weekdays);
        weekday_map.extend(lower_map(&vocab.plural_weekdays));

        Self {
            patterns,
            ordinals: vocab
                .ordinals
                .iter()
                .map(|(w, n)| (w.to_lowercase(), *n))
                .collect(),
            weekdays: weekday_map,
            groups: vocab
                .weekday_groups
                .iter()
                .chain(vocab.plural_weekday_groups.iter())
                .map(|(w, g)| (w.to_lowercase(), *g))
                .collect(),
            periods: vocab
                .periods
                .iter()
                .map(|(w, f)| (w.to_lowercase(), *f))
                .collect(),
            frequencies: vocab
                .frequencies
                .iter()
                .map(|(w, f)| (w.to_lowercase(), *f))
                .collect(),
        }
    }

    /// Finds the highest-priority recurrence phrase in `text`.
    pub fn find(&self, text: &str) -> Option<RecurrenceMatch> {
        for (kind, re) in &self.patterns {
            let Some(caps) = re.captures(text) else {
                continue;
            };
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let unit = caps
                .name("unit")
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default();
            let rule = match kind {
                PatternKind::OrdinalWeekday => {
                    let ord = caps.name("ord").map(|m| m.as_str().to_lowercase());
                    self.ordinal_weekday(ord.as_deref(), &unit)
                }
                PatternKind::Interval => {
                    let n = caps.name("n").and_then(|m| m.as_str().parse::<u32>().ok());
                    match (n, self.periods.get(&unit)) {
                        (Some(n), Some(freq)) if n > 0 => {
                            Some(RecurrenceRule::new(*freq).with_interval(n))
                        }
                        _ => None,
                    }
                }
                PatternKind::EveryOther => {
                    if let Some(freq) = self.periods.get(&unit) {
                        Some(RecurrenceRule::new(*freq).with_interval(2))
                    } else {
                        self.weekdays.get(&unit).map(|day| {
                            RecurrenceRule::new(Frequency::Weekly)
                                .with_interval(2)
                                .with_days(vec![*day])
                        })
                    }
                }
                PatternKind::EveryWeekday | PatternKind::PluralWeekday => self.weekly_on(&unit),
                PatternKind::EveryPeriod => self.periods.get(&unit).map(|f| RecurrenceRule::new(*f)),
                PatternKind::Frequency => {
                    self.frequencies.get(&unit).map(|f| RecurrenceRule::new(*f))
                }
            };

            let Some(rule) = rule else {
                log::warn!(
                    "Recurrence phrase '{}' could not be classified, ignoring it",
                    whole.as_str()
                );
                continue;
            };
            if !validate_rule(&rule.to_string()) {
                log::warn!("Discarding invalid recurrence rule '{}'", rule);
                continue;
            }
            return Some(RecurrenceMatch {
                start: whole.start(),
                end: whole.end(),
                rule,
            });
        }
        None
    }

    fn ordinal_weekday(&self, ordinal: Option<&str>, unit: &str) -> Option<RecurrenceRule> {
        let pos = *self.ordinals.get(ordinal?)?;
        let day = *self.weekdays.get(unit)?;
        Some(
            RecurrenceRule::new(Frequency::Monthly)
                .with_days(vec![day])
                .with_set_pos(pos),
        )
    }

    fn weekly_on(&self, unit: &str) -> Option<RecurrenceRule> {
        if let Some(day) = self.weekdays.get(unit) {
            return Some(RecurrenceRule::new(Frequency::Weekly).with_days(vec![*day]));
        }
        self.groups
            .get(unit)
            .map(|g| RecurrenceRule::new(Frequency::Weekly).with_days(g.days()))
    }
}

fn words_of<T>(pairs: &[(&'static str, T)]) -> Vec<&'static str> {
    pairs.iter().map(|(w, _)| *w).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_string_omits_unit_interval() {
        let rule = RecurrenceRule::new(Frequency::Weekly).with_days(vec![Weekday::Mon]);
        assert_eq!(rule.to_string(), "FREQ=WEEKLY;BYDAY=MO");
        let rule = RecurrenceRule::new(Frequency::Daily).with_interval(3);
        assert_eq!(rule.to_string(), "FREQ=DAILY;INTERVAL=3");
    }

    #[test]
    fn parse_reads_back_display() {
        let rule = RecurrenceRule::new(Frequency::Monthly)
            .with_days(vec![Weekday::Fri])
            .with_set_pos(-1);
        assert_eq!(RecurrenceRule::parse(&rule.to_string()), Some(rule));
        assert_eq!(RecurrenceRule::parse("FREQ=HOURLY"), None);
    }
}
