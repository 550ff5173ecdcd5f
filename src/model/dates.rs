// File: ./src/model/dates.rs
//! Calendar-aware date recognition.
//!
//! `DateParser` is the seam the task parser calls through; hosts can supply
//! their own. `NaturalDateParser` is the built-in implementation driven by a
//! `DateVocabulary`.
use crate::model::language::{DateVocabulary, Language};
use crate::model::patterns::alternation;
use anyhow::Result;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

/// One resolved point in time plus which parts the text actually stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedComponents {
    date: NaiveDate,
    time: NaiveTime,
    day_known: bool,
    year_known: bool,
    hour_known: bool,
    minute_known: bool,
}

impl ParsedComponents {
    /// A date whose time of day is only implied (noon).
    pub fn from_date(date: NaiveDate, year_known: bool) -> Self {
        Self {
            date,
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
            day_known: true,
            year_known,
            hour_known: false,
            minute_known: false,
        }
    }

    pub fn with_time(mut self, time: NaiveTime, minute_known: bool) -> Self {
        self.time = time;
        self.hour_known = true;
        self.minute_known = minute_known;
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The time of day, only when the hour was stated.
    pub fn time(&self) -> Option<NaiveTime> {
        self.hour_known.then_some(self.time)
    }

    pub fn is_certain(&self, component: Component) -> bool {
        match component {
            Component::Day | Component::Month => self.day_known,
            Component::Year => self.year_known,
            Component::Hour => self.hour_known,
            Component::Minute => self.minute_known,
        }
    }
}

/// A date expression found in text. `index` is a byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    pub index: usize,
    pub text: String,
    pub start: ParsedComponents,
    pub end: Option<ParsedComponents>,
}

impl DateMatch {
    pub fn end_index(&self) -> usize {
        self.index + self.text.len()
    }
}

pub trait DateParser: Send + Sync + fmt::Debug {
    /// Finds date expressions in `text`, earliest first. With `forward_date`
    /// ambiguous expressions resolve to the future.
    fn parse(&self, text: &str, reference: NaiveDateTime, forward_date: bool)
    -> Result<Vec<DateMatch>>;
}

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?P<y>\d{4})-(?P<m>\d{1,2})-(?P<d>\d{1,2})\b").expect("static ISO pattern")
});
static TIME_COLON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<h>\d{1,2}):(?P<m>\d{2})$").expect("static time pattern")
});

#[derive(Debug, Clone, Copy)]
enum AtomValue {
    Date(NaiveDate, bool),
    Time(NaiveTime, bool),
}

#[derive(Debug, Clone, Copy)]
struct Atom {
    start: usize,
    end: usize,
    value: AtomValue,
}

#[derive(Debug, Clone, Copy)]
struct Expr {
    start: usize,
    end: usize,
    date: Option<(NaiveDate, bool)>,
    time: Option<(NaiveTime, bool)>,
}

impl Expr {
    fn from_atom(atom: &Atom) -> Self {
        let mut expr = Self {
            start: atom.start,
            end: atom.end,
            date: None,
            time: None,
        };
        expr.absorb(atom);
        expr
    }

    fn absorb(&mut self, atom: &Atom) {
        self.start = self.start.min(atom.start);
        self.end = self.end.max(atom.end);
        match atom.value {
            AtomValue::Date(d, y) => self.date = Some((d, y)),
            AtomValue::Time(t, m) => self.time = Some((t, m)),
        }
    }

    fn components(&self, fallback_day: NaiveDate, reference: NaiveDateTime, forward: bool) -> ParsedComponents {
        match (self.date, self.time) {
            (Some((d, y)), Some((t, m))) => ParsedComponents::from_date(d, y).with_time(t, m),
            (Some((d, y)), None) => ParsedComponents::from_date(d, y),
            (None, Some((t, m))) => {
                let mut day = fallback_day;
                if forward && fallback_day == reference.date() && t < reference.time() {
                    day = day.succ_opt().unwrap_or(day);
                }
                let mut c = ParsedComponents::from_date(day, false).with_time(t, m);
                c.day_known = false;
                c
            }
            (None, None) => ParsedComponents::from_date(fallback_day, false),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RelativeUnit {
    Day,
    Week,
    Month,
    Year,
}

/// Rule-based date recognizer over one locale's vocabulary.
#[derive(Debug)]
pub struct NaturalDateParser {
    relative_day: Option<Regex>,
    in_units: Option<Regex>,
    next_unit: Option<Regex>,
    unit_next: Option<Regex>,
    weekday: Option<Regex>,
    month_day: Option<Regex>,
    day_month: Option<Regex>,
    numeric: Option<Regex>,
    time_ampm: Option<Regex>,
    time_24h: Option<Regex>,
    time_words: Option<Regex>,
    join_gap: Option<Regex>,
    range_gap: Option<Regex>,
    from_prefix: Option<Regex>,
    day_offsets: HashMap<String, i64>,
    units: HashMap<String, RelativeUnit>,
    weekdays: HashMap<String, Weekday>,
    months: HashMap<String, u32>,
    next_words: Vec<String>,
    one_words: Vec<String>,
    noon_words: Vec<String>,
    day_first: bool,
}

fn compile(name: &str, pattern: String) -> Option<Regex> {
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Date pattern '{}' failed to compile: {}", name, e);
            None
        }
    }
}

/// `(?:a|b)` or an empty string when the list is empty.
fn group(words: &[&str]) -> String {
    let alt = alternation(words);
    if alt.is_empty() {
        String::new()
    } else {
        format!("(?:{})", alt)
    }
}

/// `(?:(?:a|b)\s+)?` or nothing.
fn optional_prefix(words: &[&str]) -> String {
    let g = group(words);
    if g.is_empty() {
        g
    } else {
        format!(r"(?:{}\s+)?", g)
    }
}

fn lower_map<T: Copy>(pairs: &[(&'static str, T)]) -> HashMap<String, T> {
    pairs.iter().map(|(w, v)| (w.to_lowercase(), *v)).collect()
}

impl NaturalDateParser {
    pub fn new(locale: Language) -> Self {
        Self::with_vocabulary(DateVocabulary::for_language(locale))
    }

    pub fn with_vocabulary(v: DateVocabulary) -> Self {
        let names = |pairs: &[(&'static str, Weekday)]| -> Vec<&'static str> {
            pairs.iter().map(|(w, _)| *w).collect()
        };
        let month_names: Vec<&str> = v.months.iter().map(|(w, _)| *w).collect();
        let all_units: Vec<&str> = v
            .day_units
            .iter()
            .chain(&v.week_units)
            .chain(&v.month_units)
            .chain(&v.year_units)
            .copied()
            .collect();
        let big_units: Vec<&str> = v
            .week_units
            .iter()
            .chain(&v.month_units)
            .chain(&v.year_units)
            .copied()
            .collect();
        let rel_words: Vec<&str> = v
            .today
            .iter()
            .chain(&v.tomorrow)
            .chain(&v.yesterday)
            .copied()
            .collect();

        let on = optional_prefix(&v.on);
        let at = optional_prefix(&v.at);
        let next = group(&v.next);
        let this = group(&v.this);
        let months = group(&month_names);
        let joiners = optional_prefix(&v.month_joiners);

        let relative_day = (!rel_words.is_empty())
            .then(|| compile("relative day", format!(r"(?i)\b(?P<w>{})\b", group(&rel_words))))
            .flatten();

        let amount = if v.one.is_empty() {
            r"(?:(?P<n>\d+)\s+)?".to_string()
        } else {
            format!(r"(?P<n>\d+|{})\s+", group(&v.one))
        };
        let in_units = (!v.in_words.is_empty() && !all_units.is_empty())
            .then(|| {
                compile(
                    "in units",
                    format!(
                        r"(?i)\b{}\s+{}(?P<unit>{})\b",
                        group(&v.in_words),
                        amount,
                        group(&all_units)
                    ),
                )
            })
            .flatten();

        let next_unit = (!next.is_empty())
            .then(|| {
                compile(
                    "next unit",
                    format!(r"(?i)\b{}\s+(?P<unit>{})\b", next, group(&big_units)),
                )
            })
            .flatten();
        let unit_next = (!next.is_empty())
            .then(|| {
                compile(
                    "unit next",
                    format!(r"(?i)\b(?P<unit>{})\s+{}\b", group(&big_units), next),
                )
            })
            .flatten();

        let modifier = match (next.is_empty(), this.is_empty()) {
            (false, false) => format!(r"(?:(?:(?P<next>{})|(?P<this>{}))\s+)?", next, this),
            (false, true) => format!(r"(?:(?P<next>{})\s+)?", next),
            (true, false) => format!(r"(?:(?P<this>{})\s+)?", this),
            (true, true) => String::new(),
        };
        let postfix = if next.is_empty() {
            String::new()
        } else {
            format!(r"(?:\s+(?P<post>{})\b)?", next)
        };
        let weekday = compile(
            "weekday",
            format!(
                r"(?i)\b{}{}(?P<wd>{})\b{}",
                on,
                modifier,
                group(&names(&v.weekdays)),
                postfix
            ),
        );

        let month_day = compile(
            "month day",
            format!(
                r"(?i)\b{}(?P<month>{})\.?\s+(?P<day>\d{{1,2}})(?:st|nd|rd|th)?\b(?:,?\s+(?P<year>\d{{4}})\b)?",
                on, months
            ),
        );
        let day_month = compile(
            "day month",
            format!(
                r"(?i)\b{on}(?P<day>\d{{1,2}})(?:st|nd|rd|th|er|\.)?\s+{j}(?P<month>{m})\b\.?(?:,?\s+{j}(?P<year>\d{{4}})\b)?",
                on = on,
                j = joiners,
                m = months
            ),
        );

        let numeric = if v.day_first {
            compile(
                "numeric",
                r"\b(?P<a>\d{1,2})(?:\.(?P<b>\d{1,2})\.(?P<y>\d{4}|\d{2})?|/(?P<b2>\d{1,2})(?:/(?P<y2>\d{4}|\d{2}))?\b)"
                    .to_string(),
            )
        } else {
            compile(
                "numeric",
                r"\b(?P<a>\d{1,2})/(?P<b>\d{1,2})(?:/(?P<y>\d{4}|\d{2}))?\b".to_string(),
            )
        };

        let time_ampm = compile(
            "time am/pm",
            format!(
                r"(?i)\b{}(?P<h>\d{{1,2}})(?::(?P<m>\d{{2}}))?\s*(?P<ampm>a\.m\.|p\.m\.|am|pm)",
                at
            ),
        );
        let h_form = if v.day_first {
            r"|(?P<h2>\d{1,2})h(?P<m2>\d{2})?\b"
        } else {
            ""
        };
        let at_bare = if v.at.is_empty() {
            String::new()
        } else {
            format!(r"|{}\s+(?P<h3>\d{{1,2}})\b", group(&v.at))
        };
        let time_24h = compile(
            "time 24h",
            format!(
                r"(?i)\b(?:{}(?:(?P<h>\d{{1,2}}):(?P<m>\d{{2}})\b{}){})",
                at, h_form, at_bare
            ),
        );
        let word_times: Vec<&str> = v.noon.iter().chain(&v.midnight).copied().collect();
        let time_words = (!word_times.is_empty())
            .then(|| {
                compile(
                    "time words",
                    format!(r"(?i)\b{}(?P<w>{})\b", at, group(&word_times)),
                )
            })
            .flatten();

        let join_gap = compile(
            "join gap",
            format!(r"(?i)^[\s,]*(?:{}[\s,]*)?$", group(&v.at)),
        );
        let range_gap = (!v.range.is_empty())
            .then(|| compile("range gap", format!(r"(?i)^\s*{}\s*$", group(&v.range))))
            .flatten();
        let from_prefix = (!v.from.is_empty())
            .then(|| compile("from prefix", format!(r"(?i)(?:^|\s){}\s+$", group(&v.from))))
            .flatten();

        let mut day_offsets = HashMap::new();
        for w in &v.today {
            day_offsets.insert(w.to_lowercase(), 0);
        }
        for w in &v.tomorrow {
            day_offsets.insert(w.to_lowercase(), 1);
        }
        for w in &v.yesterday {
            day_offsets.insert(w.to_lowercase(), -1);
        }
        let mut units = HashMap::new();
        for (list, unit) in [
            (&v.day_units, RelativeUnit::Day),
            (&v.week_units, RelativeUnit::Week),
            (&v.month_units, RelativeUnit::Month),
            (&v.year_units, RelativeUnit::Year),
        ] {
            for w in list {
                units.insert(w.to_lowercase(), unit);
            }
        }

        Self {
            relative_day,
            in_units,
            next_unit,
            unit_next,
            weekday,
            month_day,
            day_month,
            numeric,
            time_ampm,
            time_24h,
            time_words,
            join_gap,
            range_gap,
            from_prefix,
            day_offsets,
            units,
            weekdays: lower_map(&v.weekdays),
            months: lower_map(&v.months),
            next_words: v.next.iter().map(|w| w.to_lowercase()).collect(),
            one_words: v.one.iter().map(|w| w.to_lowercase()).collect(),
            noon_words: v.noon.iter().map(|w| w.to_lowercase()).collect(),
            day_first: v.day_first,
        }
    }

    fn collect_atoms(&self, text: &str, reference: NaiveDateTime, forward: bool) -> Vec<Atom> {
        let today = reference.date();
        let mut atoms = Vec::new();
        let mut push = |caps: &Captures, value: Option<AtomValue>| {
            if let (Some(m), Some(value)) = (caps.get(0), value) {
                atoms.push(Atom {
                    start: m.start(),
                    end: m.end(),
                    value,
                });
            }
        };

        for caps in ISO_DATE.captures_iter(text) {
            let date = ymd(num(&caps, "y"), num(&caps, "m"), num(&caps, "d"));
            push(&caps, date.map(|d| AtomValue::Date(d, true)));
        }
        if let Some(re) = &self.numeric {
            for caps in re.captures_iter(text) {
                push(&caps, self.numeric_date(&caps, today, forward));
            }
        }
        if let Some(re) = &self.relative_day {
            for caps in re.captures_iter(text) {
                let offset = caps
                    .name("w")
                    .and_then(|w| self.day_offsets.get(&w.as_str().to_lowercase()));
                let date = offset.and_then(|o| today.checked_add_signed(Duration::days(*o)));
                push(&caps, date.map(|d| AtomValue::Date(d, false)));
            }
        }
        if let Some(re) = &self.in_units {
            for caps in re.captures_iter(text) {
                let amount = match caps.name("n") {
                    None => Some(1),
                    Some(n) => n.as_str().parse::<u32>().ok().or_else(|| {
                        self.one_words
                            .contains(&n.as_str().to_lowercase())
                            .then_some(1)
                    }),
                };
                let unit = caps
                    .name("unit")
                    .and_then(|u| self.units.get(&u.as_str().to_lowercase()));
                let date = match (amount, unit) {
                    (Some(n), Some(unit)) => shift(today, *unit, n),
                    _ => None,
                };
                push(&caps, date.map(|d| AtomValue::Date(d, false)));
            }
        }
        for re in [&self.next_unit, &self.unit_next].into_iter().flatten() {
            for caps in re.captures_iter(text) {
                let date = caps
                    .name("unit")
                    .and_then(|u| self.units.get(&u.as_str().to_lowercase()))
                    .and_then(|unit| shift(today, *unit, 1));
                push(&caps, date.map(|d| AtomValue::Date(d, false)));
            }
        }
        if let Some(re) = &self.weekday {
            for caps in re.captures_iter(text) {
                let target = caps
                    .name("wd")
                    .and_then(|w| self.weekdays.get(&w.as_str().to_lowercase()));
                let is_next = caps.name("next").is_some() || caps.name("post").is_some();
                let is_this = caps.name("this").is_some();
                let date = target.map(|t| resolve_weekday(today, *t, is_next, is_this, forward));
                push(&caps, date.map(|d| AtomValue::Date(d, false)));
            }
        }
        for re in [&self.month_day, &self.day_month].into_iter().flatten() {
            for caps in re.captures_iter(text) {
                push(&caps, self.month_name_date(&caps, today, forward));
            }
        }
        if let Some(re) = &self.time_ampm {
            for caps in re.captures_iter(text) {
                let pm = caps
                    .name("ampm")
                    .is_some_and(|s| s.as_str().to_lowercase().starts_with('p'));
                let time = twelve_hour(num(&caps, "h"), caps.name("m").map(|m| m.as_str()), pm);
                push(
                    &caps,
                    time.map(|t| AtomValue::Time(t, caps.name("m").is_some())),
                );
            }
        }
        if let Some(re) = &self.time_24h {
            for caps in re.captures_iter(text) {
                let (h, m) = if caps.name("h").is_some() {
                    (num(&caps, "h"), caps.name("m"))
                } else if caps.name("h2").is_some() {
                    (num(&caps, "h2"), caps.name("m2"))
                } else {
                    (num(&caps, "h3"), None)
                };
                let minute = m.and_then(|m| m.as_str().parse::<u32>().ok()).unwrap_or(0);
                let time = h.and_then(|h| NaiveTime::from_hms_opt(h, minute, 0));
                push(&caps, time.map(|t| AtomValue::Time(t, m.is_some())));
            }
        }
        if let Some(re) = &self.time_words {
            for caps in re.captures_iter(text) {
                let is_noon = caps
                    .name("w")
                    .is_some_and(|w| self.noon_words.contains(&w.as_str().to_lowercase()));
                let hour = if is_noon { 12 } else { 0 };
                push(
                    &caps,
                    NaiveTime::from_hms_opt(hour, 0, 0).map(|t| AtomValue::Time(t, true)),
                );
            }
        }

        // Earliest first; on ties the longer atom wins.
        atoms.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        let mut picked: Vec<Atom> = Vec::new();
        for atom in atoms {
            if picked.last().is_none_or(|last| atom.start >= last.end) {
                picked.push(atom);
            }
        }
        picked
    }

    fn numeric_date(&self, caps: &Captures, today: NaiveDate, forward: bool) -> Option<AtomValue> {
        let a = num(caps, "a")?;
        let b = num(caps, "b").or_else(|| num(caps, "b2"))?;
        let year = num(caps, "y").or_else(|| num(caps, "y2"));
        let (month, day) = if self.day_first { (b, a) } else { (a, b) };
        let year_known = year.is_some();
        let year = year
            .map(|y| if y < 100 { 2000 + y as i32 } else { y as i32 })
            .unwrap_or(today.year());
        let mut date = NaiveDate::from_ymd_opt(year, month, day)?;
        if !year_known && forward && date < today {
            date = NaiveDate::from_ymd_opt(year + 1, month, day)?;
        }
        Some(AtomValue::Date(date, year_known))
    }

    fn month_name_date(&self, caps: &Captures, today: NaiveDate, forward: bool) -> Option<AtomValue> {
        let month = *self
            .months
            .get(&caps.name("month")?.as_str().to_lowercase())?;
        let day = num(caps, "day")?;
        let year = num(caps, "year");
        let year_known = year.is_some();
        let y = year.map(|y| y as i32).unwrap_or(today.year());
        let mut date = NaiveDate::from_ymd_opt(y, month, day)?;
        if !year_known && forward && date < today {
            date = NaiveDate::from_ymd_opt(y + 1, month, day)?;
        }
        Some(AtomValue::Date(date, year_known))
    }

    fn gap_matches(re: &Option<Regex>, gap: &str) -> bool {
        re.as_ref().is_some_and(|r| r.is_match(gap))
    }
}

impl DateParser for NaturalDateParser {
    fn parse(
        &self,
        text: &str,
        reference: NaiveDateTime,
        forward_date: bool,
    ) -> Result<Vec<DateMatch>> {
        let atoms = self.collect_atoms(text, reference, forward_date);

        // Glue a date to an adjacent time ("tomorrow at 5pm", "5pm friday").
        let mut exprs: Vec<Expr> = Vec::new();
        let mut i = 0;
        while i < atoms.len() {
            let mut expr = Expr::from_atom(&atoms[i]);
            if let Some(next) = atoms.get(i + 1) {
                let kinds_differ = matches!(
                    (atoms[i].value, next.value),
                    (AtomValue::Date(..), AtomValue::Time(..))
                        | (AtomValue::Time(..), AtomValue::Date(..))
                );
                if kinds_differ
                    && Self::gap_matches(&self.join_gap, &text[atoms[i].end..next.start])
                {
                    expr.absorb(next);
                    i += 1;
                }
            }
            exprs.push(expr);
            i += 1;
        }

        let mut matches = Vec::new();
        let mut j = 0;
        while j < exprs.len() {
            let first = exprs[j];
            let start = first.components(reference.date(), reference, forward_date);
            let mut index = first.start;
            let mut end_index = first.end;
            let mut end = None;

            if let Some(second) = exprs.get(j + 1)
                && Self::gap_matches(&self.range_gap, &text[first.end..second.start])
            {
                let end_components = second.components(start.date(), reference, false);
                end = Some(end_components);
                end_index = second.end;
                if let Some(re) = &self.from_prefix
                    && let Some(m) = re.find(&text[..first.start])
                {
                    let lead = &text[m.start()..first.start];
                    index = m.start() + (lead.len() - lead.trim_start().len());
                }
                j += 1;
            }

            matches.push(DateMatch {
                index,
                text: text[index..end_index].to_string(),
                start,
                end,
            });
            j += 1;
        }
        Ok(matches)
    }
}

fn num(caps: &Captures, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok())
}

fn ymd(y: Option<u32>, m: Option<u32>, d: Option<u32>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y? as i32, m?, d?)
}

/// `None` when the result falls outside chrono's calendar.
fn shift(from: NaiveDate, unit: RelativeUnit, amount: u32) -> Option<NaiveDate> {
    let amount_i = i64::from(amount);
    match unit {
        RelativeUnit::Day => from.checked_add_signed(Duration::try_days(amount_i)?),
        RelativeUnit::Week => from.checked_add_signed(Duration::try_days(amount_i * 7)?),
        RelativeUnit::Month => from.checked_add_months(Months::new(amount)),
        RelativeUnit::Year => from.checked_add_months(Months::new(amount.checked_mul(12)?)),
    }
}

fn twelve_hour(h: Option<u32>, m: Option<&str>, is_pm: bool) -> Option<NaiveTime> {
    let h = h?;
    let m = match m {
        Some(m) => m.parse::<u32>().ok()?,
        None => 0,
    };
    if !(1..=12).contains(&h) || m > 59 {
        return None;
    }
    let h_24 = if h == 12 {
        if is_pm { 12 } else { 0 }
    } else if is_pm {
        h + 12
    } else {
        h
    };
    NaiveTime::from_hms_opt(h_24, m, 0)
}

/// "next" always moves past today; a plain weekday may be today.
/// Without forward dating the closest occurrence wins.
fn resolve_weekday(
    today: NaiveDate,
    target: Weekday,
    is_next: bool,
    is_this: bool,
    forward: bool,
) -> NaiveDate {
    let ahead = (target.num_days_from_monday() as i64 - today.weekday().num_days_from_monday() as i64)
        .rem_euclid(7);
    let offset = if is_next {
        if ahead == 0 { 7 } else { ahead }
    } else if forward || is_this {
        ahead
    } else if ahead > 3 {
        ahead - 7
    } else {
        ahead
    };
    today + Duration::days(offset)
}

/// Parses a bare `HH:MM` string, as stored on parsed tasks.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let caps = TIME_COLON.captures(s)?;
    NaiveTime::from_hms_opt(num(&caps, "h")?, num(&caps, "m")?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDateTime {
        // Monday
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn weekday_resolution() {
        let today = reference().date();
        let fri = resolve_weekday(today, Weekday::Fri, false, false, true);
        assert_eq!(fri, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        let mon = resolve_weekday(today, Weekday::Mon, false, false, true);
        assert_eq!(mon, today);
        let next_mon = resolve_weekday(today, Weekday::Mon, true, false, true);
        assert_eq!(next_mon, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn twelve_hour_edges() {
        assert_eq!(twelve_hour(Some(12), None, false), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(twelve_hour(Some(12), None, true), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(twelve_hour(Some(13), None, true), None);
    }

    #[test]
    fn date_and_time_merge_into_one_match() {
        let parser = NaturalDateParser::new(Language::En);
        let found = parser
            .parse("call tomorrow at 5pm please", reference(), true)
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "tomorrow at 5pm");
        assert_eq!(found[0].start.time(), NaiveTime::from_hms_opt(17, 0, 0));
    }

    #[test]
    fn clock_strings() {
        assert_eq!(parse_clock("07:30"), NaiveTime::from_hms_opt(7, 30, 0));
        assert_eq!(parse_clock("7pm"), None);
    }
}
