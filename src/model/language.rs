// File: ./src/model/language.rs
//! Per-language pattern tables consumed by the parser.
//!
//! Every table is a plain owned value; the parser compiles what it needs
//! from it once at construction time. Unknown language codes resolve to
//! English.
use crate::model::recurrence::{Frequency, WeekdayGroup};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    De,
    Fr,
    Es,
    Ru,
}

impl Language {
    /// Resolves a code such as `de`, `fr-CA` or `ES`. Anything unknown is English.
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or_default().trim();
        match Language::from_str(primary) {
            Ok(lang) => lang,
            Err(_) => {
                log::debug!("No pattern table for language '{}', using English", code);
                Language::En
            }
        }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// How keyword matches are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMode {
    /// Regex `\b` on both sides.
    Word,
    /// String edge or whitespace on both sides.
    Whitespace,
}

#[derive(Debug, Clone)]
pub struct RecurrenceVocabulary {
    pub every: Vec<&'static str>,
    pub other: Vec<&'static str>,
    pub ordinals: Vec<(&'static str, i32)>,
    pub weekdays: Vec<(&'static str, Weekday)>,
    pub plural_weekdays: Vec<(&'static str, Weekday)>,
    pub periods: Vec<(&'static str, Frequency)>,
    pub frequencies: Vec<(&'static str, Frequency)>,
    /// Group names that follow an "every" word ("every weekday").
    pub weekday_groups: Vec<(&'static str, WeekdayGroup)>,
    /// Group names that stand alone ("weekends").
    pub plural_weekday_groups: Vec<(&'static str, WeekdayGroup)>,
}

/// Words the calendar parser recognises for one locale.
#[derive(Debug, Clone)]
pub struct DateVocabulary {
    pub today: Vec<&'static str>,
    pub tomorrow: Vec<&'static str>,
    pub yesterday: Vec<&'static str>,
    pub next: Vec<&'static str>,
    pub this: Vec<&'static str>,
    pub in_words: Vec<&'static str>,
    pub one: Vec<&'static str>,
    pub day_units: Vec<&'static str>,
    pub week_units: Vec<&'static str>,
    pub month_units: Vec<&'static str>,
    pub year_units: Vec<&'static str>,
    pub weekdays: Vec<(&'static str, Weekday)>,
    pub months: Vec<(&'static str, u32)>,
    pub month_joiners: Vec<&'static str>,
    pub on: Vec<&'static str>,
    pub at: Vec<&'static str>,
    pub from: Vec<&'static str>,
    pub range: Vec<&'static str>,
    pub noon: Vec<&'static str>,
    pub midnight: Vec<&'static str>,
    /// Numeric dates read as day then month.
    pub day_first: bool,
}

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: Language,
    pub boundary: BoundaryMode,
    pub due_triggers: Vec<&'static str>,
    pub scheduled_triggers: Vec<&'static str>,
    pub recurrence: RecurrenceVocabulary,
    /// Canonical status value and the words that select it, in match order.
    pub status_words: Vec<(&'static str, Vec<&'static str>)>,
    /// Canonical priority value and the words that select it, in match order.
    pub priority_words: Vec<(&'static str, Vec<&'static str>)>,
    pub hour_units: Vec<&'static str>,
    pub minute_units: Vec<&'static str>,
    /// Language whose date vocabulary the calendar parser uses.
    pub date_locale: Language,
}

impl LanguageConfig {
    pub fn for_code(code: &str) -> Self {
        Self::for_language(Language::from_code(code))
    }

    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => english(),
            Language::De => german(),
            Language::Fr => french(),
            Language::Es => spanish(),
            Language::Ru => russian(),
        }
    }
}

impl DateVocabulary {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::En => english_dates(),
            Language::De => german_dates(),
            Language::Fr => french_dates(),
            Language::Es => spanish_dates(),
            Language::Ru => russian_dates(),
        }
    }
}

use Frequency::{Daily, Monthly, Weekly, Yearly};
use Weekday::{Fri, Mon, Sat, Sun, Thu, Tue, Wed};
use WeekdayGroup::{Weekend, Workdays};

// --- ENGLISH ---

fn english() -> LanguageConfig {
    LanguageConfig {
        language: Language::En,
        boundary: BoundaryMode::Word,
        due_triggers: vec!["due on", "due by", "due", "deadline", "by"],
        scheduled_triggers: vec![
            "scheduled for",
            "scheduled on",
            "scheduled",
            "start on",
            "starting",
            "start",
        ],
        recurrence: RecurrenceVocabulary {
            every: vec!["every", "each"],
            other: vec!["other"],
            ordinals: vec![
                ("first", 1),
                ("1st", 1),
                ("second", 2),
                ("2nd", 2),
                ("third", 3),
                ("3rd", 3),
                ("fourth", 4),
                ("4th", 4),
                ("fifth", 5),
                ("5th", 5),
                ("last", -1),
            ],
            weekdays: vec![
                ("monday", Mon),
                ("mon", Mon),
                ("tuesday", Tue),
                ("tues", Tue),
                ("tue", Tue),
                ("wednesday", Wed),
                ("wed", Wed),
                ("thursday", Thu),
                ("thurs", Thu),
                ("thu", Thu),
                ("friday", Fri),
                ("fri", Fri),
                ("saturday", Sat),
                ("sat", Sat),
                ("sunday", Sun),
                ("sun", Sun),
            ],
            plural_weekdays: vec![
                ("mondays", Mon),
                ("tuesdays", Tue),
                ("wednesdays", Wed),
                ("thursdays", Thu),
                ("fridays", Fri),
                ("saturdays", Sat),
                ("sundays", Sun),
            ],
            periods: vec![
                ("day", Daily),
                ("days", Daily),
                ("week", Weekly),
                ("weeks", Weekly),
                ("month", Monthly),
                ("months", Monthly),
                ("year", Yearly),
                ("years", Yearly),
            ],
            frequencies: vec![
                ("daily", Daily),
                ("weekly", Weekly),
                ("monthly", Monthly),
                ("yearly", Yearly),
                ("annually", Yearly),
            ],
            weekday_groups: vec![("weekday", Workdays), ("weekend", Weekend)],
            plural_weekday_groups: vec![("weekdays", Workdays), ("weekends", Weekend)],
        },
        status_words: vec![
            ("open", vec!["to do", "todo", "open"]),
            ("in-progress", vec!["in progress", "in-progress", "doing", "wip"]),
            ("done", vec!["done", "completed", "finished"]),
            ("cancelled", vec!["cancelled", "canceled"]),
            ("waiting", vec!["waiting", "on hold", "blocked"]),
        ],
        priority_words: vec![
            ("urgent", vec!["urgent", "critical", "asap"]),
            ("high", vec!["high priority", "important", "high"]),
            ("normal", vec!["normal priority", "medium", "normal"]),
            ("low", vec!["low priority", "low"]),
        ],
        hour_units: vec!["hours", "hour", "hrs", "hr", "h"],
        minute_units: vec!["minutes", "minute", "mins", "min", "m"],
        date_locale: Language::En,
    }
}

fn english_dates() -> DateVocabulary {
    DateVocabulary {
        today: vec!["today", "tonight"],
        tomorrow: vec!["tomorrow", "tmrw", "tmr"],
        yesterday: vec!["yesterday"],
        next: vec!["next"],
        this: vec!["this", "coming"],
        in_words: vec!["in"],
        one: vec!["a", "an", "one"],
        day_units: vec!["days", "day"],
        week_units: vec!["weeks", "week"],
        month_units: vec!["months", "month"],
        year_units: vec!["years", "year"],
        weekdays: vec![
            ("monday", Mon),
            ("mon", Mon),
            ("tuesday", Tue),
            ("tues", Tue),
            ("tue", Tue),
            ("wednesday", Wed),
            ("wed", Wed),
            ("thursday", Thu),
            ("thurs", Thu),
            ("thu", Thu),
            ("friday", Fri),
            ("fri", Fri),
            ("saturday", Sat),
            ("sat", Sat),
            ("sunday", Sun),
            ("sun", Sun),
        ],
        months: vec![
            ("january", 1),
            ("jan", 1),
            ("february", 2),
            ("feb", 2),
            ("march", 3),
            ("mar", 3),
            ("april", 4),
            ("apr", 4),
            ("may", 5),
            ("june", 6),
            ("jun", 6),
            ("july", 7),
            ("jul", 7),
            ("august", 8),
            ("aug", 8),
            ("september", 9),
            ("sept", 9),
            ("sep", 9),
            ("october", 10),
            ("oct", 10),
            ("november", 11),
            ("nov", 11),
            ("december", 12),
            ("dec", 12),
        ],
        month_joiners: vec!["of"],
        on: vec!["on"],
        at: vec!["at"],
        from: vec!["from"],
        range: vec!["to", "until", "through", "-"],
        noon: vec!["noon", "midday"],
        midnight: vec!["midnight"],
        day_first: false,
    }
}

// --- GERMAN ---

fn german() -> LanguageConfig {
    LanguageConfig {
        language: Language::De,
        boundary: BoundaryMode::Whitespace,
        due_triggers: vec!["fällig am", "fällig bis", "fällig", "deadline", "bis"],
        scheduled_triggers: vec!["geplant für", "geplant am", "geplant", "beginnen am", "start"],
        recurrence: RecurrenceVocabulary {
            every: vec!["jeden", "jede", "jedes", "alle"],
            other: vec!["zweiten", "zweite"],
            ordinals: vec![
                ("ersten", 1),
                ("erste", 1),
                ("dritten", 3),
                ("dritte", 3),
                ("vierten", 4),
                ("vierte", 4),
                ("fünften", 5),
                ("letzten", -1),
                ("letzte", -1),
            ],
            weekdays: vec![
                ("montag", Mon),
                ("dienstag", Tue),
                ("mittwoch", Wed),
                ("donnerstag", Thu),
                ("freitag", Fri),
                ("samstag", Sat),
                ("sonntag", Sun),
            ],
            plural_weekdays: vec![
                ("montags", Mon),
                ("dienstags", Tue),
                ("mittwochs", Wed),
                ("donnerstags", Thu),
                ("freitags", Fri),
                ("samstags", Sat),
                ("sonntags", Sun),
            ],
            periods: vec![
                ("tag", Daily),
                ("tage", Daily),
                ("woche", Weekly),
                ("wochen", Weekly),
                ("monat", Monthly),
                ("monate", Monthly),
                ("jahr", Yearly),
                ("jahre", Yearly),
            ],
            frequencies: vec![
                ("täglich", Daily),
                ("wöchentlich", Weekly),
                ("monatlich", Monthly),
                ("jährlich", Yearly),
            ],
            weekday_groups: vec![("werktag", Workdays), ("wochenende", Weekend)],
            plural_weekday_groups: vec![("werktags", Workdays), ("wochenends", Weekend)],
        },
        status_words: vec![
            ("open", vec!["zu erledigen", "offen"]),
            ("in-progress", vec!["in bearbeitung", "in arbeit"]),
            ("done", vec!["erledigt", "fertig"]),
            ("cancelled", vec!["abgebrochen", "storniert"]),
            ("waiting", vec!["wartend", "blockiert"]),
        ],
        priority_words: vec![
            ("urgent", vec!["dringend"]),
            ("high", vec!["wichtig", "hoch"]),
            ("normal", vec!["normal", "mittel"]),
            ("low", vec!["niedrig"]),
        ],
        hour_units: vec!["stunden", "stunde", "std", "h"],
        minute_units: vec!["minuten", "minute", "min", "m"],
        date_locale: Language::De,
    }
}

fn german_dates() -> DateVocabulary {
    DateVocabulary {
        today: vec!["heute"],
        tomorrow: vec!["morgen"],
        yesterday: vec!["gestern"],
        next: vec!["nächsten", "nächste", "nächster", "kommenden"],
        this: vec!["diesen", "diese", "dieser"],
        in_words: vec!["in"],
        one: vec!["einem", "einer", "einen", "eine"],
        day_units: vec!["tagen", "tage", "tag"],
        week_units: vec!["wochen", "woche"],
        month_units: vec!["monaten", "monate", "monat"],
        year_units: vec!["jahren", "jahre", "jahr"],
        weekdays: vec![
            ("montag", Mon),
            ("dienstag", Tue),
            ("mittwoch", Wed),
            ("donnerstag", Thu),
            ("freitag", Fri),
            ("samstag", Sat),
            ("sonntag", Sun),
        ],
        months: vec![
            ("januar", 1),
            ("jan", 1),
            ("februar", 2),
            ("feb", 2),
            ("märz", 3),
            ("april", 4),
            ("apr", 4),
            ("mai", 5),
            ("juni", 6),
            ("juli", 7),
            ("august", 8),
            ("aug", 8),
            ("september", 9),
            ("sep", 9),
            ("oktober", 10),
            ("okt", 10),
            ("november", 11),
            ("nov", 11),
            ("dezember", 12),
            ("dez", 12),
        ],
        month_joiners: vec![],
        on: vec!["am"],
        at: vec!["um"],
        from: vec!["von", "ab"],
        range: vec!["bis", "-"],
        noon: vec!["mittag"],
        midnight: vec!["mitternacht"],
        day_first: true,
    }
}

// --- FRENCH ---

fn french() -> LanguageConfig {
    LanguageConfig {
        language: Language::Fr,
        boundary: BoundaryMode::Whitespace,
        due_triggers: vec!["échéance le", "échéance", "à rendre le", "avant le", "pour le", "avant"],
        scheduled_triggers: vec![
            "prévu pour",
            "prévu le",
            "planifié pour",
            "planifié le",
            "planifié",
            "commencer le",
        ],
        recurrence: RecurrenceVocabulary {
            every: vec!["chaque", "tous les", "toutes les"],
            other: vec!["deux"],
            ordinals: vec![
                ("premier", 1),
                ("première", 1),
                ("1er", 1),
                ("deuxième", 2),
                ("second", 2),
                ("troisième", 3),
                ("quatrième", 4),
                ("cinquième", 5),
                ("dernier", -1),
                ("dernière", -1),
            ],
            weekdays: vec![
                ("lundi", Mon),
                ("mardi", Tue),
                ("mercredi", Wed),
                ("jeudi", Thu),
                ("vendredi", Fri),
                ("samedi", Sat),
                ("dimanche", Sun),
            ],
            plural_weekdays: vec![
                ("lundis", Mon),
                ("mardis", Tue),
                ("mercredis", Wed),
                ("jeudis", Thu),
                ("vendredis", Fri),
                ("samedis", Sat),
                ("dimanches", Sun),
            ],
            periods: vec![
                ("jour", Daily),
                ("jours", Daily),
                ("semaine", Weekly),
                ("semaines", Weekly),
                ("mois", Monthly),
                ("an", Yearly),
                ("ans", Yearly),
                ("année", Yearly),
                ("années", Yearly),
            ],
            frequencies: vec![
                ("quotidiennement", Daily),
                ("quotidien", Daily),
                ("hebdomadaire", Weekly),
                ("mensuellement", Monthly),
                ("mensuel", Monthly),
                ("annuellement", Yearly),
                ("annuel", Yearly),
            ],
            weekday_groups: vec![("jour ouvrable", Workdays), ("week-end", Weekend)],
            plural_weekday_groups: vec![("jours ouvrables", Workdays), ("week-ends", Weekend)],
        },
        status_words: vec![
            ("open", vec!["à faire", "ouvert"]),
            ("in-progress", vec!["en cours"]),
            ("done", vec!["terminé", "fait"]),
            ("cancelled", vec!["annulé"]),
            ("waiting", vec!["en attente", "bloqué"]),
        ],
        priority_words: vec![
            ("urgent", vec!["urgente", "urgent"]),
            ("high", vec!["importante", "important", "élevée", "haute"]),
            ("normal", vec!["normale", "moyenne"]),
            ("low", vec!["faible", "basse"]),
        ],
        hour_units: vec!["heures", "heure", "h"],
        minute_units: vec!["minutes", "minute", "min", "m"],
        date_locale: Language::Fr,
    }
}

fn french_dates() -> DateVocabulary {
    DateVocabulary {
        today: vec!["aujourd'hui", "ce soir"],
        tomorrow: vec!["demain"],
        yesterday: vec!["hier"],
        next: vec!["prochain", "prochaine"],
        this: vec!["ce", "cette"],
        in_words: vec!["dans"],
        one: vec!["un", "une"],
        day_units: vec!["jours", "jour"],
        week_units: vec!["semaines", "semaine"],
        month_units: vec!["mois"],
        year_units: vec!["années", "année", "ans", "an"],
        weekdays: vec![
            ("lundi", Mon),
            ("mardi", Tue),
            ("mercredi", Wed),
            ("jeudi", Thu),
            ("vendredi", Fri),
            ("samedi", Sat),
            ("dimanche", Sun),
        ],
        months: vec![
            ("janvier", 1),
            ("janv", 1),
            ("février", 2),
            ("févr", 2),
            ("mars", 3),
            ("avril", 4),
            ("avr", 4),
            ("mai", 5),
            ("juin", 6),
            ("juillet", 7),
            ("juil", 7),
            ("août", 8),
            ("septembre", 9),
            ("sept", 9),
            ("octobre", 10),
            ("oct", 10),
            ("novembre", 11),
            ("nov", 11),
            ("décembre", 12),
            ("déc", 12),
        ],
        month_joiners: vec![],
        on: vec!["le"],
        at: vec!["à"],
        from: vec!["du", "de"],
        range: vec!["jusqu'au", "au", "-"],
        noon: vec!["midi"],
        midnight: vec!["minuit"],
        day_first: true,
    }
}

// --- SPANISH ---

fn spanish() -> LanguageConfig {
    LanguageConfig {
        language: Language::Es,
        boundary: BoundaryMode::Whitespace,
        due_triggers: vec!["fecha límite", "vence el", "vence", "para el", "antes del", "antes de"],
        scheduled_triggers: vec![
            "programado para",
            "programado el",
            "programado",
            "empezar el",
            "comenzar el",
        ],
        recurrence: RecurrenceVocabulary {
            every: vec!["cada", "todos los", "todas las"],
            other: vec!["otro", "otra", "dos"],
            ordinals: vec![
                ("primer", 1),
                ("primero", 1),
                ("primera", 1),
                ("segundo", 2),
                ("segunda", 2),
                ("tercer", 3),
                ("tercero", 3),
                ("tercera", 3),
                ("cuarto", 4),
                ("cuarta", 4),
                ("último", -1),
                ("última", -1),
            ],
            weekdays: vec![
                ("lunes", Mon),
                ("martes", Tue),
                ("miércoles", Wed),
                ("miercoles", Wed),
                ("jueves", Thu),
                ("viernes", Fri),
                ("sábado", Sat),
                ("sabado", Sat),
                ("domingo", Sun),
            ],
            // Only forms that differ from the singular; "lunes" alone is a date.
            plural_weekdays: vec![("sábados", Sat), ("sabados", Sat), ("domingos", Sun)],
            periods: vec![
                ("día", Daily),
                ("días", Daily),
                ("dia", Daily),
                ("dias", Daily),
                ("semana", Weekly),
                ("semanas", Weekly),
                ("mes", Monthly),
                ("meses", Monthly),
                ("año", Yearly),
                ("años", Yearly),
            ],
            frequencies: vec![
                ("diariamente", Daily),
                ("diario", Daily),
                ("semanalmente", Weekly),
                ("semanal", Weekly),
                ("mensualmente", Monthly),
                ("mensual", Monthly),
                ("anualmente", Yearly),
                ("anual", Yearly),
            ],
            weekday_groups: vec![("día laborable", Workdays), ("fin de semana", Weekend)],
            plural_weekday_groups: vec![
                ("días laborables", Workdays),
                ("fines de semana", Weekend),
            ],
        },
        status_words: vec![
            ("open", vec!["pendiente", "abierto"]),
            ("in-progress", vec!["en progreso", "en curso"]),
            ("done", vec!["completado", "terminado", "hecho"]),
            ("cancelled", vec!["cancelado"]),
            ("waiting", vec!["en espera", "esperando"]),
        ],
        priority_words: vec![
            ("urgent", vec!["urgente"]),
            ("high", vec!["importante", "alta"]),
            ("normal", vec!["normal", "media"]),
            ("low", vec!["baja"]),
        ],
        hour_units: vec!["horas", "hora", "h"],
        minute_units: vec!["minutos", "minuto", "min", "m"],
        date_locale: Language::Es,
    }
}

fn spanish_dates() -> DateVocabulary {
    DateVocabulary {
        today: vec!["hoy", "esta noche"],
        tomorrow: vec!["mañana"],
        yesterday: vec!["ayer"],
        next: vec!["próximo", "próxima", "proximo", "proxima", "siguiente"],
        this: vec!["este", "esta"],
        in_words: vec!["dentro de", "en"],
        one: vec!["un", "una"],
        day_units: vec!["días", "día", "dias", "dia"],
        week_units: vec!["semanas", "semana"],
        month_units: vec!["meses", "mes"],
        year_units: vec!["años", "año"],
        weekdays: vec![
            ("lunes", Mon),
            ("martes", Tue),
            ("miércoles", Wed),
            ("miercoles", Wed),
            ("jueves", Thu),
            ("viernes", Fri),
            ("sábado", Sat),
            ("sabado", Sat),
            ("domingo", Sun),
        ],
        months: vec![
            ("enero", 1),
            ("ene", 1),
            ("febrero", 2),
            ("feb", 2),
            ("marzo", 3),
            ("mar", 3),
            ("abril", 4),
            ("abr", 4),
            ("mayo", 5),
            ("junio", 6),
            ("jun", 6),
            ("julio", 7),
            ("jul", 7),
            ("agosto", 8),
            ("ago", 8),
            ("septiembre", 9),
            ("sep", 9),
            ("octubre", 10),
            ("oct", 10),
            ("noviembre", 11),
            ("nov", 11),
            ("diciembre", 12),
            ("dic", 12),
        ],
        month_joiners: vec!["de"],
        on: vec!["el"],
        at: vec!["a las", "a la"],
        from: vec!["del", "desde"],
        range: vec!["hasta", "al", "-"],
        noon: vec!["mediodía", "mediodia"],
        midnight: vec!["medianoche"],
        day_first: true,
    }
}

// --- RUSSIAN ---

fn russian() -> LanguageConfig {
    LanguageConfig {
        language: Language::Ru,
        boundary: BoundaryMode::Whitespace,
        due_triggers: vec!["срок до", "срок", "дедлайн", "до"],
        scheduled_triggers: vec!["запланировано на", "запланировано", "начать"],
        recurrence: RecurrenceVocabulary {
            every: vec!["каждый", "каждую", "каждое", "каждые", "каждая"],
            other: vec![],
            ordinals: vec![
                ("первый", 1),
                ("первую", 1),
                ("второй", 2),
                ("вторую", 2),
                ("третий", 3),
                ("третью", 3),
                ("четвёртый", 4),
                ("четвертый", 4),
                ("четвёртую", 4),
                ("четвертую", 4),
                ("последний", -1),
                ("последнюю", -1),
            ],
            weekdays: vec![
                ("понедельник", Mon),
                ("вторник", Tue),
                ("среду", Wed),
                ("среда", Wed),
                ("четверг", Thu),
                ("пятницу", Fri),
                ("пятница", Fri),
                ("субботу", Sat),
                ("суббота", Sat),
                ("воскресенье", Sun),
            ],
            plural_weekdays: vec![
                ("понедельникам", Mon),
                ("вторникам", Tue),
                ("средам", Wed),
                ("четвергам", Thu),
                ("пятницам", Fri),
                ("субботам", Sat),
                ("воскресеньям", Sun),
            ],
            periods: vec![
                ("день", Daily),
                ("дня", Daily),
                ("дней", Daily),
                ("неделю", Weekly),
                ("недели", Weekly),
                ("недель", Weekly),
                ("месяц", Monthly),
                ("месяца", Monthly),
                ("месяцев", Monthly),
                ("год", Yearly),
                ("года", Yearly),
                ("лет", Yearly),
            ],
            frequencies: vec![
                ("ежедневно", Daily),
                ("еженедельно", Weekly),
                ("ежемесячно", Monthly),
                ("ежегодно", Yearly),
            ],
            weekday_groups: vec![("будний день", Workdays), ("выходные", Weekend)],
            plural_weekday_groups: vec![("будням", Workdays), ("выходным", Weekend)],
        },
        status_words: vec![
            ("open", vec!["к выполнению", "открыто"]),
            ("in-progress", vec!["в процессе", "в работе"]),
            ("done", vec!["выполнено", "сделано", "готово"]),
            ("cancelled", vec!["отменено"]),
            ("waiting", vec!["в ожидании", "ожидание"]),
        ],
        priority_words: vec![
            ("urgent", vec!["срочный", "срочно"]),
            ("high", vec!["высокий", "важно"]),
            ("normal", vec!["обычный", "средний"]),
            ("low", vec!["низкий"]),
        ],
        hour_units: vec!["часов", "часа", "час", "ч"],
        minute_units: vec!["минуты", "минут", "минута", "мин", "м"],
        date_locale: Language::Ru,
    }
}

fn russian_dates() -> DateVocabulary {
    DateVocabulary {
        today: vec!["сегодня"],
        tomorrow: vec!["завтра"],
        yesterday: vec!["вчера"],
        next: vec!["следующий", "следующую", "следующее", "следующей"],
        this: vec!["этот", "эту", "это"],
        in_words: vec!["через"],
        one: vec![],
        day_units: vec!["дней", "дня", "день"],
        week_units: vec!["недель", "недели", "неделю"],
        month_units: vec!["месяцев", "месяца", "месяц"],
        year_units: vec!["года", "год", "лет"],
        weekdays: vec![
            ("понедельник", Mon),
            ("вторник", Tue),
            ("среду", Wed),
            ("среда", Wed),
            ("четверг", Thu),
            ("пятницу", Fri),
            ("пятница", Fri),
            ("субботу", Sat),
            ("суббота", Sat),
            ("воскресенье", Sun),
        ],
        months: vec![
            ("января", 1),
            ("январь", 1),
            ("февраля", 2),
            ("февраль", 2),
            ("марта", 3),
            ("март", 3),
            ("апреля", 4),
            ("апрель", 4),
            ("мая", 5),
            ("май", 5),
            ("июня", 6),
            ("июнь", 6),
            ("июля", 7),
            ("июль", 7),
            ("августа", 8),
            ("август", 8),
            ("сентября", 9),
            ("сентябрь", 9),
            ("октября", 10),
            ("октябрь", 10),
            ("ноября", 11),
            ("ноябрь", 11),
            ("декабря", 12),
            ("декабрь", 12),
        ],
        month_joiners: vec![],
        on: vec!["во", "в"],
        at: vec!["в"],
        from: vec!["с"],
        range: vec!["до", "по", "-"],
        noon: vec!["полдень"],
        midnight: vec!["полночь"],
        day_first: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_with_region_suffix() {
        assert_eq!(Language::from_code("de-AT"), Language::De);
        assert_eq!(Language::from_code("FR"), Language::Fr);
        assert_eq!(Language::from_code("xx"), Language::En);
        assert_eq!(Language::Ru.code(), "ru");
    }
}
