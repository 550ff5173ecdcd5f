// File: ./src/model/display.rs
// Human-readable breakdown of a parse result, for interactive previews.
use crate::model::item::{ParsedTaskData, UserFieldValue};
use crate::model::recurrence::describe_rule;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub icon: &'static str,
    pub label: String,
    pub value: String,
}

impl PreviewItem {
    fn new(icon: &'static str, label: &str, value: String) -> Self {
        Self {
            icon,
            label: label.to_string(),
            value,
        }
    }
}

pub fn format_estimate(minutes: u32) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

fn with_time(date: &str, time: Option<&String>) -> String {
    match time {
        Some(t) => format!("{} {}", date, t),
        None => date.to_string(),
    }
}

fn prefixed(prefix: &str, items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("{}{}", prefix, i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One entry per populated field, in a stable order.
pub fn preview_items(data: &ParsedTaskData) -> Vec<PreviewItem> {
    let mut items = vec![PreviewItem::new("📝", "Title", data.title.clone())];

    if let Some(details) = &data.details {
        let first = details.lines().next().unwrap_or_default();
        let more = if details.lines().count() > 1 { " …" } else { "" };
        items.push(PreviewItem::new("📄", "Details", format!("{}{}", first, more)));
    }
    if let Some(d) = &data.due_date {
        items.push(PreviewItem::new("📅", "Due", with_time(d, data.due_time.as_ref())));
    }
    if let Some(d) = &data.scheduled_date {
        items.push(PreviewItem::new(
            "⏳",
            "Scheduled",
            with_time(d, data.scheduled_time.as_ref()),
        ));
    }
    if let Some(p) = &data.priority {
        items.push(PreviewItem::new("❗", "Priority", p.clone()));
    }
    if let Some(s) = &data.status {
        items.push(PreviewItem::new("🔘", "Status", s.clone()));
    }
    if !data.tags.is_empty() {
        items.push(PreviewItem::new("🏷", "Tags", prefixed("#", &data.tags)));
    }
    if !data.contexts.is_empty() {
        items.push(PreviewItem::new("📍", "Contexts", prefixed("@", &data.contexts)));
    }
    if !data.projects.is_empty() {
        items.push(PreviewItem::new("📁", "Projects", prefixed("+", &data.projects)));
    }
    if let Some(r) = &data.recurrence {
        items.push(PreviewItem::new("🔁", "Recurrence", describe_rule(r)));
    }
    if let Some(e) = data.estimate {
        items.push(PreviewItem::new("⏱", "Estimate", format_estimate(e)));
    }
    for (id, value) in &data.user_fields {
        let shown = match value {
            UserFieldValue::Text(s) => s.clone(),
            UserFieldValue::List(v) => v.join(", "),
        };
        items.push(PreviewItem::new("🔧", id, shown));
    }
    items
}

/// Renders items as `icon label  value` lines with labels padded to a common width.
pub fn format_preview(items: &[PreviewItem]) -> String {
    let width = items
        .iter()
        .map(|i| UnicodeWidthStr::width(i.label.as_str()))
        .max()
        .unwrap_or(0);
    items
        .iter()
        .map(|i| {
            let pad = width - UnicodeWidthStr::width(i.label.as_str());
            format!("{} {}:{}  {}", i.icon, i.label, " ".repeat(pad), i.value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
