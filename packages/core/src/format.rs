//! Display formatting for prices, dates and statuses (ru-RU conventions).

use chrono::{DateTime, Datelike, TimeZone, Timelike};

use crate::ad::AdStatus;

/// Non-breaking space used by ru-RU number grouping.
const NBSP: char = '\u{a0}';

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Visual tone of a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Warning,
    Success,
    Error,
    Default,
}

impl StatusTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Warning => "warning",
            StatusTone::Success => "success",
            StatusTone::Error => "error",
            StatusTone::Default => "default",
        }
    }
}

/// Label and tone of every status.
const STATUS_STYLES: [(AdStatus, &str, StatusTone); 4] = [
    (AdStatus::Pending, "На модерации", StatusTone::Warning),
    (AdStatus::Approved, "Одобрено", StatusTone::Success),
    (AdStatus::Rejected, "Отклонено", StatusTone::Error),
    (AdStatus::Draft, "Черновик", StatusTone::Default),
];

fn status_style(status: AdStatus) -> (&'static str, StatusTone) {
    STATUS_STYLES
        .iter()
        .find(|(s, _, _)| *s == status)
        .map(|(_, label, tone)| (*label, *tone))
        .unwrap_or(("Черновик", StatusTone::Default))
}

/// Human label of a status.
pub fn status_label(status: AdStatus) -> &'static str {
    status_style(status).0
}

/// Tag tone of a status.
pub fn status_tone(status: AdStatus) -> StatusTone {
    status_style(status).1
}

/// Label for a raw status code; unknown codes read as drafts.
pub fn status_label_for_code(code: &str) -> &'static str {
    status_label(AdStatus::from_code(code))
}

/// Tone for a raw status code; unknown codes get the default tone.
pub fn status_tone_for_code(code: &str) -> StatusTone {
    status_tone(AdStatus::from_code(code))
}

/// Format a price in rubles with no fractional digits, e.g. `1 500 ₽`.
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{NBSP}₽")
}

/// Long date with time, e.g. `15 марта 2025 г. в 14:30`.
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!(
        "{} {} {} г. в {:02}:{:02}",
        date.day(),
        month,
        date.year(),
        date.hour(),
        date.minute()
    )
}

/// Numeric date only, e.g. `10.01.2021`.
pub fn format_short_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{:02}.{:02}.{}", date.day(), date.month(), date.year())
}

/// Percentage with one decimal, e.g. `62.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
