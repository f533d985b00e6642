//! Report language: labels, placeholder text and date formatting

use chrono::{DateTime, Datelike, TimeZone};
use std::fmt::Display;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Genitive forms, as used after a day number
const RUSSIAN_MONTHS: [&str; 12] = [
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

/// Language of every piece of text the report contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl Locale {
    /// Document title
    pub fn title(self) -> &'static str {
        match self {
            Self::English | Self::Russian => "Changelog",
        }
    }

    /// Sentence shown when there is nothing to report
    pub fn no_changes(self) -> &'static str {
        match self {
            Self::English => "No changes to display.",
            Self::Russian => "Нет изменений для отображения.",
        }
    }

    /// Label of the generation timestamp line
    pub fn generated(self) -> &'static str {
        match self {
            Self::English => "Generated",
            Self::Russian => "Сгенерировано",
        }
    }

    pub fn files(self) -> &'static str {
        match self {
            Self::English => "Files",
            Self::Russian => "Файлы",
        }
    }

    pub fn author(self) -> &'static str {
        match self {
            Self::English => "Author",
            Self::Russian => "Автор",
        }
    }

    pub fn commit(self) -> &'static str {
        match self {
            Self::English => "Commit",
            Self::Russian => "Коммит",
        }
    }

    /// Full month name as it appears in a date
    fn month(self, month0: u32) -> &'static str {
        let months = match self {
            Self::English => &ENGLISH_MONTHS,
            Self::Russian => &RUSSIAN_MONTHS,
        };
        months.get(month0 as usize).copied().unwrap_or_default()
    }

    /// Human-readable date and time, 24-hour clock
    ///
    /// - English: `January 15, 2024 at 10:30`
    /// - Russian: `15 января 2024 г. в 10:30`
    pub fn format_datetime<Tz>(self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let month = self.month(datetime.month0());
        let time = datetime.format("%H:%M");
        match self {
            Self::English => format!(
                "{month} {}, {} at {time}",
                datetime.day(),
                datetime.year()
            ),
            Self::Russian => format!(
                "{} {month} {} г. в {time}",
                datetime.day(),
                datetime.year()
            ),
        }
    }
}
