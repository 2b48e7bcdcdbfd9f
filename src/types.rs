use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A university campus. Used only as a lookup key for campus-specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    #[display(fmt = "aoyama")]
    Aoyama,
    #[display(fmt = "sagamihara")]
    Sagamihara,
}

impl Campus {
    /// Every campus, in declaration order
    pub const ALL: [Self; 2] = [Self::Aoyama, Self::Sagamihara];

    /// Name of the campus as shown to students
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Aoyama => "青山キャンパス",
            Self::Sagamihara => "相模原キャンパス",
        }
    }
}

impl FromStr for Campus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|campus| campus.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownCampus(trimmed.to_owned()))
    }
}

/// What kind of academic day a date is.
///
/// Classification always produces exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DayCategory {
    /// Ordinary instruction
    #[display(fmt = "classDay")]
    ClassDay,
    #[display(fmt = "sunday")]
    Sunday,
    /// Classes cancelled by administrative decision or a public holiday
    #[display(fmt = "kyuko")]
    Kyuko,
    /// Compensatory instruction replacing a cancelled day
    #[display(fmt = "makeup")]
    Makeup,
    #[display(fmt = "exam")]
    Exam,
    #[display(fmt = "summerBreak")]
    SummerBreak,
    #[display(fmt = "winterBreak")]
    WinterBreak,
    #[display(fmt = "springBreak")]
    SpringBreak,
}

impl DayCategory {
    /// Every category, in declaration order
    pub const ALL: [Self; 8] = [
        Self::ClassDay,
        Self::Sunday,
        Self::Kyuko,
        Self::Makeup,
        Self::Exam,
        Self::SummerBreak,
        Self::WinterBreak,
        Self::SpringBreak,
    ];

    /// Short label used on calendar cells
    pub const fn label(self) -> &'static str {
        match self {
            Self::ClassDay => "授業日",
            Self::Sunday => "日曜日",
            Self::Kyuko => "休講",
            Self::Makeup => "補講日",
            Self::Exam => "試験期間",
            Self::SummerBreak => "夏季休業",
            Self::WinterBreak => "冬季休業",
            Self::SpringBreak => "春季休業",
        }
    }

    pub const fn is_break(self) -> bool {
        matches!(self, Self::SummerBreak | Self::WinterBreak | Self::SpringBreak)
    }

    /// True only for days on which the regular timetable runs.
    /// Makeup days carry compensatory sessions, not the regular timetable.
    pub const fn has_regular_classes(self) -> bool {
        matches!(self, Self::ClassDay)
    }
}

impl FromStr for DayCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownCategory(trimmed.to_owned()))
    }
}
