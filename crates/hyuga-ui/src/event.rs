//! Display event model consumed by the calendar rendering surface.

use chrono::NaiveDate;
use serde::Serialize;

/// Fill, text and border colors for one event chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTriple {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

/// Holiday inside the anchor month.
pub const HOLIDAY_CURRENT: ColorTriple = ColorTriple {
    background: "#ff6666",
    text: "white",
    border: "#ff4444",
};

/// Holiday on the grid's leading or trailing days.
pub const HOLIDAY_OTHER: ColorTriple = ColorTriple {
    background: "#ffe5e5",
    text: "#944",
    border: "#f5aaaa",
};

/// Department member's vacation. The border stays the approved green even
/// though the fill is blue.
pub const DEPARTMENT_VACATION: ColorTriple = ColorTriple {
    background: "#4B89DC",
    text: "white",
    border: "#5cb536",
};

/// Own vacation in any surviving non-pending state.
pub const VACATION_APPROVED: ColorTriple = ColorTriple {
    background: "#6bd13f",
    text: "#1a4209",
    border: "#5cb536",
};

/// Own pending vacation starting in the anchor month.
pub const VACATION_PENDING_CURRENT: ColorTriple = ColorTriple {
    background: "#f7ed5c",
    text: "#5c5121",
    border: "#ccc44e",
};

/// Own pending vacation starting outside the anchor month.
pub const VACATION_PENDING_OTHER: ColorTriple = ColorTriple {
    background: "#fcfad9",
    text: "#5c5121",
    border: "#d1c177",
};

/// Which vacation set the calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Mine,
    Department,
}

/// All-day event in the shape the rendering surface expects.
///
/// `end` is exclusive: one calendar day past the last occupied day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub all_day: bool,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub border_color: &'static str,
}

impl DisplayEvent {
    /// Build an all-day event from an inclusive date span.
    pub fn spanning(
        title: String,
        start: NaiveDate,
        end_inclusive: NaiveDate,
        colors: ColorTriple,
    ) -> Self {
        Self {
            title,
            start,
            end: end_inclusive.succ_opt().unwrap_or(end_inclusive),
            all_day: true,
            background_color: colors.background,
            text_color: colors.text,
            border_color: colors.border,
        }
    }
}
