//! Contract between the calendar rendering surface and the view.
//!
//! The host widget calls back into three hooks: an events provider for a
//! visible range, the custom toolbar buttons, and the per-day cell class
//! hook. The view stays framework-agnostic behind them.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ViewError;
use crate::event::{DisplayEvent, ViewMode};
use crate::layout::LayoutConfig;

/// Visible date range requested by the rendering surface.
///
/// `start` is the first visible grid day (often in the previous month);
/// `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Toolbar button injected into the surface's header.
///
/// A click is routed by the host to the view's mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomButton {
    pub id: &'static str,
    pub label: &'static str,
    pub mode: ViewMode,
}

/// Widget configuration handed to the surface whenever it is (re)built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarOptions {
    pub initial_view: &'static str,
    pub locale: &'static str,
    pub layout: LayoutConfig,
    pub buttons: Vec<CustomButton>,
}

/// Hooks the host calendar widget invokes on the view.
#[async_trait]
pub trait CalendarSurface: Send + Sync {
    /// Produce the events for a visible range.
    ///
    /// Exactly one of the two outcomes reaches the surface per request:
    /// the complete event list, or an error. Never a partial list.
    async fn events(&self, range: FetchRange) -> Result<Vec<DisplayEvent>, ViewError>;

    /// Toolbar buttons toggling between the two vacation views.
    fn custom_buttons(&self) -> Vec<CustomButton>;

    /// Decoration tags for one day cell.
    fn day_cell_classes(&self, date: NaiveDate) -> Vec<&'static str>;
}
