//! Projection of holiday and vacation records into calendar events.

use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use parking_lot::Mutex;

use hyuga_vacations::{
    DepartmentVacation, GatewayError, Holiday, PersonalVacation, VacationClient, VacationStatus,
};

use crate::day_cell;
use crate::error::ViewError;
use crate::event::{self, DisplayEvent, ViewMode};
use crate::layout::LayoutConfig;
use crate::surface::{CalendarOptions, CalendarSurface, CustomButton, FetchRange};

/// Days into the visible range that land inside the month the grid is
/// primarily showing, past the leading days of the previous month.
const ANCHOR_OFFSET_DAYS: i64 = 7;

pub const MY_VACATION_BUTTON: CustomButton = CustomButton {
    id: "myVacationButton",
    label: "내 휴가 보기",
    mode: ViewMode::Mine,
};

pub const MY_DEPARTMENT_BUTTON: CustomButton = CustomButton {
    id: "myDepartmentButton",
    label: "내 부서 휴가 보기",
    mode: ViewMode::Department,
};

/// Month a month-grid view is primarily displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AnchorMonth {
    year: i32,
    month: u32,
}

impl AnchorMonth {
    fn of_range_start(start: NaiveDate) -> Self {
        let anchored = start + Duration::days(ANCHOR_OFFSET_DAYS);
        Self {
            year: anchored.year(),
            month: anchored.month(),
        }
    }

    fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

/// View-model backing the `/calendar` route.
///
/// Owns the toggle state and the latest holiday/vacation projection; the
/// host rendering surface reaches it through [`CalendarSurface`].
pub struct VacationCalendarView {
    gateway: VacationClient,
    mode: Mutex<ViewMode>,
    holiday_dates: Mutex<BTreeSet<NaiveDate>>,
    vacation_events: Mutex<Vec<DisplayEvent>>,
    request_seq: AtomicU64,
}

impl VacationCalendarView {
    pub fn new(gateway: VacationClient) -> Self {
        Self {
            gateway,
            mode: Mutex::new(ViewMode::default()),
            holiday_dates: Mutex::new(BTreeSet::new()),
            vacation_events: Mutex::new(Vec::new()),
            request_seq: AtomicU64::new(0),
        }
    }

    /// Current toggle state.
    pub fn mode(&self) -> ViewMode {
        *self.mode.lock()
    }

    /// Mutation entry point for the toggle; the surface's custom buttons
    /// land here.
    pub fn set_mode(&self, mode: ViewMode) {
        *self.mode.lock() = mode;
    }

    /// Holiday dates from the most recent successful holiday fetch.
    pub fn holiday_dates(&self) -> BTreeSet<NaiveDate> {
        self.holiday_dates.lock().clone()
    }

    /// Vacation events from the most recent completed projection.
    pub fn vacation_events(&self) -> Vec<DisplayEvent> {
        self.vacation_events.lock().clone()
    }

    /// Widget configuration for the current viewport width.
    pub fn calendar_options(&self, viewport_width: u32) -> CalendarOptions {
        CalendarOptions {
            initial_view: "dayGridMonth",
            locale: "ko",
            layout: LayoutConfig::for_width(viewport_width),
            buttons: self.custom_buttons(),
        }
    }

    /// Fetch and project all events for a visible range.
    ///
    /// Holidays come first, then the vacations of the current view mode.
    /// A failed fetch aborts the whole range: no partial delivery. A call
    /// overtaken by a newer one reports [`ViewError::Superseded`] and the
    /// overtaken result is dropped.
    pub async fn produce_events(
        &self,
        range: FetchRange,
    ) -> Result<Vec<DisplayEvent>, ViewError> {
        let seq = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let anchor = AnchorMonth::of_range_start(range.start);

        let holidays = self
            .gateway
            .holidays(
                range.start.year(),
                range.start.month(),
                range.end.year(),
                range.end.month(),
            )
            .await
            .map_err(|e| self.fetch_failed(e))?;
        self.ensure_current(seq)?;

        let holiday_events: Vec<DisplayEvent> = holidays
            .iter()
            .map(|h| project_holiday(h, anchor))
            .collect();
        *self.holiday_dates.lock() = holidays.iter().map(|h| h.holiday_date).collect();

        let vacations = match self.mode() {
            ViewMode::Department => {
                let list = self
                    .gateway
                    .department_vacations()
                    .await
                    .map_err(|e| self.fetch_failed(e))?;
                project_department(list.data)
            }
            ViewMode::Mine => {
                let mine = self
                    .gateway
                    .my_vacations()
                    .await
                    .map_err(|e| self.fetch_failed(e))?;
                project_personal(mine, anchor)
            }
        };
        self.ensure_current(seq)?;

        *self.vacation_events.lock() = vacations.clone();

        let mut events = holiday_events;
        events.extend(vacations);
        Ok(events)
    }

    fn ensure_current(&self, seq: u64) -> Result<(), ViewError> {
        if self.request_seq.load(Ordering::SeqCst) != seq {
            return Err(ViewError::Superseded);
        }
        Ok(())
    }

    fn fetch_failed(&self, err: GatewayError) -> ViewError {
        tracing::error!("이벤트 로딩 실패: {}", err);
        ViewError::Gateway(err)
    }
}

#[async_trait]
impl CalendarSurface for VacationCalendarView {
    async fn events(&self, range: FetchRange) -> Result<Vec<DisplayEvent>, ViewError> {
        self.produce_events(range).await
    }

    fn custom_buttons(&self) -> Vec<CustomButton> {
        vec![MY_VACATION_BUTTON, MY_DEPARTMENT_BUTTON]
    }

    fn day_cell_classes(&self, date: NaiveDate) -> Vec<&'static str> {
        day_cell::day_cell_classes(date, &self.holiday_dates.lock())
    }
}

fn project_holiday(holiday: &Holiday, anchor: AnchorMonth) -> DisplayEvent {
    let colors = if anchor.contains(holiday.holiday_date) {
        event::HOLIDAY_CURRENT
    } else {
        event::HOLIDAY_OTHER
    };

    DisplayEvent::spanning(
        holiday.name.clone(),
        holiday.holiday_date,
        holiday.holiday_date,
        colors,
    )
}

/// Department view: dedup by vacation id, first occurrence wins, order
/// preserved. Status is never consulted here.
fn project_department(records: Vec<DepartmentVacation>) -> Vec<DisplayEvent> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .filter(|v| seen.insert(v.vacation_id))
        .map(|v| {
            DisplayEvent::spanning(
                format!("{} 휴가", v.user_name),
                v.start_at,
                v.end_at,
                event::DEPARTMENT_VACATION,
            )
        })
        .collect()
}

/// Personal view: drop rejected/cancelled/deleted requests. Records carry
/// no id, so there is no dedup here.
fn project_personal(records: Vec<PersonalVacation>, anchor: AnchorMonth) -> Vec<DisplayEvent> {
    records
        .into_iter()
        .filter(|v| v.status.is_active())
        .map(|v| {
            let colors = match v.status {
                VacationStatus::Pending if anchor.contains(v.start_at) => {
                    event::VACATION_PENDING_CURRENT
                }
                VacationStatus::Pending => event::VACATION_PENDING_OTHER,
                _ => event::VACATION_APPROVED,
            };

            DisplayEvent::spanning("휴가".to_string(), v.start_at, v.end_at, colors)
        })
        .collect()
}
