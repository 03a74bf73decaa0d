//! Registration of the calendar view at its single route.

use std::sync::Arc;

use anyhow::Result;

use hyuga_core::{ViewContext, ViewProvider};
use hyuga_vacations::VacationClient;

use crate::view_model::VacationCalendarView;

pub const CALENDAR_ROUTE: &str = "/calendar";

/// Mounts the vacation calendar view in the application.
pub struct CalendarViewProvider {
    view: Arc<VacationCalendarView>,
}

impl CalendarViewProvider {
    pub fn new(gateway: VacationClient) -> Self {
        Self {
            view: Arc::new(VacationCalendarView::new(gateway)),
        }
    }

    /// Shared handle for the host rendering surface.
    pub fn view(&self) -> Arc<VacationCalendarView> {
        self.view.clone()
    }
}

impl ViewProvider for CalendarViewProvider {
    fn route(&self) -> &str {
        CALENDAR_ROUTE
    }

    fn title(&self) -> &str {
        "휴가 달력"
    }

    fn initialize(&mut self, _ctx: &ViewContext) -> Result<()> {
        tracing::debug!("Calendar view ready, mode: {:?}", self.view.mode());
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
