//! Vacation calendar view for Hyuga.
//!
//! Projects backend holiday/vacation records into colored calendar display
//! events behind the rendering-surface contract.

pub mod day_cell;
pub mod error;
pub mod event;
pub mod layout;
pub mod provider;
pub mod surface;
pub mod view_model;

pub use error::ViewError;
pub use event::{ColorTriple, DisplayEvent, ViewMode};
pub use layout::{HeaderToolbar, LayoutConfig};
pub use provider::CalendarViewProvider;
pub use surface::{CalendarOptions, CalendarSurface, CustomButton, FetchRange};
pub use view_model::VacationCalendarView;
