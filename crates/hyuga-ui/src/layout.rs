//! Responsive sizing of the calendar widget.

/// Widths at or below this get the compact phone layout.
const COMPACT_MAX_WIDTH: u32 = 768;

/// Toolbar sections of the calendar header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderToolbar {
    pub left: &'static str,
    pub center: &'static str,
    pub right: &'static str,
}

/// Sizing and header configuration handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    pub height: u32,
    pub content_height: u32,
    /// Events shown per day before collapsing; 0 hides the overflow row.
    pub max_events_per_day: u32,
    pub header: HeaderToolbar,
}

impl LayoutConfig {
    /// Pick the layout for a viewport width. Recomputed on every resize.
    pub fn for_width(width: u32) -> Self {
        if width <= COMPACT_MAX_WIDTH {
            Self {
                height: 350,
                content_height: 250,
                max_events_per_day: 0,
                header: HeaderToolbar {
                    left: "prev,next",
                    center: "title",
                    right: "",
                },
            }
        } else {
            Self {
                height: 650,
                content_height: 450,
                max_events_per_day: 2,
                header: HeaderToolbar {
                    left: "prev,next today",
                    center: "title",
                    right: "myVacationButton,myDepartmentButton dayGridMonth,dayGridWeek",
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_viewport_is_compact() {
        let layout = LayoutConfig::for_width(500);

        assert_eq!(layout.height, 350);
        assert_eq!(layout.content_height, 250);
        assert_eq!(layout.max_events_per_day, 0);
        assert_eq!(layout.header.right, "");
    }

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(LayoutConfig::for_width(768).max_events_per_day, 0);
        assert_eq!(LayoutConfig::for_width(769).max_events_per_day, 2);
    }

    #[test]
    fn test_wide_viewport_exposes_toggles() {
        let layout = LayoutConfig::for_width(1280);

        assert_eq!(layout.height, 650);
        assert_eq!(layout.content_height, 450);
        assert!(layout.header.right.contains("myVacationButton"));
        assert!(layout.header.right.contains("myDepartmentButton"));
        assert_eq!(layout.header.left, "prev,next today");
    }
}
