/// Widths of the two halves of the window, plus an optional window height clamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub map_width: u32,
    pub controls_width: u32,
    /// `Some(h)` when the screen is taller than the map and the window should shrink to it
    pub window_height: Option<u32>,
}

impl FrameLayout {
    /// Split the screen between map and controls.
    ///
    /// `map_width`/`map_height` are the map's natural size in pixels,
    /// `controls_width` the preferred width of the control column.
    pub fn compute(
        screen_width: u32,
        screen_height: u32,
        map_width: u32,
        map_height: u32,
        controls_width: u32,
    ) -> Self {
        let natural = map_width + controls_width;

        let (map, controls) = if screen_width == natural {
            (map_width, controls_width)
        } else if screen_width > natural {
            // Extra room goes to the controls
            (map_width, screen_width - map_width)
        } else if screen_width > controls_width {
            (screen_width - controls_width, controls_width)
        } else {
            (screen_width / 2, screen_width / 2)
        };

        Self {
            map_width: map,
            controls_width: controls,
            window_height: (screen_height > map_height).then_some(map_height),
        }
    }
}
