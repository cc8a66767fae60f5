/// Viewport maps the square display footprint onto the window.
///
/// The footprint keeps its aspect ratio: a wide window gets bars on the
/// sides, a tall one above and below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    /// Window pixels per display unit
    pub scale: f32,
}

impl Viewport {
    /// Fit a `display_size` square into a `window_width × window_height` window
    pub fn fit(window_width: f32, window_height: f32, display_size: usize) -> Self {
        let side = window_width.min(window_height).max(0.0);
        let scale = if display_size == 0 { 1.0 } else { side / display_size as f32 };
        Self {
            offset_x: (window_width - side) / 2.0,
            offset_y: (window_height - side) / 2.0,
            scale,
        }
    }

    /// Side length of the footprint in window pixels
    pub fn side(&self, display_size: usize) -> f32 {
        display_size as f32 * self.scale
    }

    /// Convert window coordinates to display units
    pub fn screen_to_display(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        ((screen_x - self.offset_x) / self.scale, (screen_y - self.offset_y) / self.scale)
    }

    /// Convert window coordinates to `(row, col)`; `None` outside the footprint.
    ///
    /// Horizontal position selects the column, vertical the row. The result is
    /// not clamped to the grid size; grid mutators ignore out-of-range cells.
    pub fn screen_to_cell(
        &self,
        screen_x: f32,
        screen_y: f32,
        cell_size: usize,
    ) -> Option<(usize, usize)> {
        let (x, y) = self.screen_to_display(screen_x, screen_y);
        if x < 0.0 || y < 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cell = cell_size.max(1) as f32;
        Some(((y / cell) as usize, (x / cell) as usize))
    }

    /// Convert `(row, col)` to the window position of the cell's top-left corner
    pub fn cell_to_screen(&self, row: usize, col: usize, cell_size: usize) -> (f32, f32) {
        let cell = cell_size as f32 * self.scale;
        (self.offset_x + col as f32 * cell, self.offset_y + row as f32 * cell)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fit() {
        let vp = Viewport::fit(1100.0, 1100.0, 1100);
        assert_eq!(vp, Viewport::default());
        assert_eq!(vp.screen_to_cell(20.0, 7.0, 7), Some((1, 2)));
        assert_eq!(vp.screen_to_cell(20.0, 7.0, 1), Some((7, 20)));
    }

    #[test]
    fn test_pillarbox_on_wide_window() {
        let vp = Viewport::fit(1600.0, 800.0, 1100);
        assert_eq!(vp.offset_x, 400.0);
        assert_eq!(vp.offset_y, 0.0);
        assert_eq!(vp.side(1100), 800.0);
        // Left bar is outside the grid
        assert_eq!(vp.screen_to_cell(100.0, 100.0, 7), None);
    }

    #[test]
    fn test_round_trip_cell_corner() {
        let vp = Viewport::fit(800.0, 1200.0, 1100);
        let (x, y) = vp.cell_to_screen(10, 20, 7);
        assert_eq!(vp.screen_to_cell(x + 0.5, y + 0.5, 7), Some((10, 20)));
    }
}
