mod palette;

pub use palette::gradient_rgb;

use macroquad::prelude::*;

use crate::application::{GameState, Viewport};
use crate::domain::Grid;

const DEAD_COLOR: Color = BLACK;
const GRID_LINE_COLOR: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 0.15 };

fn live_color(grid: &Grid, row: usize, col: usize, gradient: bool) -> Color {
    if gradient {
        let [r, g, b] = gradient_rgb(row, col, grid.size());
        Color::from_rgba(r, g, b, 255)
    } else {
        WHITE
    }
}

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw normal mode: one quad per live cell plus grid lines
pub fn draw_tiles(grid: &Grid, viewport: &Viewport, gradient: bool) {
    let cell_size = grid.cell_size();
    let side = cell_size as f32 * viewport.scale;

    for tile in grid.tiles().iter().filter(|t| t.is_alive()) {
        let (row, col) = tile.position();
        let (x, y) = viewport.cell_to_screen(row, col, cell_size);
        draw_rectangle(x, y, side, side, live_color(grid, row, col, gradient));
    }

    let extent = grid.size() as f32 * side;
    for k in 0..=grid.size() {
        let offset = k as f32 * side;
        draw_line(
            viewport.offset_x,
            viewport.offset_y + offset,
            viewport.offset_x + extent,
            viewport.offset_y + offset,
            1.0,
            GRID_LINE_COLOR,
        );
        draw_line(
            viewport.offset_x + offset,
            viewport.offset_y,
            viewport.offset_x + offset,
            viewport.offset_y + extent,
            1.0,
            GRID_LINE_COLOR,
        );
    }
}

/// Large-mode canvas: one pixel per cell in a texture.
///
/// After a step only the cells in the grid's changed list are rewritten;
/// anything else that touched the lattice requires a full repaint.
pub struct LargeCanvas {
    size: usize,
    image: Image,
    texture: Texture2D,
}

impl LargeCanvas {
    pub fn new(size: usize) -> Self {
        let side = size.min(u16::MAX as usize) as u16;
        let image = Image::gen_image_color(side, side, DEAD_COLOR);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self { size, image, texture }
    }

    fn paint(&mut self, grid: &Grid, row: usize, col: usize, gradient: bool) {
        let color = if grid.is_alive(row, col) {
            live_color(grid, row, col, gradient)
        } else {
            DEAD_COLOR
        };
        self.image.set_pixel(col as u32, row as u32, color);
    }

    /// Bring the texture in line with the grid
    pub fn sync(&mut self, grid: &Grid, gradient: bool, full_redraw: bool) {
        let resized = self.size != grid.size();
        if resized {
            *self = Self::new(grid.size());
        }

        if full_redraw || resized {
            for row in 0..self.size {
                for col in 0..self.size {
                    self.paint(grid, row, col, gradient);
                }
            }
        } else {
            for &(row, col) in grid.changed() {
                self.paint(grid, row, col, gradient);
            }
        }
        self.texture.update(&self.image);
    }

    pub fn draw(&self, viewport: &Viewport) {
        let side = viewport.side(self.size);
        draw_texture_ex(
            &self.texture,
            viewport.offset_x,
            viewport.offset_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(side, side)),
                ..Default::default()
            },
        );
    }
}

/// Draw the status overlay
pub fn draw_status(state: &GameState) {
    let grid = &state.grid;
    let lines = [
        format!(
            "{} mode  {}x{}  ({} cells)",
            grid.mode().name(),
            grid.size(),
            grid.size(),
            format_number(grid.size() * grid.size())
        ),
        format!(
            "Gen {}  {}",
            grid.generation(),
            if grid.is_paused() { "Paused" } else { "Running" }
        ),
        format!(
            "Evolve {:.1}ms  Render {:.1}ms  FPS {}",
            state.last_evolution_time_ms,
            state.last_render_time_ms,
            get_fps()
        ),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 8.0, 18.0 + i as f32 * 16.0, 16.0, Color::from_rgba(0, 255, 150, 255));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(24_649), "24.6K");
        assert_eq!(format_number(1_210_000), "1.2M");
    }
}
