//! Radial ROYGBIV gradient for live cells.

/// RGB color for a live cell at `(row, col)` on a `size × size` grid.
///
/// Hue runs from 300 (violet) at the center to 0 (red) at the corners, at
/// full saturation and value.
pub fn gradient_rgb(row: usize, col: usize, size: usize) -> [u8; 3] {
    let center = size as f32 / 2.0;
    let max_distance = (2.0 * center * center).sqrt();
    let distance = {
        let dr = row as f32 - center;
        let dc = col as f32 - center;
        (dr * dr + dc * dc).sqrt()
    };
    let t = if max_distance > 0.0 { (distance / max_distance).clamp(0.0, 1.0) } else { 0.0 };

    hue_to_rgb((1.0 - t) * 300.0)
}

/// HSV to RGB with saturation and value fixed at 1
fn hue_to_rgb(hue: f32) -> [u8; 3] {
    let x = 1.0 - ((hue / 60.0) % 2.0 - 1.0).abs();
    let (r, g, b) = match hue {
        h if h < 60.0 => (1.0, x, 0.0),
        h if h < 120.0 => (x, 1.0, 0.0),
        h if h < 180.0 => (0.0, 1.0, x),
        h if h < 240.0 => (0.0, x, 1.0),
        h if h < 300.0 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let channel = |v: f32| (v * 255.0).clamp(0.0, 255.0) as u8;
    [channel(r), channel(g), channel(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_is_red() {
        assert_eq!(gradient_rgb(0, 0, 100), [255, 0, 0]);
    }

    #[test]
    fn test_center_is_violet() {
        assert_eq!(gradient_rgb(50, 50, 100), [255, 0, 255]);
    }

    #[test]
    fn test_midway_is_green_ish() {
        let [r, g, _] = hue_to_rgb(120.0);
        assert_eq!((r, g), (0, 255));
    }
}
