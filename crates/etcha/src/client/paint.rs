//! Paint primitives over the sketch raster.
//!
//! All coordinates arrive in raster cells; grid positions are scaled by the
//! grid pitch first. Cells outside the raster are dropped, never an error.

use etcha_core::shapes::{Grid, GridPos, Point};

use super::style::Style;
use super::surface::Surface;

const RULE_V: &str = "│";
const RULE_H: &str = "─";
const RULE_CROSS: &str = "┼";
const INK: &str = "█";

pub fn clear(surface: &mut Surface) {
    surface.reset();
}

/// Rules at every multiple of the pitch, both axes, far edge inclusive.
pub fn grid(surface: &mut Surface, grid: &Grid, style: Style) {
    let pitch = grid.pitch() as i32;

    let mut x = 0;
    while x <= grid.px_width() as i32 {
        for y in 0..grid.px_height() as i32 {
            put(surface, x, y, RULE_V, style);
        }
        x += pitch;
    }

    let mut y = 0;
    while y <= grid.px_height() as i32 {
        for x in 0..grid.px_width() as i32 {
            let sym = if x % pitch == 0 { RULE_CROSS } else { RULE_H };
            put(surface, x, y, sym, style);
        }
        y += pitch;
    }
}

/// Filled disc of radius `weight` around the pitch-scaled position.
pub fn point(surface: &mut Surface, grid: &Grid, pos: GridPos, style: Style, weight: u16) {
    let (cx, cy) = grid.to_px(pos);
    let r = weight as i32;

    for dy in -r..=r {
        let dx_max = isqrt((r as i64 * r as i64 - dy as i64 * dy as i64) as u64) as i32;

        for x in cx - dx_max..=cx + dx_max {
            put(surface, x, cy + dy, INK, style);
        }
    }
}

/// Line between the pitch-scaled endpoints plus a marker disc at each end.
pub fn segment(
    surface: &mut Surface,
    grid: &Grid,
    from: GridPos,
    to: GridPos,
    style: Style,
    weight: u16,
) {
    point(surface, grid, from, style, weight);
    point(surface, grid, to, style, weight);

    let (x0, y0) = grid.to_px(from);
    let (x1, y1) = grid.to_px(to);

    line(surface, x0, y0, x1, y1, style);
}

/// Bresenham, one cell wide.
fn line(surface: &mut Surface, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx: i32 = if x0 < x1 { 1 } else { -1 };
    let sy: i32 = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cx = x0;
    let mut cy = y0;

    loop {
        put(surface, cx, cy, INK, style);

        if cx == x1 && cy == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cx += sx;
        }
        if e2 <= dx {
            err += dx;
            cy += sy;
        }
    }
}

fn put(surface: &mut Surface, x: i32, y: i32, symbol: &str, style: Style) {
    let area = surface.area;

    let in_bounds = x >= area.left() as i32
        && x < area.right() as i32
        && y >= area.top() as i32
        && y < area.bottom() as i32;

    if !in_bounds {
        return;
    }

    let idx = surface.index_of(Point::new(x as u16, y as u16));
    surface[idx].set_symbol(symbol);
    surface[idx].set_style(style);
}

fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    let mut x = n;
    let mut y = (x + 1) / 2;

    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }

    x
}

#[cfg(test)]
mod test {
    use etcha_core::shapes::Rect;

    use super::*;

    fn raster(w: u16, h: u16) -> Surface {
        Surface::empty(Rect::new(0, 0, w, h))
    }

    fn sym_at(surface: &Surface, x: u16, y: u16) -> &str {
        &surface[surface.index_of(Point::new(x, y))].symbol
    }

    #[test]
    fn grid_rules_land_on_pitch_multiples() {
        let mut surface = raster(11, 11);
        let g = Grid::new(11, 11, 5).unwrap();

        grid(&mut surface, &g, Style::default());

        assert_eq!(sym_at(&surface, 0, 0), RULE_CROSS);
        assert_eq!(sym_at(&surface, 5, 5), RULE_CROSS);
        assert_eq!(sym_at(&surface, 10, 0), RULE_CROSS);
        assert_eq!(sym_at(&surface, 0, 3), RULE_V);
        assert_eq!(sym_at(&surface, 3, 5), RULE_H);
        assert_eq!(sym_at(&surface, 3, 3), " ");
    }

    #[test]
    fn point_weight_zero_is_one_cell() {
        let mut surface = raster(10, 10);
        let g = Grid::new(10, 10, 2).unwrap();

        point(&mut surface, &g, GridPos::new(2, 3), Style::default(), 0);

        assert_eq!(sym_at(&surface, 4, 6), INK);
        assert_eq!(sym_at(&surface, 5, 6), " ");
        assert_eq!(sym_at(&surface, 4, 7), " ");
    }

    #[test]
    fn point_weight_one_is_a_disc() {
        let mut surface = raster(10, 10);
        let g = Grid::new(10, 10, 2).unwrap();

        point(&mut surface, &g, GridPos::new(2, 2), Style::default(), 1);

        // plus-shaped neighborhood of (4, 4)
        for (x, y) in [(4, 4), (3, 4), (5, 4), (4, 3), (4, 5)] {
            assert_eq!(sym_at(&surface, x, y), INK, "({x}, {y})");
        }
        assert_eq!(sym_at(&surface, 3, 3), " ");
        assert_eq!(sym_at(&surface, 5, 5), " ");
    }

    #[test]
    fn segment_covers_every_cell_between_endpoints() {
        let mut surface = raster(10, 10);
        let g = Grid::new(10, 10, 4).unwrap();

        segment(
            &mut surface,
            &g,
            GridPos::new(0, 1),
            GridPos::new(2, 1),
            Style::default(),
            0,
        );

        for x in 0..=8 {
            assert_eq!(sym_at(&surface, x, 4), INK, "x={x}");
        }
        assert_eq!(sym_at(&surface, 9, 4), " ");
        assert_eq!(sym_at(&surface, 4, 5), " ");
    }

    #[test]
    fn segment_stamps_fat_markers_at_endpoints() {
        let mut surface = raster(12, 12);
        let g = Grid::new(12, 12, 4).unwrap();

        segment(
            &mut surface,
            &g,
            GridPos::new(1, 1),
            GridPos::new(2, 1),
            Style::default(),
            1,
        );

        // marker discs reach one cell off the line at both ends
        assert_eq!(sym_at(&surface, 4, 5), INK);
        assert_eq!(sym_at(&surface, 8, 3), INK);
        // the line between stays one cell wide
        assert_eq!(sym_at(&surface, 6, 5), " ");
    }

    #[test]
    fn paints_off_raster_are_dropped() {
        let mut surface = raster(8, 8);
        let g = Grid::new(8, 8, 4).unwrap();

        point(&mut surface, &g, GridPos::new(-1, 0), Style::default(), 1);
        segment(
            &mut surface,
            &g,
            GridPos::new(1, 1),
            GridPos::new(3, 1),
            Style::default(),
            0,
        );

        // disc at (-4, 0) never lands; segment clips at the right edge
        assert_eq!(sym_at(&surface, 0, 0), " ");
        assert_eq!(sym_at(&surface, 7, 4), INK);
    }

    #[test]
    fn isqrt_is_exact_for_squares() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
    }
}
