use thiserror::Error;

/// Position on the sketch grid, in grid cells (not pixels).
///
/// Coordinates are signed and never clamped: the cursor may walk off the
/// visible grid, in which case paints simply land outside the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `delta`, as a fresh value.
    #[must_use]
    pub const fn translated(self, delta: Delta) -> Self {
        Self {
            x: self.x + delta.dx,
            y: self.y + delta.dy,
        }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Unit step of a directional command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub dx: i32,
    pub dy: i32,
}

impl Delta {
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Geometry of one sketch surface: pixel extent plus grid pitch.
///
/// Construction is the fail-fast gate for misconfigured surfaces; a `Grid`
/// that exists is always drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    px_width: u16,
    px_height: u16,
    pitch: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid pitch must be at least 1px")]
    ZeroPitch,
    #[error("surface has no area: {width}x{height}px")]
    EmptySurface { width: u16, height: u16 },
}

impl Grid {
    pub const fn new(px_width: u16, px_height: u16, pitch: u16) -> Result<Self, GridError> {
        if pitch == 0 {
            return Err(GridError::ZeroPitch);
        }

        if px_width == 0 || px_height == 0 {
            return Err(GridError::EmptySurface {
                width: px_width,
                height: px_height,
            });
        }

        Ok(Self {
            px_width,
            px_height,
            pitch,
        })
    }

    pub const fn px_width(&self) -> u16 {
        self.px_width
    }

    pub const fn px_height(&self) -> u16 {
        self.px_height
    }

    pub const fn pitch(&self) -> u16 {
        self.pitch
    }

    /// Cells per row, `ceil(px_width / pitch)`.
    pub const fn width(&self) -> u16 {
        (self.px_width + self.pitch - 1) / self.pitch
    }

    /// Cells per column, `ceil(px_height / pitch)`.
    pub const fn height(&self) -> u16 {
        (self.px_height + self.pitch - 1) / self.pitch
    }

    /// Center cell: `round(dim / 2)` on both axes, halves rounding up.
    pub const fn center(&self) -> GridPos {
        GridPos::new(
            (self.width() as i32 + 1) / 2,
            (self.height() as i32 + 1) / 2,
        )
    }

    /// Pixel coordinates of a grid position. May fall outside the surface;
    /// callers clip per pixel.
    pub const fn to_px(&self, pos: GridPos) -> (i32, i32) {
        (pos.x * self.pitch as i32, pos.y * self.pitch as i32)
    }
}
