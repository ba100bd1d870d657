use etcha_core::shapes::Rect;

pub const SCRIPT_PANE_WIDTH: u16 = 18;

pub const fn sketch(viewport: Rect) -> Rect {
    Rect {
        width: viewport.width.saturating_sub(SCRIPT_PANE_WIDTH),
        height: viewport.height.saturating_sub(1),
        ..viewport
    }
}

pub const fn script(viewport: Rect) -> Rect {
    let sketch = sketch(viewport);

    Rect {
        x: sketch.right(),
        width: viewport.width.saturating_sub(sketch.width),
        height: sketch.height,
        ..viewport
    }
}

pub const fn status(viewport: Rect) -> Rect {
    Rect {
        y: viewport.height.saturating_sub(1),
        height: 1,
        ..viewport
    }
}
