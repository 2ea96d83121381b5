use ratatui::layout::{Margin, Rect};

/// Interactive row under a screen position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowTarget {
    /// The "select all" row.
    All,
    /// The item row at this index.
    Item(usize),
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Map a click position to the row it lands on.
///
/// Geometry is in lockstep with the body widget: inside the body block's
/// borders, line 0 is the "select all" row and every following line is one
/// item. The whole line counts as the interaction surface, not just the
/// checkbox glyph.
pub fn hit_test(body: Rect, column: u16, row: u16, item_count: usize) -> Option<RowTarget> {
    let inner = body.inner(Margin::new(1, 1));
    if column < inner.x || column >= inner.x + inner.width {
        return None;
    }
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    match (row - inner.y) as usize {
        0 => Some(RowTarget::All),
        line if line - 1 < item_count => Some(RowTarget::Item(line - 1)),
        _ => None,
    }
}
