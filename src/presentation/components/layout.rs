use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centered rectangle of at most `width` x `height` inside `area`.
pub fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let inner = vertical[1];
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(inner.width.saturating_sub(width) / 2),
            Constraint::Length(width.min(inner.width)),
            Constraint::Min(0),
        ])
        .split(inner);
    horizontal[1]
}

/// Columns of `cell_width` that fit in `width`, never less than one.
pub fn grid_columns(width: u16, cell_width: u16) -> usize {
    (width / cell_width.max(1)).max(1) as usize
}

/// Rect of grid cell `index`, laid out row-major and shifted up by
/// `first_row` rows. `None` when the cell falls outside `area`.
pub fn grid_cell(
    area: Rect,
    index: usize,
    columns: usize,
    cell: (u16, u16),
    first_row: usize,
) -> Option<Rect> {
    let (cell_width, cell_height) = cell;
    let row = (index / columns).checked_sub(first_row)?;
    let column = index % columns;
    let x = area.x + column as u16 * cell_width;
    let y_offset = (row as u16).checked_mul(cell_height)?;
    if y_offset.checked_add(cell_height)? > area.height {
        return None;
    }
    let width = cell_width.min(area.right().saturating_sub(x));
    Some(Rect::new(x, area.y + y_offset, width, cell_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered() {
        let rect = popup_rect(Rect::new(0, 0, 40, 20), 10, 4);
        assert_eq!(rect, Rect::new(15, 8, 10, 4));
    }

    #[test]
    fn grid_places_cells_row_major() {
        let area = Rect::new(1, 1, 60, 12);
        assert_eq!(grid_columns(area.width, 26), 2);
        assert_eq!(grid_cell(area, 3, 2, (26, 4), 0), Some(Rect::new(27, 5, 26, 4)));
        assert_eq!(grid_cell(area, 6, 2, (26, 4), 0), None);
        assert_eq!(grid_cell(area, 6, 2, (26, 4), 1), Some(Rect::new(1, 9, 26, 4)));
        assert_eq!(grid_cell(area, 0, 2, (26, 4), 1), None);
    }
}
