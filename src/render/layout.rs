use ratatui::layout::Rect;

/// Terminal cells per tile at zoom 1. Cells are roughly twice as tall as wide.
pub const BASE_CELL_WIDTH: u16 = 2;
pub const BASE_CELL_HEIGHT: u16 = 1;

/// How big one tile is on screen, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl TileLayout {
    pub fn new(zoom: f32) -> Self {
        let scale = |base: u16| ((f32::from(base) * zoom).round() as u16).max(1);
        Self {
            cell_width: scale(BASE_CELL_WIDTH),
            cell_height: scale(BASE_CELL_HEIGHT),
        }
    }

    /// Pixel surface a board area stands for, at zoom 1.
    ///
    /// Zoom only changes how the tiles are drawn, not how many there are.
    pub fn surface_size(area: Rect, tile_size: i32) -> (i32, i32) {
        let columns = i32::from(area.width / BASE_CELL_WIDTH);
        let rows = i32::from(area.height / BASE_CELL_HEIGHT);
        let scale = |cells: i32| cells.checked_mul(tile_size).unwrap_or(i32::MAX);
        (scale(columns), scale(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unzoomed() {
        assert_eq!(
            TileLayout::new(1.0),
            TileLayout {
                cell_width: 2,
                cell_height: 1
            }
        );
    }

    #[test]
    fn test_zoom_scales_cells() {
        let layout = TileLayout::new(2.0);
        assert_eq!(layout.cell_width, 4);
        assert_eq!(layout.cell_height, 2);

        let layout = TileLayout::new(1.5);
        assert_eq!(layout.cell_width, 3);
        assert_eq!(layout.cell_height, 2);
    }

    #[test]
    fn test_zoom_out_never_vanishes() {
        let layout = TileLayout::new(0.1);
        assert_eq!(layout.cell_width, 1);
        assert_eq!(layout.cell_height, 1);
    }

    #[test]
    fn test_surface_size() {
        let area = Rect::new(1, 4, 41, 20);
        assert_eq!(TileLayout::surface_size(area, 32), (20 * 32, 20 * 32));
        assert_eq!(TileLayout::surface_size(Rect::new(0, 0, 1, 1), 32), (0, 32));
    }

    #[test]
    fn test_surface_size_saturates() {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        assert_eq!(
            TileLayout::surface_size(area, i32::MAX),
            (i32::MAX, i32::MAX)
        );
    }
}
