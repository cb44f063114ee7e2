use cuadrito_core as game;

use crate::*;

/// Pixel-space view over a board: hit-testing and flat cell rendering.
#[derive(Copy, Clone, Debug)]
pub struct GridView {
    origin: Point,
}

impl GridView {
    pub const fn new(origin: Point) -> Self {
        Self { origin }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Maps a window pixel to the cell containing it.
    pub fn cell_at(&self, board: &game::Board, x: f32, y: f32) -> Option<game::Coord2> {
        let dx = x - self.origin.x;
        let dy = y - self.origin.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }

        let pitch = board.cell_size() as f32;
        let col = (dx / pitch) as u32;
        let row = (dy / pitch) as u32;
        let side = u32::from(board.grid_size());
        if row >= side || col >= side {
            return None;
        }

        Some((row.try_into().unwrap(), col.try_into().unwrap()))
    }

    /// Draws every cell as a flat rectangle, clicked cells in the accent color.
    pub fn draw(&self, board: &game::Board, surface: &mut dyn Surface) {
        let pitch = board.cell_size() as f32;
        for ((row, col), clicked) in board.iter() {
            let rect = Rect::new(
                self.origin.x + f32::from(col) * pitch,
                self.origin.y + f32::from(row) * pitch,
                pitch,
                pitch,
            );
            let color = if clicked { ACCENT } else { BODY };
            surface.fill_rect(rect, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid_size: game::Coord) -> game::Board {
        game::Board::new(game::BoardConfig::new(grid_size, 50, "circle"))
    }

    #[test]
    fn maps_pixels_inside_each_cell() {
        let view = GridView::new(Point::new(10.0, 20.0));
        let game = board(3);

        assert_eq!(view.cell_at(&game, 10.0, 20.0), Some((0, 0)));
        assert_eq!(view.cell_at(&game, 135.0, 95.0), Some((1, 2)));
        assert_eq!(view.cell_at(&game, 59.0, 69.0), Some((0, 0)));
        assert_eq!(view.cell_at(&game, 60.0, 70.0), Some((1, 1)));
    }

    #[test]
    fn pixels_outside_the_board_map_to_none() {
        let view = GridView::new(Point::new(10.0, 20.0));
        let game = board(3);

        assert_eq!(view.cell_at(&game, 9.0, 20.0), None);
        assert_eq!(view.cell_at(&game, 10.0, 19.0), None);
        assert_eq!(view.cell_at(&game, 160.0, 20.0), None);
        assert_eq!(view.cell_at(&game, 10.0, 170.0), None);
    }

    #[test]
    fn draws_one_rect_per_cell_with_state_colors() {
        let view = GridView::new(Point::new(0.0, 0.0));
        let mut game = board(2);
        game.toggle((0, 1)).unwrap();

        let mut surface = Recorder::default();
        view.draw(&game, &mut surface);

        assert_eq!(surface.calls.len(), 4);
        assert_eq!(
            surface.calls[1],
            DrawCall::Rect(Rect::new(50.0, 0.0, 50.0, 50.0), ACCENT)
        );
        assert_eq!(
            surface.calls[0],
            DrawCall::Rect(Rect::new(0.0, 0.0, 50.0, 50.0), BODY)
        );
    }
}
