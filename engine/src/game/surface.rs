use super::types::Cell;

/// Where one player's grid gets drawn. `draw` must ignore cells outside the
/// grid: heads and bullets may sit transiently out of range before collision
/// resolution or hand-off removes them.
pub trait GridSurface: Send {
    fn clear(&mut self);
    fn draw(&mut self, cells: &[Cell]);
}

/// Renders nothing; for headless competitions.
pub struct NullSurface;

impl GridSurface for NullSurface {
    fn clear(&mut self) {}

    fn draw(&mut self, _cells: &[Cell]) {}
}
