/// Row-major placement of slots on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub slot_count: usize,
    pub columns: usize,
    pub rows: usize,
    pub base_size: f32,
    pub spacing: f32,
}

impl GridLayout {
    pub fn new(slot_count: usize, columns: usize, base_size: f32, spacing: f32) -> Self {
        let columns = columns.max(1);
        let rows = slot_count.div_ceil(columns);
        Self { slot_count, columns, rows, base_size, spacing }
    }

    /// Side length of one cell including spacing.
    pub fn pitch(&self) -> f32 {
        self.base_size + self.spacing
    }

    /// (column, row) of a 1-based slot index.
    pub fn cell(&self, slot_index: usize) -> (usize, usize) {
        let zero_based = slot_index.saturating_sub(1);
        (zero_based % self.columns, zero_based / self.columns)
    }

    /// Top-left corner of a slot's cell relative to the grid origin.
    pub fn cell_origin(&self, slot_index: usize) -> (f32, f32) {
        let (column, row) = self.cell(slot_index);
        (column as f32 * self.pitch(), row as f32 * self.pitch())
    }

    pub fn total_size(&self) -> (f32, f32) {
        (self.columns as f32 * self.pitch(), self.rows as f32 * self.pitch())
    }
}
