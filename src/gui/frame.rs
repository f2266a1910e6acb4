use crate::engine::SlotRenderer;
use crate::models::VisualDescriptor;

/// Holds what the grid should currently show; filled by the pipeline.
#[derive(Debug)]
pub struct GridFrame {
    descriptors: Vec<VisualDescriptor>,
    drag_enabled: bool,
}

impl GridFrame {
    pub fn new(slot_count: usize, min_scale: f32) -> Self {
        Self {
            descriptors: vec![VisualDescriptor::hidden(min_scale); slot_count],
            drag_enabled: false,
        }
    }

    /// Descriptors in slot order; index 0 is slot 1.
    pub fn descriptors(&self) -> &[VisualDescriptor] {
        &self.descriptors
    }

    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }
}

impl SlotRenderer for GridFrame {
    fn apply(&mut self, slot_index: usize, descriptor: VisualDescriptor) {
        if let Some(entry) = slot_index.checked_sub(1).and_then(|i| self.descriptors.get_mut(i)) {
            *entry = descriptor;
        }
    }

    fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }
}
