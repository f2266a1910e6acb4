pub mod damage_memory;
pub mod health_scaler;
pub mod slot_assigner;
pub mod visual_state;
pub mod events;
pub mod pipeline;

pub use damage_memory::DamageMemory;
pub use health_scaler::HealthScaler;
pub use slot_assigner::{AssignError, Slot, SlotAssigner, plan_assignment};
pub use visual_state::VisualStateComputer;
pub use events::{GridEvent, SlotRenderer};
pub use pipeline::RefreshPipeline;
