pub mod app;
pub mod frame;
pub mod grid;
pub mod helpers;

pub use app::SquaresApp;
pub use frame::GridFrame;
pub use grid::draw_grid;
