pub mod plots;

pub use plots::{draw_all, plot_bounds, PlotBounds};
