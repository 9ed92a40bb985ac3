//! UI layer: panels, preview table, plot, and result rendering.

pub mod panels;
pub mod plot;
pub mod preview;
pub mod results;
