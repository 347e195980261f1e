//! Ratatui front-end: a sidebar menu over the six views, registration forms,
//! search listings with expandable cards, and the statistics charts.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
