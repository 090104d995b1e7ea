//! Bar chart rendering with plotters

pub mod chart;
pub mod styles;

pub use chart::{charts_for, render_charts, BarChart, Orientation};

#[cfg(test)]
mod tests;
