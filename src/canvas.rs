//! Turning collected data into text.

pub mod bar_graph;

pub use bar_graph::{BarGraph, percent_to_graph};
