// Main library entry point for dot2tikz.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;
