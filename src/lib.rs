pub mod canvas;
pub mod cli;
pub mod components;
pub mod logging;
pub mod report;
