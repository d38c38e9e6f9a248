pub mod chart;
pub mod config;
pub mod data;
pub mod events;
pub mod gui;
pub mod sys;
