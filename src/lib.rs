pub mod display;
pub mod plan;
pub mod web;
