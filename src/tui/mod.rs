//! Terminal front end: a setup screen, then the table with its seats, board and
//! the 52-card source deck. Cards are placed with the mouse (click or drag) or
//! with the keyboard cursor.

pub mod app;
pub mod controller;
pub mod cue;
pub mod geometry;
mod ui;
