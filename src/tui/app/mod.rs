mod setup;
mod state;

pub use state::{AppState, Gesture, InputAction, Pointer, Scene};
