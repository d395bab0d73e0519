use std::io::{self, Write};

/// Short audio feedback for a card landing in a slot.
pub trait Cue {
    fn deal(&mut self);
}

/// Rings the terminal bell.
#[derive(Debug, Default)]
pub struct Bell;

impl Cue for Bell {
    fn deal(&mut self) {
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            log::debug!("bell failed: {e}");
        }
    }
}

#[derive(Debug, Default)]
pub struct Silent;

impl Cue for Silent {
    fn deal(&mut self) {}
}
