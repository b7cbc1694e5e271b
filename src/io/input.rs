use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Single-slot "flap" bit shared between the key listener and the game loop.
///
/// Every key press flips the bit; the loop reads and clears it once per tick,
/// so presses between ticks collapse into whatever the bit ended up as.
#[derive(Clone, Debug, Default)]
pub struct InputChannel {
    pending: Arc<AtomicBool>,
}

impl InputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self) {
        self.pending.fetch_xor(true, Ordering::AcqRel);
    }

    pub fn consume(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn consume_reads_once_then_resets() {
        let input = InputChannel::new();
        assert!(!input.consume());
        input.toggle();
        assert!(input.consume());
        assert!(!input.consume());
        assert!(!input.consume());
    }

    #[test]
    fn presses_between_ticks_collapse() {
        let input = InputChannel::new();
        input.toggle();
        input.toggle();
        assert!(!input.consume());
        input.toggle();
        input.toggle();
        input.toggle();
        assert!(input.consume());
    }

    #[test]
    fn clones_share_the_same_slot() {
        let input = InputChannel::new();
        let writer = input.clone();
        thread::spawn(move || writer.toggle())
            .join()
            .expect("writer thread");
        assert!(input.consume());
    }
}
