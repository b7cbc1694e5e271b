use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

pub mod input;

pub use input::InputChannel;

const POLL_MILLIS: u64 = 50;

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Flap,
    Quit,
    Ignore,
}

/// Flags raised by the listener thread, shared with the session.
#[derive(Clone, Debug, Default)]
struct KeySignals {
    quit: Arc<AtomicBool>,
    // Set by every flap press; unlike the toggle, two presses do not cancel out.
    pressed: Arc<AtomicBool>,
}

impl KeySignals {
    fn apply(&self, action: KeyAction, input: &InputChannel) {
        match action {
            KeyAction::Flap => {
                input.toggle();
                self.pressed.store(true, Ordering::Release);
            }
            KeyAction::Quit => {
                debug!("quit requested");
                self.quit.store(true, Ordering::Release);
            }
            KeyAction::Ignore => {}
        }
    }

    fn take_press(&self) -> bool {
        self.pressed.swap(false, Ordering::AcqRel)
    }
}

/// Background thread turning terminal key presses into input toggles.
pub struct KeyListener {
    signals: KeySignals,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl KeyListener {
    pub fn spawn(input: InputChannel) -> Self {
        let signals = KeySignals::default();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = {
            let signals = signals.clone();
            let stop = Arc::clone(&stop);
            thread::spawn(move || listen(input, signals, stop))
        };
        Self {
            signals,
            stop,
            handle: Some(handle),
        }
    }

    /// Raised by Esc or Ctrl-C.
    pub fn quit_signal(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.signals.quit)
    }

    /// Whether any flap key was pressed since the last call.
    pub fn take_key_press(&self) -> bool {
        self.signals.take_press()
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn listen(input: InputChannel, signals: KeySignals, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(Duration::from_millis(POLL_MILLIS)) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                warn!(?err, "key listener stopped polling");
                return;
            }
        }
        let Ok(Event::Key(key)) = event::read() else {
            continue;
        };
        signals.apply(classify(&key), &input);
    }
}

fn classify(key: &KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Flap,
    }
}
