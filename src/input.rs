//! Keyboard input delivery
//!
//! The window thread turns physical key presses into [`KeyEvent`]s and pushes
//! them into an [`InputSender`]. The simulation thread drains the matching
//! [`InputQueue`] at the start of every tick, so direction state is only ever
//! touched by the thread that owns the session.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use winit::keyboard::KeyCode;

/// Logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Map a physical key to a direction. Anything but the arrow keys maps
    /// to `None`.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            _ => None,
        }
    }
}

/// A discrete key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

/// Something that reacts to direction key transitions
pub trait KeyHandler {
    fn on_key_down(&mut self, key: Key);
    fn on_key_up(&mut self, key: Key);

    fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Down(key) => self.on_key_down(key),
            KeyEvent::Up(key) => self.on_key_up(key),
        }
    }
}

/// Create a connected sender/queue pair for one session
pub fn channel() -> (InputSender, InputQueue) {
    let (tx, rx) = mpsc::channel();
    (InputSender { tx }, InputQueue { rx })
}

/// Producer half, held by the window thread
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<KeyEvent>,
}

impl InputSender {
    /// Queue an event. Returns false once the session has gone away.
    pub fn send(&self, event: KeyEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer half, owned by the simulation thread
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<KeyEvent>,
}

impl InputQueue {
    /// Apply every pending event to `handler` in arrival order.
    /// Returns the number of events applied.
    pub fn drain_into<H: KeyHandler + ?Sized>(&self, handler: &mut H) -> usize {
        let mut applied = 0;
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    handler.handle(event);
                    applied += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }
}
