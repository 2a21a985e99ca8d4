//! Raw-mode keyboard capture feeding a command-byte channel
//!
//! A dedicated blocking thread polls the terminal for keypresses and
//! pushes mapped command bytes into a channel the network loop drains.
//! The main loop never busy-waits on the keyboard.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;
use log::error;
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a keypress to a wire command byte.
///
/// Arrow keys alias the `wasd` commands; `q` and Esc quit locally.
/// Everything else is ignored.
pub fn map_key(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Char('w') | KeyCode::Up => Some(b'w'),
        KeyCode::Char('s') | KeyCode::Down => Some(b's'),
        KeyCode::Char('a') | KeyCode::Left => Some(b'a'),
        KeyCode::Char('d') | KeyCode::Right => Some(b'd'),
        KeyCode::Char('q') | KeyCode::Esc => Some(b'q'),
        _ => None,
    }
}

/// Guard that puts the terminal into raw mode and restores it on drop,
/// including on early returns and panics.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            error!("Failed to restore terminal settings: {}", e);
        }
    }
}

/// Spawns the keyboard capture thread and returns the receiving end of
/// the command channel.
///
/// The thread exits after forwarding a quit byte, or when the receiver
/// is dropped. At most one command is produced per polling interval.
pub fn spawn_key_reader() -> mpsc::UnboundedReceiver<u8> {
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || loop {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => {
                if let Ok(Event::Key(KeyEvent { code, kind, .. })) = event::read() {
                    if kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(byte) = map_key(code) {
                        if tx.send(byte).is_err() || byte == b'q' {
                            break;
                        }
                    }
                }
            }
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(e) => {
                error!("Keyboard poll failed: {}", e);
                break;
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_keys_map_to_wire_bytes() {
        assert_eq!(map_key(KeyCode::Char('w')), Some(b'w'));
        assert_eq!(map_key(KeyCode::Char('s')), Some(b's'));
        assert_eq!(map_key(KeyCode::Char('a')), Some(b'a'));
        assert_eq!(map_key(KeyCode::Char('d')), Some(b'd'));
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        assert_eq!(map_key(KeyCode::Up), Some(b'w'));
        assert_eq!(map_key(KeyCode::Down), Some(b's'));
        assert_eq!(map_key(KeyCode::Left), Some(b'a'));
        assert_eq!(map_key(KeyCode::Right), Some(b'd'));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyCode::Char('q')), Some(b'q'));
        assert_eq!(map_key(KeyCode::Esc), Some(b'q'));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
        assert_eq!(map_key(KeyCode::Char(' ')), None);
    }
}
