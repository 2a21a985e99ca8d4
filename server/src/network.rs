//! Server transport and the per-tick turn controller
//!
//! The server accepts exactly one client and then runs game sessions
//! sequentially over that connection. Each tick waits up to one second
//! for a single command byte; on timeout the snake auto-advances in its
//! last direction so a silent player cannot freeze the game. After a
//! game-over the controller reports the final score and offers a
//! restart from the server's own terminal.

use crate::game::Session;
use crate::render;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{Direction, RESTART_COMMAND};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::timeout;

/// Fixed per-tick wait for an inbound command.
pub const TICK_TIMEOUT: Duration = Duration::from_secs(1);

/// Outcome of one bounded wait for a command byte.
#[derive(Debug, PartialEq, Eq)]
pub enum TickInput {
    /// No command arrived within the tick window.
    TimedOut,
    /// One command byte was received.
    Command(u8),
    /// The peer closed the connection.
    Disconnected,
}

/// Single-slot game server: owns the listener and serves one client.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Binds the listener. IPv6 any (`::`) accepts v4-mapped peers on
    /// dual-stack hosts, matching the original wire setup.
    pub async fn new(addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(addr).await?;
        info!("Server listening on {}", listener.local_addr()?);
        Ok(Server { listener })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Waits for the single client connection.
    pub async fn accept(&self) -> io::Result<(TcpStream, SocketAddr)> {
        self.listener.accept().await
    }

    /// Accepts one client and serves game sessions until the player
    /// declines a restart or the transport dies. A second connection
    /// attempt is never accepted; the listener is polled exactly once.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let (mut stream, peer) = self.accept().await?;
        info!("Client connected from {}", peer);

        loop {
            let transport_alive = self.play_session(&mut stream).await;

            if !transport_alive {
                warn!("Connection to {} lost, shutting down", peer);
                break;
            }

            if !await_restart_choice().await {
                info!("Restart declined, shutting down");
                break;
            }
        }

        Ok(())
    }

    /// Runs one game from spawn to game-over. Returns false if the
    /// transport failed mid-game, in which case no restart is offered.
    async fn play_session(&mut self, stream: &mut TcpStream) -> bool {
        let mut rng = StdRng::from_entropy();
        let mut session = Session::new(&mut rng);
        let mut transport_alive = true;

        while !session.game_over {
            match await_command(stream, TICK_TIMEOUT).await {
                TickInput::TimedOut => {
                    // Auto-advance: keep moving in the last direction.
                    session.advance(session.last_direction, &mut rng);
                }
                TickInput::Command(byte) => {
                    let direction = resolve_command(byte, session.last_direction);
                    session.advance(direction, &mut rng);
                }
                TickInput::Disconnected => {
                    transport_alive = false;
                    break;
                }
            }

            render::draw(&session);
        }

        println!("Game over!");
        println!("Final Score: {}", session.score);
        info!("Session ended with score {}", session.score);

        transport_alive
    }
}

/// Waits up to `window` for one command byte on the stream.
///
/// A read error is reported as `Disconnected`: transport failure is
/// fatal to the current game and is not retried.
pub async fn await_command<R>(stream: &mut R, window: Duration) -> TickInput
where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; 1];
    match timeout(window, stream.read(&mut buf)).await {
        Err(_) => TickInput::TimedOut,
        Ok(Ok(0)) => TickInput::Disconnected,
        Ok(Ok(_)) => TickInput::Command(buf[0]),
        Ok(Err(e)) => {
            error!("Receive failed: {}", e);
            TickInput::Disconnected
        }
    }
}

/// Decodes a command byte, falling back to the last direction for
/// unrecognized bytes. Opposite-direction commands are passed through:
/// the engine's own fallback is the single source of truth for those.
pub fn resolve_command(byte: u8, last_direction: Direction) -> Direction {
    Direction::from_command_byte(byte).unwrap_or(last_direction)
}

/// Blocks on the server's terminal for the restart decision. Returns
/// true only for an `r` keypress; anything else terminates.
async fn await_restart_choice() -> bool {
    use std::io::Write;

    print!("Press 'r' to restart or any other key to exit: ");
    let _ = std::io::stdout().flush();

    let mut stdin = tokio::io::stdin();
    let mut buf = [0u8; 1];
    loop {
        match stdin.read(&mut buf).await {
            Ok(0) | Err(_) => return false,
            Ok(_) if buf[0].is_ascii_whitespace() => continue,
            Ok(_) => return buf[0] == RESTART_COMMAND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_direction_commands() {
        assert_eq!(resolve_command(b'w', Direction::Left), Direction::Forward);
        assert_eq!(resolve_command(b's', Direction::Left), Direction::Back);
        assert_eq!(resolve_command(b'a', Direction::Forward), Direction::Left);
        assert_eq!(resolve_command(b'd', Direction::Forward), Direction::Right);
    }

    #[test]
    fn test_resolve_unknown_byte_continues_straight() {
        assert_eq!(resolve_command(b'x', Direction::Left), Direction::Left);
        assert_eq!(resolve_command(b'\n', Direction::Back), Direction::Back);
        assert_eq!(resolve_command(0, Direction::Forward), Direction::Forward);
    }

    #[test]
    fn test_resolve_opposite_is_passed_through() {
        // The controller does not filter reversals; the engine does.
        assert_eq!(resolve_command(b's', Direction::Forward), Direction::Back);
    }

    #[tokio::test]
    async fn test_await_command_reads_one_byte() {
        let (mut reader, mut writer) = tokio::io::duplex(16);

        tokio::io::AsyncWriteExt::write_all(&mut writer, b"a")
            .await
            .unwrap();

        let input = await_command(&mut reader, TICK_TIMEOUT).await;
        assert_eq!(input, TickInput::Command(b'a'));
    }

    #[tokio::test]
    async fn test_await_command_times_out() {
        let (mut reader, _writer) = tokio::io::duplex(16);

        let input = await_command(&mut reader, Duration::from_millis(20)).await;
        assert_eq!(input, TickInput::TimedOut);
    }

    #[tokio::test]
    async fn test_await_command_detects_disconnect() {
        let (mut reader, writer) = tokio::io::duplex(16);
        drop(writer);

        let input = await_command(&mut reader, TICK_TIMEOUT).await;
        assert_eq!(input, TickInput::Disconnected);
    }

    #[tokio::test]
    async fn test_server_binds_ephemeral_port() {
        let server = Server::new("[::1]:0").await.unwrap();
        let addr = server.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
    }
}
