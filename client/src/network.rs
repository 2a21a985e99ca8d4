//! Client-side connection and command forwarding

use crate::input;
use log::{error, info};
use shared::QUIT_COMMAND;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Thin forwarding client: owns the server connection and the keyboard
/// channel, and pushes one command byte per keypress to the server.
pub struct Client {
    stream: TcpStream,
}

impl Client {
    pub async fn connect(server_addr: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let stream = TcpStream::connect(server_addr).await?;
        info!("Connected to server at {}", server_addr);
        Ok(Client { stream })
    }

    /// Drains the keyboard channel until quit. Direction bytes go to
    /// the server; the quit byte is consumed locally and never sent.
    /// A send failure ends the session.
    pub async fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let _raw_mode = input::RawModeGuard::new()?;
        let mut keys = input::spawn_key_reader();

        println!("Press 'q' to quit.\r");

        while let Some(byte) = keys.recv().await {
            if byte == QUIT_COMMAND {
                println!("Quitting...\r");
                break;
            }

            if let Err(e) = self.forward(byte).await {
                error!("Send failed: {}", e);
                return Err(e.into());
            }
        }

        Ok(())
    }

    async fn forward(&mut self, byte: u8) -> std::io::Result<()> {
        self.stream.write_all(&[byte]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_and_forward() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let accept = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1];
            stream.read_exact(&mut buf).await.unwrap();
            buf[0]
        });

        let mut client = Client::connect(&addr.to_string()).await.unwrap();
        client.forward(b'd').await.unwrap();

        assert_eq!(accept.await.unwrap(), b'd');
    }

    // mpsc plumbing sanity: the forwarding loop consumes what the
    // keyboard thread would produce.
    #[tokio::test]
    async fn test_channel_delivery_order() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        for byte in [b'w', b'a', b's'] {
            tx.send(byte).unwrap();
        }
        assert_eq!(rx.recv().await, Some(b'w'));
        assert_eq!(rx.recv().await, Some(b'a'));
        assert_eq!(rx.recv().await, Some(b's'));
    }
}
