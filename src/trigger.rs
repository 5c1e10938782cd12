//! Delivering a single command byte to the development server

mod error;

pub use error::{Stage, TriggerError};

use crate::action::Action;
use crate::vars::{DEFAULT_HOST, RESPONSE_BUFFER_SIZE};
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Everything needed to deliver one command
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub host: String,
    pub port: u16,
    pub command: u8,

    /// Bound for each of connect, send and receive, `None` blocks forever
    pub timeout: Option<Duration>,
}

impl Trigger {
    /// Trigger with the defaults for the action
    pub fn new(action: Action) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: action.default_port(),
            command: action.command_byte(),
            timeout: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Zero duration is treated as no timeout at all
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout.filter(|x| !x.is_zero());
        self
    }

    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn payload(&self) -> [u8; 2] {
        [self.command, crate::vars::COMMAND_TERMINATOR]
    }

    /// Connect, send the command and read the response once
    ///
    /// The response is returned as is, it is never validated. The connection
    /// is closed before returning whatever the outcome
    pub fn send(&self) -> Result<Vec<u8>, TriggerError> {
        let target = self.target();
        let mut stream = self.connect(&target)?;

        stream
            .set_write_timeout(self.timeout)
            .and_then(|_| stream.set_read_timeout(self.timeout))
            .map_err(|err| TriggerError::classify(Stage::Connect, &target, err))?;

        let payload = self.payload();
        stream
            .write_all(&payload)
            .and_then(|_| stream.flush())
            .map_err(|err| TriggerError::classify(Stage::Send, &target, err))?;

        log::debug!("Sent {:?} to {target}", payload);

        let mut buffer = [0u8; RESPONSE_BUFFER_SIZE];
        let read = stream
            .read(&mut buffer)
            .map_err(|err| TriggerError::classify(Stage::Receive, &target, err))?;

        log::debug!(
            "Received {read} bytes from {target}: {:?}",
            String::from_utf8_lossy(&buffer[..read])
        );

        Ok(buffer[..read].to_vec())
    }

    /// Resolve the host and try every address, IPv4 first
    fn connect(&self, target: &str) -> Result<TcpStream, TriggerError> {
        let mut addrs: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|source| TriggerError::Resolve { target: target.to_string(), source })?
            .collect();

        addrs.sort_by_key(|addr| !addr.is_ipv4());

        let mut last_err = None;
        for addr in addrs {
            log::debug!("Connecting to {addr} ({target})");

            let result = match self.timeout {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };

            match result {
                Ok(stream) => return Ok(stream),
                Err(err) => {
                    log::debug!("Connecting to {addr} failed: {err}");
                    last_err = Some(err);
                },
            }
        }

        match last_err {
            Some(err) => Err(TriggerError::classify(Stage::Connect, target, err)),
            None => Err(TriggerError::Resolve {
                target: target.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Shutdown, TcpListener};
    use std::thread::JoinHandle;

    /// What the stub server saw from the client
    struct Seen {
        request: Vec<u8>,

        /// Client hung up without sending anything else
        closed: bool,
    }

    /// Accepts one connection, reads the command, replies and waits for the client to hang up
    fn stub_server(reply: &'static [u8]) -> (u16, JoinHandle<Seen>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

            let mut request = vec![0u8; 2];
            stream.read_exact(&mut request).unwrap();

            stream.write_all(reply).unwrap();
            stream.shutdown(Shutdown::Write).unwrap();

            // only returns once the client closes its end, unread data turns into a reset
            let mut trailing = vec![];
            let closed = match stream.read_to_end(&mut trailing) {
                Ok(_) => trailing.is_empty(),
                Err(err) => err.kind() == io::ErrorKind::ConnectionReset,
            };

            Seen { request, closed }
        });

        (port, handle)
    }

    /// Port that nothing listens on
    fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn defaults() {
        let trigger = Trigger::new(Action::Reload);
        assert_eq!(trigger.target(), "localhost:57503");
        assert_eq!(trigger.payload(), *b"r\n");
        assert_eq!(trigger.timeout, None);

        let trigger = Trigger::new(Action::Restart);
        assert_eq!(trigger.target(), "localhost:62696");
        assert_eq!(trigger.payload(), *b"R\n");
    }

    #[test]
    fn zero_timeout_waits_forever() {
        let trigger = Trigger::new(Action::Reload).with_timeout(Some(Duration::ZERO));
        assert_eq!(trigger.timeout, None);

        let trigger = Trigger::new(Action::Reload).with_timeout(Some(Duration::from_millis(1)));
        assert_eq!(trigger.timeout, Some(Duration::from_millis(1)));
    }

    #[test]
    fn reload_sends_command_and_closes() {
        let (port, server) = stub_server(b"ok\n");

        let response = Trigger::new(Action::Reload)
            .with_host("127.0.0.1")
            .with_port(port)
            .send()
            .unwrap();

        let seen = server.join().unwrap();
        assert_eq!(seen.request, vec![0x72, 0x0A]);
        assert!(seen.closed);
        assert_eq!(response, b"ok\n");
    }

    #[test]
    fn restart_sends_command_and_closes() {
        let (port, server) = stub_server(b"whatever the server feels like");

        Trigger::new(Action::Restart)
            .with_host("127.0.0.1")
            .with_port(port)
            .send()
            .unwrap();

        let seen = server.join().unwrap();
        assert_eq!(seen.request, vec![0x52, 0x0A]);
        assert!(seen.closed);
    }

    #[test]
    fn empty_response_is_fine() {
        let (port, server) = stub_server(b"");

        let response = Trigger::new(Action::Reload)
            .with_host("127.0.0.1")
            .with_port(port)
            .send()
            .unwrap();

        assert!(response.is_empty());
        assert_eq!(server.join().unwrap().request, b"r\n");
    }

    #[test]
    fn response_is_capped() {
        static BIG: [u8; 4096] = [b'x'; 4096];
        let (port, server) = stub_server(&BIG);

        let response = Trigger::new(Action::Reload)
            .with_host("127.0.0.1")
            .with_port(port)
            .send()
            .unwrap();

        assert!(response.len() <= RESPONSE_BUFFER_SIZE);
        assert!(server.join().unwrap().closed);
    }

    #[test]
    fn localhost_resolves() {
        let (port, server) = stub_server(b"");

        Trigger::new(Action::Reload)
            .with_port(port)
            .send()
            .unwrap();

        assert_eq!(server.join().unwrap().request, b"r\n");
    }

    #[test]
    fn refused() {
        let err = Trigger::new(Action::Restart)
            .with_host("127.0.0.1")
            .with_port(closed_port())
            .send()
            .unwrap_err();

        assert!(matches!(err, TriggerError::Refused { .. }), "{err:?}");
    }

    #[test]
    fn silent_server_times_out() {
        // the backlog accepts the connection, nobody ever answers
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let err = Trigger::new(Action::Reload)
            .with_host("127.0.0.1")
            .with_port(port)
            .with_timeout(Some(Duration::from_millis(200)))
            .send()
            .unwrap_err();

        assert!(
            matches!(err, TriggerError::TimedOut { stage: Stage::Receive, .. }),
            "{err:?}"
        );

        drop(listener);
    }

    #[test]
    fn closed_after_receive_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        // reads the command but never answers
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

            let mut request = vec![0u8; 2];
            stream.read_exact(&mut request).unwrap();

            let mut trailing = vec![];
            let closed = match stream.read_to_end(&mut trailing) {
                Ok(_) => trailing.is_empty(),
                Err(err) => err.kind() == io::ErrorKind::ConnectionReset,
            };

            Seen { request, closed }
        });

        let err = Trigger::new(Action::Reload)
            .with_host("127.0.0.1")
            .with_port(port)
            .with_timeout(Some(Duration::from_millis(200)))
            .send()
            .unwrap_err();

        assert!(
            matches!(err, TriggerError::TimedOut { stage: Stage::Receive, .. }),
            "{err:?}"
        );

        let seen = server.join().unwrap();
        assert_eq!(seen.request, b"r\n");
        assert!(seen.closed);
    }

    #[test]
    fn unresolvable_host() {
        let err = Trigger::new(Action::Reload)
            .with_host("hot-trigger.invalid")
            .send()
            .unwrap_err();

        assert!(matches!(err, TriggerError::Resolve { .. }), "{err:?}");
    }
}
