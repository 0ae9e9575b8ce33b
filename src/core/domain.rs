use std::net::{Ipv4Addr, SocketAddr};
use tracing::Level;
use crate::gateway::GatewayPublisherVia;

// Identifiable gives the key a catalog record is looked up by
pub trait Identifiable : Sync + Send {
    fn id(&self) -> &str;
}

pub const DEFAULT_LIBRARY_NAME: &str = "Library Management System";
pub const DEFAULT_PORT: u16 = 3000;

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub library_name: String,
    pub bind_addr: SocketAddr,
    pub log_level: Level,
    pub json_logs: bool,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            log_level: Level::INFO,
            json_logs: false,
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    pub fn with_logging(mut self, log_level: Level, json_logs: bool) -> Self {
        self.log_level = log_level;
        self.json_logs = json_logs;
        self
    }

    pub fn with_publisher(mut self, publisher: GatewayPublisherVia) -> Self {
        self.publisher = publisher;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_LIBRARY_NAME)
    }
}
