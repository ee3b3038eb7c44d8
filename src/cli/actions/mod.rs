pub mod server;

use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        secret: Option<SecretString>,
        users: Option<PathBuf>,
        frontend_url: String,
    },
}
