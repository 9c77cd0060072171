use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The [`Host`](crate::Host) an event was sent to no longer exists.
    #[error("toast host has been dropped")]
    HostClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
