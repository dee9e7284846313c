use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to resolve the location of '{0}'")]
    UnresolvedLocation(String),
    #[error("The service radius is invalid")]
    InvalidServiceRadius,
}
