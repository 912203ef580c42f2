use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.io")]
    Io(#[from] std::io::Error),
    /// A stored value is not valid UTF-8 text.
    #[error("storage.encoding")]
    Encoding(#[from] std::string::FromUtf8Error),
}
