use derive_more::Display;
use thiserror::Error;

#[derive(Debug, Display, Error)]
pub enum Error {
    #[display("No input file, specify one with -i <path>")]
    NoInput,
    #[display("Invalid file name {_0}")]
    InvalidName(String),
    #[display("{_0}")]
    Image(#[from] fat12::error::Error),
    #[display("{_0}")]
    Load(#[from] fat12::error::LoadError),
    #[display("{_0}")]
    IO(#[from] std::io::Error),
}
