#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

//! Finds every set the cards in a deck list have been printed in, by way of
//! the Scryfall card catalog.

use {
    std::{
        io,
        path::PathBuf
    },
    derive_more::From
};

pub mod deck;
pub mod process;
pub mod report;
pub mod scryfall;

#[derive(Debug, From)]
pub enum Error {
    #[from(ignore)]
    Annotated(String, Box<Error>),
    #[from(ignore)]
    Io(io::Error, Option<PathBuf>),
    Json(serde_json::Error),
    Reqwest(reqwest::Error),
    #[from(ignore)]
    Status(reqwest::StatusCode),
    #[from(ignore)]
    UnknownGrouping(String),
    Usage
}

pub trait IntoResultExt {
    type T;

    fn annotate(self, note: impl ToString) -> Self::T;
}

impl<E: Into<Error>> IntoResultExt for E {
    type T = Error;

    fn annotate(self, note: impl ToString) -> Error {
        Error::Annotated(note.to_string(), Box::new(self.into()))
    }
}

impl IntoResultExt for io::Error {
    type T = Error;

    fn annotate(self, note: impl ToString) -> Error {
        Error::Annotated(note.to_string(), Box::new(self.at_unknown()))
    }
}

impl<T, E: IntoResultExt> IntoResultExt for Result<T, E> {
    type T = Result<T, E::T>;

    fn annotate(self, note: impl ToString) -> Result<T, E::T> {
        self.map_err(|e| e.annotate(note))
    }
}

pub trait IoResultExt {
    type T;

    fn at(self, path: impl AsRef<std::path::Path>) -> Self::T;
    fn at_unknown(self) -> Self::T;
}

impl IoResultExt for io::Error {
    type T = Error;

    fn at(self, path: impl AsRef<std::path::Path>) -> Error {
        Error::Io(self, Some(path.as_ref().to_owned()))
    }

    fn at_unknown(self) -> Error {
        Error::Io(self, None)
    }
}

impl<T, E: IoResultExt> IoResultExt for Result<T, E> {
    type T = Result<T, E::T>;

    fn at(self, path: impl AsRef<std::path::Path>) -> Result<T, E::T> {
        self.map_err(|e| e.at(path))
    }

    fn at_unknown(self) -> Result<T, E::T> {
        self.map_err(|e| e.at_unknown())
    }
}
