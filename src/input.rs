//! Input acquisition
//!
//! The CLI argument is either `-` (read stdin), the path of an existing file
//! (read its contents), or the text to validate itself.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;

/// Where the text to validate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// Contents of a file
    File(PathBuf),
    /// The argument itself
    Literal(String),
}

impl InputSource {
    /// Decide how to interpret a CLI argument
    #[must_use]
    pub fn resolve(arg: &str) -> Self {
        if arg == "-" {
            return Self::Stdin;
        }
        let path = PathBuf::from(arg);
        if path.is_file() {
            Self::File(path)
        } else {
            Self::Literal(arg.to_string())
        }
    }

    /// Read the full text
    pub fn read(self) -> anyhow::Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read numbers from stdin")?;
                Ok(text)
            },
            Self::File(path) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read numbers from {}", path.display())),
            Self::Literal(text) => Ok(text),
        }
    }
}
