use clap::ValueEnum;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

use super::document::FixtureDocument;

/// Fixture loading errors
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Could not read fixture '{source_name}': {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Could not parse JSON fixture '{source_name}': {error}")]
    Json {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("Could not parse YAML fixture '{source_name}': {error}")]
    Yaml {
        source_name: String,
        #[source]
        error: serde_yaml::Error,
    },
}

/// Serialization of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    /// Guess from the file extension; anything unrecognised is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a fixture document from a reader.
pub fn load_fixture<R: Read>(
    reader: R,
    format: FixtureFormat,
    source_name: &str,
) -> Result<FixtureDocument, FixtureError> {
    match format {
        FixtureFormat::Json => serde_json::from_reader(reader).map_err(|error| FixtureError::Json {
            source_name: source_name.to_string(),
            error,
        }),
        FixtureFormat::Yaml => serde_yaml::from_reader(reader).map_err(|error| FixtureError::Yaml {
            source_name: source_name.to_string(),
            error,
        }),
    }
}

/// Parse a fixture file, or stdin when `input` is `-`.
pub fn load_fixture_input(
    input: &str,
    format: Option<FixtureFormat>,
) -> Result<FixtureDocument, FixtureError> {
    if input == "-" {
        let stdin = std::io::stdin();
        return load_fixture(stdin.lock(), format.unwrap_or(FixtureFormat::Json), input);
    }

    let path = Path::new(input);
    let file = std::fs::File::open(path).map_err(|error| FixtureError::Io {
        source_name: input.to_string(),
        error,
    })?;
    let format = format.unwrap_or_else(|| FixtureFormat::from_path(path));
    load_fixture(std::io::BufReader::new(file), format, input)
}
