// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Configuration of the host.

use crate::VMError;

use serde::Deserialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// The configuration used when none is given
pub static DEFAULT_CONFIG: Config = Config::new();

/// Parameters used to load and invoke a module.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the exported `(i32) -> i32` function to invoke
    pub entry_point: Cow<'static, str>,

    /// Maximum number of memory pages a module may declare
    pub max_memory_pages: u32,
}

impl Config {
    /// Creates a new [`Config`] with default values
    pub const fn new() -> Self {
        Self {
            entry_point: Cow::Borrowed("factorial"),
            max_memory_pages: 16384,
        }
    }

    /// Parses a [`Config`] out of a TOML document. Keys not present keep
    /// their default values.
    pub fn from_toml(source: &str) -> Result<Self, VMError> {
        toml::from_str(source).map_err(|e| {
            VMError::ConfigurationError(format!(
                "error when parsing configuration: {}",
                e
            ))
        })
    }

    /// Reads a [`Config`] from the TOML file at `path`. Failing to read the
    /// file is reported as [`VMError::IOError`].
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self, VMError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
