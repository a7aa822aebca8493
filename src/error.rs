// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;
use thiserror::Error;
use wasmer_vm::TrapCode;

#[derive(Error, Debug)]
/// The errors that can happen while loading or invoking a module
pub enum VMError {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    /// Input / Output error
    #[error("Input / Output error")]
    IOError(#[from] io::Error),
    /// The module declares a memory larger than allowed
    #[error("Module requests {requested} memory pages, the limit is {limit}")]
    MemoryLimitExceeded {
        /// Minimum number of pages declared by the module
        requested: u32,
        /// Configured maximum
        limit: u32,
    },
    /// WASMER export error
    #[error(transparent)]
    WasmerExportError(#[from] wasmer::ExportError),
    /// WASMER runtime error
    #[error(transparent)]
    WasmerRuntimeError(wasmer::RuntimeError),
    /// WASMER  compile error
    #[error(transparent)]
    WasmerCompileError(#[from] wasmer::CompileError),
    /// WASMER instantiation error
    #[error(transparent)]
    WasmerInstantiationError(#[from] wasmer::InstantiationError),
    /// WASMER trap
    #[error("WASMER trap")]
    WasmerTrap(TrapCode),
}

impl From<wasmer::RuntimeError> for VMError {
    fn from(e: wasmer::RuntimeError) -> Self {
        match e.clone().to_trap() {
            Some(trap_code) => VMError::WasmerTrap(trap_code),
            None => VMError::WasmerRuntimeError(e),
        }
    }
}
