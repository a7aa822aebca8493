// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::compiler::WasmerCompiler;
use crate::{Config, VMError};

use cached::proc_macro::cached;
use tracing::trace;
use wasmer::{ExternType, Module};

/// Compiles guest bytecode under the memory limit of `config`.
///
/// Compiled modules are kept per bytecode content and memory limit, so a
/// guest loaded again under the same limit is not recompiled.
pub fn compile_module(
    bytecode: &[u8],
    config: &Config,
) -> Result<Module, VMError> {
    get_or_create_module(bytecode.to_vec(), config.max_memory_pages)
}

// cache entries live for a day
#[cached(size = 2048, time = 86400, result = true, sync_writes = true)]
fn get_or_create_module(
    bytecode: Vec<u8>,
    max_memory_pages: u32,
) -> Result<Module, VMError> {
    trace!(len = bytecode.len(), max_memory_pages, "Compiling guest");
    WasmerCompiler::create_module(bytecode, max_memory_pages)
}

/// Reports a memory the module imports or exports starting out larger than
/// `config.max_memory_pages` before instantiation. Private memories and
/// declared maximums are held to the same limit by the store's tunables
/// when the module is instantiated.
pub fn check_memory_limit(
    module: &Module,
    config: &Config,
) -> Result<(), VMError> {
    let imported = module.imports().map(|i| i.ty().clone());
    let exported = module.exports().map(|e| e.ty().clone());

    for ty in imported.chain(exported) {
        if let ExternType::Memory(memory) = ty {
            trace!(
                minimum = memory.minimum.0,
                limit = config.max_memory_pages,
                "Checking memory"
            );
            if memory.minimum.0 > config.max_memory_pages {
                return Err(VMError::MemoryLimitExceeded {
                    requested: memory.minimum.0,
                    limit: config.max_memory_pages,
                });
            }
        }
    }

    Ok(())
}
