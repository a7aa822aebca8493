// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use tracing::{trace, trace_span};
use wasmer::{imports, Instance, NativeFunc};

use crate::modules::{check_memory_limit, compile_module};
use crate::{Config, VMError};

/// An instantiated module together with its resolved entry point.
pub struct FactorialInstance {
    // keeps the entry point's instance alive
    _instance: Instance,
    entry_point: NativeFunc<i32, i32>,
    config: Config,
}

impl std::fmt::Debug for FactorialInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(entry point: {})", self.config.entry_point)
    }
}

impl FactorialInstance {
    /// Instantiates `bytecode` using the default [`Config`]
    pub fn new(bytecode: impl AsRef<[u8]>) -> Result<Self, VMError> {
        Self::with_config(bytecode, Config::default())
    }

    /// Instantiates `bytecode` and resolves `config.entry_point` as an
    /// `(i32) -> i32` function.
    ///
    /// The module is instantiated without imports, so modules that require
    /// any are rejected.
    pub fn with_config(
        bytecode: impl AsRef<[u8]>,
        config: Config,
    ) -> Result<Self, VMError> {
        let module = compile_module(bytecode.as_ref(), &config)?;
        check_memory_limit(&module, &config)?;

        trace!(entry_point = %config.entry_point, "Instantiating module");
        let instance = Instance::new(&module, &imports! {})?;

        let entry_point: NativeFunc<i32, i32> =
            instance.exports.get_native_function(&config.entry_point)?;

        Ok(FactorialInstance {
            _instance: instance,
            entry_point,
            config,
        })
    }

    /// Invokes the entry point with `n` and returns whatever the module
    /// computed.
    pub fn call(&self, n: i32) -> Result<i32, VMError> {
        let _span = trace_span!(
            "call",
            entry_point = %self.config.entry_point,
            n
        )
        .entered();

        let result = self.entry_point.call(n)?;
        trace!(result, "Call returned");
        Ok(result)
    }

    /// Returns the configuration the instance was created with
    pub fn config(&self) -> &Config {
        &self.config
    }
}
