// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! #Factorial-VM
//!
//! Loads a compiled factorial module, locates its exported entry point by
//! name and invokes it
#![warn(missing_docs)]

mod compiler;
mod config;
mod error;
mod instance;
mod modules;

pub use config::{Config, DEFAULT_CONFIG};
pub use error::VMError;
pub use instance::FactorialInstance;
pub use wasmer_vm::TrapCode;
