// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::VMError;
use loupe::MemoryUsage;
use std::ptr::NonNull;
use std::sync::Arc;
use wasmer::{
    vm::{
        self, MemoryError, MemoryStyle, TableStyle, VMMemoryDefinition,
        VMTableDefinition,
    },
    BaseTunables, MemoryType, Module, Pages, Store, TableType, Target,
    Tunables,
};
use wasmer_compiler_singlepass::Singlepass;
use wasmer_engine_universal::Universal;

/// Tunables capping every linear memory of a guest at `memory_limit` pages,
/// whether the memory is private, imported or exported.
#[derive(MemoryUsage)]
pub struct LimitingTunables<T: Tunables> {
    memory_limit: Pages,
    base: T,
}

impl<T: Tunables> LimitingTunables<T> {
    pub fn new(base: T, memory_limit: Pages) -> Self {
        Self { memory_limit, base }
    }

    /// Memories without a declared maximum get the limit as their maximum.
    fn adjust_memory(&self, requested: &MemoryType) -> MemoryType {
        let mut adjusted = *requested;
        if requested.maximum.is_none() {
            adjusted.maximum = Some(self.memory_limit);
        }
        adjusted
    }

    fn validate_memory(&self, ty: &MemoryType) -> Result<(), MemoryError> {
        if ty.minimum > self.memory_limit {
            return Err(MemoryError::Generic(format!(
                "minimum of {} pages exceeds the limit of {}",
                ty.minimum.0, self.memory_limit.0
            )));
        }

        match ty.maximum {
            Some(max) if max > self.memory_limit => {
                Err(MemoryError::Generic(format!(
                    "maximum of {} pages exceeds the limit of {}",
                    max.0, self.memory_limit.0
                )))
            }
            Some(_) => Ok(()),
            None => Err(MemoryError::Generic("maximum unset".to_string())),
        }
    }
}

impl<T: Tunables> Tunables for LimitingTunables<T> {
    fn memory_style(&self, memory: &MemoryType) -> MemoryStyle {
        let adjusted = self.adjust_memory(memory);
        self.base.memory_style(&adjusted)
    }

    fn table_style(&self, table: &TableType) -> TableStyle {
        self.base.table_style(table)
    }

    fn create_host_memory(
        &self,
        ty: &MemoryType,
        style: &MemoryStyle,
    ) -> Result<Arc<dyn vm::Memory>, MemoryError> {
        let adjusted = self.adjust_memory(ty);
        self.validate_memory(&adjusted)?;
        self.base.create_host_memory(&adjusted, style)
    }

    unsafe fn create_vm_memory(
        &self,
        ty: &MemoryType,
        style: &MemoryStyle,
        vm_definition_location: NonNull<VMMemoryDefinition>,
    ) -> Result<Arc<dyn vm::Memory>, MemoryError> {
        let adjusted = self.adjust_memory(ty);
        self.validate_memory(&adjusted)?;
        self.base
            .create_vm_memory(&adjusted, style, vm_definition_location)
    }

    fn create_host_table(
        &self,
        ty: &TableType,
        style: &TableStyle,
    ) -> Result<Arc<dyn vm::Table>, String> {
        self.base.create_host_table(ty, style)
    }

    unsafe fn create_vm_table(
        &self,
        ty: &TableType,
        style: &TableStyle,
        vm_definition_location: NonNull<VMTableDefinition>,
    ) -> Result<Arc<dyn vm::Table>, String> {
        self.base.create_vm_table(ty, style, vm_definition_location)
    }
}

pub struct WasmerCompiler;

impl WasmerCompiler {
    /// Creates module out of bytecode, with its memories limited to
    /// `max_memory_pages`
    ///
    /// Both binary modules and their text format are accepted.
    pub fn create_module(
        bytecode: impl AsRef<[u8]>,
        max_memory_pages: u32,
    ) -> Result<Module, VMError> {
        let base = BaseTunables::for_target(&Target::default());
        let tunables = LimitingTunables::new(base, Pages(max_memory_pages));
        let store = Store::new_with_tunables(
            &Universal::new(Singlepass::default()).engine(),
            tunables,
        );
        Module::new(&store, bytecode).map_err(VMError::WasmerCompileError)
    }
}
