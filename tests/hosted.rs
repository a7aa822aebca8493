// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use factorial_vm::{Config, FactorialInstance, TrapCode, VMError};

const FACTORIAL: &str = include_str!("modules/factorial.wat");

const GUEST_CODE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/target/wasm32-unknown-unknown/release/factorial.wasm"
);

#[test]
fn known_values() {
    let instance = FactorialInstance::new(FACTORIAL).unwrap();

    assert_eq!(instance.call(0).unwrap(), 1);
    assert_eq!(instance.call(1).unwrap(), 1);
    assert_eq!(instance.call(5).unwrap(), 120);
    assert_eq!(instance.call(10).unwrap(), 3_628_800);
}

#[test]
fn negative_inputs() {
    let instance = FactorialInstance::new(FACTORIAL).unwrap();

    for n in [-1, -7, i32::MIN].iter() {
        assert_eq!(instance.call(*n).unwrap(), 1);
    }
}

#[test]
fn wrapped_values() {
    let instance = FactorialInstance::new(FACTORIAL).unwrap();

    assert_eq!(instance.call(13).unwrap(), 1_932_053_504);
    assert_eq!(instance.call(17).unwrap(), -288_522_240);
    assert_eq!(instance.call(20).unwrap(), -2_102_132_736);
    assert_eq!(instance.call(34).unwrap(), 0);
}

#[test]
fn agrees_with_native() {
    let instance = FactorialInstance::new(FACTORIAL).unwrap();

    for n in -20..=300 {
        assert_eq!(
            instance.call(n).unwrap(),
            factorial::factorial(n),
            "n = {}",
            n
        );
    }
}

// cargo build --release --target wasm32-unknown-unknown -p factorial
#[test]
#[ignore = "needs the wasm32 build of the factorial guest"]
fn compiled_guest_agrees_with_native() {
    let code = std::fs::read(GUEST_CODE)
        .unwrap_or_else(|e| panic!("reading {}: {}", GUEST_CODE, e));

    let instance = FactorialInstance::new(code).unwrap();
    for n in -20..=300 {
        assert_eq!(
            instance.call(n).unwrap(),
            factorial::factorial(n),
            "n = {}",
            n
        );
    }
}

#[test]
fn repeated_loads() {
    let first = FactorialInstance::new(FACTORIAL).unwrap();
    let second = FactorialInstance::new(FACTORIAL).unwrap();

    assert_eq!(first.call(12).unwrap(), second.call(12).unwrap());
}

#[test]
fn invalid_bytecode() {
    let err = FactorialInstance::new(b"\0asm\x01\0\0\0garbage").unwrap_err();

    assert!(matches!(err, VMError::WasmerCompileError(_)), "{:?}", err);
}

#[test]
fn mismatched_signature() {
    let err =
        FactorialInstance::new(include_str!("modules/wide.wat")).unwrap_err();

    assert!(matches!(err, VMError::WasmerExportError(_)), "{:?}", err);
}

#[test]
fn unresolved_imports() {
    let code = include_str!("modules/imports.wat");
    let err = FactorialInstance::new(code).unwrap_err();

    assert!(
        matches!(err, VMError::WasmerInstantiationError(_)),
        "{:?}",
        err
    );
}

#[test]
fn memory_limit() {
    let code = include_str!("modules/memory_hungry.wat");

    let config = Config {
        max_memory_pages: 17,
        ..Config::default()
    };
    let err = FactorialInstance::with_config(code, config).unwrap_err();
    assert!(
        matches!(
            err,
            VMError::MemoryLimitExceeded {
                requested: 64,
                limit: 17
            }
        ),
        "{:?}",
        err
    );

    let instance = FactorialInstance::new(code).unwrap();
    assert_eq!(instance.call(3).unwrap(), 1);
}

#[test]
fn trap() {
    let instance =
        FactorialInstance::new(include_str!("modules/trap.wat")).unwrap();

    match instance.call(3) {
        Err(VMError::WasmerTrap(code)) => {
            assert_eq!(code, TrapCode::UnreachableCodeReached)
        }
        other => panic!("expected a trap, got {:?}", other),
    }
}

fn limited(pages: u32) -> Config {
    Config {
        max_memory_pages: pages,
        ..Config::default()
    }
}

#[test]
fn private_memory_limit() {
    let code = include_str!("modules/private_memory.wat");

    let err = FactorialInstance::with_config(code, limited(17)).unwrap_err();
    assert!(
        matches!(err, VMError::WasmerInstantiationError(_)),
        "{:?}",
        err
    );

    let instance = FactorialInstance::with_config(code, limited(64)).unwrap();
    assert_eq!(instance.call(3).unwrap(), 1);
}

#[test]
fn declared_maximum_limit() {
    let code = include_str!("modules/wide_maximum.wat");

    let err = FactorialInstance::with_config(code, limited(17)).unwrap_err();
    assert!(
        matches!(err, VMError::WasmerInstantiationError(_)),
        "{:?}",
        err
    );

    let instance = FactorialInstance::with_config(code, limited(64)).unwrap();
    assert_eq!(instance.call(3).unwrap(), 1);
}
