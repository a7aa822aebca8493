// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Factorial of a 32-bit signed integer.
//!
//! Built for `wasm32-unknown-unknown` the crate produces a module exporting a
//! single `factorial` function taking and returning an `i32`.

#![cfg_attr(target_arch = "wasm32", no_std)]

/// Returns `n!` computed in a 32-bit two's complement accumulator.
///
/// Any `n <= 1`, negative values included, yields `1`. Otherwise the
/// accumulator starts at `1` and is multiplied by `2, 3, ..., n` in that
/// order. Products past `i32::MAX` wrap silently, the same way the wasm
/// `i32.mul` instruction does, so `factorial(13)` is `1_932_053_504` rather
/// than `6_227_020_800`.
#[no_mangle]
pub extern "C" fn factorial(n: i32) -> i32 {
    if n <= 1 {
        return 1;
    }

    let mut acc: i32 = 1;
    for i in 2..=n {
        acc = acc.wrapping_mul(i);
    }
    acc
}

#[cfg(target_arch = "wasm32")]
mod hosted {
    use core::panic::PanicInfo;

    #[panic_handler]
    fn panic(_: &PanicInfo) -> ! {
        core::arch::wasm32::unreachable()
    }
}
