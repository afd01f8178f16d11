// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Freestanding C library subset for the bootloader.
//!
//! Early boot code runs with no hosted runtime underneath it, yet both the
//! compiler and linked C objects expect `memcpy`, `memset`, `strlen` and
//! friends to exist. This crate provides them, plus volatile 32-bit register
//! accessors.
//!
//! The raw primitives in [`mem`], [`string`] and [`conv`] follow the C
//! contracts exactly: they never check bounds, never report errors, and any
//! precondition violation is undefined behavior. Code that is not on the
//! early boot path should use the bounds-checked wrappers in [`checked`].
//!
//! On bare-metal targets (`target_os = "none"`) the raw primitives are
//! exported under their C symbol names. On hosted targets they are ordinary
//! Rust functions so they never shadow the host libc.

#![no_std]
// Where the C symbols are exported, the byte loops must not be turned back
// into calls to the very symbols they implement.
#![cfg_attr(target_os = "none", no_builtins)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod checked;
pub mod conv;
pub mod errorcode;
pub mod mem;
pub mod mmio;
pub mod string;

pub use crate::errorcode::ErrorCode;
pub use crate::mmio::{readl, writel, Mmio, RegisterBus, VolatileCell};
