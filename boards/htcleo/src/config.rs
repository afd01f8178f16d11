// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Compile-time configuration for the board crate.
//!
//! Options live in a typed `const` rather than behind `#[cfg]`, so every code
//! path is type-checked even when disabled and the compiler folds the
//! disabled ones away.

/// Data structure holding compile-time configuration options.
pub(crate) struct Config {
    /// Whether every register write issued during board setup is logged at
    /// trace level, with its address and value.
    pub(crate) trace_register_writes: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined. These options are available in the board crate to be used for
/// relevant configuration.
pub(crate) const CONFIG: Config = Config {
    trace_register_writes: cfg!(feature = "trace_register_writes"),
};
