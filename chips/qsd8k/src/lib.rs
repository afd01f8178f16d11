// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Peripheral definitions for the Qualcomm QSD8x50 SoC.

#![no_std]

pub mod mdp;
