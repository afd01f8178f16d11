// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Board file for the HTC Leo (HD2).
//!
//! - QSD8250 SoC
//! - 480x800 LCD panel, 32bpp framebuffer

#![no_std]

use log::{debug, trace};
use qsd8k::mdp::{self, DmaPRegister};
use unic::{Mmio, RegisterBus};

mod config;

use crate::config::CONFIG;

/// Horizontal resolution of the panel, in pixels.
pub const PANEL_WIDTH: u32 = 480;
/// Vertical resolution of the panel, in pixels.
pub const PANEL_HEIGHT: u32 = 800;
/// Framebuffer bytes per pixel (xRGB8888).
pub const BYTES_PER_PIXEL: u32 = 4;

fn write_reg<B: RegisterBus>(bus: &B, reg: DmaPRegister, value: u32) {
    if CONFIG.trace_register_writes {
        trace!("htcleo: {:?} @ {:#010x} <- {:#010x}", reg, reg.address(), value);
    }
    bus.write(reg.address(), value);
}

/// Programs the display DMA for the panel.
///
/// Writes the DMA_P format register, then the stride register. The order is
/// part of the hardware contract and must not change.
pub fn board_init<B: RegisterBus>(bus: &B) {
    let config = mdp::lcdc_xrgb8888_config();
    let stride = mdp::y_stride(BYTES_PER_PIXEL, PANEL_WIDTH);

    debug!(
        "htcleo: DMA_P config {:#010x}, y stride {} ({}x{})",
        config.get(),
        stride,
        PANEL_WIDTH,
        PANEL_HEIGHT
    );

    // Format (32bpp)
    write_reg(bus, DmaPRegister::Config, config.get());
    // Stride
    write_reg(bus, DmaPRegister::BufYStride, stride);
}

/// Board bring-up entry point, called once by the bootloader.
///
/// # Safety
///
/// Must run on the HTC Leo with the MDP register block mapped at its
/// physical address, before anything else touches the display DMA.
pub unsafe fn init() {
    let bus = unsafe { Mmio::new() };
    board_init(&bus);
}
