// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Mobile Display Processor (MDP), primary DMA channel.
//!
//! DMA_P fetches a framebuffer from memory and streams it to a display
//! interface. The bootloader only programs its pixel format and line stride;
//! the framebuffer address and size are left as the previous boot stage set
//! them.

use tock_registers::{register_bitfields, LocalRegisterCopy};

/// MDP register block base address.
pub const MDP_BASE: usize = 0xAA20_0000;

/// DMA_P register block base address.
pub const DMA_P_BASE: usize = MDP_BASE + 0x9_0000;

/// Registers of the DMA_P block, by offset from [`DMA_P_BASE`].
///
/// Offsets follow the DMA_P section of the MDP 3.1 register map (MDP
/// offsets `0x90000`-`0x90010`): config, size (width/height), framebuffer
/// address, framebuffer Y stride, output X/Y. Board code addresses them
/// through a `RegisterBus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum DmaPRegister {
    Config = 0x00,
    Size = 0x04,
    BufAddr = 0x08,
    BufYStride = 0x0C,
    OutXy = 0x10,
}

impl DmaPRegister {
    /// Physical address of the register.
    pub const fn address(self) -> usize {
        DMA_P_BASE + self as usize
    }
}

register_bitfields![u32,
    DMA_P_CONFIG [
        /// Bit depth of the green channel (component 0)
        DSTC0G OFFSET(0) NUMBITS(2) [
            Bits4 = 0,
            Bits5 = 1,
            Bits6 = 2,
            Bits8 = 3
        ],
        /// Bit depth of the blue channel (component 1)
        DSTC1B OFFSET(2) NUMBITS(2) [
            Bits4 = 0,
            Bits5 = 1,
            Bits6 = 2,
            Bits8 = 3
        ],
        /// Bit depth of the red channel (component 2)
        DSTC2R OFFSET(4) NUMBITS(2) [
            Bits4 = 0,
            Bits5 = 1,
            Bits6 = 2,
            Bits8 = 3
        ],
        PACK_TIGHT OFFSET(6) NUMBITS(1) [],
        PACK_ALIGN OFFSET(7) NUMBITS(1) [
            Lsb = 0,
            Msb = 1
        ],
        /// Output component order, two bits per component
        PACK_PATTERN OFFSET(8) NUMBITS(6) [
            Rgb = 0b10_00_01,
            Bgr = 0b01_00_10
        ],
        /// Route output to the LCD controller instead of the AHB
        OUT_SEL_LCDC OFFSET(20) NUMBITS(1) [],
        DITHER_EN OFFSET(24) NUMBITS(1) [],
        /// Pixel format of the input framebuffer
        IBUF_FORMAT OFFSET(25) NUMBITS(2) [
            Rgb888 = 0,
            Rgb565 = 1,
            Xrgb8888 = 2
        ]
    ]
];

/// Local copy of a `DMA_P_CONFIG` value, built and inspected by field.
pub type DmaPConfig = LocalRegisterCopy<u32, DMA_P_CONFIG::Register>;

/// DMA_P configuration for a 32bpp xRGB8888 framebuffer driven to the LCD
/// controller: 8 bits per channel, RGB order, LSB aligned, dithered.
pub fn lcdc_xrgb8888_config() -> DmaPConfig {
    let mut config = DmaPConfig::new(0);
    config.modify(
        DMA_P_CONFIG::PACK_ALIGN::Lsb
            + DMA_P_CONFIG::PACK_PATTERN::Rgb
            + DMA_P_CONFIG::DITHER_EN::SET
            + DMA_P_CONFIG::OUT_SEL_LCDC::SET
            + DMA_P_CONFIG::IBUF_FORMAT::Xrgb8888
            + DMA_P_CONFIG::DSTC0G::Bits8
            + DMA_P_CONFIG::DSTC1B::Bits8
            + DMA_P_CONFIG::DSTC2R::Bits8,
    );
    config
}

/// Framebuffer line stride in bytes.
pub const fn y_stride(bytes_per_pixel: u32, width: u32) -> u32 {
    bytes_per_pixel * width
}
