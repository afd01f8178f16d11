// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Volatile access to memory-mapped hardware registers.
//!
//! Every access in this module is a single volatile load or store. The
//! compiler may neither elide nor reorder them relative to each other, so
//! the order in which board code issues writes is the order the hardware
//! observes them.

use core::cell::UnsafeCell;
use core::ptr;

/// Stores `value` to the 32-bit register at `address`.
///
/// # Safety
///
/// `address` must be a valid, 4-byte aligned location for a 32-bit write,
/// normally a mapped device register.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn writel(value: u32, address: *mut u32) {
    unsafe { ptr::write_volatile(address, value) }
}

/// Loads the 32-bit register at `address`.
///
/// # Safety
///
/// `address` must be a valid, 4-byte aligned location for a 32-bit read.
#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn readl(address: *const u32) -> u32 {
    unsafe { ptr::read_volatile(address) }
}

/// A memory location whose every access is volatile.
///
/// Hardware registers are reached by overlaying a `VolatileCell` on their
/// address with [`VolatileCell::at`]. A cell owned in ordinary memory
/// behaves the same way and stands in for a register in tests.
#[repr(transparent)]
pub struct VolatileCell<T: Copy> {
    value: UnsafeCell<T>,
}

impl<T: Copy> VolatileCell<T> {
    pub const fn new(value: T) -> Self {
        VolatileCell {
            value: UnsafeCell::new(value),
        }
    }

    /// Overlays a cell on `address`.
    ///
    /// # Safety
    ///
    /// `address` must be valid and aligned for `T` for all of `'a`, and
    /// only ever accessed through volatile operations while borrowed.
    pub unsafe fn at<'a>(address: usize) -> &'a VolatileCell<T> {
        unsafe { &*(address as *const VolatileCell<T>) }
    }

    /// Loads the value. Never elided or merged with other accesses.
    #[inline(always)]
    pub fn read(&self) -> T {
        unsafe { ptr::read_volatile(self.value.get()) }
    }

    /// Stores `value`. Never elided or merged with other accesses.
    #[inline(always)]
    pub fn write(&self, value: T) {
        unsafe { ptr::write_volatile(self.value.get(), value) }
    }

    /// Address of the cell, for use with [`writel`] and [`readl`].
    pub fn as_ptr(&self) -> *mut T {
        self.value.get()
    }
}

/// A sink for 32-bit register accesses addressed by physical address.
///
/// Board setup code is written against this trait so that the same sequence
/// of writes can be driven against real hardware ([`Mmio`]) or recorded by a
/// test double. Implementations must perform accesses immediately and in
/// the order they are called.
pub trait RegisterBus {
    /// Writes `value` to the register at `address`.
    fn write(&self, address: usize, value: u32);

    /// Reads the register at `address`.
    fn read(&self, address: usize) -> u32;
}

/// The real memory-mapped register bus.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Every address later passed to [`RegisterBus::write`] or
    /// [`RegisterBus::read`] on this bus is dereferenced, so constructing it
    /// is unsafe.
    ///
    /// # Safety
    ///
    /// Only addresses of mapped, 4-byte aligned device registers may be used
    /// with the returned bus, and nothing else may be driving those registers
    /// at the same time.
    pub const unsafe fn new() -> Mmio {
        Mmio { _private: () }
    }
}

impl RegisterBus for Mmio {
    fn write(&self, address: usize, value: u32) {
        // Valid by the contract of `Mmio::new`.
        let reg = unsafe { VolatileCell::<u32>::at(address) };
        reg.write(value);
    }

    fn read(&self, address: usize) -> u32 {
        let reg = unsafe { VolatileCell::<u32>::at(address) };
        reg.read()
    }
}

#[cfg(test)]
mod test {
    use super::{readl, writel, Mmio, RegisterBus, VolatileCell};

    #[test]
    fn cell_read_write() {
        let cell = VolatileCell::new(5u32);
        assert_eq!(cell.read(), 5);
        cell.write(432);
        assert_eq!(cell.read(), 432);
    }

    #[test]
    fn writel_readl_round_trip() {
        let reg = VolatileCell::new(0u32);

        unsafe { writel(0x0510_213f, reg.as_ptr()) };
        assert_eq!(unsafe { readl(reg.as_ptr()) }, 0x0510_213f);
        assert_eq!(reg.read(), 0x0510_213f);

        reg.write(1920);
        assert_eq!(unsafe { readl(reg.as_ptr()) }, 1920);
    }

    #[test]
    fn cell_at_aliases_address() {
        let reg = VolatileCell::new(0u32);
        let alias = unsafe { VolatileCell::<u32>::at(reg.as_ptr() as usize) };

        alias.write(0x00ab_cdef);
        assert_eq!(reg.read(), 0x00ab_cdef);
        reg.write(7);
        assert_eq!(alias.read(), 7);
    }

    #[test]
    fn mmio_bus_goes_through_cells() {
        let regs = [VolatileCell::new(0u32), VolatileCell::new(0u32)];
        // The cells are valid, aligned, and owned by this test.
        let bus = unsafe { Mmio::new() };

        bus.write(regs[0].as_ptr() as usize, 0xdead_beef);
        bus.write(regs[1].as_ptr() as usize, 0x1234);

        assert_eq!(regs[0].read(), 0xdead_beef);
        assert_eq!(regs[1].read(), 0x1234);

        regs[1].write(0x5678);
        assert_eq!(bus.read(regs[1].as_ptr() as usize), 0x5678);
        assert_eq!(bus.read(regs[0].as_ptr() as usize), 0xdead_beef);
    }
}
