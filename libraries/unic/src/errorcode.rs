// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Standard error enum for the checked wrappers.

/// Errors returned by the functions in [`checked`](crate::checked).
///
/// The raw primitives never fail; these values describe why a checked
/// wrapper refused to call one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// A byte sequence has no terminator inside the slice that holds it
    INVAL = 5,
    /// A length or destination buffer is too small for the operation
    SIZE = 6,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

#[cfg(test)]
mod test {
    use super::ErrorCode;

    #[test]
    fn numeric_values() {
        assert_eq!(usize::from(ErrorCode::INVAL), 5);
        assert_eq!(usize::from(ErrorCode::SIZE), 6);
    }
}
