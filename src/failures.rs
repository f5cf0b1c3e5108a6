//! Recoverable failures: a typed error matched by variant, a guard that runs
//! on every exit path, and a scoped in-memory buffer.

use std::io::{self, Cursor, Write};
use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::console::Console;
use crate::error::{Result, TourError};

pub fn checked_divide(dividend: i32, divisor: i32) -> Result<i32> {
    if divisor == 0 {
        return Err(TourError::DivideByZero);
    }
    dividend
        .checked_div(divisor)
        .ok_or_else(|| TourError::invalid_argument("divisor", "Quotient overflows i32"))
}

// =============================================================================
// Finally guard
// =============================================================================

/// Borrows the console for the duration of a fallible block and prints
/// `Finally block executed` when dropped, however the block is left.
pub struct Finally<'a, W: Write> {
    console: &'a mut Console<W>,
}

impl<'a, W: Write> Finally<'a, W> {
    pub fn new(console: &'a mut Console<W>) -> Self {
        Self { console }
    }
}

impl<W: Write> Deref for Finally<'_, W> {
    type Target = Console<W>;
    fn deref(&self) -> &Self::Target {
        &*self.console
    }
}

impl<W: Write> DerefMut for Finally<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.console
    }
}

impl<W: Write> Drop for Finally<'_, W> {
    fn drop(&mut self) {
        // Drop cannot report a failed write.
        let _ = self.console.line("Finally block executed");
    }
}

// =============================================================================
// Scoped buffer
// =============================================================================

/// In-memory byte stream, released when it goes out of scope.
#[derive(Debug, Default)]
pub struct ScopedBuffer {
    inner: Cursor<Vec<u8>>,
}

impl ScopedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.get_ref().is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.inner.get_ref()
    }
}

impl Write for ScopedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Drop for ScopedBuffer {
    fn drop(&mut self) {
        debug!(bytes = self.len(), "scoped buffer released");
    }
}

// =============================================================================
// Section
// =============================================================================

fn report_division<W: Write>(console: &mut Console<W>, dividend: i32, divisor: i32) -> Result<()> {
    let mut guard = Finally::new(console);
    match checked_divide(dividend, divisor) {
        Ok(quotient) => guard.field("Quotient", quotient)?,
        Err(e @ TourError::DivideByZero) => guard.field("Caught exception", e)?,
        Err(e) => guard.field("General exception", e)?,
    }
    Ok(())
}

pub fn demo<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.section("Error Handling")?;

    report_division(console, 10, 0)?;

    {
        let mut stream = ScopedBuffer::new();
        stream.write_all("Hello, Rust!".as_bytes())?;
        console.field("Stream length", stream.len())?;
    }

    console.blank()?;
    Ok(())
}
