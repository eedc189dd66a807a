//! UART output adapter
//!
//! This adapter implements the OutputPort trait on a blocking UART
//! transmitter. Every call returns once the bytes are in the TX FIFO.

use embassy_rp::uart::{Blocking, UartTx};

use crate::ports::output::{OutputError, OutputPort};

/// Blocking UART line sink
pub struct UartOutput<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartOutput<'d> {
    /// Create a new UART output adapter
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl<'d> OutputPort for UartOutput<'d> {
    fn write_line(&mut self, line: &str) -> Result<(), OutputError> {
        self.tx
            .blocking_write(line.as_bytes())
            .map_err(|_| OutputError::WriteFailed)
    }
}
