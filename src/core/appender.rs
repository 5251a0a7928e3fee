//! Appender trait for log output destinations

use super::error::Result;

/// A destination that receives already-rendered text.
///
/// `text` is one entry or a whole batch of concatenated entries; an appender
/// writes it in one piece and makes it visible before returning.
pub trait Appender: Send {
    fn write_batch(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
