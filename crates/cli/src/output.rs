//! Serialize the output document to the standard output stream.
//!
//! The JSON document is the run's entire purpose, so any serialization or
//! write failure here is fatal. Diagnostics never go through this writer —
//! they belong on stderr.

use std::io::Write;

use pulse_channels::FetchResult;

/// Write `result` as pretty-printed JSON followed by a newline.
pub fn write<W: Write>(result: &FetchResult, mut writer: W) -> pulse_telegram::Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}
