//! PWM-Ausgangsstufe
//!
//! Schreibt Hardware-Level nur bei Änderung auf den [`PwmWriter`].

use crate::traits::{PwmError, PwmWriter};

/// Wrapper um einen [`PwmWriter`], der doppelte Writes unterdrückt
pub struct PwmOutput<W: PwmWriter> {
    writer: W,
    last_level: Option<u8>,
}

impl<W: PwmWriter> PwmOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_level: None,
        }
    }

    /// Schreibt `level`, falls er sich vom zuletzt geschriebenen unterscheidet
    ///
    /// Liefert `Ok(true)` wenn geschrieben wurde, `Ok(false)` wenn nicht.
    /// Nach einem Fehler wird beim nächsten Aufruf erneut geschrieben.
    pub fn write(&mut self, level: u8) -> Result<bool, PwmError> {
        if self.last_level == Some(level) {
            return Ok(false);
        }
        self.last_level = None;
        self.writer.write(level)?;
        self.last_level = Some(level);
        Ok(true)
    }

    pub fn last_level(&self) -> Option<u8> {
        self.last_level
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}
