use crate::{FormatError, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use flate2::read::ZlibDecoder;
use std::io::{self, Cursor, Read};

fn to_format(e: io::Error) -> FormatError {
    FormatError::Malformed(format!("read failed: {}", e))
}

/// Sequential little-endian reader over an in-memory buffer.
pub(crate) struct AseReader<'a> {
    input: Cursor<&'a [u8]>,
}

impl<'a> AseReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        AseReader {
            input: Cursor::new(data),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.input.position() as usize
    }

    pub(crate) fn remaining(&self) -> usize {
        self.input.get_ref().len().saturating_sub(self.position())
    }

    pub(crate) fn ensure(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            Err(FormatError::Truncated { needed, available })
        } else {
            Ok(())
        }
    }

    fn primitive<T>(
        &mut self,
        size: usize,
        read: impl FnOnce(&mut Cursor<&'a [u8]>) -> io::Result<T>,
    ) -> Result<T> {
        self.ensure(size)?;
        read(&mut self.input).map_err(to_format)
    }

    pub(crate) fn byte(&mut self) -> Result<u8> {
        self.primitive(1, |input| input.read_u8())
    }

    pub(crate) fn word(&mut self) -> Result<u16> {
        self.primitive(2, |input| input.read_u16::<LittleEndian>())
    }

    pub(crate) fn short(&mut self) -> Result<i16> {
        self.primitive(2, |input| input.read_i16::<LittleEndian>())
    }

    pub(crate) fn dword(&mut self) -> Result<u32> {
        self.primitive(4, |input| input.read_u32::<LittleEndian>())
    }

    /// Aseprite STRING: a WORD length followed by that many bytes. Invalid
    /// UTF-8 is replaced rather than rejected.
    pub(crate) fn string(&mut self) -> Result<String> {
        let str_len = self.word()? as usize;
        let bytes = self.bytes(str_len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    pub(crate) fn skip_reserved(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.input.set_position((self.position() + count) as u64);
        Ok(())
    }

    /// Borrow the next `count` bytes and advance past them.
    pub(crate) fn bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        self.ensure(count)?;
        let start = self.position();
        let data: &'a [u8] = *self.input.get_ref();
        self.input.set_position((start + count) as u64);
        Ok(&data[start..start + count])
    }

    /// Inflate everything left in the buffer as one zlib stream.
    pub(crate) fn unzip(self, expected_output_size: usize) -> io::Result<Vec<u8>> {
        let start = self.position();
        let data: &'a [u8] = self.input.into_inner();
        let mut decoder = ZlibDecoder::new(&data[start..]);
        let mut buffer = Vec::with_capacity(expected_output_size);
        decoder.read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}
