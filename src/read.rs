use std::{
    fs::File,
    io::{BufRead, BufReader, Error, ErrorKind, Read},
    path::Path,
};

fn err_invalid_data<E>(msg: E) -> Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Error::new(ErrorKind::InvalidData, msg)
}

/// number of bytes in the utf8 sequence started by `lead`
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7f => Some(1),
        0xc0..=0xdf => Some(2),
        0xe0..=0xef => Some(3),
        0xf0..=0xf7 => Some(4),
        _ => None,
    }
}

/// wrap a Read impl to produce unicode chars over utf8-encoded bytes
pub struct CharReader<'read> {
    reader: BufReader<Box<dyn Read + 'read>>,
}

impl CharReader<'static> {
    pub fn open(path: &Path) -> Result<Self, Error> {
        Ok(Self::new(Box::new(File::open(path)?)))
    }
}

impl<'read> CharReader<'read> {
    pub fn new(reader: Box<dyn Read + 'read>) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let byte = self.reader.fill_buf()?.first().copied();
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    /// consume the next unicode character, `None` at end of input
    pub fn read(&mut self) -> Result<Option<char>, Error> {
        let lead = match self.read_byte()? {
            Some(lead) => lead,
            None => return Ok(None),
        };
        let width = utf8_width(lead)
            .ok_or_else(|| err_invalid_data(format!("invalid utf8 lead byte {:#04x}", lead)))?;

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes[1..width].iter_mut() {
            *slot = self
                .read_byte()?
                .ok_or_else(|| err_invalid_data("truncated utf8 sequence"))?;
        }
        let decoded = std::str::from_utf8(&bytes[..width]).map_err(err_invalid_data)?;
        Ok(decoded.chars().next())
    }

    pub fn into_chars(self) -> CharReaderIter<'read> {
        CharReaderIter {
            reader: self,
            is_err: false,
        }
    }
}

/// stops after the first error
pub struct CharReaderIter<'read> {
    reader: CharReader<'read>,
    is_err: bool,
}

impl<'a> Iterator for CharReaderIter<'a> {
    type Item = Result<char, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_err {
            return None;
        }
        match self.reader.read() {
            Ok(next) => next.map(Ok),
            Err(err) => {
                self.is_err = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a> IntoIterator for CharReader<'a> {
    type Item = Result<char, Error>;
    type IntoIter = CharReaderIter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_chars()
    }
}
