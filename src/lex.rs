use std::{io::Error, path::Path};

use log::info;

use crate::read::CharReader;

/// runs the lexer over one source file, returning how many chars it consumed
pub fn lex_file(path: &Path) -> Result<usize, Error> {
    info!("lexing {} ...", path.display());
    let mut consumed = 0;
    for ch in CharReader::open(path)? {
        ch?;
        consumed += 1;
    }
    info!("lexing {} ... done", path.display());
    Ok(consumed)
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Error, ErrorKind},
        path::Path,
    };

    use super::lex_file;

    #[test]
    fn consumes_every_char() -> Result<(), Error> {
        let path = Path::new("tests/hello_world.sia");
        let expected = std::fs::read_to_string(path)?.chars().count();
        assert_eq!(expected, lex_file(path)?);
        Ok(())
    }

    #[test]
    fn missing_file() {
        let result = lex_file(Path::new("tests/no_such_file.sia"));
        assert_eq!(
            Some(ErrorKind::NotFound),
            result.err().map(|err| err.kind())
        );
    }
}
