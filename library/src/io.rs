//! Whitespace and line tokenizer over an input buffer read at once.

use std::fmt::Display;
use std::io::{BufReader, BufWriter, Read, Stdout};
use std::str::{from_utf8, FromStr};

use crate::error::{Error, Result};

pub trait InputStream {
    /// Next whitespace-separated token, or `None` at end of input.
    fn token(&mut self) -> Option<&[u8]>;

    /// Rest of the current line without its terminator, or `None` once the
    /// input is exhausted.
    fn line(&mut self) -> Option<&[u8]>;

    fn value<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.token().ok_or(Error::UnexpectedEof)?;
        let token = from_utf8(token)?;
        token.parse::<T>().map_err(|err| Error::InvalidToken {
            token: token.to_owned(),
            reason: err.to_string(),
        })
    }

    fn text_line(&mut self) -> Result<&str> {
        let line = self.line().ok_or(Error::UnexpectedEof)?;
        Ok(from_utf8(line)?)
    }
}

// cheap whitespace check, control bytes included
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

fn trim_newline(s: &[u8]) -> &[u8] {
    let mut s = s;
    while let [rest @ .., b'\n' | b'\r'] = s {
        s = rest;
    }
    s
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let buf: &[u8] = *self;
        let start = buf.iter().position(|&c| !is_whitespace(c))?;
        let buf = &buf[start..];
        let end = buf
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(buf.len());
        let (token, rest) = buf.split_at(end);
        *self = rest;
        Some(token)
    }

    fn line(&mut self) -> Option<&[u8]> {
        let buf: &[u8] = *self;
        if buf.is_empty() {
            return None;
        }
        let end = buf
            .iter()
            .position(|&c| c == b'\n')
            .map_or(buf.len(), |idx| idx + 1);
        let (line, rest) = buf.split_at(end);
        *self = rest;
        Some(trim_newline(line))
    }
}

pub fn stdin_at_once() -> Result<Vec<u8>> {
    let mut reader = BufReader::new(std::io::stdin().lock());
    let mut buf = vec![];
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

pub fn stdout() -> BufWriter<Stdout> {
    BufWriter::new(std::io::stdout())
}
