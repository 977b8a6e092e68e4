/*!
A streaming writer for indented Rust source, modelled after an XML writer.

Every call writes whole lines to a `std::io::Write` implementation. Opening a delimiter
increases the indentation of the following lines until it's closed again.

### Example

```rust
use octi_codegen::writer::{Delimiter, Options, SourceWriter};

fn main() -> Result<(), octi_codegen::writer::Error> {
    let mut w = SourceWriter::new(Vec::<u8>::new(), Options::default());
    w.start(format_args!("static ORIGIN: Point = Point"), Delimiter::Brace)?;
    w.line(format_args!("x: {},", 0))?;
    w.line(format_args!("y: {},", 0))?;
    w.end(";")?;

    assert_eq!(
        std::str::from_utf8(&w.end_document()?).unwrap(),
        "static ORIGIN: Point = Point {
    x: 0,
    y: 0,
};
"
    );
    Ok(())
}
```
*/
use std::{
    fmt::{self, Display},
    io::{self, Write},
};

/// A result from writing source.
pub type Result<T = ()> = std::result::Result<T, Error>;

/// An error while writing source.
#[derive(Debug)]
pub enum Error {
    /// An error while running an io operation.
    IO(io::Error),
    /// Attempted to close a delimiter that was never opened.
    ClosedUnopenedDelimiter,
    /// Attempted to end the document with delimiters left open.
    UnclosedDelimiter(Delimiter),
}
impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => err.fmt(f),
            Self::ClosedUnopenedDelimiter => {
                "Attempted to close a delimiter that was never opened.".fmt(f)
            }
            Self::UnclosedDelimiter(delimiter) => f.write_fmt(format_args!(
                "Attempted to end the document with an unclosed `{}`.",
                delimiter.open()
            )),
        }
    }
}
impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::IO(value)
    }
}

/// A source line indention.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Indent {
    /// Indent with spaces.
    Spaces(u8),
    /// Indent with tabs.
    Tabs,
}

/// Source writing options.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Set the indention of nested lines.
    ///
    /// Default: 4 spaces
    pub indent: Indent,
}

impl Default for Options {
    #[inline]
    fn default() -> Self {
        Options {
            indent: Indent::Spaces(4),
        }
    }
}

/// A pair of brackets that nests the lines between them
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Delimiter {
    /// `{ ... }`, written with a leading space
    Brace,
    /// `( ... )`
    Paren,
    /// `[ ... ]`
    Bracket,
}

impl Delimiter {
    fn open(self) -> &'static str {
        match self {
            Self::Brace => " {",
            Self::Paren => "(",
            Self::Bracket => "[",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Self::Brace => "}",
            Self::Paren => ")",
            Self::Bracket => "]",
        }
    }
}

/// A writer of indented source.
#[derive(Debug)]
pub struct SourceWriter<W: Write> {
    writer: W,
    depth_stack: Vec<Delimiter>,
    opt: Options,
}

impl<W: Write> SourceWriter<W> {
    /// Creates a new `SourceWriter`, writing data in the writer.
    #[inline]
    pub fn new(writer: W, opt: Options) -> Self {
        SourceWriter {
            writer,
            depth_stack: Vec::new(),
            opt,
        }
    }

    fn write_indent(&mut self) -> io::Result<()> {
        for _ in 0..self.depth_stack.len() {
            match self.opt.indent {
                Indent::Spaces(n) => {
                    for _ in 0..n {
                        self.writer.write_all(b" ")?;
                    }
                }
                Indent::Tabs => self.writer.write_all(b"\t")?,
            }
        }
        Ok(())
    }

    /// Writes a line at the current indentation.
    ///
    /// # Errors
    ///
    /// If the writer fails
    pub fn line(&mut self, args: fmt::Arguments) -> Result {
        self.write_indent()?;
        self.writer.write_fmt(args)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Writes an empty line, without indentation.
    ///
    /// # Errors
    ///
    /// If the writer fails
    pub fn blank_line(&mut self) -> Result {
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Writes a line ending with the opening delimiter and indents the following lines.
    ///
    /// # Errors
    ///
    /// If the writer fails
    pub fn start(&mut self, args: fmt::Arguments, delimiter: Delimiter) -> Result {
        self.write_indent()?;
        self.writer.write_fmt(args)?;
        self.writer.write_all(delimiter.open().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.depth_stack.push(delimiter);
        Ok(())
    }

    /// Closes the last opened delimiter, followed by the suffix.
    ///
    /// # Errors
    ///
    /// If no delimiter is open or the writer fails
    pub fn end(&mut self, suffix: &str) -> Result {
        let delimiter = self
            .depth_stack
            .pop()
            .ok_or(Error::ClosedUnopenedDelimiter)?;
        self.write_indent()?;
        self.writer.write_all(delimiter.close().as_bytes())?;
        self.writer.write_all(suffix.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flushes and returns the inner writer.
    ///
    /// # Errors
    ///
    /// If any delimiter is still open or the writer fails
    pub fn end_document(mut self) -> Result<W> {
        if let Some(delimiter) = self.depth_stack.pop() {
            return Err(Error::UnclosedDelimiter(delimiter));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[test]
fn nested_delimiters() {
    let mut w = SourceWriter::new(Vec::new(), Options::default());
    w.start(format_args!("f"), Delimiter::Paren).unwrap();
    w.start(format_args!("&"), Delimiter::Bracket).unwrap();
    w.line(format_args!("{:?},", "a\"b")).unwrap();
    w.end(",").unwrap();
    w.end(";").unwrap();

    assert_eq!(
        String::from_utf8(w.end_document().unwrap()).unwrap(),
        "f(\n    &[\n        \"a\\\"b\",\n    ],\n);\n"
    );
}

#[test]
fn tabs() {
    let mut w = SourceWriter::new(
        Vec::new(),
        Options {
            indent: Indent::Tabs,
        },
    );
    w.start(format_args!("S"), Delimiter::Brace).unwrap();
    w.line(format_args!("a: 1,")).unwrap();
    w.end("").unwrap();
    assert_eq!(
        String::from_utf8(w.end_document().unwrap()).unwrap(),
        "S {\n\ta: 1,\n}\n"
    );
}

#[test]
fn unbalanced() {
    let mut w = SourceWriter::new(Vec::new(), Options::default());
    assert!(matches!(w.end(""), Err(Error::ClosedUnopenedDelimiter)));
    w.start(format_args!("S"), Delimiter::Brace).unwrap();
    assert!(matches!(
        w.end_document(),
        Err(Error::UnclosedDelimiter(Delimiter::Brace))
    ));
}
