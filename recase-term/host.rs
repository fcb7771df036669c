//! Standard streams as a selection: the whole input is selected, the
//! replacement goes to the output.

use std::io::Write;

use recase_lib::selection::{
  HostError,
  SelectionHost,
};

pub struct StdioHost<W> {
  text:        String,
  out:         W,
  /// Terminate the output with a newline. Set when the text came from
  /// arguments rather than a stream.
  newline:     bool,
  pub written: bool,
}

impl<W: Write> StdioHost<W> {
  pub fn from_args(args: &[String], out: W) -> Self {
    Self {
      text: args.join(" "),
      out,
      newline: true,
      written: false,
    }
  }

  pub fn from_stream(text: String, out: W) -> Self {
    Self {
      text,
      out,
      newline: false,
      written: false,
    }
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> SelectionHost for StdioHost<W> {
  fn selected_text(&self) -> Option<String> {
    Some(self.text.clone())
  }

  fn replace_selection(&mut self, text: &str) -> Result<(), HostError> {
    self.out.write_all(text.as_bytes())?;
    if self.newline {
      self.out.write_all(b"\n")?;
    }
    self.out.flush()?;
    self.text = text.to_owned();
    self.written = true;
    Ok(())
  }
}
