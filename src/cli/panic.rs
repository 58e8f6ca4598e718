use std::any::Any;
use std::io::{self, Write};
use std::panic::PanicHookInfo;

use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Replaces the default panic output with a crash report naming `input`,
/// the file (or editor buffer) being scanned when the panic happened.
pub fn add_handler(color: ColorChoice, input: String) {
    std::panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
        let crash = Crash {
            input: &input,
            location: info
                .location()
                .map(|location| format!("{}:{}", location.file(), location.line())),
            message: payload_message(info.payload()),
        };

        let buffer_writer = BufferWriter::stderr(color);
        let mut buffer = buffer_writer.buffer();
        // Nothing is left to report to if stderr itself is gone.
        let _ = crash
            .write(&mut buffer)
            .and_then(|()| buffer_writer.print(&buffer));
    }));
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Crash<'a> {
    input: &'a str,
    location: Option<String>,
    message: String,
}

impl Crash<'_> {
    fn write(&self, buffer: &mut Buffer) -> io::Result<()> {
        buffer.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))?;
        write!(buffer, "error")?;
        buffer.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(buffer, ": cscan crashed while scanning `{}`", self.input)?;
        buffer.reset()?;

        writeln!(buffer)?;
        match &self.location {
            Some(location) => writeln!(buffer, "Panic: {location}\n\t{}", self.message)?,
            None => writeln!(buffer, "Panic: {}", self.message)?,
        }
        writeln!(
            buffer,
            "This is a bug in the scanner, not in `{}`.",
            self.input
        )
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown error".to_owned()
    }
}
