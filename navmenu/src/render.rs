use core::fmt;

#[cfg(feature = "defmt")]
use loog::defmt;

enum_repr! {
    #[repr(u8)]
    /// Formatting hints emitted between pieces of text. What they look like
    /// (if anything) is up to the [`Renderer`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum ControlCode {
        /// Start of a new frame
        ClearScreen = 0,
        /// End of the title or of an item's line
        FinishedDrawingItem = 1,
        /// The following item is under the cursor
        DrawingSelectedItem = 2,
        /// The following item is not under the cursor
        DrawingItem = 3,
        /// The item's draw callback is about to append to its line
        CallingOnDraw = 4,
    }
}

/// Display-side half of the engine.
///
/// Called synchronously from [`Menu::update`](crate::Menu::update); neither
/// method can fail, so renderers that write to fallible sinks need to keep
/// track of errors themselves (see [`TextRenderer`]).
pub trait Renderer {
    /// Emit one fragment of text. Called several times per line.
    fn draw_str(&mut self, text: &str);

    fn control(&mut self, code: ControlCode);

    /// Emit formatted text, for draw callbacks showing live values.
    fn draw_fmt(&mut self, args: fmt::Arguments<'_>) {
        if let Some(text) = args.as_str() {
            self.draw_str(text);
        } else {
            let _ = fmt::write(&mut Adapter(self), args);
        }
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_str(&mut self, text: &str) {
        (**self).draw_str(text);
    }

    fn control(&mut self, code: ControlCode) {
        (**self).control(code);
    }

    fn draw_fmt(&mut self, args: fmt::Arguments<'_>) {
        (**self).draw_fmt(args);
    }
}

struct Adapter<'r, R: ?Sized>(&'r mut R);

impl<R: Renderer + ?Sized> fmt::Write for Adapter<'_, R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.draw_str(s);
        Ok(())
    }
}

/// Renders to any [`fmt::Write`] as plain lines of text, marking the
/// selected item with an arrow and clearing the screen with ANSI escapes.
///
/// ```text
/// Main
/// -> Date 2024-05-01
///    Time 12:00:00
///    Diagnostics
/// ```
#[derive(Debug)]
pub struct TextRenderer<W> {
    writer: W,
    result: fmt::Result,
}

impl<W: fmt::Write> TextRenderer<W> {
    pub const CLEAR_SCREEN: &'static str = "\x1b[H\x1b[J";
    pub const SELECTED: &'static str = "-> ";
    pub const UNSELECTED: &'static str = "   ";

    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            result: Ok(()),
        }
    }

    /// Returns the first write error since the last call, if there was one.
    pub fn finish(&mut self) -> fmt::Result {
        core::mem::replace(&mut self.result, Ok(()))
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write(&mut self, s: &str) {
        if self.result.is_ok() {
            self.result = self.writer.write_str(s);
        }
    }
}

impl<W: fmt::Write> Renderer for TextRenderer<W> {
    fn draw_str(&mut self, text: &str) {
        self.write(text);
    }

    fn control(&mut self, code: ControlCode) {
        let text = match code {
            ControlCode::ClearScreen => Self::CLEAR_SCREEN,
            ControlCode::FinishedDrawingItem => "\n",
            ControlCode::DrawingSelectedItem => Self::SELECTED,
            ControlCode::DrawingItem => Self::UNSELECTED,
            ControlCode::CallingOnDraw => " ",
        };
        self.write(text);
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use super::*;

    #[test]
    fn control_codes() {
        let mut renderer = TextRenderer::new(heapless::String::<64>::new());
        renderer.control(ControlCode::ClearScreen);
        renderer.draw_str("Main");
        renderer.control(ControlCode::FinishedDrawingItem);
        renderer.control(ControlCode::DrawingSelectedItem);
        renderer.draw_str("Counter");
        renderer.control(ControlCode::CallingOnDraw);
        renderer.draw_fmt(format_args!("{}", 42));
        renderer.control(ControlCode::FinishedDrawingItem);
        renderer.control(ControlCode::DrawingItem);
        renderer.draw_str("Inputs");

        renderer.finish().unwrap();
        assert_eq!(
            renderer.writer().as_str(),
            "\x1b[H\x1b[JMain\n-> Counter 42\n   Inputs"
        );
    }

    #[test]
    fn latches_first_error() {
        let mut renderer = TextRenderer::new(heapless::String::<4>::new());
        renderer.draw_str("Main");
        renderer.draw_str("Menu");
        renderer.draw_str("!");
        assert!(renderer.finish().is_err());
        assert_eq!(renderer.writer().as_str(), "Main");

        renderer.writer_mut().clear();
        renderer.draw_str("ok");
        renderer.finish().unwrap();
        assert_eq!(renderer.into_inner().as_str(), "ok");
    }

    #[test]
    fn draw_fmt_through_dyn() {
        let mut text = heapless::String::<16>::new();
        {
            let mut renderer = TextRenderer::new(&mut text);
            let dynamic: &mut dyn Renderer = &mut renderer;
            dynamic.draw_fmt(format_args!("Input {}", 3));
        }
        text.push_str("!").unwrap();
        write!(text, "{}", 1).unwrap();
        assert_eq!(text.as_str(), "Input 3!1");
    }
}
