use embassy_time::Instant;

use crate::tree::{Action, Context, Submenu};
use crate::{Button, Clock, Config, ControlCode, Error, Item, MAX_DEPTH, NoClock, Renderer};

/// Navigation state for one menu tree.
///
/// Submenus entered from the root are kept on a stack along with their
/// cursors, so backing out of a submenu returns to the exact item that led
/// into it.
#[derive(Debug)]
pub struct Menu<'a, C = NoClock> {
    stack: heapless::Vec<Frame<'a>, MAX_DEPTH>,
    exit_attempted: bool,
    redraw_pending: bool,
    last_redraw: Instant,
    config: Config,
    clock: C,
}

#[derive(Debug, Clone, Copy)]
struct Frame<'a> {
    submenu: &'a Submenu<'a>,
    /// Always a valid index into `submenu.items()`
    cursor: usize,
}

impl<'a> Frame<'a> {
    const fn new(submenu: &'a Submenu<'a>) -> Self {
        Self { submenu, cursor: 0 }
    }

    fn selected(&self) -> &'a Item<'a> {
        &self.submenu.items()[self.cursor]
    }
}

impl<'a> Menu<'a> {
    /// Menu that only redraws in response to input.
    pub fn new(root: &'a Submenu<'a>) -> Result<Self, Error> {
        Self::with_clock(root, Config::new(), NoClock)
    }
}

impl<'a, C: Clock> Menu<'a, C> {
    /// Menu that also redraws every `config.refresh_period`, timed by `clock`.
    ///
    /// Fails if the tree under `root` is nested more than [`MAX_DEPTH`]
    /// levels deep.
    pub fn with_clock(root: &'a Submenu<'a>, config: Config, clock: C) -> Result<Self, Error> {
        let Some(depth) = root.depth(MAX_DEPTH) else {
            loog::warn!("Menu tree is nested more than {MAX_DEPTH} levels deep");
            return Err(Error::TooDeep { limit: MAX_DEPTH });
        };

        loog::debug!(
            "Starting menu {:?} ({} levels, {} root items)",
            root.name(),
            depth,
            root.items().len()
        );

        let mut stack = heapless::Vec::new();
        // MAX_DEPTH is never zero
        let _ = stack.push(Frame::new(root));

        Ok(Self {
            stack,
            exit_attempted: false,
            redraw_pending: true,
            last_redraw: Instant::from_ticks(0),
            config,
            clock,
        })
    }

    /// Apply one button sample and redraw if needed.
    ///
    /// Item callbacks run inside this call. Nothing happens once the menu has
    /// been [closed](Self::close).
    pub fn update<R: Renderer>(&mut self, button: Button, renderer: &mut R) {
        if self.stack.is_empty() {
            return;
        }

        self.exit_attempted = false;
        match button {
            Button::None => {}
            Button::Up => self.select_up(),
            Button::Down => self.select_down(),
            Button::Left => self.back(),
            Button::Right => self.forward(),
        }

        if self.redraw_due(button) {
            self.draw(renderer);
        }
    }

    fn redraw_due(&mut self, button: Button) -> bool {
        let now = self
            .config
            .refresh_enabled()
            .then(|| self.clock.now());

        let due = self.redraw_pending
            || !button.is_none()
            || now.is_some_and(|now| {
                now.saturating_duration_since(self.last_redraw) >= self.config.refresh_period
            });

        if due {
            self.redraw_pending = false;
            if let Some(now) = now {
                self.last_redraw = now;
            }
        }

        due
    }
}

impl<'a, C> Menu<'a, C> {
    /// The submenu being shown, or `None` after [`close`](Self::close).
    pub fn active(&self) -> Option<&'a Submenu<'a>> {
        self.stack.last().map(|frame| frame.submenu)
    }

    /// Index of the selected item in the active submenu.
    pub fn cursor(&self) -> Option<usize> {
        self.stack.last().map(|frame| frame.cursor)
    }

    pub fn selected(&self) -> Option<&'a Item<'a>> {
        self.stack.last().map(Frame::selected)
    }

    /// Number of open submenus, including the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_root(&self) -> bool {
        self.stack.len() == 1
    }

    pub fn is_open(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Whether the last [`update`](Self::update) tried to back out of the
    /// root submenu. Cleared by the next update.
    pub fn exit_attempted(&self) -> bool {
        self.exit_attempted
    }

    /// Redraw on the next update even if nothing changed, e.g. after
    /// something shown by a draw callback changed.
    pub fn request_redraw(&mut self) {
        self.redraw_pending = true;
    }

    /// Tear the menu down. Later updates do nothing and draw nothing.
    pub fn close(&mut self) {
        loog::debug!("Closing menu");
        self.stack.clear();
        self.exit_attempted = false;
        self.redraw_pending = false;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn select_up(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.cursor = if frame.cursor == 0 {
                frame.submenu.last_index()
            } else {
                frame.cursor - 1
            };
        }
    }

    fn select_down(&mut self) {
        if let Some(frame) = self.stack.last_mut() {
            frame.cursor = if frame.cursor < frame.submenu.last_index() {
                frame.cursor + 1
            } else {
                0
            };
        }
    }

    fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
            loog::trace!("Returned to depth {}", self.stack.len());
        } else {
            loog::trace!("Exit attempted at root");
            self.exit_attempted = true;
        }
    }

    fn forward(&mut self) {
        let Some(&frame) = self.stack.last() else {
            return;
        };

        let item = frame.selected();
        match *item.action() {
            Action::None => {}
            Action::EnterSubmenu(submenu) => {
                loog::trace!("Entering submenu {:?}", submenu.name());
                if self.stack.push(Frame::new(submenu)).is_err() {
                    // Ruled out when the tree was validated
                    loog::unreachable!("menu stack overflow");
                }
            }
            Action::Invoke(on_execute) => {
                loog::trace!("Running {:?}", item.name());
                on_execute(&Context {
                    submenu: frame.submenu,
                    item,
                    index: frame.cursor,
                });
            }
        }
    }

    fn draw<R: Renderer>(&self, renderer: &mut R) {
        let Some(&Frame { submenu, cursor }) = self.stack.last() else {
            return;
        };

        renderer.control(ControlCode::ClearScreen);

        if let Some(name) = submenu.name() {
            renderer.draw_str(name);
            renderer.control(ControlCode::FinishedDrawingItem);
        }

        for (index, item) in submenu.items().iter().enumerate() {
            renderer.control(if index == cursor {
                ControlCode::DrawingSelectedItem
            } else {
                ControlCode::DrawingItem
            });
            renderer.draw_str(item.name());

            if let Some(on_draw) = item.on_draw() {
                renderer.control(ControlCode::CallingOnDraw);
                on_draw(
                    &Context {
                        submenu,
                        item,
                        index,
                    },
                    &mut *renderer,
                );
            }

            renderer.control(ControlCode::FinishedDrawingItem);
        }
    }
}
