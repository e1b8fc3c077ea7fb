use core::{fmt, ptr};

use crate::{Error, Renderer};

/// Submenus whose height has been worked out while validating a tree.
/// Submenus past this many are walked again on every path leading to them.
const KNOWN_HEIGHTS: usize = 32;

/// Callback run when the user selects an item with [`Button::Right`](crate::Button::Right).
///
/// Any state it changes lives in the closure's captures (e.g. an `AtomicI32`
/// counter owned by the application); the menu tree itself is read-only.
/// Callbacks are `Sync` so whole trees can be `static`.
pub type ExecuteFn<'a> = &'a (dyn Fn(&Context<'_>) + Sync + 'a);

/// Callback that appends live text after an item's name while it is drawn.
pub type DrawFn<'a> = &'a (dyn Fn(&Context<'_>, &mut dyn Renderer) + Sync + 'a);

/// What happens when an item is selected.
#[derive(Clone, Copy, Default)]
pub enum Action<'a> {
    #[default]
    None,
    EnterSubmenu(&'a Submenu<'a>),
    Invoke(ExecuteFn<'a>),
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::EnterSubmenu(submenu) => f
                .debug_tuple("EnterSubmenu")
                .field(&submenu.name)
                .finish(),
            Self::Invoke(_) => f.write_str("Invoke(..)"),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Item<'a> {
    name: &'a str,
    action: Action<'a>,
    on_draw: Option<DrawFn<'a>>,
}

impl<'a> Item<'a> {
    /// An item that only displays its name.
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            action: Action::None,
            on_draw: None,
        }
    }

    pub const fn submenu(name: &'a str, submenu: &'a Submenu<'a>) -> Self {
        Self::new(name).with_action(Action::EnterSubmenu(submenu))
    }

    pub const fn invoke(name: &'a str, on_execute: ExecuteFn<'a>) -> Self {
        Self::new(name).with_action(Action::Invoke(on_execute))
    }

    #[must_use]
    pub const fn with_action(mut self, action: Action<'a>) -> Self {
        self.action = action;
        self
    }

    #[must_use]
    pub const fn with_draw(mut self, on_draw: DrawFn<'a>) -> Self {
        self.on_draw = Some(on_draw);
        self
    }

    pub const fn name(&self) -> &'a str {
        self.name
    }

    pub const fn action(&self) -> &Action<'a> {
        &self.action
    }

    pub(crate) const fn on_draw(&self) -> Option<DrawFn<'a>> {
        self.on_draw
    }
}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("action", &self.action)
            .field("on_draw", &self.on_draw.is_some())
            .finish()
    }
}

/// A (possibly untitled) list of items.
#[derive(Clone, Copy)]
pub struct Submenu<'a> {
    name: Option<&'a str>,
    items: &'a [Item<'a>],
}

impl<'a> Submenu<'a> {
    /// # Panics
    ///
    /// If `items` is empty. Trees built in a `const` or `static` fail to
    /// compile instead.
    pub const fn new(name: Option<&'a str>, items: &'a [Item<'a>]) -> Self {
        assert!(!items.is_empty(), "submenu must have at least one item");
        Self { name, items }
    }

    pub const fn try_new(name: Option<&'a str>, items: &'a [Item<'a>]) -> Result<Self, Error> {
        if items.is_empty() {
            Err(Error::EmptySubmenu)
        } else {
            Ok(Self { name, items })
        }
    }

    /// Title drawn above the items, if any.
    pub const fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Never empty.
    pub const fn items(&self) -> &'a [Item<'a>] {
        self.items
    }

    pub(crate) const fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    /// Longest chain of submenus starting at (and including) this one, or
    /// `None` if it exceeds `limit`.
    pub(crate) fn depth(&'a self, limit: usize) -> Option<usize> {
        self.height(limit, &mut heapless::Vec::new())
    }

    fn height(
        &'a self,
        limit: usize,
        known: &mut heapless::Vec<(&'a Submenu<'a>, usize), KNOWN_HEIGHTS>,
    ) -> Option<usize> {
        if let Some(&(_, height)) = known.iter().find(|(submenu, _)| ptr::eq(*submenu, self)) {
            return (height <= limit).then_some(height);
        }

        // Also where cycles end up, since they never finish
        if limit == 0 {
            return None;
        }

        let mut deepest = 0;
        for item in self.items {
            if let Action::EnterSubmenu(submenu) = item.action {
                deepest = deepest.max(submenu.height(limit - 1, known)?);
            }
        }

        let height = deepest + 1;
        let _ = known.push((self, height));
        Some(height)
    }
}

impl fmt::Debug for Submenu<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submenu")
            .field("name", &self.name)
            .field("items", &self.items.len())
            .finish()
    }
}

/// Passed to item callbacks. Only valid for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub submenu: &'a Submenu<'a>,
    pub item: &'a Item<'a>,
    /// Position of `item` within `submenu`
    pub index: usize,
}
