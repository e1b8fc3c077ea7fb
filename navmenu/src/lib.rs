//! Hierarchical text menus driven by a handful of buttons.
//!
//! The application owns the menu tree (a [`Submenu`] of [`Item`]s, some of
//! which lead into further submenus) and hands the root to a [`Menu`]. Each
//! tick the host samples its buttons, calls [`Menu::update`], and receives the
//! resulting draw operations through a [`Renderer`]. Nothing is drawn unless
//! the state changed or the configured refresh period elapsed.

#![no_std]

#[cfg(test)]
extern crate std;

macro_rules! enum_repr {
    (
        #[repr($repr:ty)]
        $(#[$attr:meta])*
        $pub:vis enum $name:ident {
            $( $( #[$variant_attr:meta] )* $variant:ident = $value:expr ),*
            $(,)?
        }
    ) => {
        $(#[$attr])*
        #[repr($repr)]
        $pub enum $name {
            $( $(#[$variant_attr])* $variant = $value ),*
        }

        impl $name {
            pub const fn from_raw(raw: $repr) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    }
}

mod config;
mod engine;
mod error;
mod input;
mod render;
mod tree;

pub use self::config::{Clock, Config, NoClock};
pub use self::engine::Menu;
pub use self::error::Error;
pub use self::input::Button;
pub use self::render::{ControlCode, Renderer, TextRenderer};
pub use self::tree::{Action, Context, DrawFn, ExecuteFn, Item, Submenu};

/// Deepest chain of nested submenus a [`Menu`] can navigate, counting the
/// root.
pub const MAX_DEPTH: usize = 8;

#[cfg(test)]
mod mock;
