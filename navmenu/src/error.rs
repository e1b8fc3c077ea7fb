use core::error::Error as CoreError;
use core::fmt;

#[cfg(feature = "defmt")]
use loog::defmt;

/// Reasons a menu tree is rejected when it is built.
///
/// Navigation and drawing cannot fail once a [`Menu`](crate::Menu) exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// A submenu needs at least one item for the cursor to point at.
    EmptySubmenu,
    /// Submenus nest deeper than the navigation stack can hold. A submenu
    /// that leads back into one of its ancestors always ends up here.
    TooDeep { limit: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySubmenu => f.write_str("submenu has no items"),
            Self::TooDeep { limit } => {
                write!(f, "submenus are nested more than {limit} levels deep")
            }
        }
    }
}

impl CoreError for Error {}
