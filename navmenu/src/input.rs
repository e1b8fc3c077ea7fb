#[cfg(feature = "defmt")]
use loog::defmt;

enum_repr! {
    #[repr(u8)]
    /// One sample of the button pad, as passed to [`Menu::update`](crate::Menu::update).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub enum Button {
        /// Nothing pressed since the last sample
        #[default]
        None = 0,
        Up = 1,
        Down = 2,
        /// Back out of the current submenu
        Left = 3,
        /// Run or enter the selected item
        Right = 4,
    }
}

impl Button {
    /// Map a keyboard key using the `wasd` layout.
    pub const fn from_key(key: char) -> Self {
        match key {
            'w' => Self::Up,
            's' => Self::Down,
            'a' => Self::Left,
            'd' => Self::Right,
            _ => Self::None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}
