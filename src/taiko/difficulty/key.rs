use crate::model::hit_object::HitColor;

/// Which of the two keys of a colour a hit is played with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

/// The key a hit is played with, assuming that each colour alternates
/// between two keys.
///
/// Hits sharing a key form one partition for stamina purposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub color: HitColor,
    pub hand: Hand,
}

impl Key {
    pub const COUNT: usize = 4;

    /// The key of the hit at index `mono_idx` among all hits of `color`.
    ///
    /// The first hit of each colour is played with the left hand.
    pub const fn for_mono_idx(color: HitColor, mono_idx: usize) -> Self {
        let hand = if mono_idx % 2 == 0 {
            Hand::Left
        } else {
            Hand::Right
        };

        Self { color, hand }
    }

    /// Index in `0..Key::COUNT` for per-key storage.
    pub const fn idx(self) -> usize {
        let color = match self.color {
            HitColor::Center => 0,
            HitColor::Rim => 2,
        };

        let hand = match self.hand {
            Hand::Left => 0,
            Hand::Right => 1,
        };

        color + hand
    }
}
