use rosu_mods::GameModsLegacy;

/// Mod checks that affect the stamina calculation.
///
/// Implemented for legacy mod bits as `u32` and for
/// [`rosu_mods::GameModsLegacy`].
pub trait Mods {
    /// DoubleTime or Nightcore
    fn dt(&self) -> bool;

    /// HalfTime or Daycore
    fn ht(&self) -> bool;

    fn clock_rate(&self) -> f64 {
        if self.dt() {
            1.5
        } else if self.ht() {
            0.75
        } else {
            1.0
        }
    }
}

impl Mods for u32 {
    fn dt(&self) -> bool {
        // Nightcore is only set alongside DoubleTime but be lenient
        *self & ((1 << 6) | (1 << 9)) != 0
    }

    fn ht(&self) -> bool {
        *self & (1 << 8) != 0
    }
}

impl Mods for GameModsLegacy {
    fn dt(&self) -> bool {
        self.bits().dt()
    }

    fn ht(&self) -> bool {
        self.contains(GameModsLegacy::HalfTime)
    }
}
