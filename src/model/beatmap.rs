use rosu_map::{section::general::GameMode, Beatmap};

use crate::model::{hit_object::TaikoObject, mode::ConvertError};

/// Turns the hitobjects of an osu!taiko [`Beatmap`] into [`TaikoObject`]s,
/// sorted by their start time.
pub fn taiko_objects(map: &Beatmap) -> Result<Vec<TaikoObject>, ConvertError> {
    if map.mode != GameMode::Taiko {
        return Err(ConvertError::UnsupportedMode(map.mode));
    }

    let mut objects: Vec<_> = map
        .hit_objects
        .iter()
        .map(TaikoObject::from_hit_object)
        .collect();

    // Stable so that simultaneous objects keep their file order
    objects.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

    Ok(objects)
}

/// Parse a [`Beatmap`] from the content of a `.osu` file.
pub fn parse_bytes(bytes: &[u8]) -> Result<Beatmap, std::io::Error> {
    rosu_map::from_bytes(bytes)
}

/// Parse a [`Beatmap`] from the content of a `.osu` file.
pub fn parse_str(content: &str) -> Result<Beatmap, std::io::Error> {
    rosu_map::from_str(content)
}
