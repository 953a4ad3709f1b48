#![allow(unused)]

/// Hitsound value of a don.
pub const DON: u8 = 0;
/// Hitsound value of a kat.
pub const KAT: u8 = 8;

/// Build the content of a `.osu` file of the given mode whose hitobjects are
/// circles at the given times with the given hitsounds.
pub fn osu_file(mode: u8, circles: &[(f64, u8)]) -> String {
    let mut content = format!("osu file format v14\n\n[General]\nMode: {mode}\n\n[HitObjects]\n");

    for (time, sound) in circles {
        content.push_str(&format!("256,192,{time},1,{sound},0:0:0:0:\n"));
    }

    content
}

/// Like [`osu_file`] for osu!taiko but with an additional spinner i.e. a swell.
pub fn taiko_file_with_swell(circles: &[(f64, u8)], swell: (f64, f64)) -> String {
    let mut content = osu_file(1, circles);
    let (start, end) = swell;
    content.push_str(&format!("256,192,{start},12,0,{end},0:0:0:0:\n"));

    content
}

#[track_caller]
pub fn assert_eq_float(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9,
        "expected {expected}, got {actual}"
    );
}
