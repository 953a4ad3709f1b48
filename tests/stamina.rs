use proptest::prelude::*;
use rosu_map::section::general::GameMode;
use rosu_taiko_stamina::{
    model::{beatmap, mode::ConvertError},
    HitColor, HitType, StaminaError, StaminaEvaluator, TaikoDifficultyObjects, TaikoObject,
    TaikoStamina,
};

use self::common::*;

mod common;

fn evaluate_last(hit_objects: &[TaikoObject]) -> f64 {
    let objects = TaikoDifficultyObjects::new(hit_objects, 1.0).unwrap();
    let curr = objects.iter().last().unwrap();

    StaminaEvaluator::default().evaluate_diff_of(curr, &objects)
}

/// Hits at `prev` and `curr` with a same-coloured hit in between so both are
/// played with the same key.
fn same_key_pair(prev: f64, curr: f64) -> Vec<TaikoObject> {
    vec![
        TaikoObject::non_hit(0.0),
        TaikoObject::center(prev),
        TaikoObject::center((prev + curr) / 2.0),
        TaikoObject::center(curr),
    ]
}

#[test]
fn scenario_interval_at_floor() {
    let value = evaluate_last(&same_key_pair(900.0, 1000.0));
    assert_eq_float(value, 1.1);
}

#[test]
fn scenario_interval_above_floor() {
    let value = evaluate_last(&same_key_pair(700.0, 1000.0));
    assert_eq_float(value, 0.7);
}

#[test]
fn scenario_interval_below_floor() {
    let value = evaluate_last(&same_key_pair(999.9, 1000.0));
    assert_eq_float(value, 1.1);
}

#[test]
fn scenario_first_strike() {
    let hit_objects = [
        TaikoObject::non_hit(0.0),
        TaikoObject::rim(100.0),
        TaikoObject::rim(200.0),
        TaikoObject::rim(300.0),
        TaikoObject::center(400.0),
    ];

    assert_eq!(evaluate_last(&hit_objects), 0.0);
}

#[test]
fn scenario_non_hit_marker() {
    let hit_objects = [
        TaikoObject::non_hit(0.0),
        TaikoObject::center(950.0),
        TaikoObject::center(975.0),
        TaikoObject::non_hit(1000.0),
    ];

    assert_eq!(evaluate_last(&hit_objects), 0.0);
}

#[test]
fn colors_use_separate_keys() {
    // k d k d k: the last kat's key was last used two kats ago
    let hit_objects = [
        TaikoObject::non_hit(0.0),
        TaikoObject::rim(100.0),
        TaikoObject::center(200.0),
        TaikoObject::rim(300.0),
        TaikoObject::center(400.0),
        TaikoObject::rim(500.0),
    ];

    assert_eq_float(evaluate_last(&hit_objects), 0.5 + 60.0 / 400.0);
}

#[test]
fn parse_taiko_map() {
    let content = osu_file(
        1,
        &[(0.0, DON), (100.0, KAT), (200.0, DON), (300.0, KAT), (400.0, KAT)],
    );

    let map = beatmap::parse_str(&content).unwrap();
    let hit_objects = beatmap::taiko_objects(&map).unwrap();

    let colors: Vec<_> = hit_objects
        .iter()
        .map(|h| h.hit_type.color().unwrap())
        .collect();

    assert_eq!(
        colors,
        [
            HitColor::Center,
            HitColor::Rim,
            HitColor::Center,
            HitColor::Rim,
            HitColor::Rim,
        ]
    );

    let values = TaikoStamina::new().calculate(&map).unwrap();

    assert_eq!(values.len(), 4);
    assert_eq!(&values.values[..3], &[0.0, 0.0, 0.0]);
    // Kats at 100, 300, 400; the last one shares its key with the first
    assert_eq_float(values.get(3).unwrap(), 0.5 + 60.0 / 300.0);
}

#[test]
fn whistle_is_rim() {
    let content = osu_file(1, &[(0.0, 2), (100.0, 4)]);

    let map = beatmap::parse_str(&content).unwrap();
    let hit_objects = beatmap::taiko_objects(&map).unwrap();

    assert_eq!(hit_objects[0].hit_type, HitType::Hit(HitColor::Rim));
    // Finish only makes it a big note
    assert_eq!(hit_objects[1].hit_type, HitType::Hit(HitColor::Center));
}

#[test]
fn swell_is_non_hit_and_sorted() {
    let content = taiko_file_with_swell(
        &[(0.0, DON), (100.0, DON), (2000.0, DON)],
        (500.0, 1500.0),
    );

    let map = beatmap::parse_str(&content).unwrap();
    let hit_objects = beatmap::taiko_objects(&map).unwrap();

    assert_eq!(hit_objects.len(), 4);
    assert_eq!(hit_objects[2].hit_type, HitType::NonHit);
    assert!(hit_objects
        .windows(2)
        .all(|pair| pair[0].start_time <= pair[1].start_time));

    let values = TaikoStamina::new().calculate(&map).unwrap();

    assert_eq!(values.get(1), Some(0.0));
    // The don at 2000 is the first hit of its key
    assert_eq!(values.get(2), Some(0.0));
}

#[test]
fn non_taiko_map_is_rejected() {
    let content = osu_file(0, &[(0.0, DON), (100.0, DON)]);

    let err = TaikoStamina::new()
        .calculate_bytes(content.as_bytes())
        .unwrap_err();

    assert!(matches!(
        err,
        StaminaError::Convert(ConvertError::UnsupportedMode(GameMode::Osu))
    ));
}

#[test]
fn dt_and_ht() {
    let circles: Vec<_> = (0..16).map(|i| (f64::from(i) * 150.0, DON)).collect();
    let content = osu_file(1, &circles);

    let nomod = TaikoStamina::new()
        .calculate_bytes(content.as_bytes())
        .unwrap();
    let dt = TaikoStamina::new()
        .mods(64_u32)
        .calculate_bytes(content.as_bytes())
        .unwrap();
    let ht = TaikoStamina::new()
        .mods(256_u32)
        .calculate_bytes(content.as_bytes())
        .unwrap();

    assert_eq_float(nomod.max(), 0.5 + 60.0 / 300.0);
    assert_eq_float(dt.max(), 0.5 + 60.0 / 200.0);
    assert_eq_float(ht.max(), 0.5 + 60.0 / 400.0);
}

#[test]
fn partial_play() {
    let circles: Vec<_> = (0..10).map(|i| (f64::from(i) * 100.0, DON)).collect();
    let content = osu_file(1, &circles);

    let values = TaikoStamina::new()
        .passed_objects(5)
        .calculate_bytes(content.as_bytes())
        .unwrap();

    assert_eq!(values.len(), 4);
}

#[test]
fn evaluation_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<TaikoDifficultyObjects>();
    assert_send_sync::<StaminaEvaluator>();
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    let hit_objects: Vec<_> = (0..2000)
        .map(|i| {
            let start_time = f64::from(i) * 37.5;

            match i % 5 {
                0 | 3 => TaikoObject::rim(start_time),
                4 => TaikoObject::non_hit(start_time),
                _ => TaikoObject::center(start_time),
            }
        })
        .collect();

    let objects = TaikoDifficultyObjects::new(&hit_objects, 1.0).unwrap();
    let evaluator = StaminaEvaluator::default();

    let sequential: Vec<_> = objects
        .iter()
        .map(|curr| evaluator.evaluate_diff_of(curr, &objects))
        .collect();

    let chunks: Vec<_> = objects.as_slice().chunks(300).collect();

    let concurrent: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|chunk| {
                let objects = &objects;

                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|curr| evaluator.evaluate_diff_of(curr, objects))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(sequential, concurrent);

    let calculated = TaikoStamina::new().calculate_objects(&hit_objects).unwrap();
    assert_eq!(calculated.values, sequential);
}

/// Reference value computed without the precomputed links.
fn expected_value(hit_objects: &[TaikoObject], idx: usize) -> f64 {
    // Difficulty object `idx` belongs to chart object `idx + 1`
    let curr = &hit_objects[idx + 1];

    let Some(color) = curr.hit_type.color() else {
        return 0.0;
    };

    let same_color: Vec<_> = hit_objects[1..=idx]
        .iter()
        .filter(|h| h.hit_type.color() == Some(color))
        .collect();

    // Same key means two same-coloured hits prior
    let Some(prev) = same_color.len().checked_sub(2).map(|i| same_color[i]) else {
        return 0.0;
    };

    0.5 + 60.0 / f64::max(curr.start_time - prev.start_time, 100.0)
}

fn hit_type() -> impl Strategy<Value = HitType> {
    prop_oneof![
        3 => Just(HitType::Hit(HitColor::Center)),
        3 => Just(HitType::Hit(HitColor::Rim)),
        1 => Just(HitType::NonHit),
    ]
}

fn timeline() -> impl Strategy<Value = Vec<TaikoObject>> {
    prop::collection::vec((0.0..400.0_f64, hit_type()), 0..200).prop_map(|deltas| {
        let mut start_time = 0.0;

        deltas
            .into_iter()
            .map(|(delta, hit_type)| {
                start_time += delta;

                TaikoObject::new(start_time, hit_type)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn matches_reference(hit_objects in timeline()) {
        let objects = TaikoDifficultyObjects::new(&hit_objects, 1.0).unwrap();
        let evaluator = StaminaEvaluator::default();

        for curr in &objects {
            let actual = evaluator.evaluate_diff_of(curr, &objects);
            let expected = expected_value(&hit_objects, curr.idx);

            prop_assert!((actual - expected).abs() <= 1e-9, "{actual} != {expected}");
        }
    }

    #[test]
    fn bounded_and_deterministic(hit_objects in timeline(), clock_rate in 0.5..2.0_f64) {
        let objects = TaikoDifficultyObjects::new(&hit_objects, clock_rate).unwrap();
        let evaluator = StaminaEvaluator::default();

        for curr in &objects {
            let first = evaluator.evaluate_diff_of(curr, &objects);
            let second = evaluator.evaluate_diff_of(curr, &objects);

            prop_assert_eq!(first.to_bits(), second.to_bits());
            prop_assert!(first >= 0.0);
            prop_assert!(first <= 1.1 + 1e-12);

            if !curr.is_hit() {
                prop_assert_eq!(first, 0.0);
            }

            if objects.previous_of_same_partition(curr, 1).is_none() {
                prop_assert_eq!(first, 0.0);
            }
        }
    }

    #[test]
    fn speed_bonus_is_non_increasing(a in 0.0..10_000.0_f64, b in 0.0..10_000.0_f64) {
        let evaluator = StaminaEvaluator::default();
        let (shorter, longer) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(evaluator.speed_bonus(shorter) >= evaluator.speed_bonus(longer));
    }

    #[test]
    fn clamped_below_floor(interval in -1000.0..100.0_f64) {
        let evaluator = StaminaEvaluator::default();

        prop_assert_eq!(evaluator.speed_bonus(interval).to_bits(), 0.6_f64.to_bits());
    }

    #[test]
    fn links_point_backwards(hit_objects in timeline(), rank in 1..4_usize) {
        let objects = TaikoDifficultyObjects::new(&hit_objects, 1.0).unwrap();

        for curr in &objects {
            if let Some(prev) = objects.previous_of_same_partition(curr, rank) {
                prop_assert!(prev.idx < curr.idx);
                prop_assert!(prev.start_time <= curr.start_time);
                prop_assert_eq!(prev.key, curr.key);
            }
        }
    }
}
