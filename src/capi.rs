use std::{
    os::raw::c_char,
    panic::{catch_unwind, AssertUnwindSafe},
    ptr, slice,
};

use crate::{
    model::hit_object::{HitColor, HitType, TaikoObject},
    taiko::{StaminaError, TaikoStamina},
};

/// Error codes returned by the C API.
#[repr(C)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RosuStaminaError {
    Ok = 0,
    NullPointer = 1,
    InvalidHitType = 2,
    ParseError = 3,
    UnsupportedMode = 4,
    InvalidTimeline = 5,
    Panic = 6,
}

impl From<StaminaError> for RosuStaminaError {
    fn from(err: StaminaError) -> Self {
        match err {
            StaminaError::Parse(_) => Self::ParseError,
            StaminaError::Convert(_) => Self::UnsupportedMode,
            StaminaError::Timeline(_) => Self::InvalidTimeline,
        }
    }
}

/// Hit type of a raw object passed through the C API.
///
/// `0` is a center hit, `1` a rim hit, `2` a drum roll or swell.
fn hit_type_from_c(hit_type: u8) -> Option<HitType> {
    match hit_type {
        0 => Some(HitType::Hit(HitColor::Center)),
        1 => Some(HitType::Hit(HitColor::Rim)),
        2 => Some(HitType::NonHit),
        _ => None,
    }
}

fn calculator(mods: u32, clock_rate: f64) -> TaikoStamina {
    let calc = TaikoStamina::new().mods(mods);

    // Non-positive clock rates defer to the mods
    if clock_rate > 0.0 {
        calc.clock_rate(clock_rate)
    } else {
        calc
    }
}

/// Convert an error code into a static, NUL-terminated string.
#[no_mangle]
pub extern "C" fn rosu_stamina_error_str(err: i32) -> *const c_char {
    match err {
        x if x == RosuStaminaError::Ok as i32 => b"Ok\0".as_ptr(),
        x if x == RosuStaminaError::NullPointer as i32 => b"NullPointer\0".as_ptr(),
        x if x == RosuStaminaError::InvalidHitType as i32 => b"InvalidHitType\0".as_ptr(),
        x if x == RosuStaminaError::ParseError as i32 => b"ParseError\0".as_ptr(),
        x if x == RosuStaminaError::UnsupportedMode as i32 => b"UnsupportedMode\0".as_ptr(),
        x if x == RosuStaminaError::InvalidTimeline as i32 => b"InvalidTimeline\0".as_ptr(),
        x if x == RosuStaminaError::Panic as i32 => b"Panic\0".as_ptr(),
        _ => b"Unknown\0".as_ptr(),
    }
    .cast::<c_char>()
}

/// Calculate stamina values of raw objects sorted by start time.
///
/// Writes `len - 1` values into `out` because the first object does not get
/// a value. A `clock_rate` of zero or less uses the clock rate of `mods`.
///
/// # Safety
/// - If `len != 0`, `start_times` and `hit_types` must be valid for reads of
///   `len` elements.
/// - If `len > 1`, `out` must be valid for writes of `len - 1` elements.
#[no_mangle]
pub unsafe extern "C" fn rosu_stamina_calculate_objects(
    start_times: *const f64,
    hit_types: *const u8,
    len: usize,
    mods: u32,
    clock_rate: f64,
    out: *mut f64,
) -> RosuStaminaError {
    if len != 0 && (start_times.is_null() || hit_types.is_null()) {
        return RosuStaminaError::NullPointer;
    }

    if len > 1 && out.is_null() {
        return RosuStaminaError::NullPointer;
    }

    match catch_unwind(AssertUnwindSafe(|| -> Result<(), RosuStaminaError> {
        let (start_times, hit_types) = if len == 0 {
            (&[][..], &[][..])
        } else {
            (
                slice::from_raw_parts(start_times, len),
                slice::from_raw_parts(hit_types, len),
            )
        };

        let objects = start_times
            .iter()
            .zip(hit_types)
            .map(|(&start_time, &hit_type)| {
                hit_type_from_c(hit_type).map(|hit_type| TaikoObject::new(start_time, hit_type))
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(RosuStaminaError::InvalidHitType)?;

        let values = calculator(mods, clock_rate)
            .calculate_objects(&objects)
            .map_err(|_| RosuStaminaError::InvalidTimeline)?;

        if !values.is_empty() {
            slice::from_raw_parts_mut(out, values.len()).copy_from_slice(&values.values);
        }

        Ok(())
    })) {
        Ok(Ok(())) => RosuStaminaError::Ok,
        Ok(Err(err)) => err,
        Err(_) => RosuStaminaError::Panic,
    }
}

/// Parse an in-memory `.osu` file of an osu!taiko map and calculate its
/// stamina values.
///
/// On success, `out` points to `out_len` values which must be freed through
/// [`rosu_stamina_values_free`].
///
/// # Safety
/// - If `len != 0`, `bytes` must be valid for reads of `len` bytes.
/// - `out` and `out_len` must be valid pointers to writable memory.
#[no_mangle]
pub unsafe extern "C" fn rosu_stamina_calculate_bytes(
    bytes: *const u8,
    len: usize,
    mods: u32,
    clock_rate: f64,
    out: *mut *mut f64,
    out_len: *mut usize,
) -> RosuStaminaError {
    if out.is_null() || out_len.is_null() || (bytes.is_null() && len != 0) {
        return RosuStaminaError::NullPointer;
    }

    match catch_unwind(AssertUnwindSafe(|| -> Result<(), RosuStaminaError> {
        let bytes = if len == 0 {
            &[]
        } else {
            slice::from_raw_parts(bytes, len)
        };

        let values = calculator(mods, clock_rate)
            .calculate_bytes(bytes)
            .map_err(RosuStaminaError::from)?;

        let values = values.into_vec().into_boxed_slice();
        out_len.write(values.len());
        out.write(Box::into_raw(values).cast::<f64>());

        Ok(())
    })) {
        Ok(Ok(())) => RosuStaminaError::Ok,
        Ok(Err(err)) => err,
        Err(_) => RosuStaminaError::Panic,
    }
}

/// Free values created through [`rosu_stamina_calculate_bytes`].
///
/// # Safety
/// - `values` must either be `NULL` or a pointer returned by
///   [`rosu_stamina_calculate_bytes`] alongside its `len`.
#[no_mangle]
pub unsafe extern "C" fn rosu_stamina_values_free(values: *mut f64, len: usize) {
    if values.is_null() {
        return;
    }

    let _ = catch_unwind(AssertUnwindSafe(|| {
        drop(Box::from_raw(ptr::slice_from_raw_parts_mut(values, len)));
    }));
}
