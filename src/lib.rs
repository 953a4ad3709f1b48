//! Stamina difficulty of osu!taiko maps.
//!
//! Every difficulty object of a map is assigned the minimum mechanical
//! stamina required to hit it, assuming each colour alternates between two
//! keys. The values are meant to be fed into a strain skill that aggregates
//! them into a rating.
//!
//! ## Usage
//!
//! ```
//! use rosu_taiko_stamina::TaikoStamina;
//!
//! let content = "osu file format v14
//!
//! [General]
//! Mode: 1
//!
//! [HitObjects]
//! 256,192,1000,1,0,0:0:0:0:
//! 256,192,1100,1,0,0:0:0:0:
//! 256,192,1200,1,0,0:0:0:0:
//! 256,192,1300,1,0,0:0:0:0:
//! ";
//!
//! let values = TaikoStamina::new()
//!     .mods(64_u32) // DT
//!     .calculate_bytes(content.as_bytes())
//!     .unwrap();
//!
//! assert_eq!(values.len(), 3);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features enabled |
//! | `parallel` | Evaluate difficulty objects on a thread pool | [`rayon`]
//! | `tracing` | Log calculations and rejected timelines | [`tracing`]
//! | `capi` | Expose a C API |
//!
//! [`rayon`]: https://docs.rs/rayon
//! [`tracing`]: https://docs.rs/tracing

#![deny(rustdoc::broken_intra_doc_links, rustdoc::missing_crate_level_docs)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

pub mod model;
pub mod taiko;

#[cfg(feature = "capi")]
pub mod capi;

pub use rosu_map::Beatmap;

pub use crate::{
    model::hit_object::{HitColor, HitType, TaikoObject},
    taiko::{
        difficulty::{
            evaluators::StaminaEvaluator,
            object::{TaikoDifficultyObject, TaikoDifficultyObjects},
        },
        StaminaError, StaminaValues, TaikoStamina, TimelineError,
    },
};
