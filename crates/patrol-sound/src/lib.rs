//! `patrol-sound` — the sound seam between agents and the outside world.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`event`] | `SoundEvent`, `SoundKind` — what an agent emits            |
//! | [`path`]  | `PathPoint` — one record of a sound-intensity path         |
//! | [`field`] | `SoundField` sink trait, `NullSoundField`, `RecordingSoundField` |
//!
//! Sound *propagation* — turning emitted events into intensity paths — is
//! deliberately outside this workspace.  Agents emit [`SoundEvent`]s into a
//! [`SoundField`]; whatever implements the field may later answer with an
//! intensity path via the behavior layer's `notify_sound_source`.

pub mod event;
pub mod field;
pub mod path;


pub use event::{SoundEvent, SoundKind};
pub use field::{NullSoundField, RecordingSoundField, SoundField};
pub use path::PathPoint;
