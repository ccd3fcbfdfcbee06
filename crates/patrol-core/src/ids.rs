//! Strongly typed identifier wrappers.
//!
//! Agents and routes live in dense `Vec`s, so their ids are plain `u32`
//! indices wrapped in distinct types — handing an `AgentId` to a route
//! lookup is a compile error instead of a silent off-by-table bug.  The
//! inner value stays `pub` for storage code; everything else should go
//! through [`index()`](AgentId::index).

use std::fmt;

/// Define a `u32`-backed id type with a display label.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident = $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Reserved "not an id" value (`u32::MAX`); also the `Default`,
            /// so an uninitialized id is visibly invalid.
            pub const INVALID: $name = $name(u32::MAX);

            /// The id as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense index of an agent in the simulation's parallel storage.
    pub struct AgentId = "agent";
}

typed_id! {
    /// Dense index of a patrol route in a scenario's route table.
    pub struct RouteId = "route";
}
