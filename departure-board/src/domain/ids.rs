//! Opaque provider identifiers.

use std::fmt;

/// Error returned when an identifier is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: cannot be empty")]
pub struct InvalidId {
    kind: &'static str,
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, rejecting empty strings.
            pub fn new(s: impl Into<String>) -> Result<Self, InvalidId> {
                let s = s.into();
                if s.is_empty() {
                    return Err(InvalidId { kind: $kind });
                }
                Ok($name(s))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the identifier and returns the inner String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// A physical stop (station) identifier as issued by the provider.
    ///
    /// ```
    /// use departure_board::domain::StopId;
    ///
    /// let id = StopId::new("stop:chatelet").unwrap();
    /// assert_eq!(id.as_str(), "stop:chatelet");
    /// assert!(StopId::new("").is_err());
    /// ```
    StopId,
    "stop"
);

string_id!(
    /// A vehicle run identifier. Departures carry the id of the journey
    /// they belong to, so the same value keys both.
    JourneyId,
    "journey"
);

string_id!(
    /// A line (route) identifier.
    LineId,
    "line"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_empty() {
        assert!(StopId::new("").is_err());
        assert!(JourneyId::new(String::new()).is_err());
        assert!(LineId::new("").is_err());
    }

    #[test]
    fn error_names_kind() {
        let err = JourneyId::new("").unwrap_err();
        assert_eq!(err.to_string(), "invalid journey id: cannot be empty");
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::new("S1").unwrap();
        assert_eq!(format!("{id}"), "S1");
        assert_eq!(format!("{id:?}"), "StopId(S1)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StopId::new("S1").unwrap());
        assert!(set.contains(&StopId::new("S1").unwrap()));
        assert!(!set.contains(&StopId::new("S2").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any non-empty string is a valid identifier and round-trips
        #[test]
        fn nonempty_roundtrip(s in ".+") {
            let id = JourneyId::new(s.clone()).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
            prop_assert_eq!(id.into_inner(), s);
        }
    }
}
