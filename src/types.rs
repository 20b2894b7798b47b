//! Closed value sets used by Trello models, request schemas and OAuth URLs.
//!
//! Each enum carries an `ALL` table listing its members. Parsing, serde and
//! random sampling all go through that table, so adding a member in one place
//! is enough.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, TrelloError};

/// Declares a string-backed enum with an `ALL` member table.
///
/// The generated type implements `as_str`, `Display`, `FromStr` (failing with
/// [`TrelloError::Validation`]) and serde in terms of the wire strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TrelloError;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        TrelloError::validation(
                            $label,
                            format!("'{s}' is not one of: {}", allowed.join(", ")),
                        )
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Colors accepted for Trello labels.
    LabelColor as "LabelColor" {
        Yellow => "yellow",
        Purple => "purple",
        Blue => "blue",
        Red => "red",
        Green => "green",
        Orange => "orange",
        Black => "black",
        Sky => "sky",
        Pink => "pink",
        Lime => "lime",
        GreenLight => "green_light",
    }
}

impl LabelColor {
    /// Pick a color uniformly at random from [`LabelColor::ALL`].
    pub fn random() -> Self {
        // ALL is a non-empty const table.
        Self::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Self::Green)
    }
}

wire_enum! {
    /// Named card position directives.
    CardPos as "CardPos" {
        Top => "top",
        Bottom => "bottom",
    }
}

wire_enum! {
    /// How Trello hands the token back after authorization.
    OAuthCallbackMethod as "OAuthCallbackMethod" {
        PostMessage => "postMessage",
        Fragment => "fragment",
    }
}

wire_enum! {
    /// Permission scopes requested during authorization.
    OAuthScope as "OAuthScope" {
        Read => "read",
        Write => "write",
        Account => "account",
    }
}

wire_enum! {
    /// Lifetime of an issued token.
    OAuthExpiration as "OAuthExpiration" {
        OneHour => "1hour",
        OneDay => "1day",
        ThirtyDays => "30days",
        Never => "never",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_label_color_parses_every_member() {
        for color in LabelColor::ALL {
            assert_eq!(color.as_str().parse::<LabelColor>().unwrap(), *color);
        }
        assert_eq!("green_light".parse::<LabelColor>().unwrap(), LabelColor::GreenLight);
    }

    #[test]
    fn test_label_color_rejects_unknown() {
        let err = "magenta".parse::<LabelColor>().unwrap_err();
        match err {
            TrelloError::Validation { entity, message } => {
                assert_eq!(entity, "LabelColor");
                assert!(message.contains("magenta"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_card_pos_rejects_middle() {
        assert_eq!("top".parse::<CardPos>().unwrap(), CardPos::Top);
        assert!("middle".parse::<CardPos>().is_err());
        // Case matters on the wire.
        assert!("Top".parse::<CardPos>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&OAuthExpiration::ThirtyDays).unwrap();
        assert_eq!(json, "\"30days\"");

        let color: LabelColor = serde_json::from_str("\"sky\"").unwrap();
        assert_eq!(color, LabelColor::Sky);

        let bad: core::result::Result<LabelColor, _> = serde_json::from_str("\"teal\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_random_covers_all_colors() {
        let mut seen = HashSet::new();
        for _ in 0..5000 {
            let color = LabelColor::random();
            assert!(LabelColor::ALL.contains(&color));
            seen.insert(color);
            if seen.len() == LabelColor::ALL.len() {
                break;
            }
        }
        assert_eq!(seen.len(), LabelColor::ALL.len());
    }
}
