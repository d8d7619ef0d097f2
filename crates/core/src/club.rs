use strum::IntoEnumIterator;

/// The clubs a shot can be attributed to, in bag order.
///
/// `Display` and `FromStr` use the short labels players see (`7I`, `PW`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum Club {
    #[strum(serialize = "Driver")]
    Driver,
    #[strum(serialize = "3W")]
    ThreeWood,
    #[strum(serialize = "5W")]
    FiveWood,
    #[strum(serialize = "4I")]
    FourIron,
    #[strum(serialize = "5I")]
    FiveIron,
    #[strum(serialize = "6I")]
    SixIron,
    #[strum(serialize = "7I")]
    SevenIron,
    #[strum(serialize = "8I")]
    EightIron,
    #[strum(serialize = "9I")]
    NineIron,
    #[strum(serialize = "PW")]
    PitchingWedge,
    #[strum(serialize = "GW")]
    GapWedge,
    #[strum(serialize = "SW")]
    SandWedge,
    #[strum(serialize = "LW")]
    LobWedge,
    #[strum(serialize = "Putter")]
    Putter,
}

impl Club {
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Club> {
        Club::iter()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_bag_order() {
        let labels: Vec<_> = Club::all().map(|club| club.label()).collect();
        assert_eq!(
            labels,
            [
                "Driver", "3W", "5W", "4I", "5I", "6I", "7I", "8I", "9I", "PW", "GW", "SW", "LW",
                "Putter"
            ]
        );
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(Club::from_str("7I").unwrap(), Club::SevenIron);
        assert_eq!(Club::from_str("Putter").unwrap(), Club::Putter);
        assert!(Club::from_str("2I").is_err());
    }

    #[test]
    fn test_display_matches_label() {
        for club in Club::all() {
            assert_eq!(club.to_string(), club.label());
        }
    }
}
