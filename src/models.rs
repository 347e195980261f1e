//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. These types stay light-weight data holders so other layers can focus
//! on presentation and querying.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a stored or typed label does not name a known category.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("unknown profession label: {0}")]
    Profession(String),
    #[error("unknown zone label: {0}")]
    Zone(String),
}

/// What kind of act an artist offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profession {
    #[default]
    Singer,
    Musician,
    StandUp,
    Actor,
    Dj,
    Other,
}

impl Profession {
    /// Every profession in the order the registration selector offers them.
    pub const ALL: [Profession; 6] = [
        Profession::Singer,
        Profession::Musician,
        Profession::StandUp,
        Profession::Actor,
        Profession::Dj,
        Profession::Other,
    ];

    /// User-facing label. Also the value stored in the `artists` table.
    pub fn label(self) -> &'static str {
        match self {
            Profession::Singer => "Cantante",
            Profession::Musician => "Músico",
            Profession::StandUp => "Stand Up",
            Profession::Actor => "Actor",
            Profession::Dj => "DJ",
            Profession::Other => "Otro",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profession {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profession::ALL
            .into_iter()
            .find(|profession| profession.label() == s)
            .ok_or_else(|| LabelError::Profession(s.to_string()))
    }
}

/// Buenos Aires neighborhoods used to place artists and venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Zone {
    #[default]
    Palermo,
    Recoleta,
    Belgrano,
    SanTelmo,
    Microcentro,
    Almagro,
    Caballito,
    Other,
}

impl Zone {
    pub const ALL: [Zone; 8] = [
        Zone::Palermo,
        Zone::Recoleta,
        Zone::Belgrano,
        Zone::SanTelmo,
        Zone::Microcentro,
        Zone::Almagro,
        Zone::Caballito,
        Zone::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Zone::Palermo => "Palermo",
            Zone::Recoleta => "Recoleta",
            Zone::Belgrano => "Belgrano",
            Zone::SanTelmo => "San Telmo",
            Zone::Microcentro => "Microcentro",
            Zone::Almagro => "Almagro",
            Zone::Caballito => "Caballito",
            Zone::Other => "Otro",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Zone {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .into_iter()
            .find(|zone| zone.label() == s)
            .ok_or_else(|| LabelError::Zone(s.to_string()))
    }
}

/// A registered artist. The `id` is assigned by the store at creation time so
/// rows with the same display name can still be told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistProfile {
    pub id: i64,
    pub name: String,
    pub profession: Profession,
    pub style: String,
    /// Approximate fee in whole pesos.
    pub price: u32,
    pub zone: Zone,
    pub contact: String,
    pub social: String,
    pub rating: f64,
    pub reviews: String,
}

impl ArtistProfile {
    /// Header used for the collapsible card in search results.
    pub fn card_title(&self) -> String {
        format!("🎭 {} - {}", self.name, self.profession)
    }
}

/// A registered restaurant or bar.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueProfile {
    pub id: i64,
    pub name: String,
    pub zone: Zone,
    pub address: String,
    pub contact: String,
    pub social: String,
    pub rating: f64,
    pub reviews: String,
}

impl VenueProfile {
    pub fn card_title(&self) -> String {
        format!("🍽️ {}", self.name)
    }
}

/// User input for a new artist, before it is given an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistDraft {
    pub name: String,
    pub profession: Profession,
    pub style: String,
    pub price: u32,
    pub zone: Zone,
    pub contact: String,
    pub social: String,
}

/// User input for a new venue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueDraft {
    pub name: String,
    pub zone: Zone,
    pub address: String,
    pub contact: String,
    pub social: String,
}

/// Equality filters for the artist listing. `None` matches every value and is
/// shown as "Todos"/"Todas".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtistFilter {
    pub profession: Option<Profession>,
    pub zone: Option<Zone>,
}

/// Equality filter for the venue listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VenueFilter {
    pub zone: Option<Zone>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Músico", Profession::Musician)]
    #[case("Stand Up", Profession::StandUp)]
    #[case("DJ", Profession::Dj)]
    fn profession_labels_parse(#[case] label: &str, #[case] expected: Profession) {
        assert_eq!(label.parse::<Profession>(), Ok(expected));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            "Mago".parse::<Profession>(),
            Err(LabelError::Profession("Mago".to_string()))
        );
        assert_eq!(
            "Narnia".parse::<Zone>(),
            Err(LabelError::Zone("Narnia".to_string()))
        );
    }

    #[test]
    fn other_zone_uses_spanish_label() {
        assert_eq!(Zone::Other.to_string(), "Otro");
        assert_eq!("San Telmo".parse::<Zone>(), Ok(Zone::SanTelmo));
    }

    #[test]
    fn defaults_are_first_choice() {
        assert_eq!(Profession::default(), Profession::ALL[0]);
        assert_eq!(Zone::default(), Zone::ALL[0]);
        assert_eq!(ArtistDraft::default().profession, Profession::Singer);
        assert_eq!(VenueDraft::default().zone, Zone::Palermo);
    }
}
