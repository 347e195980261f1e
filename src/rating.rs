//! Star rating control shown under each artist card.
//!
//! Submitting a rating only produces a confirmation. The registry's `rating`
//! and `reviews` fields are left untouched; there is no aggregation of
//! submitted scores.

use std::fmt;

use tracing::info;

use crate::models::ArtistProfile;

/// Bounded 1-5 score, starting at the middle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingInput(u8);

impl RatingInput {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move the score by `delta` steps, saturating at the bounds.
    pub fn adjust(&mut self, delta: i8) {
        let next = (self.0 as i16 + delta as i16).clamp(Self::MIN as i16, Self::MAX as i16);
        self.0 = next as u8;
    }

    /// Filled and hollow stars, e.g. `★★★☆☆`.
    pub fn stars(self) -> String {
        let filled = self.0 as usize;
        let hollow = Self::MAX as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(hollow))
    }
}

impl Default for RatingInput {
    fn default() -> Self {
        Self(3)
    }
}

/// Confirmation handed back after a rating is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingReceipt {
    pub artist_id: i64,
    pub artist_name: String,
    pub score: u8,
}

impl fmt::Display for RatingReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⭐ Calificación {}/{} enviada para {}",
            self.score,
            RatingInput::MAX,
            self.artist_name
        )
    }
}

/// Acknowledge a rating for `artist`. The score is not stored anywhere.
pub fn submit_rating(artist: &ArtistProfile, input: RatingInput) -> RatingReceipt {
    info!(
        artist_id = artist.id,
        name = %artist.name,
        score = input.value(),
        "rating submitted (not persisted)"
    );
    RatingReceipt {
        artist_id: artist.id,
        artist_name: artist.name.clone(),
        score: input.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtistDraft, ArtistFilter, Profession, Zone};
    use crate::registry::Registry;
    use crate::session::Session;
    use anyhow::Result;
    use rstest::rstest;

    #[rstest]
    #[case(3, 1, 4)]
    #[case(5, 1, 5)]
    #[case(1, -1, 1)]
    #[case(2, -4, 1)]
    fn adjust_saturates_at_bounds(#[case] start: u8, #[case] delta: i8, #[case] expected: u8) {
        let mut input = RatingInput::new(start);
        input.adjust(delta);
        assert_eq!(input.value(), expected);
    }

    #[test]
    fn default_is_mid_value() {
        assert_eq!(RatingInput::default().value(), 3);
        assert_eq!(RatingInput::default().stars(), "★★★☆☆");
        assert_eq!(RatingInput::new(9).value(), 5);
        assert_eq!(RatingInput::new(0).value(), 1);
    }

    #[test]
    fn submitted_rating_is_confirmed_but_not_stored() -> Result<()> {
        let session = Session::open()?;
        let artists = session.artists();
        let luna = artists
            .register(&ArtistDraft {
                name: "Luna".to_string(),
                profession: Profession::Dj,
                zone: Zone::Palermo,
                price: 150,
                ..ArtistDraft::default()
            })?
            .expect("registered");

        let receipt = submit_rating(&luna, RatingInput::new(4));
        let message = receipt.to_string();
        assert!(message.contains("Luna"));
        assert!(message.contains("4/5"));

        let stored = artists.list_filtered(&ArtistFilter::default())?;
        assert_eq!(stored[0].rating, 0.0);
        assert_eq!(stored[0].reviews, "");
        Ok(())
    }
}
