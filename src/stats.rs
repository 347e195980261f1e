//! Aggregates behind the statistics view. Nothing here is cached; the view
//! asks for a fresh report every time it is rendered.

use anyhow::Result;
use rusqlite::Connection;

use crate::db::{count_artists_by_profession, count_venues_by_zone, mean_price_by_profession};
use crate::models::{Profession, Zone};

/// One slice of a proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Share<K> {
    pub key: K,
    pub count: usize,
    /// Fraction of the whole table, in `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeanPrice {
    pub profession: Profession,
    pub mean: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    /// Empty when no artist is registered.
    pub artists_by_profession: Vec<Share<Profession>>,
    /// Only present once more than one artist is registered.
    pub mean_price: Option<Vec<MeanPrice>>,
    /// Empty when no venue is registered.
    pub venues_by_zone: Vec<Share<Zone>>,
}

fn to_shares<K>(counts: Vec<(K, usize)>) -> Vec<Share<K>> {
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    counts
        .into_iter()
        .map(|(key, count)| Share {
            key,
            count,
            ratio: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect()
}

pub fn compute_stats(conn: &Connection) -> Result<StatsReport> {
    let artists_by_profession = to_shares(count_artists_by_profession(conn)?);
    let artist_total: usize = artists_by_profession.iter().map(|share| share.count).sum();

    let mean_price = if artist_total > 1 {
        let means = mean_price_by_profession(conn)?
            .into_iter()
            .map(|(profession, mean)| MeanPrice { profession, mean })
            .collect();
        Some(means)
    } else {
        None
    };

    Ok(StatsReport {
        artists_by_profession,
        mean_price,
        venues_by_zone: to_shares(count_venues_by_zone(conn)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtistDraft, VenueDraft};
    use crate::registry::Registry;
    use crate::session::Session;

    fn register(session: &Session, name: &str, profession: Profession, price: u32) -> Result<()> {
        session.artists().register(&ArtistDraft {
            name: name.to_string(),
            profession,
            price,
            ..ArtistDraft::default()
        })?;
        Ok(())
    }

    #[test]
    fn mean_price_groups_by_profession() -> Result<()> {
        let session = Session::open()?;
        register(&session, "A", Profession::Musician, 100)?;
        register(&session, "B", Profession::Musician, 300)?;
        register(&session, "C", Profession::Dj, 50)?;

        let report = session.statistics()?;
        let means = report.mean_price.expect("more than one artist");
        assert_eq!(
            means,
            vec![
                MeanPrice {
                    profession: Profession::Musician,
                    mean: 200.0,
                },
                MeanPrice {
                    profession: Profession::Dj,
                    mean: 50.0,
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn single_artist_has_no_mean_price_chart() -> Result<()> {
        let session = Session::open()?;
        register(&session, "Luna", Profession::Dj, 150)?;

        let report = session.statistics()?;
        assert!(report.mean_price.is_none());
        assert_eq!(report.artists_by_profession.len(), 1);
        assert_eq!(report.artists_by_profession[0].ratio, 1.0);
        Ok(())
    }

    #[test]
    fn empty_session_yields_empty_report() -> Result<()> {
        let session = Session::open()?;
        assert_eq!(session.statistics()?, StatsReport::default());
        Ok(())
    }

    #[test]
    fn shares_split_venues_by_zone() -> Result<()> {
        let session = Session::open()?;
        for (name, zone) in [
            ("Bar Sur", Zone::SanTelmo),
            ("La Cueva", Zone::Palermo),
            ("El Federal", Zone::SanTelmo),
            ("Niceto", Zone::Palermo),
        ] {
            session.venues().register(&VenueDraft {
                name: name.to_string(),
                zone,
                ..VenueDraft::default()
            })?;
        }

        let report = session.statistics()?;
        assert!(report.artists_by_profession.is_empty());
        assert_eq!(
            report.venues_by_zone,
            vec![
                Share {
                    key: Zone::SanTelmo,
                    count: 2,
                    ratio: 0.5,
                },
                Share {
                    key: Zone::Palermo,
                    count: 2,
                    ratio: 0.5,
                },
            ]
        );
        Ok(())
    }
}
