//! Navigation targets and the page description each one renders to.
//!
//! `render` is a pure read of the session: the app calls it after every input
//! and draws whatever comes back, so no view keeps derived state between
//! frames.

use std::fmt;

use anyhow::Result;

use crate::models::{ArtistFilter, ArtistProfile, Profession, VenueFilter, VenueProfile, Zone};
use crate::registry::Registry;
use crate::session::Session;
use crate::stats::StatsReport;

/// The six sidebar entries. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    RegisterArtist,
    RegisterVenue,
    SearchArtists,
    SearchVenues,
    Statistics,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Home,
        View::RegisterArtist,
        View::RegisterVenue,
        View::SearchArtists,
        View::SearchVenues,
        View::Statistics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Inicio",
            View::RegisterArtist => "Registrar Artista",
            View::RegisterVenue => "Registrar Restaurante",
            View::SearchArtists => "Buscar Artistas",
            View::SearchVenues => "Buscar Restaurantes",
            View::Statistics => "Estadísticas",
        }
    }

    pub fn index(self) -> usize {
        View::ALL
            .iter()
            .position(|view| *view == self)
            .unwrap_or_default()
    }

    /// Step through the menu, wrapping at both ends.
    pub fn offset(self, step: isize) -> View {
        let len = View::ALL.len() as isize;
        let next = (self.index() as isize + step).rem_euclid(len);
        View::ALL[next as usize]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current filter selections for both search views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub artists: ArtistFilter,
    pub venues: VenueFilter,
}

/// What the active view shows, computed fresh from the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home {
        artist_count: usize,
        venue_count: usize,
    },
    RegisterArtist,
    RegisterVenue,
    SearchArtists {
        professions: Vec<Profession>,
        zones: Vec<Zone>,
        results: Vec<ArtistProfile>,
    },
    SearchVenues {
        zones: Vec<Zone>,
        results: Vec<VenueProfile>,
    },
    Statistics(StatsReport),
}

pub fn render(view: View, session: &Session, query: &SearchQuery) -> Result<Page> {
    let page = match view {
        View::Home => Page::Home {
            artist_count: session.artists().count()?,
            venue_count: session.venues().count()?,
        },
        View::RegisterArtist => Page::RegisterArtist,
        View::RegisterVenue => Page::RegisterVenue,
        View::SearchArtists => {
            let artists = session.artists();
            Page::SearchArtists {
                professions: artists.professions()?,
                zones: artists.zones()?,
                results: artists.list_filtered(&query.artists)?,
            }
        }
        View::SearchVenues => {
            let venues = session.venues();
            Page::SearchVenues {
                zones: venues.zones()?,
                results: venues.list_filtered(&query.venues)?,
            }
        }
        View::Statistics => Page::Statistics(session.statistics()?),
    };
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtistDraft, VenueDraft};

    #[test]
    fn home_reports_registry_sizes() -> Result<()> {
        let session = Session::open()?;
        session.artists().register(&ArtistDraft {
            name: "Luna".to_string(),
            profession: Profession::Dj,
            zone: Zone::Palermo,
            price: 150,
            ..ArtistDraft::default()
        })?;
        session.venues().register(&VenueDraft {
            name: "Bar Sur".to_string(),
            zone: Zone::SanTelmo,
            ..VenueDraft::default()
        })?;

        let page = render(View::Home, &session, &SearchQuery::default())?;
        assert_eq!(
            page,
            Page::Home {
                artist_count: 1,
                venue_count: 1,
            }
        );
        Ok(())
    }

    #[test]
    fn search_page_reflects_query() -> Result<()> {
        let session = Session::open()?;
        for (name, zone) in [("Bar Sur", Zone::SanTelmo), ("Niceto", Zone::Palermo)] {
            session.venues().register(&VenueDraft {
                name: name.to_string(),
                zone,
                ..VenueDraft::default()
            })?;
        }
        let query = SearchQuery {
            venues: VenueFilter {
                zone: Some(Zone::Palermo),
            },
            ..SearchQuery::default()
        };

        let Page::SearchVenues { zones, results } = render(View::SearchVenues, &session, &query)?
        else {
            panic!("expected venue search page");
        };
        assert_eq!(zones, vec![Zone::SanTelmo, Zone::Palermo]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Niceto");
        Ok(())
    }

    #[test]
    fn menu_offset_wraps() {
        assert_eq!(View::Home.offset(-1), View::Statistics);
        assert_eq!(View::Statistics.offset(1), View::Home);
        assert_eq!(View::RegisterVenue.offset(2), View::SearchVenues);
    }
}
