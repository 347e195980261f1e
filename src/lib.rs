//! Core library surface for ATR Conect, a terminal directory that connects
//! independent artists with restaurants and bars in Buenos Aires.
//!
//! Everything lives in a [`Session`]: two registries backed by a private
//! in-memory SQLite store that disappears when the session is dropped.
pub mod db;
pub mod logging;
pub mod models;
pub mod rating;
pub mod registry;
pub mod session;
pub mod stats;
pub mod ui;
pub mod view;

/// Registry types and the shared trait they implement.
pub use registry::{ArtistRegistry, Registry, VenueRegistry};

pub use models::{
    ArtistDraft, ArtistFilter, ArtistProfile, Profession, VenueDraft, VenueFilter, VenueProfile,
    Zone,
};
pub use session::Session;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
