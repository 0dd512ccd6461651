//! Artist personas shown on the public landing page.
//!
//! The site presents one artist under two identities. Visitors toggle
//! between them; the admin chooses which one a first visit lands on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const PERSONA_PRODUCER: &str = "producer";
pub const PERSONA_BEATBOXER: &str = "beatboxer";

/// All valid persona values, in display order.
pub const VALID_PERSONAS: &[&str] = &[PERSONA_PRODUCER, PERSONA_BEATBOXER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistPersona {
    /// Lo-fi music producer. The landing page shows tracks.
    #[default]
    Producer,
    /// Beatbox artist. The landing page shows performance videos.
    Beatboxer,
}

impl ArtistPersona {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtistPersona::Producer => PERSONA_PRODUCER,
            ArtistPersona::Beatboxer => PERSONA_BEATBOXER,
        }
    }

    /// Whether the landing page lists tracks for this persona.
    pub fn shows_tracks(self) -> bool {
        matches!(self, ArtistPersona::Producer)
    }

    /// Whether the landing page lists YouTube videos for this persona.
    pub fn shows_videos(self) -> bool {
        matches!(self, ArtistPersona::Beatboxer)
    }

    /// The other persona, as flipped by the landing-page toggle.
    pub fn toggled(self) -> Self {
        match self {
            ArtistPersona::Producer => ArtistPersona::Beatboxer,
            ArtistPersona::Beatboxer => ArtistPersona::Producer,
        }
    }
}

impl fmt::Display for ArtistPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtistPersona {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            PERSONA_PRODUCER => Ok(ArtistPersona::Producer),
            PERSONA_BEATBOXER => Ok(ArtistPersona::Beatboxer),
            other => Err(CoreError::Validation(format!(
                "Invalid persona '{other}'. Must be one of: {}",
                VALID_PERSONAS.join(", ")
            ))),
        }
    }
}
