use chrono::{DateTime, FixedOffset};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One performer entry, in the order its card appears on the page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub img: String,
    pub stage: String,
    /// `None` when no panel date preceded the card or the date was unparseable.
    pub set_time: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineup {
    artists: Vec<Artist>,
}

impl Lineup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, artist: Artist) {
        self.artists.push(artist);
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn size(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

impl From<Vec<Artist>> for Lineup {
    fn from(artists: Vec<Artist>) -> Self {
        Self { artists }
    }
}

impl Serialize for Lineup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Lineup", 2)?;
        s.serialize_field("artists", &self.artists)?;
        s.serialize_field("size", &self.size())?;
        s.end()
    }
}
