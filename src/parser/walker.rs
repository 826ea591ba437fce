use chrono::{DateTime, FixedOffset};
use ego_tree::NodeRef;
use scraper::Node;
use tracing::{debug, warn};

use super::date;
use super::fields;
use super::nav::NodeExt;
use crate::config::Settings;
use crate::model::{Artist, Lineup};

/// Traversal state for one pass over one document.
///
/// Schedule panels come before the cards they date, so the most recent panel
/// date is carried forward in document order until the next panel replaces it.
pub struct Walker<'s> {
    settings: &'s Settings,
    current_date: Option<DateTime<FixedOffset>>,
    lineup: Lineup,
}

impl<'s> Walker<'s> {
    pub fn new(settings: &'s Settings) -> Self {
        Self {
            settings,
            current_date: None,
            lineup: Lineup::new(),
        }
    }

    /// Dispatch on one node. Traversal order is the caller's concern.
    pub fn visit(&mut self, node: NodeRef<'_, Node>) {
        let settings = self.settings;
        let markers = &settings.markers;

        if node.is_tag("div") && node.has_class(&markers.panel_class) {
            match date::normalize(node, settings.year, markers) {
                Ok(date) => {
                    if date.is_none() {
                        warn!("schedule panel names an unknown date; following cards get no set time");
                    }
                    self.current_date = date;
                }
                Err(e) => warn!("skipping schedule panel: {}", e),
            }
        } else if node.is_tag("div") && node.has_class(&markers.card_class) {
            let artist = Artist {
                name: fields::name(node),
                img: fields::image_url(node),
                stage: fields::stage(node, markers),
                set_time: self.current_date,
            };
            debug!(name = %artist.name, stage = %artist.stage, "artist card");
            self.lineup.push(artist);
        }
    }

    pub fn finish(self) -> Lineup {
        self.lineup
    }
}

/// Walk `root` and collect every artist card under it.
///
/// `descendants` yields `root` and everything below it in pre-order without
/// recursion, so nesting depth is bounded only by the tree itself. Children of
/// a matched card are still visited.
pub fn walk(root: NodeRef<'_, Node>, settings: &Settings) -> Lineup {
    let mut walker = Walker::new(settings);
    for node in root.descendants() {
        walker.visit(node);
    }
    walker.finish()
}
