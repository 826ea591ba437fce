//! Positional field extraction from an artist card.
//!
//! The card's inner nodes carry no stable labels, so every field is reached by
//! a fixed number of child/sibling hops. Whitespace text and comment nodes
//! count as hops. Each extractor returns `""` on the first absent hop.
//!
//! ```html
//! <div class="favorite-item">
//!     <img class="favorite-item__img" src="./lineup_files/07b05349.jpg" alt="Da Tweekaz">
//!     <div class="favorite-item__info">
//!         <h4 class="headline">Da Tweekaz</h4>
//!         <p>Kinetic Field</p>
//!     </div>
//! </div>
//! ```

use ego_tree::NodeRef;
use scraper::Node;

use super::nav::{Cursor, NodeExt};
use crate::config::Markers;

/// card → first child → next sibling
fn image_node(card: NodeRef<'_, Node>) -> Cursor<'_> {
    Cursor::at(card).first_child().next_sibling()
}

pub fn image_url(card: NodeRef<'_, Node>) -> String {
    image_node(card).attr("src").unwrap_or_default().to_string()
}

pub fn name(card: NodeRef<'_, Node>) -> String {
    image_node(card)
        .next_sibling()
        .next_sibling()
        .nth_child(1)
        .first_child()
        .text()
        .unwrap_or_default()
        .to_string()
}

pub fn stage(card: NodeRef<'_, Node>, markers: &Markers) -> String {
    let info = Cursor::at(card)
        .first_child()
        .next_sibling()
        .next_sibling()
        .next_sibling()
        .filter(|n| n.has_class(&markers.info_class));

    info.first_child()
        .next_sibling()
        .next_sibling()
        .next_sibling()
        .filter(|n| n.is_tag("p"))
        .first_child()
        .text()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const CARD: &str = r#"<html><body>
<div class="favorite-item">
    <img class="favorite-item__img" src="./lineup_files/07b05349-da5b-11ed-b991-0ee6b8365494.jpg" alt="Da Tweekaz">
    <div class="favorite-item__info">
        <h4 class="headline">Da Tweekaz</h4>
        <p>Kinetic Field</p>
        <!-- <p></p> -->
    </div>
    <!-- <div class="favorite-item__action">
        <img src="/wp-content/assets/splashpages/app-sharing/lineup/img/heart.svg" alt="heart">
    </div> -->
</div>
</body></html>"#;

    fn card_of(html: &Html) -> NodeRef<'_, Node> {
        html.tree
            .root()
            .descendants()
            .find(|n| n.has_class("favorite-item"))
            .unwrap()
    }

    fn parse(markup: &str) -> Html {
        Html::parse_document(markup)
    }

    #[test]
    fn full_card() {
        let html = parse(CARD);
        let card = card_of(&html);
        assert_eq!(
            image_url(card),
            "./lineup_files/07b05349-da5b-11ed-b991-0ee6b8365494.jpg"
        );
        assert_eq!(name(card), "Da Tweekaz");
        assert_eq!(stage(card, &Markers::default()), "Kinetic Field");
    }

    #[test]
    fn empty_stage_paragraph() {
        let html = parse(&CARD.replace("<p>Kinetic Field</p>", "<p></p>"));
        let card = card_of(&html);
        assert_eq!(name(card), "Da Tweekaz");
        assert_eq!(stage(card, &Markers::default()), "");
    }

    #[test]
    fn stage_requires_paragraph_tag() {
        let html = parse(&CARD.replace("<p>Kinetic Field</p>", "<span>Kinetic Field</span>"));
        assert_eq!(stage(card_of(&html), &Markers::default()), "");
    }

    #[test]
    fn stage_requires_info_class() {
        let html = parse(&CARD.replace("favorite-item__info", "favorite-item__body"));
        let card = card_of(&html);
        assert_eq!(stage(card, &Markers::default()), "");
        // name does not re-check the container class
        assert_eq!(name(card), "Da Tweekaz");
    }

    #[test]
    fn missing_image_node() {
        let html = parse("<html><body>\n<div class=\"favorite-item\">\n</div>\n</body></html>");
        let card = card_of(&html);
        assert_eq!(image_url(card), "");
        assert_eq!(name(card), "");
        assert_eq!(stage(card, &Markers::default()), "");
    }

    #[test]
    fn empty_card() {
        let html = parse("<html><body><div class=\"favorite-item\"></div></body></html>");
        let card = card_of(&html);
        assert_eq!(image_url(card), "");
        assert_eq!(name(card), "");
        assert_eq!(stage(card, &Markers::default()), "");
    }

    #[test]
    fn image_without_src() {
        let html = parse(&CARD.replace(
            "src=\"./lineup_files/07b05349-da5b-11ed-b991-0ee6b8365494.jpg\" ",
            "",
        ));
        let card = card_of(&html);
        assert_eq!(image_url(card), "");
        assert_eq!(name(card), "Da Tweekaz");
    }

    #[test]
    fn extra_comment_shifts_hops() {
        // positional: a stray comment before the image moves every field
        let html = parse(&CARD.replace(
            "<div class=\"favorite-item\">\n",
            "<div class=\"favorite-item\"><!-- ad -->\n",
        ));
        let card = card_of(&html);
        assert_eq!(image_url(card), "");
        assert_eq!(name(card), "");
    }

    #[test]
    fn custom_info_marker() {
        let html = parse(&CARD.replace("favorite-item__info", "artist__info"));
        let markers = Markers {
            info_class: "artist__info".into(),
            ..Markers::default()
        };
        assert_eq!(stage(card_of(&html), &markers), "Kinetic Field");
    }
}
