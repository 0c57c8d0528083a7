//! Review strip component.
//!
//! Lays the review cards out side by side on one wide canvas and shows the
//! window of it selected by the strip's scroll offset.

use crate::hero::{REVIEWS_EMPTY, REVIEWS_LOADING};
use crate::reviews::ReviewEntry;
use crate::rotation::{StripFrame, StripView};

use super::text_layout::{column_window, fit_to_width, wrap_words};

/// Width of one review card, in columns.
pub const CARD_WIDTH: usize = 30;

/// Gap between adjacent cards, in columns.
pub const CARD_GAP: usize = 2;

/// Lines of review text shown per card.
const TEXT_LINES: usize = 2;

/// Scroll distance of one card plus its gap.
#[must_use]
pub const fn card_step() -> usize {
    CARD_WIDTH.saturating_add(CARD_GAP)
}

/// Total width of `count` cards laid side by side.
#[must_use]
pub const fn content_width(count: usize) -> usize {
    count.saturating_mul(card_step()).saturating_sub(CARD_GAP)
}

/// Context for rendering the review strip.
#[derive(Debug, Clone)]
pub struct StripViewContext<'a> {
    /// Current strip view.
    pub view: &'a StripView<'a>,
    /// Viewport width in columns.
    pub max_width: usize,
}

/// Stateless renderer for the review strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewStripComponent;

impl ReviewStripComponent {
    /// Renders the strip as newline-terminated lines.
    #[must_use]
    pub fn view(ctx: &StripViewContext<'_>) -> String {
        match ctx.view {
            StripView::Loading => format!("  {REVIEWS_LOADING}\n"),
            StripView::Empty => format!("  {REVIEWS_EMPTY}\n"),
            StripView::Cards(frame) => Self::render_cards(frame, ctx.max_width),
        }
    }

    fn render_cards(frame: &StripFrame<'_>, max_width: usize) -> String {
        let cards: Vec<Vec<String>> = frame.entries.iter().map(Self::card_lines).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        let gap = " ".repeat(CARD_GAP);
        let blank = " ".repeat(CARD_WIDTH);
        let offset = usize::try_from(frame.offset).unwrap_or(usize::MAX);

        let mut output = String::new();
        for row in 0..height {
            let canvas = cards
                .iter()
                .map(|card| card.get(row).unwrap_or(&blank).as_str())
                .collect::<Vec<_>>()
                .join(&gap);
            output.push_str(&column_window(&canvas, offset, max_width));
            output.push('\n');
        }
        output
    }

    fn card_lines(entry: &ReviewEntry) -> Vec<String> {
        let stars = entry.stars();
        let name_width = CARD_WIDTH.saturating_sub(stars.chars().count()).saturating_sub(1);
        let mut lines = vec![format!("{} {stars}", fit_to_width(&entry.name, name_width))];

        let mut text = wrap_words(&entry.text, CARD_WIDTH, TEXT_LINES);
        text.resize(TEXT_LINES, String::new());
        lines.extend(text.iter().map(|line| fit_to_width(line, CARD_WIDTH)));

        let footer = entry.date.as_deref().map_or_else(
            || entry.source.label().to_owned(),
            |date| format!("{}  {date}", entry.source.label()),
        );
        lines.push(fit_to_width(&footer, CARD_WIDTH));
        lines
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CARD_WIDTH, ReviewStripComponent, StripViewContext, card_step, content_width};
    use crate::reviews::{ReviewEntry, ReviewSource};
    use crate::rotation::{StripFrame, StripView, Transition};

    fn entry(name: &str) -> ReviewEntry {
        ReviewEntry {
            name: name.to_owned(),
            source: ReviewSource::Facebook,
            rating: 4,
            text: "Great service".to_owned(),
            date: Some("3/7/2025".to_owned()),
        }
    }

    fn render(view: &StripView<'_>, max_width: usize) -> String {
        ReviewStripComponent::view(&StripViewContext { view, max_width })
    }

    #[rstest]
    fn content_width_excludes_trailing_gap() {
        assert_eq!(card_step(), 32);
        assert_eq!(content_width(3), 94);
        assert_eq!(content_width(0), 0);
    }

    #[rstest]
    fn loading_and_empty_states_render_messages() {
        assert_eq!(render(&StripView::Loading, 80), "  Loading reviews...\n");
        assert_eq!(
            render(&StripView::Empty, 80),
            "  No reviews yet. Be the first to share your experience!\n"
        );
    }

    #[rstest]
    fn offset_scrolls_to_second_card() {
        let entries = vec![entry("Alpha"), entry("Bravo")];
        let view = StripView::Cards(StripFrame {
            entries: &entries,
            offset: 32,
            max_scroll: 32,
            transition: Transition::Smooth,
            paused: false,
        });

        let output = render(&view, CARD_WIDTH);

        let first_line = output.lines().next().unwrap_or_default();
        assert!(first_line.starts_with("Bravo"), "{output}");
        assert!(first_line.ends_with("★★★★☆"), "{output}");
        assert!(output.contains("Facebook  3/7/2025"), "{output}");
    }
}
