//! Rendering logic for the showcase preview.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use super::ShowcaseApp;
use crate::hero::{BRAND, CTA_BODY, CTA_BUTTON, CTA_HEADLINE, LEAVE_REVIEW, REVIEWS_HEADING};
use crate::tui::components::{
    HeroCarouselComponent, HeroViewContext, ReviewStripComponent, StripViewContext,
    clip_to_width,
};
use crate::tui::messages::Region;

const HINTS: &str = "1-9:slide  Enter:quote  f:review  Tab:focus  p/P:hover  ?:help  q:quit";

impl ShowcaseApp {
    /// Renders the full frame.
    pub(super) fn render(&self) -> String {
        if self.show_help {
            return self.fit_frame(&render_help_overlay());
        }

        let max_width = self.content_width();
        let mut output = String::new();

        output.push_str(&self.render_header());
        output.push('\n');

        let hero_view = self.rotator.view();
        output.push_str(&HeroCarouselComponent::view(&HeroViewContext {
            view: &hero_view,
            max_width,
        }));
        output.push('\n');

        if self.intro_visible() {
            output.push_str(&format!("{CTA_HEADLINE}\n  {CTA_BODY}\n  [ {CTA_BUTTON} ]\n\n"));
        }

        output.push_str(&self.render_reviews_heading());
        let strip_view = self.strip.view();
        output.push_str(&ReviewStripComponent::view(&StripViewContext {
            view: &strip_view,
            max_width,
        }));
        output.push_str(&format!("  [ {LEAVE_REVIEW} ]\n\n"));
        output.push_str(&self.render_status_bar());

        self.fit_frame(&output)
    }

    /// Renders the header bar. The brand appears once the intro reveals.
    fn render_header(&self) -> String {
        let focus = match self.focus {
            Some(Region::Hero) => "  [focus: hero]",
            Some(Region::Reviews) => "  [focus: reviews]",
            None => "",
        };
        if self.intro_visible() {
            format!("{BRAND}{focus}\n")
        } else {
            format!("{focus}\n")
        }
    }

    fn render_reviews_heading(&self) -> String {
        let paused = if self.strip.is_paused() { " (paused)" } else { "" };
        format!("{REVIEWS_HEADING}{paused}\n")
    }

    /// Renders the status bar with the last outbound action or help hints.
    fn render_status_bar(&self) -> String {
        self.status
            .as_deref()
            .map_or_else(|| format!("{HINTS}\n"), |status| format!("{status}\n"))
    }

    /// Usable width for component content.
    fn content_width(&self) -> usize {
        usize::from(self.width).saturating_sub(1).max(1)
    }

    /// Fits a frame to the terminal: exactly `height` rows, each clipped or
    /// padded to the content width so no row autowraps and stale cells
    /// from a wider frame are overwritten.
    fn fit_frame(&self, frame: &str) -> String {
        let columns = self.content_width();
        let rows = usize::from(self.height.max(1));
        let mut fitted = String::with_capacity(rows.saturating_mul(columns.saturating_add(1)));
        for line in frame.lines().chain(std::iter::repeat("")).take(rows) {
            fitted.push_str(&clip_to_width(line, columns));
            fitted.push('\n');
        }
        fitted
    }
}

fn render_help_overlay() -> String {
    let lines = [
        "Keyboard shortcuts",
        "",
        "  1-9           Jump to slide",
        "  Enter         Get your quotation",
        "  f             Leave a review",
        "  Tab           Cycle focus (hero, reviews, none)",
        "  p / P         Toggle pointer over hero / reviews",
        "  t / T         Toggle touch on hero / reviews",
        "  m             Toggle reduced motion",
        "  Ctrl+Shift+A  Admin login",
        "  ?             Close help",
        "  q / Esc       Quit",
    ];
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
