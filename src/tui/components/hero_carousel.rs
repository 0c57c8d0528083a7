//! Hero carousel component.
//!
//! Renders the observable carousel view: the active slide's image and copy,
//! the call-to-action, the indicator dots, and the accessibility metadata a
//! screen reader would consume.

use crate::rotation::{CarouselFrame, CarouselView, IndicatorList, SlideFrame};

use super::text_layout::{truncate_with_ellipsis, wrap_words};

/// Lines of description shown under the headline.
const DESCRIPTION_LINES: usize = 2;

/// Context for rendering the hero carousel.
#[derive(Debug, Clone)]
pub struct HeroViewContext<'a> {
    /// Current carousel view.
    pub view: &'a CarouselView<'a>,
    /// Maximum line width in columns.
    pub max_width: usize,
}

/// Stateless renderer for the hero carousel.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroCarouselComponent;

impl HeroCarouselComponent {
    /// Renders the carousel as newline-terminated lines.
    #[must_use]
    pub fn view(ctx: &HeroViewContext<'_>) -> String {
        match ctx.view {
            CarouselView::Empty {
                role,
                label,
                message,
            } => format!("[{role}: {label}]\n  {message}\n"),
            CarouselView::Slides(frame) => Self::render_frame(frame, ctx.max_width),
        }
    }

    fn render_frame(frame: &CarouselFrame<'_>, max_width: usize) -> String {
        let mut output = format!(
            "[{role}: {label}, {description}] live={live} transition={transition}\n",
            role = frame.role,
            label = frame.label,
            description = frame.role_description,
            live = frame.live.as_str(),
            transition = frame.transition.label(),
        );

        if let Some(slide) = frame.active_slide() {
            output.push_str(&Self::render_slide(slide, max_width));
        }
        if let Some(indicators) = &frame.indicators {
            output.push_str(&Self::render_indicators(indicators));
        }
        output
    }

    fn render_slide(slide: &SlideFrame<'_>, max_width: usize) -> String {
        let text_width = max_width.saturating_sub(2);
        let mut lines = vec![format!("Image: {}", slide.image)];

        if let Some(subtitle) = slide.subtitle {
            lines.push(subtitle.to_uppercase());
        }
        if let Some(title) = slide.title {
            lines.push(title.to_owned());
        }
        if let Some(description) = slide.description {
            lines.extend(wrap_words(description, text_width, DESCRIPTION_LINES));
        }
        lines.push(format!(
            "[ {} ] ({})",
            slide.cta_label, slide.cta_accessible_label
        ));

        lines
            .iter()
            .map(|line| format!("  {}\n", truncate_with_ellipsis(line, text_width)))
            .collect()
    }

    fn render_indicators(indicators: &IndicatorList) -> String {
        let dots: Vec<&str> = indicators
            .dots
            .iter()
            .map(|dot| if dot.selected { "●" } else { "○" })
            .collect();
        let selected = indicators
            .dots
            .iter()
            .find(|dot| dot.selected)
            .map_or("", |dot| dot.label.as_str());
        format!("  {}  {selected}\n", dots.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;
    use tokio::time::Instant;

    use super::{HeroCarouselComponent, HeroViewContext};
    use crate::hero::home_page_slides;
    use crate::rotation::{HoldSource, SlideRotator};

    fn render(rotator: &SlideRotator) -> String {
        let view = rotator.view();
        HeroCarouselComponent::view(&HeroViewContext {
            view: &view,
            max_width: 100,
        })
    }

    fn home_rotator(now: Instant) -> SlideRotator {
        SlideRotator::new(home_page_slides(), true, Duration::from_millis(6000), now)
    }

    #[rstest]
    fn renders_active_slide_and_indicators() {
        let rotator = home_rotator(Instant::now());

        let output = render(&rotator);

        assert!(output.contains("Image: /images/t1.jpg"), "{output}");
        assert!(output.contains("COMPLETE EVENT SOLUTIONS"), "{output}");
        assert!(output.contains("[ Hire now ] (Hire now)"), "{output}");
        assert!(output.contains("● ○ ○ ○  Slide 1 of 4"), "{output}");
        assert!(output.contains("live=polite"), "{output}");
    }

    #[rstest]
    fn paused_carousel_turns_live_region_off() {
        let now = Instant::now();
        let mut rotator = home_rotator(now);
        rotator.hold(HoldSource::Pointer, now);

        let output = render(&rotator);

        assert!(output.contains("live=off"), "{output}");
    }

    #[rstest]
    fn empty_carousel_renders_alert() {
        let rotator = SlideRotator::new(Vec::new(), true, Duration::from_millis(6000), Instant::now());

        let output = render(&rotator);

        assert_eq!(output, "[alert: No slides available]\n  No images available\n");
    }
}
