//! Caption column alignment.
//!
//! Each section gets one alignment size: the widest caption among its
//! caption-capable elements (never narrower than a floor), and the height of a
//! reference glyph at the base font. The height never depends on captions.

use super::CaptionMeasurer;
use crate::config::StyleConfig;
use crate::model::{Element, FontDescriptor, Section, Size};

/// Inputs of the alignment algorithm that do not come from the list.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMetrics {
    /// Font of the reference glyph (and of captions in the default style).
    pub base_font: FontDescriptor,
    /// Minimum width, used when no caption is wider or none exist.
    pub floor_width: f32,
    /// Glyph whose height becomes every section's alignment height.
    pub reference_glyph: String,
}

impl From<&StyleConfig> for AlignmentMetrics {
    fn from(config: &StyleConfig) -> Self {
        Self {
            base_font: config.base_font.clone(),
            floor_width: config.caption_floor_width,
            reference_glyph: config.reference_glyph.clone(),
        }
    }
}

impl Default for AlignmentMetrics {
    fn default() -> Self {
        Self::from(&StyleConfig::default())
    }
}

impl AlignmentMetrics {
    /// The floor size: `(floor_width, reference glyph height)`.
    pub fn floor(&self, measurer: &dyn CaptionMeasurer) -> Size {
        let height = measurer
            .measure(&self.reference_glyph, &self.base_font)
            .height;
        Size::new(self.floor_width, height)
    }
}

/// Alignment of one section, measuring captions at `caption_font`.
pub fn section_alignment(
    section: &Section,
    measurer: &dyn CaptionMeasurer,
    metrics: &AlignmentMetrics,
    caption_font: &FontDescriptor,
) -> Size {
    aligned_to_floor(section, measurer, metrics.floor(measurer), caption_font)
}

/// Alignment of every section, independently, in section order.
pub fn section_alignments(
    sections: &[Section],
    measurer: &dyn CaptionMeasurer,
    metrics: &AlignmentMetrics,
    caption_font: &FontDescriptor,
) -> Vec<Size> {
    let floor = metrics.floor(measurer);
    sections
        .iter()
        .map(|section| aligned_to_floor(section, measurer, floor, caption_font))
        .collect()
}

fn aligned_to_floor(
    section: &Section,
    measurer: &dyn CaptionMeasurer,
    floor: Size,
    caption_font: &FontDescriptor,
) -> Size {
    let width = section
        .elements()
        .iter()
        .filter_map(Element::alignment_caption)
        .map(|caption| measurer.measure(caption, caption_font).width)
        .fold(floor.width, f32::max);

    Size::new(width, floor.height)
}

/// Widest width among `sizes`, `None` when empty.
pub fn widest(sizes: &[Size]) -> Option<f32> {
    sizes.iter().map(|s| s.width).reduce(f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementId, SectionId};
    use crate::style::DefaultStyle;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Measures from a fixed table; unknown text is 0 wide, every glyph 20 tall.
    struct TableMeasurer(HashMap<&'static str, f32>);

    impl CaptionMeasurer for TableMeasurer {
        fn measure(&self, text: &str, _font: &FontDescriptor) -> Size {
            Size::new(self.0.get(text).copied().unwrap_or(0.0), 20.0)
        }
    }

    fn measurer() -> TableMeasurer {
        TableMeasurer(HashMap::from([
            ("Twelve", 12.0),
            ("Thirty", 30.0),
            ("Eight", 8.0),
            ("Huge", 400.0),
        ]))
    }

    fn section(captions: &[(&str, bool)]) -> Section {
        let style = Rc::new(DefaultStyle::default());
        let mut section = Section::new(SectionId::new(1));
        for (i, (caption, capable)) in captions.iter().enumerate() {
            let mut element = Element::new(ElementId::new(i as u32), style.clone())
                .with_caption(*caption);
            if *capable {
                element = element.supporting_captions();
            }
            section.push(element);
        }
        section
    }

    #[test]
    fn width_is_local_max_over_floor() {
        let s = section(&[("Twelve", true), ("Thirty", true), ("Eight", true)]);
        let size = section_alignment(
            &s,
            &measurer(),
            &AlignmentMetrics::default(),
            &FontDescriptor::default(),
        );
        assert_eq!(size, Size::new(30.0, 20.0));
    }

    #[test]
    fn captions_below_floor_yield_floor() {
        let s = section(&[("Eight", true)]);
        let size = section_alignment(
            &s,
            &measurer(),
            &AlignmentMetrics::default(),
            &FontDescriptor::default(),
        );
        assert_eq!(size.width, 10.0);
    }

    #[test]
    fn elements_without_capability_are_ignored() {
        let s = section(&[("Huge", false), ("Twelve", true)]);
        let size = section_alignment(
            &s,
            &measurer(),
            &AlignmentMetrics::default(),
            &FontDescriptor::default(),
        );
        assert_eq!(size.width, 12.0);
    }

    #[test]
    fn empty_section_yields_floor() {
        let s = section(&[]);
        let metrics = AlignmentMetrics::default();
        let m = measurer();
        assert_eq!(
            section_alignment(&s, &m, &metrics, &FontDescriptor::default()),
            metrics.floor(&m)
        );
    }

    #[test]
    fn height_ignores_caption_heights() {
        let tall = |text: &str, _font: &FontDescriptor| {
            if text == "M" {
                Size::new(14.0, 21.0)
            } else {
                Size::new(40.0, 300.0)
            }
        };
        let s = section(&[("Anything", true)]);
        let size = section_alignment(
            &s,
            &tall,
            &AlignmentMetrics::default(),
            &FontDescriptor::default(),
        );
        assert_eq!(size, Size::new(40.0, 21.0));
    }

    #[test]
    fn reference_glyph_is_measured_at_base_font() {
        let font_sized = |_text: &str, font: &FontDescriptor| Size::new(1.0, font.size);
        let metrics = AlignmentMetrics {
            base_font: FontDescriptor::bold_system(17.0),
            ..AlignmentMetrics::default()
        };
        let s = section(&[("x", true)]);
        let size = section_alignment(&s, &font_sized, &metrics, &FontDescriptor::bold_system(12.0));
        assert_eq!(size.height, 17.0);
    }

    #[test]
    fn sections_are_independent() {
        let sections = vec![
            section(&[("Thirty", true)]),
            section(&[("Twelve", true)]),
        ];
        let sizes = section_alignments(
            &sections,
            &measurer(),
            &AlignmentMetrics::default(),
            &FontDescriptor::default(),
        );
        assert_eq!(sizes, vec![Size::new(30.0, 20.0), Size::new(12.0, 20.0)]);
    }

    #[test]
    fn widest_of_empty_is_none() {
        assert_eq!(widest(&[]), None);
        assert_eq!(
            widest(&[Size::new(20.0, 1.0), Size::new(45.0, 1.0), Size::new(15.0, 1.0)]),
            Some(45.0)
        );
    }
}
