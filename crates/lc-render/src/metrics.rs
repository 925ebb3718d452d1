//! Text metrics.
//!
//! The browser measures real glyph boxes (`offsetWidth`/`offsetHeight`);
//! native code falls back to a per-character estimate that is close
//! enough for hit testing and clamping.

use lc_core::Size;
use lc_core::model::Label;
use lc_core::style::FontFamily;

/// Line height as a multiple of the font size.
const LINE_HEIGHT: f64 = 1.2;

/// Something that can tell how large a label renders.
pub trait LabelMeasure {
    fn measure(&self, label: &Label) -> Size;
}

/// Character-count estimate, used when no real measurement is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMetrics;

impl LabelMeasure for EstimatedMetrics {
    fn measure(&self, label: &Label) -> Size {
        estimate_size(label)
    }
}

impl<F> LabelMeasure for F
where
    F: Fn(&Label) -> Size,
{
    fn measure(&self, label: &Label) -> Size {
        self(label)
    }
}

/// Average advance width of one character, in ems.
fn advance_em(family: FontFamily) -> f64 {
    match family {
        FontFamily::CourierNew => 0.6,
        FontFamily::Verdana => 0.58,
        FontFamily::Arial | FontFamily::Georgia => 0.52,
        FontFamily::TimesNewRoman => 0.48,
    }
}

/// Estimate the rendered size of a label's text box.
pub fn estimate_size(label: &Label) -> Size {
    let style = &label.style;
    let px = f64::from(style.font_size.px());
    let mut em = advance_em(style.font_family);
    if style.is_bold() {
        em *= 1.05;
    }
    let chars = label.content.chars().count() as f64;
    Size::new(chars * em * px, LINE_HEIGHT * px)
}
