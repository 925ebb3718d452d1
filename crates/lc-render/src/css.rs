//! Label → inline CSS.
//!
//! The page renders each label as an absolutely positioned element; this
//! is the `style` attribute for it.

use lc_core::model::Label;
use lc_core::style::TextStyle;
use std::fmt::Write;

/// Inline style for a label element.
pub fn label_css(label: &Label) -> String {
    let mut out = format!(
        "position: absolute; left: {}px; top: {}px; ",
        fmt_px(label.x),
        fmt_px(label.y)
    );
    push_font_css(&mut out, &label.style);
    out
}

/// Font declarations only; used for the style preview in the edit form.
pub fn style_css(style: &TextStyle) -> String {
    let mut out = String::new();
    push_font_css(&mut out, style);
    out
}

fn push_font_css(out: &mut String, style: &TextStyle) {
    let _ = write!(
        out,
        "font-size: {}px; font-weight: {}; font-style: {}; text-decoration: {}; font-family: {}",
        style.font_size.px(),
        style.font_weight.css_value(),
        style.font_style.css_value(),
        style.text_decoration.css_value(),
        quote_family(style.font_family.css_name()),
    );
}

/// Family names containing spaces must be quoted.
fn quote_family(name: &str) -> String {
    if name.contains(' ') {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}

/// Whole pixels print without a fraction; sub-pixel drops keep two decimals.
fn fmt_px(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
