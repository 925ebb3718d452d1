//! Text styling for labels.
//!
//! Every attribute is a closed set: font sizes come from a fixed list and
//! the remaining attributes are two- or five-valued enums. Values
//! serialize to the same keywords CSS uses so the browser side can apply
//! them verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ─── Font size ───────────────────────────────────────────────────────────

/// Font size in pixels, restricted to `FontSize::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct FontSize(u16);

impl FontSize {
    /// The sizes offered by the size picker, ascending.
    pub const ALL: [FontSize; 8] = [
        FontSize(12),
        FontSize(14),
        FontSize(16),
        FontSize(18),
        FontSize(20),
        FontSize(24),
        FontSize(28),
        FontSize(32),
    ];

    pub const fn px(self) -> u16 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize(16)
    }
}

impl TryFrom<u16> for FontSize {
    type Error = String;

    fn try_from(px: u16) -> Result<Self, Self::Error> {
        if Self::ALL.iter().any(|s| s.0 == px) {
            Ok(FontSize(px))
        } else {
            Err(format!(
                "unsupported font size {px}px (expected one of 12, 14, 16, 18, 20, 24, 28, 32)"
            ))
        }
    }
}

impl From<FontSize> for u16 {
    fn from(size: FontSize) -> u16 {
        size.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// ─── Font family ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    #[serde(rename = "Courier New")]
    CourierNew,
    Georgia,
    Verdana,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Georgia,
        FontFamily::Verdana,
    ];

    /// Family name as written in a CSS `font-family` declaration.
    pub fn css_name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::Verdana => "Verdana",
        }
    }
}

impl FromStr for FontFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.css_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown font family `{s}`"))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

// ─── Two-valued attributes ───────────────────────────────────────────────

/// Declares a two-valued style attribute with CSS keywords and `toggled()`.
/// Variant names must be the capitalised CSS keyword (serde lowercases them).
macro_rules! toggle_attr {
    (
        $(#[$meta:meta])*
        $name:ident { $off:ident => $off_css:literal, $on:ident => $on_css:literal }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            #[default]
            $off,
            $on,
        }

        impl $name {
            /// Keyword for the matching CSS property.
            pub fn css_value(self) -> &'static str {
                match self {
                    $name::$off => $off_css,
                    $name::$on => $on_css,
                }
            }

            /// The other value, i.e. what the toolbar button switches to.
            #[must_use]
            pub fn toggled(self) -> Self {
                match self {
                    $name::$off => $name::$on,
                    $name::$on => $name::$off,
                }
            }

            pub fn is_set(self) -> bool {
                self == $name::$on
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $off_css => Ok($name::$off),
                    $on_css => Ok($name::$on),
                    other => Err(format!(
                        concat!("invalid ", stringify!($name), " `{}`"),
                        other
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.css_value())
            }
        }
    };
}

toggle_attr! {
    /// `font-weight`.
    FontWeight { Normal => "normal", Bold => "bold" }
}

toggle_attr! {
    /// `font-style`.
    FontStyle { Normal => "normal", Italic => "italic" }
}

toggle_attr! {
    /// `text-decoration`.
    TextDecoration { None => "none", Underline => "underline" }
}

// ─── Style record ────────────────────────────────────────────────────────

/// The full set of style attributes carried by a label (and by the
/// editor's "current style" form).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
}

impl TextStyle {
    pub fn is_bold(&self) -> bool {
        self.font_weight.is_set()
    }

    pub fn is_italic(&self) -> bool {
        self.font_style.is_set()
    }

    pub fn is_underlined(&self) -> bool {
        self.text_decoration.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_accepts_only_listed_sizes() {
        assert_eq!(FontSize::try_from(24u16).map(FontSize::px), Ok(24));
        assert!(FontSize::try_from(15u16).is_err());
        assert!(FontSize::try_from(0u16).is_err());
        assert_eq!(FontSize::default().px(), 16);
    }

    #[test]
    fn font_family_parses_display_names() {
        assert_eq!("Courier New".parse::<FontFamily>(), Ok(FontFamily::CourierNew));
        assert_eq!("times new roman".parse::<FontFamily>(), Ok(FontFamily::TimesNewRoman));
        assert!("Comic Sans".parse::<FontFamily>().is_err());
    }

    #[test]
    fn toggles_flip_between_two_values() {
        assert_eq!(FontWeight::Normal.toggled(), FontWeight::Bold);
        assert_eq!(FontWeight::Bold.toggled(), FontWeight::Normal);
        assert_eq!(FontStyle::Normal.toggled(), FontStyle::Italic);
        assert_eq!(TextDecoration::Underline.toggled(), TextDecoration::None);
    }

    #[test]
    fn css_keywords_round_trip() {
        assert_eq!("underline".parse::<TextDecoration>(), Ok(TextDecoration::Underline));
        assert_eq!(FontStyle::Italic.css_value(), "italic");
        assert!("oblique".parse::<FontStyle>().is_err());
    }

    #[test]
    fn default_style_is_plain_arial_16() {
        let style = TextStyle::default();
        assert_eq!(style.font_size.px(), 16);
        assert_eq!(style.font_family, FontFamily::Arial);
        assert!(!style.is_bold());
        assert!(!style.is_italic());
        assert!(!style.is_underlined());
    }

    #[test]
    fn style_serializes_with_css_keywords() {
        let style = TextStyle {
            font_size: FontSize::try_from(20u16).unwrap(),
            font_family: FontFamily::TimesNewRoman,
            font_weight: FontWeight::Bold,
            font_style: FontStyle::Normal,
            text_decoration: TextDecoration::Underline,
        };
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(
            json,
            r#"{"fontSize":20,"fontFamily":"Times New Roman","fontWeight":"bold","fontStyle":"normal","textDecoration":"underline"}"#
        );
        let back: TextStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn deserializing_rejects_unlisted_size() {
        let json = r#"{"fontSize":13,"fontFamily":"Arial","fontWeight":"normal","fontStyle":"normal","textDecoration":"none"}"#;
        assert!(serde_json::from_str::<TextStyle>(json).is_err());
    }
}
