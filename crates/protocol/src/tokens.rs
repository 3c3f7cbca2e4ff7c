use serde::{Deserialize, Serialize};

/// CSS classes the controller toggles. The stylesheet owns what they look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassToken {
    /// Open menu / current nav link.
    Active,
    /// One-shot reveal animation.
    FadeInUp,
}

impl ClassToken {
    pub fn class_name(self) -> &'static str {
        match self {
            ClassToken::Active => "active",
            ClassToken::FadeInUp => "fade-in-up",
        }
    }
}

/// Inline style properties written by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleProperty {
    BoxShadow,
    Animation,
    Opacity,
    Visibility,
    BackgroundColor,
    Transform,

    // Image sizing
    Width,
    Height,
    ObjectFit,
    Display,
}

impl StyleProperty {
    /// The CSS property name as accepted by `CSSStyleDeclaration.setProperty`.
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::BoxShadow => "box-shadow",
            StyleProperty::Animation => "animation",
            StyleProperty::Opacity => "opacity",
            StyleProperty::Visibility => "visibility",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Transform => "transform",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::ObjectFit => "object-fit",
            StyleProperty::Display => "display",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names_are_kebab_case() {
        assert_eq!(StyleProperty::BoxShadow.css_name(), "box-shadow");
        assert_eq!(StyleProperty::ObjectFit.css_name(), "object-fit");
        assert_eq!(ClassToken::FadeInUp.class_name(), "fade-in-up");
    }
}
