use crate::models::Span;

/// The style a paired delimiter applies to its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Bold,
    Italic,
    Strikethrough,
}

/// A paired emphasis marker: the same string opens and closes the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub style: Style,
    /// Underscore markers only count at word boundaries.
    pub word_bounded: bool,
}

impl Delimiter {
    pub const DOUBLE_STAR: Delimiter = Delimiter {
        marker: "**",
        style: Style::Bold,
        word_bounded: false,
    };
    pub const DOUBLE_UNDERSCORE: Delimiter = Delimiter {
        marker: "__",
        style: Style::Bold,
        word_bounded: true,
    };
    pub const STAR: Delimiter = Delimiter {
        marker: "*",
        style: Style::Italic,
        word_bounded: false,
    };
    pub const UNDERSCORE: Delimiter = Delimiter {
        marker: "_",
        style: Style::Italic,
        word_bounded: true,
    };
    pub const DOUBLE_TILDE: Delimiter = Delimiter {
        marker: "~~",
        style: Style::Strikethrough,
        word_bounded: false,
    };

    /// Match priority: double markers before their single forms.
    pub const ALL: [Delimiter; 5] = [
        Self::DOUBLE_STAR,
        Self::DOUBLE_UNDERSCORE,
        Self::STAR,
        Self::UNDERSCORE,
        Self::DOUBLE_TILDE,
    ];

    pub fn marker_len(self) -> usize {
        self.marker.len()
    }

    /// Wraps captured content in the span for this delimiter's style.
    pub fn span(self, content: &str) -> Span {
        let content = content.to_string();
        match self.style {
            Style::Bold => Span::Bold(content),
            Style::Italic => Span::Italic(content),
            Style::Strikethrough => Span::Strikethrough(content),
        }
    }
}
