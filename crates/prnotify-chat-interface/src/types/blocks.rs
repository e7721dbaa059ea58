use serde::{Deserialize, Serialize};

/// Text element.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    /// Markup text.
    Mrkdwn {
        /// Content.
        text: String,
    },
    /// Raw text.
    PlainText {
        /// Content.
        text: String,
    },
}

impl TextObject {
    /// Markup text element.
    pub fn mrkdwn<T: Into<String>>(text: T) -> Self {
        Self::Mrkdwn { text: text.into() }
    }

    /// Raw text element.
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self::PlainText { text: text.into() }
    }

    /// Element content.
    pub fn text(&self) -> &str {
        match self {
            Self::Mrkdwn { text } | Self::PlainText { text } => text,
        }
    }
}

/// Layout block.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Small secondary text.
    Context {
        /// Elements.
        elements: Vec<TextObject>,
    },
    /// Large title.
    Header {
        /// Title.
        text: TextObject,
    },
    /// Paragraph.
    Section {
        /// Content.
        text: TextObject,
    },
    /// Horizontal rule.
    Divider,
}

impl Block {
    /// Context block with a single markup element.
    pub fn context<T: Into<String>>(text: T) -> Self {
        Self::Context {
            elements: vec![TextObject::mrkdwn(text)],
        }
    }

    /// Header block.
    pub fn header<T: Into<String>>(text: T) -> Self {
        Self::Header {
            text: TextObject::plain(text),
        }
    }

    /// Section block with markup text.
    pub fn section<T: Into<String>>(text: T) -> Self {
        Self::Section {
            text: TextObject::mrkdwn(text),
        }
    }

    /// Divider block.
    pub fn divider() -> Self {
        Self::Divider
    }

    /// Concatenated text content, used for notification fallbacks.
    pub fn text(&self) -> String {
        match self {
            Self::Context { elements } => elements
                .iter()
                .map(TextObject::text)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Header { text } | Self::Section { text } => text.text().into(),
            Self::Divider => String::new(),
        }
    }
}
