use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

id_newtype!(ChannelId);
id_newtype!(CardId);

/// Opaque presentation handle carried on cards. The state core never
/// inspects the value; only the rendering layer gives it meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

/// Display state of a channel. Free-form: any state is reachable from
/// any other via `UpdateChannelState`, no transition table is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    #[default]
    Hidden,
    Collapsed,
    Expanded,
    Alert,
    Swiping,
    Loading,
    Icon,
    Split,
    Bubble,
}

/// One unit of displayable content within a channel's queue. Immutable
/// once added; the core never rewrites a card's fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within its channel by convention, not enforced.
    pub id: CardId,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub auto_dismiss: bool,
    /// Per-card override of the default auto-dismiss delay, in millis.
    #[serde(default)]
    pub auto_dismiss_ms: Option<u64>,
    /// Opaque numeric marker (epoch millis by consumer convention).
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub icon: Option<IconRef>,
    #[serde(default)]
    pub bubble_icon: Option<IconRef>,
}

impl Card {
    pub fn new(id: impl Into<CardId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            content: content.into(),
            auto_dismiss: false,
            auto_dismiss_ms: None,
            timestamp: None,
            icon: None,
            bubble_icon: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Marks the card for auto-dismissal, optionally overriding the
    /// default delay.
    pub fn with_auto_dismiss(mut self, duration_ms: Option<u64>) -> Self {
        self.auto_dismiss = true;
        self.auto_dismiss_ms = duration_ms;
        self
    }

    pub fn with_timestamp(mut self, epoch_ms: i64) -> Self {
        self.timestamp = Some(epoch_ms);
        self
    }

    pub fn with_icon(mut self, icon: IconRef) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_bubble_icon(mut self, icon: IconRef) -> Self {
        self.bubble_icon = Some(icon);
        self
    }
}
