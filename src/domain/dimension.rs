use std::fmt::Display;

/// Categorical axis a catalog gets grouped along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Artist,
    Year,
    Decade,
    Label,
    Genre,
    Mood,
    Topic,
    Style,
    Algorithm,
}

impl Dimension {
    /// Dimensions a real catalog is grouped by.
    pub const REAL: &[Dimension] = &[
        Dimension::Artist,
        Dimension::Year,
        Dimension::Decade,
        Dimension::Label,
    ];

    /// Dimensions a synthetic catalog is grouped by.
    pub const SYNTHETIC: &[Dimension] = &[
        Dimension::Genre,
        Dimension::Mood,
        Dimension::Topic,
        Dimension::Style,
        Dimension::Algorithm,
    ];

    /// Order in which the category pipeline writes its output.
    pub const EMISSION_ORDER: &[Dimension] = &[
        Dimension::Genre,
        Dimension::Mood,
        Dimension::Topic,
        Dimension::Style,
        Dimension::Artist,
        Dimension::Year,
        Dimension::Decade,
        Dimension::Label,
        Dimension::Algorithm,
    ];

    /// Minimum number of members for a bucket to be worth a playlist.
    pub fn default_threshold(self) -> usize {
        match self {
            Dimension::Artist => 3,
            Dimension::Year
            | Dimension::Label
            | Dimension::Genre
            | Dimension::Mood
            | Dimension::Topic
            | Dimension::Style => 5,
            Dimension::Decade | Dimension::Algorithm => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Artist => "artist",
            Dimension::Year => "year",
            Dimension::Decade => "decade",
            Dimension::Label => "label",
            Dimension::Genre => "genre",
            Dimension::Mood => "mood",
            Dimension::Topic => "topic",
            Dimension::Style => "style",
            Dimension::Algorithm => "algorithm",
        }
    }

    /// Output subdirectory, e.g. `by_genre`
    pub fn dir_name(self) -> String {
        format!("by_{}", self.name())
    }

    /// Title written into the line-oriented playlist.
    pub fn playlist_title(self, key: &str) -> String {
        format!("{}: {key}", self.label())
    }

    /// Title of the html page, which also shows the member count.
    pub fn page_title(self, key: &str, count: usize) -> String {
        match self {
            Dimension::Year => format!("Music from {key} ({count} songs)"),
            Dimension::Decade => format!("Music from the {key} ({count} songs)"),
            _ => format!("{}: {key} ({count} songs)", self.label()),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Dimension::Artist => "Artist",
            Dimension::Year => "Year",
            Dimension::Decade => "Decade",
            Dimension::Label => "Label",
            Dimension::Genre => "Genre",
            Dimension::Mood => "Mood",
            Dimension::Topic => "Topic",
            Dimension::Style => "Style",
            Dimension::Algorithm => "Algorithm",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
