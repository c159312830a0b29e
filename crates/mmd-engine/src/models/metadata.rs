use std::collections::HashMap;
use std::fmt;

/// The closed set of header fields every document must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetaKey {
    File,
    Brief,
    Title,
    Author,
    DateCreated,
    DateUpdated,
    Version,
}

impl MetaKey {
    pub const ALL: [MetaKey; 7] = [
        MetaKey::File,
        MetaKey::Brief,
        MetaKey::Title,
        MetaKey::Author,
        MetaKey::DateCreated,
        MetaKey::DateUpdated,
        MetaKey::Version,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetaKey::File => "file",
            MetaKey::Brief => "brief",
            MetaKey::Title => "title",
            MetaKey::Author => "author",
            MetaKey::DateCreated => "date-created",
            MetaKey::DateUpdated => "date-updated",
            MetaKey::Version => "version",
        }
    }

    /// Maps a plain `@tag:` name to its key.
    ///
    /// The two date keys are only populated through the composite `@date` tag,
    /// so they have no tag of their own.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "file" => Some(MetaKey::File),
            "brief" => Some(MetaKey::Brief),
            "title" => Some(MetaKey::Title),
            "author" => Some(MetaKey::Author),
            "version" => Some(MetaKey::Version),
            _ => None,
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated document metadata. Every field is present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    file: String,
    brief: String,
    title: String,
    author: String,
    date_created: String,
    date_updated: String,
    version: String,
}

impl Metadata {
    pub fn get(&self, key: MetaKey) -> &str {
        match key {
            MetaKey::File => &self.file,
            MetaKey::Brief => &self.brief,
            MetaKey::Title => &self.title,
            MetaKey::Author => &self.author,
            MetaKey::DateCreated => &self.date_created,
            MetaKey::DateUpdated => &self.date_updated,
            MetaKey::Version => &self.version,
        }
    }

    /// All fields in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (MetaKey, &str)> + '_ {
        MetaKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Accumulates header fields during the single pass over the header block.
#[derive(Debug, Default)]
pub(crate) struct MetadataBuilder {
    fields: HashMap<MetaKey, String>,
}

impl MetadataBuilder {
    pub(crate) fn set(&mut self, key: MetaKey, value: impl Into<String>) {
        self.fields.insert(key, value.into());
    }

    /// Freezes the collected fields, or `None` if any is missing or empty.
    pub(crate) fn build(mut self) -> Option<Metadata> {
        let mut take = |key: MetaKey| self.fields.remove(&key).filter(|v| !v.is_empty());
        Some(Metadata {
            file: take(MetaKey::File)?,
            brief: take(MetaKey::Brief)?,
            title: take(MetaKey::Title)?,
            author: take(MetaKey::Author)?,
            date_created: take(MetaKey::DateCreated)?,
            date_updated: take(MetaKey::DateUpdated)?,
            version: take(MetaKey::Version)?,
        })
    }
}
