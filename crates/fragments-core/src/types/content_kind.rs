//! Supported content kinds.
//!
//! The API client forwards media types as plain strings and never inspects
//! them. Hosts that need to decide how to display or convert a fragment
//! resolve the string into a [`ContentKind`] at that boundary instead.

use std::fmt;

/// The closed set of content kinds the fragments service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Text,
    Markdown,
    Html,
    Csv,
    Json,
    Yaml,
    Png,
    Jpeg,
    Webp,
    Gif,
    Avif,
}

const IMAGES: &[ContentKind] = &[
    ContentKind::Png,
    ContentKind::Jpeg,
    ContentKind::Webp,
    ContentKind::Gif,
    ContentKind::Avif,
];

impl ContentKind {
    /// Every supported kind.
    pub const ALL: &'static [ContentKind] = &[
        ContentKind::Text,
        ContentKind::Markdown,
        ContentKind::Html,
        ContentKind::Csv,
        ContentKind::Json,
        ContentKind::Yaml,
        ContentKind::Png,
        ContentKind::Jpeg,
        ContentKind::Webp,
        ContentKind::Gif,
        ContentKind::Avif,
    ];

    /// Resolve a media type string such as `text/plain; charset=utf-8`.
    ///
    /// Parameters are ignored and matching is case-insensitive. Returns
    /// `None` for types the service does not support.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.media_type() == essence)
    }

    /// Resolve a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(ContentKind::Text),
            "md" => Some(ContentKind::Markdown),
            "html" => Some(ContentKind::Html),
            "csv" => Some(ContentKind::Csv),
            "json" => Some(ContentKind::Json),
            "yaml" | "yml" => Some(ContentKind::Yaml),
            "png" => Some(ContentKind::Png),
            "jpg" | "jpeg" => Some(ContentKind::Jpeg),
            "webp" => Some(ContentKind::Webp),
            "gif" => Some(ContentKind::Gif),
            "avif" => Some(ContentKind::Avif),
            _ => None,
        }
    }

    /// The canonical media type.
    pub fn media_type(self) -> &'static str {
        match self {
            ContentKind::Text => "text/plain",
            ContentKind::Markdown => "text/markdown",
            ContentKind::Html => "text/html",
            ContentKind::Csv => "text/csv",
            ContentKind::Json => "application/json",
            ContentKind::Yaml => "application/yaml",
            ContentKind::Png => "image/png",
            ContentKind::Jpeg => "image/jpeg",
            ContentKind::Webp => "image/webp",
            ContentKind::Gif => "image/gif",
            ContentKind::Avif => "image/avif",
        }
    }

    /// The canonical extension used in conversion URLs.
    pub fn extension(self) -> &'static str {
        match self {
            ContentKind::Text => "txt",
            ContentKind::Markdown => "md",
            ContentKind::Html => "html",
            ContentKind::Csv => "csv",
            ContentKind::Json => "json",
            ContentKind::Yaml => "yaml",
            ContentKind::Png => "png",
            ContentKind::Jpeg => "jpg",
            ContentKind::Webp => "webp",
            ContentKind::Gif => "gif",
            ContentKind::Avif => "avif",
        }
    }

    /// Returns true for kinds whose payload is UTF-8 text.
    pub fn is_text(self) -> bool {
        !self.is_image()
    }

    /// Returns true for image kinds.
    pub fn is_image(self) -> bool {
        IMAGES.contains(&self)
    }

    /// Kinds the service can convert a fragment of this kind into.
    pub fn conversion_targets(self) -> &'static [ContentKind] {
        match self {
            ContentKind::Text => &[ContentKind::Text],
            ContentKind::Markdown => &[ContentKind::Markdown, ContentKind::Html, ContentKind::Text],
            ContentKind::Html => &[ContentKind::Html, ContentKind::Text],
            ContentKind::Csv => &[ContentKind::Csv, ContentKind::Text, ContentKind::Json],
            ContentKind::Json => &[ContentKind::Json, ContentKind::Yaml, ContentKind::Text],
            ContentKind::Yaml => &[ContentKind::Yaml, ContentKind::Text],
            ContentKind::Png
            | ContentKind::Jpeg
            | ContentKind::Webp
            | ContentKind::Gif
            | ContentKind::Avif => IMAGES,
        }
    }

    /// Returns true if a fragment of this kind can be served as `target`.
    pub fn can_convert_to(self, target: ContentKind) -> bool {
        self.conversion_targets().contains(&target)
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}
