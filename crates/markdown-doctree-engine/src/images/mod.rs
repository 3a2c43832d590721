//! # Image Resolution
//!
//! The parser only records where images are. Fetching and decoding belong to
//! an [`ImageResolver`] supplied by the caller; [`with_resolved_images`]
//! rebuilds the document with the decoded [`Pixels`] attached.
//!
//! A failed lookup is not an error for the document: the node keeps
//! `pixels: None`, exactly as it came out of the parser.

use std::collections::HashMap;

use crate::models::{Block, Document, Pixels, Span};

/// Why an image could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Image not found: {url}")]
    NotFound { url: String },
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("Failed to decode {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("Timed out fetching {url}")]
    Timeout { url: String },
}

/// Turns an image URL into decoded pixels.
pub trait ImageResolver {
    fn resolve(&self, url: &str) -> Result<Pixels, ResolveError>;
}

impl<F> ImageResolver for F
where
    F: Fn(&str) -> Result<Pixels, ResolveError>,
{
    fn resolve(&self, url: &str) -> Result<Pixels, ResolveError> {
        self(url)
    }
}

/// Outcome counts from one resolution pass, by distinct URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedImages {
    pub resolved: usize,
    pub failed: usize,
}

/// Rebuilds `doc` with pixels attached to every image the resolver can load.
///
/// The result has the same blocks and spans in the same order. Each distinct
/// URL is resolved once.
pub fn with_resolved_images<R: ImageResolver + ?Sized>(doc: Document, resolver: &R) -> Document {
    resolve_images_with_report(doc, resolver).0
}

/// Same as [`with_resolved_images`], also reporting how many URLs loaded.
pub fn resolve_images_with_report<R: ImageResolver + ?Sized>(
    doc: Document,
    resolver: &R,
) -> (Document, ResolvedImages) {
    let mut cache = PixelCache::new(resolver);
    let blocks = doc
        .into_iter()
        .map(|block| match block {
            Block::Image { alt_text, url, .. } => {
                let pixels = cache.get(&url);
                Block::Image {
                    alt_text,
                    url,
                    pixels,
                }
            }
            Block::Paragraph { spans } => Block::Paragraph {
                spans: spans
                    .into_iter()
                    .map(|span| match span {
                        Span::InlineImage { alt_text, url, .. } => {
                            let pixels = cache.get(&url);
                            Span::InlineImage {
                                alt_text,
                                url,
                                pixels,
                            }
                        }
                        other => other,
                    })
                    .collect(),
            },
            other => other,
        })
        .collect::<Vec<_>>();

    let report = cache.report();
    log::debug!(
        "resolved {} image url(s), {} failed",
        report.resolved,
        report.failed
    );
    (Document::from(blocks), report)
}

struct PixelCache<'r, R: ?Sized> {
    resolver: &'r R,
    seen: HashMap<String, Option<Pixels>>,
}

impl<'r, R: ImageResolver + ?Sized> PixelCache<'r, R> {
    fn new(resolver: &'r R) -> Self {
        Self {
            resolver,
            seen: HashMap::new(),
        }
    }

    fn get(&mut self, url: &str) -> Option<Pixels> {
        if let Some(hit) = self.seen.get(url) {
            return hit.clone();
        }
        let pixels = match self.resolver.resolve(url) {
            Ok(pixels) => Some(pixels),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        };
        self.seen.insert(url.to_string(), pixels.clone());
        pixels
    }

    fn report(&self) -> ResolvedImages {
        let resolved = self.seen.values().filter(|p| p.is_some()).count();
        ResolvedImages {
            resolved,
            failed: self.seen.len() - resolved,
        }
    }
}
