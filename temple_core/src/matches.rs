use std::ops::Range;

use serde::Deserialize;
use serde::Serialize;

/// The kind of template region a match describes.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchKind {
	/// A markup-style `<template> ... </template>` block.
	TemplateTag,
	/// An identifier-tagged backtick literal.
	TemplateLiteral,
}

/// Where one delimiter of a template region was found.
///
/// This is a minimal structured record: only the matched text, its byte
/// offset, and the captured identifier (for literal starts) are carried —
/// no engine-specific match-object echoes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelimiterMatch {
	/// The exact delimiter text, e.g. `<template>` or ``hbs` ``.
	pub matched_text: String,
	/// Byte offset of the start of `matched_text` within the source.
	pub offset: usize,
	/// The bare identifier captured from a literal start, e.g. `hbs`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub captured: Option<String>,
}

impl DelimiterMatch {
	/// Byte offset just past the end of the matched delimiter text.
	pub fn end_offset(&self) -> usize {
		self.offset + self.matched_text.len()
	}
}

/// One located template region.
///
/// The content span is `[start.end_offset(), end.offset)` — the region
/// between the delimiters, excluding both.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMatch {
	/// Which matcher produced this region.
	#[serde(rename = "type")]
	pub kind: MatchKind,
	/// The opening delimiter.
	pub start: DelimiterMatch,
	/// The closing delimiter.
	pub end: DelimiterMatch,
	/// The identifier that introduced a literal region; `None` for tag
	/// regions.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tag_name: Option<String>,
}

impl TemplateMatch {
	/// Byte range of the template content, excluding both delimiters.
	pub fn contents_range(&self) -> Range<usize> {
		self.start.end_offset()..self.end.offset
	}

	/// Byte range of the full region, including both delimiters.
	pub fn outer_range(&self) -> Range<usize> {
		self.start.offset..self.end.end_offset()
	}

	/// Slice the template content out of the source this match was produced
	/// from.
	pub fn contents<'a>(&self, source: &'a str) -> &'a str {
		&source[self.contents_range()]
	}
}
