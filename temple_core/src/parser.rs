use tracing::trace;

use crate::config::ParseTemplatesOptions;
use crate::error::TempleError;
use crate::error::TempleResult;
use crate::import_scanner::qualified_names;
use crate::import_scanner::scan_imports;
use crate::literal_matcher::LiteralPolicy;
use crate::literal_matcher::match_literals;
use crate::matches::TemplateMatch;
use crate::tag_matcher::match_tags;

/// A region that was silently skipped during scanning. These do not prevent
/// the scan from completing but indicate problems in the source content.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ScanDiagnostic {
	/// An opening tag with no matching closing tag before end of input.
	UnclosedTemplateTag { tag_name: String, offset: usize },
	/// An opening backtick with no matching closing backtick before end of
	/// input.
	UnterminatedTemplateLiteral { tag_name: String, offset: usize },
}

impl ScanDiagnostic {
	/// Byte offset of the skipped opening construct.
	pub fn offset(&self) -> usize {
		match self {
			ScanDiagnostic::UnclosedTemplateTag { offset, .. }
			| ScanDiagnostic::UnterminatedTemplateLiteral { offset, .. } => *offset,
		}
	}
}

/// Scan source text for embedded template regions and return every match,
/// ordered by ascending start offset.
///
/// Tag matching runs when `options.template_tag` is set; literal matching
/// always runs, restricted to import-resolved identifiers when
/// `options.template_literal` filters are configured and unrestricted
/// otherwise. `relative_path` describes the originating file and is carried
/// into trace events only — it never gates which matchers run.
///
/// The scan never fails: absence of templates is an empty list, and
/// malformed regions are skipped. Use
/// [`parse_templates_with_diagnostics`] or [`parse_templates_strict`] when
/// skipped regions should be surfaced.
pub fn parse_templates(
	source_text: &str,
	relative_path: &str,
	options: &ParseTemplatesOptions,
) -> Vec<TemplateMatch> {
	let (matches, _) = scan(source_text, relative_path, options);
	matches
}

/// Like [`parse_templates`], but also returns one [`ScanDiagnostic`] per
/// skipped region, ordered by ascending offset.
pub fn parse_templates_with_diagnostics(
	source_text: &str,
	relative_path: &str,
	options: &ParseTemplatesOptions,
) -> (Vec<TemplateMatch>, Vec<ScanDiagnostic>) {
	scan(source_text, relative_path, options)
}

/// Like [`parse_templates`], but fails on the first skipped region instead
/// of collecting diagnostics.
pub fn parse_templates_strict(
	source_text: &str,
	relative_path: &str,
	options: &ParseTemplatesOptions,
) -> TempleResult<Vec<TemplateMatch>> {
	let (matches, diagnostics) = scan(source_text, relative_path, options);

	if let Some(diagnostic) = diagnostics.into_iter().next() {
		return Err(match diagnostic {
			ScanDiagnostic::UnclosedTemplateTag { tag_name, offset } => {
				TempleError::UnclosedTemplateTag {
					tag_name,
					path: relative_path.to_string(),
					offset,
				}
			}
			ScanDiagnostic::UnterminatedTemplateLiteral { tag_name, offset } => {
				TempleError::UnterminatedTemplateLiteral {
					tag_name,
					path: relative_path.to_string(),
					offset,
				}
			}
		});
	}

	Ok(matches)
}

fn scan(
	source_text: &str,
	relative_path: &str,
	options: &ParseTemplatesOptions,
) -> (Vec<TemplateMatch>, Vec<ScanDiagnostic>) {
	trace!(path = relative_path, "scanning for template regions");

	let mut matches = vec![];
	let mut diagnostics = vec![];

	if let Some(tag_name) = options.template_tag.as_deref() {
		let (tag_matches, tag_diagnostics) = match_tags(source_text, tag_name);
		matches.extend(tag_matches);
		diagnostics.extend(tag_diagnostics);
	}

	let names;
	let policy = match options.template_literal.as_deref() {
		Some(filters) => {
			let bindings = scan_imports(source_text);
			names = qualified_names(&bindings, filters);
			LiteralPolicy::Filtered(&names)
		}
		None => LiteralPolicy::Unrestricted,
	};

	let (literal_matches, literal_diagnostics) = match_literals(source_text, &policy);
	matches.extend(literal_matches);
	diagnostics.extend(literal_diagnostics);

	// Tag matches were collected first, so the stable sort keeps them ahead
	// of literal matches on exact start-offset ties.
	matches.sort_by_key(|template_match| template_match.start.offset);
	diagnostics.sort_by_key(ScanDiagnostic::offset);

	(matches, diagnostics)
}
