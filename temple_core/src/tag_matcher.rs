use tracing::trace;

use crate::matches::DelimiterMatch;
use crate::matches::MatchKind;
use crate::matches::TemplateMatch;
use crate::parser::ScanDiagnostic;

/// Scan `source` for `<tag ...>` ... `</tag>` pairs for a single configured
/// tag word, left to right, resuming after each closing tag.
///
/// The first closing tag after an opening tag terminates the region —
/// same-named tags do not nest. An opening tag with no closing tag before
/// end of input yields a diagnostic instead of a match, and scanning
/// resumes after the unmatched opening construct.
pub(crate) fn match_tags(
	source: &str,
	tag_name: &str,
) -> (Vec<TemplateMatch>, Vec<ScanDiagnostic>) {
	let bytes = source.as_bytes();
	let open_marker = format!("<{tag_name}");
	let close_marker = format!("</{tag_name}>");
	let mut matches = vec![];
	let mut diagnostics = vec![];
	let mut search_from = 0;

	while search_from < bytes.len() {
		let Some(open_offset) = memstr(&bytes[search_from..], open_marker.as_bytes()) else {
			break;
		};
		let abs_open = search_from + open_offset;
		let after_marker = abs_open + open_marker.len();

		// The tag word must be closed by `>` directly or after attributes;
		// `<templates>` is not an occurrence of the tag `template`.
		let open_end = match bytes.get(after_marker) {
			Some(b'>') => after_marker + 1,
			Some(byte) if byte.is_ascii_whitespace() => {
				match memstr(&bytes[after_marker..], b">") {
					Some(gt_offset) => after_marker + gt_offset + 1,
					None => {
						trace!(offset = abs_open, "skipping opening tag without `>`");
						search_from = after_marker;
						continue;
					}
				}
			}
			_ => {
				search_from = after_marker;
				continue;
			}
		};

		let Some(close_offset) = memstr(&bytes[open_end..], close_marker.as_bytes()) else {
			trace!(offset = abs_open, tag_name, "skipping unclosed template tag");
			diagnostics.push(ScanDiagnostic::UnclosedTemplateTag {
				tag_name: tag_name.to_string(),
				offset: abs_open,
			});
			search_from = open_end;
			continue;
		};
		let abs_close = open_end + close_offset;

		matches.push(TemplateMatch {
			kind: MatchKind::TemplateTag,
			start: DelimiterMatch {
				matched_text: source[abs_open..open_end].to_string(),
				offset: abs_open,
				captured: None,
			},
			end: DelimiterMatch {
				matched_text: close_marker.clone(),
				offset: abs_close,
				captured: None,
			},
			tag_name: None,
		});
		search_from = abs_close + close_marker.len();
	}

	(matches, diagnostics)
}

pub(crate) fn memstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}
