//! Shared fixtures for the crate test suite.

use crate::config::ImportFilter;
use crate::import_scanner::ImportBinding;
use crate::matches::DelimiterMatch;
use crate::matches::MatchKind;
use crate::matches::TemplateMatch;

/// The alias-resolution vector: the bare `hbs` is re-bound from the wrong
/// package, so only `someHbs` qualifies.
pub const ALIAS_IMPORT_SOURCE: &str = "import { hbs as someHbs } from 'ember-cli-htmlbars';\nimport { hbs } from 'not-the-hbs-you-want';\nhbs`Hello!`\nsomeHbs`Howdy!`";

pub fn htmlbars_filter() -> Vec<ImportFilter> {
	vec![ImportFilter::new("ember-cli-htmlbars", "hbs")]
}

pub fn binding(path: &str, imported: &str, local: &str) -> ImportBinding {
	ImportBinding {
		import_path: path.to_string(),
		imported_identifier: imported.to_string(),
		local_alias: local.to_string(),
	}
}

pub fn tag_match(
	open: impl Into<String>,
	open_offset: usize,
	close: impl Into<String>,
	close_offset: usize,
) -> TemplateMatch {
	TemplateMatch {
		kind: MatchKind::TemplateTag,
		start: DelimiterMatch {
			matched_text: open.into(),
			offset: open_offset,
			captured: None,
		},
		end: DelimiterMatch {
			matched_text: close.into(),
			offset: close_offset,
			captured: None,
		},
		tag_name: None,
	}
}

pub fn literal_match(tag: &str, start_offset: usize, end_offset: usize) -> TemplateMatch {
	TemplateMatch {
		kind: MatchKind::TemplateLiteral,
		start: DelimiterMatch {
			matched_text: format!("{tag}`"),
			offset: start_offset,
			captured: Some(tag.to_string()),
		},
		end: DelimiterMatch {
			matched_text: "`".to_string(),
			offset: end_offset,
			captured: None,
		},
		tag_name: Some(tag.to_string()),
	}
}
