use serde::Deserialize;
use serde::Serialize;

/// The tag word conventionally used for markup-style template regions.
pub const DEFAULT_TEMPLATE_TAG: &str = "template";

/// One `(import path, imported identifier)` pair that marks a template
/// literal tag as legitimate.
///
/// A filter of `{ import_path: "ember-cli-htmlbars", import_identifier:
/// "hbs" }` qualifies any local name bound by
/// `import { hbs } from 'ember-cli-htmlbars'`, including aliases bound with
/// `as`. The identifier `default` qualifies default-import bindings.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFilter {
	pub import_path: String,
	pub import_identifier: String,
}

impl ImportFilter {
	pub fn new(import_path: impl Into<String>, import_identifier: impl Into<String>) -> Self {
		Self {
			import_path: import_path.into(),
			import_identifier: import_identifier.into(),
		}
	}
}

/// Options for one scan invocation. Immutable for the duration of the scan.
///
/// The default value disables tag matching and leaves literal matching
/// unrestricted; [`ParseTemplatesOptions::defaults`] instead enables the
/// conventional tag word and the well-known literal providers.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseTemplatesOptions {
	/// Tag word to match for markup-style regions (e.g. `"template"`);
	/// `None` disables tag matching. Only one tag word is matched per scan.
	#[serde(default)]
	pub template_tag: Option<String>,
	/// Import filters restricting literal matching to import-resolved
	/// identifiers; `None` treats any identifier immediately followed by a
	/// backtick as a candidate tag.
	#[serde(default)]
	pub template_literal: Option<Vec<ImportFilter>>,
}

impl ParseTemplatesOptions {
	/// Options matching the conventional `<template>` tag and the
	/// well-known template literal providers.
	pub fn defaults() -> Self {
		Self {
			template_tag: Some(DEFAULT_TEMPLATE_TAG.to_string()),
			template_literal: Some(default_literal_filters()),
		}
	}

	/// Options that only match markup-style regions for the given tag word.
	pub fn with_template_tag(tag: impl Into<String>) -> Self {
		Self {
			template_tag: Some(tag.into()),
			template_literal: None,
		}
	}

	/// Options that only match literals whose tags resolve to one of the
	/// given filters.
	pub fn with_literal_filters(filters: Vec<ImportFilter>) -> Self {
		Self {
			template_tag: None,
			template_literal: Some(filters),
		}
	}
}

/// The well-known `(path, identifier)` pairs that provide template literal
/// tags.
pub fn default_literal_filters() -> Vec<ImportFilter> {
	vec![
		ImportFilter::new("ember-cli-htmlbars", "hbs"),
		ImportFilter::new("ember-cli-htmlbars-inline-precompile", "default"),
		ImportFilter::new("htmlbars-inline-precompile", "default"),
		ImportFilter::new("@ember/template-compilation", "precompileTemplate"),
		ImportFilter::new("@glimmerx/component", "hbs"),
		ImportFilter::new("@glimmer/core", "precompileTemplate"),
	]
}
