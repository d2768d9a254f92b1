use std::collections::HashMap;
use std::collections::HashSet;

use derive_more::Deref;
use derive_more::DerefMut;
use logos::Logos;
use serde::Deserialize;
use serde::Serialize;
use snailquote::unescape;
use tracing::trace;

use crate::config::ImportFilter;
use crate::literal_matcher::is_identifier_byte;
use crate::tag_matcher::memstr;

/// The keyword that opens an import declaration.
const IMPORT_KEYWORD: &[u8] = b"import";

/// The imported-name recorded for default-import specifiers.
const DEFAULT_SPECIFIER: &str = "default";

/// One resolved import binding: `import { hbs as someHbs } from 'pkg'`
/// produces `{ import_path: "pkg", imported_identifier: "hbs",
/// local_alias: "someHbs" }`. When no `as` alias is written, `local_alias`
/// repeats the imported identifier.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBinding {
	pub import_path: String,
	pub imported_identifier: String,
	pub local_alias: String,
}

/// The set of local names that qualified under the configured import
/// filters.
#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct QualifiedNames(HashSet<String>);

impl FromIterator<String> for QualifiedNames {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Raw tokens produced by logos for the tail of an import declaration (the
/// text following the `import` keyword).
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("from")]
	From,
	#[token("as")]
	As,
	#[token("{")]
	BraceOpen,
	#[token("}")]
	BraceClose,
	#[token(",")]
	Comma,
	#[regex(r"[ \t\r\n]+")]
	Whitespace,
	#[regex(r"[$A-Za-z_][$0-9A-Za-z_]*")]
	Ident,
	#[regex(r#""([^"\\]|\\.)*""#)]
	DoubleQuotedString,
	#[regex(r"'([^'\\]|\\.)*'")]
	SingleQuotedString,
}

/// Context states for the state machine that drives import-declaration
/// recognition.
enum DeclarationContext {
	/// Before the specifier list or module path.
	Clause,
	/// Inside the braced named-specifier list.
	Specifiers,
	/// After `from`, expecting the quoted module path.
	Path,
}

/// Scan source text for import declarations and return every binding they
/// declare, in source order.
///
/// Only the import-declaration shape is understood — the scan never builds
/// a module-level syntax tree. Declarations that do not fit the shape
/// contribute no bindings and never abort the scan.
pub fn scan_imports(source: &str) -> Vec<ImportBinding> {
	let bytes = source.as_bytes();
	let mut bindings = vec![];
	let mut cursor = 0;

	while cursor < bytes.len() {
		let Some(offset) = memstr(&bytes[cursor..], IMPORT_KEYWORD) else {
			break;
		};
		let keyword_start = cursor + offset;
		let keyword_end = keyword_start + IMPORT_KEYWORD.len();

		// Word boundaries: `reimport` or `imports` are not declarations.
		let bounded = (keyword_start == 0 || !is_identifier_byte(bytes[keyword_start - 1]))
			&& bytes
				.get(keyword_end)
				.is_none_or(|byte| !is_identifier_byte(*byte));

		if !bounded {
			cursor = keyword_end;
			continue;
		}

		match parse_declaration(&source[keyword_end..]) {
			Some((declared, consumed)) => {
				bindings.extend(declared);
				cursor = keyword_end + consumed;
			}
			None => {
				trace!(offset = keyword_start, "skipping malformed import declaration");
				cursor = keyword_end;
			}
		}
	}

	bindings
}

/// Resolve the local names that qualify under the given filters.
///
/// Bindings are applied top-to-bottom into an overwrite map keyed by local
/// name, so the most recently encountered declaration for a local name
/// governs whether it qualifies. This is a flat, file-level heuristic — a
/// re-import inside a nested scope is treated exactly like one at the top
/// level.
pub fn qualified_names(bindings: &[ImportBinding], filters: &[ImportFilter]) -> QualifiedNames {
	let mut resolved: HashMap<&str, bool> = HashMap::new();

	for binding in bindings {
		let qualifies = filters.iter().any(|filter| {
			filter.import_path == binding.import_path
				&& filter.import_identifier == binding.imported_identifier
		});
		resolved.insert(binding.local_alias.as_str(), qualifies);
	}

	resolved
		.into_iter()
		.filter_map(|(name, qualifies)| qualifies.then(|| name.to_string()))
		.collect()
}

/// Parse a single import declaration from `tail` (the text immediately
/// following the `import` keyword). Returns the bindings it declares and
/// the number of bytes consumed, or `None` when the declaration does not
/// fit the recognized shape.
fn parse_declaration(tail: &str) -> Option<(Vec<ImportBinding>, usize)> {
	let mut lexer = RawToken::lexer(tail);
	let mut context = DeclarationContext::Clause;
	let mut default_local: Option<String> = None;
	let mut specifiers: Vec<(String, Option<String>)> = vec![];
	let mut pending: Option<String> = None;
	let mut pending_alias: Option<String> = None;
	let mut saw_as = false;

	while let Some(result) = lexer.next() {
		// Unrecognized bytes end the declaration.
		let Ok(raw) = result else {
			return None;
		};

		match context {
			DeclarationContext::Clause => match raw {
				RawToken::Whitespace | RawToken::Comma => {}
				RawToken::Ident if default_local.is_none() && specifiers.is_empty() => {
					default_local = Some(lexer.slice().to_string());
				}
				RawToken::BraceOpen => context = DeclarationContext::Specifiers,
				RawToken::From => context = DeclarationContext::Path,
				_ => return None,
			},
			DeclarationContext::Specifiers => match raw {
				RawToken::Whitespace => {}
				RawToken::Ident if pending.is_none() => {
					pending = Some(lexer.slice().to_string());
				}
				RawToken::Ident if saw_as && pending_alias.is_none() => {
					pending_alias = Some(lexer.slice().to_string());
				}
				RawToken::As if pending.is_some() && !saw_as => saw_as = true,
				RawToken::Comma | RawToken::BraceClose => {
					if let Some(imported) = pending.take() {
						specifiers.push((imported, pending_alias.take()));
					}
					saw_as = false;
					if matches!(raw, RawToken::BraceClose) {
						context = DeclarationContext::Clause;
					}
				}
				_ => return None,
			},
			DeclarationContext::Path => match raw {
				RawToken::Whitespace => {}
				RawToken::SingleQuotedString | RawToken::DoubleQuotedString => {
					let slice = lexer.slice();
					let inner = &slice[1..slice.len() - 1];
					let path = if inner.contains('\\') {
						unescape(inner).ok()?
					} else {
						inner.to_string()
					};

					let mut bindings = vec![];
					if let Some(local) = default_local {
						bindings.push(ImportBinding {
							import_path: path.clone(),
							imported_identifier: DEFAULT_SPECIFIER.to_string(),
							local_alias: local,
						});
					}
					for (imported, alias) in specifiers {
						let local = alias.unwrap_or_else(|| imported.clone());
						bindings.push(ImportBinding {
							import_path: path.clone(),
							imported_identifier: imported,
							local_alias: local,
						});
					}

					return Some((bindings, lexer.span().end));
				}
				_ => return None,
			},
		}
	}

	None
}
