use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TempleError {
	#[error("unclosed `<{tag_name}>` tag in `{path}` at byte {offset}")]
	#[diagnostic(
		code(temple::unclosed_template_tag),
		help("add `</{tag_name}>` to close this template region")
	)]
	UnclosedTemplateTag {
		tag_name: String,
		path: String,
		offset: usize,
	},

	#[error("unterminated `{tag_name}` template literal in `{path}` at byte {offset}")]
	#[diagnostic(
		code(temple::unterminated_template_literal),
		help("add a closing backtick to terminate this template literal")
	)]
	UnterminatedTemplateLiteral {
		tag_name: String,
		path: String,
		offset: usize,
	},
}

pub type TempleResult<T> = Result<T, TempleError>;
