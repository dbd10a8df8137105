//! Placeholder substitution for command and description templates

use crate::domain::entities::Document;

/// Replace the named placeholders in `template` with values derived from
/// `document`:
///
/// - `{tex_file}` - the document path, always ending in `.tex`
/// - `{file}` - the path without `.tex`
/// - `{file_parent}` - parent directory, `.` when there is none
/// - `{pdf_file}` - the PDF produced by the build
/// - `{name}` - the file stem without directory
///
/// Unknown `{...}` tokens and unbalanced braces are copied verbatim, so shell
/// syntax such as `${VAR}` survives formatting.
pub fn format_command(template: &str, document: &Document) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let token = &after[..close];
        match resolve(token, document) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(token);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn resolve(token: &str, document: &Document) -> Option<String> {
    let value = match token {
        "tex_file" => document.path().display().to_string(),
        "file" => document.base_name(),
        "file_parent" => document.parent_dir().display().to_string(),
        "pdf_file" => document.pdf_path().display().to_string(),
        "name" => document.stem(),
        _ => return None,
    };
    Some(value)
}
