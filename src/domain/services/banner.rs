//! Edit warning banner
//!
//! Every generated file starts with the same three lines in the component's
//! comment syntax. The banner is never merged with user content.

/// Three-line banner rendered with `comment_prefix`
pub fn edit_warning(comment_prefix: &str) -> String {
    format!(
        "{p}WARNING\n\
         {p}This file was autogenerated, and _will_ be overwritten by bomcfg.\n\
         {p}Any edits you make here _will_ be lost.\n",
        p = comment_prefix
    )
}

/// Prefix `config` with the banner for `comment_prefix`
pub fn with_edit_warning(comment_prefix: &str, config: &str) -> String {
    let mut out = edit_warning(comment_prefix);
    out.push_str(config);
    out
}
