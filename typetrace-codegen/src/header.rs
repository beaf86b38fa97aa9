//! The generated-file header and marker contract.

/// Header lines every generator embeds at the top of each produced file.
///
/// The first line doubles as the marker the cleaner uses to tell generated
/// files from user files, so it must stay byte-for-byte stable across
/// releases: changing it breaks cleanup of previously generated workspaces.
pub const FILE_HEADER: [&str; 3] = [
    "This client was automatically generated by typetrace. ** Do Not Edit **",
    "To update this file, run:",
    "  typetrace build",
];

/// Marker identifying a file as typetrace-generated.
pub const GENERATED_FILE_MARKER: &str = FILE_HEADER[0];

/// Header lines for a [`crate::RendererOptions`] template.
pub fn file_header() -> Vec<String> {
    FILE_HEADER.iter().map(|line| line.to_string()).collect()
}

/// Render header lines as a line-comment block with the given prefix
/// (e.g. `"// "` or `"# "`).
pub fn comment_header(lines: &[String], prefix: &str) -> String {
    lines.iter().map(|line| format!("{prefix}{line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_first_header_line() {
        assert_eq!(GENERATED_FILE_MARKER, FILE_HEADER[0]);
    }

    #[test]
    fn test_comment_header_renders_line_comments() {
        let header = comment_header(&file_header(), "// ");
        insta::assert_snapshot!(header, @r"
        // This client was automatically generated by typetrace. ** Do Not Edit **
        // To update this file, run:
        //   typetrace build
        ");
    }
}
