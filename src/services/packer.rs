use crate::types::PageRecord;

/// Separator line framing the title/URL block of each packed page.
pub const SEPARATOR: &str = "================";

/// Suggested filename for the packed artifact.
pub const DEFAULT_OUTPUT_NAME: &str = "webpagepack-output.txt";

/// Fixed header every packed document starts with.
///
/// Downstream consumers (often AI pipelines) parse the file by this exact
/// layout, so the text is frozen byte-for-byte, prose quirks included.
pub const PREAMBLE: &str = r#"================================================================
WebpagePack Output File
================================================================

Purpose:
--------
This file contains a packed content of the multiple web pages' contents about a specific topic.
It is designed to be easily consumable by AI systems for analysis, summarize, or other automated processes.

File Format:
------------
The content is organized as follows:
1. This header section
2. Multiple web page entries, each consisting of:
  a. A separator line (================)
  b. The title of web page (Title: )
  c. The URL of web page (URL: )
  d. Another separator line
  e. The full text contents of the web page formatted with Markdown
  f. A blank line

Usage Guidelines:
-----------------
1. This file should be treated as read-only.
2. When processing this file, use the separators and "Title:" and "URL:" markers to distinguish contexts between different web pages in this analysis.

Notes:
------
- Some pages may have useless information such as page header, page footer, website menus and links to other pages. You should ignore these as needed.
- Binary data are not included in this packed representation.

================================================================
Web Pages Contents
================================================================
"#;

pub struct DocumentPacker;

impl DocumentPacker {
    /// Concatenate records into one packed document: the fixed preamble, then
    /// one framed section per record in input order.
    ///
    /// Titles, URLs and bodies are embedded verbatim. A body that itself
    /// contains the separator line or a label prefix will visually corrupt
    /// the framing; that is an accepted limitation of the format, not
    /// something this function escapes. Note the spacing: one blank line
    /// between the second separator and the body, two between a body and the
    /// next section. Consumers parse by these exact bytes.
    pub fn pack(records: &[PageRecord]) -> String {
        let mut output = String::from(PREAMBLE);

        for record in records {
            output.push_str(&format!(
                "\n{}\nTitle: {}\nURL: {}\n{}\n\n{}\n\n",
                SEPARATOR, record.title, record.source_url, SEPARATOR, record.content
            ));
        }

        output
    }
}
