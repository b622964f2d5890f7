mod extractor;

pub use extractor::{extract_emails, extract_from_bytes, scan_rows, ExtractError, FileKind};
