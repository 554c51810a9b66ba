//! File name check for the outbound form upload.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCheck {
    NoFile,
    Accepted,
    Rejected { found: String },
}

/// Exact, case-sensitive comparison with the required name
pub fn check_file_name(required: &str, chosen: Option<&str>) -> FileCheck {
    match chosen {
        None => FileCheck::NoFile,
        Some(name) if name == required => FileCheck::Accepted,
        Some(name) => FileCheck::Rejected {
            found: name.to_string(),
        },
    }
}
