use crate::domain::model::{AssetResult, Identity, ResumeVariant};

/// The resume exposed for download: fixed filename, MIME type, and the full
/// byte payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeHandle {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn download_file_name(identity: &Identity, variant: ResumeVariant) -> String {
    format!(
        "{}_Resume.{}",
        identity.name.replace(' ', "_"),
        variant.extension()
    )
}

/// Builds the download handle from a resolved asset. `Absent` yields `None`;
/// the renderer turns that into a notice plus a direct-contact suggestion.
pub fn resume_handle(
    identity: &Identity,
    variant: ResumeVariant,
    asset: &AssetResult,
) -> Option<ResumeHandle> {
    asset.as_bytes().map(|bytes| ResumeHandle {
        filename: download_file_name(identity, variant),
        content_type: variant.content_type(),
        bytes: bytes.to_vec(),
    })
}
