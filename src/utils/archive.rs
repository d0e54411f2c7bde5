use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::errors::{Result, WorkSystemError};

/// 将一组 (归档内文件名, 内容) 打包为内存中的 ZIP
///
/// 全有或全无：任何一个条目写入失败，整个归档失败，不返回半成品。
/// 条目名由调用方消歧，这里不做去重。
pub fn build_bundle(entries: Vec<(String, Vec<u8>)>) -> Result<Vec<u8>> {
    if entries.is_empty() {
        return Err(WorkSystemError::export_failure(
            "Bundle has no files to archive",
        ));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (name, data) in entries {
        writer.start_file(name.as_str(), options)?;
        writer
            .write_all(&data)
            .map_err(|e| WorkSystemError::export_failure(format!("写入归档条目 {name} 失败: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| WorkSystemError::export_failure(format!("归档收尾失败: {e}")))?;
    Ok(cursor.into_inner())
}

/// 为归档内条目生成唯一文件名：`{requirement-slug}-{file_id}{ext}`
///
/// 扩展名取自原始上传文件名，避免下载后无法识别类型。
pub fn bundle_entry_name(requirement_name: &str, file_id: i64, original_name: &str) -> String {
    let ext = std::path::Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_ascii_lowercase()))
        .unwrap_or_default();
    format!("{}-{}{}", super::slug::slugify(requirement_name), file_id, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_bundle_round_trip() {
        let bytes = build_bundle(vec![
            ("publications-1.pdf".to_string(), b"pdf bytes".to_vec()),
            ("committee-work-2.docx".to_string(), b"doc bytes".to_vec()),
        ])
        .unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = Vec::new();
        archive
            .by_name("publications-1.pdf")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"pdf bytes");
    }

    #[test]
    fn test_empty_bundle_is_an_error() {
        assert!(build_bundle(Vec::new()).is_err());
    }

    #[test]
    fn test_entry_name_keeps_extension() {
        assert_eq!(
            bundle_entry_name("Committee Work", 7, "Protokoll Sitzung.PDF"),
            "committee-work-7.pdf"
        );
        assert_eq!(bundle_entry_name("Misc", 3, "no_extension"), "misc-3");
    }
}
