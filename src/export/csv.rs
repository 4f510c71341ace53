use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::probe::prelude::ProbeResult;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const HEADER: &str = "URL;HTTP3Support;ALPNProtocol;Notes";
const SEPARATOR: &str = ";";

/// Writes results as semicolon separated values, preceded by a UTF-8 BOM so
/// spreadsheet tools pick the right encoding. Fields are not escaped.
pub fn write_csv<W: Write>(mut writer: W, results: &[ProbeResult]) -> std::io::Result<()> {
    writer.write_all(UTF8_BOM)?;
    writeln!(writer, "{HEADER}")?;
    for result in results {
        writeln!(writer, "{}", result.fields().join(SEPARATOR))?;
    }
    writer.flush()
}

/// Creates (or truncates) `path` and writes `results` into it.
pub fn export_csv(path: impl AsRef<Path>, results: &[ProbeResult]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(BufWriter::new(file), results)?;
    log::info!("CSV export: {} ({} rows)", path.display(), results.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::prelude::{AlpnProtocol, Http3Support};

    fn sample() -> Vec<ProbeResult> {
        vec![
            ProbeResult::new(
                "https://www.cloudflare.com",
                Http3Support::Yes,
                AlpnProtocol::H3,
                "HTTP/3 disponible et utilise",
            ),
            ProbeResult::new(
                "https://example.com",
                Http3Support::No,
                AlpnProtocol::Http11,
                "HTTP/1.1 utilise",
            ),
        ]
    }

    #[test]
    fn test_write_csv_layout() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &sample()).unwrap();

        assert!(buf.starts_with(UTF8_BOM));
        let text = String::from_utf8(buf[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(
            text,
            "URL;HTTP3Support;ALPNProtocol;Notes\n\
             https://www.cloudflare.com;Yes;h3;HTTP/3 disponible et utilise\n\
             https://example.com;No;http/1.1;HTTP/1.1 utilise\n"
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(&buf[3..], b"URL;HTTP3Support;ALPNProtocol;Notes\n");
    }

    #[test]
    fn test_export_csv_to_file() {
        use tempfile::NamedTempFile;
        let tmp = NamedTempFile::new().unwrap();

        export_csv(tmp.path(), &sample()).unwrap();

        let bytes = std::fs::read(tmp.path()).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
        let text = String::from_utf8_lossy(&bytes);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("https://example.com;No;http/1.1;HTTP/1.1 utilise"));
    }
}
