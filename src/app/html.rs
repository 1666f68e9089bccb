use crate::app::naming::titleize;
use crate::app::paths::best_effort;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Mp4,
    Webm,
    Ogg,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Mp4, SourceKind::Webm, SourceKind::Ogg];

    pub fn extension(&self) -> &'static str {
        match self {
            SourceKind::Mp4 => "mp4",
            SourceKind::Webm => "webm",
            SourceKind::Ogg => "ogg",
        }
    }

    /// MIME type with codecs parameter. The mp4 entry carries no video codec token.
    pub fn mime_type(&self) -> &'static str {
        match self {
            SourceKind::Mp4 => "video/mp4; codecs=,vorbis",
            SourceKind::Webm => "video/webm; codecs=vp8,vorbis",
            SourceKind::Ogg => "video/ogg; codecs=theora,vorbis",
        }
    }

    fn from_file_name(file_name: &str, base_name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| file_name == format!("{}.{}", base_name, kind.extension()))
    }
}

/// Encoded files named `<base_name>.{mp4,webm,ogg}` under `directory`, in walk order.
pub fn collect_sources(directory: &Path, base_name: &str) -> Vec<SourceKind> {
    let walker = WalkBuilder::new(directory)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    walker
        .filter_map(|result| best_effort("Walking output directory", result))
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy();
            SourceKind::from_file_name(&name, base_name)
        })
        .collect()
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn render_index(base_name: &str, sources: &[SourceKind]) -> String {
    let tags: Vec<String> = sources
        .iter()
        .map(|kind| {
            format!(
                "      <source src=\"{}.{}\" type=\"{}\">",
                escape_attr(base_name),
                kind.extension(),
                kind.mime_type()
            )
        })
        .collect();

    let mut out = String::from("<!DOCTYPE html>\n<html>\n  <head>\n");
    out.push_str(&format!("    <title>{}</title>\n", titleize(base_name)));
    out.push_str(concat!(
        "    <style>\n",
        "      div {\n",
        "        margin: 0 auto;\n",
        "      }\n",
        "    </style>\n",
        "  </head>\n",
        "  <body>\n",
        "    <div>\n",
        "    <video controls>\n",
    ));
    out.push_str(&tags.join("\n"));
    out.push_str("\n    </video>\n    </div>\n  </body>\n</html>\n");
    out
}

/// Writes `index.html` into `directory`, replacing any existing page.
pub fn generate_index(directory: &Path, base_name: &str) -> Result<PathBuf> {
    let sources = collect_sources(directory, base_name);
    let page = render_index(base_name, &sources);
    let target = directory.join(INDEX_FILE);

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options
        .open(&target)
        .with_context(|| format!("Failed to open {}", target.display()))?;
    file.write_all(page.as_bytes())
        .with_context(|| format!("Failed to write {}", target.display()))?;

    log::info!("Wrote {} with {} source(s)", target.display(), sources.len());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_only_present_sources() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("foo.mp4"), "x").unwrap();
        fs::write(tmp.path().join("foo.ogg"), "x").unwrap();
        fs::write(tmp.path().join("barfoo.webm"), "x").unwrap();
        fs::write(tmp.path().join("foo.mov"), "x").unwrap();

        let sources = collect_sources(tmp.path(), "foo");
        assert_eq!(sources, vec![SourceKind::Mp4, SourceKind::Ogg]);
    }

    #[test]
    fn sources_follow_walk_order() {
        let tmp = TempDir::new().unwrap();
        for ext in ["ogg", "webm", "mp4"] {
            fs::write(tmp.path().join(format!("clip.{}", ext)), "x").unwrap();
        }

        let sources = collect_sources(tmp.path(), "clip");
        assert_eq!(sources, vec![SourceKind::Mp4, SourceKind::Ogg, SourceKind::Webm]);
    }

    #[test]
    fn render_index_template() {
        let page = render_index("my-clip", &[SourceKind::Mp4, SourceKind::Webm]);
        assert!(page.starts_with("<!DOCTYPE html>\n"));
        assert!(page.contains("<title>My Clip</title>"));
        assert!(page.contains(
            "      <source src=\"my-clip.mp4\" type=\"video/mp4; codecs=,vorbis\">\n      <source src=\"my-clip.webm\" type=\"video/webm; codecs=vp8,vorbis\">\n    </video>"
        ));
        assert!(page.ends_with("</html>\n"));
    }

    #[test]
    fn render_index_escapes_source_names() {
        let page = render_index("a\"b", &[SourceKind::Ogg]);
        assert!(page.contains("src=\"a&quot;b.ogg\""));
    }

    #[test]
    fn generate_index_writes_two_tags() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("foo.mp4"), "x").unwrap();
        fs::write(tmp.path().join("foo.ogg"), "x").unwrap();

        let written = generate_index(tmp.path(), "foo").unwrap();
        let page = fs::read_to_string(&written).unwrap();

        assert_eq!(page.matches("<source").count(), 2);
        assert!(page.contains("foo.mp4"));
        assert!(page.contains("foo.ogg"));
        assert!(!page.contains("webm"));
    }

    #[test]
    fn generate_index_overwrites_existing_page() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(INDEX_FILE), "stale content that is long").unwrap();

        generate_index(tmp.path(), "foo").unwrap();
        let page = fs::read_to_string(tmp.path().join(INDEX_FILE)).unwrap();
        assert!(!page.contains("stale"));
        assert_eq!(page.matches("<source").count(), 0);
    }
}
