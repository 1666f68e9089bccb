use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// How output base names are derived from input file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameMode {
    /// myVideoFile
    CamelCase,
    /// my-video-file
    Parameterize,
    Keep,
}

/// Represents the final configuration after resolving CLI args.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub formats: String,
    pub pretend: bool,
    pub skip_ogg: bool,
    pub skip_mp4: bool,
    pub skip_webm: bool,
    pub rename: RenameMode,
    pub html: bool,
    pub html_only: bool,
    pub force: bool,
}

impl RunConfiguration {
    pub fn encodes(&self) -> bool {
        !self.html_only
    }

    pub fn writes_index(&self) -> bool {
        self.html || self.html_only
    }
}

/// A file matched by the format filter during the scan.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub relative_path: String,
}

/// Where the encoded derivatives of one input file go.
#[derive(Debug, Clone)]
pub struct EncodeTarget {
    pub base_name: String,
    pub directory: PathBuf,
}

impl EncodeTarget {
    pub fn output_file(&self, extension: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.base_name, extension))
    }
}

/// A single external encoder command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl EncoderInvocation {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[cfg(test)]
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for EncoderInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Counters reported at the end of a batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub commands: usize,
    pub executed: usize,
    pub index_pages: usize,
}
