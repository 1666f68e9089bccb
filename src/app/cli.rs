use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Prepare one or more videos for HTML5"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode all video files at the given path into MP4, WebM and Ogg Theora
    Batch(BatchArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Input path to scan for video files
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output path for the encoded files
    #[arg(long, default_value = "output")]
    pub destination: PathBuf,

    /// Scan for and encode these file formats (space separated)
    #[arg(long, default_value = "mp4 webm ogg ogv wmv")]
    pub formats: String,

    /// Just pretend like you're going to encode
    #[arg(long)]
    pub pretend: bool,

    /// Skip generating an Ogg Theora
    #[arg(long)]
    pub skip_ogg: bool,

    /// Skip generating a MP4
    #[arg(long)]
    pub skip_mp4: bool,

    /// Skip generating a WebM
    #[arg(long)]
    pub skip_webm: bool,

    /// Rename files using camel-case (myVideoFile)
    #[arg(long)]
    pub camelcase: bool,

    /// Don't rename each video file
    #[arg(long)]
    pub skip_rename: bool,

    /// Generate index.html for each video
    #[arg(long)]
    pub html: bool,

    /// Generate index.html for each video and do not encode any videos
    #[arg(long)]
    pub html_only: bool,

    /// Remove existing output directories before writing into them
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> BatchArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Batch(batch) => batch,
        }
    }

    #[test]
    fn batch_defaults() {
        let args = parse(&["html5-encode", "batch"]);
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.destination, PathBuf::from("output"));
        assert_eq!(args.formats, "mp4 webm ogg ogv wmv");
        assert!(!args.pretend && !args.html && !args.html_only && !args.force);
    }

    #[test]
    fn batch_flags() {
        let args = parse(&[
            "html5-encode",
            "batch",
            "--path",
            "fixtures",
            "--destination",
            "out",
            "--formats",
            "mp4",
            "--skip-webm",
            "--skip-ogg",
            "--html",
        ]);
        assert_eq!(args.path, PathBuf::from("fixtures"));
        assert_eq!(args.formats, "mp4");
        assert!(args.skip_webm && args.skip_ogg && args.html);
        assert!(!args.skip_mp4);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["html5-encode"]).is_err());
    }
}
