use crate::app::html::generate_index;
use crate::app::models::{DiscoveredFile, EncodeTarget, EncoderInvocation, RunConfiguration, RunSummary};
use crate::app::naming::output_base_name;
use crate::app::paths::{best_effort, create_directory};
use crate::app::runner::CommandRunner;
use anyhow::{bail, Result};
use std::io::{self, Write};
use std::path::Path;

pub const THEORA_ENCODER: &str = "ffmpeg2theora";
pub const FFMPEG: &str = "ffmpeg";

const REQUIRED_TOOLS: [(&str, &str); 2] = [
    (
        THEORA_ENCODER,
        "Please ensure ffmpeg2theora is in your path. brew install ffmpeg2theora if you enjoy Homebrew.",
    ),
    (
        FFMPEG,
        "Please ensure ffmpeg is in your path. brew install ffmpeg if you enjoy Homebrew.",
    ),
];

/// Fails with a remediation hint unless every encoder binary is on the PATH.
pub fn preflight<R: CommandRunner>(runner: &R) -> Result<()> {
    for (tool, hint) in REQUIRED_TOOLS {
        match runner.locate(tool) {
            Some(path) => println!("{} was found at {}", tool, path.display()),
            None => bail!("{}", hint),
        }
    }
    Ok(())
}

/// Ogg Theora: video and audio quality 7.
pub fn ogg_invocation(input: &Path, target: &EncodeTarget) -> EncoderInvocation {
    EncoderInvocation::new(THEORA_ENCODER)
        .args(["--videoquality", "7", "--audioquality", "7", "--output"])
        .arg(target.output_file("ogg"))
        .arg(input)
}

/// H.264, slow preset, CRF 10, audio stream copied.
pub fn mp4_invocation(input: &Path, target: &EncodeTarget) -> EncoderInvocation {
    EncoderInvocation::new(FFMPEG)
        .arg("-i")
        .arg(input)
        .args(["-c:v", "libx264", "-preset", "slow", "-crf", "10", "-c:a", "copy", "-y"])
        .arg(target.output_file("mp4"))
}

/// VP8 at CRF 10 capped to 1M, Vorbis audio.
pub fn webm_invocation(input: &Path, target: &EncodeTarget) -> EncoderInvocation {
    EncoderInvocation::new(FFMPEG)
        .arg("-i")
        .arg(input)
        .args(["-c:v", "libvpx", "-crf", "10", "-b:v", "1M", "-c:a", "libvorbis", "-y"])
        .arg(target.output_file("webm"))
}

pub struct Encoder<'a, R: CommandRunner> {
    config: &'a RunConfiguration,
    runner: &'a R,
    out: Box<dyn Write + 'a>,
    summary: RunSummary,
}

impl<'a, R: CommandRunner> Encoder<'a, R> {
    /// Prints command lines and encoder output to stdout.
    pub fn new(config: &'a RunConfiguration, runner: &'a R) -> Self {
        Self::with_output(config, runner, io::stdout())
    }

    pub fn with_output(config: &'a RunConfiguration, runner: &'a R, out: impl Write + 'a) -> Self {
        Self {
            config,
            runner,
            out: Box::new(out),
            summary: RunSummary::default(),
        }
    }

    /// Processes every file in order and reports what was done.
    pub fn encode_all(mut self, files: &[DiscoveredFile]) -> RunSummary {
        for file in files {
            self.process(file);
        }
        self.summary
    }

    /// Renames, prepares the output directory, encodes and writes the index page for one file.
    pub fn process(&mut self, file: &DiscoveredFile) {
        let base_name = output_base_name(&file.path, self.config.rename);
        let target = EncodeTarget {
            directory: self.config.destination.join(&base_name),
            base_name,
        };
        log::info!("Processing {} -> {}", file.relative_path, target.directory.display());

        best_effort(
            "Creating output directory",
            create_directory(&target.directory, self.config.force),
        );

        if self.config.encodes() {
            if self.config.skip_ogg {
                log::debug!("Skipping Ogg Theora for {}", file.relative_path);
            } else {
                self.execute(&ogg_invocation(&file.path, &target));
            }

            if self.config.skip_mp4 {
                log::debug!("Skipping MP4 for {}", file.relative_path);
            } else {
                self.execute(&mp4_invocation(&file.path, &target));
            }

            if self.config.skip_webm {
                log::debug!("Skipping WebM for {}", file.relative_path);
            } else {
                self.execute(&webm_invocation(&file.path, &target));
            }
        }

        if self.config.writes_index()
            && best_effort("Writing index.html", generate_index(&target.directory, &target.base_name)).is_some()
        {
            self.summary.index_pages += 1;
        }

        self.summary.files += 1;
    }

    /// Prints the command line and, unless pretending, runs it and prints
    /// whatever it wrote. The exit status is not inspected.
    pub fn execute(&mut self, invocation: &EncoderInvocation) {
        best_effort("Printing command line", writeln!(self.out, "{}", invocation));
        self.summary.commands += 1;

        if self.config.pretend {
            return;
        }

        if let Some(output) = best_effort(&invocation.program, self.runner.run(invocation)) {
            best_effort(
                "Printing encoder output",
                writeln!(self.out, "{}", String::from_utf8_lossy(&output)),
            );
            self.summary.executed += 1;
        }
    }
}
