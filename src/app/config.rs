use crate::app::cli::BatchArgs;
use crate::app::models::{RenameMode, RunConfiguration};

/// Camel-case wins over skip-rename; skip-rename is only consulted otherwise.
fn rename_mode(camelcase: bool, skip_rename: bool) -> RenameMode {
    if camelcase {
        RenameMode::CamelCase
    } else if !skip_rename {
        RenameMode::Parameterize
    } else {
        RenameMode::Keep
    }
}

pub fn resolve_config(args: BatchArgs) -> RunConfiguration {
    RunConfiguration {
        rename: rename_mode(args.camelcase, args.skip_rename),
        source: args.path,
        destination: args.destination,
        formats: args.formats,
        pretend: args.pretend,
        skip_ogg: args.skip_ogg,
        skip_mp4: args.skip_mp4,
        skip_webm: args.skip_webm,
        html: args.html,
        html_only: args.html_only,
        force: args.force,
    }
}
