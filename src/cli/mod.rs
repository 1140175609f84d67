//! CLI entry point for clipform.

pub mod submit;

use clap::{Parser, Subcommand};

use crate::form::{
    FormData, EFFECTS_FIELD, EMOJIS_FIELD, SCHEDULE_INTERVAL_FIELD, SCHEDULE_UNIT_FIELD,
    SUBTITLE_COLOR_FIELD, URL_FIELD,
};

/// clipform CLI
#[derive(Parser, Debug)]
#[command(name = "clipform", version, about = "Submit clip generation requests")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the clip API to generate a clip
    Submit(SubmitArgs),
}

/// Arguments for `clipform submit`.
#[derive(Parser, Debug)]
pub struct SubmitArgs {
    /// Video URL
    #[arg(long)]
    pub url: String,

    /// Subtitle color
    #[arg(long)]
    pub subtitle_color: Option<String>,

    /// Emojis prepended to subtitles
    #[arg(long)]
    pub emojis: Option<String>,

    /// Effects, e.g. "speed:1.5,fadein:0.5"
    #[arg(long)]
    pub effects: Option<String>,

    /// Upload the clip every N units
    #[arg(long, requires = "schedule_unit")]
    pub schedule_interval: Option<String>,

    /// Schedule unit (hours, minutes)
    #[arg(long, requires = "schedule_interval")]
    pub schedule_unit: Option<String>,

    /// API base URL (overrides CLIP_API_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides CLIP_API_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl SubmitArgs {
    /// The form a browser would have submitted for these arguments.
    pub fn to_form(&self) -> FormData {
        let mut form = FormData::new().with(URL_FIELD, self.url.as_str());
        let optional = [
            (SUBTITLE_COLOR_FIELD, &self.subtitle_color),
            (EMOJIS_FIELD, &self.emojis),
            (EFFECTS_FIELD, &self.effects),
            (SCHEDULE_INTERVAL_FIELD, &self.schedule_interval),
            (SCHEDULE_UNIT_FIELD, &self.schedule_unit),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                form.append(name, value.as_str());
            }
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_submit_with_all_fields() {
        let cli = Cli::try_parse_from([
            "clipform",
            "submit",
            "--url",
            "https://youtu.be/x",
            "--subtitle-color",
            "red",
            "--emojis",
            "yes",
            "--effects",
            "none",
        ])
        .unwrap();

        match cli.command {
            Commands::Submit(args) => {
                let form = args.to_form();
                assert_eq!(form.get(URL_FIELD), Some("https://youtu.be/x"));
                assert_eq!(form.get(SUBTITLE_COLOR_FIELD), Some("red"));
                assert_eq!(form.get(EMOJIS_FIELD), Some("yes"));
                assert_eq!(form.get(EFFECTS_FIELD), Some("none"));
                assert_eq!(form.get(SCHEDULE_UNIT_FIELD), None);
            }
        }
    }

    #[test]
    fn schedule_flags_require_each_other() {
        let result = Cli::try_parse_from([
            "clipform",
            "submit",
            "--url",
            "u",
            "--schedule-interval",
            "2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn submit_requires_url() {
        assert!(Cli::try_parse_from(["clipform", "submit"]).is_err());
    }
}
