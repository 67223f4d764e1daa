use std::path::Path;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::app::LaunchOptions;
use crate::config::Config;

#[derive(Parser)]
#[command(name = "tamagon")]
#[command(author, version, about)]
#[command(long_about = "An animated product showcase slider.\n\n\
    Examples:\n  \
    tamagon                      Launch the showcase (fullscreen)\n  \
    tamagon --windowed           Launch in a window\n  \
    tamagon --slide 2            Start on the second product\n  \
    tamagon --autoplay 5000      Advance every five seconds")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Advance automatically every MS milliseconds (paused while hovered)
    #[arg(long, value_name = "MS", global = false)]
    pub autoplay: Option<u64>,

    /// Disable the particle and cursor trail animations
    #[arg(long, global = false)]
    pub no_effects: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.start_slide, effects.particles)
        key: String,

        /// Value to set
        value: String,
    },

    /// Print the configuration file location
    Path,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Log filter implied by `-v`/`-q`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Launch settings from the config file at `config_path` with flags on top.
    pub fn launch_options(&self, config_path: &Path) -> anyhow::Result<LaunchOptions> {
        let config = Config::load_from_or_default(config_path)?;
        LaunchOptions::resolve(
            &config,
            self.windowed,
            self.slide,
            self.autoplay,
            self.no_effects,
        )
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                let options = self.launch_options(&Config::path()?)?;
                crate::app::run(options)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        let cli = Cli::try_parse_from(["tamagon", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
        let cli = Cli::try_parse_from(["tamagon", "--quiet", "-v"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
        let cli = Cli::try_parse_from(["tamagon"]).unwrap();
        assert_eq!(cli.log_level(), "info");
    }

    #[test]
    fn launch_flags_parse() {
        let args = ["tamagon", "--windowed", "--slide=2", "--autoplay=4000"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(2));
        assert_eq!(cli.autoplay, Some(4000));
        assert!(cli.command.is_none());
    }

    #[test]
    fn config_set_parses() {
        let args = ["tamagon", "config", "set", "effects.tilt", "off"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Some(Commands::Config {
                command: ConfigCommands::Set { key, value },
            }) => {
                assert_eq!(key, "effects.tilt");
                assert_eq!(value, "off");
            }
            _ => panic!("expected config set"),
        }
    }

    #[test]
    fn launch_reads_config_and_flags_win() {
        let dir = std::env::temp_dir().join(format!("tamagon-launch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, "defaults:\n  start_slide: 3\n  windowed: true\n").unwrap();

        let cli = Cli::try_parse_from(["tamagon"]).unwrap();
        let options = cli.launch_options(&path).unwrap();
        assert_eq!(options.start_slide, 2);
        assert!(options.windowed);

        let cli = Cli::try_parse_from(["tamagon", "--slide", "1"]).unwrap();
        assert_eq!(cli.launch_options(&path).unwrap().start_slide, 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn launch_refuses_a_malformed_config() {
        let dir = std::env::temp_dir().join(format!("tamagon-badlaunch-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yaml");
        std::fs::write(&path, "defaults: [1, 2").unwrap();

        let cli = Cli::try_parse_from(["tamagon"]).unwrap();
        assert!(cli.launch_options(&path).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn launch_without_config_file_uses_defaults() {
        let path = std::env::temp_dir().join("tamagon-no-such-dir/config.yaml");
        let cli = Cli::try_parse_from(["tamagon"]).unwrap();
        let options = cli.launch_options(&path).unwrap();
        assert_eq!(options.start_slide, 0);
        assert!(!options.windowed);
    }
}
