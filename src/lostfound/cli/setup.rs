use clap::{Parser, ValueEnum};
use lostfound::model::Role;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Regular,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Regular => Role::Regular,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lostfound", bin_name = "lostfound", version)]
#[command(about = "Interactive campus lost-and-found desk (in-memory)", long_about = None)]
pub struct Cli {
    /// Session role (overrides the config file)
    #[arg(long, value_enum, help_heading = "Options")]
    pub role: Option<RoleArg>,

    /// Path to a JSON config file
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["lostfound"]).unwrap();
        assert!(cli.role.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_color);
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_role_and_flags() {
        let cli = Cli::try_parse_from([
            "lostfound",
            "--role",
            "regular",
            "--config",
            "desk.json",
            "--no-color",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.role, Some(RoleArg::Regular));
        assert_eq!(cli.config, Some(PathBuf::from("desk.json")));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(Role::from(RoleArg::Regular), Role::Regular);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(Cli::try_parse_from(["lostfound", "--role", "janitor"]).is_err());
    }
}
