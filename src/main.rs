use std::path::PathBuf;

use clap::{ Args, Parser, Subcommand };
use env_logger::Env;

use strongpass::charset::{ CharacterClass, ClassSet };
use strongpass::clipboard;
use strongpass::config::Config;
use strongpass::errors::AppError;
use strongpass::generators::{ generate, PasswordRequest };
use strongpass::output::Report;
use strongpass::strength::evaluate;

#[derive(Debug, Parser)]
#[command(name = "strongpass", version, about = "Generate random passwords and rate their strength")]
struct Cli {
    /// Read defaults from this config file instead of the standard location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a password (the default)
    Generate(GenerateArgs),
    /// Rate the strength of an existing password
    Check(CheckArgs),
}

#[derive(Debug, Default, Args)]
struct GenerateArgs {
    /// Password length
    #[arg(short = 'L', long)]
    length: Option<usize>,

    /// Use exactly these classes (uppercase, lowercase, digits, symbols)
    #[arg(short = 'C', long, value_delimiter = ',', conflicts_with_all = ["no_uppercase", "no_lowercase", "no_numbers", "no_specials"])]
    classes: Option<Vec<CharacterClass>>,

    #[arg(short = 'u', long)]
    no_uppercase: bool,

    #[arg(short = 'l', long)]
    no_lowercase: bool,

    #[arg(short = 'n', long)]
    no_numbers: bool,

    #[arg(short = 's', long)]
    no_specials: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    copy: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Password to rate; prompted for without echo when omitted
    password: Option<String>,
}

impl GenerateArgs {
    fn request(&self, config: &Config) -> PasswordRequest {
        let classes = match &self.classes {
            Some(classes) => classes.iter().copied().collect(),
            None => {
                let mut config = config.clone();
                config.uppercase &= !self.no_uppercase;
                config.lowercase &= !self.no_lowercase;
                config.numbers &= !self.no_numbers;
                config.specials &= !self.no_specials;
                config.classes()
            }
        };

        PasswordRequest {
            length: self.length.unwrap_or(config.length),
            classes,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::load(cli.config.as_deref())?;

    let report = match cli.command {
        Some(Command::Check(args)) => check(args)?,
        Some(Command::Generate(args)) => generate_password(&args, &config)?,
        None => generate_password(&GenerateArgs::default(), &config)?,
    };

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }

    Ok(())
}

fn generate_password(args: &GenerateArgs, config: &Config) -> Result<Report, AppError> {
    let request = args.request(config);
    let generated = generate(&request)?;

    if generated.fallback {
        log::warn!("no character classes selected, using all of them");
    }

    if args.copy {
        clipboard::copy(&generated.password)?;
    }

    let strength = evaluate(&generated.password);
    log::info!("generated {} characters, score {}", request.length, strength.score);

    let mut report = Report::generated(generated, strength);
    report.copied = args.copy;

    Ok(report)
}

fn check(args: CheckArgs) -> Result<Report, AppError> {
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    Ok(Report::checked(evaluate(&password)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        match parse(args).command {
            Some(Command::Generate(args)) => args,
            other => panic!("expected generate subcommand, got {:?}", other),
        }
    }

    #[test]
    fn bare_invocation_uses_config() {
        let cli = parse(&["strongpass"]);
        assert!(cli.command.is_none());

        let request = GenerateArgs::default().request(&Config::default());
        assert_eq!(request.length, 12);
        assert_eq!(request.classes, ClassSet::all());
    }

    #[test]
    fn flags_override_config() {
        let args = generate_args(&["strongpass", "generate", "-L", "20", "--no-specials", "-u"]);
        let request = args.request(&Config::default());

        assert_eq!(request.length, 20);
        assert!(!request.classes.contains(CharacterClass::Symbols));
        assert!(!request.classes.contains(CharacterClass::Uppercase));
        assert_eq!(request.classes.len(), 2);
    }

    #[test]
    fn disabled_in_config_stays_disabled() {
        let config = Config { numbers: false, ..Config::default() };
        let request = GenerateArgs::default().request(&config);

        assert!(!request.classes.contains(CharacterClass::Digits));
    }

    #[test]
    fn all_disabled_produces_empty_request() {
        let args = generate_args(&["strongpass", "generate", "-u", "-l", "-n", "-s"]);

        assert!(args.request(&Config::default()).classes.is_empty());
    }

    #[test]
    fn explicit_class_list() {
        let args = generate_args(&["strongpass", "generate", "--classes", "digits,upper"]);
        let request = args.request(&Config::default());

        let expected = ClassSet::empty()
            .with(CharacterClass::Uppercase)
            .with(CharacterClass::Digits);
        assert_eq!(request.classes, expected);
    }

    #[test]
    fn class_list_conflicts_with_exclusions() {
        assert!(Cli::try_parse_from(["strongpass", "generate", "-C", "digits", "-n"]).is_err());
        assert!(Cli::try_parse_from(["strongpass", "generate", "-C", "emoji"]).is_err());
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = parse(&["strongpass", "--json", "check", "x"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Some(Command::Check(_))));

        let cli = parse(&["strongpass", "-v", "generate", "-L", "8"]);
        assert_eq!(cli.verbose, 1);
        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };
        assert_eq!(args.length, Some(8));

        let cli = parse(&["strongpass", "--config", "custom.json", "generate"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["strongpass", "check", "--json", "-vv", "x"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn check_with_argument() {
        let Some(Command::Check(args)) = parse(&["strongpass", "check", "Abcdefgh12"]).command else {
            panic!("expected check subcommand");
        };

        let report = check(args).unwrap();
        assert_eq!(report.score, 4);
        assert_eq!(report.label, "Strong");
    }

    #[test]
    fn zero_length_is_an_error() {
        let args = generate_args(&["strongpass", "generate", "-L", "0"]);
        let err = generate_password(&args, &Config::default()).unwrap_err();

        assert!(matches!(err, AppError::Generate(_)));
    }

    #[test]
    fn generate_reports_strength() {
        let args = generate_args(&["strongpass", "generate", "-L", "16", "-C", "digits"]);

        let report = generate_password(&args, &Config::default()).unwrap();
        assert!(!report.copied);
        let password = report.password.unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(report.score, 3);
    }
}
