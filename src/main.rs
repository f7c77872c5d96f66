//! Thin CLI over the evaluation engine: argument parsing, wordlist loading
//! and text/JSON formatting. All the scoring logic lives in the library.

use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use secrecy::SecretString;

use pwd_analyzer::{
    default_common_passwords, env_wordlist_path, evaluate_password, load_wordlist, AttackProfile,
    EvaluatorConfig, FindingKind, Verdict, SECONDS_EFFECTIVELY_NEVER,
};

#[derive(Parser, Debug)]
#[command(
    name = "pwd-analyzer",
    about = "Offline password strength analyzer",
    version
)]
struct Cli {
    /// Password to analyze (prompts interactively if omitted)
    password: Option<String>,

    /// Path to an extra wordlist file (can be repeated)
    #[arg(long = "wordlist", value_name = "PATH")]
    wordlists: Vec<PathBuf>,

    /// Path to a common-passwords file replacing the built-in list
    #[arg(long, value_name = "PATH")]
    common: Option<PathBuf>,

    /// Guesses per second; replaces the attack-profile table with a single
    /// "custom" profile at this rate
    #[arg(long, value_name = "RATE")]
    gps: Option<f64>,

    /// Restrict crack-time output to one attack profile
    #[arg(long, value_name = "NAME")]
    profile: Option<String>,

    /// Output the verdict as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match &cli.password {
        Some(pwd) => {
            let password = SecretString::new(pwd.clone().into());
            report(&password, &config, cli.json)
        }
        None => interactive_loop(&config, cli.json),
    }
}

/// Assembles the evaluator configuration from flags, environment and
/// defaults. Wordlist I/O errors surface here, never inside the engine.
fn build_config(cli: &Cli) -> Result<EvaluatorConfig> {
    let mut paths = cli.wordlists.clone();
    if paths.is_empty() {
        if let Some(path) = env_wordlist_path() {
            paths.push(path);
        }
    }

    let mut wordlist = HashSet::new();
    for path in &paths {
        let entries = load_wordlist(path)
            .with_context(|| format!("failed to load wordlist {}", path.display()))?;
        wordlist.extend(entries);
    }

    let common = match &cli.common {
        Some(path) => load_wordlist(path)
            .with_context(|| format!("failed to load common-password list {}", path.display()))?,
        None => default_common_passwords().clone(),
    };

    let mut config = EvaluatorConfig::default()
        .with_wordlist(wordlist)
        .with_common_passwords(common);

    if let Some(gps) = cli.gps {
        config = config.with_attack_profiles(vec![AttackProfile::new("custom", gps)]);
    }

    if let Some(name) = &cli.profile {
        let restricted: Vec<AttackProfile> = config
            .attack_profiles
            .iter()
            .filter(|p| &p.name == name)
            .cloned()
            .collect();
        if restricted.is_empty() {
            bail!("unknown attack profile '{name}'");
        }
        config = config.with_attack_profiles(restricted);
    }

    Ok(config)
}

fn interactive_loop(config: &EvaluatorConfig, json: bool) -> Result<()> {
    println!("Password Strength Analyzer (interactive mode)");
    println!("Press Enter on an empty prompt to exit.\n");

    loop {
        let input = dialoguer::Password::new()
            .with_prompt("Password to analyze")
            .allow_empty_password(true)
            .interact()?;
        if input.is_empty() {
            println!("Bye!");
            return Ok(());
        }
        let password = SecretString::new(input.into());
        report(&password, config, json)?;
    }
}

fn report(password: &SecretString, config: &EvaluatorConfig, json: bool) -> Result<()> {
    let verdict = evaluate_password(password, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print_text_report(&verdict);
    }
    Ok(())
}

fn print_text_report(verdict: &Verdict) {
    println!("{}", "-".repeat(60));
    println!("Rating: {} ({} / 100)", verdict.category, verdict.score);
    println!(
        "Entropy: {:.1} effective bits (raw {:.1})",
        verdict.entropy.effective_bits, verdict.entropy.raw_bits
    );

    if !verdict.crack_times.is_empty() {
        println!("Estimated time to crack:");
        for (name, seconds) in verdict.crack_times.iter() {
            println!("  {name:<20} {}", format_duration(seconds));
        }
    }

    let has_dictionary = verdict.findings.iter().any(|f| {
        matches!(
            f.kind,
            FindingKind::DictionaryWord | FindingKind::CommonPassword
        )
    });
    let has_pattern = verdict.findings.iter().any(|f| {
        matches!(
            f.kind,
            FindingKind::RepeatRun
                | FindingKind::AscendingSequence
                | FindingKind::DescendingSequence
                | FindingKind::KeyboardWalk
        )
    });
    if has_dictionary {
        println!("WARNING: dictionary/common password detected.");
    }
    if has_pattern {
        println!("Pattern detected: repeated/sequence/keyboard pattern.");
    }

    if !verdict.feedback.is_empty() {
        println!("Suggestions:");
        for msg in &verdict.feedback {
            println!("  - {msg}");
        }
    }
}

/// Renders projected seconds in human units. Presentation only; the engine
/// reports plain seconds.
fn format_duration(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3_600.0;
    const DAY: f64 = 86_400.0;
    const MONTH: f64 = 2_629_800.0;
    const YEAR: f64 = 31_557_600.0;
    const CENTURY: f64 = 100.0 * YEAR;

    if seconds >= SECONDS_EFFECTIVELY_NEVER {
        return "effectively never".to_string();
    }
    if seconds < 1.0 {
        return "less than a second".to_string();
    }
    if seconds >= CENTURY {
        let centuries = seconds / CENTURY;
        if centuries >= 1e6 {
            return "millions of centuries".to_string();
        }
        let rounded = centuries.round();
        return if rounded == 1.0 {
            "1 century".to_string()
        } else {
            format!("{rounded:.0} centuries")
        };
    }

    let (value, singular, plural) = if seconds >= YEAR {
        (seconds / YEAR, "year", "years")
    } else if seconds >= MONTH {
        (seconds / MONTH, "month", "months")
    } else if seconds >= DAY {
        (seconds / DAY, "day", "days")
    } else if seconds >= HOUR {
        (seconds / HOUR, "hour", "hours")
    } else if seconds >= MINUTE {
        (seconds / MINUTE, "minute", "minutes")
    } else {
        (seconds, "second", "seconds")
    };

    let rounded = value.round();
    if rounded == 1.0 {
        format!("1 {singular}")
    } else {
        format!("{rounded:.0} {plural}")
    }
}
