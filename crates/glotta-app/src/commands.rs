use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, bail};
use glotta_config::Config;
use glotta_core::{Detector, Profile, create_language_profile, detect_language, print_report};

use crate::cli::{Commands, TextInput};

const UNKNOWN_LABEL: &str = "unknown";

pub fn run(command: Commands, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Detect {
            input,
            profiles,
            profiles_dir,
            top,
        } => {
            let known = known_profiles(config, profiles_dir, profiles)?;
            detect(&input, known, top.or(config.report.top), out)
        }
        Commands::Compare { input, profiles } => compare(&input, &profiles, out),
        Commands::Profile { name, input } => profile(&name, &input, out),
    }
}

/// Rank every known language and print the report
pub fn detect(
    input: &TextInput,
    known: Vec<Profile>,
    top: Option<usize>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let unknown = unknown_profile(input)?;
    let detector = Detector::new(known);

    let mut ranked = detector.rank(&unknown)?;
    if let Some(best) = ranked.first() {
        tracing::info!("Best guess: {} (MSE {:.5})", best.name, best.distance);
    }
    if let Some(top) = top {
        ranked.truncate(top);
    }

    print_report(&ranked, out)?;
    Ok(())
}

/// Print whichever of the two profiles is closer to the text
pub fn compare(input: &TextInput, paths: &[PathBuf], out: &mut impl Write) -> anyhow::Result<()> {
    let [first, second] = paths else {
        bail!("compare needs exactly two profiles, got {}", paths.len());
    };

    let unknown = unknown_profile(input)?;
    let known = glotta_profiles::collect_profiles(&[first, second])?;
    let language = detect_language(&unknown, &known[0], &known[1])?;

    writeln!(out, "{language}")?;
    Ok(())
}

/// Print the profile built from the text as pretty JSON
pub fn profile(name: &str, input: &TextInput, out: &mut impl Write) -> anyhow::Result<()> {
    let text = read_text(input)?;
    let profile = create_language_profile(name, &text)
        .with_context(|| format!("Failed to build profile {name}"))?;

    serde_json::to_writer_pretty(&mut *out, &profile)?;
    writeln!(out)?;
    Ok(())
}

/// Known profiles from the command line, or from the config when none were given
pub fn known_profiles(
    config: &Config,
    dir: Option<PathBuf>,
    paths: Vec<PathBuf>,
) -> anyhow::Result<Vec<Profile>> {
    let (dir, paths) = if dir.is_some() || !paths.is_empty() {
        (dir, paths)
    } else {
        let dir = config.profiles.dir.as_ref().map(PathBuf::from);
        let paths = config.profiles.paths.iter().map(PathBuf::from).collect();
        (dir, paths)
    };

    let mut known = Vec::new();
    if let Some(dir) = dir {
        let from_dir = glotta_profiles::collect_dir(&dir)
            .with_context(|| format!("Failed to collect profiles from {}", dir.display()))?;
        known.extend(from_dir);
    }
    known.extend(glotta_profiles::collect_profiles(&paths)?);

    if known.is_empty() {
        bail!("No known language profiles; pass --profile or --profiles-dir");
    }
    Ok(known)
}

fn read_text(input: &TextInput) -> anyhow::Result<String> {
    match (&input.text, &input.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => bail!("Either --text or --file is required"),
    }
}

fn unknown_profile(input: &TextInput) -> anyhow::Result<Profile> {
    let text = read_text(input)?;
    create_language_profile(UNKNOWN_LABEL, &text).context("Text has no letters left to analyze")
}
