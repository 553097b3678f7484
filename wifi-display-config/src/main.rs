//! WiFi display firmware configuration generator.
//!
//! Run from anywhere inside the firmware project to regenerate
//! `include/configs.h` from `.env.local`.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Target;
use log::LevelFilter;
use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};

use wifi_display_build::{
    project::{ENV_EXAMPLE, ENV_LOCAL, MARKER},
    Generated, Project,
};

/// Generate the firmware configuration header from `.env.local`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root; found by searching upwards for platformio.ini if not given.
    #[arg(short, long, env = "WIFI_DISPLAY_ROOT")]
    root: Option<PathBuf>,
    /// Override file; defaults to .env.local, falling back to .env.example.
    #[arg(short, long)]
    env_file: Option<PathBuf>,
    /// Generated header; defaults to include/configs.h.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Print the header to standard output instead of writing it.
    #[arg(long)]
    stdout: bool,
    /// Log level.
    #[arg(short, long, default_value_t = LevelFilter::Info)]
    level: LevelFilter,
}

/// Determines the project from the arguments or the working directory.
fn find_project(args: &Args) -> Result<Project> {
    match &args.root {
        Some(root) => Ok(Project::new(root)),
        None => {
            let cwd = env::current_dir().context("cannot determine working directory")?;
            Project::discover(&cwd).with_context(|| format!("run this from within the firmware project ({MARKER})"))
        }
    }
}

/// Whether to suggest creating `.env.local` from the example file.
fn needs_tip(project: &Project) -> bool {
    !project.env_local().is_file()
}

fn print_summary(project: &Project, generated: &Generated, output: &Path) {
    println!("Generated {}", output.display());
    println!("Pin configuration:");
    for (name, value) in generated.pins() {
        println!("  {name}: {value}");
    }

    if needs_tip(project) {
        println!();
        println!("Tip: Copy {ENV_EXAMPLE} to {ENV_LOCAL} and customize your pin assignments.");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder().target(Target::Stderr).filter_level(args.level).format_timestamp(None).init();

    let project = find_project(&args)?;
    log::info!("project root: {}", project.root.display());

    let env_file = args.env_file.clone().unwrap_or_else(|| project.env_file());
    let output = args.output.clone().unwrap_or_else(|| project.header());

    if args.stdout {
        let generated = wifi_display_build::materialize(&env_file).context("cannot generate configuration header")?;
        io::stdout().write_all(generated.header.as_bytes())?;
        return Ok(());
    }

    let generated =
        wifi_display_build::generate(&env_file, &output).context("cannot generate configuration header")?;
    print_summary(&project, &generated, &output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn tip_only_without_env_local() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::new(dir.path());
        assert!(needs_tip(&project));

        fs::write(project.env_example(), "BTN_SELECT=1\n").unwrap();
        assert!(needs_tip(&project));

        fs::write(project.env_local(), "BTN_SELECT=2\n").unwrap();
        assert!(!needs_tip(&project));
    }

    #[test]
    fn explicit_root() {
        let args = Args::parse_from(["wifi-display-config", "--root", "/some/project"]);
        assert_eq!(find_project(&args).unwrap().root, Path::new("/some/project"));
    }
}
