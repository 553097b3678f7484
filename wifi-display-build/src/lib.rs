//! WiFi display firmware configuration tools.
//!
//! Generates the firmware configuration header `include/configs.h` from
//! the developer override file `.env.local`.
//!
//! From a build script call [`build_script`]:
//!
//! ```no_run
//! fn main() {
//!     wifi_display_build::build_script().unwrap();
//! }
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

pub mod defaults;
pub mod header;
pub mod project;
pub mod settings;

pub use project::Project;
pub use settings::{Settings, Value};

use project::{ENV_EXAMPLE, ENV_LOCAL};

/// Configuration header generation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No directory upwards from `start` contains the marker file.
    #[error("could not find {marker} in {} or any parent directory", start.display())]
    ProjectRootNotFound { start: PathBuf, marker: String },
    /// The effective configuration lacks a setting the header requires.
    #[error("required setting {0} is missing")]
    MissingRequiredSetting(String),
    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    fn io(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| Self::Io { path: path.to_path_buf(), source }
    }
}

/// Configuration header generation result.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of header generation.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Override file the settings were read from.
    pub env_file: PathBuf,
    /// Effective configuration.
    pub settings: Settings,
    /// Rendered header.
    pub header: String,
}

impl Generated {
    /// Settings worth showing to the user: pins and the display bus address.
    pub fn pins(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.settings.iter().filter(|(name, _)| name.contains("PIN") || *name == "OLED_I2C_ADDRESS")
    }
}

/// Reads the override file and renders the header without writing it.
pub fn materialize(env_file: &Path) -> Result<Generated> {
    log::info!("reading configuration from {}", env_file.display());
    let overrides = settings::read_settings(env_file)?;
    let settings = defaults::effective(&overrides);
    let header = header::render(&settings)?;
    Ok(Generated { env_file: env_file.to_path_buf(), settings, header })
}

/// Writes the header, creating its directory if necessary.
///
/// Any existing file is replaced.
pub fn write_header(header: &str, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(Error::io(dir))?;
    }
    fs::write(path, header).map_err(Error::io(path))?;
    log::info!("generated {}", path.display());
    Ok(())
}

/// Generates the header from `env_file` into `output`.
pub fn generate(env_file: &Path, output: &Path) -> Result<Generated> {
    let generated = materialize(env_file)?;
    write_header(&generated.header, output)?;
    Ok(generated)
}

/// Generates the header of the project rooted at `root`.
pub fn generate_in(root: &Path) -> Result<Generated> {
    let project = Project::new(root);
    generate(&project.env_file(), &project.header())
}

/// Cargo directives for a build script generating the header of `project`.
///
/// Cargo re-runs the build script when an override file or the generated
/// header changes.
pub fn build_directives(project: &Project) -> Vec<String> {
    let mut directives: Vec<_> = [project.env_local(), project.env_example(), project.header()]
        .iter()
        .map(|path| format!("cargo:rerun-if-changed={}", path.display()))
        .collect();

    let env_file = project.env_file();
    if !env_file.is_file() {
        directives.push(format!("cargo:warning=no {ENV_LOCAL} or {ENV_EXAMPLE} found, using default configuration"));
    }

    directives
}

/// Generates the header from a Cargo build script.
///
/// The project root is the directory of the package being built.
pub fn build_script() -> Result<Generated> {
    let root = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from).ok_or_else(|| {
        Error::ProjectRootNotFound { start: PathBuf::from("$CARGO_MANIFEST_DIR"), marker: "Cargo.toml".to_string() }
    })?;
    let project = Project::new(root);

    for directive in build_directives(&project) {
        println!("{directive}");
    }

    generate_in(&project.root)
}
