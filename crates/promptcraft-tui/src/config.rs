use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use promptcraft_core::session::{clamp_temperature, DEFAULT_TEMPERATURE};
use promptcraft_core::{Audience, Choice, Complexity, GenerationRequest, Purpose, Tone};
use promptcraft_service::{GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};

#[derive(Debug, Parser)]
#[command(name = "promptcraft", about = "AI-powered prompt engineering in the terminal")]
pub struct Config {
    /// Gemini API key
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for generation
    #[arg(long, env = "PROMPTCRAFT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the generative language API
    #[arg(long, env = "PROMPTCRAFT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Initial creativity level, 0.0 to 1.0
    #[arg(long, env = "PROMPTCRAFT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Request timeout (seconds)
    #[arg(long, env = "PROMPTCRAFT_TIMEOUT", default_value = "60")]
    pub timeout: u64,

    /// Log file for the interactive mode
    #[arg(long, env = "PROMPTCRAFT_LOG_FILE", default_value = "promptcraft.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one prompt template and print it
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What you need a prompt for
    #[arg(long)]
    pub need: String,

    #[arg(long, value_parser = parse_choice::<Purpose>, default_value = "creative-writing")]
    pub purpose: Purpose,

    #[arg(long, value_parser = parse_choice::<Tone>, default_value = "professional")]
    pub tone: Tone,

    #[arg(long, value_parser = parse_choice::<Complexity>, default_value = "simple")]
    pub complexity: Complexity,

    #[arg(long, value_parser = parse_choice::<Audience>, default_value = "general")]
    pub audience: Audience,

    /// Print the sections as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the copy-pasteable template
    #[arg(long, conflicts_with = "json")]
    pub template_only: bool,

    /// Print the compiled prompt without calling the API
    #[arg(long, conflicts_with_all = ["json", "template_only"])]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            need: self.need.clone(),
            purpose: self.purpose,
            tone: self.tone,
            complexity: self.complexity,
            audience: self.audience,
        }
    }
}

impl Config {
    /// The configured API key, if it is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Creativity level clamped to `[0.0, 1.0]` in steps of 0.1.
    pub fn temperature(&self) -> f32 {
        clamp_temperature(self.temperature)
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Build the Gemini provider, or `None` when no key is configured.
    pub fn provider(&self) -> Option<Arc<GeminiProvider>> {
        let key = self.api_key()?;
        Some(Arc::new(
            GeminiProvider::new(key)
                .with_base_url(&self.base_url)
                .with_model(self.model.clone())
                .with_timeout(self.timeout_duration()),
        ))
    }
}

fn parse_choice<T: Choice>(s: &str) -> Result<T, String> {
    T::parse_str(s).ok_or_else(|| {
        let names: Vec<&str> = T::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown value '{s}', expected one of: {}", names.join(", "))
    })
}
