//! # Command Line Interface
//!
//! ```text
//! exohost serve   [--host 127.0.0.1] [--port 7860]
//! exohost compute --mass <M> --metallicity <Z> [--json] [--detailed]
//! exohost sweep   [--json]
//! ```
//!
//! Each command has a `cmd_*` entry point returning `Result<(), CliError>`
//! and, where it prints, a `render_*` twin returning the text so tests can
//! inspect it.

use crate::api::{self, AppState, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use clap::{Parser, Subcommand};
use exohost_core::{
    parse_input, Evaluation, InputError, Model, StellarInputs, MASS_SLIDER, METALLICITY_SLIDER,
};
use serde_json::json;
use thiserror::Error;

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Exoplanet host probability calculator.
#[derive(Debug, Parser)]
#[command(name = "exohost", version, about)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the calculator form and JSON API.
    Serve {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Evaluate the model once.
    Compute {
        /// Stellar mass in solar masses.
        #[arg(long, allow_hyphen_values = true)]
        mass: String,
        /// Metallicity [Fe/H].
        #[arg(long, allow_hyphen_values = true)]
        metallicity: String,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
        /// Include every intermediate term.
        #[arg(long)]
        detailed: bool,
    },

    /// Tabulate the model over every slider position.
    Sweep {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Run the HTTP server until shutdown.
pub async fn cmd_serve(host: &str, port: u16) -> Result<(), CliError> {
    let config = ServerConfig {
        host: host.to_string(),
        port,
    };
    api::run_server(&config, AppState::new(Model::published())).await?;
    Ok(())
}

/// Evaluate once and print the result.
pub fn cmd_compute(mass: &str, metallicity: &str, json: bool, detailed: bool) -> Result<(), CliError> {
    let text = render_compute(mass, metallicity, json, detailed)?;
    println!("{text}");
    Ok(())
}

/// Print the slider-grid table.
pub fn cmd_sweep(json: bool) -> Result<(), CliError> {
    let text = render_sweep(json)?;
    println!("{text}");
    Ok(())
}

/// Text produced by `compute`.
pub fn render_compute(
    mass: &str,
    metallicity: &str,
    json: bool,
    detailed: bool,
) -> Result<String, CliError> {
    let inputs = StellarInputs::new(
        parse_input("mass", mass)?,
        parse_input("metallicity", metallicity)?,
    );
    let eval = Model::published().evaluate(inputs);
    if eval.is_singular() {
        tracing::warn!(
            stellar_mass = inputs.stellar_mass,
            metallicity = inputs.metallicity,
            "singular probability"
        );
    }

    if json {
        let mut value = json!({
            "stellar_mass": inputs.stellar_mass,
            "metallicity": inputs.metallicity,
            "probability": eval.to_percent_string(),
            "singular": eval.is_singular(),
        });
        if detailed {
            value["evaluation"] = serde_json::to_value(eval)?;
        }
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    if detailed {
        Ok(detailed_text(&eval))
    } else {
        Ok(eval.to_percent_string())
    }
}

/// Text produced by `sweep`.
pub fn render_sweep(json: bool) -> Result<String, CliError> {
    let model = Model::published();
    let metallicities: Vec<f64> = METALLICITY_SLIDER.grid().collect();

    if json {
        let zs = &metallicities;
        let rows: Vec<_> = MASS_SLIDER
            .grid()
            .flat_map(move |m| {
                zs.iter().map(move |&z| {
                    json!({
                        "stellar_mass": m,
                        "metallicity": z,
                        "probability": model.compute(m, z),
                    })
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }

    let mut out = String::from("  M \\ [Fe/H]");
    for z in &metallicities {
        out.push_str(&format!(" {:>7.2}", z));
    }
    out.push('\n');
    for m in MASS_SLIDER.grid() {
        out.push_str(&format!("{:>12.2}", m));
        for &z in &metallicities {
            out.push_str(&format!(" {:>7}", model.compute(m, z)));
        }
        out.push('\n');
    }
    Ok(out)
}

fn detailed_text(eval: &Evaluation) -> String {
    let mut out = String::new();
    out.push_str(&format!("stellar mass      {}\n", eval.inputs.stellar_mass));
    out.push_str(&format!("metallicity       {}\n", eval.inputs.metallicity));
    out.push_str(&format!("effective mass    {}\n", eval.effective_mass));
    out.push_str(&format!("z term            {}\n", eval.z_term));
    out.push_str(&format!("m term            {}\n", eval.m_term));
    out.push_str(&format!("phi               {}\n", eval.phi));
    out.push_str(&format!("base (raw)        {}\n", eval.raw_base));
    out.push_str(&format!("base              {}\n", eval.base));
    out.push_str(&format!("e_q(-phi)         {}\n", eval.eq_minus_phi));
    out.push_str(&format!("P                 {}\n", eval.probability));
    if eval.base_clamped() {
        out.push_str("note              base clamped to zero\n");
    }
    out.push_str(&format!("probability       {}", eval.to_percent_string()));
    out
}
