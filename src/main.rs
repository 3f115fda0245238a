//! Elecguide - Electrician's calculator
//!
//! Ohm's law / power law solver, cable section advisor and multimeter guide.
//!
//! # Usage
//!
//! ```bash
//! elecguide solve --resistance 23 --edited resistance
//! elecguide solve --voltage 400 --current 10 --edited current --three-phase
//! elecguide cable 18.5 --table compact
//! elecguide guide voltage --instrument yellow --component outlet
//! ```

use clap::{Parser, Subcommand};
use elecguide_core::{
    cable::{CableRecommendation, CableTable},
    circuit::{normalize_value, CircuitState, EditEvent, Field, PhaseMode},
    error::Result,
    guide::{GuideSession, GuideView, InstrumentModel, MeasurementType},
    solver::{Calculator, CalculatorConfig, DISPLAY_DECIMALS, MAX_DECIMALS},
};

/// Electrical calculator and multimeter guide
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the calculator fields after an edit
    Solve {
        /// Voltage in volts (defaults to the nominal voltage of the phase mode)
        #[arg(short = 'u', long)]
        voltage: Option<f64>,

        /// Current in amperes
        #[arg(short = 'i', long)]
        current: Option<f64>,

        /// Resistance in ohms
        #[arg(short = 'r', long)]
        resistance: Option<f64>,

        /// Power in watts
        #[arg(short = 'p', long)]
        power: Option<f64>,

        /// Field that was just edited (voltage, current, resistance, power or phase)
        #[arg(short, long)]
        edited: EditEvent,

        /// Three-phase supply
        #[arg(short, long)]
        three_phase: bool,

        /// Cable threshold table (standard or compact)
        #[arg(long, default_value_t = CableTable::Standard)]
        table: CableTable,

        /// Decimals kept in computed fields
        #[arg(
            long,
            default_value_t = DISPLAY_DECIMALS,
            value_parser = clap::value_parser!(u32).range(0..=MAX_DECIMALS as i64)
        )]
        decimals: u32,
    },

    /// Recommend a cable section for a current
    Cable {
        /// Current in amperes
        #[arg(allow_negative_numbers = true)]
        amps: f64,

        /// Cable threshold table (standard or compact)
        #[arg(long, default_value_t = CableTable::Standard)]
        table: CableTable,
    },

    /// Show how to take a measurement
    Guide {
        /// voltage, current, resistance or capacitance
        measurement: MeasurementType,

        /// Reference instrument (red or yellow)
        #[arg(short, long, default_value_t = InstrumentModel::Red)]
        instrument: InstrumentModel,

        /// Component to list help photos for
        #[arg(short, long)]
        component: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Solve {
            voltage,
            current,
            resistance,
            power,
            edited,
            three_phase,
            table,
            decimals,
        } => {
            let phase = PhaseMode::from_three_phase(three_phase);
            let config = CalculatorConfig::new()
                .with_phase(phase)
                .with_cable_table(table)
                .with_decimals(decimals);

            let mut state = CircuitState::new(phase);
            if voltage.is_some() {
                state.voltage = normalize_value(voltage);
            }
            state.current = normalize_value(current);
            state.resistance = normalize_value(resistance);
            state.power = normalize_value(power);

            let mut calculator = Calculator::with_state(config, state);
            calculator.apply(edited);
            print_calculator(&calculator);
        }

        Command::Cable { amps, table } => {
            let cable = CableRecommendation::from_current_with(table, Some(amps));
            println!("{cable}");
        }

        Command::Guide {
            measurement,
            instrument,
            component,
        } => {
            let mut session = GuideSession::new(instrument);
            let mut view = session.select_measurement(measurement);
            if let Some(key) = component.as_deref() {
                view = session.select_component(key)?;
            }
            print_guide(&view);
        }
    }

    Ok(())
}

fn print_calculator(calculator: &Calculator) {
    println!("{:<12}{}", "Phase:", calculator.phase());
    for field in Field::ALL {
        let shown = calculator.display(field);
        let label = format!("{}:", capitalize(field.name()));
        if shown.is_empty() {
            println!("{label:<12}-");
        } else {
            println!("{label:<12}{shown} {}", field.unit());
        }
    }
    println!("{:<12}{}", "Cable:", calculator.cable());
}

fn print_guide(view: &GuideView) {
    let entry = &view.entry;
    println!("{}", entry.title);
    println!("[{}] {}", entry.severity, entry.warning);
    println!("{}", entry.guidance);
    println!();
    println!("{}", entry.info);
    println!();
    match entry.overlay {
        Some(o) => println!("Selector on {}: top {}%, left {}%", view.image, o.top, o.left),
        None => println!("Selector on {}: not marked", view.image),
    }

    println!("Components:");
    for c in view.components {
        let marker = if view.component == Some(c) { "*" } else { " " };
        println!(" {marker} {:<12}{}", c.key, c.label);
    }

    if !view.gallery.is_empty() {
        println!("Help photos:");
        for path in &view.gallery {
            println!("   {path}");
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
