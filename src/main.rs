extern crate clap;
extern crate env_logger;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate unipoly;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use itertools::Itertools;
use log::LevelFilter;
use std::process;
use unipoly::radix::parse_in_base;
use unipoly::{Error, Polynomial, Result};

/// Settings collected from the command line.
struct Config {
    decimal_separator: char,
    verbosity: u64,
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let separator = matches.value_of("separator").unwrap_or(".");
        let mut chars = separator.chars();
        let decimal_separator = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "separator must be a single character, got {:?}",
                    separator
                )))
            }
        };

        Ok(Config {
            decimal_separator,
            verbosity: matches.occurrences_of("v"),
        })
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let poly_arg = |name: &'a str, help: &'b str| {
        Arg::with_name(name)
            .help(help)
            .required(true)
            .takes_value(true)
    };

    App::new("unipoly")
        .version("0.1.0")
        .about("Single-variable polynomial arithmetic")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("separator")
                .short("s")
                .long("separator")
                .value_name("CHAR")
                .help("Decimal separator used when printing coefficients")
                .default_value(".")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("v")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Prints a polynomial given by its coefficients, highest degree first")
                .setting(AppSettings::AllowLeadingHyphen)
                .arg(
                    Arg::with_name("coefficients")
                        .short("c")
                        .long("coefficients")
                        .help("Also prints the normalized coefficient list"),
                )
                .arg(poly_arg("POLY", "Comma-separated coefficients, e.g. 1.5,2,2")),
        )
        .subcommand(
            SubCommand::with_name("add")
                .about("Adds two polynomials")
                .setting(AppSettings::AllowLeadingHyphen)
                .arg(poly_arg("LHS", "Left operand"))
                .arg(poly_arg("RHS", "Right operand")),
        )
        .subcommand(
            SubCommand::with_name("sub")
                .about("Subtracts the right polynomial from the left one")
                .setting(AppSettings::AllowLeadingHyphen)
                .arg(poly_arg("LHS", "Left operand"))
                .arg(poly_arg("RHS", "Right operand")),
        )
        .subcommand(
            SubCommand::with_name("mul")
                .about("Multiplies two polynomials")
                .setting(AppSettings::AllowLeadingHyphen)
                .arg(poly_arg("LHS", "Left operand"))
                .arg(poly_arg("RHS", "Right operand")),
        )
        .subcommand(
            SubCommand::with_name("neg")
                .about("Negates a polynomial")
                .setting(AppSettings::AllowLeadingHyphen)
                .arg(poly_arg("POLY", "Comma-separated coefficients")),
        )
        .subcommand(
            SubCommand::with_name("scale")
                .about("Multiplies a polynomial by a number")
                .setting(AppSettings::AllowLeadingHyphen)
                .arg(poly_arg("POLY", "Comma-separated coefficients"))
                .arg(poly_arg("FACTOR", "Scalar factor")),
        )
        .subcommand(
            SubCommand::with_name("base")
                .about("Converts a number written in base 2 to 16 to decimal")
                .arg(poly_arg("TEXT", "Digits 0-9 and A-F"))
                .arg(poly_arg("BASE", "Base of TEXT, in [2, 16]")),
        )
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .value_of(name)
        .ok_or_else(|| Error::InvalidArgument(format!("missing argument {}", name)))
}

fn parse_number(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| Error::InvalidArgument(format!("invalid number {:?}: {}", text, e)))
}

fn operand(matches: &ArgMatches, name: &str) -> Result<Polynomial> {
    let coefficients = value(matches, name)?
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<f64>>>()?;
    let p = Polynomial::new(&coefficients)?;
    debug!("{} = {:?}", name, p);
    Ok(p)
}

fn binary<F>(matches: &ArgMatches, op: F) -> Result<Polynomial>
where
    F: Fn(&Polynomial, &Polynomial) -> Polynomial,
{
    let lhs = operand(matches, "LHS")?;
    let rhs = operand(matches, "RHS")?;
    Ok(op(&lhs, &rhs))
}

fn run(matches: &ArgMatches, config: &Config) -> Result<String> {
    let result = match matches.subcommand() {
        ("show", Some(m)) => {
            let p = operand(m, "POLY")?;
            if m.is_present("coefficients") {
                let coefficients = p
                    .coefficients()
                    .iter()
                    .map(|c| {
                        Polynomial::constant(*c)
                            .printer(config.decimal_separator)
                            .to_string()
                    })
                    .join("; ");
                return Ok(format!(
                    "{}\n[{}]",
                    p.printer(config.decimal_separator),
                    coefficients
                ));
            }
            p
        }
        ("add", Some(m)) => binary(m, |a, b| a + b)?,
        ("sub", Some(m)) => binary(m, |a, b| a - b)?,
        ("mul", Some(m)) => binary(m, |a, b| a * b)?,
        ("neg", Some(m)) => -operand(m, "POLY")?,
        ("scale", Some(m)) => operand(m, "POLY")? * parse_number(value(m, "FACTOR")?)?,
        ("base", Some(m)) => {
            let text = value(m, "TEXT")?;
            let base = value(m, "BASE")?.parse::<u32>().map_err(|e| {
                Error::InvalidArgument(format!("invalid base: {}", e))
            })?;
            return parse_in_base(text, base).map(|v| v.to_string());
        }
        (name, _) => {
            return Err(Error::InvalidArgument(format!(
                "unknown command {:?}",
                name
            )))
        }
    };

    info!("result has degree {}", result.degree());
    Ok(result.printer(config.decimal_separator).to_string())
}

fn main() {
    let matches = app().get_matches();

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    match run(&matches, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
