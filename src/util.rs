use std::str::FromStr;

use clap::ArgMatches;
use fastrand::Rng;
use serde_json::Value;

use crate::{
    color::{ColoringInstance, VertexId, checker, CheckerResult},
    compact_instance::CompactInstance,
    error::Error,
    generator::random_k_partite,
    search::antcol::AntColParams,
};

/** what the command line asks for */
#[derive(Debug)]
pub struct CliParams {
    /// instance file name (or "random-<n>-<k>")
    pub inst_name: String,
    /// instance to color
    pub instance: CompactInstance,
    /// number of parts of the random instance (if the instance is generated)
    pub nb_parts: Option<usize>,
    /// colony parameters
    pub params: AntColParams,
    /// where to write the solution
    pub sol_file: Option<String>,
    /// where to write the statistics
    pub perf_file: Option<String>,
}

/// parses the value of the argument `name` (if present)
fn parse_arg<T:FromStr>(main_args:&ArgMatches, name:&str) -> Result<Option<T>, Error> {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_| {
            Error::InvalidParameter(format!("unable to parse the {} given ('{}')", name, s))
        })
    }
}

/** reads command line input: the instance (file or random), the parameters
(json file, overridden by the flags), and the output files. */
pub fn read_params(main_args:&ArgMatches) -> Result<CliParams, Error> {
    // parameters from the configuration file, if any
    let config_file = main_args.value_of("config");
    let mut params = match config_file {
        None => AntColParams::default(),
        Some(filename) => AntColParams::from_json_file(filename)?,
    };
    if let Some(seed) = parse_arg(main_args, "seed")? { params.seed = seed; }
    // read (or generate) the instance
    let (inst_name, instance, nb_parts) = match main_args.value_of("instance") {
        Some(filename) => {
            log::info!("reading instance: {}...", filename);
            (filename.to_string(), CompactInstance::from_file(filename)?, None)
        }
        None => {
            let max_vertices:usize = parse_arg(main_args, "random")?.ok_or_else(|| {
                Error::InvalidParameter("either an instance or --random is required".to_string())
            })?;
            let mut rng = Rng::with_seed(params.seed);
            let (instance, k) = random_k_partite(max_vertices, &mut rng)?;
            (format!("random-{}-{}", instance.nb_vertices(), k), instance, Some(k))
        }
    };
    instance.display_statistics();
    // command line overrides
    if let Some(ncycles) = parse_arg(main_args, "cycles")? { params.ncycles = ncycles; }
    match parse_arg(main_args, "ants")? {
        Some(nants) => params.nants = nants,
        None => if config_file.is_none() {
            params.nants = std::cmp::max(1, instance.nb_vertices() / 4);
        }
    }
    if let Some(alpha) = parse_arg(main_args, "alpha")? { params.alpha = alpha; }
    if let Some(beta) = parse_arg(main_args, "beta")? { params.beta = beta; }
    if let Some(rho) = parse_arg(main_args, "rho")? { params.rho = rho; }
    if main_args.is_present("parallel") { params.parallel = true; }
    params.validate()?;
    // output files
    let sol_file = main_args.value_of("solution").map(|e| e.to_string());
    if let Some(e) = &sol_file { log::info!("printing solutions in: {}", e); }
    let perf_file = main_args.value_of("perf").map(|e| e.to_string());
    if let Some(e) = &perf_file { log::info!("printing perfs in: {}", e); }
    Ok(CliParams { inst_name, instance, nb_parts, params, sol_file, perf_file })
}

/// exports search results to files
pub fn export_results(
    instance:&dyn ColoringInstance,
    solution:&[Vec<VertexId>],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<(), Error> {
    // export statistics
    if let Some(filename) = perf_file {
        std::fs::write(filename, serde_json::to_string(stats)?)
            .map_err(|e| Error::io(filename, e))?;
    }
    // export solution
    if let Some(filename) = sol_file {
        match checker(instance, solution) {
            CheckerResult::Ok(_) => {},
            reason => log::warn!("invalid solution (reason: {:?})", reason),
        }
        instance.write_solution(filename, solution)?;
    }
    Ok(())
}
