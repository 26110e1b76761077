use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use antcol::Error;
use antcol::search::antcol::antcol;
use antcol::util::{read_params, export_results};


/** reads the parameters, runs ANTCOL and exports the results */
fn run() -> Result<(), Error> {
    // parse arguments
    let yaml = load_yaml!("antcol.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let cli = read_params(&main_args)?;
    let params = &cli.params;
    log::info!(
        "ncycles: {}, nants: {}, α: {:.2}, β: {:.2}, ρ: {:.2}, seed: {}",
        params.ncycles, params.nants, params.alpha, params.beta, params.rho, params.seed
    );
    if let Some(k) = cli.nb_parts {
        log::info!("the instance is {}-partite", k);
    }

    // solve it
    let t_start = Instant::now();
    let res = antcol(&cli.instance, params)?;
    let duration = t_start.elapsed().as_secs_f32();
    println!("ANTCOL took {:.3} seconds. Nb colors: {}", duration, res.nb_colors);
    println!("nb conflicts: {}", res.nb_conflicts);
    let stats = json!({
        "primal_list": res.primal_list,
        "best_cycle": res.best_cycle,
        "nb_colors": res.nb_colors,
        "nb_conflicts": res.nb_conflicts,
        "nb_parts": cli.nb_parts,
        "time_searched": duration,
        "inst_name": cli.inst_name,
        "params": params,
    });

    // export results
    export_results(
        &cli.instance,
        &res.solution,
        &stats,
        cli.perf_file.as_deref(),
        cli.sol_file.as_deref(),
    )
}

/** solves a coloring instance using ANTCOL */
pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("\tcaused by: {}", cause);
            source = std::error::Error::source(cause);
        }
        process::exit(1);
    }
}
