//! Counts occurrences of cliques of size k.

use anyhow::Result;
use std::process;
use std::time::Instant;

use pivotscale::builder::Builder;
use pivotscale::cli::CliqueArgs;
use pivotscale::count::pivot_count;
use pivotscale::ordering;
use pivotscale::stats::{print_clique_count_row, print_step, print_time};

fn main() -> Result<()> {
    let cli = CliqueArgs::parse_or_exit();
    let builder = Builder::from_cli(&cli);

    let dag;
    let direct_time;
    {
        // restricted scope so the undirected graph frees before counting
        let g = builder.make_graph()?;
        if g.directed() {
            println!("Input graph is directed but clique counting requires undirected");
            process::exit(-2);
        }
        let start = Instant::now();
        dag = ordering::directionalize(&g);
        direct_time = start.elapsed().as_secs_f64();
    }

    dag.print_stats();
    print_step("Max Degree", ordering::find_max_degree(&dag) as i64);
    print_time("Directing Time", direct_time);

    let start = Instant::now();
    let k_count = pivot_count(&dag, cli.clique_size);
    let count_time = start.elapsed().as_secs_f64();

    print_time("Counting Time", count_time);
    print_time("Total Time", direct_time + count_time);
    print!("k: ");
    print_clique_count_row(cli.clique_size as usize, k_count);
    Ok(())
}
