//! Build-pipeline checks: file loading through the builder, serialized
//! graphs, synthetic inputs, and directed-input detection.

use clap::Parser;
use std::fs::File;
use std::io::Write;

use pivotscale::builder::Builder;
use pivotscale::cli::CliqueArgs;
use pivotscale::count::pivot_count;
use pivotscale::ordering;

fn args(argv: &[&str]) -> CliqueArgs {
    CliqueArgs::try_parse_from(std::iter::once("pivotscale").chain(argv.iter().copied())).unwrap()
}

#[test]
fn edge_list_file_counts_triangles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bowtie.el");
    let mut f = File::create(&path).unwrap();
    // two triangles sharing vertex 2
    for (u, v) in [(0, 1), (0, 2), (1, 2), (2, 3), (2, 4), (3, 4)] {
        writeln!(f, "{} {}", u, v).unwrap();
    }
    drop(f);

    let cli = args(&["-f", path.to_str().unwrap(), "-s"]);
    let g = Builder::from_cli(&cli).make_graph().unwrap();
    assert!(!g.directed());
    let dag = ordering::directionalize(&g);
    assert_eq!(pivot_count(&dag, 3), 2);
}

#[test]
fn unsymmetrized_edge_list_reports_directed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arrows.el");
    let mut f = File::create(&path).unwrap();
    writeln!(f, "0 1").unwrap();
    writeln!(f, "1 2").unwrap();
    drop(f);

    let cli = args(&["-f", path.to_str().unwrap()]);
    let g = Builder::from_cli(&cli).make_graph().unwrap();
    assert!(g.directed());
}

#[test]
fn serialized_graph_round_trips_through_builder() {
    let dir = tempfile::tempdir().unwrap();
    let el_path = dir.path().join("triangle.el");
    let sg_path = dir.path().join("triangle.sg");
    let mut f = File::create(&el_path).unwrap();
    for (u, v) in [(0, 1), (0, 2), (1, 2)] {
        writeln!(f, "{} {}", u, v).unwrap();
    }
    drop(f);

    let cli = args(&["-f", el_path.to_str().unwrap(), "-s"]);
    let g = Builder::from_cli(&cli).make_graph().unwrap();
    g.save(&sg_path).unwrap();

    let cli = args(&["-f", sg_path.to_str().unwrap()]);
    let loaded = Builder::from_cli(&cli).make_graph().unwrap();
    assert!(!loaded.directed());
    assert_eq!(loaded.num_nodes(), g.num_nodes());
    assert_eq!(pivot_count(&ordering::directionalize(&loaded), 3), 1);
}

#[test]
fn synthetic_graphs_build_and_count() {
    for argv in [&["-g", "7", "-k", "6"][..], &["-u", "7", "-k", "6"][..]] {
        let cli = args(argv);
        let g = Builder::from_cli(&cli).make_graph().unwrap();
        assert!(!g.directed());
        assert_eq!(g.num_nodes(), 128);
        let dag = ordering::directionalize(&g);
        // triangle counts just have to be stable for a fixed seed
        assert_eq!(pivot_count(&dag, 3), pivot_count(&dag, 3));
    }
}
