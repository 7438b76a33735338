//! Timing and result-table printing helpers shared by the binaries.

use crate::types::Count;

pub fn print_time(label: &str, seconds: f64) {
    println!("{:<21}{:.5}", format!("{}:", label), seconds);
}

pub fn print_step(label: &str, value: i64) {
    println!("{:<14}{:>14}", format!("{}:", label), value);
}

#[cfg(not(feature = "count128"))]
pub fn print_clique_count_row(k: usize, count: Count) {
    println!("{:4} {:21}", k, count);
}

#[cfg(feature = "count128")]
pub fn print_clique_count_row(k: usize, count: Count) {
    println!("{:4} {:39}", k, count);
}

pub fn print_clique_counts(counts: &[Count]) {
    #[cfg(not(feature = "count128"))]
    {
        println!("   k |        clique count");
        println!("--------------------------");
    }
    #[cfg(feature = "count128")]
    {
        println!("   k |                          clique count");
        println!("--------------------------------------------");
    }
    for (k, &count) in counts.iter().enumerate() {
        if count != 0 {
            print_clique_count_row(k, count);
        }
    }
}
