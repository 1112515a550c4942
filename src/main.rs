use anyhow::{bail, Context, Result};
use plybot::board::cozy::Position;
use plybot::collect::perft::PerftCounter;
use plybot::search::alphabeta::Searcher;
use plybot::search::eval::eval_cp;
use std::io::{self, BufRead};
use std::time::Instant;

/// Stdin driver: three lines — command, FEN (or "startpos"), depth.
///
/// `perft` prints the leaf count, `eval` prints the static score, any other
/// command runs a timed search and reports the principal line plus node and
/// transposition-table statistics.
fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let command = next_line(&mut lines).context("missing command line")?;
    let fen = next_line(&mut lines).context("missing FEN line")?;
    let depth_str = next_line(&mut lines).context("missing depth line")?;
    let depth: u32 = depth_str.trim().parse().context("depth must be a non-negative integer")?;

    let pos = Position::parse(fen.trim())?;

    match command.trim() {
        "perft" => {
            let mut counter = PerftCounter::new();
            counter.generate_game_tree(pos.board(), depth);
            println!("{}", counter.leaves());
        }
        "eval" => {
            println!("Eval: {}", eval_cp(pos.board()));
        }
        _ => timed_search(&pos, depth),
    }
    Ok(())
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    match lines.next() {
        Some(line) => Ok(line?),
        None => bail!("unexpected end of input"),
    }
}

fn timed_search(pos: &Position, depth: u32) {
    let mut searcher = Searcher::default();
    let t0 = Instant::now();
    let res = searcher.search_depth(pos.board(), depth);
    let elapsed = t0.elapsed();

    println!("{} ({} cp)", res.pv.join(" "), res.score_cp);
    println!();
    println!("Generated {} nodes in {}ms", res.nodes, elapsed.as_millis());
    let knps = (res.nodes as f64 / 1000.0) / elapsed.as_secs_f64().max(f64::EPSILON);
    if knps < 1000.0 {
        println!("\t\t({knps:.1} k nps)");
    } else {
        println!("\t\t({:.2} M nps)", knps / 1000.0);
    }
    println!("Table lookups:\t{}", res.tt_lookups);
    println!("Table size:\t{:.1} MB", searcher.tt_size_mb());
    println!("Searched {} nodes", res.nodes);
}
