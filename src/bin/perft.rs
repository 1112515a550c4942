use clap::Parser;
use plybot::board::cozy::Position;
use plybot::collect::dfs::{DfsMode, LimitedDfs};
use plybot::collect::divide::Divide;
use plybot::collect::perft::PerftCounter;
use rayon::prelude::*;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for plybot")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the node count at every ply, not just the deepest
    #[arg(long, default_value_t = false)]
    per_ply: bool,
    /// Print the per-root-move breakdown
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn main() {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(a) => a,
        // Usage errors (missing depth, bad flag) exit 1; --help/--version
        // keep clap's normal behavior.
        Err(e) if e.use_stderr() => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let base = match Position::parse(&args.fen) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.divide {
        let mut divide = Divide::new();
        divide.generate_game_tree(base.board(), args.depth);
        divide.print();
        return;
    }

    if args.per_ply {
        let mut counter = PerftCounter::new();
        counter.generate_game_tree(base.board(), args.depth);
        for (ply, count) in counter.per_ply().iter().enumerate().skip(1) {
            println!("perft({ply}) = {count}");
        }
        return;
    }

    if args.depth == 0 {
        // The root itself is the only node at depth 0.
        println!("nodes: 1");
        return;
    }

    let t0 = Instant::now();
    let nodes = if args.threads <= 1 {
        let mut dfs = LimitedDfs::new(DfsMode::CountLeaves);
        dfs.generate_game_tree(base.board(), args.depth);
        dfs.total_nodes()
    } else {
        root_split(&base, args.depth, args.threads)
    };
    let dt = t0.elapsed().as_secs_f64();

    if args.nps {
        println!("nodes: {nodes} elapsed: {dt:.3}s nps: {:.1}", nodes as f64 / dt.max(f64::EPSILON));
    } else {
        println!("nodes: {nodes}");
    }
}

/// Each root move gets its own forked board and an independent collector, so
/// the single-threaded collector core stays untouched.
fn root_split(base: &Position, depth: u32, threads: usize) -> u64 {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .expect("thread pool");
    pool.install(|| {
        let mut root_moves: Vec<cozy_chess::Move> = Vec::new();
        base.board().generate_moves(|moves| {
            for m in moves {
                root_moves.push(m);
            }
            false
        });
        if depth == 1 {
            return root_moves.len() as u64;
        }
        root_moves
            .par_iter()
            .map(|&m| {
                let mut b = base.board().clone();
                b.play(m);
                let mut dfs = LimitedDfs::new(DfsMode::CountLeaves);
                dfs.generate_game_tree(&b, depth - 1);
                dfs.total_nodes()
            })
            .sum()
    })
}
