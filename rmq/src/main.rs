mod args;
mod input;
mod interactive;
mod report;
mod trials;

use anyhow::{bail, Context};
use args::{Args, PERF_MIN_SIZE, SHOW_ARRAY_LIMIT, SHOW_TREE_LIMIT};
use clap::Parser;
use input::generate_random_array;
use interactive::interactive_loop;
use prompt::{prompt_user_for_size, prompt_user_yes_no};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use range_max_tree::RangeMaxTree;
use report::{print_array, print_banner, print_correctness, print_performance, Report};
use std::io::{self, Write};
use termcolor::{ColorChoice, StandardStream};
use trials::{run_correctness_trials, run_performance_comparison};

fn main() -> anyhow::Result<()> {
    let env = env_logger::Env::new()
        .filter("RMQ_LOG")
        .write_style("RMQ_LOG_STYLE");
    env_logger::init_from_env(env);

    let args = Args::parse();
    log::debug!("args: {:?}", args);

    let mut stdin = io::stdin().lock();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    print_banner(&mut stdout, "segment tree range maximum queries")?;

    let size = match args.size {
        Some(0) => bail!("array size must be at least 1"),
        Some(size) => size,
        None => prompt_user_for_size(&mut stdin, &mut stdout)
            .context("reading array size")?,
    };
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("using seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let source = generate_random_array(&mut rng, size, args.max_value);
    writeln!(
        stdout,
        "generated {} random values (range 0-{})",
        size,
        args.max_value - 1
    )?;
    if args.show_array {
        if size <= SHOW_ARRAY_LIMIT {
            print_array(&mut stdout, &source)?;
        } else {
            log::warn!(
                "not printing an array of {size} values (limit {SHOW_ARRAY_LIMIT})"
            );
        }
    }

    writeln!(stdout, "\nbuilding segment tree...")?;
    let tree = RangeMaxTree::build(&source)?;
    writeln!(stdout, "segment tree built")?;
    if args.show_tree {
        if size <= SHOW_TREE_LIMIT {
            writeln!(stdout, "\nsegment tree:\n{tree}")?;
        } else {
            log::warn!(
                "not printing a tree over {size} values (limit {SHOW_TREE_LIMIT})"
            );
        }
    }

    let correctness = run_correctness_trials(&tree, args.trials, &mut rng)?;
    print_correctness(&mut stdout, &correctness)?;

    let performance = if size >= PERF_MIN_SIZE {
        let queries = args.perf_queries_for(size);
        let report = run_performance_comparison(&tree, queries, &mut rng)?;
        print_performance(&mut stdout, &report)?;
        Some(report)
    } else {
        log::info!(
            "skipping performance comparison for fewer than {PERF_MIN_SIZE} values"
        );
        None
    };

    // a prompted size means someone is at the terminal, so offer the query loop
    let interactive = args.interactive
        || (args.size.is_none()
            && prompt_user_yes_no(&mut stdin, &mut stdout, "\nenter query mode?")?);
    if interactive {
        writeln!(stdout, "\n=== interactive mode ===")?;
        let answered = interactive_loop(&tree, &mut stdin, &mut stdout)?;
        log::info!("answered {answered} interactive queries");
    }

    let report = Report {
        seed,
        size,
        max_value: args.max_value,
        correctness,
        performance,
    };
    if let Some(path) = &args.report {
        report
            .export_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        log::info!("report written to {}", path.display());
    }

    writeln!(stdout)?;
    print_banner(&mut stdout, "program finished")?;
    if !report.correctness.all_passed() {
        bail!(
            "{} of {} correctness trials failed",
            report.correctness.failed(),
            report.correctness.trials
        );
    }
    Ok(())
}
