#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::Path;

use clap::Parser;

use refute::{
    config::Config,
    context::{Context, Counters},
    reports::proof::Proof,
    session::{KnowledgeFile, Response},
};

mod config;
mod read;

use config::{config_from_args, Args, CliConfig, Mode};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let (cfg, cli_options) = match config_from_args(&args) {
        Ok(configs) => configs,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    match &args.mode {
        Mode::Resolution { path } => resolution(path, cfg, &cli_options),
        Mode::Cooking {
            knowledge,
            commands,
        } => cooking(knowledge, commands, &cfg, &cli_options),
    }
}

/// Proves the last clause at `path` from the clauses before it.
fn resolution(path: &Path, cfg: Config, cli_options: &CliConfig) {
    let (premises, goal) = match read::read_problem(path) {
        Ok(problem) => problem,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_premises(cfg, premises);

    if let Err(e) = ctx.prove(goal) {
        println!("Proof error: {e}");
        std::process::exit(2);
    }

    match Proof::from_context(&ctx) {
        Some(proof) => write_proof(&proof, &ctx.counters, cli_options),
        None => {
            println!("Proof error: the attempt did not conclude");
            std::process::exit(2);
        }
    }
}

/// Applies the commands at `commands_path` to the knowledge base at `knowledge_path`.
fn cooking(knowledge_path: &Path, commands_path: &Path, cfg: &Config, cli_options: &CliConfig) {
    let knowledge_file = KnowledgeFile::new(knowledge_path);

    let knowledge_base = match knowledge_file.load() {
        Ok(kb) => kb,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let commands = match read::read_command_file(commands_path) {
        Ok(commands) => commands,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    println!("Constructed with knowledge:");
    for line in knowledge_base.clause_lines() {
        println!("{line}");
    }
    println!();

    for command in commands {
        println!("User's command: {command}");

        match knowledge_file.apply(&command, cfg) {
            Ok(Response::Query { proof, counters }) => {
                write_proof(&proof, &counters, cli_options)
            }
            Ok(response) => println!("{response}"),
            Err(e) => println!("{e}"),
        }

        println!();
    }
}

fn write_proof(proof: &Proof, counters: &Counters, cli_options: &CliConfig) {
    println!("{proof}");

    if cli_options.stats {
        println!("c Iterations:  {}", counters.total_iterations);
        println!("c Resolvents:  {}", counters.resolvents);
        println!("c Redundant:   {}", counters.redundant);
        println!("c Tautologies: {}", counters.tautologies);
        println!("c Time:        {:.2?}", counters.time);
    }

    if cli_options.dot {
        let graph = proof.to_graph();
        println!(
            "{}",
            petgraph::dot::Dot::with_config(&graph, &[petgraph::dot::Config::EdgeNoLabel])
        );
    }
}
