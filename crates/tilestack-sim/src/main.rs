//! Headless stand-in for the canvas UI: replays an interaction script
//! against an [`OrderStore`] and prints what the renderer would be told.

mod script;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tilestack_order::logging::{init_logging, LoggingConfig};
use tilestack_order::{OrderConfig, OrderStore};

use script::{parse_script, Command};

#[derive(Debug, Parser)]
#[command(name = "tilestack-sim", about = "Replay tile interactions against the ordering store")]
struct Args {
    /// Script file; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Use the gapped rank policy instead of full relabel.
    #[arg(long)]
    gapped: bool,

    /// Rank given to the front-most tile after a relabel.
    #[arg(long)]
    base_rank: Option<i64>,

    /// Spacing between adjacent ranks.
    #[arg(long)]
    gap: Option<i64>,

    /// Log filter, e.g. "tilestack_order=trace". Falls back to RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn order_config(&self) -> OrderConfig {
        let mut config = if self.gapped {
            OrderConfig::gapped()
        } else {
            OrderConfig::default()
        };
        if let Some(base) = self.base_rank {
            config = config.base_rank(base);
        }
        if let Some(gap) = self.gap {
            config = config.rank_gap(gap);
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(match &args.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let src = match &args.script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading script from stdin")?;
            buf
        }
    };
    let commands = parse_script(&src)?;

    let mut store = OrderStore::with_config(args.order_config())?;
    log::info!("replaying {} commands ({:?})", commands.len(), store.config().policy);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for cmd in &commands {
        run(&mut store, cmd, &mut out)?;
    }
    Ok(())
}

fn run(store: &mut OrderStore, cmd: &Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Front(id) => {
            let rank = store
                .move_to_front(id)
                .with_context(|| format!("bringing `{id}` to front"))?;
            log::debug!("`{id}` now at rank {rank}");
        }
        Command::Remove(id) => {
            if !store.remove(id).with_context(|| format!("removing `{id}`"))? {
                log::warn!("remove: `{id}` was not tracked");
            }
        }
        Command::Rank(id) => writeln!(out, "{id} {}", store.rank_of(id))?,
        Command::Key(id) => writeln!(out, "{id} {}", store.stable_key_for(id).get())?,
        Command::List => {
            let line: Vec<String> = store.iter().map(|e| format!("{}={}", e.id, e.rank)).collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        Command::Paint => {
            let line: Vec<&str> = store.ids().rev().collect();
            writeln!(out, "{}", line.join(" "))?;
        }
        Command::Count => writeln!(out, "{}", store.len())?,
        Command::Reset => store.reset(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(src: &str) -> String {
        let mut store = OrderStore::new();
        let mut out = Vec::new();
        for cmd in parse_script(src).unwrap() {
            run(&mut store, &cmd, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_and_paint_orders() {
        let out = replay("front A\nfront B\nfront C\nfront A\nlist\npaint\n");
        assert_eq!(out, "A=9000 C=8999 B=8998\nB C A\n");
    }

    #[test]
    fn remove_count_reset() {
        let out = replay("front A\nfront B\nfront C\nremove B\ncount\nlist\nreset\ncount\n");
        assert_eq!(out, "2\nC=9000 A=8999\n0\n");
    }

    #[test]
    fn rank_of_untracked_is_base() {
        assert_eq!(replay("rank ghost\n"), "ghost 9000\n");
    }

    #[test]
    fn bundled_script_replays() {
        let out = replay(include_str!("../scripts/click_to_front.txt"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "C=9000 B=8999 A=8998");
        assert_eq!(lines[1], "A=9000 C=8999 B=8998");
        assert_eq!(lines[2], lines[1]);
        assert_eq!(lines[3], "2");
        assert_eq!(lines[4], "C A");
        assert_eq!(lines[5], "ghost 9000");
        assert!(lines[6].starts_with("ghost "));
        assert_eq!(lines[7], "x=9000");
    }

    #[test]
    fn gapped_flag_selects_policy() {
        let args = Args::parse_from(["tilestack-sim", "--gapped", "--gap", "50"]);
        let config = args.order_config();
        assert_eq!(config.policy, tilestack_order::RankPolicy::Gapped);
        assert_eq!(config.rank_gap, 50);
    }
}
