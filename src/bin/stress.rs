use combine_id::{verify, Error};
use log::{error, info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
struct Config {
    /// blocking-pool threads calling `next` in a tight loop
    threads: usize,
    /// tokio tasks calling `next`, yielding between calls
    tasks: usize,
    /// calls per thread and per task
    calls: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: 8,
            tasks: 8,
            calls: 10_000,
        }
    }
}

impl Config {
    /// identifiers the run will issue, if they fit in one `Vec<u64>`
    fn total_calls(&self) -> Result<usize, Error> {
        const MAX_IDS: usize = isize::MAX as usize / std::mem::size_of::<u64>();

        self.threads
            .checked_add(self.tasks)
            .and_then(|workers| workers.checked_mul(self.calls))
            .filter(|&total| total <= MAX_IDS)
            .ok_or_else(|| {
                error!("{self:?} issues more identifiers than fit in memory");
                Error::InvalidConfig
            })
    }
}

#[derive(Serialize, Debug)]
struct Report {
    total: usize,
    first: u64,
    last: u64,
    elapsed_ms: u128,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // setup logging to stderr
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = parse_config(std::env::args().nth(1).as_deref())?;
    info!("running with {config:?}");

    let report = run(config).await?;
    let json = serde_json::to_string(&report).map_err(|e| {
        error!("failed to serialize {report:?} due to {e}");
        Error::SerializeFailed
    })?;
    println!("{json}");

    Ok(())
}

fn parse_config(arg: Option<&str>) -> Result<Config, Error> {
    match arg {
        None => Ok(Config::default()),
        Some(json) => serde_json::from_str(json).map_err(|e| {
            error!("failed to parse config {json} due to {e}");
            Error::InvalidConfig
        }),
    }
}

async fn run(config: Config) -> Result<Report, Error> {
    let total = config.total_calls()?;
    let start = Instant::now();
    let calls = config.calls;

    // blocking workers and tasks run at the same time so both kinds of callers interleave
    let threads = (0..config.threads).map(|_| {
        tokio::task::spawn_blocking(move || (0..calls).map(|_| combine_id::next()).collect::<Vec<_>>())
    });

    let tasks = (0..config.tasks).map(|_| {
        tokio::spawn(async move {
            let mut ids = Vec::with_capacity(calls);
            for _ in 0..calls {
                ids.push(combine_id::next());
                tokio::task::yield_now().await;
            }
            ids
        })
    });

    let workers: Vec<_> = threads.chain(tasks).collect();
    let mut ids = Vec::with_capacity(total);
    for res in futures::future::join_all(workers).await {
        match res {
            Ok(batch) => ids.extend(batch),
            Err(e) => {
                error!("worker failed due to {e}");
                return Err(Error::WorkerPanicked);
            }
        }
    }

    let elapsed_ms = start.elapsed().as_millis();
    let range = verify::check_contiguous(&mut ids)?;
    info!(
        "{} identifiers from {} to {} in {elapsed_ms}ms",
        ids.len(),
        range.start(),
        range.end()
    );

    Ok(Report {
        total: ids.len(),
        first: *range.start(),
        last: *range.end(),
        elapsed_ms,
    })
}
