//! Execution strategies.
//!
//! The single-threaded runner sweeps the whole image row-major. The
//! multi-threaded runner splits it into row bands, spawns one scoped worker
//! per band and joins them all; workers share the scene read-only and each
//! writes only its own rows.

use std::fmt;
use std::io;
use std::str::FromStr;
use std::thread::{self, Scope, ScopedJoinHandle};

use crate::bucket::split_rows;
use crate::error::{ConfigError, RenderError};
use crate::framebuffer::Framebuffer;
use crate::renderer::{render_rows, ShadingMode};
use crate::World;

/// How pixels get scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    SingleThreaded,
    Multithreaded,
    /// Recognised so it can be rejected explicitly; never renders.
    Realtime,
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Strategy::SingleThreaded),
            "mt" => Ok(Strategy::Multithreaded),
            "realtime" => Ok(Strategy::Realtime),
            other => Err(ConfigError::InvalidStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::SingleThreaded => "single",
            Strategy::Multithreaded => "mt",
            Strategy::Realtime => "realtime",
        })
    }
}

/// Starts render workers inside a thread scope.
pub trait Spawner: Sync {
    fn spawn<'scope, 'env, F>(
        &self,
        scope: &'scope Scope<'scope, 'env>,
        index: usize,
        work: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope;
}

/// Named OS threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsThreads;

impl Spawner for OsThreads {
    fn spawn<'scope, 'env, F>(
        &self,
        scope: &'scope Scope<'scope, 'env>,
        index: usize,
        work: F,
    ) -> io::Result<ScopedJoinHandle<'scope, ()>>
    where
        F: FnOnce() + Send + 'scope,
    {
        thread::Builder::new()
            .name(format!("render-{}", index))
            .spawn_scoped(scope, work)
    }
}

/// Fill `framebuffer` using the selected strategy.
pub fn run_renderer(
    framebuffer: &mut Framebuffer,
    world: &dyn World,
    strategy: Strategy,
    workers: usize,
    mode: ShadingMode,
) -> Result<(), RenderError> {
    if workers == 0 {
        return Err(ConfigError::InvalidWorkerCount(workers).into());
    }

    match strategy {
        Strategy::SingleThreaded => {
            render_single(framebuffer, world, mode);
            Ok(())
        }
        Strategy::Multithreaded => render_multithreaded(framebuffer, world, workers, mode, &OsThreads),
        Strategy::Realtime => Err(RenderError::Unimplemented(strategy)),
    }
}

/// Render every pixel on the calling thread.
pub fn render_single(framebuffer: &mut Framebuffer, world: &dyn World, mode: ShadingMode) {
    render_rows(&mut framebuffer.rows_mut(), world, mode);
}

/// Render with one worker per row band.
///
/// Every worker that was started is joined before returning, including when
/// a later spawn fails. In that case the bands of the workers that did start
/// are fully rendered and the spawn error is returned.
pub fn render_multithreaded<S: Spawner>(
    framebuffer: &mut Framebuffer,
    world: &dyn World,
    workers: usize,
    mode: ShadingMode,
    spawner: &S,
) -> Result<(), RenderError> {
    if workers == 0 {
        return Err(ConfigError::InvalidWorkerCount(workers).into());
    }

    let bands = split_rows(framebuffer.height(), workers);
    let views = framebuffer.bands_mut(&bands);

    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(bands.len());
        let mut result = Ok(());

        for (band, mut view) in bands.iter().zip(views) {
            log::debug!("Starting worker {} on rows {:?}", band.index, band.rows());

            let work = move || render_rows(&mut view, world, mode);
            match spawner.spawn(scope, band.index, work) {
                Ok(handle) => handles.push((band.index, handle)),
                Err(source) => {
                    log::error!("Could not start render worker {}: {}", band.index, source);
                    result = Err(RenderError::WorkerSpawn {
                        index: band.index,
                        source,
                    });
                    break;
                }
            }
        }

        for (index, handle) in handles {
            if handle.join().is_err() && result.is_ok() {
                result = Err(RenderError::WorkerPanicked { index });
            }
        }

        result
    })
}
