//! ThreadPool - fixed set of workers draining one FIFO job queue
//!
//! Fire-and-forget: `enqueue` has no result channel and the pool has no
//! "wait for all". Callers that need a join build it on top (see `latch`).
//!
//! A job that panics is caught at the pool boundary, logged, and dropped.
//! The worker that ran it keeps serving the queue.
//!
//! Where jobs run depends on the target:
//! - native: `size` named OS threads, each looping on the queue
//! - wasm32 + `parallel`: one rayon task per job on the pool started by
//!   `init_thread_pool`. The engine must live in a Web Worker, since waiting
//!   on the tick latch blocks the calling thread.
//! - wasm32 without `parallel`: jobs run inline inside `enqueue`

use std::any::Any;
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
#[cfg(not(target_arch = "wasm32"))]
use std::thread::{self, JoinHandle};

use thiserror::Error;

type Job = Box<dyn FnOnce() + Send + 'static>;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("thread pool needs at least one worker")]
    NoWorkers,
    #[error("failed to spawn worker {index}: {source}")]
    Spawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },
}

struct QueueState {
    jobs: VecDeque<Job>,
    // Enqueued but not yet finished, running jobs included.
    pending: usize,
    stop: bool,
}

struct Shared {
    state: Mutex<QueueState>,
    available: Condvar,
    idle: Condvar,
}

impl Shared {
    fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                jobs: VecDeque::new(),
                pending: 0,
                stop: false,
            }),
            available: Condvar::new(),
            idle: Condvar::new(),
        }
    }

    // Jobs never run under this lock, so poisoning can only come from a
    // panic inside VecDeque itself; the queue is still usable in that case.
    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn run(&self, index: usize, job: Job) {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(job)) {
            log::warn!("worker {index}: job panicked: {}", panic_message(payload.as_ref()));
        }
        let mut state = self.lock();
        state.pending -= 1;
        if state.pending == 0 {
            self.idle.notify_all();
        }
    }

    #[cfg(feature = "parallel")]
    fn wait_idle(&self) {
        let mut state = self.lock();
        while state.pending > 0 {
            state = self.idle.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
    }
}

enum Backend {
    #[cfg(not(target_arch = "wasm32"))]
    Threads(Vec<JoinHandle<()>>),
    #[cfg(feature = "parallel")]
    Rayon,
    #[cfg(all(target_arch = "wasm32", not(feature = "parallel")))]
    Inline,
}

pub struct ThreadPool {
    shared: Arc<Shared>,
    backend: Backend,
    size: usize,
}

impl ThreadPool {
    /// Start a pool of `size` workers.
    ///
    /// Natively this spawns named threads. If a spawn fails part-way, the
    /// workers already started are stopped and joined before the error is
    /// returned.
    pub fn new(size: usize) -> Result<Self, PoolError> {
        if size == 0 {
            return Err(PoolError::NoWorkers);
        }

        #[cfg(not(target_arch = "wasm32"))]
        let pool = Self::with_threads(size)?;
        #[cfg(all(target_arch = "wasm32", feature = "parallel"))]
        let pool = Self::on_rayon(size)?;
        #[cfg(all(target_arch = "wasm32", not(feature = "parallel")))]
        let pool = Self {
            shared: Arc::new(Shared::new()),
            backend: Backend::Inline,
            size,
        };

        log::debug!("thread pool started with {size} workers");
        Ok(pool)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_threads(size: usize) -> Result<Self, PoolError> {
        let shared = Arc::new(Shared::new());
        let mut workers = Vec::with_capacity(size);
        for index in 0..size {
            let worker_shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("powder-worker-{index}"))
                .spawn(move || worker_loop(index, &worker_shared));

            match spawned {
                Ok(handle) => workers.push(handle),
                Err(source) => {
                    // Dropping the partial pool stops and joins what we have.
                    drop(ThreadPool {
                        shared,
                        backend: Backend::Threads(workers),
                        size: index,
                    });
                    return Err(PoolError::Spawn { index, source });
                }
            }
        }
        Ok(Self {
            shared,
            backend: Backend::Threads(workers),
            size,
        })
    }

    /// Pool whose jobs run as tasks on the global rayon pool. `size` is only
    /// reported back; rayon decides the real parallelism.
    #[cfg(feature = "parallel")]
    pub fn on_rayon(size: usize) -> Result<Self, PoolError> {
        if size == 0 {
            return Err(PoolError::NoWorkers);
        }
        Ok(Self {
            shared: Arc::new(Shared::new()),
            backend: Backend::Rayon,
            size,
        })
    }

    /// Number of workers.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Jobs waiting in the queue (not counting ones already running).
    pub fn queued(&self) -> usize {
        self.shared.lock().jobs.len()
    }

    /// Append a job and hand it to a worker.
    pub fn enqueue<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut state = self.shared.lock();
            state.jobs.push_back(Box::new(job));
            state.pending += 1;
        }

        match &self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Threads(_) => self.shared.available.notify_one(),
            #[cfg(feature = "parallel")]
            Backend::Rayon => {
                // One task per job; each takes the oldest job, so jobs start
                // in FIFO order.
                let shared = Arc::clone(&self.shared);
                rayon::spawn(move || {
                    let job = shared.lock().jobs.pop_front();
                    if let Some(job) = job {
                        shared.run(rayon::current_thread_index().unwrap_or(0), job);
                    }
                });
            }
            #[cfg(all(target_arch = "wasm32", not(feature = "parallel")))]
            Backend::Inline => {
                let job = self.shared.lock().jobs.pop_front();
                if let Some(job) = job {
                    self.shared.run(0, job);
                }
            }
        }
    }
}

impl Drop for ThreadPool {
    fn drop(&mut self) {
        self.shared.lock().stop = true;
        self.shared.available.notify_all();

        match &mut self.backend {
            #[cfg(not(target_arch = "wasm32"))]
            Backend::Threads(workers) => {
                for handle in workers.drain(..) {
                    // Job panics are caught inside the loop, so a join error
                    // means the loop itself died.
                    if handle.join().is_err() {
                        log::warn!("worker thread terminated abnormally");
                    }
                }
            }
            #[cfg(feature = "parallel")]
            Backend::Rayon => self.shared.wait_idle(),
            #[cfg(all(target_arch = "wasm32", not(feature = "parallel")))]
            Backend::Inline => {}
        }
        log::debug!("thread pool stopped");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn worker_loop(index: usize, shared: &Shared) {
    loop {
        let job = {
            let mut state = shared.lock();
            while !state.stop && state.jobs.is_empty() {
                state = shared
                    .available
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            // Stop only wins once the queue is drained.
            match state.jobs.pop_front() {
                Some(job) => job,
                None => break,
            }
        };
        shared.run(index, job);
    }
    log::trace!("worker {index} exiting");
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
