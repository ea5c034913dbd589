use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::{debug, error, trace, warn};

use crate::controllers::compositor::errors::RenderFrameError;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::ports::renderer::{CpuFrameRenderer, FrameRendererPort};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    renderer: Arc<dyn FrameRendererPort>,
}

/// Owns the render worker thread. Only the newest submitted request is ever rendered;
/// older in-flight work is cancelled and dropped without an event.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        Self::with_renderer(presenter_port, Arc::new(CpuFrameRenderer))
    }

    pub fn with_renderer(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        renderer: Arc<dyn FrameRendererPort>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
            renderer,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();
        trace!(generation, "render request submitted");

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked before shutdown");
            }
        }
    }

    #[must_use]
    pub fn last_submitted_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let Some((job_generation, request)) = Self::next_job(shared) else {
                debug!("render worker stopping");
                return;
            };

            let cancel_token = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            let start = Instant::now();
            let result = shared.renderer.render(&request, &cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                trace!(generation = job_generation, "render superseded");
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    trace!(
                        generation = job_generation,
                        render_ms = render_duration.as_secs_f64() * 1000.0,
                        "render complete"
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        frame_generation: request.frame.generation(),
                        pixel_buffer,
                        render_duration,
                    })
                }
                Err(RenderFrameError::Cancelled) => continue,
                Err(err) => {
                    error!(generation = job_generation, error = %err, "render failed");

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }

    /// Blocks until a request is pending; `None` once shutdown is requested.
    fn next_job(shared: &SharedState) -> Option<(u64, RenderRequest)> {
        let mut guard = shared
            .latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(job) = guard.take() {
                return Some(job);
            }

            guard = shared
                .wake
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
