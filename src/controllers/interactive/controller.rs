use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render_error::RenderError;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::InteractiveControllerPresenterPort;
use crate::core::actions::cancellation::SupersededRender;
use crate::core::actions::compute_image::{ComputeImageError, compute_image_with};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::ModularShadeColourMap;
use crate::core::fractals::mandelbrot::formula::QuadraticMandelbrot;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl SharedState {
    // the slot only ever holds plain data, so a poisoned lock is still usable
    fn lock_request(&self) -> MutexGuard<'_, Option<(u64, Viewport)>> {
        self.latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders viewports off the interaction thread, always working on the most
/// recently submitted one.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
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

    /// Queues `viewport` for rendering and returns its generation.
    ///
    /// Any earlier request that has not finished is superseded.
    pub fn submit_request(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        *self.shared.lock_request() = Some((generation, viewport));

        self.shared.wake.notify_one();

        generation
    }

    pub fn shutdown(&mut self) {
        // the worker checks the flag under this lock before waiting
        {
            let _guard = self.shared.lock_request();
            self.shared.shutdown.store(true, Ordering::Release);
        }
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.last_completed_generation.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared.lock_request();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let cancel_token = SupersededRender {
                generation: job_generation,
                latest_generation: &shared.generation,
                shutdown: &shared.shutdown,
            };

            let start = Instant::now();
            let result = compute_image_with(
                &viewport,
                &QuadraticMandelbrot,
                &ModularShadeColourMap,
                &cancel_token,
            );
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!("discarding superseded render {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => RenderEvent::Frame(FrameData {
                    generation: job_generation,
                    viewport,
                    pixel_buffer,
                    render_duration,
                }),
                Err(ComputeImageError::Cancelled(_)) => continue,
                Err(err) => {
                    warn!("render {} failed: {}", job_generation, err);

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
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
