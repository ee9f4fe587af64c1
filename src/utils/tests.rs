pub mod logging {
    use std::sync::Once;

    use tracing::subscriber::set_global_default;
    use tracing_log::LogTracer;
    use tracing_subscriber::fmt;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::EnvFilter;

    static LOGGING: Once = Once::new();

    pub fn init() {
        LOGGING.call_once(|| {
            // Subscribe to all log crate log messages and transform them to a tracing events
            LogTracer::init().expect("failed to init logging for testing");

            let filter = if std::env::var_os("RUST_LOG").is_some() {
                // This is controlled by the env variable RUST_LOG
                EnvFilter::from_default_env()
            } else {
                // If RUST_LOG is not set
                EnvFilter::from(format!("{}=info", env!("CARGO_CRATE_NAME")))
            };

            let fmt = fmt::layer()
                .with_test_writer()
                .with_ansi(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_target(false);

            let registry = tracing_subscriber::registry().with(filter).with(fmt);
            set_global_default(registry).expect("failed to init tracing for testing");
        });
    }
}

pub mod resolver {
    use std::net::IpAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::resolver::{Error, Resolve, ResolverResult};

    /// One scripted lookup: how long it blocks and whether it succeeds.
    #[derive(Debug, Clone)]
    pub enum Step {
        Resolve(Duration),
        Fail(Duration, &'static str),
    }

    /// Plays a script of lookups; calls beyond the end of the script start over.
    #[derive(Debug)]
    pub struct ScriptedResolver {
        steps: Vec<Step>,
        calls: AtomicUsize,
        hosts: Mutex<Vec<String>>,
    }

    impl ScriptedResolver {
        pub fn new(steps: Vec<Step>) -> ScriptedResolver {
            assert!(!steps.is_empty(), "script must not be empty");
            ScriptedResolver {
                steps,
                calls: AtomicUsize::new(0),
                hosts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn hosts(&self) -> Vec<String> {
            self.hosts.lock().expect("hosts lock poisoned").clone()
        }
    }

    impl Resolve for ScriptedResolver {
        fn lookup(&self, host: &str) -> ResolverResult<Vec<IpAddr>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.hosts.lock().expect("hosts lock poisoned").push(host.to_string());

            match &self.steps[call % self.steps.len()] {
                Step::Resolve(latency) => {
                    std::thread::sleep(*latency);
                    Ok(vec![IpAddr::from([127, 0, 0, 1])])
                }
                Step::Fail(latency, reason) => {
                    std::thread::sleep(*latency);
                    Err(Error::LookupError {
                        reason: reason.to_string(),
                    })
                }
            }
        }
    }
}

pub mod gauge {
    use std::net::IpAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::resolver::{Resolve, ResolverResult};

    /// Blocks every lookup for a fixed time and tracks how many lookups were in flight at most.
    #[derive(Debug)]
    pub struct GaugeResolver {
        latency: Duration,
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl GaugeResolver {
        pub fn new(latency: Duration) -> GaugeResolver {
            GaugeResolver {
                latency,
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }

        pub fn peak(&self) -> usize {
            self.peak.load(Ordering::SeqCst)
        }
    }

    impl Resolve for GaugeResolver {
        fn lookup(&self, _host: &str) -> ResolverResult<Vec<IpAddr>> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(self.latency);
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            Ok(vec![IpAddr::from([127, 0, 0, 1])])
        }
    }
}
