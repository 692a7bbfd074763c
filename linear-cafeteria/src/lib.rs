//! Cafeteria pickup line.
//!
//! Customers join a FIFO [`Queue`], receive an estimated pickup time, and
//! either get served in order or give up and leave the line. Every change
//! to the line recomputes the estimates of everyone still waiting.
//!
//! Only the public queue contract is used; the cafeteria never sees list
//! nodes.
//!
//! # Example
//!
//! ```
//! use linear_cafeteria::{Cafeteria, CafeteriaConfig};
//!
//! let mut cafe = Cafeteria::new(CafeteriaConfig::default().with_service_minutes(1));
//! let ana = cafe.join("Ana");
//! let bruno = cafe.join("Bruno");
//! assert!(bruno.estimated_pickup > ana.estimated_pickup);
//!
//! assert_eq!(cafe.serve_next().map(|c| c.name), Some("Ana".to_string()));
//! assert!(cafe.give_up(&bruno));
//! assert!(cafe.is_empty());
//! ```

use core::fmt;

use chrono::{Duration, Local, NaiveDateTime};
use linear_collections::Queue;
use log::{debug, info, warn};

/// Time format used on the board and in log lines.
const PICKUP_FORMAT: &str = "%H:%M:%S";

/// Source of the current time.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> NaiveDateTime;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Cafeteria configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CafeteriaConfig {
    /// Average time to serve one customer.
    pub service_time: Duration,
}

impl Default for CafeteriaConfig {
    fn default() -> Self {
        Self {
            service_time: Duration::minutes(2),
        }
    }
}

impl CafeteriaConfig {
    /// Sets the average service time in whole minutes.
    #[must_use]
    pub fn with_service_minutes(mut self, minutes: u32) -> Self {
        self.service_time = Duration::minutes(i64::from(minutes));
        self
    }
}

/// A customer waiting for their order.
///
/// Two customers are the same customer when their ids match, whatever
/// their current estimate says.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Ticket number, unique per cafeteria.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// When the order is expected to be ready.
    pub estimated_pickup: NaiveDateTime,
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - pickup at {}",
            self.name,
            self.estimated_pickup.format(PICKUP_FORMAT)
        )
    }
}

/// A single pickup line.
pub struct Cafeteria<C: Clock = SystemClock> {
    line: Queue<Customer>,
    config: CafeteriaConfig,
    clock: C,
    next_id: u64,
}

impl Cafeteria<SystemClock> {
    /// Creates an empty line on the wall clock.
    pub fn new(config: CafeteriaConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Cafeteria<C> {
    /// Creates an empty line reading time from `clock`.
    pub fn with_clock(config: CafeteriaConfig, clock: C) -> Self {
        Self {
            line: Queue::new(),
            config,
            clock,
            next_id: 1,
        }
    }

    /// The clock this cafeteria reads.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &CafeteriaConfig {
        &self.config
    }

    /// Number of customers waiting.
    #[inline]
    pub fn len(&self) -> usize {
        self.line.len()
    }

    /// Returns `true` if nobody is waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    /// Time needed to serve everyone currently waiting.
    pub fn estimate_wait(&self) -> Duration {
        self.service_time_times(self.line.len())
    }

    /// Adds a customer at the back of the line and returns their ticket.
    ///
    /// The pickup estimate covers everyone ahead plus the customer's own
    /// service time.
    pub fn join(&mut self, name: impl Into<String>) -> Customer {
        let now = self.clock.now();
        let customer = Customer {
            id: self.next_id,
            name: name.into(),
            estimated_pickup: now + self.estimate_wait() + self.config.service_time,
        };
        self.next_id += 1;

        self.line.enqueue(customer.clone());
        info!(
            "{} joined the line at position {}, pickup at {}",
            customer.name,
            self.line.len(),
            customer.estimated_pickup.format(PICKUP_FORMAT)
        );
        customer
    }

    /// Serves the customer at the front of the line.
    ///
    /// Returns `None` if the line is empty.
    pub fn serve_next(&mut self) -> Option<Customer> {
        match self.line.dequeue() {
            Ok(customer) => {
                info!("{} was served", customer.name);
                self.refresh_estimates();
                Some(customer)
            }
            Err(err) => {
                warn!("nobody to serve: {err}");
                None
            }
        }
    }

    /// Removes `customer` from the line wherever they stand.
    ///
    /// Returns `false` if they were not waiting.
    pub fn give_up(&mut self, customer: &Customer) -> bool {
        if self.line.remove_item(customer) {
            info!("{} gave up and left the line", customer.name);
            self.refresh_estimates();
            true
        } else {
            warn!("{} is not in the line", customer.name);
            false
        }
    }

    /// Recomputes every pickup estimate from the current time.
    ///
    /// The k-th customer in line (1-based) is expected at
    /// `now + k * service_time`.
    pub fn refresh_estimates(&mut self) {
        let now = self.clock.now();
        let service_time = self.config.service_time;
        let mut ready_at = now;
        for customer in self.line.iter_mut() {
            ready_at += service_time;
            customer.estimated_pickup = ready_at;
            debug!(
                "{} new pickup estimate {}",
                customer.name,
                ready_at.format(PICKUP_FORMAT)
            );
        }
        info!("refreshed estimates for {} waiting", self.line.len());
    }

    /// Iterates over the line, front to back.
    pub fn waiting(&self) -> impl DoubleEndedIterator<Item = &Customer> + ExactSizeIterator {
        self.line.iter()
    }

    fn service_time_times(&self, count: usize) -> Duration {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        self.config.service_time * count
    }
}

impl<C: Clock> fmt::Display for Cafeteria<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line.is_empty() {
            return writeln!(f, "the line is empty");
        }
        for (i, customer) in self.waiting().enumerate() {
            writeln!(f, "{}. {customer}", i + 1)?;
        }
        Ok(())
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for Cafeteria<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cafeteria")
            .field("line", &self.line)
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("next_id", &self.next_id)
            .finish()
    }
}
