//! Adapter State Machines
//!
//! Plain data behind the reactive adapters. Every request takes a ticket;
//! only the ticket of the latest request may settle the state.

/// Identifies one request issued by an adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Read query status as seen by the render layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryStatus {
    /// Disabled or never run
    Idle,
    /// First fetch in flight, no data yet
    Loading,
    /// Latest fetch failed
    Error,
    /// Data available (possibly refetching in the background)
    Success,
}

/// State of a read query
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T, E> {
    data: Option<T>,
    error: Option<E>,
    fetching: bool,
    generation: u64,
}

impl<T, E> Default for QueryState<T, E> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            fetching: false,
            generation: 0,
        }
    }
}

impl<T, E> QueryState<T, E> {
    /// Mark a new fetch as in flight. Previous data is kept until it settles.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.fetching = true;
        Ticket(self.generation)
    }

    /// Apply a fetch result. Returns false (and changes nothing) for stale tickets.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.fetching = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        true
    }

    pub fn status(&self) -> QueryStatus {
        match (&self.data, &self.error, self.fetching) {
            (_, Some(_), false) => QueryStatus::Error,
            (Some(_), _, _) => QueryStatus::Success,
            (None, _, true) => QueryStatus::Loading,
            (None, None, false) => QueryStatus::Idle,
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }
}

/// Mutation status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationStatus {
    Idle,
    Pending,
    Error,
    Success,
}

/// State of a mutation; tracks only the latest call
#[derive(Clone, Debug, PartialEq)]
pub struct MutationState<T, E> {
    status: MutationStatus,
    data: Option<T>,
    error: Option<E>,
    generation: u64,
}

impl<T, E> Default for MutationState<T, E> {
    fn default() -> Self {
        Self {
            status: MutationStatus::Idle,
            data: None,
            error: None,
            generation: 0,
        }
    }
}

impl<T, E> MutationState<T, E> {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.status = MutationStatus::Pending;
        self.data = None;
        self.error = None;
        Ticket(self.generation)
    }

    /// Record the outcome of a call. Outcomes of superseded calls are ignored.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(data) => {
                self.status = MutationStatus::Success;
                self.data = Some(data);
            }
            Err(e) => {
                self.status = MutationStatus::Error;
                self.error = Some(e);
            }
        }
        true
    }

    pub fn status(&self) -> MutationStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == MutationStatus::Pending
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }
}
