//! The query abstraction and argument binding.

use domain::StateSnapshot;

/// A pure derivation of a value from a state snapshot.
///
/// Every `Fn(&StateSnapshot) -> T` is a query, so plain projections are
/// just functions. Queries that need an argument are built with [`Bound`].
pub trait Query {
    /// The derived value.
    type Output;

    /// Evaluates the query against a snapshot.
    fn apply(&self, snapshot: &StateSnapshot) -> Self::Output;

    /// Post-processes the output of this query.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map { query: self, f }
    }
}

impl<F, T> Query for F
where
    F: Fn(&StateSnapshot) -> T,
{
    type Output = T;

    fn apply(&self, snapshot: &StateSnapshot) -> T {
        self(snapshot)
    }
}

/// A query with its argument already bound.
///
/// Binding only stores the argument; nothing is validated and no snapshot is
/// touched until [`Query::apply`]. The same bound query can be applied to
/// any number of snapshots.
pub struct Bound<A, T> {
    arg: A,
    select: fn(&A, &StateSnapshot) -> T,
}

impl<A, T> Bound<A, T> {
    /// Binds `arg` to a selection function.
    pub fn new(arg: A, select: fn(&A, &StateSnapshot) -> T) -> Self {
        Self { arg, select }
    }

    /// Returns the bound argument.
    pub fn arg(&self) -> &A {
        &self.arg
    }
}

impl<A, T> Query for Bound<A, T> {
    type Output = T;

    fn apply(&self, snapshot: &StateSnapshot) -> T {
        (self.select)(&self.arg, snapshot)
    }
}

impl<A: Clone, T> Clone for Bound<A, T> {
    fn clone(&self) -> Self {
        Self {
            arg: self.arg.clone(),
            select: self.select,
        }
    }
}

impl<A: std::fmt::Debug, T> std::fmt::Debug for Bound<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bound")
            .field("arg", &self.arg)
            .finish_non_exhaustive()
    }
}

/// A query followed by a transformation of its output.
#[derive(Clone)]
pub struct Map<Q, F> {
    query: Q,
    f: F,
}

impl<Q, F, U> Query for Map<Q, F>
where
    Q: Query,
    F: Fn(Q::Output) -> U,
{
    type Output = U;

    fn apply(&self, snapshot: &StateSnapshot) -> U {
        (self.f)(self.query.apply(snapshot))
    }
}
