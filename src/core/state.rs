use super::{
    base::Error,
    candidate_set::{CandidateSet, Segment, Sorted},
    elementwise::Arithmetic,
    function::Function,
    point_value::PointValue,
    stats,
    vector::Vector,
};

/// The state of an optimization run: the current domain and the guess derived
/// from it.
///
/// A state is created from an initial domain and a function (the *active*
/// state), then repeatedly receives new domains from a [`Step`](super::Step)
/// through [`set_domain`](State::set_domain). The guess is the mean of the
/// evaluated domain and is recomputed on every update.
pub trait State {
    /// Element of the evaluated domain.
    type Candidate: Arithmetic;

    /// Evaluated domain accepted by [`set_domain`](State::set_domain).
    type Domain;

    /// The current best estimate.
    fn guess(&self) -> Self::Candidate;

    /// The evaluated domain as a slice.
    fn candidates(&self) -> &[Self::Candidate];

    /// Replaces the domain by an already evaluated one and recomputes the
    /// guess.
    fn set_domain(&mut self, domain: Self::Domain);

    /// Checks whether the domain has shrunk below the tolerances.
    ///
    /// Converged iff every component of the candidates (the spatial
    /// coordinates and the objective value) has its standard deviation below
    /// `abs_tol` or its coefficient of variation below `rel_tol`. See
    /// [`stats::is_converged`].
    fn is_converged(&self, abs_tol: f64, rel_tol: f64) -> Result<bool, Error> {
        stats::is_converged(self.candidates(), abs_tol, rel_tol)
    }
}

/// State over a segment of two points.
///
/// Used by one-dimensional bracketing methods, where the segment is the
/// bracket, and by descent methods, where it holds the previous and the
/// current iterate in this order.
///
/// The default value is an uninitialized state with a zero domain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointState<const DIM: usize> {
    domain: CandidateSet<2, PointValue<DIM>>,
    guess: PointValue<DIM>,
}

impl<const DIM: usize> PointState<DIM> {
    /// Evaluates `f` at both ends of `segment` and initializes the state.
    pub fn new<F>(segment: Segment<DIM>, f: &F) -> Self
    where
        F: Function<DIM> + ?Sized,
    {
        let mut state = Self::default();
        state.update_domain(segment, f);
        state
    }

    /// Re-evaluates `f` over `segment` and replaces the domain with it.
    pub fn update_domain<F>(&mut self, segment: Segment<DIM>, f: &F)
    where
        F: Function<DIM> + ?Sized,
    {
        self.set_domain(segment.evaluate(f));
    }

    /// The evaluated segment.
    pub fn domain(&self) -> &CandidateSet<2, PointValue<DIM>> {
        &self.domain
    }

    /// The segment without values.
    pub fn segment(&self) -> Segment<DIM> {
        self.domain.points()
    }

    /// The later of the two points, the current iterate of descent methods.
    pub fn current(&self) -> &PointValue<DIM> {
        &self.domain[1]
    }
}

impl<const DIM: usize> State for PointState<DIM> {
    type Candidate = PointValue<DIM>;
    type Domain = CandidateSet<2, PointValue<DIM>>;

    fn guess(&self) -> PointValue<DIM> {
        self.guess
    }

    fn candidates(&self) -> &[PointValue<DIM>] {
        self.domain.as_slice()
    }

    fn set_domain(&mut self, domain: Self::Domain) {
        self.domain = domain;
        self.guess = domain.mean();
    }
}

/// State over a simplex of `N = DIM + 1` vertices kept sorted by value.
///
/// Used by direct-search methods. Instantiating the state with `N != DIM + 1`
/// fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimplexState<const N: usize, const DIM: usize> {
    domain: Sorted<N, DIM>,
    guess: PointValue<DIM>,
}

impl<const N: usize, const DIM: usize> SimplexState<N, DIM> {
    /// Evaluates `f` at every vertex of `simplex` and initializes the state.
    pub fn new<F>(simplex: CandidateSet<N, Vector<DIM>>, f: &F) -> Self
    where
        F: Function<DIM> + ?Sized,
    {
        #[allow(clippy::let_unit_value)]
        let () = CandidateSet::<N, Vector<DIM>>::SIMPLEX;

        let mut state = Self::default();
        state.update_domain(simplex, f);
        state
    }

    /// Re-evaluates `f` over `simplex` and replaces the domain with it.
    pub fn update_domain<F>(&mut self, simplex: CandidateSet<N, Vector<DIM>>, f: &F)
    where
        F: Function<DIM> + ?Sized,
    {
        self.set_domain(simplex.evaluate(f));
    }

    /// The evaluated simplex, best vertex first.
    pub fn domain(&self) -> &Sorted<N, DIM> {
        &self.domain
    }

    /// The vertex with the lowest value.
    pub fn best(&self) -> &PointValue<DIM> {
        self.domain.best()
    }
}

impl<const N: usize, const DIM: usize> State for SimplexState<N, DIM> {
    type Candidate = PointValue<DIM>;
    type Domain = CandidateSet<N, PointValue<DIM>>;

    fn guess(&self) -> PointValue<DIM> {
        self.guess
    }

    fn candidates(&self) -> &[PointValue<DIM>] {
        self.domain.as_slice()
    }

    fn set_domain(&mut self, domain: Self::Domain) {
        self.domain = domain.into_sorted();
        self.guess = self.domain.mean();
    }
}
