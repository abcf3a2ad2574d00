//! Fixed-size sets of candidates: segments, simplices and matrices given by
//! rows.

use std::ops::{Deref, Index, IndexMut, Mul};

use nalgebra::SMatrix;

use super::{
    base::Error,
    elementwise::Arithmetic,
    function::Function,
    point_value::PointValue,
    stats,
    vector::Vector,
};

/// A fixed-size ordered collection of `N` candidates.
///
/// `T` is usually [`Vector`] (a domain yet to be evaluated) or
/// [`PointValue`] (an evaluated domain). The set owns its storage and never
/// allocates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateSet<const N: usize, T> {
    items: [T; N],
}

/// Segment between two points, the domain of bracketing and descent methods.
pub type Segment<const DIM: usize> = CandidateSet<2, Vector<DIM>>;

/// Gradient of a function.
pub type Gradient<const DIM: usize> = Vector<DIM>;

/// Hessian matrix of a function, stored by rows.
pub type Hessian<const DIM: usize> = CandidateSet<DIM, Vector<DIM>>;

impl<const N: usize, T> CandidateSet<N, T> {
    const NOT_EMPTY: () = assert!(N > 0, "candidate set must not be empty");

    /// Creates a set from its items.
    pub fn new(items: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NOT_EMPTY;
        Self { items }
    }

    /// Creates a set by calling `f` for every index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(std::array::from_fn(f))
    }

    /// Number of candidates in the set.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        N
    }

    /// Items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Unwraps the items.
    pub fn into_inner(self) -> [T; N] {
        self.items
    }

    /// Applies `f` to every item.
    pub fn map<U, F>(self, f: F) -> CandidateSet<N, U>
    where
        F: FnMut(T) -> U,
    {
        CandidateSet::new(self.items.map(f))
    }
}

impl<const N: usize, T: Arithmetic> CandidateSet<N, T> {
    /// Elementwise average of the items.
    pub fn mean(&self) -> T {
        stats::mean(&self.items)
    }

    /// Returns `(mean, variance)` of the items, elementwise.
    pub fn dispersion(&self) -> (T, T) {
        stats::dispersion(&self.items)
    }

    /// The convergence test on this set; see [`stats::is_converged`].
    pub fn is_converged(&self, abs_tol: f64, rel_tol: f64) -> Result<bool, Error> {
        stats::is_converged(&self.items, abs_tol, rel_tol)
    }
}

impl<const N: usize, const DIM: usize> CandidateSet<N, Vector<DIM>> {
    /// Evaluates `f` at every point.
    pub fn evaluate<F>(&self, f: &F) -> CandidateSet<N, PointValue<DIM>>
    where
        F: Function<DIM> + ?Sized,
    {
        CandidateSet::from_fn(|i| PointValue::evaluate(self.items[i], f))
    }

    /// Pairs every point with the corresponding value from `values`.
    pub fn with_values(&self, values: [f64; N]) -> CandidateSet<N, PointValue<DIM>> {
        CandidateSet::from_fn(|i| PointValue::new(self.items[i], values[i]))
    }

    /// Builds a simplex of `DIM + 1` vertices: `center` and `center + step *
    /// e_j` for every axis `j`.
    ///
    /// Using this constructor with `N != DIM + 1` fails to compile.
    pub fn simplex_around(center: Vector<DIM>, step: f64) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIMPLEX;
        Self::from_fn(|i| {
            if i == 0 {
                center
            } else {
                center + Vector::unit(i - 1) * step
            }
        })
    }

    pub(crate) const SIMPLEX: () = assert!(N == DIM + 1, "simplex must have dim + 1 vertices");

    /// Converts the rows into an nalgebra matrix.
    pub fn to_matrix(&self) -> SMatrix<f64, N, DIM> {
        SMatrix::from_fn(|i, j| self.items[i][j])
    }

    /// Creates the set from the rows of an nalgebra matrix.
    pub fn from_matrix(matrix: &SMatrix<f64, N, DIM>) -> Self {
        Self::from_fn(|i| Vector::from_fn(|j| matrix[(i, j)]))
    }
}

impl<const DIM: usize> CandidateSet<DIM, Vector<DIM>> {
    /// Square matrix with `values` on the diagonal and zeros elsewhere.
    pub fn diagonal(values: [f64; DIM]) -> Self {
        Self::from_fn(|i| Vector::unit(i) * values[i])
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::diagonal([1.0; DIM])
    }

    /// Transposed matrix.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|i| Vector::from_fn(|j| self.items[j][i]))
    }
}

/// Matrix-vector product, the set being the rows of the matrix.
impl<const N: usize, const DIM: usize> Mul<Vector<DIM>> for &CandidateSet<N, Vector<DIM>> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<DIM>) -> Vector<N> {
        Vector::from_fn(|i| self.items[i].dot(&rhs))
    }
}

impl<const N: usize, const DIM: usize> CandidateSet<N, PointValue<DIM>> {
    /// The points without their values.
    pub fn points(&self) -> CandidateSet<N, Vector<DIM>> {
        CandidateSet::from_fn(|i| self.items[i].vector())
    }

    /// Sorts the items by value, ascending. Ties keep their order.
    pub fn sort_by_value(&mut self) {
        self.items.sort_by(PointValue::cmp_by_value);
    }

    /// Sorts the set by value; see [`Sorted`].
    pub fn into_sorted(self) -> Sorted<N, DIM> {
        Sorted::new(self)
    }
}

impl<const N: usize, T> From<[T; N]> for CandidateSet<N, T> {
    fn from(items: [T; N]) -> Self {
        Self::new(items)
    }
}

impl<const N: usize, T> Index<usize> for CandidateSet<N, T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.items[i]
    }
}

impl<const N: usize, T> IndexMut<usize> for CandidateSet<N, T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.items[i]
    }
}

impl<'a, const N: usize, T> IntoIterator for &'a CandidateSet<N, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<const N: usize, T: Default> Default for CandidateSet<N, T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

/// A set of point-values sorted by value, best (lowest) first.
///
/// The ordering is established on construction and the wrapper gives only
/// read access, so it cannot be broken afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sorted<const N: usize, const DIM: usize>(CandidateSet<N, PointValue<DIM>>);

impl<const N: usize, const DIM: usize> Sorted<N, DIM> {
    /// Sorts `set` by value.
    pub fn new(mut set: CandidateSet<N, PointValue<DIM>>) -> Self {
        set.sort_by_value();
        Self(set)
    }

    /// The candidate with the lowest value.
    pub fn best(&self) -> &PointValue<DIM> {
        &self.0[0]
    }

    /// The candidate with the highest value.
    pub fn worst(&self) -> &PointValue<DIM> {
        &self.0[N - 1]
    }

    /// Unwraps the sorted set.
    pub fn into_inner(self) -> CandidateSet<N, PointValue<DIM>> {
        self.0
    }
}

impl<const N: usize, const DIM: usize> Deref for Sorted<N, DIM> {
    type Target = CandidateSet<N, PointValue<DIM>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::functions::Sphere;

    #[test]
    fn mean_of_identical_items() {
        let v = Vector::new([0.7, 3.3, 1.1]);
        let set = CandidateSet::new([v; 3]);

        assert_eq!(set.mean(), v);
        let (avg, variance) = set.dispersion();
        assert_eq!(avg, v);
        assert_eq!(variance, Vector::zeros());
        assert_eq!(CandidateSet::new([v; 7]).mean(), v);
    }

    #[test]
    fn mean_of_point_values() {
        let set = CandidateSet::new([
            PointValue::new(Vector::new([0.0, 0.0]), 1.0),
            PointValue::new(Vector::new([2.0, 4.0]), 3.0),
        ]);

        assert_eq!(set.mean(), PointValue::new(Vector::new([1.0, 2.0]), 2.0));
    }

    #[test]
    fn evaluate_and_points() {
        let f = Sphere::<2>::new();
        let set = CandidateSet::new([Vector::new([1.0, 2.0]), Vector::new([0.0, 3.0])]);
        let evaluated = set.evaluate(&f);

        assert_eq!(evaluated[0].value(), 5.0);
        assert_eq!(evaluated[1].value(), 9.0);
        assert_eq!(evaluated.points(), set);
    }

    #[test]
    fn sorted_by_value() {
        let set = CandidateSet::new([
            PointValue::new(Vector::new([0.0]), 3.0),
            PointValue::new(Vector::new([1.0]), 1.0),
            PointValue::new(Vector::new([2.0]), 2.0),
        ]);
        let sorted = set.into_sorted();

        assert_eq!(sorted.best().value(), 1.0);
        assert_eq!(sorted.worst().value(), 3.0);
        assert_eq!(sorted[1].vector(), Vector::new([2.0]));
    }

    #[test]
    fn simplex_around_center() {
        let simplex = CandidateSet::<3, Vector<2>>::simplex_around(Vector::new([1.0, 1.0]), 0.5);

        assert_eq!(simplex[0], Vector::new([1.0, 1.0]));
        assert_eq!(simplex[1], Vector::new([1.5, 1.0]));
        assert_eq!(simplex[2], Vector::new([1.0, 1.5]));
    }

    #[test]
    fn matrix_vector_product() {
        let m: Hessian<2> = CandidateSet::new([Vector::new([1.0, 2.0]), Vector::new([3.0, 4.0])]);

        assert_eq!(&m * Vector::new([1.0, 1.0]), Vector::new([3.0, 7.0]));
        assert_eq!(&Hessian::<2>::identity() * Vector::new([5.0, 6.0]), Vector::new([5.0, 6.0]));
        assert_eq!(m.transpose()[0], Vector::new([1.0, 3.0]));
        assert_eq!(Hessian::from_matrix(&m.to_matrix()), m);
    }
}
