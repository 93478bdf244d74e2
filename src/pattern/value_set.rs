use hashbrown::HashSet as FastHashSet;
use smallvec::SmallVec;
use std::borrow::Borrow;
use std::hash::Hash;

// Sets larger than this keep a hash index next to the ordered values.
const INDEX_THRESHOLD: usize = 8;

// Distinct values of one field in first-seen order.
#[derive(Debug, Clone)]
pub(crate) struct ValueSet<T: Eq + Hash> {
    items: SmallVec<[T; 4]>,
    index: Option<FastHashSet<T>>,
}

impl<T: Clone + Eq + Hash> ValueSet<T> {
    pub(crate) fn collect<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut items: SmallVec<[T; 4]> = SmallVec::new();
        let mut seen = FastHashSet::new();
        for value in values {
            if seen.insert(value.clone()) {
                items.push(value);
            }
        }

        if items.is_empty() {
            return None;
        }

        let index = (items.len() > INDEX_THRESHOLD).then_some(seen);
        Some(Self { items, index })
    }

    pub(crate) fn sort_by(&mut self, cmp: impl FnMut(&T, &T) -> std::cmp::Ordering) {
        self.items.sort_by(cmp);
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.index {
            Some(index) => index.get(value),
            None => self.items.iter().find(|item| Borrow::<Q>::borrow(*item) == value),
        }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(value).is_some()
    }

    pub fn first(&self) -> &T {
        &self.items[0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

// Order-insensitive.
impl<T: Clone + Eq + Hash> PartialEq for ValueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Clone + Eq + Hash> Eq for ValueSet<T> {}
