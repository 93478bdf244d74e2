use crate::net::{Host, Port, Scheme};
use crate::path::Path;
use crate::pattern::SinglePattern;
use crate::pattern::render::FieldSlices;
use hashbrown::HashSet as FastHashSet;
use std::iter::FusedIterator;

const HOST: usize = 0;
const CONTEXT_PATH: usize = 1;
const PREFIX: usize = 2;
const PORT: usize = 3;
const SCHEME: usize = 4;

// Host is the outermost field and scheme the innermost.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    schemes: Option<&'a [Scheme]>,
    hosts: Option<&'a [Host]>,
    ports: Option<&'a [Port]>,
    context_paths: Option<&'a [Path]>,
    prefixes: Option<&'a [Path]>,
    radix: [usize; 5],
    cursor: [usize; 5],
    remaining: usize,
}

impl<'a> Combinations<'a> {
    pub(crate) fn new(fields: FieldSlices<'a>, count: usize) -> Self {
        let width = |len: Option<usize>| len.unwrap_or(1);
        let mut radix = [1; 5];
        radix[HOST] = width(fields.hosts.map(<[_]>::len));
        radix[CONTEXT_PATH] = width(fields.context_paths.map(<[_]>::len));
        radix[PREFIX] = width(fields.prefixes.map(<[_]>::len));
        radix[PORT] = width(fields.ports.map(<[_]>::len));
        radix[SCHEME] = width(fields.schemes.map(<[_]>::len));

        Self {
            schemes: fields.schemes,
            hosts: fields.hosts,
            ports: fields.ports,
            context_paths: fields.context_paths,
            prefixes: fields.prefixes,
            radix,
            cursor: [0; 5],
            remaining: count,
        }
    }

    fn advance(&mut self) {
        for dim in (0..self.cursor.len()).rev() {
            self.cursor[dim] += 1;
            if self.cursor[dim] < self.radix[dim] {
                return;
            }
            self.cursor[dim] = 0;
        }
    }
}

fn pick<T: Clone>(values: Option<&[T]>, idx: usize) -> Option<T> {
    values.map(|values| values[idx].clone())
}

impl Iterator for Combinations<'_> {
    type Item = SinglePattern;

    fn next(&mut self) -> Option<SinglePattern> {
        if self.remaining == 0 {
            return None;
        }

        let single = SinglePattern::from_parts(
            pick(self.schemes, self.cursor[SCHEME]),
            pick(self.hosts, self.cursor[HOST]),
            pick(self.ports, self.cursor[PORT]),
            pick(self.context_paths, self.cursor[CONTEXT_PATH]),
            pick(self.prefixes, self.cursor[PREFIX]),
        );
        self.remaining -= 1;
        self.advance();
        Some(single)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

impl FusedIterator for Combinations<'_> {}

pub(crate) fn combination_count(cardinalities: [usize; 5]) -> Option<usize> {
    cardinalities
        .iter()
        .try_fold(1usize, |acc, &len| acc.checked_mul(len.max(1)))
}

pub(crate) fn debug_check(
    combinations: &[SinglePattern],
    expected: usize,
    primary: &SinglePattern,
) {
    debug_assert_eq!(
        combinations.len(),
        expected,
        "unexpected number of combinations"
    );
    debug_assert!(
        combinations.first() == Some(primary),
        "primary must be the first combination: {primary}"
    );
    if cfg!(debug_assertions) {
        let mut seen = FastHashSet::with_capacity(combinations.len());
        for single in combinations {
            assert!(
                seen.insert(single),
                "unexpected duplicate combination: {single}"
            );
        }
    }
}
