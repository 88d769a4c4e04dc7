/*
Typed run-length coding. The input is scanned once, left to right, keeping the symbol of
the current run and how many times we have seen it. When a different symbol shows up the
finished run is handed out and a new run starts with a count of one. Whatever run is
pending when the input ends is handed out last.

Runs produced this way are maximal: two neighbouring runs never carry the same symbol,
otherwise the scan would have merged them.
*/

/// Anything that can be run-length coded. Only equality is needed to find runs.
pub trait Symbol: Copy + Eq {}

impl<T: Copy + Eq> Symbol for T {}

/// One counted run: `count` copies of `symbol`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Run<S> {
    pub count: usize,
    pub symbol: S,
}

impl<S: Symbol> Run<S> {
    pub fn new(count: usize, symbol: S) -> Self {
        Self { count, symbol }
    }
}

/// Iterator over the maximal runs of a slice.
pub struct Runs<'a, S> {
    input: &'a [S],
    index: usize,
}

impl<'a, S: Symbol> Runs<'a, S> {
    pub fn new(input: &'a [S]) -> Self {
        Runs { input, index: 0 }
    }
}

impl<'a, S: Symbol> Iterator for Runs<'a, S> {
    type Item = Run<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let symbol = *self.input.get(self.index)?;
        // Count how many identical symbols follow the first one.
        let count = 1 + self.input[self.index + 1..]
            .iter()
            .position(|&s| s != symbol)
            .unwrap_or(self.input.len() - self.index - 1);
        self.index += count;
        Some(Run { count, symbol })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.input.len() - self.index;
        (left.min(1), Some(left))
    }
}

/// Encode the input as a vec of maximal runs. Empty input gives no runs.
pub fn encode_runs<S: Symbol>(input: &[S]) -> Vec<Run<S>> {
    Runs::new(input).collect()
}

/// Expand runs back into the symbols they stand for. The output grows as runs are
/// expanded; counts from untrusted input should be bounded first (see wire::decode_bytes).
pub fn decode_runs<S: Symbol>(runs: &[Run<S>]) -> Vec<S> {
    let mut out = Vec::new();
    for run in runs {
        out.extend(std::iter::repeat(run.symbol).take(run.count));
    }
    out
}

/// Total number of symbols the runs expand to, or None if that overflows usize.
pub fn expanded_len<S: Symbol>(runs: &[Run<S>]) -> Option<usize> {
    runs.iter().try_fold(0_usize, |total, r| total.checked_add(r.count))
}

/// True when every run has a count of at least one and no two neighbours share a symbol.
pub fn is_maximal<S: Symbol>(runs: &[Run<S>]) -> bool {
    runs.iter().all(|r| r.count > 0) && runs.windows(2).all(|w| w[0].symbol != w[1].symbol)
}
