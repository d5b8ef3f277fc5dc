//! Include graph construction and cycle detection.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::compile_db::TranslationUnit;
use crate::paths::{common_path, is_header, is_project_path, relative_display, resolve};
use crate::report::UnresolvedInclude;
use crate::scan::{count_defines, parse_includes, resolve_include, IncludeDirective, IncludeKind};

/// Directed header graph. Ordered maps keep traversal deterministic.
#[derive(Debug, Default, Clone)]
pub struct IncludeGraph {
    edges: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
}

impl IncludeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: PathBuf) {
        self.edges.entry(node).or_default();
    }

    pub fn add_edge(&mut self, from: PathBuf, to: PathBuf) {
        self.edges.entry(from).or_default().insert(to);
    }

    pub fn contains(&self, node: &Path) -> bool {
        self.edges.contains_key(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PathBuf> {
        self.edges.keys()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every node that lies on a cycle: members of a strongly connected
    /// component with more than one node, plus self-includes.
    ///
    /// Edges to nodes that were never added are ignored.
    pub fn cycle_nodes(&self) -> BTreeSet<PathBuf> {
        let mut tarjan = Tarjan {
            graph: self,
            index: 0,
            indices: FxHashMap::default(),
            lowlinks: FxHashMap::default(),
            stack: Vec::new(),
            on_stack: FxHashSet::default(),
            cycle_nodes: BTreeSet::new(),
        };
        for node in self.edges.keys() {
            if !tarjan.indices.contains_key(node.as_path()) {
                tarjan.visit(node);
            }
        }
        tarjan.cycle_nodes
    }
}

struct Tarjan<'a> {
    graph: &'a IncludeGraph,
    index: usize,
    indices: FxHashMap<&'a Path, usize>,
    lowlinks: FxHashMap<&'a Path, usize>,
    stack: Vec<&'a Path>,
    on_stack: FxHashSet<&'a Path>,
    cycle_nodes: BTreeSet<PathBuf>,
}

impl<'a> Tarjan<'a> {
    fn visit(&mut self, node: &'a Path) {
        self.indices.insert(node, self.index);
        self.lowlinks.insert(node, self.index);
        self.index += 1;
        self.stack.push(node);
        self.on_stack.insert(node);

        let graph = self.graph;
        let children = graph.edges.get(node).into_iter().flatten();
        for child in children {
            let child = child.as_path();
            if !graph.contains(child) {
                continue;
            }
            if child == node {
                self.cycle_nodes.insert(node.to_path_buf());
            }
            if !self.indices.contains_key(child) {
                self.visit(child);
                let low = self.lowlinks[child].min(self.lowlinks[node]);
                self.lowlinks.insert(node, low);
            } else if self.on_stack.contains(child) {
                let low = self.indices[child].min(self.lowlinks[node]);
                self.lowlinks.insert(node, low);
            }
        }

        if self.lowlinks[node] == self.indices[node] {
            let mut component = Vec::new();
            while let Some(member) = self.stack.pop() {
                self.on_stack.remove(member);
                component.push(member);
                if member == node {
                    break;
                }
            }
            if component.len() > 1 {
                self.cycle_nodes
                    .extend(component.into_iter().map(Path::to_path_buf));
            }
        }
    }
}

/// Include spellings counted in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct TokenCounter {
    counts: Vec<(String, usize)>,
    positions: FxHashMap<String, usize>,
}

impl TokenCounter {
    pub fn bump(&mut self, token: String) {
        match self.positions.get(&token) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.positions.insert(token.clone(), self.counts.len());
                self.counts.push((token, 1));
            }
        }
    }

    pub fn get(&self, token: &str) -> usize {
        self.positions
            .get(token)
            .map(|&pos| self.counts[pos].1)
            .unwrap_or(0)
    }

    /// Tokens by descending count; ties keep first-seen order.
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(token, count)| (token.as_str(), *count))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

/// Common ancestor of every existing path, or `fallback` when none exist.
pub fn infer_project_root(paths: &[PathBuf], fallback: &Path) -> PathBuf {
    let existing: Vec<PathBuf> = paths.iter().filter(|p| p.exists()).cloned().collect();
    match common_path(&existing) {
        Some(common) if common.is_file() => common
            .parent()
            .map(resolve)
            .unwrap_or_else(|| resolve(&common)),
        Some(common) => resolve(&common),
        None => resolve(fallback),
    }
}

/// Everything learned while walking includes from the translation units.
#[derive(Debug, Default)]
pub struct IncludeScan {
    pub tokens: TokenCounter,
    pub include_frequency: FxHashMap<PathBuf, usize>,
    pub unresolved: Vec<UnresolvedInclude>,
    pub graph: IncludeGraph,
    pub macro_counts: FxHashMap<PathBuf, usize>,
    pub scanned: FxHashSet<PathBuf>,
}

impl IncludeScan {
    /// Breadth-first walk from every TU through project headers.
    ///
    /// TU includes resolve against that TU's include dirs; header includes
    /// resolve against the union of all include dirs.
    pub fn run(tus: &[TranslationUnit], all_include_dirs: &[PathBuf], project_root: &Path) -> Self {
        let mut scan = IncludeScan::default();
        let mut queue: VecDeque<PathBuf> = VecDeque::new();

        for tu in tus {
            tracing::debug!("Scanning translation unit {:?}", tu.path);
            for directive in parse_includes(&tu.path) {
                let Some(resolved) = scan.resolve(&directive, &tu.path, &tu.include_dirs, project_root)
                else {
                    continue;
                };
                if is_header(&resolved) {
                    *scan.include_frequency.entry(resolved.clone()).or_insert(0) += 1;
                    if is_project_path(&resolved, project_root) {
                        queue.push_back(resolved);
                    }
                }
            }
        }

        while let Some(header) = queue.pop_front() {
            if scan.scanned.contains(&header) || !header.exists() {
                continue;
            }
            tracing::debug!("Scanning header {:?}", header);
            scan.scanned.insert(header.clone());
            scan.graph.add_node(header.clone());
            scan.macro_counts.insert(header.clone(), count_defines(&header));

            for directive in parse_includes(&header) {
                let Some(resolved) = scan.resolve(&directive, &header, all_include_dirs, project_root)
                else {
                    continue;
                };
                if !is_header(&resolved) {
                    continue;
                }
                *scan.include_frequency.entry(resolved.clone()).or_insert(0) += 1;
                if is_project_path(&resolved, project_root) {
                    scan.graph.add_edge(header.clone(), resolved.clone());
                    queue.push_back(resolved);
                }
            }
        }

        scan
    }

    /// Counts the token and resolves it, recording unresolved quote includes.
    fn resolve(
        &mut self,
        directive: &IncludeDirective,
        from: &Path,
        include_dirs: &[PathBuf],
        project_root: &Path,
    ) -> Option<PathBuf> {
        self.tokens.bump(directive.token());
        let resolved = resolve_include(directive, from, include_dirs);
        if resolved.is_none() && directive.kind == IncludeKind::Quote {
            self.unresolved.push(UnresolvedInclude {
                from: relative_display(from, project_root),
                include: directive.token(),
            });
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn test_two_node_cycle() {
        let mut g = IncludeGraph::new();
        g.add_edge(p("/r/a.h"), p("/r/b.h"));
        g.add_edge(p("/r/b.h"), p("/r/a.h"));
        g.add_edge(p("/r/c.h"), p("/r/a.h"));
        g.add_node(p("/r/c.h"));

        let cycle = g.cycle_nodes();
        assert!(cycle.contains(&p("/r/a.h")));
        assert!(cycle.contains(&p("/r/b.h")));
        assert!(!cycle.contains(&p("/r/c.h")));

        // c reaches the cycle through a cross edge and is reached from it
        let mut g = IncludeGraph::new();
        g.add_edge(p("/r/a.h"), p("/r/b.h"));
        g.add_edge(p("/r/b.h"), p("/r/a.h"));
        g.add_edge(p("/r/a.h"), p("/r/c.h"));
        g.add_edge(p("/r/c.h"), p("/r/b.h"));

        let cycle = g.cycle_nodes();
        assert_eq!(cycle.len(), 3);
        assert!(cycle.contains(&p("/r/c.h")));
    }

    #[test]
    fn test_self_include_and_dag() {
        let mut g = IncludeGraph::new();
        g.add_edge(p("/r/self.h"), p("/r/self.h"));
        g.add_edge(p("/r/a.h"), p("/r/b.h"));
        g.add_edge(p("/r/b.h"), p("/r/c.h"));
        g.add_node(p("/r/c.h"));
        g.add_edge(p("/r/a.h"), p("/r/c.h"));

        let cycle = g.cycle_nodes();
        assert_eq!(cycle.len(), 1);
        assert!(cycle.contains(&p("/r/self.h")));
    }

    #[test]
    fn test_edges_to_unknown_nodes_ignored() {
        let mut g = IncludeGraph::new();
        g.add_edge(p("/r/a.h"), p("/r/ghost.h"));
        assert!(g.cycle_nodes().is_empty());
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_token_counter_order() {
        let mut tokens = TokenCounter::default();
        for t in ["\"a.h\"", "<vector>", "<map>", "<vector>", "<map>", "<string>"] {
            tokens.bump(t.to_string());
        }
        assert_eq!(tokens.get("<vector>"), 2);
        assert_eq!(tokens.get("<list>"), 0);
        assert_eq!(
            tokens.most_common(),
            vec![("<vector>", 2), ("<map>", 2), ("\"a.h\"", 1), ("<string>", 1)]
        );
    }
}
