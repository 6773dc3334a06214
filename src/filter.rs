// ============================================================================
// filter.rs — the four filter primitives over an inclusion vector
// ============================================================================
//
// A Filter is "given (projects, dependency graph, inclusion vector), mutate
// the inclusion vector". The crate realizes this as a tagged enum (a direct
// port of filter.go's four concrete types behind one Filter interface)
// rather than an extensible trait object, since the DSL's surface is closed
// (spec.md names exactly these four primitives).
// ============================================================================

use crate::graph::DepGraph;
use crate::project::ProjectInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Exactly(String),
    Exclude(String),
    WithDeps(String),
    WithDependents(String),
}

impl Filter {
    /// Mutates `include` in place. `graph` carries edges `provider ->
    /// consumer`, i.e. "dependents" direction, matching what
    /// OrderedProjectSuite builds from ProjectSuite::resolve_order.
    pub fn apply(&self, projects: &[ProjectInfo], graph: &DepGraph, include: &mut [bool]) {
        match self {
            Filter::Exactly(name) => {
                for (i, p) in projects.iter().enumerate() {
                    if &p.name == name {
                        include[i] = true;
                    }
                }
            }
            Filter::Exclude(name) => {
                for (i, p) in projects.iter().enumerate() {
                    if &p.name == name {
                        include[i] = false;
                    }
                }
            }
            Filter::WithDependents(name) => mark_closure(projects, graph, name, include),
            Filter::WithDeps(name) => {
                let transposed = graph.transpose();
                mark_closure(projects, &transposed, name, include);
            }
        }
    }
}

fn mark_closure(projects: &[ProjectInfo], graph: &DepGraph, name: &str, include: &mut [bool]) {
    for (i, p) in projects.iter().enumerate() {
        if p.name == name {
            for reached in graph.reachable_from(i) {
                include[reached] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infos(names: &[&str]) -> Vec<ProjectInfo> {
        names.iter().map(|n| ProjectInfo::new(*n, "0.1.0")).collect()
    }

    // a <- b <- c, d <- a  (edges provider -> consumer: a->b, b->c, a->d)
    fn sample_graph() -> (Vec<ProjectInfo>, DepGraph) {
        let projects = infos(&["a", "b", "c", "d"]);
        let mut g = DepGraph::new(4);
        g.add_edge(0, 1); // a -> b
        g.add_edge(1, 2); // b -> c
        g.add_edge(0, 3); // a -> d
        (projects, g)
    }

    #[test]
    fn exactly_marks_only_named_project() {
        let (projects, graph) = sample_graph();
        let mut include = vec![false; 4];
        Filter::Exactly("b".into()).apply(&projects, &graph, &mut include);
        assert_eq!(include, vec![false, true, false, false]);
    }

    #[test]
    fn exclude_clears_only_named_project() {
        let (projects, graph) = sample_graph();
        let mut include = vec![true; 4];
        Filter::Exclude("b".into()).apply(&projects, &graph, &mut include);
        assert_eq!(include, vec![true, false, true, true]);
    }

    #[test]
    fn with_dependents_marks_self_and_downstream() {
        let (projects, graph) = sample_graph();
        let mut include = vec![false; 4];
        Filter::WithDependents("b".into()).apply(&projects, &graph, &mut include);
        assert_eq!(include, vec![false, true, true, false]);
    }

    #[test]
    fn with_deps_marks_self_and_upstream() {
        let (projects, graph) = sample_graph();
        let mut include = vec![false; 4];
        Filter::WithDeps("c".into()).apply(&projects, &graph, &mut include);
        assert_eq!(include, vec![true, true, true, false]);
    }

    #[test]
    fn unknown_project_name_is_a_no_op() {
        let (projects, graph) = sample_graph();
        let mut include = vec![false; 4];
        Filter::Exactly("nope".into()).apply(&projects, &graph, &mut include);
        assert_eq!(include, vec![false, false, false, false]);
    }

    #[test]
    fn deps_then_dependents_then_exclude_drops_self_keeps_closure() {
        let (projects, graph) = sample_graph();
        let mut include = vec![false; 4];
        for f in [
            Filter::WithDeps("b".to_string()),
            Filter::WithDependents("b".to_string()),
            Filter::Exclude("b".to_string()),
        ] {
            f.apply(&projects, &graph, &mut include);
        }
        assert_eq!(include, vec![true, false, true, false]);
    }
}
