// ============================================================================
// ordered.rs — OrderedProjectSuite: a resolved, topologically sound order
// ============================================================================
//
// Grounded on OrderedProjectSuite in project_suite.go: the outcome of a
// successful resolve_order, carrying the dependency graph alongside the
// order so that Filter (which needs the graph to compute closures) can be
// applied without re-resolving.
// ============================================================================

use crate::filter::Filter;
use crate::filtered::FilteredProjectSuite;
use crate::graph::DepGraph;
use crate::project::{Project, ProjectInfo};

pub struct OrderedProjectSuite {
    projects: Vec<Box<dyn Project>>,
    graph: DepGraph,
    /// Indices into `projects`, in provider-before-consumer order.
    order: Vec<usize>,
}

impl std::fmt::Debug for OrderedProjectSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedProjectSuite")
            .field("projects", &self.infos_in_original_order())
            .field("graph", &self.graph)
            .field("order", &self.order)
            .finish()
    }
}

impl OrderedProjectSuite {
    pub(crate) fn new(projects: Vec<Box<dyn Project>>, graph: DepGraph, order: Vec<usize>) -> Self {
        OrderedProjectSuite {
            projects,
            graph,
            order,
        }
    }

    /// The resolved build order, provider before consumer.
    pub fn order(&self) -> Vec<&dyn Project> {
        self.order.iter().map(|&i| self.projects[i].as_ref()).collect()
    }

    fn infos_in_original_order(&self) -> Vec<ProjectInfo> {
        self.projects.iter().map(|p| p.info()).collect()
    }

    /// Applies a sequence of filters left to right over a fresh
    /// all-excluded inclusion vector, then walks the resolved order keeping
    /// only included projects. Filter order matters; resolved order does
    /// not change.
    pub fn filter(self, filters: &[Filter]) -> FilteredProjectSuite {
        let infos = self.infos_in_original_order();
        let mut include = vec![false; infos.len()];
        for f in filters {
            f.apply(&infos, &self.graph, &mut include);
        }

        let kept_order: Vec<usize> = self
            .order
            .iter()
            .copied()
            .filter(|&i| include[i])
            .collect();

        FilteredProjectSuite::new(self.projects, kept_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_sink::RecordingSink;
    use crate::project::test_support::StubProject;
    use crate::suite::ProjectSuite;

    fn resolved(projects: Vec<StubProject>) -> OrderedProjectSuite {
        let suite = ProjectSuite::new(
            projects
                .into_iter()
                .map(|p| Box::new(p) as Box<dyn Project>)
                .collect(),
        );
        let mut log = RecordingSink::new();
        suite.resolve_order(&mut log).unwrap()
    }

    // a <- b <- c  (a builds "a", b uses a/builds b, c uses b/builds c)
    fn chain() -> OrderedProjectSuite {
        resolved(vec![
            StubProject::new("a", vec!["a"], vec![]),
            StubProject::new("b", vec!["b"], vec!["a"]),
            StubProject::new("c", vec!["c"], vec!["b"]),
        ])
    }

    #[test]
    fn exactly_filter_keeps_just_that_project() {
        let suite = chain();
        let filtered = suite.filter(&[Filter::Exactly("b".into())]);
        let names: Vec<_> = filtered.order().iter().map(|p| p.info().name).collect();
        assert_eq!(names, vec!["b".to_string()]);
    }

    #[test]
    fn with_deps_filter_keeps_upstream_closure_in_build_order() {
        let suite = chain();
        let filtered = suite.filter(&[Filter::WithDeps("c".into())]);
        let names: Vec<_> = filtered.order().iter().map(|p| p.info().name).collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn with_deps_dependents_exclude_composition() {
        let suite = chain();
        let filtered = suite.filter(&[
            Filter::WithDeps("b".into()),
            Filter::WithDependents("b".into()),
            Filter::Exclude("b".into()),
        ]);
        let names: Vec<_> = filtered.order().iter().map(|p| p.info().name).collect();
        assert_eq!(names, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn no_filters_keeps_everything_in_resolved_order() {
        let suite = chain();
        let filtered = suite.filter(&[]);
        let names: Vec<_> = filtered.order().iter().map(|p| p.info().name).collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
    }
}
