// ============================================================================
// filtered.rs — FilteredProjectSuite: the final build-ready subsequence
// ============================================================================
//
// Grounded on the tail of project_suite.go's Filter/Order pair: after
// filters run, what's left is an order-preserving subsequence of the
// resolved order, ready to hand to a build loop.
// ============================================================================

use crate::project::Project;

pub struct FilteredProjectSuite {
    projects: Vec<Box<dyn Project>>,
    /// Indices into `projects`, already order-preserving w.r.t. the
    /// resolved build order.
    order: Vec<usize>,
}

impl FilteredProjectSuite {
    pub(crate) fn new(projects: Vec<Box<dyn Project>>, order: Vec<usize>) -> Self {
        FilteredProjectSuite { projects, order }
    }

    pub fn order(&self) -> Vec<&dyn Project> {
        self.order.iter().map(|&i| self.projects[i].as_ref()).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consumes the suite into the owned project sequence BuildSession::run
    /// expects, in final build order.
    pub fn into_build_order(self) -> Vec<Box<dyn Project>> {
        let FilteredProjectSuite { mut projects, order } = self;
        // Take ownership of each project in order; later indices would be
        // invalidated by earlier removals, so pull from the back.
        let mut slots: Vec<Option<Box<dyn Project>>> = projects.drain(..).map(Some).collect();
        order
            .into_iter()
            .map(|i| slots[i].take().expect("each index used at most once"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::test_support::StubProject;

    #[test]
    fn into_build_order_preserves_filtered_order() {
        let projects: Vec<Box<dyn Project>> = vec![
            Box::new(StubProject::new("a", vec!["a"], vec![])),
            Box::new(StubProject::new("b", vec!["b"], vec![])),
            Box::new(StubProject::new("c", vec!["c"], vec![])),
        ];
        let suite = FilteredProjectSuite::new(projects, vec![2, 0]);
        let order = suite.into_build_order();
        let names: Vec<_> = order.iter().map(|p| p.info().name).collect();
        assert_eq!(names, vec!["c".to_string(), "a".to_string()]);
    }
}
